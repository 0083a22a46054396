//! Validation bounds and physiological constants
//!
//! Shared numeric limits for the energy formulas, exposed so form UIs can
//! mirror the exact ranges the engine enforces.

use tracing::debug;

// ============================================================================
// Input Validation Bounds
// ============================================================================

/// Minimum body weight in kilograms
pub const MIN_WEIGHT_KG: f64 = 30.0;
/// Maximum body weight in kilograms
pub const MAX_WEIGHT_KG: f64 = 300.0;
/// Minimum height in centimeters
pub const MIN_HEIGHT_CM: f64 = 100.0;
/// Maximum height in centimeters
pub const MAX_HEIGHT_CM: f64 = 250.0;
/// Minimum age in years
pub const MIN_AGE: i32 = 13;
/// Maximum age in years
pub const MAX_AGE: i32 = 120;

// ============================================================================
// Output Clamp Bounds
// ============================================================================

/// Lowest BMR the engine reports, in kcal/day
pub const MIN_BMR: u32 = 500;
/// Highest BMR the engine reports, in kcal/day
pub const MAX_BMR: u32 = 5000;
/// Lowest TDEE the engine reports, in kcal/day
pub const MIN_TDEE: u32 = 800;
/// Highest TDEE the engine reports, in kcal/day
pub const MAX_TDEE: u32 = 10000;
/// Minimum safe daily intake in kcal; goal targets never go below this
pub const MIN_GOAL_CALORIES: u32 = 1200;
/// Highest calorie target the engine reports, in kcal/day
pub const MAX_GOAL_CALORIES: u32 = 10000;

// ============================================================================
// Energy Densities
// ============================================================================

/// Calories per gram of protein
pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
/// Calories per gram of carbohydrate
pub const CARBS_KCAL_PER_G: f64 = 4.0;
/// Calories per gram of fat
pub const FAT_KCAL_PER_G: f64 = 9.0;

/// Clamp a computed kcal value into its reporting range
pub(crate) fn clamp_kcal(what: &'static str, value: i64, min: u32, max: u32) -> u32 {
    if value < min as i64 {
        debug!("{} {} below floor, reporting {}", what, value, min);
        min
    } else if value > max as i64 {
        debug!("{} {} above ceiling, reporting {}", what, value, max);
        max
    } else {
        value as u32
    }
}
