//! Nutrition goals and progress
//!
//! Daily calorie and macro targets, manual-override validation, and
//! consumed-versus-goal progress.

use serde::{Deserialize, Serialize};

use crate::energy::limits::{CARBS_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G};
use crate::energy::{CalorieResult, MacroResult};
use crate::error::{CalcError, CalcResult};
use super::DailySummary;

/// Lowest calorie target a user can set by hand
pub const MIN_MANUAL_CALORIES: u32 = 1200;
/// Highest calorie target a user can set by hand
pub const MAX_MANUAL_CALORIES: u32 = 5000;

/// Calorie share given to protein in the manual-override preview
const PROTEIN_SHARE: f64 = 0.30;
/// Calorie share given to carbohydrate in the manual-override preview
const CARBS_SHARE: f64 = 0.40;
/// Calorie share given to fat in the manual-override preview
const FAT_SHARE: f64 = 0.30;

/// Daily calorie and macro targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionGoals {
    pub calories: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

impl Default for NutritionGoals {
    /// Starting targets shown before onboarding completes
    fn default() -> Self {
        Self {
            calories: 2000,
            protein_g: 150,
            carbs_g: 200,
            fat_g: 65,
        }
    }
}

impl NutritionGoals {
    /// Targets from a computed calorie budget and macro allocation
    pub fn from_budget(calories: &CalorieResult, macros: &MacroResult) -> Self {
        Self {
            calories: calories.goal_calories,
            protein_g: macros.protein_g,
            carbs_g: macros.carbs_g,
            fat_g: macros.fat_g,
        }
    }
}

/// Check a hand-entered calorie target against the allowed range
pub fn validate_manual_calories(calories: u32) -> CalcResult<()> {
    if !(MIN_MANUAL_CALORIES..=MAX_MANUAL_CALORIES).contains(&calories) {
        return Err(CalcError::OutOfRange {
            field: "calories",
            value: calories as f64,
            min: MIN_MANUAL_CALORIES as f64,
            max: MAX_MANUAL_CALORIES as f64,
            unit: "kcal",
        });
    }
    Ok(())
}

/// Macro preview for a hand-entered calorie target
///
/// Splits the calories 30% protein, 40% carbohydrate, 30% fat at the
/// fixed 4/4/9 kcal per gram densities. Unlike the goal-aware
/// allocation, this ignores body weight entirely.
pub fn default_macro_split(calories: u32) -> MacroResult {
    let calories = calories as f64;
    MacroResult {
        protein_g: (calories * PROTEIN_SHARE / PROTEIN_KCAL_PER_G).round() as u32,
        carbs_g: (calories * CARBS_SHARE / CARBS_KCAL_PER_G).round() as u32,
        fat_g: (calories * FAT_SHARE / FAT_KCAL_PER_G).round() as u32,
    }
}

/// Consumed-versus-goal numbers for one tracked quantity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub consumed: f64,
    pub goal: u32,
    /// Goal minus consumed; negative once over
    pub remaining: f64,
    /// Attainment percent, capped at 100
    pub percentage: u32,
    pub over_goal: bool,
}

/// Progress for one tracked quantity
///
/// A zero goal reports zero percent rather than dividing by it.
pub fn progress(consumed: f64, goal: u32) -> Progress {
    let goal_f = goal as f64;
    let percentage = if goal > 0 {
        (consumed / goal_f * 100.0).round().min(100.0) as u32
    } else {
        0
    };

    Progress {
        consumed,
        goal,
        remaining: goal_f - consumed,
        percentage,
        over_goal: consumed > goal_f,
    }
}

/// Progress for all four tracked quantities of a day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyProgress {
    pub calories: Progress,
    pub protein: Progress,
    pub carbs: Progress,
    pub fat: Progress,
}

impl DailyProgress {
    /// Evaluate a day's totals against the goal set
    pub fn evaluate(summary: &DailySummary, goals: &NutritionGoals) -> Self {
        Self {
            calories: progress(summary.totals.calories, goals.calories),
            protein: progress(summary.totals.protein, goals.protein_g),
            carbs: progress(summary.totals.carbs, goals.carbs_g),
            fat: progress(summary.totals.fat, goals.fat_g),
        }
    }
}
