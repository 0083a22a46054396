//! Energy expenditure calculations
//!
//! Mifflin-St Jeor BMR, activity-scaled TDEE, and goal-adjusted calorie
//! targets. Inputs are validated before any arithmetic runs; outputs are
//! rounded to whole kcal and clamped into their reporting ranges.

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};
use crate::models::{ActivityLevel, BodyProfile, Gender, Goal};
use super::limits::{
    MAX_AGE, MAX_BMR, MAX_GOAL_CALORIES, MAX_HEIGHT_CM, MAX_TDEE, MAX_WEIGHT_KG, MIN_AGE,
    MIN_BMR, MIN_GOAL_CALORIES, MIN_HEIGHT_CM, MIN_TDEE, MIN_WEIGHT_KG, clamp_kcal,
};

/// Computed calorie budget for a profile
///
/// The multiplier and adjustment are the same table values the
/// intermediate steps used, so the record is internally consistent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieResult {
    /// Basal metabolic rate, kcal/day
    pub bmr: u32,
    /// Total daily energy expenditure, kcal/day
    pub tdee: u32,
    /// Daily target after the goal adjustment, kcal/day
    pub goal_calories: u32,
    /// Multiplier that produced `tdee`
    pub activity_multiplier: f64,
    /// Adjustment that produced `goal_calories`
    pub goal_adjustment: i32,
}

/// Check body measurements against their documented ranges
///
/// Runs before any arithmetic; the first out-of-range field fails the
/// whole calculation. Non-finite values are out of range by definition.
pub fn validate_profile(profile: &BodyProfile) -> CalcResult<()> {
    if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&profile.weight_kg) {
        return Err(CalcError::OutOfRange {
            field: "weight",
            value: profile.weight_kg,
            min: MIN_WEIGHT_KG,
            max: MAX_WEIGHT_KG,
            unit: "kg",
        });
    }
    if !(MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(&profile.height_cm) {
        return Err(CalcError::OutOfRange {
            field: "height",
            value: profile.height_cm,
            min: MIN_HEIGHT_CM,
            max: MAX_HEIGHT_CM,
            unit: "cm",
        });
    }
    if !(MIN_AGE..=MAX_AGE).contains(&profile.age) {
        return Err(CalcError::OutOfRange {
            field: "age",
            value: profile.age as f64,
            min: MIN_AGE as f64,
            max: MAX_AGE as f64,
            unit: "years",
        });
    }
    Ok(())
}

/// Basal metabolic rate via Mifflin-St Jeor, in kcal/day
///
/// `10*weight + 6.25*height - 5*age`, plus +5 for male, -161 for female,
/// and the mean of those two offsets for diverse (kept as an offset so
/// the formula stays linear). Rounded to the nearest kcal, then clamped
/// into `[MIN_BMR, MAX_BMR]`; the clamp absorbs extreme but in-range
/// input combinations instead of failing.
pub fn calculate_bmr(profile: &BodyProfile) -> CalcResult<u32> {
    validate_profile(profile)?;

    let base = 10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * profile.age as f64;
    let bmr = match profile.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
        Gender::Diverse => base + (5.0 - 161.0) / 2.0,
    };

    Ok(clamp_kcal("bmr", bmr.round() as i64, MIN_BMR, MAX_BMR))
}

/// Total daily energy expenditure, in kcal/day
///
/// BMR scaled by the activity multiplier, rounded, clamped into
/// `[MIN_TDEE, MAX_TDEE]`.
pub fn calculate_tdee(bmr: u32, activity_level: ActivityLevel) -> u32 {
    let tdee = (bmr as f64 * activity_level.multiplier()).round() as i64;
    clamp_kcal("tdee", tdee, MIN_TDEE, MAX_TDEE)
}

/// Daily calorie target for a goal, in kcal/day
///
/// TDEE plus the goal adjustment, clamped into
/// `[MIN_GOAL_CALORIES, MAX_GOAL_CALORIES]`. The lower bound is a safety
/// floor: an aggressive deficit never produces a target below it.
pub fn calculate_goal_calories(tdee: u32, goal: Goal) -> u32 {
    let target = tdee as i64 + goal.calorie_adjustment() as i64;
    clamp_kcal("goal calories", target, MIN_GOAL_CALORIES, MAX_GOAL_CALORIES)
}

/// Full calorie pipeline: BMR, TDEE, and goal target in one record
pub fn calculate_all_calories(
    profile: &BodyProfile,
    activity_level: ActivityLevel,
    goal: Goal,
) -> CalcResult<CalorieResult> {
    let bmr = calculate_bmr(profile)?;
    let tdee = calculate_tdee(bmr, activity_level);
    let goal_calories = calculate_goal_calories(tdee, goal);

    Ok(CalorieResult {
        bmr,
        tdee,
        goal_calories,
        activity_multiplier: activity_level.multiplier(),
        goal_adjustment: goal.calorie_adjustment(),
    })
}
