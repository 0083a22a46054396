//! Macro budget allocation
//!
//! Splits a calorie target into grams of protein, carbohydrate, and fat.

use serde::{Deserialize, Serialize};

use crate::models::Goal;
use super::limits::{CARBS_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G};

/// Daily macro budget in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroResult {
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

/// Protein grams per kilogram of body weight for a goal
fn protein_factor(goal: Goal) -> f64 {
    match goal {
        Goal::Gain => 2.0,
        Goal::Lose => 1.8,
        Goal::Maintain => 1.6,
    }
}

/// Share of the calorie target given to fat for a goal
fn fat_percent(goal: Goal) -> f64 {
    match goal {
        Goal::Lose => 0.30,
        _ => 0.25,
    }
}

/// Split a calorie target into macro grams
///
/// Protein scales with body weight, with a higher factor when losing or
/// gaining to preserve or build muscle. Fat takes a fixed share of the
/// calories, larger when losing for satiety. Carbohydrate gets whatever
/// calories remain after the rounded protein and fat grams, floored at
/// zero so a low target paired with a heavy body never yields negative
/// grams.
pub fn calculate_macros(goal_calories: u32, weight_kg: f64, goal: Goal) -> MacroResult {
    let protein_g = (weight_kg * protein_factor(goal)).round();
    let fat_g = (goal_calories as f64 * fat_percent(goal) / FAT_KCAL_PER_G).round();

    let remaining =
        goal_calories as f64 - protein_g * PROTEIN_KCAL_PER_G - fat_g * FAT_KCAL_PER_G;
    let carbs_g = (remaining.max(0.0) / CARBS_KCAL_PER_G).round();

    MacroResult {
        protein_g: protein_g as u32,
        carbs_g: carbs_g as u32,
        fat_g: fat_g as u32,
    }
}
