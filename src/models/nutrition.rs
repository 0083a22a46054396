//! Shared nutrition data structure
//!
//! Used for per-100g food facts, logged portions, and day totals.

use serde::{Deserialize, Serialize};

/// Nutritional information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64, // grams
    pub carbs: f64,   // grams
    pub fat: f64,     // grams
}

impl Nutrition {
    /// Create a new Nutrition with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale nutrition values by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            carbs: self.carbs * multiplier,
            fat: self.fat * multiplier,
        }
    }

    /// Add another nutrition to this one
    pub fn add(&self, other: &Nutrition) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
        }
    }

    /// Nutrition for a logged portion, from per-100g facts
    ///
    /// Calories round to the nearest whole kcal, macros to one decimal
    /// place, matching how food labels are displayed.
    pub fn for_portion(&self, amount_g: f64) -> Self {
        let factor = amount_g / 100.0;
        Self {
            calories: (self.calories * factor).round(),
            protein: round_tenth(self.protein * factor),
            carbs: round_tenth(self.carbs * factor),
            fat: round_tenth(self.fat * factor),
        }
    }

    /// Copy with macro fields rounded to one decimal place
    ///
    /// Summing portion values accumulates float dust; day totals are
    /// re-rounded before display.
    pub fn rounded_tenths(&self) -> Self {
        Self {
            calories: self.calories,
            protein: round_tenth(self.protein),
            carbs: round_tenth(self.carbs),
            fat: round_tenth(self.fat),
        }
    }
}

impl std::ops::Add for Nutrition {
    type Output = Nutrition;

    fn add(self, other: Nutrition) -> Nutrition {
        Nutrition::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for Nutrition {
    type Output = Nutrition;

    fn mul(self, multiplier: f64) -> Nutrition {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrition::zero(), |acc, n| acc + n)
    }
}

/// Round to one decimal place
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
