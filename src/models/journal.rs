//! Daily journal types and aggregation
//!
//! Groups logged portions by meal and folds them into day totals.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use super::Nutrition;

/// Meal type enum, ordered as meals appear through the day
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }

    /// Position in the day's display order (breakfast = 1)
    pub fn display_order(&self) -> u8 {
        match self {
            MealType::Breakfast => 1,
            MealType::Lunch => 2,
            MealType::Dinner => 3,
            MealType::Snack => 4,
        }
    }
}

impl std::str::FromStr for MealType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            _ => Err(CalcError::UnknownTag {
                kind: "meal type",
                value: s.to_string(),
            }),
        }
    }
}

/// One logged portion, nutrition already scaled to the amount
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodEntry {
    pub food_name: String,
    pub meal_type: MealType,
    /// Portion size in grams
    pub amount_g: f64,
    pub nutrition: Nutrition,
}

/// A day's journal rolled up by meal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub totals: Nutrition,
    pub entries_by_meal: BTreeMap<MealType, Vec<FoodEntry>>,
    pub calories_by_meal: BTreeMap<MealType, f64>,
}

/// Fold a day's entries into per-meal groups and day totals
///
/// Entries keep their insertion order within a meal; iterating the maps
/// yields meals in display order. Meals with no entries are absent.
/// Macro totals are re-rounded to one decimal place after summation.
pub fn summarize_day(date: NaiveDate, entries: &[FoodEntry]) -> DailySummary {
    let mut entries_by_meal: BTreeMap<MealType, Vec<FoodEntry>> = BTreeMap::new();
    let mut calories_by_meal: BTreeMap<MealType, f64> = BTreeMap::new();

    for entry in entries {
        entries_by_meal
            .entry(entry.meal_type)
            .or_default()
            .push(entry.clone());
        *calories_by_meal.entry(entry.meal_type).or_insert(0.0) += entry.nutrition.calories;
    }

    let totals: Nutrition = entries.iter().map(|e| e.nutrition.clone()).sum();

    DailySummary {
        date,
        totals: totals.rounded_tenths(),
        entries_by_meal,
        calories_by_meal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn entry(name: &str, meal_type: MealType, calories: f64, protein: f64) -> FoodEntry {
        FoodEntry {
            food_name: name.to_string(),
            meal_type,
            amount_g: 100.0,
            nutrition: Nutrition {
                calories,
                protein,
                carbs: 0.0,
                fat: 0.0,
            },
        }
    }

    #[test]
    fn test_meal_type_strings() {
        assert_eq!(MealType::Breakfast.as_str(), "breakfast");
        assert_eq!("snack".parse::<MealType>().unwrap(), MealType::Snack);
        assert_eq!("DINNER".parse::<MealType>().unwrap(), MealType::Dinner);
    }

    #[test]
    fn test_meal_type_unknown_tag() {
        let err = "brunch".parse::<MealType>().unwrap_err();
        assert!(matches!(
            err,
            CalcError::UnknownTag {
                kind: "meal type",
                ..
            }
        ));
    }

    #[test]
    fn test_meal_type_display_order() {
        assert_eq!(MealType::Breakfast.display_order(), 1);
        assert_eq!(MealType::Snack.display_order(), 4);
        assert!(MealType::Breakfast < MealType::Lunch);
        assert!(MealType::Dinner < MealType::Snack);
    }

    #[test]
    fn test_meal_type_wire_names() {
        let json = serde_json::to_string(&MealType::Lunch).unwrap();
        assert_eq!(json, "\"lunch\"");
        let parsed: MealType = serde_json::from_str("\"breakfast\"").unwrap();
        assert_eq!(parsed, MealType::Breakfast);
    }

    #[test]
    fn test_summarize_day_groups_by_meal() {
        let entries = vec![
            entry("oatmeal", MealType::Breakfast, 150.0, 5.0),
            entry("banana", MealType::Breakfast, 90.0, 1.1),
            entry("sandwich", MealType::Lunch, 420.0, 22.0),
        ];
        let summary = summarize_day(date(2026, 3, 14), &entries);

        assert_eq!(summary.entries_by_meal.len(), 2);
        assert_eq!(summary.entries_by_meal[&MealType::Breakfast].len(), 2);
        assert_eq!(summary.entries_by_meal[&MealType::Lunch].len(), 1);
        assert_eq!(
            summary.entries_by_meal[&MealType::Breakfast][0].food_name,
            "oatmeal"
        );
        assert!(!summary.entries_by_meal.contains_key(&MealType::Dinner));
    }

    #[test]
    fn test_summarize_day_totals() {
        let entries = vec![
            entry("oatmeal", MealType::Breakfast, 150.0, 5.0),
            entry("chicken", MealType::Dinner, 330.0, 31.2),
            entry("yogurt", MealType::Snack, 120.0, 9.4),
        ];
        let summary = summarize_day(date(2026, 3, 14), &entries);

        assert_eq!(summary.totals.calories, 600.0);
        assert_eq!(summary.totals.protein, 45.6);
        assert_eq!(summary.calories_by_meal[&MealType::Breakfast], 150.0);
        assert_eq!(summary.calories_by_meal[&MealType::Dinner], 330.0);
        assert_eq!(summary.calories_by_meal[&MealType::Snack], 120.0);

        let by_meal: f64 = summary.calories_by_meal.values().sum();
        assert_eq!(by_meal, summary.totals.calories);
    }

    #[test]
    fn test_summarize_day_meal_iteration_order() {
        let entries = vec![
            entry("yogurt", MealType::Snack, 120.0, 9.4),
            entry("sandwich", MealType::Lunch, 420.0, 22.0),
            entry("oatmeal", MealType::Breakfast, 150.0, 5.0),
        ];
        let summary = summarize_day(date(2026, 3, 14), &entries);

        let meals: Vec<MealType> = summary.entries_by_meal.keys().copied().collect();
        assert_eq!(
            meals,
            vec![MealType::Breakfast, MealType::Lunch, MealType::Snack]
        );
    }

    #[test]
    fn test_summarize_day_empty() {
        let summary = summarize_day(date(2026, 3, 14), &[]);
        assert_eq!(summary.totals.calories, 0.0);
        assert!(summary.entries_by_meal.is_empty());
        assert!(summary.calories_by_meal.is_empty());
    }

    #[test]
    fn test_summarize_day_rounds_macro_totals() {
        let entries = vec![
            entry("a", MealType::Breakfast, 10.0, 0.1),
            entry("b", MealType::Breakfast, 10.0, 0.2),
        ];
        let summary = summarize_day(date(2026, 3, 14), &entries);
        // 0.1 + 0.2 leaves float dust without the re-round
        assert_eq!(summary.totals.protein, 0.3);
    }
}
