//! Data models
//!
//! Value types shared across the calculation engine.

mod goals;
mod journal;
mod nutrition;
mod profile;

pub use goals::{
    DailyProgress, NutritionGoals, Progress, MAX_MANUAL_CALORIES, MIN_MANUAL_CALORIES,
    default_macro_split, progress, validate_manual_calories,
};
pub use journal::{DailySummary, FoodEntry, MealType, summarize_day};
pub use nutrition::Nutrition;
pub use profile::{
    ActivityLevel, BodyProfile, Gender, Goal, ProfileDraft, UserProfile, age_on, age_today,
};
