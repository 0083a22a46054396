//! Energy expenditure and macro budget calculations
//!
//! Mifflin-St Jeor BMR, activity-scaled TDEE, goal-adjusted calorie
//! targets, and macro gram allocation.

pub mod expenditure;
pub mod limits;
pub mod macros;

pub use expenditure::{
    CalorieResult, calculate_all_calories, calculate_bmr, calculate_goal_calories,
    calculate_tdee, validate_profile,
};
pub use macros::{MacroResult, calculate_macros};
