//! User profile models
//!
//! Demographic and body data gathered during onboarding, plus the
//! completed profile with its computed calorie and macro budgets.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::energy::{CalorieResult, MacroResult, calculate_all_calories, calculate_macros};
use crate::error::{CalcError, CalcResult};

/// Gender enum for the BMR offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Diverse,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Diverse => "diverse",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Diverse => "Diverse",
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "diverse" => Ok(Gender::Diverse),
            _ => Err(CalcError::UnknownTag {
                kind: "gender",
                value: s.to_string(),
            }),
        }
    }
}

/// Activity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtremelyActive,
}

impl ActivityLevel {
    /// Multiplier applied to BMR to estimate total expenditure
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtremelyActive => 1.9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::ExtremelyActive => "extremely_active",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
            ActivityLevel::ExtremelyActive => "Extremely Active",
        }
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "lightly_active" => Ok(ActivityLevel::LightlyActive),
            "moderately_active" => Ok(ActivityLevel::ModeratelyActive),
            "very_active" => Ok(ActivityLevel::VeryActive),
            "extremely_active" => Ok(ActivityLevel::ExtremelyActive),
            _ => Err(CalcError::UnknownTag {
                kind: "activity level",
                value: s.to_string(),
            }),
        }
    }
}

/// Weight goal enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

impl Goal {
    /// Daily calorie adjustment applied on top of TDEE
    pub fn calorie_adjustment(&self) -> i32 {
        match self {
            Goal::Lose => -500,
            Goal::Maintain => 0,
            Goal::Gain => 300,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Lose => "lose",
            Goal::Maintain => "maintain",
            Goal::Gain => "gain",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Goal::Lose => "Lose Weight",
            Goal::Maintain => "Maintain Weight",
            Goal::Gain => "Gain Weight",
        }
    }
}

impl std::str::FromStr for Goal {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lose" => Ok(Goal::Lose),
            "maintain" => Ok(Goal::Maintain),
            "gain" => Ok(Goal::Gain),
            _ => Err(CalcError::UnknownTag {
                kind: "goal",
                value: s.to_string(),
            }),
        }
    }
}

/// Body measurements and demographics for the energy formulas
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyProfile {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age: i32,
    pub gender: Gender,
}

/// Calendar age in completed years on a reference date
///
/// The year difference is decremented when the reference falls before the
/// birthday; on the birthday itself the age has already incremented.
pub fn age_on(birth_date: NaiveDate, reference_date: NaiveDate) -> i32 {
    let mut years = reference_date.year() - birth_date.year();
    if (reference_date.month(), reference_date.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }
    years
}

/// Calendar age in completed years as of today
pub fn age_today(birth_date: NaiveDate) -> i32 {
    age_on(birth_date, Local::now().date_naive())
}

/// Onboarding answers collected so far
///
/// Every field starts empty and fills in as the user advances through the
/// questionnaire. The caller owns the draft and passes it in whole; the
/// engine holds no state between steps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub gender: Option<Gender>,
    pub birth_date: Option<NaiveDate>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub activity_level: Option<ActivityLevel>,
    pub goal: Option<Goal>,
}

impl ProfileDraft {
    /// Names of the answers still missing, in questionnaire order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.gender.is_none() {
            missing.push("gender");
        }
        if self.birth_date.is_none() {
            missing.push("birth_date");
        }
        if self.height_cm.is_none() {
            missing.push("height_cm");
        }
        if self.weight_kg.is_none() {
            missing.push("weight_kg");
        }
        if self.activity_level.is_none() {
            missing.push("activity_level");
        }
        if self.goal.is_none() {
            missing.push("goal");
        }
        missing
    }

    /// Whether every questionnaire answer is filled in
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Complete the draft into a full profile with computed budgets
    ///
    /// Age is taken as of `reference_date`. Fails on the first missing
    /// answer, then on any out-of-range measurement.
    pub fn complete(&self, reference_date: NaiveDate) -> CalcResult<UserProfile> {
        let gender = self.gender.ok_or(CalcError::MissingField("gender"))?;
        let birth_date = self.birth_date.ok_or(CalcError::MissingField("birth_date"))?;
        let height_cm = self.height_cm.ok_or(CalcError::MissingField("height_cm"))?;
        let weight_kg = self.weight_kg.ok_or(CalcError::MissingField("weight_kg"))?;
        let activity_level = self
            .activity_level
            .ok_or(CalcError::MissingField("activity_level"))?;
        let goal = self.goal.ok_or(CalcError::MissingField("goal"))?;

        let body = BodyProfile {
            weight_kg,
            height_cm,
            age: age_on(birth_date, reference_date),
            gender,
        };

        let calories = calculate_all_calories(&body, activity_level, goal)?;
        let macros = calculate_macros(calories.goal_calories, weight_kg, goal);

        Ok(UserProfile {
            gender,
            birth_date,
            height_cm,
            weight_kg,
            activity_level,
            goal,
            calories,
            macros,
        })
    }
}

/// Completed user profile with its computed budgets
///
/// The host persists this record; the engine only produces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub gender: Gender,
    pub birth_date: NaiveDate,
    /// Height in centimeters
    pub height_cm: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub calories: CalorieResult,
    pub macros: MacroResult,
}
