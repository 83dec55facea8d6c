// ABOUTME: Daily calorie and macronutrient targets from a calorie-tracker body profile
// ABOUTME: Mifflin-St Jeor BMR, activity-scaled TDEE, goal adjustment, and default macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calorie Goals
//!
//! Targets feed meal-fitness scoring and the calorie-goal notes attached to
//! plan candidates. Each main meal is expected to carry a third of the daily
//! target.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use mealwise_core::constants::energy;
use mealwise_core::models::{SafetyIssue, Severity};
use mealwise_core::AppError;
use serde::{Deserialize, Serialize};

/// Condition name used on calorie-goal notes
pub const CALORIE_GOAL_CONDITION: &str = "Calorie Goal";

const DEFAULT_WEIGHT_KG: f64 = 70.0;
const DEFAULT_HEIGHT_CM: f64 = 170.0;
const DEFAULT_AGE: u32 = 30;
const DEFAULT_WEEKLY_RATE_KG: f64 = 0.5;

/// Sex used by the BMR formula
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// +5 kcal constant
    #[default]
    Male,
    /// -161 kcal constant
    Female,
}

/// Activity level for TDEE
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// 1-3 days per week
    Light,
    /// 3-5 days per week
    #[default]
    Moderate,
    /// 6-7 days per week
    Active,
    /// Hard training twice per day
    VeryActive,
}

impl ActivityLevel {
    /// TDEE multiplier
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Sedentary => energy::ACTIVITY_SEDENTARY,
            Self::Light => energy::ACTIVITY_LIGHT,
            Self::Moderate => energy::ACTIVITY_MODERATE,
            Self::Active => energy::ACTIVITY_ACTIVE,
            Self::VeryActive => energy::ACTIVITY_VERY_ACTIVE,
        }
    }
}

/// Body-composition goal
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CalorieGoal {
    /// Steady fat loss
    Lose,
    /// Aggressive fat loss
    Cut,
    /// Hold weight
    #[default]
    Maintain,
    /// Steady weight gain
    Gain,
    /// Aggressive weight gain
    Bulk,
    /// Slight deficit while building muscle
    Recomp,
    /// Slight surplus for training load
    Athletic,
    /// General health, eat at maintenance
    Health,
}

/// Calorie-tracker body profile; missing or non-positive values take defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalorieProfile {
    /// Body weight (kg), default 70
    #[serde(alias = "weight")]
    pub weight_kg: Option<f64>,
    /// Height (cm), default 170
    #[serde(alias = "height")]
    pub height_cm: Option<f64>,
    /// Age in years, default 30
    pub age: Option<u32>,
    /// Sex, default male
    #[serde(alias = "gender")]
    pub sex: Option<Sex>,
    /// Activity level, default moderate
    pub activity_level: Option<ActivityLevel>,
    /// Goal, default maintain
    pub goal: Option<CalorieGoal>,
    /// Weekly change in kg, default 0.5
    #[serde(alias = "rate")]
    pub weekly_rate_kg: Option<f64>,
    /// Explicit daily protein target (g)
    pub protein_target: Option<f64>,
    /// Explicit daily carbohydrate target (g)
    pub carbs_target: Option<f64>,
    /// Explicit daily fat target (g)
    #[serde(alias = "fatsTarget")]
    pub fat_target: Option<f64>,
}

/// Daily energy and macro targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTargets {
    /// kcal per day
    pub calories: f64,
    /// Protein (g) per day
    pub protein_g: f64,
    /// Carbohydrates (g) per day
    pub carbs_g: f64,
    /// Fat (g) per day
    pub fat_g: f64,
}

impl DailyTargets {
    /// Calorie target of one main meal
    #[must_use]
    pub fn calories_per_meal(&self) -> f64 {
        self.calories / energy::MAIN_MEALS_PER_DAY
    }

    /// Protein, carbohydrate, and fat targets of one main meal
    #[must_use]
    pub fn macros_per_meal(&self) -> [f64; 3] {
        [self.protein_g, self.carbs_g, self.fat_g].map(|g| g / energy::MAIN_MEALS_PER_DAY)
    }
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

impl CalorieProfile {
    /// Compute daily targets
    ///
    /// Formula: `daily = round(goal_adjust(round(BMR x activity)))`, with deficit
    /// goals floored at 1200 kcal. Macros default to a 25/45/30 split of the
    /// daily calories at 4/4/9 kcal per gram.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolved body measurements are outside the
    /// range the BMR formula supports
    pub fn daily_targets(&self) -> Result<DailyTargets, AppError> {
        let weight = positive(self.weight_kg).unwrap_or(DEFAULT_WEIGHT_KG);
        let height = positive(self.height_cm).unwrap_or(DEFAULT_HEIGHT_CM);
        let age = self.age.filter(|a| *a > 0).unwrap_or(DEFAULT_AGE);
        let sex = self.sex.unwrap_or_default();

        let bmr = mifflin_st_jeor(weight, height, age, sex)?;
        let tdee = (bmr * self.activity_level.unwrap_or_default().multiplier()).round();
        let rate = positive(self.weekly_rate_kg).unwrap_or(DEFAULT_WEEKLY_RATE_KG);
        let calories = adjust_for_goal(tdee, self.goal.unwrap_or_default(), rate);

        Ok(DailyTargets {
            calories,
            protein_g: positive(self.protein_target).unwrap_or_else(|| {
                (calories * energy::DEFAULT_PROTEIN_SHARE / energy::KCAL_PER_GRAM_PROTEIN_CARBS)
                    .round()
            }),
            carbs_g: positive(self.carbs_target).unwrap_or_else(|| {
                (calories * energy::DEFAULT_CARBS_SHARE / energy::KCAL_PER_GRAM_PROTEIN_CARBS)
                    .round()
            }),
            fat_g: positive(self.fat_target).unwrap_or_else(|| {
                (calories * energy::DEFAULT_FAT_SHARE / energy::KCAL_PER_GRAM_FAT).round()
            }),
        })
    }
}

/// Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_offset`
/// - Male: +5
/// - Female: -161
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
///
/// # Errors
///
/// Returns an error if input values are out of valid ranges
pub fn mifflin_st_jeor(weight_kg: f64, height_cm: f64, age: u32, sex: Sex) -> Result<f64, AppError> {
    if weight_kg <= 0.0 || weight_kg > 300.0 {
        return Err(AppError::invalid_input(
            "Weight must be between 0 and 300 kg",
        ));
    }
    if height_cm <= 0.0 || height_cm > 300.0 {
        return Err(AppError::invalid_input(
            "Height must be between 0 and 300 cm",
        ));
    }
    if age > 120 {
        return Err(AppError::invalid_input("Age must be at most 120 years"));
    }

    let sex_constant = match sex {
        Sex::Male => energy::MSJ_MALE_CONSTANT,
        Sex::Female => energy::MSJ_FEMALE_CONSTANT,
    };
    Ok(energy::MSJ_WEIGHT_COEF * weight_kg
        + energy::MSJ_HEIGHT_COEF * height_cm
        + energy::MSJ_AGE_COEF * f64::from(age)
        + sex_constant)
}

/// Apply a goal to TDEE
///
/// The daily deficit or surplus is `weekly_rate_kg x 7700 / 7` kcal.
#[must_use]
pub fn adjust_for_goal(tdee: f64, goal: CalorieGoal, weekly_rate_kg: f64) -> f64 {
    let daily_delta = weekly_rate_kg * energy::KCAL_PER_KG_BODY_FAT / 7.0;
    let floor = energy::MIN_DEFICIT_DAILY_CALORIES;
    match goal {
        CalorieGoal::Lose => (tdee - daily_delta).round().max(floor),
        CalorieGoal::Cut => (tdee - daily_delta * energy::CUT_DEFICIT_FACTOR)
            .round()
            .max(floor),
        CalorieGoal::Maintain | CalorieGoal::Health => tdee.round(),
        CalorieGoal::Gain => (tdee + daily_delta).round(),
        CalorieGoal::Bulk => (tdee + daily_delta * energy::BULK_SURPLUS_FACTOR).round(),
        CalorieGoal::Recomp => (tdee - daily_delta * energy::RECOMP_DEFICIT_FACTOR).round(),
        CalorieGoal::Athletic => (tdee + daily_delta * energy::ATHLETIC_SURPLUS_FACTOR).round(),
    }
}

/// Note for a serving far from the per-meal calorie target
///
/// Above 150% of the target yields a medium-severity note, below 50% a
/// low-severity note. Non-positive servings produce nothing.
#[must_use]
pub fn calorie_goal_note(calories_per_serving: f64, targets: &DailyTargets) -> Option<SafetyIssue> {
    let per_meal = targets.calories_per_meal();
    if calories_per_serving <= 0.0 || per_meal <= 0.0 {
        return None;
    }

    if calories_per_serving > per_meal * 1.5 {
        Some(SafetyIssue::warning(
            CALORIE_GOAL_CONDITION,
            format!(
                "High calories ({:.0}cal) - target is ~{:.0}cal per meal",
                calories_per_serving.round(),
                per_meal.round()
            ),
            Severity::Medium,
        ))
    } else if calories_per_serving < per_meal * 0.5 {
        Some(SafetyIssue::warning(
            CALORIE_GOAL_CONDITION,
            format!(
                "Low calories ({:.0}cal) - may not meet daily needs",
                calories_per_serving.round()
            ),
            Severity::Low,
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_maintains() {
        let targets = CalorieProfile::default().daily_targets().unwrap();
        // BMR = 700 + 1062.5 - 150 + 5 = 1617.5, TDEE = round(1617.5 * 1.55) = 2507
        assert!((targets.calories - 2507.0).abs() < f64::EPSILON);
        assert!((targets.protein_g - 157.0).abs() < f64::EPSILON);
        assert!((targets.carbs_g - 282.0).abs() < f64::EPSILON);
        assert!((targets.fat_g - 84.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deficit_goals_respect_floor() {
        assert!((adjust_for_goal(1500.0, CalorieGoal::Cut, 1.0) - 1200.0).abs() < f64::EPSILON);
        assert!((adjust_for_goal(2500.0, CalorieGoal::Lose, 0.5) - 1950.0).abs() < f64::EPSILON);
        assert!((adjust_for_goal(2500.0, CalorieGoal::Gain, 0.5) - 3050.0).abs() < f64::EPSILON);
        assert!((adjust_for_goal(2500.0, CalorieGoal::Health, 0.5) - 2500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_explicit_macros_win() {
        let profile = CalorieProfile {
            protein_target: Some(180.0),
            ..CalorieProfile::default()
        };
        let targets = profile.daily_targets().unwrap();
        assert!((targets.protein_g - 180.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_profile_deserializes_tracker_fields() {
        let profile: CalorieProfile = serde_json::from_value(serde_json::json!({
            "weight": 60,
            "height": 165,
            "gender": "female",
            "activityLevel": "veryActive",
            "goal": "bulk",
            "rate": 0.25
        }))
        .unwrap();
        assert_eq!(profile.sex, Some(Sex::Female));
        assert_eq!(profile.activity_level, Some(ActivityLevel::VeryActive));
        assert!(profile.daily_targets().is_ok());
    }

    #[test]
    fn test_out_of_range_weight_is_rejected() {
        let profile = CalorieProfile {
            weight_kg: Some(450.0),
            ..CalorieProfile::default()
        };
        assert!(profile.daily_targets().is_err());
    }

    #[test]
    fn test_calorie_goal_notes() {
        let targets = DailyTargets {
            calories: 2100.0,
            protein_g: 130.0,
            carbs_g: 236.0,
            fat_g: 70.0,
        };
        let high = calorie_goal_note(1200.0, &targets).unwrap();
        assert_eq!(high.severity, Severity::Medium);
        assert_eq!(high.issue, "High calories (1200cal) - target is ~700cal per meal");

        let low = calorie_goal_note(300.0, &targets).unwrap();
        assert_eq!(low.severity, Severity::Low);
        assert_eq!(low.condition_name, CALORIE_GOAL_CONDITION);

        assert!(calorie_goal_note(700.0, &targets).is_none());
    }
}
