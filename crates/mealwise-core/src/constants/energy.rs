// ABOUTME: Energy expenditure constants for daily calorie targets
// ABOUTME: Mifflin-St Jeor coefficients, activity multipliers, and goal adjustment factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241

/// kcal per kg of body weight
pub const MSJ_WEIGHT_COEF: f64 = 10.0;
/// kcal per cm of height
pub const MSJ_HEIGHT_COEF: f64 = 6.25;
/// kcal per year of age (subtracted)
pub const MSJ_AGE_COEF: f64 = -5.0;
/// Constant added for males
pub const MSJ_MALE_CONSTANT: f64 = 5.0;
/// Constant added for females
pub const MSJ_FEMALE_CONSTANT: f64 = -161.0;

/// Little or no exercise
pub const ACTIVITY_SEDENTARY: f64 = 1.2;
/// 1-3 days per week
pub const ACTIVITY_LIGHT: f64 = 1.375;
/// 3-5 days per week
pub const ACTIVITY_MODERATE: f64 = 1.55;
/// 6-7 days per week
pub const ACTIVITY_ACTIVE: f64 = 1.725;
/// Hard training twice per day
pub const ACTIVITY_VERY_ACTIVE: f64 = 1.9;

/// Approximate energy content of one kilogram of body fat
pub const KCAL_PER_KG_BODY_FAT: f64 = 7700.0;
/// Lowest daily target produced by a deficit goal
pub const MIN_DEFICIT_DAILY_CALORIES: f64 = 1200.0;

/// Deficit multiplier for the cut goal
pub const CUT_DEFICIT_FACTOR: f64 = 1.5;
/// Surplus multiplier for the bulk goal
pub const BULK_SURPLUS_FACTOR: f64 = 1.2;
/// Deficit multiplier for body recomposition
pub const RECOMP_DEFICIT_FACTOR: f64 = 0.3;
/// Surplus multiplier for athletic performance
pub const ATHLETIC_SURPLUS_FACTOR: f64 = 0.5;

/// Share of calories from protein when no explicit target is set
pub const DEFAULT_PROTEIN_SHARE: f64 = 0.25;
/// Share of calories from carbohydrates when no explicit target is set
pub const DEFAULT_CARBS_SHARE: f64 = 0.45;
/// Share of calories from fat when no explicit target is set
pub const DEFAULT_FAT_SHARE: f64 = 0.30;
/// kcal per gram of protein or carbohydrate
pub const KCAL_PER_GRAM_PROTEIN_CARBS: f64 = 4.0;
/// kcal per gram of fat
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Daily targets are split evenly across this many main meals
pub const MAIN_MEALS_PER_DAY: f64 = 3.0;
