// ABOUTME: Tunable weights for meal-fitness scoring and limits for search ranking
// ABOUTME: Defaults mirror the compiled constants; the engine config may override them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Algorithm Configuration
//!
//! Plain configuration records consumed by the scoring functions. Loading and
//! validation from the environment happens in the engine crate.

use mealwise_core::constants::scoring::{fitness, relevance};
use serde::{Deserialize, Serialize};

/// Search ranking limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRankingConfig {
    /// Minimum score of an exact-tier result
    pub exact_tier_threshold: u32,
    /// Results kept when any exact-tier result exists
    pub exact_tier_limit: usize,
    /// Results kept otherwise
    pub partial_limit: usize,
    /// Result count requested from the catalog when the caller gives none
    pub default_limit: usize,
}

impl Default for SearchRankingConfig {
    fn default() -> Self {
        Self {
            exact_tier_threshold: relevance::EXACT_TIER_THRESHOLD,
            exact_tier_limit: relevance::EXACT_TIER_LIMIT,
            partial_limit: relevance::PARTIAL_LIMIT,
            default_limit: relevance::DEFAULT_SEARCH_LIMIT,
        }
    }
}

/// Meal-fitness weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealFitnessConfig {
    /// Starting score
    pub base: i32,
    /// Bonus when the safety check produced no warnings
    pub no_warnings_bonus: i32,
    /// Calories within 10% of the per-meal target
    pub calories_very_close: i32,
    /// Calories within 25%
    pub calories_close: i32,
    /// Calories within 50%
    pub calories_acceptable: i32,
    /// Calories further off (usually negative)
    pub calories_far: i32,
    /// Macro within 20%
    pub macro_close: i32,
    /// Macro within 40%
    pub macro_acceptable: i32,
    /// Per pantry ingredient used
    pub pantry_match: i32,
    /// Favorite recipe
    pub favorite: i32,
    /// Meal-type tag matches the slot
    pub meal_type_match: i32,
    /// Per recommended ingredient present
    pub recommended_ingredient: i32,
}

impl Default for MealFitnessConfig {
    fn default() -> Self {
        Self {
            base: fitness::BASE,
            no_warnings_bonus: fitness::NO_WARNINGS_BONUS,
            calories_very_close: fitness::CALORIES_VERY_CLOSE,
            calories_close: fitness::CALORIES_CLOSE,
            calories_acceptable: fitness::CALORIES_ACCEPTABLE,
            calories_far: fitness::CALORIES_FAR_PENALTY,
            macro_close: fitness::MACRO_CLOSE,
            macro_acceptable: fitness::MACRO_ACCEPTABLE,
            pantry_match: fitness::PANTRY_MATCH,
            favorite: fitness::FAVORITE,
            meal_type_match: fitness::MEAL_TYPE_MATCH,
            recommended_ingredient: fitness::RECOMMENDED_INGREDIENT,
        }
    }
}
