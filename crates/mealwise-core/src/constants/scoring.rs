// ABOUTME: Scoring tiers and heuristic weights for search ranking and meal planning
// ABOUTME: Relevance tiers, meal-fitness weights, planner cadence, and spice markers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Text relevance tiers (highest tier wins, tiers never add up)
pub mod relevance {
    /// Title equals the query
    pub const EXACT_TITLE: u32 = 10_000;
    /// Title contains the query
    pub const TITLE_CONTAINS: u32 = 5_000;
    /// Title starts with the query
    pub const TITLE_PREFIX: u32 = 3_000;
    /// Description contains the query
    pub const DESCRIPTION_CONTAINS: u32 = 1_000;
    /// Scale of the title word-overlap bonus
    pub const TITLE_WORD_BONUS: u32 = 100;
    /// Scale of the description word-overlap bonus
    pub const DESCRIPTION_WORD_BONUS: u32 = 20;

    /// Minimum score of an exact-tier result
    pub const EXACT_TIER_THRESHOLD: u32 = TITLE_CONTAINS;
    /// Results kept when any exact-tier result exists
    pub const EXACT_TIER_LIMIT: usize = 5;
    /// Results kept otherwise
    pub const PARTIAL_LIMIT: usize = 10;
    /// Default result count requested from the catalog
    pub const DEFAULT_SEARCH_LIMIT: usize = 15;
}

/// Meal-fitness weights
pub mod fitness {
    /// Starting score of every safe candidate
    pub const BASE: i32 = 100;
    /// Candidate produced no warnings
    pub const NO_WARNINGS_BONUS: i32 = 50;
    /// Calories within 10% of the per-meal target
    pub const CALORIES_VERY_CLOSE: i32 = 30;
    /// Calories within 25%
    pub const CALORIES_CLOSE: i32 = 20;
    /// Calories within 50%
    pub const CALORIES_ACCEPTABLE: i32 = 10;
    /// Calories further off
    pub const CALORIES_FAR_PENALTY: i32 = -10;
    /// Macro within 20% of the per-meal target
    pub const MACRO_CLOSE: i32 = 10;
    /// Macro within 40%
    pub const MACRO_ACCEPTABLE: i32 = 5;
    /// Each pantry ingredient used
    pub const PANTRY_MATCH: i32 = 5;
    /// Recipe is a favorite
    pub const FAVORITE: i32 = 20;
    /// Recipe is tagged with the slot's meal type
    pub const MEAL_TYPE_MATCH: i32 = 15;
    /// Each recommended ingredient from a requirement profile
    pub const RECOMMENDED_INGREDIENT: i32 = 5;
}

/// Plan generator cadence and sampling
pub mod planner {
    /// Every n-th attempted slot draws from favorites
    pub const FAVORITES_EVERY_N_SLOTS: usize = 5;
    /// Every n-th attempted slot searches with pantry ingredients
    pub const PANTRY_EVERY_N_SLOTS: usize = 3;
    /// Pantry ingredients sampled per pantry slot
    pub const PANTRY_SAMPLE_SIZE: usize = 3;
    /// Candidates requested from the catalog per slot
    pub const CANDIDATE_LIMIT: usize = 15;
    /// Probability that a child is left off a spicy recipe
    pub const CHILD_SPICY_EXCLUSION_PROBABILITY: f64 = 0.7;
    /// Members younger than this many months count as children when the role is unspecified
    pub const CHILD_AGE_LIMIT_MONTHS: u32 = 144;
    /// Servings cooked per adult portion
    pub const SERVINGS_PER_PORTION: f64 = 1.0;
    /// Servings planned when no family members are recorded
    pub const DEFAULT_HOUSEHOLD_SERVINGS: u32 = 4;
}

/// Title and tag fragments that mark a recipe as spicy
pub const SPICY_MARKERS: &[&str] = &[
    "spicy",
    "hot sauce",
    "chili",
    "chilli",
    "jalapeno",
    "jalapeño",
    "habanero",
    "sriracha",
    "cayenne",
    "vindaloo",
    "buffalo",
    "szechuan",
    "sichuan",
    "harissa",
    "gochujang",
];
