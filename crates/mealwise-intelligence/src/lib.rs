// ABOUTME: Recipe safety, relevance, and meal-fitness algorithms for the Mealwise engine
// ABOUTME: Pure functions over core models; no I/O and no shared state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Mealwise Intelligence
//!
//! Scoring and evaluation algorithms used by the engine:
//!
//! - **nutrients**: resolves heterogeneous nutrient names to canonical per-serving values
//! - **safety**: evaluates a recipe against medical profiles (hard conflicts, soft warnings)
//! - **relevance**: tiered text relevance scoring and exact-tier partitioning
//! - **ingredients**: ingredient overlap scoring and ingredient-only ranking
//! - **calorie_goals**: daily calorie and macro targets from a body profile
//! - **meal_fitness**: preference ordering of safe candidates for a meal slot
//! - **family**: per-member eligibility and portion sizing

/// Daily calorie and macro targets
pub mod calorie_goals;
/// Tunable weights and limits
pub mod config;
/// Per-member eligibility and portions
pub mod family;
/// Ingredient overlap scoring
pub mod ingredients;
/// Meal-fitness scoring for plan candidates
pub mod meal_fitness;
/// Nutrient name resolution
pub mod nutrients;
/// Text relevance scoring
pub mod relevance;
/// Medical safety evaluation
pub mod safety;

pub use calorie_goals::{CalorieProfile, DailyTargets};
pub use config::{MealFitnessConfig, SearchRankingConfig};
pub use ingredients::{overlap_score, IngredientOverlap};
pub use meal_fitness::{FitnessContext, MealFitnessScorer};
pub use nutrients::{lookup, NutrientValue, NutrientView};
pub use relevance::{normalize_query, partition, score, ScoredRecipe};
pub use safety::evaluate;
