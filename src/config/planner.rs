// ABOUTME: Plan generator settings for slot cadence, sampling, and family assignment
// ABOUTME: Defaults come from the compiled planner constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealwise_core::constants::scoring::planner;
use serde::{Deserialize, Serialize};

/// Plan generator settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Add the three snack slots to every day
    pub include_snacks: bool,
    /// Every n-th attempted slot draws from favorites
    pub favorites_every_n_slots: usize,
    /// Every n-th attempted slot searches with sampled pantry ingredients
    pub pantry_every_n_slots: usize,
    /// Pantry ingredients sampled per pantry slot
    pub pantry_sample_size: usize,
    /// Candidates requested from the catalog per slot
    pub candidate_limit: usize,
    /// Probability that a child is left off a spicy recipe
    pub child_spicy_exclusion_probability: f64,
    /// Upper bound on prep plus cook time passed to catalog searches
    pub max_total_minutes: Option<u32>,
    /// Servings cooked per adult portion
    pub servings_per_portion: f64,
    /// Fixed seed for reproducible plans; entropy when absent
    pub rng_seed: Option<u64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            include_snacks: false,
            favorites_every_n_slots: planner::FAVORITES_EVERY_N_SLOTS,
            pantry_every_n_slots: planner::PANTRY_EVERY_N_SLOTS,
            pantry_sample_size: planner::PANTRY_SAMPLE_SIZE,
            candidate_limit: planner::CANDIDATE_LIMIT,
            child_spicy_exclusion_probability: planner::CHILD_SPICY_EXCLUSION_PROBABILITY,
            max_total_minutes: None,
            servings_per_portion: planner::SERVINGS_PER_PORTION,
            rng_seed: None,
        }
    }
}
