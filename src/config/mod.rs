// ABOUTME: Engine configuration grouping search ranking, planner, and meal-fitness settings
// ABOUTME: Compiled defaults with MEALWISE_* environment overrides, validated and cached globally
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine Configuration Module
//!
//! All values can be overridden via environment variables with the `MEALWISE_` prefix.

/// Configuration errors
pub mod error;
/// Plan generator settings
pub mod planner;

pub use error::ConfigError;
pub use mealwise_intelligence::config::{MealFitnessConfig, SearchRankingConfig};
pub use planner::PlannerConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

// ============================================================================
// Main Configuration
// ============================================================================

/// Engine configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Search ranking limits
    pub search: SearchRankingConfig,
    /// Plan generator settings
    pub planner: PlannerConfig,
    /// Meal-fitness weights
    pub fitness: MealFitnessConfig,
}

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config = config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        let search = &self.search;
        if search.exact_tier_limit == 0 || search.partial_limit == 0 || search.default_limit == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "search result limits must be positive",
            ));
        }
        if search.exact_tier_threshold == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "exact_tier_threshold must be positive",
            ));
        }

        let planner = &self.planner;
        if planner.favorites_every_n_slots == 0 || planner.pantry_every_n_slots == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "slot cadences must be positive",
            ));
        }
        if planner.candidate_limit == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "candidate_limit must be positive",
            ));
        }
        if !(0.0..=1.0).contains(&planner.child_spicy_exclusion_probability) {
            return Err(ConfigError::InvalidRange(
                "child_spicy_exclusion_probability must be between 0 and 1",
            ));
        }
        if !planner.servings_per_portion.is_finite() || planner.servings_per_portion <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "servings_per_portion must be positive",
            ));
        }
        if planner.max_total_minutes == Some(0) {
            return Err(ConfigError::ValueOutOfRange(
                "max_total_minutes must be positive when set",
            ));
        }

        if self.fitness.base <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "fitness base score must be positive",
            ));
        }
        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_optional_env_var<T: FromStr>(
        env_var_name: &str,
        target: &mut Option<T>,
    ) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = if val.trim().is_empty() {
                None
            } else {
                Some(
                    val.parse()
                        .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?,
                )
            };
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Search ranking
        Self::apply_env_var(
            "MEALWISE_SEARCH_EXACT_TIER_THRESHOLD",
            &mut self.search.exact_tier_threshold,
        )?;
        Self::apply_env_var(
            "MEALWISE_SEARCH_EXACT_TIER_LIMIT",
            &mut self.search.exact_tier_limit,
        )?;
        Self::apply_env_var("MEALWISE_SEARCH_PARTIAL_LIMIT", &mut self.search.partial_limit)?;
        Self::apply_env_var("MEALWISE_SEARCH_DEFAULT_LIMIT", &mut self.search.default_limit)?;

        // Planner
        Self::apply_env_var("MEALWISE_PLANNER_INCLUDE_SNACKS", &mut self.planner.include_snacks)?;
        Self::apply_env_var(
            "MEALWISE_PLANNER_FAVORITES_EVERY_N_SLOTS",
            &mut self.planner.favorites_every_n_slots,
        )?;
        Self::apply_env_var(
            "MEALWISE_PLANNER_PANTRY_EVERY_N_SLOTS",
            &mut self.planner.pantry_every_n_slots,
        )?;
        Self::apply_env_var(
            "MEALWISE_PLANNER_PANTRY_SAMPLE_SIZE",
            &mut self.planner.pantry_sample_size,
        )?;
        Self::apply_env_var(
            "MEALWISE_PLANNER_CANDIDATE_LIMIT",
            &mut self.planner.candidate_limit,
        )?;
        Self::apply_env_var(
            "MEALWISE_PLANNER_CHILD_SPICY_EXCLUSION_PROBABILITY",
            &mut self.planner.child_spicy_exclusion_probability,
        )?;
        Self::apply_env_var(
            "MEALWISE_PLANNER_SERVINGS_PER_PORTION",
            &mut self.planner.servings_per_portion,
        )?;
        Self::apply_optional_env_var(
            "MEALWISE_PLANNER_MAX_TOTAL_MINUTES",
            &mut self.planner.max_total_minutes,
        )?;
        Self::apply_optional_env_var("MEALWISE_PLANNER_RNG_SEED", &mut self.planner.rng_seed)?;

        // Meal fitness
        Self::apply_env_var("MEALWISE_FITNESS_BASE", &mut self.fitness.base)?;
        Self::apply_env_var(
            "MEALWISE_FITNESS_NO_WARNINGS_BONUS",
            &mut self.fitness.no_warnings_bonus,
        )?;
        Self::apply_env_var("MEALWISE_FITNESS_PANTRY_MATCH", &mut self.fitness.pantry_match)?;
        Self::apply_env_var("MEALWISE_FITNESS_FAVORITE", &mut self.fitness.favorite)?;
        Self::apply_env_var(
            "MEALWISE_FITNESS_MEAL_TYPE_MATCH",
            &mut self.fitness.meal_type_match,
        )?;
        Self::apply_env_var(
            "MEALWISE_FITNESS_RECOMMENDED_INGREDIENT",
            &mut self.fitness.recommended_ingredient,
        )?;

        Ok(self)
    }
}
