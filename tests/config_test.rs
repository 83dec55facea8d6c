// ABOUTME: Tests for engine configuration defaults, environment overrides, and validation
// ABOUTME: Environment-mutating tests run serially to avoid interfering with each other
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use mealwise_engine::config::{ConfigError, EngineConfig};
use serial_test::serial;
use std::env;

const ALL_VARS: &[&str] = &[
    "MEALWISE_SEARCH_EXACT_TIER_LIMIT",
    "MEALWISE_SEARCH_DEFAULT_LIMIT",
    "MEALWISE_PLANNER_INCLUDE_SNACKS",
    "MEALWISE_PLANNER_CHILD_SPICY_EXCLUSION_PROBABILITY",
    "MEALWISE_PLANNER_MAX_TOTAL_MINUTES",
    "MEALWISE_PLANNER_RNG_SEED",
    "MEALWISE_FITNESS_FAVORITE",
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_defaults_are_valid() {
    let config = EngineConfig::default();
    assert!(config.validate().is_ok());

    assert_eq!(config.search.exact_tier_threshold, 5000);
    assert_eq!(config.search.exact_tier_limit, 5);
    assert_eq!(config.search.partial_limit, 10);
    assert_eq!(config.planner.favorites_every_n_slots, 5);
    assert_eq!(config.planner.pantry_every_n_slots, 3);
    assert_eq!(config.planner.pantry_sample_size, 3);
    assert!(!config.planner.include_snacks);
    assert!(config.planner.rng_seed.is_none());
    assert_eq!(config.fitness.base, 100);
}

#[test]
fn test_config_serializes_round_trip() {
    let config = EngineConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let parsed: EngineConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_probability_out_of_range_rejected() {
    let mut config = EngineConfig::default();
    config.planner.child_spicy_exclusion_probability = 1.5;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
fn test_zero_limits_rejected() {
    let mut config = EngineConfig::default();
    config.search.exact_tier_limit = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let mut config = EngineConfig::default();
    config.planner.pantry_every_n_slots = 0;
    assert!(config.validate().is_err());

    let mut config = EngineConfig::default();
    config.planner.max_total_minutes = Some(0);
    assert!(config.validate().is_err());
}

#[test]
fn test_non_positive_servings_rejected() {
    let mut config = EngineConfig::default();
    config.planner.servings_per_portion = 0.0;
    assert!(config.validate().is_err());
    config.planner.servings_per_portion = f64::NAN;
    assert!(config.validate().is_err());
}

// ============================================================================
// Environment overrides
// ============================================================================

#[test]
#[serial]
fn test_env_overrides_applied() {
    clear_env();
    env::set_var("MEALWISE_SEARCH_EXACT_TIER_LIMIT", "3");
    env::set_var("MEALWISE_PLANNER_INCLUDE_SNACKS", "true");
    env::set_var("MEALWISE_PLANNER_MAX_TOTAL_MINUTES", "45");
    env::set_var("MEALWISE_PLANNER_RNG_SEED", "1234");
    env::set_var("MEALWISE_FITNESS_FAVORITE", "40");

    let config = EngineConfig::load().unwrap();
    clear_env();

    assert_eq!(config.search.exact_tier_limit, 3);
    assert!(config.planner.include_snacks);
    assert_eq!(config.planner.max_total_minutes, Some(45));
    assert_eq!(config.planner.rng_seed, Some(1234));
    assert_eq!(config.fitness.favorite, 40);
}

#[test]
#[serial]
fn test_empty_optional_override_clears_value() {
    clear_env();
    env::set_var("MEALWISE_PLANNER_RNG_SEED", "");

    let config = EngineConfig::load().unwrap();
    clear_env();

    assert!(config.planner.rng_seed.is_none());
}

#[test]
#[serial]
fn test_unparseable_override_is_a_parse_error() {
    clear_env();
    env::set_var("MEALWISE_SEARCH_DEFAULT_LIMIT", "lots");

    let result = EngineConfig::load();
    clear_env();

    assert_eq!(
        result,
        Err(ConfigError::Parse(
            "Invalid MEALWISE_SEARCH_DEFAULT_LIMIT".to_owned()
        ))
    );
}

#[test]
#[serial]
fn test_override_failing_validation_is_rejected() {
    clear_env();
    env::set_var("MEALWISE_PLANNER_CHILD_SPICY_EXCLUSION_PROBABILITY", "-0.2");

    let result = EngineConfig::load();
    clear_env();

    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}
