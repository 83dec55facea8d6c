// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Nutrient aliases, the built-in condition catalog, scoring tiers, and energy coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Reference data and tuning constants grouped by domain rather than kept in
//! a single large file.

/// Built-in medical condition catalog
pub mod conditions;
/// Energy expenditure coefficients (BMR, activity factors, goal adjustments)
pub mod energy;
/// Nutrient name aliases and default units
pub mod nutrients;
/// Relevance tiers, meal-fitness weights, and planner heuristics
pub mod scoring;

pub use conditions::{condition_by_id, MEDICAL_CONDITIONS};
