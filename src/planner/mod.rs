// ABOUTME: Weekly meal plan generation types: request, summary counters, and outcome
// ABOUTME: The generator fills a seven-day grid with safe, varied recipes and assigns family members
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan Generator
//!
//! Slots are attempted Monday to Sunday, breakfast, lunch, dinner, then
//! snacks. Generation never fails as a whole: lookup errors leave a slot
//! empty and are counted in the [`PlanSummary`].

/// Slot-filling loop
pub mod generator;

pub use generator::PlanGenerator;

use crate::profiles::ActiveProfiles;
use chrono::{DateTime, Utc};
use mealwise_core::models::{FamilyMember, MealPlan};
use mealwise_intelligence::CalorieProfile;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Inputs of one generation run
#[derive(Debug, Clone, Default)]
pub struct PlanRequest {
    /// Active medical profiles
    pub profiles: ActiveProfiles,
    /// Household members eligible for assignment
    pub members: Vec<FamilyMember>,
    /// Favorite recipe ids
    pub favorite_ids: Vec<String>,
    /// Pantry ingredients on hand
    pub pantry: Vec<String>,
    /// Diet tag passed to catalog searches
    pub diet: Option<String>,
    /// Calorie-tracker profile for calorie and macro targets
    pub calorie_profile: Option<CalorieProfile>,
    /// Grid to complete; filled slots are kept
    pub existing_plan: Option<MealPlan>,
}

/// Counters reported after a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Empty slots the generator tried to fill
    pub slots_attempted: usize,
    /// Slots filled in this run
    pub slots_filled: usize,
    /// Slots left empty because no candidate passed the safety checks
    pub skipped_unsafe: usize,
    /// Slots left empty because a catalog lookup failed
    pub skipped_error: usize,
    /// Slots left empty because the catalog returned nothing
    pub no_candidates: usize,
    /// Pantry slots whose recipe uses at least one sampled pantry item
    pub pantry_slots_matched: usize,
    /// Slots filled with a recipe already in the plan
    pub reused_recipes: usize,
}

/// Result of one generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanOutcome {
    /// Run identifier
    pub plan_id: Uuid,
    /// The filled grid
    pub plan: MealPlan,
    /// Counters
    pub summary: PlanSummary,
    /// Meals assigned per family member id
    pub member_meal_counts: BTreeMap<String, usize>,
    /// Completion time
    pub generated_at: DateTime<Utc>,
}
