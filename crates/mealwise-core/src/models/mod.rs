// ABOUTME: Core data models for recipes, nutrients, medical profiles, family members, and plans
// ABOUTME: Plain serde records supplied by callers and returned by the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Records exchanged between the engine and its callers. Everything here is
//! plain data; the algorithms live in `mealwise-intelligence`.

mod family;
pub mod lenient;
mod nutrient;
mod plan;
mod profile;
mod recipe;
mod safety;

pub use family::{FamilyMember, FamilyRole};
pub use nutrient::{Nutrient, NutrientAmount, NutrientRecord};
pub use plan::{DayPlan, MealPlan, MealSlot, PlanStats, PlannedMeal, DAYS_PER_WEEK};
pub use profile::{
    LowerBound, MedicalProfile, MedicalSettings, NutrientMinimum, Requirements, Restrictions,
    UpperBound,
};
pub use recipe::{Difficulty, Ingredient, RecipeDetail, RecipeSummary};
pub use safety::{BadgeKind, SafetyBadge, SafetyIssue, SafetyResult, Severity};
