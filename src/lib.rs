// ABOUTME: Main library entry point for the Mealwise recipe safety and relevance engine
// ABOUTME: Orchestrates catalog search, medical safety filtering, weekly plan generation, and grocery lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Mealwise Engine
//!
//! An in-process library that ranks recipes, screens them against medical
//! profiles, and fills a weekly meal plan for a household.
//!
//! ## Features
//!
//! - **Safety**: hard conflicts for nutrient limits and avoided ingredients,
//!   advisory warnings for unmet requirements
//! - **Search**: tiered text relevance with exact-tier suppression, plus
//!   ingredient-only ranking
//! - **Planning**: seven-day grid filled from favorites, pantry, and meal-type
//!   searches with variety, family assignment, and portion sizing
//! - **Groceries**: aggregated shopping list for a plan
//!
//! ## Architecture
//!
//! - **`mealwise_core`**: models, errors, and constants
//! - **`mealwise_intelligence`**: pure scoring and evaluation algorithms
//! - **this crate**: the catalog seam and the services built on it
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use mealwise_engine::catalog::InMemoryCatalog;
//! use mealwise_engine::config::EngineConfig;
//! use mealwise_engine::planner::{PlanGenerator, PlanRequest};
//!
//! #[tokio::main]
//! async fn main() {
//!     let catalog = Arc::new(InMemoryCatalog::new(Vec::new()));
//!     let generator = PlanGenerator::new(catalog, EngineConfig::global());
//!     let outcome = generator.generate(&PlanRequest::default()).await;
//!     println!("filled {} slots", outcome.summary.slots_filled);
//! }
//! ```

/// Recipe data-source abstraction
pub mod catalog;

/// Engine configuration
pub mod config;

/// Grocery list aggregation
pub mod grocery;

/// Structured logging setup
pub mod logging;

/// Weekly plan generation
pub mod planner;

/// Active medical profile assembly
pub mod profiles;

/// Ranked and safety-filtered recipe search
pub mod search;

pub use mealwise_core::{models, AppError, AppResult, ErrorCode};
pub use mealwise_intelligence as intelligence;
