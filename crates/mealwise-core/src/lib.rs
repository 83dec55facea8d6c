// ABOUTME: Core types and constants for the Mealwise recipe safety engine
// ABOUTME: Foundation crate with recipe and profile models, error handling, and reference catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Mealwise Core
//!
//! Foundation crate providing shared types and constants for the Mealwise
//! recipe safety and relevance engine. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Nutrient aliases, the built-in medical condition catalog, scoring tiers
//! - **models**: Recipes, nutrients, medical profiles, family members, and the plan grid

/// Unified error handling system with standard error codes
pub mod errors;

/// Reference data and tuning constants organized by domain
pub mod constants;

/// Core data models (recipes, profiles, family members, meal plans)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
