// ABOUTME: Shared test utilities and fixtures for engine integration tests
// ABOUTME: Provides quiet logging, a recipe builder, sample catalogs, and failure-injecting catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `mealwise_engine`

use async_trait::async_trait;
use mealwise_engine::catalog::{InMemoryCatalog, RecipeCatalog, SearchFilters};
use mealwise_engine::models::{
    FamilyMember, FamilyRole, Ingredient, NutrientAmount, RecipeDetail, RecipeSummary,
};
use mealwise_engine::{AppError, AppResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

// ============================================================================
// Recipe builder
// ============================================================================

/// Fluent builder for detail records
pub struct RecipeFixture {
    detail: RecipeDetail,
}

impl RecipeFixture {
    pub fn new(id: &str, title: &str) -> Self {
        let mut summary = RecipeSummary::new(id, title);
        summary.servings = 1;
        Self {
            detail: RecipeDetail::from_summary(summary),
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        description.clone_into(&mut self.detail.summary.description);
        self
    }

    pub fn servings(mut self, servings: u32) -> Self {
        self.detail.summary.servings = servings;
        self
    }

    pub fn meal_types(mut self, meal_types: &[&str]) -> Self {
        self.detail.summary.meal_types = meal_types.iter().map(|t| (*t).to_owned()).collect();
        self
    }

    pub fn diets(mut self, diets: &[&str]) -> Self {
        self.detail.summary.diets = diets.iter().map(|d| (*d).to_owned()).collect();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.detail.tags = tags.iter().map(|t| (*t).to_owned()).collect();
        self
    }

    pub fn ingredients(mut self, names: &[&str]) -> Self {
        self.detail.ingredients = names.iter().map(|n| Ingredient::named(*n)).collect();
        self
    }

    pub fn measured(mut self, name: &str, amount: f64, unit: &str) -> Self {
        self.detail
            .ingredients
            .push(Ingredient::measured(name, amount, unit));
        self
    }

    pub fn nutrient(mut self, name: &str, amount: f64, unit: &str) -> Self {
        self.detail.nutrients.insert(
            name.to_owned(),
            NutrientAmount {
                amount,
                unit: unit.to_owned(),
            },
        );
        self
    }

    pub fn build(self) -> RecipeDetail {
        self.detail
    }
}

// ============================================================================
// Sample data
// ============================================================================

/// Three recipes per required meal type, a few snacks, and some hazards
pub fn weekly_recipes() -> Vec<RecipeDetail> {
    vec![
        RecipeFixture::new("b1", "Oatmeal with Berries")
            .meal_types(&["breakfast"])
            .ingredients(&["oats", "blueberries", "milk"])
            .nutrient("Sodium", 120.0, "mg")
            .build(),
        RecipeFixture::new("b2", "Spinach Omelette")
            .meal_types(&["breakfast"])
            .ingredients(&["eggs", "spinach", "olive oil"])
            .nutrient("Sodium", 300.0, "mg")
            .build(),
        RecipeFixture::new("b3", "Peanut Butter Toast")
            .meal_types(&["breakfast"])
            .ingredients(&["bread", "peanut butter"])
            .nutrient("Sodium", 250.0, "mg")
            .build(),
        RecipeFixture::new("l1", "Lentil Soup")
            .meal_types(&["lunch", "main course"])
            .ingredients(&["lentils", "carrot", "onion"])
            .nutrient("Sodium", 450.0, "mg")
            .build(),
        RecipeFixture::new("l2", "Chicken Caesar Wrap")
            .meal_types(&["lunch"])
            .ingredients(&["chicken", "lettuce", "tortilla"])
            .nutrient("Sodium", 1400.0, "mg")
            .build(),
        RecipeFixture::new("l3", "Quinoa Salad")
            .meal_types(&["lunch", "salad"])
            .ingredients(&["quinoa", "cucumber", "tomato"])
            .nutrient("Sodium", 200.0, "mg")
            .build(),
        RecipeFixture::new("d1", "Spicy Chili Beans")
            .meal_types(&["dinner", "main course"])
            .ingredients(&["kidney beans", "tomato", "onion"])
            .tags(&["spicy"])
            .nutrient("Sodium", 380.0, "mg")
            .build(),
        RecipeFixture::new("d2", "Garlic Shrimp Pasta")
            .meal_types(&["dinner", "main course"])
            .ingredients(&["shrimp", "garlic", "pasta"])
            .nutrient("Sodium", 420.0, "mg")
            .build(),
        RecipeFixture::new("d3", "Baked Salmon")
            .meal_types(&["dinner", "main course"])
            .ingredients(&["salmon", "lemon", "dill"])
            .nutrient("Sodium", 310.0, "mg")
            .build(),
        RecipeFixture::new("s1", "Apple Slices")
            .meal_types(&["snack"])
            .ingredients(&["apple"])
            .build(),
    ]
}

pub fn weekly_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new(weekly_recipes())
}

pub fn member(id: &str, name: &str, role: FamilyRole) -> FamilyMember {
    FamilyMember::new(id, name, role)
}

// ============================================================================
// Failure-injecting catalogs
// ============================================================================

/// Catalog whose every call fails
#[derive(Default)]
pub struct FailingCatalog {
    pub calls: AtomicUsize,
}

impl FailingCatalog {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecipeCatalog for FailingCatalog {
    async fn search_recipes(&self, _filters: &SearchFilters) -> AppResult<Vec<RecipeSummary>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(AppError::unavailable("recipe catalog"))
    }

    async fn get_recipe_by_id(&self, _id: &str) -> AppResult<Option<RecipeDetail>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(AppError::unavailable("recipe catalog"))
    }
}

/// Catalog that serves searches but fails detail fetches for chosen ids
pub struct FlakyDetailCatalog {
    pub inner: InMemoryCatalog,
    pub failing_ids: Vec<String>,
}

#[async_trait]
impl RecipeCatalog for FlakyDetailCatalog {
    async fn search_recipes(&self, filters: &SearchFilters) -> AppResult<Vec<RecipeSummary>> {
        self.inner.search_recipes(filters).await
    }

    async fn get_recipe_by_id(&self, id: &str) -> AppResult<Option<RecipeDetail>> {
        if self.failing_ids.iter().any(|f| f == id) {
            return Err(AppError::internal(format!("detail store error for {id}")));
        }
        self.inner.get_recipe_by_id(id).await
    }
}
