// ABOUTME: Recipe catalog abstraction used by search and plan generation
// ABOUTME: Async search and detail fetch trait plus an in-memory implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe Catalog
//!
//! The engine never talks to a store directly. Callers supply a
//! [`RecipeCatalog`]; its results are treated as opaque, re-ranked and
//! safety-checked by the engine.

use async_trait::async_trait;
use mealwise_core::models::{RecipeDetail, RecipeSummary};
use mealwise_core::AppResult;
use mealwise_intelligence::ingredients::ingredient_matches;
use mealwise_intelligence::normalize_query;
use serde::{Deserialize, Serialize};

/// Catalog search parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Free-text query; blank means no text constraint
    pub query: String,
    /// Ingredients the recipe should contain
    pub include_ingredients: Vec<String>,
    /// Diet tag
    pub diet: Option<String>,
    /// Meal-type tag
    pub meal_type: Option<String>,
    /// Upper bound on prep plus cook minutes
    pub max_total_minutes: Option<u32>,
    /// Maximum results; zero means the catalog default
    pub limit: usize,
}

impl SearchFilters {
    /// Text search
    #[must_use]
    pub fn text(query: impl Into<String>, limit: usize) -> Self {
        Self {
            query: query.into(),
            limit,
            ..Self::default()
        }
    }

    /// Ingredient-biased search with an empty text query
    #[must_use]
    pub fn ingredients(ingredients: Vec<String>, limit: usize) -> Self {
        Self {
            include_ingredients: ingredients,
            limit,
            ..Self::default()
        }
    }

    /// Restrict to a meal type
    #[must_use]
    pub fn with_meal_type(mut self, meal_type: impl Into<String>) -> Self {
        self.meal_type = Some(meal_type.into());
        self
    }
}

/// Source of recipe summaries and details
///
/// Implementations must be `Send + Sync`; the engine calls them sequentially.
#[async_trait]
pub trait RecipeCatalog: Send + Sync {
    /// Search recipe summaries
    async fn search_recipes(&self, filters: &SearchFilters) -> AppResult<Vec<RecipeSummary>>;

    /// Fetch the full record of one recipe; `None` when it does not exist
    async fn get_recipe_by_id(&self, id: &str) -> AppResult<Option<RecipeDetail>>;
}

/// Catalog backed by a vector of detail records
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    recipes: Vec<RecipeDetail>,
}

impl InMemoryCatalog {
    /// Catalog over the given recipes, searched in insertion order
    #[must_use]
    pub const fn new(recipes: Vec<RecipeDetail>) -> Self {
        Self { recipes }
    }

    /// Add a recipe
    pub fn insert(&mut self, recipe: RecipeDetail) {
        self.recipes.push(recipe);
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog holds no recipes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    fn matches(recipe: &RecipeDetail, filters: &SearchFilters, query_words: &[&str]) -> bool {
        let summary = &recipe.summary;
        if !query_words.is_empty() {
            let text = normalize_query(&format!("{} {}", summary.title, summary.description));
            if !query_words.iter().any(|word| text.contains(word)) {
                return false;
            }
        }

        if !filters.include_ingredients.is_empty() {
            let names = recipe.ingredient_names();
            let hit = filters.include_ingredients.iter().any(|wanted| {
                ingredient_matches(wanted, &summary.title)
                    || names.iter().any(|name| ingredient_matches(wanted, name))
            });
            if !hit {
                return false;
            }
        }

        if let Some(diet) = filters.diet.as_deref().filter(|d| !d.trim().is_empty()) {
            if !summary.has_diet(diet) {
                return false;
            }
        }
        if let Some(meal_type) = filters.meal_type.as_deref().filter(|m| !m.trim().is_empty()) {
            if !summary.meal_types.is_empty() && !summary.has_meal_type_in(&[meal_type]) {
                return false;
            }
        }
        match (filters.max_total_minutes, summary.total_minutes()) {
            (Some(max), Some(total)) => total <= max,
            _ => true,
        }
    }
}

#[async_trait]
impl RecipeCatalog for InMemoryCatalog {
    async fn search_recipes(&self, filters: &SearchFilters) -> AppResult<Vec<RecipeSummary>> {
        let query = normalize_query(&filters.query);
        let words: Vec<&str> = query.split(' ').filter(|w| !w.is_empty()).collect();
        let mut found: Vec<RecipeSummary> = self
            .recipes
            .iter()
            .filter(|recipe| Self::matches(recipe, filters, &words))
            .map(|recipe| recipe.summary.clone())
            .collect();
        if filters.limit > 0 {
            found.truncate(filters.limit);
        }
        Ok(found)
    }

    async fn get_recipe_by_id(&self, id: &str) -> AppResult<Option<RecipeDetail>> {
        Ok(self.recipes.iter().find(|r| r.id() == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealwise_core::models::Ingredient;

    fn recipe(id: &str, title: &str, meal_types: &[&str], ingredients: &[&str]) -> RecipeDetail {
        let mut summary = RecipeSummary::new(id, title);
        summary.meal_types = meal_types.iter().map(|t| (*t).to_owned()).collect();
        let mut detail = RecipeDetail::from_summary(summary);
        detail.ingredients = ingredients.iter().map(|n| Ingredient::named(*n)).collect();
        detail
    }

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::new(vec![
            recipe("1", "Chicken Soup", &["lunch"], &["chicken", "carrot"]),
            recipe("2", "Pancakes", &["breakfast"], &["flour", "egg"]),
            recipe("3", "Egg Fried Rice", &[], &["rice", "eggs"]),
        ])
    }

    #[tokio::test]
    async fn test_text_search_matches_any_word() {
        let found = catalog()
            .search_recipes(&SearchFilters::text("chicken pancakes", 10))
            .await
            .unwrap();
        assert_eq!(found.len(), 2);
    }

    #[tokio::test]
    async fn test_ingredient_and_meal_type_filters() {
        let filters = SearchFilters::ingredients(vec!["egg".to_owned()], 10).with_meal_type("breakfast");
        let found = catalog().search_recipes(&filters).await.unwrap();
        let ids: Vec<_> = found.iter().map(|r| r.id.as_str()).collect();
        // untagged recipes pass the meal-type filter
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let catalog = catalog();
        assert!(catalog.get_recipe_by_id("3").await.unwrap().is_some());
        assert!(catalog.get_recipe_by_id("missing").await.unwrap().is_none());
    }
}
