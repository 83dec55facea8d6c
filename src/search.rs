// ABOUTME: Recipe search service combining catalog lookup, relevance ranking, and safety filtering
// ABOUTME: Text queries use tiered scoring, ingredient-only queries rank by overlap ratio
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe Search
//!
//! - Text query: catalog search, relevance scoring, exact-tier partition.
//!   Requested ingredients then narrow the partitioned list; a strong title
//!   match can therefore push out a better ingredient match.
//! - Ingredients only: catalog search with an empty query, ranked by
//!   overlap ratio and match count.
//! - Neither: catalog order.

use crate::catalog::{RecipeCatalog, SearchFilters};
use mealwise_core::models::{MedicalProfile, RecipeDetail, RecipeSummary, SafetyResult};
use mealwise_core::{AppError, AppResult};
use mealwise_intelligence::ingredients::{lenient_overlap, rank_by_ingredients};
use mealwise_intelligence::relevance::score_all;
use mealwise_intelligence::{partition, IngredientOverlap, SearchRankingConfig};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

const CATALOG_SERVICE: &str = "recipe catalog";

/// Search input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text query
    pub query: String,
    /// Ingredients to look for
    pub ingredients: Vec<String>,
    /// Diet tag
    pub diet: Option<String>,
    /// Meal-type tag
    pub meal_type: Option<String>,
    /// Upper bound on prep plus cook minutes
    pub max_total_minutes: Option<u32>,
    /// Result limit; the configured default applies when absent
    pub limit: Option<usize>,
}

/// One ranked result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Recipe
    pub recipe: RecipeSummary,
    /// Text relevance score, zero without a text query
    pub score: u32,
    /// Overlap with the requested ingredients
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient_overlap: Option<IngredientOverlap>,
}

/// A search result that passed the safety check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafeHit {
    /// Full recipe record
    pub recipe: RecipeDetail,
    /// Text relevance score
    pub score: u32,
    /// Safety evaluation, possibly with warnings
    pub safety: SafetyResult,
}

/// Search service over a recipe catalog
#[derive(Clone)]
pub struct RecipeSearch {
    catalog: Arc<dyn RecipeCatalog>,
    config: SearchRankingConfig,
}

impl RecipeSearch {
    /// Search service with the given ranking limits
    #[must_use]
    pub fn new(catalog: Arc<dyn RecipeCatalog>, config: SearchRankingConfig) -> Self {
        Self { catalog, config }
    }

    /// Ranked search
    ///
    /// # Errors
    ///
    /// Returns an `ExternalServiceError` when the catalog search fails; unavailable
    /// catalogs keep their `ExternalServiceUnavailable` code
    pub async fn search(&self, request: &SearchRequest) -> AppResult<Vec<SearchHit>> {
        let limit = request.limit.filter(|l| *l > 0).unwrap_or(self.config.default_limit);
        let ingredients: Vec<String> = request
            .ingredients
            .iter()
            .map(|i| i.trim().to_owned())
            .filter(|i| !i.is_empty())
            .collect();
        let filters = SearchFilters {
            query: request.query.trim().to_owned(),
            include_ingredients: ingredients.clone(),
            diet: request.diet.clone(),
            meal_type: request.meal_type.clone(),
            max_total_minutes: request.max_total_minutes,
            limit,
        };

        let summaries = self
            .catalog
            .search_recipes(&filters)
            .await
            .map_err(as_catalog_error)?;
        debug!(
            query = %filters.query,
            ingredients = ingredients.len(),
            candidates = summaries.len(),
            "Catalog search returned"
        );

        let hits = if filters.query.is_empty() && ingredients.is_empty() {
            summaries
                .into_iter()
                .take(limit)
                .map(|recipe| SearchHit {
                    recipe,
                    score: 0,
                    ingredient_overlap: None,
                })
                .collect()
        } else if filters.query.is_empty() {
            rank_by_ingredients(summaries, &ingredients, limit)
                .into_iter()
                .map(|m| SearchHit {
                    recipe: m.recipe,
                    score: 0,
                    ingredient_overlap: Some(m.overlap),
                })
                .collect()
        } else {
            self.rank_text(summaries, &filters.query, &ingredients)
        };
        Ok(hits)
    }

    fn rank_text(
        &self,
        summaries: Vec<RecipeSummary>,
        query: &str,
        ingredients: &[String],
    ) -> Vec<SearchHit> {
        partition(score_all(summaries, query), &self.config)
            .into_iter()
            .filter_map(|scored| {
                if ingredients.is_empty() {
                    return Some(SearchHit {
                        recipe: scored.recipe,
                        score: scored.score,
                        ingredient_overlap: None,
                    });
                }
                let terms = [
                    scored.recipe.title.as_str(),
                    scored.recipe.description.as_str(),
                ];
                let overlap = lenient_overlap(ingredients, &terms);
                (overlap.match_count > 0).then_some(SearchHit {
                    recipe: scored.recipe,
                    score: scored.score,
                    ingredient_overlap: Some(overlap),
                })
            })
            .collect()
    }

    /// Ranked search limited to recipes safe for `profiles`
    ///
    /// Details are fetched one at a time. Missing records and failed fetches
    /// are logged and dropped.
    ///
    /// # Errors
    ///
    /// Returns an `ExternalServiceError` when the catalog search fails; unavailable
    /// catalogs keep their `ExternalServiceUnavailable` code
    pub async fn search_safe(
        &self,
        request: &SearchRequest,
        profiles: &[MedicalProfile],
    ) -> AppResult<Vec<SafeHit>> {
        let hits = self.search(request).await?;
        let mut safe_hits = Vec::with_capacity(hits.len());

        for hit in hits {
            let detail = match self.catalog.get_recipe_by_id(&hit.recipe.id).await {
                Ok(Some(detail)) => detail,
                Ok(None) => {
                    debug!(recipe_id = %hit.recipe.id, "Recipe detail not found");
                    continue;
                }
                Err(e) => {
                    warn!(recipe_id = %hit.recipe.id, error = %e, "Recipe detail fetch failed");
                    continue;
                }
            };
            let safety = mealwise_intelligence::evaluate(&detail, profiles, None);
            if safety.safe {
                safe_hits.push(SafeHit {
                    recipe: detail,
                    score: hit.score,
                    safety,
                });
            } else {
                debug!(
                    recipe_id = %hit.recipe.id,
                    conflicts = safety.conflicts.len(),
                    "Dropped unsafe search result"
                );
            }
        }
        Ok(safe_hits)
    }
}

fn as_catalog_error(err: AppError) -> AppError {
    if err.code.is_transient() {
        return err;
    }
    AppError::external_service(CATALOG_SERVICE, err.message.clone()).with_source(err)
}
