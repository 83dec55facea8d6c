// ABOUTME: Tiered text relevance scoring of recipes against a search query
// ABOUTME: Highest matching tier wins, plus word-overlap bonuses; exact-tier results suppress the rest
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Relevance Scorer
//!
//! | Condition                         | Score  |
//! |-----------------------------------|--------|
//! | title equals query                | 10000  |
//! | title contains query              | 5000   |
//! | title starts with query           | 3000   |
//! | description contains query        | 1000   |
//!
//! Only the first matching tier counts. Every title containing the query
//! also matches the contains tier, so the prefix tier is never reached; the
//! order is kept as is. Word-overlap bonuses are added on top:
//! `floor(100 * title_words / query_words)` and
//! `floor(20 * description_words / query_words)`.

use crate::config::SearchRankingConfig;
use mealwise_core::constants::scoring::relevance;
use mealwise_core::models::RecipeSummary;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// A recipe with its relevance score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecipe {
    /// Recipe
    pub recipe: RecipeSummary,
    /// Relevance score
    pub score: u32,
}

/// Lower-case, trim, and collapse internal whitespace
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Score a recipe against an already normalized query
#[must_use]
pub fn score(recipe: &RecipeSummary, normalized_query: &str) -> u32 {
    let query = normalized_query;
    let words: Vec<&str> = query.split_whitespace().collect();
    if words.is_empty() {
        return 0;
    }

    let title = normalize_query(&recipe.title);
    let description = normalize_query(&recipe.description);

    let tier = if title == query {
        relevance::EXACT_TITLE
    } else if title.contains(query) {
        relevance::TITLE_CONTAINS
    } else if title.starts_with(query) {
        relevance::TITLE_PREFIX
    } else if description.contains(query) {
        relevance::DESCRIPTION_CONTAINS
    } else {
        0
    };

    let total = words.len() as u32;
    let title_matches = words.iter().filter(|w| title.contains(**w)).count() as u32;
    let description_matches = words.iter().filter(|w| description.contains(**w)).count() as u32;

    tier + relevance::TITLE_WORD_BONUS * title_matches / total
        + relevance::DESCRIPTION_WORD_BONUS * description_matches / total
}

/// Score every recipe against `query`
#[must_use]
pub fn score_all(recipes: Vec<RecipeSummary>, query: &str) -> Vec<ScoredRecipe> {
    let normalized = normalize_query(query);
    recipes
        .into_iter()
        .map(|recipe| {
            let score = score(&recipe, &normalized);
            ScoredRecipe { recipe, score }
        })
        .collect()
}

/// Apply the exact-tier cutoff
///
/// When any result reaches the exact-tier threshold, only exact-tier results
/// are kept, up to `exact_tier_limit`. Otherwise the best `partial_limit`
/// results are kept. Ties keep their input order.
#[must_use]
pub fn partition(mut scored: Vec<ScoredRecipe>, config: &SearchRankingConfig) -> Vec<ScoredRecipe> {
    scored.sort_by_key(|s| Reverse(s.score));

    let has_exact = scored
        .first()
        .is_some_and(|best| best.score >= config.exact_tier_threshold);
    if has_exact {
        scored.retain(|s| s.score >= config.exact_tier_threshold);
        scored.truncate(config.exact_tier_limit);
    } else {
        scored.truncate(config.partial_limit);
    }
    scored
}
