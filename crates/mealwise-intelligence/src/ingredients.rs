// ABOUTME: Ingredient matcher computing overlap between a search list and a recipe's ingredients
// ABOUTME: Used for ingredient-only search ranking and for pantry slots in the plan generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealwise_core::models::RecipeSummary;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Overlap between search ingredients and a recipe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IngredientOverlap {
    /// Search ingredients found in the recipe
    pub match_count: usize,
    /// `match_count / search ingredients`, zero for an empty search list
    pub ratio: f64,
}

impl IngredientOverlap {
    const NONE: Self = Self {
        match_count: 0,
        ratio: 0.0,
    };

    fn from_counts(match_count: usize, searched: usize) -> Self {
        if searched == 0 {
            return Self::NONE;
        }
        Self {
            match_count,
            ratio: match_count as f64 / searched as f64,
        }
    }
}

/// Case-insensitive, bidirectional substring overlap
///
/// Blank entries on either side are ignored.
#[must_use]
pub fn overlap_score<S, R>(search_ingredients: &[S], recipe_ingredient_names: &[R]) -> IngredientOverlap
where
    S: AsRef<str>,
    R: AsRef<str>,
{
    let searched = lowered_non_blank(search_ingredients);
    let recipe = lowered_non_blank(recipe_ingredient_names);
    let match_count = searched
        .iter()
        .filter(|term| {
            recipe
                .iter()
                .any(|name| name.contains(term.as_str()) || term.contains(name.as_str()))
        })
        .count();
    IngredientOverlap::from_counts(match_count, searched.len())
}

/// Lenient match used by ingredient-only search
///
/// Both sides are normalised (punctuation and underscores become spaces).
/// Matches on equality, on any pair of words longer than two characters
/// that contain each other or share a singular form, or on whole-string
/// containment.
#[must_use]
pub fn ingredient_matches(search: &str, candidate: &str) -> bool {
    let search = normalize_ingredient(search);
    let candidate = normalize_ingredient(candidate);
    if search.is_empty() || candidate.is_empty() {
        return false;
    }
    if search == candidate {
        return true;
    }

    let search_words = meaningful_words(&search);
    let candidate_words = meaningful_words(&candidate);
    let word_hit = search_words.iter().any(|s| {
        candidate_words.iter().any(|c| {
            if c.contains(s) || s.contains(c) {
                return true;
            }
            let s_single = singular(s);
            let c_single = singular(c);
            s_single.len() > 2
                && (s_single == c_single || c.contains(&s_single) || s.contains(&c_single))
        })
    });

    word_hit || candidate.contains(&search) || search.contains(&candidate)
}

/// Overlap using [`ingredient_matches`]
#[must_use]
pub fn lenient_overlap<S, R>(search_ingredients: &[S], candidates: &[R]) -> IngredientOverlap
where
    S: AsRef<str>,
    R: AsRef<str>,
{
    let searched: Vec<&str> = search_ingredients
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| !s.trim().is_empty())
        .collect();
    let match_count = searched
        .iter()
        .filter(|term| candidates.iter().any(|c| ingredient_matches(term, c.as_ref())))
        .count();
    IngredientOverlap::from_counts(match_count, searched.len())
}

/// A recipe ranked by ingredient overlap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientMatch {
    /// Recipe
    pub recipe: RecipeSummary,
    /// Overlap with the search list
    pub overlap: IngredientOverlap,
}

/// Rank summaries by ingredient overlap with their title and description
///
/// Recipes without any match are dropped. Sorted by ratio, then match count,
/// both descending; ties keep catalog order. At most `limit` results.
#[must_use]
pub fn rank_by_ingredients<S: AsRef<str>>(
    recipes: Vec<RecipeSummary>,
    search_ingredients: &[S],
    limit: usize,
) -> Vec<IngredientMatch> {
    let mut ranked: Vec<IngredientMatch> = recipes
        .into_iter()
        .filter_map(|recipe| {
            let terms = [recipe.title.as_str(), recipe.description.as_str()];
            let overlap = lenient_overlap(search_ingredients, &terms);
            (overlap.match_count > 0).then_some(IngredientMatch { recipe, overlap })
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.overlap
            .ratio
            .partial_cmp(&a.overlap.ratio)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.overlap.match_count.cmp(&a.overlap.match_count))
    });
    ranked.truncate(limit);
    ranked
}

/// Lower-case, replace punctuation and underscores with spaces, collapse whitespace
#[must_use]
pub fn normalize_ingredient(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn meaningful_words(value: &str) -> Vec<&str> {
    value.split(' ').filter(|w| w.chars().count() > 2).collect()
}

fn singular(word: &str) -> String {
    word.strip_suffix("ies").map_or_else(
        || word.strip_suffix('s').unwrap_or(word).to_owned(),
        |stem| format!("{stem}y"),
    )
}

fn lowered_non_blank<T: AsRef<str>>(values: &[T]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.as_ref().trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_is_bidirectional() {
        let overlap = overlap_score(&["Chicken", "rice", "saffron"], &["chicken breast", "ric"]);
        assert_eq!(overlap.match_count, 2);
        assert!((overlap.ratio - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_search_list_has_zero_ratio() {
        let empty: [&str; 0] = [];
        let overlap = overlap_score(&empty, &["egg"]);
        assert_eq!(overlap.match_count, 0);
        assert!(overlap.ratio.abs() < f64::EPSILON);

        let blanks = overlap_score(&["", "  "], &["egg"]);
        assert!(blanks.ratio.abs() < f64::EPSILON);
    }

    #[test]
    fn test_lenient_match_handles_plurals_and_punctuation() {
        assert!(ingredient_matches("potato", "Potatoes, diced"));
        assert!(ingredient_matches("berries", "blueberry"));
        assert!(ingredient_matches("green_onion", "green onions"));
        assert!(!ingredient_matches("egg", "Lemon Tart"));
        assert!(!ingredient_matches("", "anything"));
    }

    #[test]
    fn test_rank_prefers_higher_ratio() {
        let mut both = RecipeSummary::new("both", "Spinach and Egg Frittata");
        both.description = "Quick breakfast".to_owned();
        let egg_only = RecipeSummary::new("egg", "Deviled Eggs");
        let none = RecipeSummary::new("none", "Lemon Tart");

        let ranked = rank_by_ingredients(vec![egg_only, none, both], &["egg", "spinach"], 10);
        let ids: Vec<_> = ranked.iter().map(|m| m.recipe.id.as_str()).collect();
        assert_eq!(ids, vec!["both", "egg"]);
        assert!((ranked[0].overlap.ratio - 1.0).abs() < f64::EPSILON);
    }
}
