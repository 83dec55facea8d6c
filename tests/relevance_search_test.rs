// ABOUTME: Integration tests for ranked recipe search over an in-memory catalog
// ABOUTME: Covers exact-tier suppression, ingredient-only ranking, safety filtering, and catalog failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, FailingCatalog, FlakyDetailCatalog, RecipeFixture};
use mealwise_engine::catalog::InMemoryCatalog;
use mealwise_engine::config::SearchRankingConfig;
use mealwise_engine::intelligence::{normalize_query, score};
use mealwise_engine::models::{MedicalProfile, RecipeDetail, RecipeSummary};
use mealwise_engine::search::{RecipeSearch, SearchRequest};
use mealwise_engine::ErrorCode;
use std::collections::BTreeSet;
use std::sync::Arc;

fn search_over(recipes: Vec<RecipeDetail>) -> RecipeSearch {
    RecipeSearch::new(
        Arc::new(InMemoryCatalog::new(recipes)),
        SearchRankingConfig::default(),
    )
}

fn text(query: &str) -> SearchRequest {
    SearchRequest {
        query: query.to_owned(),
        ..SearchRequest::default()
    }
}

// ============================================================================
// Relevance tiers
// ============================================================================

#[test]
fn test_score_tiers_for_chicken_soup() {
    let query = normalize_query("  Chicken   SOUP ");
    let exact = RecipeSummary::new("1", "Chicken Soup");
    let contains = RecipeSummary::new("2", "Best Chicken Soup Ever");
    let unrelated = RecipeSummary::new("3", "Lemon Tart");

    assert!(score(&exact, &query) >= 10_000);
    let middle = score(&contains, &query);
    assert!((5_000..10_000).contains(&middle));
    assert_eq!(score(&unrelated, &query), 0);
}

#[tokio::test]
async fn test_exact_tier_suppresses_partial_matches() {
    init_test_logging();
    let search = search_over(vec![
        RecipeFixture::new("1", "Chicken Salad").build(),
        RecipeFixture::new("2", "Best Chicken Soup Ever").build(),
        RecipeFixture::new("3", "Tomato Soup").build(),
        RecipeFixture::new("4", "Chicken Soup").build(),
        RecipeFixture::new("5", "Roast Chicken")
            .description("Goes well with soup")
            .build(),
    ]);

    let hits = search.search(&text("chicken soup")).await.unwrap();

    let ids: Vec<_> = hits.iter().map(|h| h.recipe.id.as_str()).collect();
    assert_eq!(ids, vec!["4", "2"]);
    assert!(hits.iter().all(|h| h.score >= 5_000));
}

#[tokio::test]
async fn test_exact_tier_is_capped_at_five() {
    let recipes = (0..8)
        .map(|i| RecipeFixture::new(&format!("p{i}"), &format!("Pasta Bake {i}")).build())
        .collect();
    let hits = search_over(recipes).search(&text("pasta")).await.unwrap();

    assert_eq!(hits.len(), 5);
    assert!(hits.iter().all(|h| h.score >= 5_000));
}

#[tokio::test]
async fn test_partial_tier_keeps_ten_best() {
    let recipes = (0..12)
        .map(|i| {
            RecipeFixture::new(&format!("n{i}"), &format!("Dish {i}"))
                .description("quick noodles")
                .build()
        })
        .collect();
    let hits = search_over(recipes)
        .search(&text("spicy noodles"))
        .await
        .unwrap();

    assert_eq!(hits.len(), 10);
    assert!(hits.iter().all(|h| h.score < 5_000));
}

// ============================================================================
// Ingredient search
// ============================================================================

fn breakfast_catalog() -> Vec<RecipeDetail> {
    vec![
        RecipeFixture::new("1", "Egg Salad Sandwich")
            .ingredients(&["eggs", "mayonnaise", "bread"])
            .build(),
        RecipeFixture::new("2", "Spinach Salad")
            .ingredients(&["spinach", "walnuts"])
            .build(),
        RecipeFixture::new("3", "Spinach and Egg Scramble")
            .ingredients(&["eggs", "spinach"])
            .build(),
        RecipeFixture::new("4", "Pancakes")
            .ingredients(&["flour", "egg", "milk"])
            .build(),
        RecipeFixture::new("5", "Eggs Florentine")
            .description("Poached eggs on wilted spinach")
            .ingredients(&["eggs", "spinach", "muffin"])
            .build(),
        RecipeFixture::new("6", "Beef Stew")
            .ingredients(&["beef", "potato"])
            .build(),
        RecipeFixture::new("7", "Deviled Eggs")
            .ingredients(&["eggs", "paprika"])
            .build(),
        RecipeFixture::new("8", "Spinach Frittata")
            .description("A baked egg dish")
            .ingredients(&["eggs", "spinach", "onion"])
            .build(),
        RecipeFixture::new("9", "Lemon Cake")
            .ingredients(&["flour", "lemon", "sugar"])
            .build(),
        RecipeFixture::new("10", "Creamed Spinach")
            .ingredients(&["spinach", "cream"])
            .build(),
    ]
}

#[tokio::test]
async fn test_ingredient_only_search_ranks_full_matches_first() {
    init_test_logging();
    let search = search_over(breakfast_catalog());
    let request = SearchRequest {
        ingredients: vec!["egg".to_owned(), "spinach".to_owned()],
        ..SearchRequest::default()
    };

    let hits = search.search(&request).await.unwrap();

    let top: BTreeSet<_> = hits.iter().take(3).map(|h| h.recipe.id.as_str()).collect();
    assert_eq!(top, BTreeSet::from(["3", "5", "8"]));
    for hit in &hits[..3] {
        let overlap = hit.ingredient_overlap.unwrap();
        assert_eq!(overlap.match_count, 2);
        assert!((overlap.ratio - 1.0).abs() < f64::EPSILON);
    }
    for hit in &hits[3..] {
        assert!(hit.ingredient_overlap.unwrap().ratio < 1.0);
    }
    // pancakes only mention egg in the ingredient list, not title or description
    assert!(hits.iter().all(|h| h.recipe.id != "4"));
}

#[tokio::test]
async fn test_text_query_then_ingredient_filter() {
    let search = search_over(breakfast_catalog());
    let request = SearchRequest {
        query: "salad".to_owned(),
        ingredients: vec!["egg".to_owned()],
        ..SearchRequest::default()
    };

    let hits = search.search(&request).await.unwrap();
    let ids: Vec<_> = hits.iter().map(|h| h.recipe.id.as_str()).collect();
    assert_eq!(ids, vec!["1"]);
    assert!(hits[0].score >= 5_000);
}

#[tokio::test]
async fn test_blank_request_returns_catalog_order() {
    let search = search_over(breakfast_catalog());
    let request = SearchRequest {
        query: "   ".to_owned(),
        limit: Some(4),
        ..SearchRequest::default()
    };

    let hits = search.search(&request).await.unwrap();
    let ids: Vec<_> = hits.iter().map(|h| h.recipe.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4"]);
    assert!(hits.iter().all(|h| h.score == 0));
}

// ============================================================================
// Safety filtering and failures
// ============================================================================

#[tokio::test]
async fn test_search_safe_drops_unsafe_recipes() {
    let search = search_over(breakfast_catalog());
    let profile = MedicalProfile::avoiding("nuts", "Tree Nut Allergy", ["walnuts"]);

    let hits = search
        .search_safe(&text("salad"), &[profile])
        .await
        .unwrap();

    let ids: Vec<_> = hits.iter().map(|h| h.recipe.id()).collect();
    assert_eq!(ids, vec!["1"]);
    assert!(hits[0].safety.safe);
}

#[tokio::test]
async fn test_search_safe_skips_failed_detail_fetches() {
    let catalog = FlakyDetailCatalog {
        inner: InMemoryCatalog::new(breakfast_catalog()),
        failing_ids: vec!["2".to_owned()],
    };
    let search = RecipeSearch::new(Arc::new(catalog), SearchRankingConfig::default());

    let hits = search.search_safe(&text("salad"), &[]).await.unwrap();
    let ids: Vec<_> = hits.iter().map(|h| h.recipe.id()).collect();
    assert_eq!(ids, vec!["1"]);
}

#[tokio::test]
async fn test_catalog_failure_propagates() {
    init_test_logging();
    let search = RecipeSearch::new(
        Arc::new(FailingCatalog::default()),
        SearchRankingConfig::default(),
    );

    let err = search.search(&text("soup")).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
    assert!(err.code.is_transient());
}
