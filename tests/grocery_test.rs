// ABOUTME: Integration tests for grocery list aggregation over a meal plan
// ABOUTME: Verifies merging across planned meals, recipe attribution, and tolerance of missing recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, FlakyDetailCatalog, RecipeFixture};
use mealwise_engine::catalog::InMemoryCatalog;
use mealwise_engine::grocery::build_grocery_list;
use mealwise_engine::models::{MealPlan, MealSlot, PlannedMeal, RecipeDetail};
use std::collections::BTreeSet;

fn planned(id: &str, title: &str) -> PlannedMeal {
    PlannedMeal {
        recipe_id: id.to_owned(),
        title: title.to_owned(),
        image: None,
        assigned_member_ids: BTreeSet::new(),
        servings_needed: 4,
    }
}

fn recipes() -> Vec<RecipeDetail> {
    vec![
        RecipeFixture::new("omelette", "Herb Omelette")
            .measured("Eggs", 3.0, "")
            .measured("Fresh Chives (chopped)", 1.0, "tbsp")
            .measured("Butter", 1.0, "tablespoon")
            .build(),
        RecipeFixture::new("pasta", "Tomato Pasta")
            .measured("Diced Tomatoes", 2.0, "cans")
            .measured("Onion", 1.0, "")
            .measured("Butter", 2.0, "tbsp")
            .build(),
    ]
}

#[tokio::test]
async fn test_grocery_list_merges_across_meals() {
    init_test_logging();
    let catalog = InMemoryCatalog::new(recipes());
    let mut plan = MealPlan::new(false);
    plan.assign(0, MealSlot::Breakfast, planned("omelette", "Herb Omelette"));
    plan.assign(1, MealSlot::Breakfast, planned("omelette", "Herb Omelette"));
    plan.assign(0, MealSlot::Dinner, planned("pasta", "Tomato Pasta"));

    let list = build_grocery_list(&catalog, &plan).await;

    assert_eq!(list.skipped_recipes, 0);
    let eggs = list.items.iter().find(|i| i.normalized_name == "eggs").unwrap();
    assert!((eggs.total_amount - 6.0).abs() < f64::EPSILON);
    assert_eq!(eggs.quantity_text(), "6 Eggs");

    let butter = list.items.iter().find(|i| i.normalized_name == "butter").unwrap();
    assert_eq!(butter.unit, "tbsp");
    assert!((butter.total_amount - 4.0).abs() < f64::EPSILON);
    assert_eq!(butter.recipes, vec!["Herb Omelette", "Tomato Pasta"]);

    let chives = list.items.iter().find(|i| i.normalized_name == "chives").unwrap();
    assert_eq!(chives.name, "Fresh Chives (chopped)");

    let tomatoes = list.items.iter().find(|i| i.normalized_name == "tomatoes").unwrap();
    assert_eq!(tomatoes.unit, "can");
    assert_eq!(tomatoes.display(), "2 cans Diced Tomatoes");
}

#[tokio::test]
async fn test_missing_and_failing_recipes_are_skipped() {
    let catalog = FlakyDetailCatalog {
        inner: InMemoryCatalog::new(recipes()),
        failing_ids: vec!["pasta".to_owned()],
    };
    let mut plan = MealPlan::new(false);
    plan.assign(0, MealSlot::Lunch, planned("omelette", "Herb Omelette"));
    plan.assign(0, MealSlot::Dinner, planned("pasta", "Tomato Pasta"));
    plan.assign(1, MealSlot::Dinner, planned("gone", "Deleted Recipe"));

    let list = build_grocery_list(&catalog, &plan).await;

    assert_eq!(list.skipped_recipes, 2);
    assert!(list.items.iter().all(|i| i.recipes == vec!["Herb Omelette"]));
}

#[tokio::test]
async fn test_empty_plan_has_empty_list() {
    let catalog = InMemoryCatalog::new(recipes());
    let list = build_grocery_list(&catalog, &MealPlan::new(true)).await;
    assert!(list.items.is_empty());
    assert_eq!(list.skipped_recipes, 0);
}
