// ABOUTME: Grocery list aggregation over the recipes placed in a meal plan
// ABOUTME: Normalizes ingredient names, merges compatible units, sums amounts, and suggests bulk buys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Grocery List
//!
//! Every planned meal contributes its recipe's ingredients once. Lines are
//! grouped by normalized name and unit group; lines without an amount count
//! as one unit.

use crate::catalog::RecipeCatalog;
use mealwise_core::models::{Ingredient, MealPlan, RecipeDetail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

const PREPARATION_WORDS: &[&str] = &[
    "chopped",
    "diced",
    "minced",
    "sliced",
    "grated",
    "shredded",
    "fresh",
    "dried",
    "frozen",
    "canned",
    "whole",
    "halved",
    "quartered",
];

const UNIT_GROUPS: &[&[&str]] = &[
    &["cup", "cups"],
    &["tbsp", "tablespoon", "tablespoons"],
    &["tsp", "teaspoon", "teaspoons"],
    &["oz", "ounce", "ounces"],
    &["lb", "lbs", "pound", "pounds"],
    &["g", "gram", "grams"],
    &["kg", "kilogram", "kilograms"],
    &["ml", "milliliter", "milliliters"],
    &["l", "liter", "liters"],
    &["clove", "cloves"],
    &["slice", "slices"],
    &["can", "cans"],
    &["package", "packages"],
    &["bag", "bags"],
    &["bunch", "bunches"],
    &["head", "heads"],
    &["piece", "pieces"],
];

const ABBREVIATED_UNITS: &[&str] = &["tbsp", "tsp", "oz", "lb", "g", "kg", "ml", "l"];

/// (name fragment, minimum total, suggestion)
const BULK_SUGGESTIONS: &[(&str, f64, &str)] = &[
    ("tomato", 3.0, "bag of tomatoes"),
    ("onion", 3.0, "bag of onions"),
    ("potato", 3.0, "bag of potatoes"),
    ("apple", 4.0, "bag of apples"),
    ("orange", 4.0, "bag of oranges"),
    ("carrot", 5.0, "bag of carrots"),
    ("garlic", 5.0, "bulb of garlic"),
    ("bell pepper", 3.0, "multi-pack of bell peppers"),
    ("chicken", 2.0, "family pack of chicken"),
    ("ground beef", 2.0, "family pack of ground beef"),
];

/// One aggregated shopping line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    /// Display name taken from the first contributing line
    pub name: String,
    /// Normalized name used for grouping
    pub normalized_name: String,
    /// Canonical unit; empty for countable items
    pub unit: String,
    /// Summed amount, rounded to one decimal
    pub total_amount: f64,
    /// Number of ingredient lines merged into this item
    pub count: usize,
    /// Titles of the recipes that use this item, in first-use order
    pub recipes: Vec<String>,
    /// Larger pack worth buying instead
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bulk_suggestion: Option<String>,
}

impl GroceryItem {
    /// Quantity and name, e.g. `2 cups flour` or `3 eggs`
    #[must_use]
    pub fn quantity_text(&self) -> String {
        if self.unit.is_empty() {
            if (self.total_amount - 1.0).abs() < f64::EPSILON {
                return self.name.clone();
            }
            return format!("{} {}", self.total_amount.round(), self.name);
        }
        let unit = if (self.total_amount - 1.0).abs() < f64::EPSILON {
            self.unit.clone()
        } else {
            plural_unit(&self.unit)
        };
        format!("{} {unit} {}", self.total_amount, self.name)
    }

    /// Display line with bulk hint and recipe count
    #[must_use]
    pub fn display(&self) -> String {
        let mut line = self.quantity_text();
        if let Some(bulk) = &self.bulk_suggestion {
            line.push_str(&format!(" (or {bulk})"));
        }
        if self.count > 1 {
            line.push_str(&format!(" [from {} recipes]", self.count));
        }
        line
    }
}

/// Aggregated list for a plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroceryList {
    /// Items sorted by name
    pub items: Vec<GroceryItem>,
    /// Planned recipes whose details could not be fetched
    pub skipped_recipes: usize,
}

/// Build the grocery list for every filled slot of `plan`
///
/// Each distinct recipe is fetched once. Lookup failures and missing
/// records are logged and skipped.
pub async fn build_grocery_list(catalog: &dyn RecipeCatalog, plan: &MealPlan) -> GroceryList {
    let mut occurrences: BTreeMap<&str, usize> = BTreeMap::new();
    let mut order: Vec<&str> = Vec::new();
    for (_, _, meal) in plan.slots() {
        if let Some(meal) = meal {
            let seen = occurrences.entry(meal.recipe_id.as_str()).or_insert(0);
            if *seen == 0 {
                order.push(meal.recipe_id.as_str());
            }
            *seen += 1;
        }
    }

    let mut details: Vec<(RecipeDetail, usize)> = Vec::with_capacity(order.len());
    let mut skipped_recipes = 0;
    for recipe_id in order {
        match catalog.get_recipe_by_id(recipe_id).await {
            Ok(Some(detail)) => {
                let times = occurrences.get(recipe_id).copied().unwrap_or(1);
                details.push((detail, times));
            }
            Ok(None) => {
                debug!(recipe_id = %recipe_id, "Planned recipe not found, skipped from grocery list");
                skipped_recipes += 1;
            }
            Err(e) => {
                warn!(recipe_id = %recipe_id, error = %e, "Failed to fetch planned recipe for grocery list");
                skipped_recipes += 1;
            }
        }
    }

    let lines = details.iter().flat_map(|(detail, times)| {
        std::iter::repeat(detail)
            .take(*times)
            .flat_map(|d| d.ingredients.iter().map(move |i| (d.title(), i)))
    });
    GroceryList {
        items: aggregate_ingredients(lines),
        skipped_recipes,
    }
}

/// Merge ingredient lines tagged with their recipe title
#[must_use]
pub fn aggregate_ingredients<'a, I>(lines: I) -> Vec<GroceryItem>
where
    I: IntoIterator<Item = (&'a str, &'a Ingredient)>,
{
    let mut groups: BTreeMap<(String, String), GroceryItem> = BTreeMap::new();

    for (recipe_title, ingredient) in lines {
        let normalized = normalize_ingredient_name(&ingredient.name);
        if normalized.is_empty() {
            continue;
        }
        let unit = canonical_unit(&ingredient.unit);
        let amount = ingredient.amount.filter(|a| a.is_finite() && *a > 0.0).unwrap_or(1.0);

        let item = groups
            .entry((normalized.clone(), unit.clone()))
            .or_insert_with(|| GroceryItem {
                name: ingredient.name.trim().to_owned(),
                normalized_name: normalized,
                unit,
                total_amount: 0.0,
                count: 0,
                recipes: Vec::new(),
                bulk_suggestion: None,
            });
        item.total_amount += amount;
        item.count += 1;
        if !item.recipes.iter().any(|r| r == recipe_title) {
            item.recipes.push(recipe_title.to_owned());
        }
    }

    let mut items: Vec<GroceryItem> = groups
        .into_values()
        .map(|mut item| {
            item.total_amount = (item.total_amount * 10.0).round() / 10.0;
            item.bulk_suggestion = bulk_suggestion(&item.normalized_name, item.total_amount);
            item
        })
        .collect();
    items.sort_by_cached_key(|item| item.name.to_lowercase());
    items
}

/// Lower-case, drop parenthesised text and preparation words, collapse whitespace
#[must_use]
pub fn normalize_ingredient_name(name: &str) -> String {
    let mut without_parens = String::with_capacity(name.len());
    let mut depth = 0_usize;
    for c in name.chars() {
        match c {
            '(' => depth += 1,
            ')' if depth > 0 => depth -= 1,
            _ if depth == 0 => without_parens.push(c),
            _ => {}
        }
    }

    without_parens
        .to_lowercase()
        .split_whitespace()
        .filter(|word| {
            let bare = word.trim_matches(|c: char| !c.is_alphanumeric());
            !PREPARATION_WORDS.contains(&bare)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// First spelling of the unit's compatibility group; unknown units are lower-cased
#[must_use]
pub fn canonical_unit(unit: &str) -> String {
    let unit = unit.trim().to_lowercase();
    UNIT_GROUPS
        .iter()
        .find(|group| group.contains(&unit.as_str()))
        .map_or(unit.clone(), |group| group[0].to_owned())
}

fn plural_unit(unit: &str) -> String {
    if unit.ends_with('s') || ABBREVIATED_UNITS.contains(&unit) {
        unit.to_owned()
    } else if unit.ends_with("ch") {
        format!("{unit}es")
    } else {
        format!("{unit}s")
    }
}

fn bulk_suggestion(normalized_name: &str, total: f64) -> Option<String> {
    BULK_SUGGESTIONS
        .iter()
        .find(|(fragment, threshold, _)| normalized_name.contains(fragment) && total >= *threshold)
        .map(|(_, _, suggestion)| (*suggestion).to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_parentheses_and_prep_words() {
        assert_eq!(normalize_ingredient_name("Fresh Basil (chopped)"), "basil");
        assert_eq!(normalize_ingredient_name("Diced Tomatoes"), "tomatoes");
        assert_eq!(normalize_ingredient_name("  Whole   Milk "), "milk");
    }

    #[test]
    fn test_compatible_units_merge() {
        let a = Ingredient::measured("Flour", 1.0, "cup");
        let b = Ingredient::measured("flour", 1.5, "Cups");
        let c = Ingredient::measured("Flour", 100.0, "g");
        let items = aggregate_ingredients(vec![("Bread", &a), ("Cake", &b), ("Cake", &c)]);

        assert_eq!(items.len(), 2);
        let cups = items.iter().find(|i| i.unit == "cup").unwrap();
        assert!((cups.total_amount - 2.5).abs() < f64::EPSILON);
        assert_eq!(cups.recipes, vec!["Bread", "Cake"]);
        assert_eq!(cups.display(), "2.5 cups Flour [from 2 recipes]");
    }

    #[test]
    fn test_bulk_suggestion_threshold() {
        let onion = Ingredient::measured("Onion", 1.0, "");
        let items = aggregate_ingredients(vec![("A", &onion), ("B", &onion), ("C", &onion)]);
        assert_eq!(items[0].bulk_suggestion.as_deref(), Some("bag of onions"));
        assert_eq!(items[0].display(), "3 Onion (or bag of onions) [from 3 recipes]");

        let garlic = Ingredient::measured("Garlic", 2.0, "cloves");
        let few = aggregate_ingredients(vec![("A", &garlic)]);
        assert!(few[0].bulk_suggestion.is_none());
        assert_eq!(few[0].quantity_text(), "2 cloves Garlic");
    }

    #[test]
    fn test_blank_names_are_ignored() {
        let blank = Ingredient::named("  ");
        let salt = Ingredient::named("Salt");
        let items = aggregate_ingredients(vec![("A", &blank), ("A", &salt)]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity_text(), "Salt");
    }
}
