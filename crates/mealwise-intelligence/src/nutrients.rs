// ABOUTME: Nutrient accessor resolving source nutrient names to canonical per-serving values
// ABOUTME: Exact match, then substring match, then the alias table; missing stays distinct from zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrient Accessor
//!
//! Catalog nutrition records use inconsistent names ("Carbohydrates",
//! "Total Carbohydrates", "carbs", "Fe"). [`lookup`] resolves a requested
//! name against a record in three passes:
//!
//! 1. exact, case-insensitive name match
//! 2. the record name contains the requested name
//! 3. the alias table of the requested nutrient, in order; an alias matches
//!    when either string contains the other. Aliases shorter than three
//!    characters (`k`, `p`, `na`, `fe`) only match a record name exactly.
//!
//! Each pass scans the record in source order and the first hit wins, so
//! "Total Carbohydrates" listed ahead of "Net Carbohydrates" resolves to the
//! total. `None` means the nutrient is not documented, which callers treat
//! differently from a documented zero.

use mealwise_core::constants::nutrients::MIN_FUZZY_ALIAS_LEN;
use mealwise_core::models::{Nutrient, NutrientAmount, NutrientRecord, RecipeDetail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Resolved value of one nutrient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientValue {
    /// Amount per serving
    pub per_serving: f64,
    /// Amount for the whole recipe
    pub total: f64,
    /// Unit reported by the source
    pub unit: String,
}

/// Resolve `name` in `nutrients` and divide by `max(servings, 1)`
#[must_use]
pub fn lookup(nutrients: &NutrientRecord, name: &str, servings: f64) -> Option<NutrientValue> {
    let wanted = name.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }
    let entries: Vec<(String, &NutrientAmount)> = nutrients
        .iter()
        .map(|(key, amount)| (key.trim().to_lowercase(), amount))
        .collect();

    let found = entries
        .iter()
        .find(|(key, _)| *key == wanted)
        .or_else(|| entries.iter().find(|(key, _)| key.contains(&wanted)))
        .map(|(_, amount)| *amount)
        .or_else(|| resolve_alias(&entries, &wanted))?;

    Some(NutrientValue {
        per_serving: found.amount / servings.max(1.0),
        total: found.amount,
        unit: found.unit.clone(),
    })
}

/// [`lookup`] by canonical key
#[must_use]
pub fn lookup_nutrient(
    nutrients: &NutrientRecord,
    nutrient: Nutrient,
    servings: f64,
) -> Option<NutrientValue> {
    lookup(nutrients, nutrient.canonical_name(), servings)
}

fn resolve_alias<'a>(entries: &[(String, &'a NutrientAmount)], wanted: &str) -> Option<&'a NutrientAmount> {
    let target = Nutrient::from_name(wanted);
    let aliases = target.map_or(&[][..], Nutrient::aliases);

    aliases.iter().find_map(|alias| {
        entries
            .iter()
            .find(|(key, _)| alias_matches(key, alias, target))
            .map(|(_, amount)| *amount)
    })
}

fn alias_matches(key: &str, alias: &str, target: Option<Nutrient>) -> bool {
    if key == alias {
        return true;
    }
    if alias.chars().count() < MIN_FUZZY_ALIAS_LEN || key.chars().count() < MIN_FUZZY_ALIAS_LEN {
        return false;
    }
    if key.contains(alias) {
        return true;
    }
    // "saturated fat" contains "fat", but a plain fat entry is not saturated fat
    alias.contains(key) && Nutrient::from_name(key).is_none_or(|named| Some(named) == target)
}

/// Canonical per-serving view of a recipe's nutrition, computed per evaluation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientView {
    values: BTreeMap<Nutrient, NutrientValue>,
}

impl NutrientView {
    /// Resolve every canonical nutrient of a record
    #[must_use]
    pub fn from_record(nutrients: &NutrientRecord, servings: f64) -> Self {
        let values = Nutrient::ALL
            .into_iter()
            .filter_map(|nutrient| {
                lookup_nutrient(nutrients, nutrient, servings).map(|value| (nutrient, value))
            })
            .collect();
        Self { values }
    }

    /// View of a recipe; `servings_override` replaces the documented servings
    #[must_use]
    pub fn from_recipe(recipe: &RecipeDetail, servings_override: Option<f64>) -> Self {
        let servings = servings_override
            .filter(|s| s.is_finite() && *s > 0.0)
            .unwrap_or_else(|| recipe.summary.servings_divisor());
        Self::from_record(&recipe.nutrients, servings)
    }

    /// Resolved value
    #[must_use]
    pub fn get(&self, nutrient: Nutrient) -> Option<&NutrientValue> {
        self.values.get(&nutrient)
    }

    /// Per-serving amount
    #[must_use]
    pub fn per_serving(&self, nutrient: Nutrient) -> Option<f64> {
        self.values.get(&nutrient).map(|v| v.per_serving)
    }

    /// Every resolved nutrient
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, &NutrientValue)> {
        self.values.iter().map(|(nutrient, value)| (*nutrient, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(entries: &[(&str, f64, &str)]) -> NutrientRecord {
        entries
            .iter()
            .map(|(name, amount, unit)| {
                (
                    (*name).to_owned(),
                    NutrientAmount {
                        amount: *amount,
                        unit: (*unit).to_owned(),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_exact_match_is_case_insensitive() {
        let nutrients = record(&[("Sodium", 1200.0, "mg")]);
        let value = lookup(&nutrients, "sodium", 2.0).unwrap();
        assert!((value.per_serving - 600.0).abs() < f64::EPSILON);
        assert!((value.total - 1200.0).abs() < f64::EPSILON);
        assert_eq!(value.unit, "mg");
    }

    #[test]
    fn test_substring_match() {
        let nutrients = record(&[("Total Sugars", 30.0, "g")]);
        let value = lookup(&nutrients, "sugar", 3.0).unwrap();
        assert!((value.per_serving - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_substring_match_takes_first_listed_name() {
        let nutrients = record(&[
            ("Total Carbohydrates", 60.0, "g"),
            ("Net Carbohydrates", 40.0, "g"),
        ]);
        let carbs = lookup(&nutrients, "carbohydrates", 1.0).unwrap();
        assert!((carbs.total - 60.0).abs() < f64::EPSILON);

        let nutrients = record(&[("Sugars, total", 20.0, "g"), ("Sugars, added", 8.0, "g")]);
        let sugar = lookup(&nutrients, "sugar", 1.0).unwrap();
        assert!((sugar.total - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_alias_match() {
        let nutrients = record(&[("Carbs", 90.0, "g"), ("Cobalamin", 3.0, "mcg")]);
        assert!(lookup(&nutrients, "carbohydrates", 1.0).is_some());
        assert!(lookup(&nutrients, "vitamin b12", 1.0).is_some());
    }

    #[test]
    fn test_short_alias_requires_exact_name() {
        let nutrients = record(&[("K", 400.0, "mg"), ("Phosphorus", 90.0, "mg")]);
        let potassium = lookup(&nutrients, "potassium", 1.0).unwrap();
        assert!((potassium.total - 400.0).abs() < f64::EPSILON);

        let only_phosphorus = record(&[("Phosphorus", 90.0, "mg")]);
        assert!(lookup(&only_phosphorus, "potassium", 1.0).is_none());
    }

    #[test]
    fn test_plain_fat_is_not_saturated_fat() {
        let nutrients = record(&[("Fat", 20.0, "g")]);
        assert!(lookup(&nutrients, "saturated fat", 1.0).is_none());
        assert!(lookup(&nutrients, "fat", 1.0).is_some());
    }

    #[test]
    fn test_missing_is_none_not_zero() {
        let nutrients = record(&[("Iron", 0.0, "mg")]);
        assert!(lookup(&nutrients, "calcium", 1.0).is_none());
        let iron = lookup(&nutrients, "iron", 1.0).unwrap();
        assert!(iron.per_serving.abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_servings_floor_to_one() {
        let nutrients = record(&[("Protein", 12.0, "g")]);
        let value = lookup(&nutrients, "protein", 0.0).unwrap();
        assert!((value.per_serving - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_view_uses_override() {
        let nutrients = record(&[("Calories", 800.0, "kcal")]);
        let view = NutrientView::from_record(&nutrients, 4.0);
        assert!((view.per_serving(Nutrient::Calories).unwrap() - 200.0).abs() < f64::EPSILON);
        assert!(view.get(Nutrient::Zinc).is_none());
    }
}
