// ABOUTME: Safety evaluator checking recipes against medical and dietary profiles
// ABOUTME: Nutrient limits and avoided ingredients are hard conflicts, nutrient minimums are warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Safety Evaluator
//!
//! [`evaluate`] checks one recipe against a set of profiles. Every violated
//! limit of every profile is reported; nothing short-circuits. Avoided
//! ingredients always produce a high-severity conflict. Requirement
//! shortfalls, including undocumented nutrients, produce low-severity
//! warnings and never change `safe`.
//!
//! Evaluation is deterministic and performs no I/O.

use crate::nutrients::NutrientView;
use mealwise_core::models::{
    LowerBound, MedicalProfile, NutrientMinimum, RecipeDetail, Requirements, Restrictions,
    SafetyIssue, SafetyResult, Severity, UpperBound,
};

/// Evaluate `recipe` against every profile
///
/// `servings_override` replaces the documented servings as the per-serving
/// divisor; zero or missing servings count as one.
#[must_use]
pub fn evaluate(
    recipe: &RecipeDetail,
    profiles: &[MedicalProfile],
    servings_override: Option<f64>,
) -> SafetyResult {
    let mut result = SafetyResult::default();
    if profiles.is_empty() {
        return result;
    }

    let view = NutrientView::from_recipe(recipe, servings_override);
    for profile in profiles {
        check_restrictions(recipe, &view, profile, &mut result);
        check_requirements(&view, profile, &mut result);
    }
    result
}

/// Whether an ingredient name and an avoided term overlap in either direction
///
/// Both arguments must already be lower-cased. Blank values never match.
#[must_use]
pub fn avoid_term_matches(ingredient: &str, avoided: &str) -> bool {
    !ingredient.is_empty()
        && !avoided.is_empty()
        && (ingredient.contains(avoided) || avoided.contains(ingredient))
}

/// Display names of the recipe's ingredients that hit any avoided term
#[must_use]
pub fn avoided_ingredients<'a>(recipe: &'a RecipeDetail, avoid: &[String]) -> Vec<&'a str> {
    let terms: Vec<String> = avoid
        .iter()
        .map(|term| term.trim().to_lowercase())
        .filter(|term| !term.is_empty())
        .collect();
    if terms.is_empty() {
        return Vec::new();
    }

    recipe
        .ingredients
        .iter()
        .map(|ingredient| ingredient.name.trim())
        .filter(|name| {
            let lowered = name.to_lowercase();
            terms.iter().any(|term| avoid_term_matches(&lowered, term))
        })
        .collect()
}

fn check_restrictions(
    recipe: &RecipeDetail,
    view: &NutrientView,
    profile: &MedicalProfile,
    result: &mut SafetyResult,
) {
    let restrictions: &Restrictions = &profile.restrictions;
    for (bound, limit) in restrictions.bounds() {
        if let Some(measured) = view.per_serving(bound.nutrient()) {
            if measured > limit {
                result.add_conflict(SafetyIssue::conflict(
                    &profile.name,
                    limit_message(bound, measured, limit),
                ));
            }
        }
    }

    let found = avoided_ingredients(recipe, &restrictions.avoid_ingredients);
    if !found.is_empty() {
        result.add_conflict(SafetyIssue::conflict(
            &profile.name,
            format!("Contains ingredients to avoid: {}", found.join(", ")),
        ));
    }
}

fn check_requirements(view: &NutrientView, profile: &MedicalProfile, result: &mut SafetyResult) {
    let requirements: &Requirements = &profile.requirements;
    for (bound, minimum) in requirements.bounds() {
        let measured = view.per_serving(bound.nutrient());
        if measured.is_none_or(|value| value < minimum) {
            result.add_warning(SafetyIssue::warning(
                &profile.name,
                minimum_message(bound, measured, minimum),
                Severity::Low,
            ));
        }
    }

    for extra in &requirements.extra {
        let measured = view.per_serving(extra.nutrient);
        if measured.is_none_or(|value| value < extra.min_amount) {
            result.add_warning(SafetyIssue::warning(
                &profile.name,
                extra_minimum_message(extra, measured),
                Severity::Low,
            ));
        }
    }
}

fn limit_message(bound: UpperBound, measured: f64, limit: f64) -> String {
    let unit = bound.unit();
    format!(
        "{} ({measured:.prec$}{unit}) exceeds limit ({limit}{unit} per serving)",
        bound.label(),
        prec = bound.precision(),
    )
}

fn minimum_message(bound: LowerBound, measured: Option<f64>, minimum: f64) -> String {
    let unit = bound.unit();
    let shown = measured.map_or_else(
        || "0".to_owned(),
        |value| format!("{value:.prec$}", prec = bound.precision()),
    );
    format!(
        "Low {} ({shown}{unit}). Recommended: {minimum}{unit} per serving",
        bound.label()
    )
}

fn extra_minimum_message(minimum: &NutrientMinimum, measured: Option<f64>) -> String {
    let unit = minimum
        .unit
        .as_deref()
        .unwrap_or_else(|| minimum.nutrient.default_unit());
    let shown = measured.map_or_else(|| "0".to_owned(), |value| format!("{value:.1}"));
    format!(
        "Low {} ({shown}{unit}). Recommended: {}{unit} per serving",
        minimum.nutrient.display_name(),
        minimum.min_amount
    )
}
