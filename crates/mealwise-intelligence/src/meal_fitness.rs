// ABOUTME: Meal-fitness scoring that orders safe plan candidates for a slot
// ABOUTME: Rewards calorie and macro closeness, pantry use, favorites, meal-type fit, and recommended foods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::calorie_goals::DailyTargets;
use crate::config::MealFitnessConfig;
use crate::ingredients::overlap_score;
use crate::nutrients::NutrientView;
use mealwise_core::models::{MealSlot, Nutrient, RecipeDetail, SafetyResult};
use std::collections::BTreeSet;

/// Score given to a candidate that failed the safety check
pub const UNSAFE_SCORE: i32 = -1000;

/// Household preferences that stay fixed for one planning run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FitnessContext {
    /// Daily targets, when a calorie-tracker profile exists
    pub targets: Option<DailyTargets>,
    /// Pantry ingredients on hand
    pub pantry: Vec<String>,
    /// Favorite recipe ids
    pub favorite_ids: BTreeSet<String>,
    /// Ingredients recommended by active requirement profiles
    pub recommended_ingredients: Vec<String>,
    /// Per-serving divisor override
    pub servings_override: Option<f64>,
}

/// Weighted preference scorer
#[derive(Debug, Clone, Default)]
pub struct MealFitnessScorer {
    config: MealFitnessConfig,
}

impl MealFitnessScorer {
    /// Scorer with custom weights
    #[must_use]
    pub const fn new(config: MealFitnessConfig) -> Self {
        Self { config }
    }

    /// Score a candidate for `slot`; higher is better
    #[must_use]
    pub fn score(
        &self,
        recipe: &RecipeDetail,
        safety: &SafetyResult,
        slot: MealSlot,
        ctx: &FitnessContext,
    ) -> i32 {
        if !safety.safe {
            return UNSAFE_SCORE;
        }
        let weights = &self.config;
        let mut score = weights.base;
        if safety.warnings.is_empty() {
            score += weights.no_warnings_bonus;
        }

        if let Some(targets) = &ctx.targets {
            let view = NutrientView::from_recipe(recipe, ctx.servings_override);
            score += self.calorie_points(&view, targets);
            score += self.macro_points(&view, targets);
        }

        let ingredient_names = recipe.ingredient_names();
        if !ctx.pantry.is_empty() {
            let pantry = overlap_score(&ctx.pantry, &ingredient_names);
            score += weights.pantry_match * pantry.match_count as i32;
        }
        if ctx.favorite_ids.contains(recipe.id()) {
            score += weights.favorite;
        }
        if recipe.summary.has_meal_type_in(slot.meal_type_tags()) {
            score += weights.meal_type_match;
        }
        if !ctx.recommended_ingredients.is_empty() {
            let recommended = overlap_score(&ctx.recommended_ingredients, &ingredient_names);
            score += weights.recommended_ingredient * recommended.match_count as i32;
        }
        score
    }

    fn calorie_points(&self, view: &NutrientView, targets: &DailyTargets) -> i32 {
        let target = targets.calories_per_meal();
        let Some(calories) = view.per_serving(Nutrient::Calories).filter(|c| *c > 0.0) else {
            return 0;
        };
        if target <= 0.0 {
            return 0;
        }

        let variance = (calories - target).abs() / target;
        if variance < 0.10 {
            self.config.calories_very_close
        } else if variance < 0.25 {
            self.config.calories_close
        } else if variance < 0.50 {
            self.config.calories_acceptable
        } else {
            self.config.calories_far
        }
    }

    fn macro_points(&self, view: &NutrientView, targets: &DailyTargets) -> i32 {
        let macros = [Nutrient::Protein, Nutrient::Carbohydrates, Nutrient::Fat];
        macros
            .iter()
            .zip(targets.macros_per_meal())
            .filter(|(_, target)| *target > 0.0)
            .filter_map(|(nutrient, target)| {
                view.per_serving(*nutrient)
                    .filter(|v| *v > 0.0)
                    .map(|value| (value - target).abs() / target)
            })
            .map(|variance| {
                if variance < 0.2 {
                    self.config.macro_close
                } else if variance < 0.4 {
                    self.config.macro_acceptable
                } else {
                    0
                }
            })
            .sum()
    }
}
