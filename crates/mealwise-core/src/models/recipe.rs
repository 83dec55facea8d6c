// ABOUTME: Recipe summary and detail records returned by the recipe catalog
// ABOUTME: Summaries drive search ranking, details carry ingredients and nutrition for safety checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::lenient;
use super::nutrient::NutrientRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Recipe difficulty
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Quick, few steps
    Easy,
    /// Some technique required
    Medium,
    /// Involved preparation
    Hard,
}

/// Recipe as returned by a catalog search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    /// Catalog identifier
    pub id: String,
    /// Recipe title
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub title: String,
    /// Short description
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub description: String,
    /// Image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Preparation time in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_minutes: Option<u32>,
    /// Cooking time in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_minutes: Option<u32>,
    /// Documented servings (0 when unknown)
    #[serde(default, deserialize_with = "lenient::count_or_zero")]
    pub servings: u32,
    /// Difficulty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    /// Cuisine tags
    #[serde(default, deserialize_with = "lenient::strings")]
    pub cuisines: BTreeSet<String>,
    /// Meal-type tags (breakfast, lunch, dinner, snack, ...)
    #[serde(default, deserialize_with = "lenient::strings")]
    pub meal_types: BTreeSet<String>,
    /// Diet tags (vegetarian, gluten free, ...)
    #[serde(default, deserialize_with = "lenient::strings")]
    pub diets: BTreeSet<String>,
    /// Calories for the whole recipe, when the catalog reports them
    #[serde(default, deserialize_with = "lenient::number_or_none")]
    pub calories: Option<f64>,
}

impl RecipeSummary {
    /// Create a summary with only an id and a title
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            image: None,
            prep_minutes: None,
            cook_minutes: None,
            servings: 0,
            difficulty: None,
            cuisines: BTreeSet::new(),
            meal_types: BTreeSet::new(),
            diets: BTreeSet::new(),
            calories: None,
        }
    }

    /// Prep plus cook time, if either is known
    #[must_use]
    pub fn total_minutes(&self) -> Option<u32> {
        match (self.prep_minutes, self.cook_minutes) {
            (None, None) => None,
            (prep, cook) => Some(prep.unwrap_or(0) + cook.unwrap_or(0)),
        }
    }

    /// Servings with a floor of one
    #[must_use]
    pub fn servings_divisor(&self) -> f64 {
        f64::from(self.servings.max(1))
    }

    /// Whether any meal-type tag matches one of `tags` (case-insensitive)
    #[must_use]
    pub fn has_meal_type_in(&self, tags: &[&str]) -> bool {
        self.meal_types
            .iter()
            .any(|t| tags.iter().any(|tag| t.eq_ignore_ascii_case(tag)))
    }

    /// Whether the recipe carries a diet tag (case-insensitive)
    #[must_use]
    pub fn has_diet(&self, diet: &str) -> bool {
        let diet = diet.trim();
        self.diets.iter().any(|d| d.eq_ignore_ascii_case(diet))
    }
}

/// One ingredient line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Display name (empty when the source value was unusable)
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub name: String,
    /// Quantity
    #[serde(default, deserialize_with = "lenient::number_or_none")]
    pub amount: Option<f64>,
    /// Unit of the quantity
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub unit: String,
    /// Whether the ingredient is optional
    #[serde(default)]
    pub optional: bool,
}

impl Ingredient {
    /// Ingredient with a name and no quantity
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: None,
            unit: String::new(),
            optional: false,
        }
    }

    /// Ingredient with a quantity
    pub fn measured(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: Some(amount),
            unit: unit.into(),
            optional: false,
        }
    }
}

/// Full recipe record fetched by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDetail {
    /// Summary fields
    #[serde(flatten)]
    pub summary: RecipeSummary,
    /// Ingredients in recipe order
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Instruction steps in order
    #[serde(default, deserialize_with = "lenient::strings")]
    pub steps: Vec<String>,
    /// Nutrient totals for the whole recipe
    #[serde(default, deserialize_with = "lenient::nutrient_record")]
    pub nutrients: NutrientRecord,
    /// Free-form tags
    #[serde(default, deserialize_with = "lenient::strings")]
    pub tags: Vec<String>,
    /// Suggested beverage pairings
    #[serde(default, deserialize_with = "lenient::strings")]
    pub beverage_pairings: Vec<String>,
}

impl RecipeDetail {
    /// Detail record with no ingredients or nutrition
    #[must_use]
    pub fn from_summary(summary: RecipeSummary) -> Self {
        Self {
            summary,
            ingredients: Vec::new(),
            steps: Vec::new(),
            nutrients: NutrientRecord::new(),
            tags: Vec::new(),
            beverage_pairings: Vec::new(),
        }
    }

    /// Catalog identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.summary.id
    }

    /// Recipe title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.summary.title
    }

    /// Lower-cased ingredient names, skipping blank entries
    #[must_use]
    pub fn ingredient_names(&self) -> Vec<String> {
        self.ingredients
            .iter()
            .map(|i| i.name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_lowercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detail_tolerates_malformed_ingredients() {
        let detail: RecipeDetail = serde_json::from_value(json!({
            "id": "r1",
            "title": "Stir Fry",
            "servings": "2",
            "ingredients": [
                {"name": "Shrimp", "amount": 200, "unit": "g"},
                {"name": null},
                {"name": 7, "amount": "two"},
            ],
            "nutrients": {"Sodium": {"amount": 900, "unit": "mg"}}
        }))
        .unwrap();

        assert_eq!(detail.summary.servings, 2);
        assert_eq!(detail.ingredients.len(), 3);
        assert_eq!(detail.ingredient_names(), vec!["shrimp".to_owned()]);
        assert_eq!(detail.ingredients[2].amount, None);
    }

    #[test]
    fn test_zero_servings_divisor_is_one() {
        let summary = RecipeSummary::new("r1", "Soup");
        assert!((summary.servings_divisor() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_total_minutes() {
        let mut summary = RecipeSummary::new("r1", "Soup");
        assert_eq!(summary.total_minutes(), None);
        summary.prep_minutes = Some(10);
        summary.cook_minutes = Some(25);
        assert_eq!(summary.total_minutes(), Some(35));
    }
}
