// ABOUTME: Medical and dietary profiles with hard restrictions and soft requirements
// ABOUTME: Bounds are per serving; restrictions disqualify a recipe, requirements only warn
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::nutrient::Nutrient;
use serde::{Deserialize, Serialize};

/// Restriction bound names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpperBound {
    /// `maxSugar`
    Sugar,
    /// `maxCarbs`
    Carbs,
    /// `maxSodium`
    Sodium,
    /// `maxSaturatedFat`
    SaturatedFat,
    /// `maxCholesterol`
    Cholesterol,
    /// `maxProtein`
    Protein,
    /// `maxPotassium`
    Potassium,
    /// `maxPhosphorus`
    Phosphorus,
    /// `maxTransFat`
    TransFat,
    /// `maxCalories`
    Calories,
    /// `maxFiber`
    Fiber,
}

impl UpperBound {
    /// Evaluation order
    pub const ALL: [Self; 11] = [
        Self::Sugar,
        Self::Carbs,
        Self::Sodium,
        Self::SaturatedFat,
        Self::Cholesterol,
        Self::Protein,
        Self::Potassium,
        Self::Phosphorus,
        Self::TransFat,
        Self::Calories,
        Self::Fiber,
    ];

    /// Nutrient the bound applies to
    #[must_use]
    pub const fn nutrient(self) -> Nutrient {
        match self {
            Self::Sugar => Nutrient::Sugar,
            Self::Carbs => Nutrient::Carbohydrates,
            Self::Sodium => Nutrient::Sodium,
            Self::SaturatedFat => Nutrient::SaturatedFat,
            Self::Cholesterol => Nutrient::Cholesterol,
            Self::Protein => Nutrient::Protein,
            Self::Potassium => Nutrient::Potassium,
            Self::Phosphorus => Nutrient::Phosphorus,
            Self::TransFat => Nutrient::TransFat,
            Self::Calories => Nutrient::Calories,
            Self::Fiber => Nutrient::Fiber,
        }
    }

    /// Bound name as used in profile records
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Sugar => "maxSugar",
            Self::Carbs => "maxCarbs",
            Self::Sodium => "maxSodium",
            Self::SaturatedFat => "maxSaturatedFat",
            Self::Cholesterol => "maxCholesterol",
            Self::Protein => "maxProtein",
            Self::Potassium => "maxPotassium",
            Self::Phosphorus => "maxPhosphorus",
            Self::TransFat => "maxTransFat",
            Self::Calories => "maxCalories",
            Self::Fiber => "maxFiber",
        }
    }

    /// Subject of the conflict message
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sugar => "Sugar content",
            Self::Carbs => "Carbohydrate content",
            Self::Sodium => "Sodium content",
            Self::SaturatedFat => "Saturated fat",
            Self::Cholesterol => "Cholesterol",
            Self::Protein => "Protein content",
            Self::Potassium => "Potassium content",
            Self::Phosphorus => "Phosphorus content",
            Self::TransFat => "Trans fat content",
            Self::Calories => "Calorie content",
            Self::Fiber => "Fiber content",
        }
    }

    /// Unit printed in messages
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Sodium | Self::Cholesterol | Self::Potassium | Self::Phosphorus => "mg",
            Self::Calories => "cal",
            Self::Sugar
            | Self::Carbs
            | Self::SaturatedFat
            | Self::Protein
            | Self::TransFat
            | Self::Fiber => "g",
        }
    }

    /// Decimal places printed for the measured value
    #[must_use]
    pub const fn precision(self) -> usize {
        match self {
            Self::Sodium
            | Self::Cholesterol
            | Self::Potassium
            | Self::Phosphorus
            | Self::Calories => 0,
            Self::TransFat => 2,
            Self::Sugar | Self::Carbs | Self::SaturatedFat | Self::Protein | Self::Fiber => 1,
        }
    }
}

/// Requirement bound names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LowerBound {
    /// `minIron`
    Iron,
    /// `minCalcium`
    Calcium,
    /// `minVitaminD`
    VitaminD,
    /// `minB12`
    B12,
    /// `minFolate`
    Folate,
    /// `minProtein`
    Protein,
    /// `minCalories`
    Calories,
}

impl LowerBound {
    /// Evaluation order
    pub const ALL: [Self; 7] = [
        Self::Iron,
        Self::Calcium,
        Self::VitaminD,
        Self::B12,
        Self::Folate,
        Self::Protein,
        Self::Calories,
    ];

    /// Nutrient the bound applies to
    #[must_use]
    pub const fn nutrient(self) -> Nutrient {
        match self {
            Self::Iron => Nutrient::Iron,
            Self::Calcium => Nutrient::Calcium,
            Self::VitaminD => Nutrient::VitaminD,
            Self::B12 => Nutrient::VitaminB12,
            Self::Folate => Nutrient::Folate,
            Self::Protein => Nutrient::Protein,
            Self::Calories => Nutrient::Calories,
        }
    }

    /// Subject of the warning message
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Iron => "iron content",
            Self::Calcium => "calcium content",
            Self::VitaminD => "vitamin D content",
            Self::B12 => "vitamin B12 content",
            Self::Folate => "folate content",
            Self::Protein => "protein content",
            Self::Calories => "calorie content",
        }
    }

    /// Unit printed in messages
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Iron | Self::Calcium => "mg",
            Self::VitaminD => "IU",
            Self::B12 | Self::Folate => "mcg",
            Self::Protein => "g",
            Self::Calories => "cal",
        }
    }

    /// Decimal places printed for the measured value
    #[must_use]
    pub const fn precision(self) -> usize {
        match self {
            Self::Iron | Self::B12 | Self::Protein => 1,
            Self::Calcium | Self::VitaminD | Self::Folate | Self::Calories => 0,
        }
    }
}

/// Hard limits; any violation makes a recipe unsafe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Restrictions {
    /// Sugar (g)
    pub max_sugar: Option<f64>,
    /// Carbohydrates (g)
    pub max_carbs: Option<f64>,
    /// Sodium (mg)
    pub max_sodium: Option<f64>,
    /// Saturated fat (g)
    pub max_saturated_fat: Option<f64>,
    /// Cholesterol (mg)
    pub max_cholesterol: Option<f64>,
    /// Protein (g)
    pub max_protein: Option<f64>,
    /// Potassium (mg)
    pub max_potassium: Option<f64>,
    /// Phosphorus (mg)
    pub max_phosphorus: Option<f64>,
    /// Trans fat (g)
    pub max_trans_fat: Option<f64>,
    /// Energy (kcal)
    pub max_calories: Option<f64>,
    /// Fiber (g)
    pub max_fiber: Option<f64>,
    /// Ingredient substrings that must not appear
    pub avoid_ingredients: Vec<String>,
}

impl Restrictions {
    /// Value of a bound
    #[must_use]
    pub const fn get(&self, bound: UpperBound) -> Option<f64> {
        match bound {
            UpperBound::Sugar => self.max_sugar,
            UpperBound::Carbs => self.max_carbs,
            UpperBound::Sodium => self.max_sodium,
            UpperBound::SaturatedFat => self.max_saturated_fat,
            UpperBound::Cholesterol => self.max_cholesterol,
            UpperBound::Protein => self.max_protein,
            UpperBound::Potassium => self.max_potassium,
            UpperBound::Phosphorus => self.max_phosphorus,
            UpperBound::TransFat => self.max_trans_fat,
            UpperBound::Calories => self.max_calories,
            UpperBound::Fiber => self.max_fiber,
        }
    }

    /// Set a bound
    pub fn set(&mut self, bound: UpperBound, value: f64) {
        let slot = match bound {
            UpperBound::Sugar => &mut self.max_sugar,
            UpperBound::Carbs => &mut self.max_carbs,
            UpperBound::Sodium => &mut self.max_sodium,
            UpperBound::SaturatedFat => &mut self.max_saturated_fat,
            UpperBound::Cholesterol => &mut self.max_cholesterol,
            UpperBound::Protein => &mut self.max_protein,
            UpperBound::Potassium => &mut self.max_potassium,
            UpperBound::Phosphorus => &mut self.max_phosphorus,
            UpperBound::TransFat => &mut self.max_trans_fat,
            UpperBound::Calories => &mut self.max_calories,
            UpperBound::Fiber => &mut self.max_fiber,
        };
        *slot = Some(value);
    }

    /// Present bounds in evaluation order
    pub fn bounds(&self) -> impl Iterator<Item = (UpperBound, f64)> + '_ {
        UpperBound::ALL
            .into_iter()
            .filter_map(|bound| self.get(bound).map(|value| (bound, value)))
    }

    /// No bounds and no avoided ingredients
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bounds().next().is_none() && self.avoid_ingredients.is_empty()
    }
}

/// User-defined minimum for any canonical nutrient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientMinimum {
    /// Nutrient id
    #[serde(alias = "nutrientId")]
    pub nutrient: Nutrient,
    /// Minimum per serving
    pub min_amount: f64,
    /// Unit printed in messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Advisory minimums; shortfalls only produce warnings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Requirements {
    /// Iron (mg)
    pub min_iron: Option<f64>,
    /// Calcium (mg)
    pub min_calcium: Option<f64>,
    /// Vitamin D (IU)
    pub min_vitamin_d: Option<f64>,
    /// Vitamin B12 (mcg)
    pub min_b12: Option<f64>,
    /// Folate (mcg)
    pub min_folate: Option<f64>,
    /// Protein (g)
    pub min_protein: Option<f64>,
    /// Energy (kcal)
    pub min_calories: Option<f64>,
    /// Ingredients that help meet the requirements
    pub recommended_ingredients: Vec<String>,
    /// Minimums for nutrients without a named bound
    pub extra: Vec<NutrientMinimum>,
}

impl Requirements {
    /// Value of a bound
    #[must_use]
    pub const fn get(&self, bound: LowerBound) -> Option<f64> {
        match bound {
            LowerBound::Iron => self.min_iron,
            LowerBound::Calcium => self.min_calcium,
            LowerBound::VitaminD => self.min_vitamin_d,
            LowerBound::B12 => self.min_b12,
            LowerBound::Folate => self.min_folate,
            LowerBound::Protein => self.min_protein,
            LowerBound::Calories => self.min_calories,
        }
    }

    /// Set a bound
    pub fn set(&mut self, bound: LowerBound, value: f64) {
        let slot = match bound {
            LowerBound::Iron => &mut self.min_iron,
            LowerBound::Calcium => &mut self.min_calcium,
            LowerBound::VitaminD => &mut self.min_vitamin_d,
            LowerBound::B12 => &mut self.min_b12,
            LowerBound::Folate => &mut self.min_folate,
            LowerBound::Protein => &mut self.min_protein,
            LowerBound::Calories => &mut self.min_calories,
        };
        *slot = Some(value);
    }

    /// Present bounds in evaluation order
    pub fn bounds(&self) -> impl Iterator<Item = (LowerBound, f64)> + '_ {
        LowerBound::ALL
            .into_iter()
            .filter_map(|bound| self.get(bound).map(|value| (bound, value)))
    }

    /// No bounds of any kind
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bounds().next().is_none() && self.extra.is_empty()
    }
}

/// A restriction-and-requirement bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalProfile {
    /// Identifier (catalog id, custom id, or synthetic id)
    pub id: String,
    /// Name used in conflict and warning messages
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Hard limits
    #[serde(default)]
    pub restrictions: Restrictions,
    /// Advisory minimums
    #[serde(default)]
    pub requirements: Requirements,
}

impl MedicalProfile {
    /// Profile with no bounds
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            restrictions: Restrictions::default(),
            requirements: Requirements::default(),
        }
    }

    /// Profile that only forbids ingredients
    pub fn avoiding<I, S>(id: impl Into<String>, name: impl Into<String>, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut profile = Self::new(id, name);
        profile.restrictions.avoid_ingredients = ingredients.into_iter().map(Into::into).collect();
        profile
    }

    /// Builder-style restriction bound
    #[must_use]
    pub fn with_limit(mut self, bound: UpperBound, value: f64) -> Self {
        self.restrictions.set(bound, value);
        self
    }

    /// Builder-style requirement bound
    #[must_use]
    pub fn with_minimum(mut self, bound: LowerBound, value: f64) -> Self {
        self.requirements.set(bound, value);
        self
    }
}

/// The user's own medical settings as persisted by the caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MedicalSettings {
    /// Catalog condition ids
    pub conditions: Vec<String>,
    /// User-defined conditions
    pub custom_conditions: Vec<MedicalProfile>,
    /// User-defined nutrient minimums
    pub required_nutrients: Vec<NutrientMinimum>,
    /// Free-form foods to avoid
    pub foods_to_avoid: Vec<String>,
    /// Free-form foods to favour
    pub foods_recommended: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_restrictions_deserialize_from_bound_names() {
        let restrictions: Restrictions = serde_json::from_value(json!({
            "maxSodium": 500,
            "maxSaturatedFat": 4,
            "avoidIngredients": ["salt"]
        }))
        .unwrap();
        let bounds: Vec<_> = restrictions.bounds().collect();
        assert_eq!(
            bounds,
            vec![(UpperBound::Sodium, 500.0), (UpperBound::SaturatedFat, 4.0)]
        );
        assert!(!restrictions.is_empty());
    }

    #[test]
    fn test_requirements_min_b12_key() {
        let requirements: Requirements =
            serde_json::from_value(json!({"minB12": 1, "minVitaminD": 100})).unwrap();
        assert_eq!(requirements.get(LowerBound::B12), Some(1.0));
        assert_eq!(requirements.get(LowerBound::VitaminD), Some(100.0));
    }

    #[test]
    fn test_bound_keys_round_trip_through_serde_names() {
        for bound in UpperBound::ALL {
            let mut restrictions = Restrictions::default();
            restrictions.set(bound, 1.0);
            let value = serde_json::to_value(&restrictions).unwrap();
            assert_eq!(value[bound.key()], json!(1.0), "{}", bound.key());
        }
    }
}
