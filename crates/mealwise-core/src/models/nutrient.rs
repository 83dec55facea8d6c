// ABOUTME: Canonical nutrient keys and the raw per-recipe nutrient record
// ABOUTME: Maps each canonical nutrient to its display name, default unit, and name aliases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::lenient;
use crate::constants::nutrients as aliases;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Amount of one nutrient for the whole recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientAmount {
    /// Total amount across all servings
    pub amount: f64,
    /// Unit as reported by the source (g, mg, IU, ...)
    #[serde(default)]
    pub unit: String,
}

/// Raw nutrient record in the order the source listed it
///
/// Names are unique; the first entry for a name wins. Lookups that match by
/// substring depend on this order ("Total Carbohydrates" listed before
/// "Net Carbohydrates" resolves carbohydrates to the total).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NutrientRecord {
    entries: Vec<(String, NutrientAmount)>,
}

impl NutrientRecord {
    /// Empty record
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry; returns `false` and keeps the earlier amount when the name is already present
    pub fn insert(&mut self, name: impl Into<String>, amount: NutrientAmount) -> bool {
        let name = name.into();
        if self.entries.iter().any(|(existing, _)| *existing == name) {
            return false;
        }
        self.entries.push((name, amount));
        true
    }

    /// Amount recorded under exactly `name`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&NutrientAmount> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, amount)| amount)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the record has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in source order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NutrientAmount)> {
        self.entries
            .iter()
            .map(|(name, amount)| (name.as_str(), amount))
    }
}

impl<N: Into<String>> FromIterator<(N, NutrientAmount)> for NutrientRecord {
    fn from_iter<I: IntoIterator<Item = (N, NutrientAmount)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (name, amount) in iter {
            record.insert(name, amount);
        }
        record
    }
}

impl Serialize for NutrientRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for NutrientRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient::nutrient_record(deserializer)
    }
}

/// Canonical nutrient keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Energy (kcal)
    Calories,
    /// Protein (g)
    Protein,
    /// Carbohydrates (g)
    Carbohydrates,
    /// Total fat (g)
    Fat,
    /// Saturated fat (g)
    SaturatedFat,
    /// Trans fat (g)
    TransFat,
    /// Sugars (g)
    Sugar,
    /// Dietary fiber (g)
    Fiber,
    /// Sodium (mg)
    Sodium,
    /// Cholesterol (mg)
    Cholesterol,
    /// Potassium (mg)
    Potassium,
    /// Phosphorus (mg)
    Phosphorus,
    /// Iron (mg)
    Iron,
    /// Calcium (mg)
    Calcium,
    /// Vitamin D (IU)
    VitaminD,
    /// Vitamin C (mg)
    VitaminC,
    /// Vitamin A (IU)
    VitaminA,
    /// Vitamin B12 (mcg)
    #[serde(alias = "b12")]
    VitaminB12,
    /// Folate (mcg)
    Folate,
    /// Magnesium (mg)
    Magnesium,
    /// Zinc (mg)
    Zinc,
}

impl Nutrient {
    /// Every canonical nutrient
    pub const ALL: [Self; 21] = [
        Self::Calories,
        Self::Protein,
        Self::Carbohydrates,
        Self::Fat,
        Self::SaturatedFat,
        Self::TransFat,
        Self::Sugar,
        Self::Fiber,
        Self::Sodium,
        Self::Cholesterol,
        Self::Potassium,
        Self::Phosphorus,
        Self::Iron,
        Self::Calcium,
        Self::VitaminD,
        Self::VitaminC,
        Self::VitaminA,
        Self::VitaminB12,
        Self::Folate,
        Self::Magnesium,
        Self::Zinc,
    ];

    /// Lower-case name used for exact and substring matching
    #[must_use]
    pub const fn canonical_name(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Carbohydrates => "carbohydrates",
            Self::Fat => "fat",
            Self::SaturatedFat => "saturated fat",
            Self::TransFat => "trans fat",
            Self::Sugar => "sugar",
            Self::Fiber => "fiber",
            Self::Sodium => "sodium",
            Self::Cholesterol => "cholesterol",
            Self::Potassium => "potassium",
            Self::Phosphorus => "phosphorus",
            Self::Iron => "iron",
            Self::Calcium => "calcium",
            Self::VitaminD => "vitamin d",
            Self::VitaminC => "vitamin c",
            Self::VitaminA => "vitamin a",
            Self::VitaminB12 => "vitamin b12",
            Self::Folate => "folate",
            Self::Magnesium => "magnesium",
            Self::Zinc => "zinc",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Calories => "Calories",
            Self::Protein => "Protein",
            Self::Carbohydrates => "Carbohydrates",
            Self::Fat => "Fat",
            Self::SaturatedFat => "Saturated Fat",
            Self::TransFat => "Trans Fat",
            Self::Sugar => "Sugar",
            Self::Fiber => "Fiber",
            Self::Sodium => "Sodium",
            Self::Cholesterol => "Cholesterol",
            Self::Potassium => "Potassium",
            Self::Phosphorus => "Phosphorus",
            Self::Iron => "Iron",
            Self::Calcium => "Calcium",
            Self::VitaminD => "Vitamin D",
            Self::VitaminC => "Vitamin C",
            Self::VitaminA => "Vitamin A",
            Self::VitaminB12 => "Vitamin B12",
            Self::Folate => "Folate",
            Self::Magnesium => "Magnesium",
            Self::Zinc => "Zinc",
        }
    }

    /// Unit the catalog normally reports this nutrient in
    #[must_use]
    pub const fn default_unit(self) -> &'static str {
        match self {
            Self::Calories => "kcal",
            Self::Protein
            | Self::Carbohydrates
            | Self::Fat
            | Self::SaturatedFat
            | Self::TransFat
            | Self::Sugar
            | Self::Fiber => "g",
            Self::VitaminD | Self::VitaminA => "IU",
            Self::VitaminB12 | Self::Folate => "mcg",
            Self::Sodium
            | Self::Cholesterol
            | Self::Potassium
            | Self::Phosphorus
            | Self::Iron
            | Self::Calcium
            | Self::VitaminC
            | Self::Magnesium
            | Self::Zinc => "mg",
        }
    }

    /// Name variants tried in order once exact and substring matching fail
    #[must_use]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Calories => aliases::CALORIES,
            Self::Protein => aliases::PROTEIN,
            Self::Carbohydrates => aliases::CARBOHYDRATES,
            Self::Fat => aliases::FAT,
            Self::SaturatedFat => aliases::SATURATED_FAT,
            Self::TransFat => aliases::TRANS_FAT,
            Self::Sugar => aliases::SUGAR,
            Self::Fiber => aliases::FIBER,
            Self::Sodium => aliases::SODIUM,
            Self::Cholesterol => aliases::CHOLESTEROL,
            Self::Potassium => aliases::POTASSIUM,
            Self::Phosphorus => aliases::PHOSPHORUS,
            Self::Iron => aliases::IRON,
            Self::Calcium => aliases::CALCIUM,
            Self::VitaminD => aliases::VITAMIN_D,
            Self::VitaminC => aliases::VITAMIN_C,
            Self::VitaminA => aliases::VITAMIN_A,
            Self::VitaminB12 => aliases::VITAMIN_B12,
            Self::Folate => aliases::FOLATE,
            Self::Magnesium => aliases::MAGNESIUM,
            Self::Zinc => aliases::ZINC,
        }
    }

    /// Resolve a free-form name (canonical name, id such as `vitamin_d`, or alias)
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase().replace('_', " ");
        Self::ALL.into_iter().find(|nutrient| {
            nutrient.canonical_name() == normalized
                || nutrient.aliases().iter().any(|alias| *alias == normalized)
        })
    }
}
