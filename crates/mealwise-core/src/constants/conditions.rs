// ABOUTME: Built-in catalog of medical conditions with per-serving nutrient bounds
// ABOUTME: Each entry lists hard restrictions, soft requirements, and ingredient lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Medical condition catalog
//!
//! Bounds are per serving. Restriction bounds are hard limits, requirement
//! bounds are advisory minimums. Values follow common clinical guidance
//! (AHA, DASH, NKF) divided across roughly three meals per day.

use crate::models::{LowerBound, MedicalProfile, Requirements, Restrictions, UpperBound};

/// Static definition of a catalog condition
#[derive(Debug, Clone, Copy)]
pub struct ConditionDefinition {
    /// Stable identifier referenced by user and family records
    pub id: &'static str,
    /// Display name used in conflict and warning messages
    pub name: &'static str,
    /// Short description
    pub description: &'static str,
    /// Upper nutrient bounds per serving
    pub limits: &'static [(UpperBound, f64)],
    /// Ingredient substrings that must not appear
    pub avoid: &'static [&'static str],
    /// Lower nutrient bounds per serving
    pub minimums: &'static [(LowerBound, f64)],
    /// Ingredients that help meet the requirements
    pub recommended: &'static [&'static str],
}

impl ConditionDefinition {
    /// Build an owned profile from this definition
    #[must_use]
    pub fn to_profile(&self) -> MedicalProfile {
        let mut restrictions = Restrictions {
            avoid_ingredients: self.avoid.iter().map(|s| (*s).to_owned()).collect(),
            ..Restrictions::default()
        };
        for (bound, value) in self.limits {
            restrictions.set(*bound, *value);
        }

        let mut requirements = Requirements {
            recommended_ingredients: self.recommended.iter().map(|s| (*s).to_owned()).collect(),
            ..Requirements::default()
        };
        for (bound, value) in self.minimums {
            requirements.set(*bound, *value);
        }

        MedicalProfile {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            description: self.description.to_owned(),
            restrictions,
            requirements,
        }
    }
}

/// Look up a catalog condition by id
#[must_use]
pub fn condition_by_id(id: &str) -> Option<&'static ConditionDefinition> {
    MEDICAL_CONDITIONS.iter().find(|c| c.id == id)
}

const NONE_LIMITS: &[(UpperBound, f64)] = &[];
const NONE_MINIMUMS: &[(LowerBound, f64)] = &[];
const NONE: &[&str] = &[];

/// All built-in conditions
pub const MEDICAL_CONDITIONS: &[ConditionDefinition] = &[
    ConditionDefinition {
        id: "diabetes_type1",
        name: "Type 1 Diabetes",
        description: "Requires careful carbohydrate counting and monitoring",
        limits: &[(UpperBound::Sugar, 10.0), (UpperBound::Carbs, 30.0)],
        avoid: &[
            "sugar",
            "honey",
            "syrup",
            "molasses",
            "corn syrup",
            "high fructose corn syrup",
        ],
        minimums: NONE_MINIMUMS,
        recommended: NONE,
    },
    ConditionDefinition {
        id: "diabetes_type2",
        name: "Type 2 Diabetes",
        description: "Requires monitoring of carbohydrates and sugar intake",
        limits: &[(UpperBound::Sugar, 15.0), (UpperBound::Carbs, 45.0)],
        avoid: &["sugar", "honey", "syrup", "molasses", "corn syrup"],
        minimums: NONE_MINIMUMS,
        recommended: NONE,
    },
    ConditionDefinition {
        id: "prediabetes",
        name: "Prediabetes",
        description: "Prevent progression with controlled carb intake",
        limits: &[(UpperBound::Sugar, 20.0), (UpperBound::Carbs, 50.0)],
        avoid: NONE,
        minimums: NONE_MINIMUMS,
        recommended: NONE,
    },
    ConditionDefinition {
        id: "heart_disease",
        name: "Heart Disease",
        description: "Requires low sodium and saturated fat (AHA guidelines)",
        limits: &[
            (UpperBound::Sodium, 500.0),
            (UpperBound::SaturatedFat, 4.0),
            (UpperBound::Cholesterol, 20.0),
            (UpperBound::TransFat, 0.0),
        ],
        avoid: &["salt", "butter", "lard", "margarine", "processed meats"],
        minimums: NONE_MINIMUMS,
        recommended: NONE,
    },
    ConditionDefinition {
        id: "high_blood_pressure",
        name: "High Blood Pressure (Hypertension)",
        description: "Requires low sodium intake (DASH diet principles)",
        limits: &[(UpperBound::Sodium, 500.0)],
        avoid: &["salt", "sodium", "soy sauce", "pickled foods"],
        minimums: NONE_MINIMUMS,
        recommended: NONE,
    },
    ConditionDefinition {
        id: "high_cholesterol",
        name: "High Cholesterol",
        description: "Requires low saturated fat and cholesterol",
        limits: &[
            (UpperBound::SaturatedFat, 5.0),
            (UpperBound::Cholesterol, 20.0),
            (UpperBound::TransFat, 0.0),
        ],
        avoid: &["butter", "lard", "red meat", "full-fat dairy", "fried foods"],
        minimums: NONE_MINIMUMS,
        recommended: NONE,
    },
    ConditionDefinition {
        id: "stroke_risk",
        name: "Stroke Risk / History",
        description: "Requires heart-healthy diet with low sodium",
        limits: &[
            (UpperBound::Sodium, 400.0),
            (UpperBound::SaturatedFat, 4.0),
            (UpperBound::Cholesterol, 20.0),
        ],
        avoid: &["salt", "processed meats", "fried foods"],
        minimums: NONE_MINIMUMS,
        recommended: NONE,
    },
    ConditionDefinition {
        id: "kidney_disease",
        name: "Chronic Kidney Disease",
        description: "Requires low sodium, potassium, and protein (CKD stages 3-5)",
        limits: &[
            (UpperBound::Sodium, 300.0),
            (UpperBound::Potassium, 200.0),
            (UpperBound::Phosphorus, 100.0),
            (UpperBound::Protein, 15.0),
        ],
        avoid: &[
            "salt", "bananas", "potatoes", "tomatoes", "dairy", "nuts", "beans",
        ],
        minimums: NONE_MINIMUMS,
        recommended: NONE,
    },
    ConditionDefinition {
        id: "kidney_stones",
        name: "Kidney Stones",
        description: "Requires low oxalate and adequate hydration",
        limits: &[(UpperBound::Sodium, 500.0)],
        avoid: &["spinach", "rhubarb", "almonds", "beets", "chocolate", "tea"],
        minimums: NONE_MINIMUMS,
        recommended: NONE,
    },
    ConditionDefinition {
        id: "celiac",
        name: "Celiac Disease",
        description: "Must avoid gluten completely (autoimmune condition)",
        limits: NONE_LIMITS,
        avoid: &[
            "wheat",
            "gluten",
            "barley",
            "rye",
            "malt",
            "brewer's yeast",
            "semolina",
            "durum",
            "spelt",
            "triticale",
        ],
        minimums: NONE_MINIMUMS,
        recommended: NONE,
    },
    ConditionDefinition {
        id: "gluten_sensitivity",
        name: "Non-Celiac Gluten Sensitivity",
        description: "Avoid gluten to prevent symptoms",
        limits: NONE_LIMITS,
        avoid: &["wheat", "gluten", "barley", "rye"],
        minimums: NONE_MINIMUMS,
        recommended: NONE,
    },
    ConditionDefinition {
        id: "ibs",
        name: "Irritable Bowel Syndrome (IBS)",
        description: "May require low FODMAP diet",
        limits: NONE_LIMITS,
        avoid: &[
            "onion",
            "garlic",
            "beans",
            "lentils",
            "wheat",
            "dairy",
            "apples",
            "pears",
            "artificial sweeteners",
        ],
        minimums: NONE_MINIMUMS,
        recommended: NONE,
    },
    ConditionDefinition {
        id: "crohns",
        name: "Crohn's Disease",
        description: "May require low-fiber diet during flares",
        limits: &[(UpperBound::Fiber, 3.0)],
        avoid: &["nuts", "seeds", "raw vegetables", "whole grains"],
        minimums: NONE_MINIMUMS,
        recommended: NONE,
    },
    ConditionDefinition {
        id: "ulcerative_colitis",
        name: "Ulcerative Colitis",
        description: "May require low-fiber diet during flares",
        limits: &[(UpperBound::Fiber, 3.0)],
        avoid: &["nuts", "seeds", "raw vegetables", "spicy foods"],
        minimums: NONE_MINIMUMS,
        recommended: NONE,
    },
    ConditionDefinition {
        id: "acid_reflux",
        name: "GERD / Acid Reflux",
        description: "Avoid trigger foods that increase acid",
        limits: NONE_LIMITS,
        avoid: &[
            "tomatoes",
            "citrus",
            "chocolate",
            "caffeine",
            "alcohol",
            "spicy foods",
            "fried foods",
            "onions",
            "garlic",
        ],
        minimums: NONE_MINIMUMS,
        recommended: NONE,
    },
    ConditionDefinition {
        id: "anemia",
        name: "Iron Deficiency Anemia",
        description: "Needs iron-rich foods and vitamin C for absorption",
        limits: NONE_LIMITS,
        avoid: NONE,
        minimums: &[(LowerBound::Iron, 2.5)],
        recommended: &["spinach", "red meat", "beans", "lentils", "fortified cereals"],
    },
    ConditionDefinition {
        id: "osteoporosis",
        name: "Osteoporosis",
        description: "Needs calcium and vitamin D for bone health",
        limits: NONE_LIMITS,
        avoid: NONE,
        minimums: &[(LowerBound::Calcium, 250.0), (LowerBound::VitaminD, 100.0)],
        recommended: &["dairy", "leafy greens", "fortified foods", "salmon"],
    },
    ConditionDefinition {
        id: "vitamin_d_deficiency",
        name: "Vitamin D Deficiency",
        description: "Needs vitamin D and calcium for absorption",
        limits: NONE_LIMITS,
        avoid: NONE,
        minimums: &[(LowerBound::VitaminD, 150.0), (LowerBound::Calcium, 200.0)],
        recommended: &["fatty fish", "fortified dairy", "egg yolks"],
    },
    ConditionDefinition {
        id: "b12_deficiency",
        name: "Vitamin B12 Deficiency",
        description: "Needs B12 from animal products or fortified foods",
        limits: NONE_LIMITS,
        avoid: NONE,
        minimums: &[(LowerBound::B12, 1.0)],
        recommended: &["meat", "fish", "eggs", "dairy", "fortified cereals"],
    },
    ConditionDefinition {
        id: "gout",
        name: "Gout",
        description: "Should avoid high-purine foods to prevent attacks",
        limits: &[(UpperBound::Sugar, 10.0)],
        avoid: &[
            "red meat",
            "organ meats",
            "seafood",
            "anchovies",
            "sardines",
            "alcohol",
            "sweetened beverages",
        ],
        minimums: NONE_MINIMUMS,
        recommended: NONE,
    },
    ConditionDefinition {
        id: "pcos",
        name: "PCOS (Polycystic Ovary Syndrome)",
        description: "Benefits from low-glycemic, anti-inflammatory diet",
        limits: &[(UpperBound::Sugar, 12.0), (UpperBound::Carbs, 40.0)],
        avoid: &["refined sugar", "white bread", "processed foods"],
        minimums: NONE_MINIMUMS,
        recommended: NONE,
    },
    ConditionDefinition {
        id: "hashimotos",
        name: "Hashimoto's Thyroiditis",
        description: "May benefit from avoiding goitrogens and gluten",
        limits: NONE_LIMITS,
        avoid: &["soy", "cruciferous vegetables (raw)", "gluten"],
        minimums: NONE_MINIMUMS,
        recommended: NONE,
    },
    ConditionDefinition {
        id: "rheumatoid_arthritis",
        name: "Rheumatoid Arthritis",
        description: "Anti-inflammatory diet may help reduce symptoms",
        limits: NONE_LIMITS,
        avoid: &["processed foods", "fried foods", "sugar", "red meat"],
        minimums: NONE_MINIMUMS,
        recommended: NONE,
    },
    ConditionDefinition {
        id: "fatty_liver",
        name: "Non-Alcoholic Fatty Liver Disease",
        description: "Requires low sugar and processed foods",
        limits: &[(UpperBound::Sugar, 10.0), (UpperBound::SaturatedFat, 5.0)],
        avoid: &[
            "sugar",
            "high fructose corn syrup",
            "processed foods",
            "alcohol",
        ],
        minimums: NONE_MINIMUMS,
        recommended: NONE,
    },
    ConditionDefinition {
        id: "pregnancy",
        name: "Pregnancy",
        description: "Avoid certain foods and ensure adequate nutrients",
        limits: NONE_LIMITS,
        avoid: &[
            "raw fish",
            "raw eggs",
            "unpasteurized dairy",
            "deli meats",
            "high-mercury fish",
            "alcohol",
            "caffeine (excess)",
        ],
        minimums: &[
            (LowerBound::Folate, 50.0),
            (LowerBound::Iron, 3.0),
            (LowerBound::Calcium, 300.0),
        ],
        recommended: NONE,
    },
    ConditionDefinition {
        id: "gestational_diabetes",
        name: "Gestational Diabetes",
        description: "Requires strict carbohydrate control during pregnancy",
        limits: &[(UpperBound::Sugar, 8.0), (UpperBound::Carbs, 30.0)],
        avoid: &["sugar", "refined carbs", "sweetened beverages"],
        minimums: NONE_MINIMUMS,
        recommended: NONE,
    },
    ConditionDefinition {
        id: "peanut_allergy",
        name: "Peanut Allergy (Severe)",
        description: "Life-threatening - must avoid all peanut products",
        limits: NONE_LIMITS,
        avoid: &[
            "peanuts",
            "peanut butter",
            "peanut oil",
            "groundnuts",
            "may contain peanuts",
        ],
        minimums: NONE_MINIMUMS,
        recommended: NONE,
    },
    ConditionDefinition {
        id: "tree_nut_allergy",
        name: "Tree Nut Allergy (Severe)",
        description: "Life-threatening - must avoid all tree nuts",
        limits: NONE_LIMITS,
        avoid: &[
            "almonds",
            "walnuts",
            "cashews",
            "pistachios",
            "hazelnuts",
            "brazil nuts",
            "pecans",
            "macadamia",
        ],
        minimums: NONE_MINIMUMS,
        recommended: NONE,
    },
    ConditionDefinition {
        id: "shellfish_allergy",
        name: "Shellfish Allergy (Severe)",
        description: "Life-threatening - must avoid all shellfish",
        limits: NONE_LIMITS,
        avoid: &[
            "shrimp", "crab", "lobster", "mussels", "clams", "oysters", "scallops", "squid",
            "octopus",
        ],
        minimums: NONE_MINIMUMS,
        recommended: NONE,
    },
    ConditionDefinition {
        id: "obesity",
        name: "Obesity / Weight Management",
        description: "Focus on nutrient-dense, lower-calorie foods",
        limits: &[
            (UpperBound::Calories, 400.0),
            (UpperBound::SaturatedFat, 5.0),
            (UpperBound::Sugar, 10.0),
        ],
        avoid: &["processed foods", "sugary drinks", "fried foods"],
        minimums: NONE_MINIMUMS,
        recommended: NONE,
    },
    ConditionDefinition {
        id: "cancer_treatment",
        name: "During Cancer Treatment",
        description: "May need high-protein, easy-to-digest foods",
        limits: NONE_LIMITS,
        avoid: &["raw foods", "unpasteurized", "undercooked"],
        minimums: &[(LowerBound::Protein, 20.0), (LowerBound::Calories, 300.0)],
        recommended: NONE,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_condition_ids_are_unique() {
        let ids: HashSet<_> = MEDICAL_CONDITIONS.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), MEDICAL_CONDITIONS.len());
    }

    #[test]
    fn test_heart_disease_profile_bounds() {
        let profile = condition_by_id("heart_disease").unwrap().to_profile();
        assert_eq!(profile.name, "Heart Disease");
        assert_eq!(profile.restrictions.max_sodium, Some(500.0));
        assert_eq!(profile.restrictions.max_trans_fat, Some(0.0));
        assert!(profile
            .restrictions
            .avoid_ingredients
            .contains(&"margarine".to_owned()));
        assert!(profile.requirements.is_empty());
    }

    #[test]
    fn test_pregnancy_has_both_restrictions_and_requirements() {
        let profile = condition_by_id("pregnancy").unwrap().to_profile();
        assert_eq!(profile.requirements.min_folate, Some(50.0));
        assert_eq!(profile.requirements.min_iron, Some(3.0));
        assert!(!profile.restrictions.avoid_ingredients.is_empty());
    }

    #[test]
    fn test_unknown_condition_is_none() {
        assert!(condition_by_id("not_a_condition").is_none());
    }
}
