// ABOUTME: Nutrient name variants seen in recipe nutrition records
// ABOUTME: Alias lists are tried in order after exact and substring matching fail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Aliases shorter than this only match a record name exactly
pub const MIN_FUZZY_ALIAS_LEN: usize = 3;

/// Energy
pub const CALORIES: &[&str] = &["calories", "energy", "kcal"];
/// Protein
pub const PROTEIN: &[&str] = &["protein"];
/// Carbohydrates
pub const CARBOHYDRATES: &[&str] = &["carbs", "carbohydrate", "total carbohydrates"];
/// Total fat
pub const FAT: &[&str] = &["total fat", "total lipid", "fat"];
/// Saturated fat
pub const SATURATED_FAT: &[&str] = &["saturated fat", "saturated fatty acids", "sat fat"];
/// Trans fat
pub const TRANS_FAT: &[&str] = &["trans fat", "trans fatty acids", "trans"];
/// Sugars
pub const SUGAR: &[&str] = &["sugar", "sugars", "total sugars"];
/// Dietary fiber
pub const FIBER: &[&str] = &["fiber", "fibre", "dietary fiber", "dietary fibre"];
/// Sodium
pub const SODIUM: &[&str] = &["sodium", "na", "salt"];
/// Cholesterol
pub const CHOLESTEROL: &[&str] = &["cholesterol"];
/// Potassium
pub const POTASSIUM: &[&str] = &["potassium", "k"];
/// Phosphorus
pub const PHOSPHORUS: &[&str] = &["phosphorus", "p"];
/// Iron
pub const IRON: &[&str] = &["iron", "fe"];
/// Calcium
pub const CALCIUM: &[&str] = &["calcium", "ca"];
/// Vitamin D
pub const VITAMIN_D: &[&str] = &["vitamin d", "vitamin d3", "cholecalciferol"];
/// Vitamin C
pub const VITAMIN_C: &[&str] = &["vitamin c", "ascorbic acid"];
/// Vitamin A
pub const VITAMIN_A: &[&str] = &["vitamin a", "retinol"];
/// Vitamin B12
pub const VITAMIN_B12: &[&str] = &["vitamin b12", "b12", "cobalamin"];
/// Folate
pub const FOLATE: &[&str] = &["folate", "folic acid", "vitamin b9"];
/// Magnesium
pub const MAGNESIUM: &[&str] = &["magnesium"];
/// Zinc
pub const ZINC: &[&str] = &["zinc", "zn"];
