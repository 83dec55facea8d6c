// ABOUTME: Family member records with role, allergies, conditions, and portion sizing
// ABOUTME: Roles determine default portion multipliers and child handling in the planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::scoring::planner::CHILD_AGE_LIMIT_MONTHS;
use serde::{Deserialize, Serialize};

/// Household role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FamilyRole {
    /// Under one year
    Baby,
    /// One to three years
    Toddler,
    /// School age
    Child,
    /// Teenager
    #[serde(alias = "teenager")]
    Teen,
    /// Adult parent
    #[serde(alias = "mom", alias = "dad", alias = "adult")]
    Parent,
    /// Older adult
    #[serde(alias = "grandma", alias = "grandpa", alias = "senior")]
    Grandparent,
    /// Anything else
    #[serde(other)]
    Other,
}

impl FamilyRole {
    /// Default portion multiplier relative to one adult serving
    #[must_use]
    pub const fn portion_multiplier(self) -> f64 {
        match self {
            Self::Baby => 0.25,
            Self::Toddler => 0.5,
            Self::Child => 0.75,
            Self::Teen => 1.25,
            Self::Grandparent => 0.85,
            Self::Parent | Self::Other => 1.0,
        }
    }

    /// Parse a role from free-form text
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "baby" => Self::Baby,
            "toddler" => Self::Toddler,
            "child" => Self::Child,
            "teen" | "teenager" => Self::Teen,
            "parent" | "mom" | "dad" | "adult" => Self::Parent,
            "grandparent" | "grandma" | "grandpa" | "senior" => Self::Grandparent,
            _ => Self::Other,
        }
    }
}

/// One member of the household
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyMember {
    /// Identifier referenced from plan slots
    pub id: String,
    /// Display name
    pub name: String,
    /// Household role
    pub role: FamilyRole,
    /// Age in months, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_months: Option<u32>,
    /// Allergens to avoid (ingredient substrings)
    #[serde(default)]
    pub allergies: Vec<String>,
    /// Diet tags the member follows (vegetarian, gluten free, ...)
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    /// Catalog condition ids
    #[serde(default, alias = "medical_conditions")]
    pub medical_condition_ids: Vec<String>,
    /// Explicit portion multiplier; the role default applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portion_multiplier: Option<f64>,
}

impl FamilyMember {
    /// Member with no allergies, diets, or conditions
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: FamilyRole) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            age_months: None,
            allergies: Vec::new(),
            dietary_restrictions: Vec::new(),
            medical_condition_ids: Vec::new(),
            portion_multiplier: None,
        }
    }

    /// Effective portion multiplier
    #[must_use]
    pub fn portion_multiplier(&self) -> f64 {
        self.portion_multiplier
            .filter(|m| m.is_finite() && *m > 0.0)
            .unwrap_or_else(|| self.role.portion_multiplier())
    }

    /// Baby, toddler, or child; `Other` counts when the age is under twelve years
    #[must_use]
    pub fn is_child(&self) -> bool {
        match self.role {
            FamilyRole::Baby | FamilyRole::Toddler | FamilyRole::Child => true,
            FamilyRole::Other => self
                .age_months
                .is_some_and(|months| months < CHILD_AGE_LIMIT_MONTHS),
            FamilyRole::Teen | FamilyRole::Parent | FamilyRole::Grandparent => false,
        }
    }
}
