// ABOUTME: Safety evaluation results with conflicts, warnings, and a summary badge
// ABOUTME: Conflicts are high severity and make a recipe unsafe; warnings are advisory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Issue severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Advisory nutrient shortfall
    Low,
    /// Calorie-goal mismatch
    Medium,
    /// Restriction violation
    High,
}

/// One conflict or warning
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyIssue {
    /// Profile the issue belongs to
    pub condition_name: String,
    /// Human-readable description
    pub issue: String,
    /// Severity
    pub severity: Severity,
}

impl SafetyIssue {
    /// High-severity conflict
    pub fn conflict(condition_name: impl Into<String>, issue: impl Into<String>) -> Self {
        Self {
            condition_name: condition_name.into(),
            issue: issue.into(),
            severity: Severity::High,
        }
    }

    /// Warning at the given severity
    pub fn warning(
        condition_name: impl Into<String>,
        issue: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            condition_name: condition_name.into(),
            issue: issue.into(),
            severity,
        }
    }
}

/// Outcome of evaluating one recipe against a set of profiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyResult {
    /// False when any conflict was found
    pub safe: bool,
    /// Restriction violations
    pub conflicts: Vec<SafetyIssue>,
    /// Advisory notes
    pub warnings: Vec<SafetyIssue>,
}

impl Default for SafetyResult {
    fn default() -> Self {
        Self {
            safe: true,
            conflicts: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

impl SafetyResult {
    /// Record a conflict and mark the result unsafe
    pub fn add_conflict(&mut self, conflict: SafetyIssue) {
        self.safe = false;
        self.conflicts.push(conflict);
    }

    /// Record a warning
    pub fn add_warning(&mut self, warning: SafetyIssue) {
        self.warnings.push(warning);
    }

    /// Fold another result into this one
    pub fn merge(&mut self, other: Self) {
        self.safe &= other.safe;
        self.conflicts.extend(other.conflicts);
        self.warnings.extend(other.warnings);
    }

    /// Summary badge, if there is anything to show
    #[must_use]
    pub fn badge(&self) -> Option<SafetyBadge> {
        let plural = |n: usize| if n > 1 { "s" } else { "" };
        if !self.conflicts.is_empty() {
            let count = self.conflicts.len();
            return Some(SafetyBadge {
                kind: BadgeKind::Conflict,
                count,
                message: format!("{count} medical conflict{}", plural(count)),
            });
        }
        if !self.warnings.is_empty() {
            let count = self.warnings.len();
            return Some(SafetyBadge {
                kind: BadgeKind::Info,
                count,
                message: format!("{count} nutritional note{}", plural(count)),
            });
        }
        None
    }
}

/// Badge category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeKind {
    /// At least one conflict
    Conflict,
    /// Warnings only
    Info,
}

/// Short summary of a safety result for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyBadge {
    /// Category
    pub kind: BadgeKind,
    /// Number of conflicts or warnings summarised
    pub count: usize,
    /// Display text
    pub message: String,
}
