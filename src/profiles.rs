// ABOUTME: Assembles the active medical profiles for a household from user settings and family records
// ABOUTME: Keeps the user's own profiles separate from the family additions for two-pass filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealwise_core::constants::condition_by_id;
use mealwise_core::models::{FamilyMember, MedicalProfile, MedicalSettings};
use mealwise_intelligence::family::allergy_profile;
use std::collections::BTreeSet;
use tracing::debug;

/// Name of the profile built from the user's foods-to-avoid list
pub const CUSTOM_RESTRICTIONS_PROFILE: &str = "Custom Restrictions";
/// Name of the profile built from the user's required nutrients
pub const NUTRITIONAL_REQUIREMENTS_PROFILE: &str = "Nutritional Requirements";

/// Profiles in force for one evaluation
///
/// The user's own profiles come first, followed by family additions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveProfiles {
    profiles: Vec<MedicalProfile>,
    user_count: usize,
    recommended: Vec<String>,
}

impl ActiveProfiles {
    /// Merge user settings and family members
    ///
    /// User profiles, in order: catalog conditions, custom conditions, the
    /// foods-to-avoid profile, the required-nutrients profile. Family
    /// additions: catalog conditions not already active, then one allergy
    /// profile per member with allergies.
    #[must_use]
    pub fn assemble(settings: &MedicalSettings, members: &[FamilyMember]) -> Self {
        let mut seen: BTreeSet<String> = BTreeSet::new();
        let mut profiles: Vec<MedicalProfile> = Vec::new();

        for id in &settings.conditions {
            push_catalog_condition(id, &mut seen, &mut profiles);
        }
        profiles.extend(settings.custom_conditions.iter().cloned());

        let avoid: Vec<&str> = settings
            .foods_to_avoid
            .iter()
            .map(|f| f.trim())
            .filter(|f| !f.is_empty())
            .collect();
        if !avoid.is_empty() {
            profiles.push(MedicalProfile::avoiding(
                "custom_restrictions",
                CUSTOM_RESTRICTIONS_PROFILE,
                avoid,
            ));
        }
        if !settings.required_nutrients.is_empty() {
            let mut requirements =
                MedicalProfile::new("nutritional_requirements", NUTRITIONAL_REQUIREMENTS_PROFILE);
            requirements.requirements.extra = settings.required_nutrients.clone();
            profiles.push(requirements);
        }
        let user_count = profiles.len();

        for member in members {
            for id in &member.medical_condition_ids {
                push_catalog_condition(id, &mut seen, &mut profiles);
            }
        }
        profiles.extend(members.iter().filter_map(allergy_profile));

        let recommended = collect_recommended(&profiles, &settings.foods_recommended);
        debug!(
            user_profiles = user_count,
            total_profiles = profiles.len(),
            "Assembled active profiles"
        );
        Self {
            profiles,
            user_count,
            recommended,
        }
    }

    /// Profiles from explicit values; all of them count as the user's
    #[must_use]
    pub fn from_profiles(profiles: Vec<MedicalProfile>) -> Self {
        let recommended = collect_recommended(&profiles, &[]);
        Self {
            user_count: profiles.len(),
            profiles,
            recommended,
        }
    }

    /// The user's own profiles
    #[must_use]
    pub fn user(&self) -> &[MedicalProfile] {
        &self.profiles[..self.user_count]
    }

    /// User and family profiles
    #[must_use]
    pub fn all(&self) -> &[MedicalProfile] {
        &self.profiles
    }

    /// Recommended ingredients across all profiles, lower-cased and de-duplicated
    #[must_use]
    pub fn recommended_ingredients(&self) -> &[String] {
        &self.recommended
    }

    /// Whether no profile is active
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

fn push_catalog_condition(id: &str, seen: &mut BTreeSet<String>, profiles: &mut Vec<MedicalProfile>) {
    if !seen.insert(id.to_owned()) {
        return;
    }
    match condition_by_id(id) {
        Some(definition) => profiles.push(definition.to_profile()),
        None => debug!(condition_id = %id, "Unknown condition id skipped"),
    }
}

fn collect_recommended(profiles: &[MedicalProfile], extra: &[String]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    profiles
        .iter()
        .flat_map(|p| p.requirements.recommended_ingredients.iter())
        .chain(extra)
        .map(|item| item.trim().to_lowercase())
        .filter(|item| !item.is_empty() && seen.insert(item.clone()))
        .collect()
}
