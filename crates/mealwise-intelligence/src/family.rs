// ABOUTME: Per-member eligibility checks and portion sizing for family meal assignment
// ABOUTME: Builds each member's profiles from conditions and allergies and flags spicy recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::safety;
use mealwise_core::constants::condition_by_id;
use mealwise_core::constants::scoring::{planner, SPICY_MARKERS};
use mealwise_core::models::{FamilyMember, MedicalProfile, RecipeDetail};
use tracing::debug;

/// Profiles that apply to one member: catalog conditions, then allergies
///
/// Unknown condition ids are skipped.
#[must_use]
pub fn member_profiles(member: &FamilyMember) -> Vec<MedicalProfile> {
    let mut profiles: Vec<MedicalProfile> = member
        .medical_condition_ids
        .iter()
        .filter_map(|id| {
            let found = condition_by_id(id);
            if found.is_none() {
                debug!(member_id = %member.id, condition_id = %id, "Unknown condition id skipped");
            }
            found.map(|definition| definition.to_profile())
        })
        .collect();

    if let Some(allergies) = allergy_profile(member) {
        profiles.push(allergies);
    }
    profiles
}

/// Avoid-only profile built from the member's allergies
#[must_use]
pub fn allergy_profile(member: &FamilyMember) -> Option<MedicalProfile> {
    let allergies: Vec<&str> = member
        .allergies
        .iter()
        .map(|a| a.trim())
        .filter(|a| !a.is_empty())
        .collect();
    if allergies.is_empty() {
        return None;
    }
    Some(MedicalProfile::avoiding(
        format!("allergy_{}", member.id),
        format!("{}'s Allergies", member.name),
        allergies,
    ))
}

/// Whether the recipe carries every diet tag the member follows
#[must_use]
pub fn fits_diet(member: &FamilyMember, recipe: &RecipeDetail) -> bool {
    member
        .dietary_restrictions
        .iter()
        .filter(|d| !d.trim().is_empty())
        .all(|diet| recipe.summary.has_diet(diet))
}

/// Whether the member's own profiles and diet allow the recipe
#[must_use]
pub fn member_can_eat(
    member: &FamilyMember,
    recipe: &RecipeDetail,
    servings_override: Option<f64>,
) -> bool {
    let profiles = member_profiles(member);
    safety::evaluate(recipe, &profiles, servings_override).safe && fits_diet(member, recipe)
}

/// Whether the title, tags, or cuisines mark the recipe as spicy
#[must_use]
pub fn is_spicy(recipe: &RecipeDetail) -> bool {
    let haystacks = std::iter::once(recipe.title())
        .chain(recipe.tags.iter().map(String::as_str))
        .chain(recipe.summary.cuisines.iter().map(String::as_str));
    haystacks
        .map(str::to_lowercase)
        .any(|text| SPICY_MARKERS.iter().any(|marker| text.contains(marker)))
}

/// Servings to cook for the given members
///
/// `ceil(servings_per_portion x sum of portion multipliers)`, at least one.
/// With no members the default household size applies.
#[must_use]
pub fn servings_needed(servings_per_portion: f64, members: &[&FamilyMember]) -> u32 {
    if members.is_empty() {
        return planner::DEFAULT_HOUSEHOLD_SERVINGS;
    }
    let portions: f64 = members.iter().map(|m| m.portion_multiplier()).sum();
    let servings = (servings_per_portion * portions).ceil();
    if servings.is_finite() && servings >= 1.0 {
        servings as u32
    } else {
        1
    }
}
