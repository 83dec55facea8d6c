// ABOUTME: Fills a weekly meal plan slot by slot from favorites, pantry searches, and meal-type searches
// ABOUTME: Applies two safety passes, meal-fitness ranking, variety with reuse fallback, and family assignment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{PlanOutcome, PlanRequest, PlanSummary};
use crate::catalog::{RecipeCatalog, SearchFilters};
use crate::config::{EngineConfig, PlannerConfig};
use crate::profiles::ActiveProfiles;
use chrono::Utc;
use mealwise_core::models::{
    FamilyMember, MealPlan, MealSlot, Nutrient, PlannedMeal, RecipeDetail, SafetyResult,
    DAYS_PER_WEEK,
};
use mealwise_core::{AppError, AppResult};
use mealwise_intelligence::calorie_goals::calorie_goal_note;
use mealwise_intelligence::family::{is_spicy, member_can_eat, servings_needed};
use mealwise_intelligence::{evaluate, overlap_score, FitnessContext, MealFitnessScorer, NutrientView};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CandidateSource {
    Favorites,
    Pantry,
    MealType,
}

impl CandidateSource {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Favorites => "favorites",
            Self::Pantry => "pantry",
            Self::MealType => "meal_type",
        }
    }
}

enum SlotOutcome {
    Filled {
        meal: PlannedMeal,
        reused: bool,
        pantry_matched: bool,
    },
    NoCandidates,
    Unsafe,
    Failed,
}

/// Mutable state owned by a single run
struct PlanRun {
    used: BTreeSet<String>,
    details: BTreeMap<String, RecipeDetail>,
    member_meal_counts: BTreeMap<String, usize>,
    rng: ChaCha8Rng,
}

/// Weekly plan generator
#[derive(Clone)]
pub struct PlanGenerator {
    catalog: Arc<dyn RecipeCatalog>,
    config: PlannerConfig,
    scorer: MealFitnessScorer,
}

impl PlanGenerator {
    /// Generator over `catalog` with the planner and fitness sections of `config`
    #[must_use]
    pub fn new(catalog: Arc<dyn RecipeCatalog>, config: &EngineConfig) -> Self {
        Self {
            catalog,
            config: config.planner.clone(),
            scorer: MealFitnessScorer::new(config.fitness),
        }
    }

    /// Fill every empty slot of the week
    ///
    /// Never fails: a slot whose lookups fail stays empty and is counted in
    /// the summary. Each run owns its own used-recipe set, detail cache, and
    /// random source.
    pub async fn generate(&self, request: &PlanRequest) -> PlanOutcome {
        let plan_id = Uuid::new_v4();
        let span = info_span!(
            "generate_meal_plan",
            plan_id = %plan_id,
            members = request.members.len(),
            profiles = request.profiles.all().len()
        );
        self.run(plan_id, request).instrument(span).await
    }

    async fn run(&self, plan_id: Uuid, request: &PlanRequest) -> PlanOutcome {
        let slots = MealSlot::for_day(self.config.include_snacks);
        let mut plan = request
            .existing_plan
            .clone()
            .unwrap_or_else(|| MealPlan::new(self.config.include_snacks));
        plan.ensure_slots(&slots);

        let mut run = PlanRun {
            used: plan.used_recipe_ids(),
            details: BTreeMap::new(),
            member_meal_counts: request.members.iter().map(|m| (m.id.clone(), 0)).collect(),
            rng: self
                .config
                .rng_seed
                .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64),
        };
        let ctx = fitness_context(request);
        let mut summary = PlanSummary::default();

        for day in 0..DAYS_PER_WEEK {
            for slot in &slots {
                if !plan.is_open(day, *slot) {
                    continue;
                }
                summary.slots_attempted += 1;
                let ordinal = summary.slots_attempted;

                match self.fill_slot(&mut run, &ctx, request, *slot, ordinal).await {
                    SlotOutcome::Filled {
                        meal,
                        reused,
                        pantry_matched,
                    } => {
                        debug!(day, slot = slot.search_meal_type(), recipe_id = %meal.recipe_id, reused, "Slot filled");
                        run.used.insert(meal.recipe_id.clone());
                        for member_id in &meal.assigned_member_ids {
                            *run.member_meal_counts.entry(member_id.clone()).or_insert(0) += 1;
                        }
                        plan.assign(day, *slot, meal);
                        summary.slots_filled += 1;
                        summary.reused_recipes += usize::from(reused);
                        summary.pantry_slots_matched += usize::from(pantry_matched);
                    }
                    SlotOutcome::NoCandidates => summary.no_candidates += 1,
                    SlotOutcome::Unsafe => summary.skipped_unsafe += 1,
                    SlotOutcome::Failed => summary.skipped_error += 1,
                }
            }
        }

        info!(
            attempted = summary.slots_attempted,
            filled = summary.slots_filled,
            skipped_unsafe = summary.skipped_unsafe,
            skipped_error = summary.skipped_error,
            no_candidates = summary.no_candidates,
            "Meal plan generated"
        );
        PlanOutcome {
            plan_id,
            plan,
            summary,
            member_meal_counts: run.member_meal_counts,
            generated_at: Utc::now(),
        }
    }

    async fn fill_slot(
        &self,
        run: &mut PlanRun,
        ctx: &FitnessContext,
        request: &PlanRequest,
        slot: MealSlot,
        ordinal: usize,
    ) -> SlotOutcome {
        let source = self.source_for(ordinal, request);
        let pantry_sample = if source == CandidateSource::Pantry {
            self.sample_pantry(&mut run.rng, &request.pantry)
        } else {
            Vec::new()
        };

        let mut candidates = match self
            .candidates(run, source, &pantry_sample, request, slot)
            .await
        {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(slot = slot.search_meal_type(), source = source.as_str(), error = %e, "Candidate lookup failed, slot left empty");
                return SlotOutcome::Failed;
            }
        };
        let mut used_source = source;
        if candidates.is_empty() && source != CandidateSource::MealType {
            debug!(source = source.as_str(), "No candidates, falling back to meal-type search");
            used_source = CandidateSource::MealType;
            candidates = match self
                .candidates(run, used_source, &[], request, slot)
                .await
            {
                Ok(candidates) => candidates,
                Err(e) => {
                    warn!(slot = slot.search_meal_type(), error = %e, "Fallback lookup failed, slot left empty");
                    return SlotOutcome::Failed;
                }
            };
        }
        if candidates.is_empty() {
            debug!(slot = slot.search_meal_type(), "No candidates for slot");
            return SlotOutcome::NoCandidates;
        }

        let ranked = self.rank(candidates, &request.profiles, ctx, slot);
        let Some((chosen, reused)) = pick(&ranked, &run.used) else {
            debug!(slot = slot.search_meal_type(), "Every candidate failed the safety filters");
            return SlotOutcome::Unsafe;
        };

        let recheck = evaluate(chosen, request.profiles.all(), ctx.servings_override);
        if !recheck.safe {
            warn!(recipe_id = %chosen.id(), conflicts = recheck.conflicts.len(), "Chosen recipe failed safety re-check");
            return SlotOutcome::Unsafe;
        }

        let pantry_matched = used_source == CandidateSource::Pantry
            && overlap_score(&pantry_sample, &chosen.ingredient_names()).match_count > 0;
        let members = self.assign_members(&mut run.rng, chosen, &request.members);
        let meal = PlannedMeal {
            recipe_id: chosen.id().to_owned(),
            title: chosen.title().to_owned(),
            image: chosen.summary.image.clone(),
            assigned_member_ids: members.iter().map(|m| m.id.clone()).collect(),
            servings_needed: servings_needed(self.config.servings_per_portion, &members),
        };
        SlotOutcome::Filled {
            meal,
            reused,
            pantry_matched,
        }
    }

    fn source_for(&self, ordinal: usize, request: &PlanRequest) -> CandidateSource {
        if ordinal % self.config.favorites_every_n_slots.max(1) == 0
            && !request.favorite_ids.is_empty()
        {
            CandidateSource::Favorites
        } else if ordinal % self.config.pantry_every_n_slots.max(1) == 0
            && request.pantry.iter().any(|p| !p.trim().is_empty())
        {
            CandidateSource::Pantry
        } else {
            CandidateSource::MealType
        }
    }

    fn sample_pantry(&self, rng: &mut ChaCha8Rng, pantry: &[String]) -> Vec<String> {
        let items: Vec<&String> = pantry.iter().filter(|p| !p.trim().is_empty()).collect();
        items
            .choose_multiple(rng, self.config.pantry_sample_size)
            .map(|item| item.trim().to_owned())
            .collect()
    }

    async fn candidates(
        &self,
        run: &mut PlanRun,
        source: CandidateSource,
        pantry_sample: &[String],
        request: &PlanRequest,
        slot: MealSlot,
    ) -> AppResult<Vec<RecipeDetail>> {
        let ids: Vec<String> = match source {
            CandidateSource::Favorites => request.favorite_ids.clone(),
            CandidateSource::Pantry | CandidateSource::MealType => {
                let mut filters = SearchFilters::ingredients(pantry_sample.to_vec(), self.config.candidate_limit)
                    .with_meal_type(slot.search_meal_type());
                filters.diet.clone_from(&request.diet);
                filters.max_total_minutes = self.config.max_total_minutes;
                self.catalog
                    .search_recipes(&filters)
                    .await?
                    .into_iter()
                    .map(|summary| summary.id)
                    .collect()
            }
        };
        self.fetch_details(run, ids).await
    }

    /// Fetch details one at a time, reusing the run cache
    ///
    /// Individual failures are skipped; an error is returned only when every
    /// fetch failed.
    async fn fetch_details(&self, run: &mut PlanRun, ids: Vec<String>) -> AppResult<Vec<RecipeDetail>> {
        let mut seen = BTreeSet::new();
        let mut details = Vec::with_capacity(ids.len());
        let mut last_error: Option<AppError> = None;

        for id in ids {
            if !seen.insert(id.clone()) {
                continue;
            }
            if let Some(cached) = run.details.get(&id) {
                details.push(cached.clone());
                continue;
            }
            match self.catalog.get_recipe_by_id(&id).await {
                Ok(Some(detail)) => {
                    run.details.insert(id, detail.clone());
                    details.push(detail);
                }
                Ok(None) => debug!(recipe_id = %id, "Candidate recipe not found"),
                Err(e) => {
                    debug!(recipe_id = %id, error = %e, "Candidate detail fetch failed");
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(e) if details.is_empty() => Err(e),
            _ => Ok(details),
        }
    }

    /// User-profile pass, full-profile pass, then meal-fitness order
    fn rank(
        &self,
        candidates: Vec<RecipeDetail>,
        profiles: &ActiveProfiles,
        ctx: &FitnessContext,
        slot: MealSlot,
    ) -> Vec<(RecipeDetail, i32)> {
        let total = candidates.len();
        let mut ranked: Vec<(RecipeDetail, i32)> = candidates
            .into_iter()
            .filter(|recipe| evaluate(recipe, profiles.user(), ctx.servings_override).safe)
            .filter_map(|recipe| {
                let mut safety = evaluate(&recipe, profiles.all(), ctx.servings_override);
                if !safety.safe {
                    return None;
                }
                add_calorie_note(&recipe, ctx, &mut safety);
                let score = self.scorer.score(&recipe, &safety, slot, ctx);
                Some((recipe, score))
            })
            .collect();
        ranked.sort_by_key(|(_, score)| Reverse(*score));
        debug!(
            slot = slot.search_meal_type(),
            candidates = total,
            safe = ranked.len(),
            "Ranked slot candidates"
        );
        ranked
    }

    /// Members who can eat the recipe; everyone when nobody qualifies individually
    fn assign_members<'m>(
        &self,
        rng: &mut ChaCha8Rng,
        recipe: &RecipeDetail,
        members: &'m [FamilyMember],
    ) -> Vec<&'m FamilyMember> {
        let spicy = is_spicy(recipe);
        let exclusion = self.exclusion_probability();
        let eligible: Vec<&FamilyMember> = members
            .iter()
            .filter(|member| member_can_eat(member, recipe, None))
            .filter(|member| !(spicy && member.is_child() && rng.gen_bool(exclusion)))
            .collect();
        if eligible.is_empty() {
            members.iter().collect()
        } else {
            eligible
        }
    }

    fn exclusion_probability(&self) -> f64 {
        let p = self.config.child_spicy_exclusion_probability;
        if p.is_nan() {
            0.0
        } else {
            p.clamp(0.0, 1.0)
        }
    }
}

/// Best unused candidate, or the best overall when all are used
fn pick<'a>(
    ranked: &'a [(RecipeDetail, i32)],
    used: &BTreeSet<String>,
) -> Option<(&'a RecipeDetail, bool)> {
    ranked
        .iter()
        .find(|(recipe, _)| !used.contains(recipe.id()))
        .map(|(recipe, _)| (recipe, false))
        .or_else(|| ranked.first().map(|(recipe, _)| (recipe, true)))
}

fn fitness_context(request: &PlanRequest) -> FitnessContext {
    let targets = request.calorie_profile.as_ref().and_then(|profile| {
        profile
            .daily_targets()
            .map_err(|e| warn!(error = %e, "Calorie profile rejected, planning without targets"))
            .ok()
    });
    FitnessContext {
        targets,
        pantry: request.pantry.clone(),
        favorite_ids: request.favorite_ids.iter().cloned().collect(),
        recommended_ingredients: request.profiles.recommended_ingredients().to_vec(),
        servings_override: None,
    }
}

fn add_calorie_note(recipe: &RecipeDetail, ctx: &FitnessContext, safety: &mut SafetyResult) {
    let Some(targets) = &ctx.targets else {
        return;
    };
    let calories = NutrientView::from_recipe(recipe, ctx.servings_override).per_serving(Nutrient::Calories);
    if let Some(note) = calories.and_then(|c| calorie_goal_note(c, targets)) {
        safety.add_warning(note);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealwise_core::models::RecipeSummary;

    fn detail(id: &str) -> RecipeDetail {
        RecipeDetail::from_summary(RecipeSummary::new(id, id))
    }

    #[test]
    fn test_pick_prefers_unused_then_reuses_best() {
        let ranked = vec![(detail("a"), 200), (detail("b"), 150)];
        let mut used = BTreeSet::new();
        used.insert("a".to_owned());

        let (recipe, reused) = pick(&ranked, &used).unwrap();
        assert_eq!(recipe.id(), "b");
        assert!(!reused);

        used.insert("b".to_owned());
        let (recipe, reused) = pick(&ranked, &used).unwrap();
        assert_eq!(recipe.id(), "a");
        assert!(reused);

        assert!(pick(&[], &used).is_none());
    }
}
