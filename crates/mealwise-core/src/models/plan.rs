// ABOUTME: Weekly meal plan grid of days by meal slots
// ABOUTME: Each slot holds an optional planned meal with the family members it is assigned to
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Days in a plan
pub const DAYS_PER_WEEK: usize = 7;

const WEEK: [Weekday; DAYS_PER_WEEK] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Meal slot within a day, in fill order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Breakfast
    Breakfast,
    /// Lunch
    Lunch,
    /// Dinner
    Dinner,
    /// Mid-morning snack
    MorningSnack,
    /// Afternoon snack
    AfternoonSnack,
    /// Evening snack
    EveningSnack,
}

impl MealSlot {
    /// Slots present in every plan
    pub const REQUIRED: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];
    /// Optional snack slots
    pub const SNACKS: [Self; 3] = [Self::MorningSnack, Self::AfternoonSnack, Self::EveningSnack];

    /// Slots of a day in fill order
    #[must_use]
    pub fn for_day(include_snacks: bool) -> Vec<Self> {
        let mut slots = Self::REQUIRED.to_vec();
        if include_snacks {
            slots.extend(Self::SNACKS);
        }
        slots
    }

    /// Whether this is a snack slot
    #[must_use]
    pub const fn is_snack(self) -> bool {
        matches!(
            self,
            Self::MorningSnack | Self::AfternoonSnack | Self::EveningSnack
        )
    }

    /// Meal type passed to catalog searches
    #[must_use]
    pub const fn search_meal_type(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::MorningSnack | Self::AfternoonSnack | Self::EveningSnack => "snack",
        }
    }

    /// Recipe meal-type tags that fit this slot
    #[must_use]
    pub const fn meal_type_tags(self) -> &'static [&'static str] {
        match self {
            Self::Breakfast => &["breakfast", "brunch", "morning meal"],
            Self::Lunch => &["lunch", "main course", "main dish", "salad", "soup"],
            Self::Dinner => &["dinner", "main course", "main dish"],
            Self::MorningSnack | Self::AfternoonSnack | Self::EveningSnack => {
                &["snack", "appetizer", "fingerfood"]
            }
        }
    }
}

/// A recipe placed in a slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedMeal {
    /// Catalog identifier
    pub recipe_id: String,
    /// Recipe title
    pub title: String,
    /// Image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Family members who eat this meal
    #[serde(default)]
    pub assigned_member_ids: BTreeSet<String>,
    /// Servings to cook for the assigned members
    #[serde(default)]
    pub servings_needed: u32,
}

/// One day of the plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Day of the week
    pub weekday: Weekday,
    /// Slot contents; `None` marks an empty slot
    pub meals: BTreeMap<MealSlot, Option<PlannedMeal>>,
}

/// Fill statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanStats {
    /// Slots holding a meal
    pub filled: usize,
    /// Empty slots
    pub empty: usize,
    /// All slots
    pub total: usize,
    /// `filled / total` as a percentage, rounded to whole percent
    pub fill_percentage: f64,
}

/// Seven-day grid, Monday first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    /// Days in order
    pub days: Vec<DayPlan>,
}

impl MealPlan {
    /// Empty grid with the required slots, plus snack slots when requested
    #[must_use]
    pub fn new(include_snacks: bool) -> Self {
        let slots = MealSlot::for_day(include_snacks);
        let days = WEEK
            .iter()
            .map(|weekday| DayPlan {
                weekday: *weekday,
                meals: slots.iter().map(|slot| (*slot, None)).collect(),
            })
            .collect();
        Self { days }
    }

    /// Add any missing days and slots so that every slot of `slots` exists
    pub fn ensure_slots(&mut self, slots: &[MealSlot]) {
        for (index, weekday) in WEEK.iter().enumerate() {
            if self.days.len() <= index {
                self.days.push(DayPlan {
                    weekday: *weekday,
                    meals: BTreeMap::new(),
                });
            }
            for slot in slots {
                self.days[index].meals.entry(*slot).or_insert(None);
            }
        }
    }

    /// Meal in a slot
    #[must_use]
    pub fn get(&self, day: usize, slot: MealSlot) -> Option<&PlannedMeal> {
        self.days
            .get(day)
            .and_then(|d| d.meals.get(&slot))
            .and_then(Option::as_ref)
    }

    /// Whether the slot exists and holds no meal
    #[must_use]
    pub fn is_open(&self, day: usize, slot: MealSlot) -> bool {
        self.days
            .get(day)
            .and_then(|d| d.meals.get(&slot))
            .is_some_and(Option::is_none)
    }

    /// Place a meal; returns false when the day does not exist
    pub fn assign(&mut self, day: usize, slot: MealSlot, meal: PlannedMeal) -> bool {
        match self.days.get_mut(day) {
            Some(day_plan) => {
                day_plan.meals.insert(slot, Some(meal));
                true
            }
            None => false,
        }
    }

    /// Every slot in fill order
    pub fn slots(&self) -> impl Iterator<Item = (usize, MealSlot, Option<&PlannedMeal>)> {
        self.days.iter().enumerate().flat_map(|(index, day)| {
            day.meals
                .iter()
                .map(move |(slot, meal)| (index, *slot, meal.as_ref()))
        })
    }

    /// Ids of every recipe already placed
    #[must_use]
    pub fn used_recipe_ids(&self) -> BTreeSet<String> {
        self.slots()
            .filter_map(|(_, _, meal)| meal.map(|m| m.recipe_id.clone()))
            .collect()
    }

    /// Fill statistics
    #[must_use]
    pub fn stats(&self) -> PlanStats {
        let total = self.slots().count();
        let filled = self.slots().filter(|(_, _, meal)| meal.is_some()).count();
        let fill_percentage = if total == 0 {
            0.0
        } else {
            (filled as f64 * 100.0 / total as f64).round()
        };
        PlanStats {
            filled,
            empty: total - filled,
            total,
            fill_percentage,
        }
    }
}
