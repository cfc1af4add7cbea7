// ABOUTME: Weekly meal plan construction over an allergen-filtered recipe pool
// ABOUTME: Seven days of breakfast/lunch/dinner sized by party, plus the grocery list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

//! # Weekly Plan Builder
//!
//! Builds five weekday and two weekend [`DayPlan`]s. Every slot is an independent
//! [`MealSelector`] call against the same safe pool, so a dish may repeat across
//! slots and days; it never repeats within one slot.
//!
//! When the pool runs short a slot receives fewer dishes than its target. The
//! selection outcome is left as is and the gap is reported as a [`SlotShortfall`].

use howtocook_core::constants::categories::{BREAKFAST_CATEGORIES, MAIN_MEAL_CATEGORIES};
use howtocook_core::constants::planning::{MIN_SAFE_RECIPES, WEEKDAY_LABELS, WEEKEND_LABELS};
use howtocook_core::models::{DayPlan, MealPlan, MealSlot, PlanStats, Recipe, SlotShortfall};
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

use crate::grocery::{resolve_dishes, GroceryAggregator};
use crate::meal_selector::{MealSelector, RecipeGroups};
use crate::random::RandomSource;

/// Reasons a weekly plan cannot be built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The safe pool is below the planning minimum
    #[error("insufficient recipes: need at least {minimum}, only {available} remain after filtering")]
    InsufficientRecipes {
        /// Required pool size
        minimum: usize,
        /// Pool size after filtering
        available: usize,
    },
}

/// Lowercased allergens and avoided ingredients
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvoidList {
    items: Vec<String>,
}

impl AvoidList {
    /// Merge allergies and avoided items; blank entries are dropped
    #[must_use]
    pub fn from_constraints(allergies: &[String], avoid_items: &[String]) -> Self {
        let items = allergies
            .iter()
            .chain(avoid_items)
            .map(|item| item.to_lowercase())
            .filter(|item| !item.trim().is_empty())
            .collect();
        Self { items }
    }

    /// Whether any ingredient of `recipe` contains an avoided item
    #[must_use]
    pub fn excludes(&self, recipe: &Recipe) -> bool {
        recipe.ingredient_names().any(|name| {
            let name = name.to_lowercase();
            self.items.iter().any(|avoid| name.contains(avoid.as_str()))
        })
    }

    /// Whether no constraint is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Recipes with no avoided ingredient, corpus order kept
#[must_use]
pub fn filter_safe_recipes<'a>(recipes: &'a [Recipe], avoid: &AvoidList) -> Vec<&'a Recipe> {
    recipes.iter().filter(|r| !avoid.excludes(r)).collect()
}

/// Dish targets for the three slots of a day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotTargets {
    /// Breakfast dish count
    pub breakfast: usize,
    /// Lunch dish count
    pub lunch: usize,
    /// Dinner dish count
    pub dinner: usize,
}

impl SlotTargets {
    /// Monday to Friday
    #[must_use]
    pub fn weekday(people_count: u32) -> Self {
        let p = people_count as usize;
        let main = ((p + 1) / 2).max(2);
        Self {
            breakfast: (p / 3).clamp(1, 2),
            lunch: main,
            dinner: main,
        }
    }

    /// Saturday and Sunday
    #[must_use]
    pub fn weekend(people_count: u32) -> Self {
        let p = people_count as usize;
        let main = ((p + 2) / 2).max(3);
        Self {
            breakfast: (p / 2).clamp(2, 3),
            lunch: main,
            dinner: main,
        }
    }

    /// Target for `slot`
    #[must_use]
    pub const fn get(self, slot: MealSlot) -> usize {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
        }
    }
}

/// A built plan with its summary and any under-filled slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyPlan {
    /// Days and grocery list
    pub meal_plan: MealPlan,
    /// Usage counts
    pub stats: PlanStats,
    /// Slots that received fewer dishes than targeted
    pub shortfalls: Vec<SlotShortfall>,
}

/// Orchestrates slot selection across a week
pub struct WeeklyPlanBuilder<'r> {
    rng: &'r dyn RandomSource,
    aggregator: GroceryAggregator,
}

impl<'r> WeeklyPlanBuilder<'r> {
    /// Builder drawing randomness from `rng`
    #[must_use]
    pub fn new(rng: &'r dyn RandomSource) -> Self {
        Self {
            rng,
            aggregator: GroceryAggregator::default(),
        }
    }

    /// Replace the grocery aggregator
    #[must_use]
    pub fn with_aggregator(mut self, aggregator: GroceryAggregator) -> Self {
        self.aggregator = aggregator;
        self
    }

    /// Build a week of meals for `people_count` from an already filtered pool
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InsufficientRecipes`] when `safe` holds fewer than
    /// the planning minimum.
    pub fn build(&self, safe: &[&Recipe], people_count: u32) -> Result<WeeklyPlan, PlanError> {
        if safe.len() < MIN_SAFE_RECIPES {
            return Err(PlanError::InsufficientRecipes {
                minimum: MIN_SAFE_RECIPES,
                available: safe.len(),
            });
        }

        let groups = RecipeGroups::group_by_category(safe);
        let selector = MealSelector::new(&groups, safe, self.rng);
        let mut shortfalls = Vec::new();

        let weekday_targets = SlotTargets::weekday(people_count);
        let weekdays: Vec<DayPlan> = WEEKDAY_LABELS
            .iter()
            .map(|day| Self::plan_day(&selector, day, weekday_targets, &mut shortfalls))
            .collect();

        let weekend_targets = SlotTargets::weekend(people_count);
        let weekend: Vec<DayPlan> = WEEKEND_LABELS
            .iter()
            .map(|day| Self::plan_day(&selector, day, weekend_targets, &mut shortfalls))
            .collect();

        let referenced: Vec<&String> = weekdays
            .iter()
            .chain(weekend.iter())
            .flat_map(DayPlan::dishes)
            .collect();
        let selected = resolve_dishes(&referenced, safe);
        let grocery_list = self.aggregator.aggregate(&selected);

        let stats = PlanStats {
            total_recipes_used: selected.len(),
            unique_recipes_used: selected
                .iter()
                .map(|r| r.name.as_str())
                .collect::<HashSet<_>>()
                .len(),
            total_ingredients: grocery_list.ingredients.len(),
        };

        debug!(
            people_count,
            safe_pool = safe.len(),
            categories = groups.category_count(),
            dishes = stats.total_recipes_used,
            shortfalls = shortfalls.len(),
            "Built weekly meal plan"
        );

        Ok(WeeklyPlan {
            meal_plan: MealPlan {
                weekdays,
                weekend,
                grocery_list,
            },
            stats,
            shortfalls,
        })
    }

    fn plan_day(
        selector: &MealSelector<'_, '_>,
        day: &str,
        targets: SlotTargets,
        shortfalls: &mut Vec<SlotShortfall>,
    ) -> DayPlan {
        let mut pick = |slot: MealSlot, categories: &[&str]| {
            let requested = targets.get(slot);
            let dishes = selector.select(categories, requested);
            if dishes.len() < requested {
                shortfalls.push(SlotShortfall {
                    day: day.to_owned(),
                    slot,
                    requested,
                    selected: dishes.len(),
                });
            }
            dishes
        };

        DayPlan {
            day: day.to_owned(),
            breakfast: pick(MealSlot::Breakfast, BREAKFAST_CATEGORIES),
            lunch: pick(MealSlot::Lunch, MAIN_MEAL_CATEGORIES),
            dinner: pick(MealSlot::Dinner, MAIN_MEAL_CATEGORIES),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{IngredientCategory, IngredientClassifier};
    use crate::keywords::KeywordRuleSet;
    use crate::random::SequenceRandom;

    #[test]
    fn test_weekday_targets() {
        assert_eq!(SlotTargets::weekday(1), SlotTargets { breakfast: 1, lunch: 2, dinner: 2 });
        assert_eq!(SlotTargets::weekday(4), SlotTargets { breakfast: 1, lunch: 2, dinner: 2 });
        assert_eq!(SlotTargets::weekday(6), SlotTargets { breakfast: 2, lunch: 3, dinner: 3 });
        assert_eq!(SlotTargets::weekday(10), SlotTargets { breakfast: 2, lunch: 5, dinner: 5 });
    }

    #[test]
    fn test_weekend_targets() {
        assert_eq!(SlotTargets::weekend(1), SlotTargets { breakfast: 2, lunch: 3, dinner: 3 });
        assert_eq!(SlotTargets::weekend(4), SlotTargets { breakfast: 2, lunch: 3, dinner: 3 });
        assert_eq!(SlotTargets::weekend(6), SlotTargets { breakfast: 3, lunch: 4, dinner: 4 });
        assert_eq!(SlotTargets::weekend(10), SlotTargets { breakfast: 3, lunch: 6, dinner: 6 });
    }

    #[test]
    fn test_custom_aggregator_sorts_grocery_list() -> Result<(), PlanError> {
        let corpus: Vec<Recipe> = (0..MIN_SAFE_RECIPES)
            .map(|i| Recipe::new(format!("荤菜{i}"), "荤菜", &["猪肉", "酱油"]))
            .collect();
        let safe: Vec<&Recipe> = corpus.iter().collect();
        let everything_pantry = KeywordRuleSet::new(Vec::new(), IngredientCategory::Pantry);
        let aggregator = GroceryAggregator::new(IngredientClassifier::with_rules(everything_pantry));
        let rng = SequenceRandom::zeros();

        let plan = WeeklyPlanBuilder::new(&rng)
            .with_aggregator(aggregator)
            .build(&safe, 2)?;

        let grocery = &plan.meal_plan.grocery_list;
        assert_eq!(grocery.ingredients, vec!["猪肉".to_owned(), "酱油".to_owned()]);
        assert_eq!(grocery.shopping_plan.pantry, grocery.ingredients);
        assert!(grocery.shopping_plan.fresh.is_empty());
        assert!(grocery.shopping_plan.spices.is_empty());
        Ok(())
    }

    #[test]
    fn test_blank_avoid_entries_are_ignored() {
        let avoid = AvoidList::from_constraints(&[String::new()], &["  ".to_owned()]);
        assert!(avoid.is_empty());
        assert!(!avoid.excludes(&Recipe::new("炒青菜", "素菜", &["青菜"])));
    }
}
