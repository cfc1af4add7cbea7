// ABOUTME: Weekly meal plan, grocery list, and ad-hoc dish recommendation models
// ABOUTME: Field names serialize in camelCase to match the tool response payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// A meal slot within one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
}

impl MealSlot {
    /// Lowercase label used in payloads and logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dishes chosen for one day, by slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Day label such as 周一
    pub day: String,
    /// Breakfast dish names
    pub breakfast: Vec<String>,
    /// Lunch dish names
    pub lunch: Vec<String>,
    /// Dinner dish names
    pub dinner: Vec<String>,
}

impl DayPlan {
    /// Every dish name of the day, breakfast first
    pub fn dishes(&self) -> impl Iterator<Item = &String> {
        self.breakfast
            .iter()
            .chain(self.lunch.iter())
            .chain(self.dinner.iter())
    }
}

/// Ingredient names partitioned by shopping section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingPlan {
    /// Produce, meat, seafood, eggs, dairy
    pub fresh: Vec<String>,
    /// Dry goods and staples
    pub pantry: Vec<String>,
    /// Seasonings and condiments
    pub spices: Vec<String>,
    /// Everything unclassified
    pub others: Vec<String>,
}

impl ShoppingPlan {
    /// Total number of names across all sections
    #[must_use]
    pub fn len(&self) -> usize {
        self.fresh.len() + self.pantry.len() + self.spices.len() + self.others.len()
    }

    /// Whether every section is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Deduplicated ingredient list with its shopping partition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryList {
    /// Lowercased ingredient names in first-seen order
    pub ingredients: Vec<String>,
    /// The same names partitioned by section
    pub shopping_plan: ShoppingPlan,
}

/// Seven days of meals plus the grocery list covering them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    /// Monday to Friday
    pub weekdays: Vec<DayPlan>,
    /// Saturday and Sunday
    pub weekend: Vec<DayPlan>,
    /// Ingredients for every dish in the plan
    pub grocery_list: GroceryList,
}

impl MealPlan {
    /// All days in calendar order
    pub fn days(&self) -> impl Iterator<Item = &DayPlan> {
        self.weekdays.iter().chain(self.weekend.iter())
    }
}

/// Summary counts reported alongside a meal plan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanStats {
    /// Dish references resolved to a recipe, repeats included
    pub total_recipes_used: usize,
    /// Distinct dish names among the resolved references
    pub unique_recipes_used: usize,
    /// Distinct ingredient names on the grocery list
    pub total_ingredients: usize,
}

/// A slot that received fewer dishes than its target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotShortfall {
    /// Day label
    pub day: String,
    /// Slot within the day
    pub slot: MealSlot,
    /// Target dish count
    pub requested: usize,
    /// Dishes actually selected
    pub selected: usize,
}

impl fmt::Display for SlotShortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {}/{} dishes",
            self.day, self.slot, self.selected, self.requested
        )
    }
}

/// Dishes recommended for a single meal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishRecommendation {
    /// Party size
    pub people_count: u32,
    /// Target vegetable dish count
    pub vegetable_dish_count: usize,
    /// Target meat dish count
    pub meat_dish_count: usize,
    /// Target seafood dish count, absent when zero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fish_dish_count: Option<usize>,
    /// Selected dish names
    pub dishes: Vec<String>,
    /// Friendly summary line
    pub message: String,
}
