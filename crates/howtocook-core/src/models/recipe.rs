// ABOUTME: Recipe corpus records with ingredient and step sequences
// ABOUTME: Includes the simplified projections returned by the lookup tools
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One ingredient line of a recipe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name, the only field matching logic looks at
    pub name: String,
    /// Numeric quantity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Unit for `quantity`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Free-text quantity such as "适量"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_quantity: Option<String>,
    /// Preparation notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Ingredient {
    /// Ingredient with only a name
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// One numbered cooking step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// 1-based step number
    pub step: u32,
    /// Instruction text
    pub description: String,
}

/// A normalized corpus record
///
/// `name` is the join key used by every lookup, plan, and grocery list. Two
/// records may share a name; every name-based lookup resolves to the first one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Record id
    pub id: String,
    /// Dish name
    pub name: String,
    /// Short description
    #[serde(default)]
    pub description: String,
    /// Path of the source document in the upstream repository
    #[serde(default)]
    pub source_path: String,
    /// Image path in the upstream repository
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    /// Free-form category label
    pub category: String,
    /// Difficulty label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    /// Tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Number of servings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    /// Ingredients in recipe order
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Steps in recipe order
    #[serde(default)]
    pub steps: Vec<Step>,
    /// Preparation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time_minutes: Option<u32>,
    /// Cooking time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time_minutes: Option<u32>,
    /// Total time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_time_minutes: Option<u32>,
    /// Extra notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
}

impl Recipe {
    /// Minimal record with a name, category, and ingredient names
    #[must_use]
    pub fn new(name: impl Into<String>, category: impl Into<String>, ingredients: &[&str]) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            category: category.into(),
            ingredients: ingredients.iter().map(|n| Ingredient::named(*n)).collect(),
            ..Self::default()
        }
    }

    /// Ingredient names in recipe order
    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|i| i.name.as_str())
    }

    /// Whether any ingredient name contains `needle` (case-sensitive)
    #[must_use]
    pub fn has_ingredient_containing(&self, needle: &str) -> bool {
        self.ingredient_names().any(|name| name.contains(needle))
    }
}

/// Recipe projection returned by category lookups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleRecipe {
    /// Record id
    pub id: String,
    /// Dish name
    pub name: String,
    /// Short description
    pub description: String,
    /// Ingredient names only
    pub ingredients: Vec<String>,
}

impl From<&Recipe> for SimpleRecipe {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            ingredients: recipe.ingredient_names().map(str::to_owned).collect(),
        }
    }
}

/// Recipe projection returned by the full listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameOnlyRecipe {
    /// Dish name
    pub name: String,
    /// Short description
    pub description: String,
}

impl From<&Recipe> for NameOnlyRecipe {
    fn from(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            description: recipe.description.clone(),
        }
    }
}

/// Sorted, distinct, non-empty category labels of `recipes`
#[must_use]
pub fn all_categories(recipes: &[Recipe]) -> Vec<String> {
    recipes
        .iter()
        .filter(|r| !r.category.is_empty())
        .map(|r| r.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
