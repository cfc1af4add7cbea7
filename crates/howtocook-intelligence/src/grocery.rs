// ABOUTME: Grocery aggregation from selected recipes into a classified shopping list
// ABOUTME: Deduplicates lowercased ingredient names in first-seen order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

use howtocook_core::models::{GroceryList, Recipe};
use std::collections::HashSet;

use crate::classifier::IngredientClassifier;

/// Builds a [`GroceryList`] from the recipes a plan references
#[derive(Debug, Clone, Default)]
pub struct GroceryAggregator {
    classifier: IngredientClassifier,
}

impl GroceryAggregator {
    /// Aggregator using a specific classifier
    #[must_use]
    pub const fn new(classifier: IngredientClassifier) -> Self {
        Self { classifier }
    }

    /// Deduplicate every ingredient of `recipes`, then classify each name
    ///
    /// Sections may be empty; the partition is total and disjoint.
    #[must_use]
    pub fn aggregate(&self, recipes: &[&Recipe]) -> GroceryList {
        let ingredients = dedupe_ingredient_names(recipes);
        let shopping_plan = self.classifier.partition(&ingredients);
        GroceryList {
            ingredients,
            shopping_plan,
        }
    }
}

/// Lowercased ingredient names across `recipes`, first occurrence kept
#[must_use]
pub fn dedupe_ingredient_names(recipes: &[&Recipe]) -> Vec<String> {
    let mut seen = HashSet::new();
    recipes
        .iter()
        .flat_map(|recipe| recipe.ingredient_names())
        .map(str::to_lowercase)
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

/// Resolve dish names to recipes in `pool`, first match by name wins
///
/// Repeated names resolve repeatedly; unknown names are skipped.
#[must_use]
pub fn resolve_dishes<'a, S: AsRef<str>>(names: &[S], pool: &[&'a Recipe]) -> Vec<&'a Recipe> {
    names
        .iter()
        .filter_map(|name| {
            pool.iter()
                .find(|recipe| recipe.name == name.as_ref())
                .copied()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedupe_is_case_insensitive() {
        let a = Recipe::new("A", "荤菜", &["Egg", "猪肉"]);
        let b = Recipe::new("B", "荤菜", &["egg", "盐"]);
        let names = dedupe_ingredient_names(&[&a, &b]);
        assert_eq!(names, vec!["egg", "猪肉", "盐"]);
    }
}
