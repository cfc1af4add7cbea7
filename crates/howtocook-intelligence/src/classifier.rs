// ABOUTME: Ingredient classifier mapping names to fresh, spice, pantry, or other
// ABOUTME: Case-insensitive substring matching over an ordered keyword rule set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

use howtocook_core::models::ShoppingPlan;
use serde::{Deserialize, Serialize};

use crate::keywords::{
    KeywordRule, KeywordRuleSet, FRESH_KEYWORDS, PANTRY_KEYWORDS, SPICE_KEYWORDS,
};

/// Shopping section of an ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    /// Produce, meat, seafood, eggs, dairy
    Fresh,
    /// Seasonings and condiments
    Spice,
    /// Dry goods and staples
    Pantry,
    /// No rule matched
    Other,
}

impl IngredientCategory {
    /// Lowercase label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fresh => "fresh",
            Self::Spice => "spice",
            Self::Pantry => "pantry",
            Self::Other => "other",
        }
    }
}

/// Deterministic keyword classifier; priority is fresh, then spice, then pantry
#[derive(Debug, Clone)]
pub struct IngredientClassifier {
    rules: KeywordRuleSet<IngredientCategory>,
}

impl Default for IngredientClassifier {
    fn default() -> Self {
        Self::with_rules(KeywordRuleSet::new(
            vec![
                KeywordRule::new(IngredientCategory::Fresh, FRESH_KEYWORDS),
                KeywordRule::new(IngredientCategory::Spice, SPICE_KEYWORDS),
                KeywordRule::new(IngredientCategory::Pantry, PANTRY_KEYWORDS),
            ],
            IngredientCategory::Other,
        ))
    }
}

impl IngredientClassifier {
    /// Classifier over a custom rule set
    #[must_use]
    pub const fn with_rules(rules: KeywordRuleSet<IngredientCategory>) -> Self {
        Self { rules }
    }

    /// Section for one ingredient name
    #[must_use]
    pub fn classify(&self, ingredient_name: &str) -> IngredientCategory {
        self.rules.evaluate(&ingredient_name.to_lowercase())
    }

    /// Partition names into shopping sections, preserving input order in each
    #[must_use]
    pub fn partition(&self, names: &[String]) -> ShoppingPlan {
        let mut plan = ShoppingPlan::default();
        for name in names {
            let section = match self.classify(name) {
                IngredientCategory::Fresh => &mut plan.fresh,
                IngredientCategory::Spice => &mut plan.spices,
                IngredientCategory::Pantry => &mut plan.pantry,
                IngredientCategory::Other => &mut plan.others,
            };
            section.push(name.clone());
        }
        plan
    }
}
