// ABOUTME: Category-balanced selection of distinct dish names for one meal slot
// ABOUTME: Spreads the target across preferred categories, then falls back to the safe pool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

use howtocook_core::models::Recipe;
use std::collections::{HashMap, HashSet};

use crate::random::{pick_n, RandomSource};

/// Safe recipes grouped by category label, corpus order kept within each group
#[derive(Debug, Clone, Default)]
pub struct RecipeGroups<'a> {
    by_category: HashMap<&'a str, Vec<&'a Recipe>>,
}

impl<'a> RecipeGroups<'a> {
    /// Group `recipes` by their category
    #[must_use]
    pub fn group_by_category(recipes: &[&'a Recipe]) -> Self {
        let mut by_category: HashMap<&'a str, Vec<&'a Recipe>> = HashMap::new();
        for recipe in recipes {
            by_category
                .entry(recipe.category.as_str())
                .or_default()
                .push(recipe);
        }
        Self { by_category }
    }

    /// Recipes in `category`, empty when the category is absent
    #[must_use]
    pub fn get(&self, category: &str) -> &[&'a Recipe] {
        self.by_category
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of distinct categories
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.by_category.len()
    }
}

/// Picks dishes for a slot from grouped recipes with a fallback pool
pub struct MealSelector<'s, 'a> {
    groups: &'s RecipeGroups<'a>,
    fallback: &'s [&'a Recipe],
    rng: &'s dyn RandomSource,
}

impl<'s, 'a> MealSelector<'s, 'a> {
    /// Selector over `groups`, filling shortfalls from `fallback`
    #[must_use]
    pub fn new(
        groups: &'s RecipeGroups<'a>,
        fallback: &'s [&'a Recipe],
        rng: &'s dyn RandomSource,
    ) -> Self {
        Self {
            groups,
            fallback,
            rng,
        }
    }

    /// Up to `target` distinct dish names
    ///
    /// Each preferred category contributes at most `ceil(target / len)` dishes and
    /// never more than what is still needed. Remaining demand is filled from the
    /// fallback pool. The result is shorter than `target` only when the whole
    /// pool holds fewer distinct names.
    #[must_use]
    pub fn select(&self, preferred: &[&str], target: usize) -> Vec<String> {
        let mut meals: Vec<String> = Vec::with_capacity(target);
        let mut used: HashSet<&'a str> = HashSet::new();

        if !preferred.is_empty() {
            let per_category = target.div_ceil(preferred.len());
            for category in preferred {
                if meals.len() >= target {
                    break;
                }
                let available = unused_by_name(self.groups.get(category), &used);
                if available.is_empty() {
                    continue;
                }
                let needed = per_category.min(target - meals.len());
                self.take(&available, needed, &mut meals, &mut used);
            }
        }

        if meals.len() < target {
            let remaining = unused_by_name(self.fallback, &used);
            let needed = target - meals.len();
            self.take(&remaining, needed, &mut meals, &mut used);
        }

        meals
    }

    fn take(
        &self,
        candidates: &[&'a Recipe],
        needed: usize,
        meals: &mut Vec<String>,
        used: &mut HashSet<&'a str>,
    ) {
        for recipe in pick_n(self.rng, candidates, needed) {
            used.insert(recipe.name.as_str());
            meals.push(recipe.name.clone());
        }
    }
}

/// Candidates whose name is not in `used`, one record per name (first kept)
pub(crate) fn unused_by_name<'a>(recipes: &[&'a Recipe], used: &HashSet<&str>) -> Vec<&'a Recipe> {
    let mut seen: HashSet<&'a str> = HashSet::new();
    let mut unused = Vec::new();
    for &recipe in recipes {
        let name = recipe.name.as_str();
        if !used.contains(name) && seen.insert(name) {
            unused.push(recipe);
        }
    }
    unused
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceRandom;

    fn recipes(names: &[(&str, &str)]) -> Vec<Recipe> {
        names
            .iter()
            .map(|(name, category)| Recipe::new(*name, *category, &[]))
            .collect()
    }

    #[test]
    fn test_spreads_target_and_fills_from_fallback() {
        let corpus = recipes(&[
            ("红烧肉", "荤菜"),
            ("宫保鸡丁", "荤菜"),
            ("回锅肉", "荤菜"),
            ("清炒白菜", "素菜"),
            ("蛋炒饭", "主食"),
        ]);
        let pool: Vec<&Recipe> = corpus.iter().collect();
        let groups = RecipeGroups::group_by_category(&pool);
        let rng = SequenceRandom::zeros();

        let meals = MealSelector::new(&groups, &pool, &rng).select(&["荤菜", "素菜"], 4);

        assert_eq!(meals.len(), 4);
        let meat = meals
            .iter()
            .filter(|name| ["红烧肉", "宫保鸡丁", "回锅肉"].contains(&name.as_str()))
            .count();
        assert!(meat >= 2);
        assert!(meals.contains(&"清炒白菜".to_owned()));
        let distinct: HashSet<&String> = meals.iter().collect();
        assert_eq!(distinct.len(), 4);
    }

    #[test]
    fn test_short_pool_yields_fewer_dishes() {
        let corpus = recipes(&[("豆浆", "早餐"), ("豆浆", "早餐"), ("油条", "早餐")]);
        let pool: Vec<&Recipe> = corpus.iter().collect();
        let groups = RecipeGroups::group_by_category(&pool);
        let rng = SequenceRandom::new(vec![1, 0, 2]);

        let meals = MealSelector::new(&groups, &pool, &rng).select(&["早餐"], 3);

        assert_eq!(meals.len(), 2);
        assert_eq!(groups.category_count(), 1);
    }

    #[test]
    fn test_missing_preferred_category_uses_fallback() {
        let corpus = recipes(&[("清蒸鲈鱼", "水产")]);
        let pool: Vec<&Recipe> = corpus.iter().collect();
        let groups = RecipeGroups::group_by_category(&pool);
        let rng = SequenceRandom::zeros();

        let meals = MealSelector::new(&groups, &pool, &rng).select(&["早餐"], 1);

        assert_eq!(meals, vec!["清蒸鲈鱼".to_owned()]);
        assert!(groups.get("早餐").is_empty());
    }
}
