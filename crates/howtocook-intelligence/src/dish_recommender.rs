// ABOUTME: Same-day dish recommendation by party size using ingredient heuristics
// ABOUTME: Picks meat, seafood, and vegetable dishes from the full corpus, then backfills
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

//! # Ad-hoc Dish Recommender
//!
//! Selection order:
//! 1. one dish per meat type, meat types visited in random order
//! 2. remaining meat demand from meat-category or meat-ingredient dishes
//! 3. seafood dishes for large parties
//! 4. vegetable dishes
//! 5. any unused dish when the categories above ran dry
//!
//! Step 5 can break the meat/vegetable balance; that is accepted.

use howtocook_core::constants::categories::{MEAT, SEAFOOD, VEGETABLE};
use howtocook_core::constants::planning::FISH_DISH_MIN_PEOPLE;
use howtocook_core::models::{DishRecommendation, Recipe};
use std::collections::HashSet;
use tracing::debug;

use crate::keywords::{MEAT_KEYWORDS, SEAFOOD_KEYWORDS, VEGETABLE_KEYWORDS};
use crate::meal_selector::unused_by_name;
use crate::random::{choose, pick_n, shuffle, RandomSource};

/// Target dish counts for a party
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DishCounts {
    /// Meat dishes, `ceil((p + 1) / 2)`
    pub meat: usize,
    /// Vegetable dishes, `floor((p + 1) / 2)`
    pub vegetable: usize,
    /// Seafood dishes, one from eight people up
    pub fish: usize,
}

impl DishCounts {
    /// Counts for `people_count`
    #[must_use]
    pub fn for_party(people_count: u32) -> Self {
        let p = people_count as usize;
        Self {
            meat: (p + 1).div_ceil(2),
            vegetable: (p + 1) / 2,
            fish: usize::from(people_count >= FISH_DISH_MIN_PEOPLE),
        }
    }

    /// Sum of all targets
    #[must_use]
    pub const fn total(self) -> usize {
        self.meat + self.vegetable + self.fish
    }
}

/// Recommends a flat dish list for one meal
pub struct DishRecommender<'r> {
    rng: &'r dyn RandomSource,
    meat_keywords: Vec<String>,
    seafood_keywords: Vec<String>,
    vegetable_keywords: Vec<String>,
}

impl<'r> DishRecommender<'r> {
    /// Recommender with the built-in keyword tables
    #[must_use]
    pub fn new(rng: &'r dyn RandomSource) -> Self {
        Self {
            rng,
            meat_keywords: to_owned_list(MEAT_KEYWORDS),
            seafood_keywords: to_owned_list(SEAFOOD_KEYWORDS),
            vegetable_keywords: to_owned_list(VEGETABLE_KEYWORDS),
        }
    }

    /// Replace the vegetable keyword table
    #[must_use]
    pub fn with_vegetable_keywords(mut self, keywords: &[&str]) -> Self {
        self.vegetable_keywords = to_owned_list(keywords);
        self
    }

    /// Replace the meat type table
    #[must_use]
    pub fn with_meat_keywords(mut self, keywords: &[&str]) -> Self {
        self.meat_keywords = to_owned_list(keywords);
        self
    }

    /// Recommend dishes for `people_count` from the whole corpus
    #[must_use]
    pub fn recommend(&self, recipes: &[Recipe], people_count: u32) -> DishRecommendation {
        let counts = DishCounts::for_party(people_count);
        let pool: Vec<&Recipe> = recipes.iter().collect();
        let mut dishes: Vec<String> = Vec::with_capacity(counts.total());
        let mut used: HashSet<&str> = HashSet::new();

        let mut meat_added = 0;
        for meat in shuffle(self.rng, &self.meat_keywords) {
            if meat_added >= counts.meat {
                break;
            }
            let candidates = unused_matching(&pool, &used, |r| r.has_ingredient_containing(&meat));
            if let Some(&recipe) = choose(self.rng, &candidates) {
                used.insert(recipe.name.as_str());
                dishes.push(recipe.name.clone());
                meat_added += 1;
            }
        }

        if meat_added < counts.meat {
            let candidates = unused_matching(&pool, &used, |r| r.category == MEAT || self.has_meat(r));
            for recipe in pick_n(self.rng, &candidates, counts.meat - meat_added) {
                used.insert(recipe.name.as_str());
                dishes.push(recipe.name.clone());
            }
        }

        if counts.fish > 0 {
            let candidates =
                unused_matching(&pool, &used, |r| r.category == SEAFOOD || self.has_seafood(r));
            for recipe in pick_n(self.rng, &candidates, counts.fish) {
                used.insert(recipe.name.as_str());
                dishes.push(recipe.name.clone());
            }
        }

        let candidates =
            unused_matching(&pool, &used, |r| r.category == VEGETABLE || self.has_vegetable(r));
        for recipe in pick_n(self.rng, &candidates, counts.vegetable) {
            used.insert(recipe.name.as_str());
            dishes.push(recipe.name.clone());
        }

        if dishes.len() < counts.total() {
            let remaining = unused_by_name(&pool, &used);
            let needed = counts.total() - dishes.len();
            dishes.extend(
                pick_n(self.rng, &remaining, needed)
                    .into_iter()
                    .map(|r| r.name.clone()),
            );
        }

        debug!(
            people_count,
            requested = counts.total(),
            selected = dishes.len(),
            "Recommended dishes"
        );

        let message = recommendation_message(self.rng, people_count, dishes.len());
        DishRecommendation {
            people_count,
            vegetable_dish_count: counts.vegetable,
            meat_dish_count: counts.meat,
            fish_dish_count: (counts.fish > 0).then_some(counts.fish),
            dishes,
            message,
        }
    }

    fn has_meat(&self, recipe: &Recipe) -> bool {
        self.meat_keywords
            .iter()
            .any(|k| recipe.has_ingredient_containing(k))
    }

    fn has_seafood(&self, recipe: &Recipe) -> bool {
        self.seafood_keywords
            .iter()
            .any(|k| recipe.has_ingredient_containing(k))
    }

    fn has_vegetable(&self, recipe: &Recipe) -> bool {
        self.vegetable_keywords
            .iter()
            .any(|k| recipe.has_ingredient_containing(k))
    }
}

/// Friendly summary line, template chosen uniformly at random
#[must_use]
pub fn recommendation_message(rng: &dyn RandomSource, people_count: u32, dish_count: usize) -> String {
    let p = people_count;
    let n = dish_count;
    match rng.next_index(5) {
        0 => format!("{p}人聚餐，{n}道菜刚刚好！荤素搭配，营养均衡"),
        1 => format!("为{p}位朋友精心搭配了{n}道美味佳肴"),
        2 => format!("{n}道菜品组合，满足{p}人的味蕾需求"),
        3 => format!("贴心为{p}人准备的{n}道菜，有荤有素有营养"),
        _ => format!("{p}人用餐，{n}道菜的完美搭配方案"),
    }
}

fn unused_matching<'a>(
    pool: &[&'a Recipe],
    used: &HashSet<&str>,
    predicate: impl Fn(&Recipe) -> bool,
) -> Vec<&'a Recipe> {
    let matching: Vec<&'a Recipe> = pool.iter().copied().filter(|r| predicate(*r)).collect();
    unused_by_name(&matching, used)
}

fn to_owned_list(keywords: &[&str]) -> Vec<String> {
    keywords.iter().map(|k| (*k).to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceRandom;

    #[test]
    fn test_counts_for_party() {
        assert_eq!(
            DishCounts::for_party(1),
            DishCounts { meat: 1, vegetable: 1, fish: 0 }
        );
        assert_eq!(
            DishCounts::for_party(8),
            DishCounts { meat: 5, vegetable: 4, fish: 1 }
        );
        assert_eq!(
            DishCounts::for_party(10),
            DishCounts { meat: 6, vegetable: 5, fish: 1 }
        );
    }

    #[test]
    fn test_one_dish_per_meat_type_then_vegetables() {
        let corpus = vec![
            Recipe::new("红烧肉", "荤菜", &["猪肉", "冰糖"]),
            Recipe::new("宫保鸡丁", "荤菜", &["鸡肉", "花生"]),
            Recipe::new("清炒白菜", "素菜", &["白菜"]),
            Recipe::new("地三鲜", "素菜", &["茄子", "土豆"]),
            Recipe::new("炒青菜", "素菜", &["青菜"]),
        ];
        let rng = SequenceRandom::zeros();

        let picked = DishRecommender::new(&rng).recommend(&corpus, 3);

        assert_eq!(picked.dishes.len(), 4);
        assert!(picked.dishes[..2].contains(&"红烧肉".to_owned()));
        assert!(picked.dishes[..2].contains(&"宫保鸡丁".to_owned()));
        assert_eq!(picked.meat_dish_count, 2);
        assert_eq!(picked.vegetable_dish_count, 2);
        assert!(picked.fish_dish_count.is_none());
    }

    #[test]
    fn test_backfills_when_categories_run_dry() {
        let corpus = vec![
            Recipe::new("清炒白菜", "素菜", &["白菜"]),
            Recipe::new("地三鲜", "素菜", &["茄子"]),
            Recipe::new("炒青菜", "素菜", &["青菜"]),
        ];
        let rng = SequenceRandom::new(vec![2, 1, 0]);

        let picked = DishRecommender::new(&rng).recommend(&corpus, 2);

        assert_eq!(picked.dishes.len(), 3);
        let distinct: HashSet<&String> = picked.dishes.iter().collect();
        assert_eq!(distinct.len(), 3);
    }

    #[test]
    fn test_swapped_keyword_tables_change_selection() {
        let corpus = vec![
            Recipe::new("红烧肉", "其他", &["猪肉"]),
            Recipe::new("红焖兔肉", "其他", &["兔肉"]),
            Recipe::new("凉拌蕨根粉", "其他", &["蕨根粉"]),
        ];
        let rng = SequenceRandom::zeros();

        let default_pick = DishRecommender::new(&rng).recommend(&corpus, 1);
        assert_eq!(default_pick.dishes[0], "红烧肉");

        let swapped = DishRecommender::new(&rng)
            .with_meat_keywords(&["兔肉"])
            .with_vegetable_keywords(&["蕨根"])
            .recommend(&corpus, 1);
        assert_eq!(swapped.dishes, vec!["红焖兔肉".to_owned(), "凉拌蕨根粉".to_owned()]);
    }

    #[test]
    fn test_message_mentions_party_and_dish_count() {
        let rng = SequenceRandom::new(vec![1]);
        assert_eq!(recommendation_message(&rng, 4, 5), "为4位朋友精心搭配了5道美味佳肴");
    }
}
