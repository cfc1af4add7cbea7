// ABOUTME: Keyword tables and ordered first-match rule sets for ingredient heuristics
// ABOUTME: Used by the ingredient classifier and the dish recommender's dish typing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

//! Keyword heuristics
//!
//! Matching is plain substring containment, not tokenization. A name that
//! contains keywords from several rules resolves to the earliest rule, so a
//! spice word embedded in a longer produce name lands in the produce bucket.
//! This is a coarse heuristic and is kept as such.

/// Produce, meat, seafood, eggs, and dairy
pub const FRESH_KEYWORDS: &[&str] = &[
    "肉", "鱼", "虾", "蟹", "菜", "葱", "蒜", "姜", "豆腐", "蛋", "奶", "菇", "笋", "瓜", "茄",
    "椒", "萝卜", "白菜", "菠菜", "韭菜", "芹菜", "土豆", "番茄", "黄瓜", "冬瓜", "南瓜", "丝瓜",
    "苦瓜", "青椒", "红椒", "洋葱", "胡萝卜", "莲藕", "山药", "芋头", "红薯", "玉米", "豌豆",
    "四季豆", "茄子", "西兰花", "花菜", "包菜", "大白菜", "小白菜", "油菜", "生菜", "空心菜",
    "苋菜", "木耳", "银耳", "香菇", "金针菇", "杏鲍菇", "平菇", "茶树菇", "海带", "紫菜", "豆芽",
    "韭黄", "蒜苗", "蒜薹", "芦笋", "竹笋", "莴笋", "冬笋", "春笋",
];

/// Seasonings, sauces, and cooking wines
pub const SPICE_KEYWORDS: &[&str] = &[
    "盐", "糖", "醋", "酱油", "料酒", "胡椒", "花椒", "八角", "桂皮", "香叶", "丁香", "草果",
    "白胡椒", "黑胡椒", "孜然", "五香粉", "十三香", "鸡精", "味精", "蚝油", "生抽", "老抽", "香醋",
    "米醋", "白醋", "黄酒", "白酒", "啤酒", "红酒", "香油", "芝麻油", "辣椒油", "花椒油",
    "蒜蓉辣椒酱", "豆瓣酱", "甜面酱", "黄豆酱", "海鲜酱", "沙茶酱", "番茄酱", "辣椒酱",
    "韩式辣椒酱", "咖喱粉", "咖喱块", "芥末", "山葵", "柠檬汁", "青柠汁", "蜂蜜", "冰糖", "红糖",
    "白糖", "砂糖", "糖浆", "枫糖浆",
];

/// Grains, flours, oils, dried beans, nuts, and shelf-stable dairy
pub const PANTRY_KEYWORDS: &[&str] = &[
    "米", "面", "粉", "油", "豆", "干", "罐头", "酱", "醋", "糖", "盐", "淀粉", "面粉", "玉米淀粉",
    "土豆淀粉", "红薯淀粉", "绿豆淀粉", "小麦粉", "高筋面粉", "低筋面粉", "中筋面粉", "自发粉",
    "泡打粉", "酵母", "小苏打", "塔塔粉", "吉利丁", "琼脂", "明膠", "椰浆", "椰奶", "淡奶油", "黄油",
    "奶油", "芝士", "奶酪", "酸奶", "牛奶", "豆浆", "杏仁奶", "燕麦奶", "大米", "小米", "黑米",
    "糯米", "薏米", "红豆", "绿豆", "黑豆", "黄豆", "白芸豆", "红芸豆", "蚕豆", "豌豆", "扁豆",
    "花生", "核桃", "杏仁", "腰果", "开心果", "松子", "瓜子", "芝麻", "黑芝麻", "白芝麻", "花生油",
    "菜籽油", "玉米油", "大豆油", "葵花籽油", "橄榄油", "芝麻油", "花椒油", "辣椒油", "香油",
    "猪油", "牛油", "鸡油", "鸭油",
];

/// Ingredients that mark a vegetable dish
pub const VEGETABLE_KEYWORDS: &[&str] = &[
    "菜", "菇", "瓜", "茄", "椒", "萝卜", "白菜", "菠菜", "韭菜", "芹菜", "土豆", "番茄", "黄瓜",
    "冬瓜", "南瓜", "丝瓜", "苦瓜", "青椒", "红椒", "洋葱", "胡萝卜", "莲藕", "山药", "芋头", "红薯",
    "玉米", "豌豆", "四季豆", "西兰花", "花菜", "包菜", "大白菜", "小白菜", "油菜", "生菜",
    "空心菜", "苋菜", "木耳", "银耳", "香菇", "金针菇", "杏鲍菇", "平菇", "茶树菇", "海带", "紫菜",
    "豆芽", "韭黄", "蒜苗", "蒜薹", "芦笋", "竹笋", "莴笋", "冬笋", "春笋", "豆腐",
];

/// Meat types the recommender rotates through, one dish each
pub const MEAT_KEYWORDS: &[&str] = &["猪肉", "鸡肉", "牛肉", "羊肉", "鸭肉", "鱼肉"];

/// Ingredients that mark a seafood dish
pub const SEAFOOD_KEYWORDS: &[&str] = &["鱼", "虾", "蟹", "贝"];

/// One rule: any keyword contained in the text yields `outcome`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule<T> {
    /// Value produced when the rule matches
    pub outcome: T,
    /// Substrings tested against the input
    pub keywords: Vec<String>,
}

impl<T> KeywordRule<T> {
    /// Build a rule from a keyword table
    #[must_use]
    pub fn new(outcome: T, keywords: &[&str]) -> Self {
        Self {
            outcome,
            keywords: keywords.iter().map(|k| (*k).to_owned()).collect(),
        }
    }

    /// Whether `text` contains any keyword of this rule
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| text.contains(k.as_str()))
    }

    /// Add keywords to this rule
    #[must_use]
    pub fn extended(mut self, extra: &[&str]) -> Self {
        self.keywords.extend(extra.iter().map(|k| (*k).to_owned()));
        self
    }
}

/// Ordered rules evaluated first-match-wins, with a fallback outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRuleSet<T> {
    rules: Vec<KeywordRule<T>>,
    fallback: T,
}

impl<T: Copy> KeywordRuleSet<T> {
    /// Rule set yielding `fallback` when nothing matches
    #[must_use]
    pub const fn new(rules: Vec<KeywordRule<T>>, fallback: T) -> Self {
        Self { rules, fallback }
    }

    /// Append a rule with the lowest priority
    #[must_use]
    pub fn with_rule(mut self, rule: KeywordRule<T>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Outcome of the first matching rule, else the fallback
    #[must_use]
    pub fn evaluate(&self, text: &str) -> T {
        self.rules
            .iter()
            .find(|rule| rule.matches(text))
            .map_or(self.fallback, |rule| rule.outcome)
    }

    /// Whether any rule matches
    #[must_use]
    pub fn any_match(&self, text: &str) -> bool {
        self.rules.iter().any(|rule| rule.matches(text))
    }

    /// Rules in priority order
    #[must_use]
    pub fn rules(&self) -> &[KeywordRule<T>] {
        &self.rules
    }
}
