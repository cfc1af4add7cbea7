// ABOUTME: Typed, validated argument structs for the recipe and meal-planning tools
// ABOUTME: Converts serde and validator failures into the shared validation-failure payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::debug;
use validator::{Validate, ValidationErrors};

use howtocook_core::constants::planning::{MAX_PEOPLE, MIN_PEOPLE};

use super::result::ToolResult;

/// Error label used for every argument validation failure
pub const VALIDATION_FAILED: &str = "参数验证失败";

/// `getRecipesByCategory` arguments
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryParams {
    /// Exact category name
    #[serde(default)]
    #[validate(length(min = 1, message = "分类不能为空"))]
    pub category: String,
}

/// `getRecipeById` arguments
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecipeNameParams {
    /// Full or partial recipe name
    #[serde(default)]
    #[validate(length(min = 1, message = "菜谱名称不能为空"))]
    pub recipe_name: String,
}

/// `recommendMeals` arguments
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecommendMealsParams {
    /// Allergens to exclude
    #[serde(default)]
    pub allergies: Vec<String>,
    /// Ingredients to avoid
    #[serde(default)]
    pub avoid_items: Vec<String>,
    /// Party size
    #[validate(
        required(message = "用餐人数不能为空"),
        range(min = 1, max = 10, message = "用餐人数必须在 1 到 10 之间")
    )]
    pub people_count: Option<i64>,
}

impl RecommendMealsParams {
    /// Validated party size
    #[must_use]
    pub fn people(&self) -> u32 {
        checked_people(self.people_count)
    }
}

/// `whatToEat` arguments
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WhatToEatParams {
    /// Party size
    #[validate(
        required(message = "用餐人数不能为空"),
        range(min = 1, max = 10, message = "用餐人数必须在 1 到 10 之间")
    )]
    pub people_count: Option<i64>,
}

impl WhatToEatParams {
    /// Validated party size
    #[must_use]
    pub fn people(&self) -> u32 {
        checked_people(self.people_count)
    }
}

fn checked_people(people_count: Option<i64>) -> u32 {
    people_count
        .and_then(|count| u32::try_from(count).ok())
        .map_or(MIN_PEOPLE, |count| count.clamp(MIN_PEOPLE, MAX_PEOPLE))
}

/// Per-field argument failures, rendered as `"<field>: <message>"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    /// One entry per failed rule
    pub details: Vec<String>,
}

impl ValidationFailure {
    /// Failure payload returned to the client
    #[must_use]
    pub fn into_result(self) -> ToolResult {
        ToolResult::error(json!({
            "success": false,
            "error": VALIDATION_FAILED,
            "details": self.details,
        }))
    }
}

impl From<ValidationErrors> for ValidationFailure {
    fn from(validation: ValidationErrors) -> Self {
        let mut fields: Vec<_> = validation.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let details = fields
            .into_iter()
            .flat_map(|(field, errors)| {
                let name = camel_case(&field);
                errors.iter().map(move |error| {
                    let message = error
                        .message
                        .as_ref()
                        .map_or_else(|| error.code.to_string(), ToString::to_string);
                    format!("{name}: {message}")
                })
            })
            .collect();

        Self { details }
    }
}

/// Deserialize and validate tool arguments
///
/// A missing or `null` arguments object is treated as `{}`.
///
/// # Errors
///
/// Returns a `ValidationFailure` for type mismatches and failed rules
pub fn parse_params<T>(args: Value) -> Result<T, ValidationFailure>
where
    T: DeserializeOwned + Validate,
{
    let args = if args.is_null() { json!({}) } else { args };

    let params: T = serde_json::from_value(args.clone()).map_err(|e| {
        debug!(error = %e, "Tool arguments failed to deserialize");
        ValidationFailure {
            details: type_errors::<T>(&args, &e),
        }
    })?;

    params.validate()?;
    Ok(params)
}

/// Re-deserialize each field on its own to name the ones with the wrong type
///
/// Every parameter field has a default, so a single-field object only fails
/// on that field. Non-object arguments are reported as a whole.
fn type_errors<T: DeserializeOwned>(args: &Value, whole: &serde_json::Error) -> Vec<String> {
    let Some(fields) = args.as_object() else {
        return vec![format!("arguments: {whole}")];
    };

    let details: Vec<String> = fields
        .iter()
        .filter_map(|(field, value)| {
            let mut single = Map::new();
            single.insert(field.clone(), value.clone());
            serde_json::from_value::<T>(Value::Object(single))
                .err()
                .map(|e| format!("{field}: {e}"))
        })
        .collect();

    if details.is_empty() {
        vec![format!("arguments: {whole}")]
    } else {
        details
    }
}

/// `people_count` -> `peopleCount`
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_field_names() {
        assert_eq!(camel_case("people_count"), "peopleCount");
        assert_eq!(camel_case("category"), "category");
        assert_eq!(camel_case("recipe_name"), "recipeName");
    }

    fn failure_details<T: DeserializeOwned + Validate>(args: Value) -> Vec<String> {
        parse_params::<T>(args).err().map(|f| f.details).unwrap_or_default()
    }

    #[test]
    fn test_missing_people_count_is_reported() {
        assert_eq!(
            failure_details::<WhatToEatParams>(json!({})),
            vec!["peopleCount: 用餐人数不能为空"]
        );
    }

    #[test]
    fn test_out_of_range_people_count_is_reported() {
        assert_eq!(
            failure_details::<WhatToEatParams>(json!({"peopleCount": 11})),
            vec!["peopleCount: 用餐人数必须在 1 到 10 之间"]
        );
    }

    #[test]
    fn test_fractional_people_count_is_rejected() {
        let details = failure_details::<WhatToEatParams>(json!({"peopleCount": 2.5}));
        assert_eq!(details.len(), 1);
        assert!(details[0].starts_with("peopleCount: "));
    }

    #[test]
    fn test_type_mismatches_name_each_field() {
        let details = failure_details::<RecommendMealsParams>(json!({
            "allergies": "花生",
            "avoidItems": ["香菜"],
            "peopleCount": "4",
        }));
        assert_eq!(details.len(), 2);
        assert!(details[0].starts_with("allergies: invalid type: string"));
        assert!(details[1].starts_with("peopleCount: invalid type: string"));

        let details = failure_details::<CategoryParams>(json!({"category": 5}));
        assert_eq!(details.len(), 1);
        assert!(details[0].starts_with("category: invalid type: integer"));
    }

    #[test]
    fn test_non_object_arguments_are_reported_whole() {
        let details = failure_details::<CategoryParams>(json!(["素菜"]));
        assert_eq!(details.len(), 1);
        assert!(details[0].starts_with("arguments: "));
    }

    #[test]
    fn test_list_arguments_default_to_empty() {
        let params = parse_params::<RecommendMealsParams>(json!({"peopleCount": 3}));
        assert!(params.is_ok_and(|p| {
            p.allergies.is_empty() && p.avoid_items.is_empty() && p.people() == 3
        }));
    }

    #[test]
    fn test_empty_category_is_rejected() {
        assert_eq!(
            failure_details::<CategoryParams>(Value::Null),
            vec!["category: 分类不能为空"]
        );
    }
}
