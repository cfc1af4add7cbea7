// ABOUTME: Converts loosely-typed upstream recipe records into Recipe values
// ABOUTME: Applies field defaults, accepts bare-string ingredients and steps, generates ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

use howtocook_intelligence::RandomSource;
use serde_json::{Map, Value};

use crate::constants::cache::GENERATED_ID_LEN;
use crate::constants::categories::DEFAULT_CATEGORY;
use crate::errors::{AppError, AppResult};
use crate::models::{Ingredient, Recipe, Step};

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Normalize a corpus document
///
/// # Errors
///
/// Returns `AppError` if the document is not a JSON array
pub fn normalize_recipes(document: &Value, rng: &dyn RandomSource) -> AppResult<Vec<Recipe>> {
    let records = document
        .as_array()
        .ok_or_else(|| AppError::invalid_input("Invalid data format: expected array"))?;

    Ok(records
        .iter()
        .map(|record| normalize_record(record, rng))
        .collect())
}

/// Normalize one record; non-object records become an empty recipe
#[must_use]
pub fn normalize_record(record: &Value, rng: &dyn RandomSource) -> Recipe {
    let empty = Map::new();
    let fields = record.as_object().unwrap_or(&empty);

    let name = text(fields, "name").unwrap_or_default();
    let id = text(fields, "id")
        .or_else(|| Some(name.clone()).filter(|n| !n.is_empty()))
        .unwrap_or_else(|| generate_id(rng));

    Recipe {
        id,
        name,
        description: text(fields, "description").unwrap_or_default(),
        source_path: text(fields, "source_path").unwrap_or_default(),
        image_path: text(fields, "image_path"),
        category: text(fields, "category").unwrap_or_else(|| DEFAULT_CATEGORY.to_owned()),
        difficulty: text(fields, "difficulty"),
        tags: string_list(fields.get("tags")),
        servings: count(fields, "servings"),
        ingredients: list(fields, "ingredients")
            .iter()
            .map(normalize_ingredient)
            .collect(),
        steps: list(fields, "steps")
            .iter()
            .enumerate()
            .map(|(index, step)| normalize_step(index, step))
            .collect(),
        prep_time_minutes: count(fields, "prep_time_minutes"),
        cook_time_minutes: count(fields, "cook_time_minutes"),
        total_time_minutes: count(fields, "total_time_minutes"),
        additional_notes: notes(fields.get("additional_notes")),
    }
}

/// Random lowercase alphanumeric id for records with neither id nor name
#[must_use]
pub fn generate_id(rng: &dyn RandomSource) -> String {
    (0..GENERATED_ID_LEN)
        .map(|_| char::from(ID_ALPHABET[rng.next_index(ID_ALPHABET.len())]))
        .collect()
}

fn normalize_ingredient(raw: &Value) -> Ingredient {
    match raw {
        Value::Object(fields) => Ingredient {
            name: text(fields, "name").unwrap_or_default(),
            quantity: fields.get("quantity").and_then(Value::as_f64),
            unit: text(fields, "unit"),
            text_quantity: text(fields, "text_quantity"),
            notes: text(fields, "notes"),
        },
        other => Ingredient::named(scalar_text(other)),
    }
}

fn normalize_step(index: usize, raw: &Value) -> Step {
    let position = u32::try_from(index + 1).unwrap_or(u32::MAX);
    match raw {
        Value::Object(fields) => Step {
            step: count(fields, "step").filter(|n| *n > 0).unwrap_or(position),
            description: text(fields, "description").unwrap_or_default(),
        },
        other => Step {
            step: position,
            description: scalar_text(other),
        },
    }
}

/// Non-empty string field
fn text(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

fn count(fields: &Map<String, Value>, key: &str) -> Option<u32> {
    fields
        .get(key)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
}

fn list<'a>(fields: &'a Map<String, Value>, key: &str) -> &'a [Value] {
    fields
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).map(str::to_owned).collect())
        .unwrap_or_default()
}

/// Notes arrive either as one string or as a list of lines
fn notes(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(_) => Some(string_list(value).join("\n")).filter(|s| !s.is_empty()),
        _ => None,
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use howtocook_intelligence::SequenceRandom;
    use serde_json::json;

    #[test]
    fn test_generated_id_uses_alphabet() {
        let rng = SequenceRandom::new(vec![0, 10, 35]);
        assert_eq!(generate_id(&rng), "0az0az0az");
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let rng = SequenceRandom::zeros();
        let recipe = normalize_record(&json!({}), &rng);
        assert_eq!(recipe.id, "000000000");
        assert_eq!(recipe.name, "");
        assert_eq!(recipe.category, "其他");
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.steps.is_empty());
    }

    #[test]
    fn test_bare_strings_become_ingredients_and_steps() {
        let rng = SequenceRandom::zeros();
        let record = json!({
            "name": "番茄炒蛋",
            "ingredients": ["番茄", {"name": "鸡蛋", "quantity": 2}],
            "steps": ["切番茄", {"description": "炒蛋"}],
        });
        let recipe = normalize_record(&record, &rng);
        assert_eq!(recipe.id, "番茄炒蛋");
        assert_eq!(recipe.ingredients[0].name, "番茄");
        assert!(recipe.ingredients[1]
            .quantity
            .is_some_and(|q| (q - 2.0).abs() < f64::EPSILON));
        assert_eq!(recipe.steps[0].step, 1);
        assert_eq!(recipe.steps[1].step, 2);
        assert_eq!(recipe.steps[1].description, "炒蛋");
    }

    #[test]
    fn test_non_array_document_is_rejected() {
        let rng = SequenceRandom::zeros();
        assert!(normalize_recipes(&json!({"recipes": []}), &rng).is_err());
    }
}
