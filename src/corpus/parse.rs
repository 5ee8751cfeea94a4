// ABOUTME: Parses raw dump records into typed per-family recipe payloads
// ABOUTME: Any payload the parser cannot understand demotes the record to opaque
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors

//! Record-to-recipe parsing.
//!
//! Recipe payloads follow the game's recipe JSON shapes. Item references
//! appear as `{"item": "ns:path"}` (newer dumps use `"id"`), as plain
//! strings, or as arrays of alternatives; tag references
//! (`{"tag": "ns:group"}` or `"#ns:group"`) are preserved but index
//! nothing. Result stacks carry an optional `count` defaulting to 1.

use packsmith_core::ident::Identifier;
use packsmith_core::recipe::{
    CookingMethod, RawRecipeRecord, Recipe, RecipePayload, RecipeResult, RecipeSlot, RecipeType,
    SlotEntry,
};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Default cooking durations in ticks, applied when the dump omits one
const fn default_cooking_time(method: CookingMethod) -> u32 {
    match method {
        CookingMethod::Smelting => 200,
        CookingMethod::Blasting | CookingMethod::Smoking => 100,
        CookingMethod::CampfireCooking => 600,
    }
}

/// Parse one raw record; never fails.
///
/// Records of recognized families whose payloads do not parse are demoted
/// to opaque entries with the declared type preserved.
pub(crate) fn parse_record(record: RawRecipeRecord) -> Recipe {
    let declared = record.recipe_type.clone();
    let family = RecipeType::from_declared(&declared);
    let payload = if family.is_structured() {
        parse_payload(&declared, &record.data)
    } else {
        None
    };

    match payload {
        Some(payload) => {
            let (ingredients, results) = collect_identifiers(&payload);
            Recipe {
                id: record.id.as_str().into(),
                recipe_type: family,
                payload,
                ingredients,
                results,
                raw: record.data,
            }
        }
        None => {
            if family.is_structured() {
                debug!(
                    recipe = %record.id,
                    declared = %declared,
                    "payload did not parse as its declared type; keeping record opaque"
                );
            }
            Recipe {
                id: record.id.as_str().into(),
                recipe_type: RecipeType::Other(declared),
                payload: RecipePayload::Opaque,
                ingredients: Vec::new(),
                results: Vec::new(),
                raw: record.data,
            }
        }
    }
}

fn parse_payload(declared: &str, data: &Value) -> Option<RecipePayload> {
    match RecipeType::from_declared(declared) {
        RecipeType::Shapeless => parse_shapeless(data),
        RecipeType::Shaped => parse_shaped(data),
        RecipeType::Smithing => parse_smithing(data),
        RecipeType::Cooking => {
            let method = CookingMethod::from_declared(declared)?;
            parse_cooking(method, data)
        }
        RecipeType::Stonecutting => parse_stonecutting(data),
        RecipeType::Other(_) => None,
    }
}

fn parse_shapeless(data: &Value) -> Option<RecipePayload> {
    let ingredients = data
        .get("ingredients")?
        .as_array()?
        .iter()
        .map(parse_slot)
        .collect::<Option<Vec<_>>>()?;
    let result = parse_result(data.get("result")?)?;
    Some(RecipePayload::Shapeless {
        ingredients,
        result,
    })
}

fn parse_shaped(data: &Value) -> Option<RecipePayload> {
    let pattern = data
        .get("pattern")?
        .as_array()?
        .iter()
        .map(|row| row.as_str().map(str::to_owned))
        .collect::<Option<Vec<_>>>()?;
    let mut key = BTreeMap::new();
    for (symbol, slot_value) in data.get("key")?.as_object()? {
        let mut chars = symbol.chars();
        let symbol = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        key.insert(symbol, parse_slot(slot_value)?);
    }
    let result = parse_result(data.get("result")?)?;
    Some(RecipePayload::Shaped {
        pattern,
        key,
        result,
    })
}

fn parse_smithing(data: &Value) -> Option<RecipePayload> {
    let template = match data.get("template") {
        Some(value) => Some(parse_slot(value)?),
        None => None,
    };
    let base = parse_slot(data.get("base")?)?;
    let addition = parse_slot(data.get("addition")?)?;
    let result = match data.get("result") {
        Some(value) => Some(parse_result(value)?),
        None => None,
    };
    Some(RecipePayload::Smithing {
        template,
        base,
        addition,
        result,
    })
}

fn parse_cooking(method: CookingMethod, data: &Value) -> Option<RecipePayload> {
    let ingredient = parse_slot(data.get("ingredient")?)?;
    let result = parse_result(data.get("result")?)?;
    let experience = data
        .get("experience")
        .and_then(Value::as_f64)
        .unwrap_or(0.0) as f32;
    let cooking_time = data
        .get("cookingtime")
        .or_else(|| data.get("cooking_time"))
        .and_then(Value::as_u64)
        .map_or_else(|| default_cooking_time(method), |t| t as u32);
    Some(RecipePayload::Cooking {
        method,
        ingredient,
        result,
        experience,
        cooking_time,
    })
}

fn parse_stonecutting(data: &Value) -> Option<RecipePayload> {
    let ingredient = parse_slot(data.get("ingredient")?)?;
    // Older dumps put the count beside a plain-string result
    let mut result = parse_result(data.get("result")?)?;
    if let Some(count) = data.get("count").and_then(Value::as_u64) {
        result.count = count as u32;
    }
    Some(RecipePayload::Stonecutting { ingredient, result })
}

/// Parse one ingredient slot: an item/tag object, a plain string, or an
/// array of alternatives.
fn parse_slot(value: &Value) -> Option<RecipeSlot> {
    let mut entries = Vec::new();
    collect_slot_entries(value, &mut entries)?;
    if entries.is_empty() {
        return None;
    }
    Some(RecipeSlot { entries })
}

fn collect_slot_entries(value: &Value, entries: &mut Vec<SlotEntry>) -> Option<()> {
    match value {
        Value::String(raw) => {
            let entry = raw.strip_prefix('#').map_or_else(
                || Identifier::parse(raw).ok().map(SlotEntry::Item),
                |tag| Some(SlotEntry::Tag(tag.to_owned())),
            )?;
            entries.push(entry);
            Some(())
        }
        Value::Object(map) => {
            if let Some(tag) = map.get("tag").and_then(Value::as_str) {
                entries.push(SlotEntry::Tag(tag.to_owned()));
                return Some(());
            }
            let raw = map
                .get("item")
                .or_else(|| map.get("id"))
                .and_then(Value::as_str)?;
            entries.push(SlotEntry::Item(Identifier::parse(raw).ok()?));
            Some(())
        }
        Value::Array(alternatives) => {
            for alternative in alternatives {
                collect_slot_entries(alternative, entries)?;
            }
            Some(())
        }
        _ => None,
    }
}

/// Parse a result stack: a plain string or an item object with an
/// optional count.
fn parse_result(value: &Value) -> Option<RecipeResult> {
    match value {
        Value::String(raw) => Some(RecipeResult {
            item: Identifier::parse(raw).ok()?,
            count: 1,
        }),
        Value::Object(map) => {
            let raw = map
                .get("item")
                .or_else(|| map.get("id"))
                .and_then(Value::as_str)?;
            let count = map.get("count").and_then(Value::as_u64).unwrap_or(1) as u32;
            Some(RecipeResult {
                item: Identifier::parse(raw).ok()?,
                count,
            })
        }
        _ => None,
    }
}

/// Collect the deduplicated ingredient and result identifier sets for
/// index construction.
fn collect_identifiers(payload: &RecipePayload) -> (Vec<Identifier>, Vec<Identifier>) {
    let mut ingredients: BTreeSet<Identifier> = BTreeSet::new();
    let mut results: BTreeSet<Identifier> = BTreeSet::new();

    match payload {
        RecipePayload::Shapeless {
            ingredients: slots,
            result,
        } => {
            for slot in slots {
                ingredients.extend(slot.item_ids().cloned());
            }
            results.insert(result.item.clone());
        }
        RecipePayload::Shaped { key, result, .. } => {
            for slot in key.values() {
                ingredients.extend(slot.item_ids().cloned());
            }
            results.insert(result.item.clone());
        }
        RecipePayload::Smithing {
            template,
            base,
            addition,
            result,
        } => {
            if let Some(template) = template {
                ingredients.extend(template.item_ids().cloned());
            }
            ingredients.extend(base.item_ids().cloned());
            ingredients.extend(addition.item_ids().cloned());
            if let Some(result) = result {
                results.insert(result.item.clone());
            }
        }
        RecipePayload::Cooking {
            ingredient, result, ..
        }
        | RecipePayload::Stonecutting { ingredient, result } => {
            ingredients.extend(ingredient.item_ids().cloned());
            results.insert(result.item.clone());
        }
        RecipePayload::Opaque => {}
    }

    (
        ingredients.into_iter().collect(),
        results.into_iter().collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: &str, declared: &str, data: Value) -> RawRecipeRecord {
        RawRecipeRecord {
            id: id.to_owned(),
            recipe_type: declared.to_owned(),
            data,
        }
    }

    #[test]
    fn parses_shapeless_with_alternatives() {
        let recipe = parse_record(record(
            "minecraft:fire_charge",
            "minecraft:crafting_shapeless",
            json!({
                "ingredients": [
                    {"item": "minecraft:blaze_powder"},
                    [{"item": "minecraft:coal"}, {"item": "minecraft:charcoal"}],
                    {"item": "minecraft:gunpowder"}
                ],
                "result": {"item": "minecraft:fire_charge", "count": 3}
            }),
        ));
        assert!(recipe.is_structured());
        assert!(recipe
            .ingredients
            .iter()
            .any(|id| id.as_str() == "minecraft:charcoal"));
        assert_eq!(recipe.results[0].as_str(), "minecraft:fire_charge");
    }

    #[test]
    fn tag_references_do_not_index() {
        let recipe = parse_record(record(
            "minecraft:stick",
            "minecraft:crafting_shaped",
            json!({
                "pattern": ["P", "P"],
                "key": {"P": {"tag": "minecraft:planks"}},
                "result": {"item": "minecraft:stick", "count": 4}
            }),
        ));
        assert!(recipe.is_structured());
        assert!(recipe.ingredients.is_empty());
    }

    #[test]
    fn unparseable_payload_demotes_to_opaque() {
        let recipe = parse_record(record(
            "modx:broken",
            "minecraft:crafting_shapeless",
            json!({"ingredients": "not-an-array"}),
        ));
        assert!(!recipe.is_structured());
        assert_eq!(
            recipe.recipe_type,
            RecipeType::Other("minecraft:crafting_shapeless".to_owned())
        );
        assert_eq!(recipe.raw, json!({"ingredients": "not-an-array"}));
    }

    #[test]
    fn cooking_defaults_apply() {
        let recipe = parse_record(record(
            "minecraft:iron_ingot_from_smelting",
            "minecraft:smelting",
            json!({
                "ingredient": {"item": "minecraft:raw_iron"},
                "result": "minecraft:iron_ingot"
            }),
        ));
        match recipe.payload {
            RecipePayload::Cooking {
                cooking_time,
                experience,
                ..
            } => {
                assert_eq!(cooking_time, 200);
                assert!((experience - 0.0).abs() < f32::EPSILON);
            }
            other => panic!("expected cooking payload, got {other:?}"),
        }
    }
}
