// ABOUTME: Recipe records, family classification, and typed per-family payloads
// ABOUTME: Unrecognized families are kept as opaque records, never dropped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors

//! # Recipe Model
//!
//! A recipe arrives from the server dump as an untyped record
//! `{id, type, data}`. Recognized families get a typed payload; anything
//! else (including recognized families whose payload fails to parse) is
//! retained opaquely so a dump is never lossy at the corpus level.
//!
//! Opaque recipes are never matched by ingredient/result search and are
//! never eligible for structured mutation.

use crate::ident::Identifier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Opaque stable recipe id from the game's recipe registry
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecipeId(pub String);

impl RecipeId {
    /// The raw registry id string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecipeId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// The recipe family a record belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeType {
    /// Grid crafting without slot positions
    Shapeless,
    /// Grid crafting with a fixed pattern
    Shaped,
    /// Smithing table upgrade
    Smithing,
    /// Furnace-family cooking (smelting, blasting, smoking, campfire)
    Cooking,
    /// Stonecutter recipe
    Stonecutting,
    /// Any family this engine does not deeply understand; stored opaquely
    Other(String),
}

impl RecipeType {
    /// Classify a declared registry type string into a family.
    ///
    /// Unrecognized strings map to [`RecipeType::Other`] with the declared
    /// string preserved.
    #[must_use]
    pub fn from_declared(declared: &str) -> Self {
        match declared {
            "minecraft:crafting_shapeless" => Self::Shapeless,
            "minecraft:crafting_shaped" => Self::Shaped,
            "minecraft:smithing_transform" | "minecraft:smithing_trim" => Self::Smithing,
            "minecraft:smelting"
            | "minecraft:blasting"
            | "minecraft:smoking"
            | "minecraft:campfire_cooking" => Self::Cooking,
            "minecraft:stonecutting" => Self::Stonecutting,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Whether this family has a typed payload the engine can mutate
    #[must_use]
    pub const fn is_structured(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

/// The cooking device family of a cooking recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CookingMethod {
    /// Furnace
    Smelting,
    /// Blast furnace
    Blasting,
    /// Smoker
    Smoking,
    /// Campfire
    CampfireCooking,
}

impl CookingMethod {
    /// Classify a declared cooking registry type, if it is one
    #[must_use]
    pub fn from_declared(declared: &str) -> Option<Self> {
        match declared {
            "minecraft:smelting" => Some(Self::Smelting),
            "minecraft:blasting" => Some(Self::Blasting),
            "minecraft:smoking" => Some(Self::Smoking),
            "minecraft:campfire_cooking" => Some(Self::CampfireCooking),
            _ => None,
        }
    }

    /// The declared registry type string for this method
    #[must_use]
    pub const fn declared_type(self) -> &'static str {
        match self {
            Self::Smelting => "minecraft:smelting",
            Self::Blasting => "minecraft:blasting",
            Self::Smoking => "minecraft:smoking",
            Self::CampfireCooking => "minecraft:campfire_cooking",
        }
    }
}

/// One alternative inside a recipe slot: a concrete item or a tag reference.
///
/// Tags name item groups, not items; they are preserved for losslessness
/// but never contribute to the identifier indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotEntry {
    /// A concrete item identifier
    Item(Identifier),
    /// A tag reference (`#minecraft:planks` style group)
    Tag(String),
}

/// One ingredient slot: one or more accepted alternatives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSlot {
    /// Accepted alternatives for this slot
    pub entries: Vec<SlotEntry>,
}

impl RecipeSlot {
    /// Iterate the concrete item identifiers in this slot (tags excluded)
    pub fn item_ids(&self) -> impl Iterator<Item = &Identifier> {
        self.entries.iter().filter_map(|entry| match entry {
            SlotEntry::Item(id) => Some(id),
            SlotEntry::Tag(_) => None,
        })
    }
}

/// A produced item with its count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeResult {
    /// The produced item
    pub item: Identifier,
    /// How many are produced
    pub count: u32,
}

/// Typed payload for each supported recipe family
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipePayload {
    /// Unordered ingredient list
    Shapeless {
        /// Ingredient slots
        ingredients: Vec<RecipeSlot>,
        /// Produced item
        result: RecipeResult,
    },
    /// Pattern grid with a symbol key
    Shaped {
        /// Pattern rows; space means an empty cell
        pattern: Vec<String>,
        /// Symbol-to-slot mapping
        key: BTreeMap<char, RecipeSlot>,
        /// Produced item
        result: RecipeResult,
    },
    /// Smithing table upgrade
    Smithing {
        /// Upgrade template slot, absent on older formats
        template: Option<RecipeSlot>,
        /// Base item slot
        base: RecipeSlot,
        /// Addition slot
        addition: RecipeSlot,
        /// Produced item; trim recipes produce no new item
        result: Option<RecipeResult>,
    },
    /// Furnace-family cooking
    Cooking {
        /// Device family
        method: CookingMethod,
        /// Input slot
        ingredient: RecipeSlot,
        /// Produced item
        result: RecipeResult,
        /// Experience granted
        experience: f32,
        /// Duration in ticks
        cooking_time: u32,
    },
    /// Stonecutter recipe
    Stonecutting {
        /// Input slot
        ingredient: RecipeSlot,
        /// Produced item
        result: RecipeResult,
    },
    /// Payload the engine does not deeply understand; raw data retained
    Opaque,
}

/// One parsed recipe from the server dump
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Stable registry id
    pub id: RecipeId,
    /// Family classification
    pub recipe_type: RecipeType,
    /// Typed payload, or [`RecipePayload::Opaque`]
    pub payload: RecipePayload,
    /// Every concrete ingredient identifier referenced by the payload
    pub ingredients: Vec<Identifier>,
    /// Every concrete result identifier referenced by the payload
    pub results: Vec<Identifier>,
    /// The untouched raw data payload from the dump
    pub raw: serde_json::Value,
}

impl Recipe {
    /// Whether this recipe has a typed payload the engine can reason about
    #[must_use]
    pub const fn is_structured(&self) -> bool {
        !matches!(self.payload, RecipePayload::Opaque)
    }
}

/// The role an identifier plays when searching the corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeRole {
    /// Match recipes consuming the identifier
    Ingredient,
    /// Match recipes producing the identifier
    Result,
    /// Match either role
    Either,
}

/// One raw record as emitted by the server's dump hook: `{id, type, data}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecipeRecord {
    /// Stable registry id
    pub id: String,
    /// Declared registry type string
    #[serde(rename = "type")]
    pub recipe_type: String,
    /// Opaque structured payload
    pub data: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_declared_types() {
        assert_eq!(
            RecipeType::from_declared("minecraft:crafting_shapeless"),
            RecipeType::Shapeless
        );
        assert_eq!(
            RecipeType::from_declared("minecraft:blasting"),
            RecipeType::Cooking
        );
        assert_eq!(
            RecipeType::from_declared("botania:mana_infusion"),
            RecipeType::Other("botania:mana_infusion".to_owned())
        );
    }

    #[test]
    fn slot_item_ids_skip_tags() {
        let slot = RecipeSlot {
            entries: vec![
                SlotEntry::Item(Identifier::parse("minecraft:coal").unwrap()),
                SlotEntry::Tag("minecraft:planks".to_owned()),
            ],
        };
        let ids: Vec<&Identifier> = slot.item_ids().collect();
        assert_eq!(ids.len(), 1);
        assert_eq!(ids[0].as_str(), "minecraft:coal");
    }

    #[test]
    fn raw_record_deserializes_with_type_rename() {
        let record: RawRecipeRecord = serde_json::from_str(
            r#"{"id": "minecraft:iron_ingot_from_smelting", "type": "minecraft:smelting", "data": {}}"#,
        )
        .unwrap();
        assert_eq!(record.recipe_type, "minecraft:smelting");
    }
}
