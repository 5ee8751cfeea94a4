// ABOUTME: Namespaced item/block identifiers plus ingredient and item-stack value types
// ABOUTME: Identifier parsing is the single entry point for identifier syntax validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors

//! # Identifiers
//!
//! A game identifier is a namespaced string `<namespace>:<path>` uniquely
//! naming one item or block kind (`modx:iron_gear`). Identifiers are
//! immutable once constructed and order/hash by their full string form.
//!
//! Syntax validation happens exactly once, at parse time; every other
//! component can treat a constructed [`Identifier`] as well-formed and only
//! needs to consult the catalog for *existence*.

use crate::constants::ident::{ALTERNATIVE_SEPARATOR, DEFAULT_NAMESPACE};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A namespaced identifier naming one item or block kind.
///
/// Bare identifiers without a `namespace:` prefix are normalized into the
/// vanilla namespace at parse time, matching how vanilla ids appear in
/// recipe dumps and user input.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier {
    full: String,
    colon: usize,
}

impl Identifier {
    /// Parse an identifier, normalizing bare ids into the vanilla namespace.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` when either part is empty or contains a
    /// character outside the game's identifier alphabet.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let raw = raw.trim();
        let (namespace, path) = match raw.split_once(':') {
            Some((ns, path)) => (ns, path),
            None => (DEFAULT_NAMESPACE, raw),
        };

        if namespace.is_empty() || path.is_empty() {
            return Err(AppError::invalid_input(format!(
                "identifier '{raw}' must have the form <namespace>:<path>"
            )));
        }
        if let Some(bad) = namespace
            .chars()
            .find(|c| !matches!(c, 'a'..='z' | '0'..='9' | '_' | '.' | '-'))
        {
            return Err(AppError::invalid_input(format!(
                "identifier '{raw}' has invalid character '{bad}' in its namespace"
            )));
        }
        if let Some(bad) = path
            .chars()
            .find(|c| !matches!(c, 'a'..='z' | '0'..='9' | '_' | '.' | '-' | '/'))
        {
            return Err(AppError::invalid_input(format!(
                "identifier '{raw}' has invalid character '{bad}' in its path"
            )));
        }

        Ok(Self {
            full: format!("{namespace}:{path}"),
            colon: namespace.len(),
        })
    }

    /// The full `namespace:path` form
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }

    /// The namespace part (`modx` in `modx:iron_gear`)
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.full[..self.colon]
    }

    /// The path part (`iron_gear` in `modx:iron_gear`)
    #[must_use]
    pub fn path(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    /// The final path segment (`gear` in `modx:tools/gear`)
    #[must_use]
    pub fn name(&self) -> &str {
        self.path().rsplit('/').next().unwrap_or_else(|| self.path())
    }

    /// A human-readable display name derived from the final path segment
    /// (`iron_gear` becomes `Iron Gear`).
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut out = String::with_capacity(self.name().len());
        for (i, word) in self.name().split('_').filter(|w| !w.is_empty()).enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        }
        out
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

impl FromStr for Identifier {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Identifier {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.full
    }
}

/// One crafting-slot requirement: one or more alternative identifiers plus
/// a count.
///
/// Alternatives come from the `a|b` spec syntax (`minecraft:coal|
/// minecraft:charcoal` accepts either fuel in that slot).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Alternative identifiers accepted in this slot (at least one)
    pub options: Vec<Identifier>,
    /// How many of this ingredient the recipe consumes
    pub count: u32,
}

impl Ingredient {
    /// A single-identifier ingredient with count 1
    #[must_use]
    pub fn of(id: Identifier) -> Self {
        Self {
            options: vec![id],
            count: 1,
        }
    }

    /// An ingredient accepting any of the given alternatives.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for an empty alternative list and
    /// `VALUE_OUT_OF_RANGE` for a zero count.
    pub fn any_of(options: Vec<Identifier>, count: u32) -> AppResult<Self> {
        if options.is_empty() {
            return Err(AppError::invalid_input(
                "ingredient must list at least one identifier",
            ));
        }
        if count == 0 {
            return Err(AppError::value_out_of_range(
                "ingredient count must be at least 1",
            ));
        }
        Ok(Self { options, count })
    }

    /// Parse an `a|b|c` alternative spec into an ingredient.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` when any alternative fails identifier parsing
    /// or the spec is empty, `VALUE_OUT_OF_RANGE` for a zero count.
    pub fn parse(spec: &str, count: u32) -> AppResult<Self> {
        let options = spec
            .split(ALTERNATIVE_SEPARATOR)
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(Identifier::parse)
            .collect::<AppResult<Vec<_>>>()?;
        Self::any_of(options, count)
    }

    /// The `a|b|c` spec form of this ingredient's alternatives
    #[must_use]
    pub fn spec_string(&self) -> String {
        let parts: Vec<&str> = self.options.iter().map(Identifier::as_str).collect();
        parts.join("|")
    }
}

/// An identifier plus a production count, used for recipe results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    /// The produced item
    pub item: Identifier,
    /// How many are produced
    pub count: u32,
}

impl ItemStack {
    /// Create a stack, rejecting zero counts.
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` for a zero count.
    pub fn new(item: Identifier, count: u32) -> AppResult<Self> {
        if count == 0 {
            return Err(AppError::value_out_of_range(
                "result count must be at least 1",
            ));
        }
        Ok(Self { item, count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_namespaced_identifier() {
        let id = Identifier::parse("modx:iron_gear").unwrap();
        assert_eq!(id.namespace(), "modx");
        assert_eq!(id.path(), "iron_gear");
        assert_eq!(id.as_str(), "modx:iron_gear");
    }

    #[test]
    fn bare_identifier_gets_vanilla_namespace() {
        let id = Identifier::parse("stick").unwrap();
        assert_eq!(id.as_str(), "minecraft:stick");
    }

    #[test]
    fn rejects_bad_characters() {
        assert!(Identifier::parse("modx:Iron Gear").is_err());
        assert!(Identifier::parse("modx:").is_err());
        assert!(Identifier::parse(":gear").is_err());
        assert!(Identifier::parse("mod colon:gear").is_err());
    }

    #[test]
    fn nested_path_and_display_name() {
        let id = Identifier::parse("modx:tools/iron_gear").unwrap();
        assert_eq!(id.name(), "iron_gear");
        assert_eq!(id.display_name(), "Iron Gear");
    }

    #[test]
    fn ingredient_alternatives_round_trip() {
        let ing = Ingredient::parse("minecraft:coal|minecraft:charcoal", 2).unwrap();
        assert_eq!(ing.options.len(), 2);
        assert_eq!(ing.spec_string(), "minecraft:coal|minecraft:charcoal");
    }

    #[test]
    fn ingredient_rejects_zero_count() {
        assert!(Ingredient::parse("minecraft:coal", 0).is_err());
    }

    #[test]
    fn identifier_serializes_as_plain_string() {
        let id = Identifier::parse("modx:iron_gear").unwrap();
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            "\"modx:iron_gear\""
        );
        let back: Identifier = serde_json::from_str("\"copper_ingot\"").unwrap();
        assert_eq!(back.as_str(), "minecraft:copper_ingot");
    }
}
