// ABOUTME: Parsed, identifier-indexed snapshot of every recipe dumped by the server
// ABOUTME: Lossless ingest - unparseable records are kept opaquely, never dropped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors

//! # Recipe Corpus
//!
//! Parses the server's dumped recipe snapshot into typed [`Recipe`] entries
//! and maintains two derived indices, by ingredient and by result. Both
//! indices are built in the same pass as the recipe map and the whole
//! corpus is constructed before it becomes visible, so a half-updated
//! corpus is never observed.
//!
//! The corpus reflects *what the server has*: its recipes may reference
//! identifiers from mods removed after the dump was taken. Such references
//! are recorded as non-fatal annotations at ingestion time rather than
//! rejected.

mod parse;

/// Recipe dump capture from the server log and dump cache persistence
pub mod dump;

use crate::catalog::Catalog;
use packsmith_core::ident::Identifier;
use packsmith_core::recipe::{RawRecipeRecord, Recipe, RecipeId, RecipeRole};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{info, warn};

/// One recipe reference to an identifier absent from the catalog.
///
/// Annotations describe drift between the dump and the installed mod set;
/// they do not make the referencing recipe invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownIdentifierNote {
    /// The referencing recipe
    pub recipe_id: RecipeId,
    /// The uncatalogued identifier
    pub identifier: Identifier,
    /// How the recipe uses the identifier
    pub role: RecipeRole,
}

/// Parsed, indexed snapshot of all recipes known to the server
#[derive(Debug, Clone, Default)]
pub struct RecipeCorpus {
    recipes: BTreeMap<RecipeId, Recipe>,
    by_ingredient: BTreeMap<Identifier, BTreeSet<RecipeId>>,
    by_result: BTreeMap<Identifier, BTreeSet<RecipeId>>,
    annotations: Vec<UnknownIdentifierNote>,
    opaque: usize,
}

impl RecipeCorpus {
    /// Parse a sequence of raw dump records into a fresh corpus.
    ///
    /// A record whose payload cannot be parsed into its declared type is
    /// retained opaquely rather than dropped; per-record problems are never
    /// fatal. When a catalog is supplied, references to uncatalogued
    /// identifiers are recorded as [`UnknownIdentifierNote`]s.
    #[must_use]
    pub fn ingest(records: Vec<RawRecipeRecord>, catalog: Option<&Catalog>) -> Self {
        let mut recipes: BTreeMap<RecipeId, Recipe> = BTreeMap::new();
        let mut by_ingredient: BTreeMap<Identifier, BTreeSet<RecipeId>> = BTreeMap::new();
        let mut by_result: BTreeMap<Identifier, BTreeSet<RecipeId>> = BTreeMap::new();
        let mut annotations = Vec::new();
        let mut opaque = 0usize;

        for record in records {
            let recipe = parse::parse_record(record);
            if !recipe.is_structured() {
                opaque += 1;
            }

            for id in &recipe.ingredients {
                by_ingredient
                    .entry(id.clone())
                    .or_default()
                    .insert(recipe.id.clone());
                if let Some(catalog) = catalog {
                    if !catalog.contains(id) {
                        annotations.push(UnknownIdentifierNote {
                            recipe_id: recipe.id.clone(),
                            identifier: id.clone(),
                            role: RecipeRole::Ingredient,
                        });
                    }
                }
            }
            for id in &recipe.results {
                by_result
                    .entry(id.clone())
                    .or_default()
                    .insert(recipe.id.clone());
                if let Some(catalog) = catalog {
                    if !catalog.contains(id) {
                        annotations.push(UnknownIdentifierNote {
                            recipe_id: recipe.id.clone(),
                            identifier: id.clone(),
                            role: RecipeRole::Result,
                        });
                    }
                }
            }

            if let Some(previous) = recipes.insert(recipe.id.clone(), recipe) {
                warn!(recipe = %previous.id, "duplicate recipe id in dump; keeping the later record");
            }
        }

        if !annotations.is_empty() {
            warn!(
                count = annotations.len(),
                "dump references identifiers absent from the catalog (mod set drift?)"
            );
        }
        info!(
            recipes = recipes.len(),
            opaque, "recipe corpus ingest complete"
        );

        Self {
            recipes,
            by_ingredient,
            by_result,
            annotations,
            opaque,
        }
    }

    /// Exact-match lookup by identifier and role.
    ///
    /// Returns recipes in lexical recipe-id order; an empty vec (not an
    /// error) when nothing matches. Opaque recipes never match: their
    /// identifiers were never indexed.
    #[must_use]
    pub fn find_by_identifier(&self, id: &Identifier, role: RecipeRole) -> Vec<&Recipe> {
        let mut ids: BTreeSet<&RecipeId> = BTreeSet::new();
        if matches!(role, RecipeRole::Ingredient | RecipeRole::Either) {
            if let Some(set) = self.by_ingredient.get(id) {
                ids.extend(set.iter());
            }
        }
        if matches!(role, RecipeRole::Result | RecipeRole::Either) {
            if let Some(set) = self.by_result.get(id) {
                ids.extend(set.iter());
            }
        }
        ids.into_iter()
            .filter_map(|recipe_id| self.recipes.get(recipe_id))
            .collect()
    }

    /// Look up one recipe by its registry id
    #[must_use]
    pub fn get(&self, id: &RecipeId) -> Option<&Recipe> {
        self.recipes.get(id)
    }

    /// Number of recipes in the corpus
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the corpus holds no recipes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Iterate all recipes in lexical recipe-id order
    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.values()
    }

    /// References to identifiers absent from the catalog at ingest time
    #[must_use]
    pub fn annotations(&self) -> &[UnknownIdentifierNote] {
        &self.annotations
    }

    /// Number of records retained opaquely
    #[must_use]
    pub const fn opaque_count(&self) -> usize {
        self.opaque
    }

    /// Every recipe id referenced by either index resolves in the recipe
    /// map. Exposed so tests can assert the index invariant directly.
    #[must_use]
    pub fn indices_are_consistent(&self) -> bool {
        self.by_ingredient
            .values()
            .chain(self.by_result.values())
            .flatten()
            .all(|id| self.recipes.contains_key(id))
    }
}
