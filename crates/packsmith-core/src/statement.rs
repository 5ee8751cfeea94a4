// ABOUTME: Recipe-mutation statements appended to the patch artifact
// ABOUTME: Statements are self-contained; construction happens only via validated synthesis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors

//! # Mutation Statements
//!
//! A [`RecipeStatement`] is one accepted recipe mutation, ready for
//! serialization into the patch artifact. Statements carry no forward
//! references, so the downstream scripting runtime can apply them in any
//! order.
//!
//! Statements are only ever produced by the synthesis layer, which
//! validates every referenced identifier first; holding a
//! `RecipeStatement` therefore implies its identifiers were catalogued at
//! emission time.

use crate::ident::{Identifier, Ingredient, ItemStack};
use crate::recipe::{CookingMethod, RecipeId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One accepted recipe mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RecipeStatement {
    /// Add a shapeless crafting recipe
    AddShapeless {
        /// Ingredient slots (order carries no meaning)
        ingredients: Vec<Ingredient>,
        /// Produced stack
        result: ItemStack,
        /// Free-text description carried into the artifact as a comment
        #[serde(skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
    /// Add a shaped crafting recipe
    AddShaped {
        /// Pattern rows; space means an empty cell
        pattern: Vec<String>,
        /// Symbol-to-identifier key
        key: BTreeMap<char, Identifier>,
        /// Produced stack
        result: ItemStack,
        /// Free-text description carried into the artifact as a comment
        #[serde(skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
    /// Add a smithing recipe
    AddSmithing {
        /// Upgrade template item
        template: Identifier,
        /// Base item
        base: Identifier,
        /// Addition item
        addition: Identifier,
        /// Produced item
        result: Identifier,
        /// Free-text description carried into the artifact as a comment
        #[serde(skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
    /// Add a furnace-family cooking recipe
    AddCooking {
        /// Device family
        method: CookingMethod,
        /// Input item
        input: Identifier,
        /// Produced item
        result: Identifier,
        /// Experience granted (non-negative)
        experience: f32,
        /// Duration in ticks (at least 1)
        cooking_time: u32,
        /// Free-text description carried into the artifact as a comment
        #[serde(skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
    /// Add a stonecutting recipe
    AddStonecutting {
        /// Input item
        input: Identifier,
        /// Produced stack
        result: ItemStack,
        /// Free-text description carried into the artifact as a comment
        #[serde(skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
    /// Remove recipes by registry id.
    ///
    /// Ids need not resolve anywhere: removal of an already-absent recipe
    /// is a no-op at apply time, not an engine-level error.
    Remove {
        /// Registry ids to remove
        ids: BTreeSet<RecipeId>,
        /// Free-text description carried into the artifact as a comment
        #[serde(skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
    /// Substitute items inside an existing recipe.
    ///
    /// Old identifiers describe what is being matched and may reference
    /// anything the existing recipe contains; only the new identifiers are
    /// guaranteed catalogued.
    ReplaceItems {
        /// The recipe being rewritten
        recipe_id: RecipeId,
        /// Substitutions, old identifier to new identifier
        substitutions: BTreeMap<Identifier, Identifier>,
        /// Free-text description carried into the artifact as a comment
        #[serde(skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
}

impl RecipeStatement {
    /// The operation name, matching the artifact serialization
    #[must_use]
    pub const fn op_name(&self) -> &'static str {
        match self {
            Self::AddShapeless { .. } => "add_shapeless",
            Self::AddShaped { .. } => "add_shaped",
            Self::AddSmithing { .. } => "add_smithing",
            Self::AddCooking { .. } => "add_cooking",
            Self::AddStonecutting { .. } => "add_stonecutting",
            Self::Remove { .. } => "remove",
            Self::ReplaceItems { .. } => "replace_items",
        }
    }

    /// The statement's comment, if any
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        match self {
            Self::AddShapeless { comment, .. }
            | Self::AddShaped { comment, .. }
            | Self::AddSmithing { comment, .. }
            | Self::AddCooking { comment, .. }
            | Self::AddStonecutting { comment, .. }
            | Self::Remove { comment, .. }
            | Self::ReplaceItems { comment, .. } => comment.as_deref(),
        }
    }
}
