// ABOUTME: Module containing all engine tool implementations organized by category
// ABOUTME: Search/lookup tools and recipe-mutation tools, plus shared parameter parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors

//! # Tool Implementations
//!
//! - **search**: `search_items`, `find_recipes`
//! - **recipes**: the five `add_*_recipe` constructors plus
//!   `remove_recipes` and `replace_recipe_items`

/// Recipe-mutation tools
pub mod recipes;
/// Identifier search and recipe lookup tools
pub mod search;

use super::errors::ToolError;
use super::registry::ToolRegistry;
use packsmith_core::errors::AppResult;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Register every built-in tool. Names are unique constants, so
/// registration cannot collide.
pub fn register_all(registry: &mut ToolRegistry) {
    let entries: Vec<(Arc<dyn super::traits::EngineTool>, &str)> = vec![
        (Arc::new(search::SearchItemsTool), "search"),
        (Arc::new(search::FindRecipesTool), "search"),
        (Arc::new(recipes::AddShapelessRecipeTool), "recipes"),
        (Arc::new(recipes::AddShapedRecipeTool), "recipes"),
        (Arc::new(recipes::AddSmithingRecipeTool), "recipes"),
        (Arc::new(recipes::AddCookingRecipeTool), "recipes"),
        (Arc::new(recipes::AddStonecuttingRecipeTool), "recipes"),
        (Arc::new(recipes::RemoveRecipesTool), "recipes"),
        (Arc::new(recipes::ReplaceRecipeItemsTool), "recipes"),
    ];
    for (tool, category) in entries {
        // Built-in names are distinct by construction; a collision is a
        // programming error worth surfacing loudly in logs, not a panic.
        if let Err(err) = registry.register_with_category(tool, category) {
            tracing::error!("builtin tool registration failed: {err}");
        }
    }
}

/// Deserialize tool parameters, attributing failures to the tool name.
pub(crate) fn parse_params<T: DeserializeOwned>(tool_name: &str, params: Value) -> AppResult<T> {
    serde_json::from_value(params)
        .map_err(|err| ToolError::invalid_parameters(tool_name, err.to_string()).into())
}
