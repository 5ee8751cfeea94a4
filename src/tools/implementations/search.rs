// ABOUTME: Identifier search and recipe lookup tools
// ABOUTME: Implements search_items and find_recipes over the index, validator, and corpus
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors

//! # Search Tools
//!
//! - `search_items` - resolve free text to ranked catalogued identifiers
//! - `find_recipes` - exact-match recipe lookup by identifier and role
//!
//! Search results are grounded by construction: the semantic index is
//! built only from catalogued identifiers, and recipe lookups validate
//! the queried identifier before touching the corpus.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use packsmith_core::constants::tools::{FIND_RECIPES, SEARCH_ITEMS};
use packsmith_core::errors::AppResult;
use packsmith_core::ident::Identifier;
use packsmith_core::recipe::{Recipe, RecipeRole, RecipeType};

use super::parse_params;
use crate::catalog::EntryKind;
use crate::tools::context::ToolExecutionContext;
use crate::tools::result::ToolResult;
use crate::tools::traits::{EngineTool, ToolCapabilities};

#[derive(Debug, Deserialize)]
struct SearchItemsParams {
    query: String,
    top_k: Option<usize>,
}

#[derive(Debug, Serialize)]
struct SearchItemsResponse {
    query: String,
    results: Vec<SearchItemEntry>,
}

#[derive(Debug, Serialize)]
struct SearchItemEntry {
    identifier: Identifier,
    score: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<EntryKind>,
}

/// Resolve free text to ranked catalogued identifiers
pub struct SearchItemsTool;

#[async_trait]
impl EngineTool for SearchItemsTool {
    fn name(&self) -> &'static str {
        SEARCH_ITEMS
    }

    fn description(&self) -> &'static str {
        "Resolve a natural-language item description to exact catalogued identifiers, ranked by similarity"
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_CATALOG | ToolCapabilities::SEARCH
    }

    async fn execute(&self, ctx: &ToolExecutionContext, params: Value) -> AppResult<ToolResult> {
        let params: SearchItemsParams = parse_params(SEARCH_ITEMS, params)?;
        let top_k = params
            .top_k
            .unwrap_or_else(|| ctx.engine.config().default_top_k);

        let index = ctx.engine.semantic_index();
        let catalog = ctx.engine.catalog();
        let hits = index.search(&params.query, top_k)?;

        let results = hits
            .into_iter()
            .map(|hit| {
                let entry = catalog.get(&hit.identifier);
                SearchItemEntry {
                    display_name: entry.map(|e| e.display_name.clone()),
                    kind: entry.map(|e| e.kind),
                    identifier: hit.identifier,
                    score: hit.score,
                }
            })
            .collect();

        ToolResult::from_serializable(&SearchItemsResponse {
            query: params.query,
            results,
        })
    }
}

#[derive(Debug, Deserialize)]
struct FindRecipesParams {
    identifier: String,
    role: Option<RecipeRole>,
}

#[derive(Debug, Serialize)]
struct FindRecipesResponse {
    identifier: Identifier,
    role: RecipeRole,
    count: usize,
    recipes: Vec<RecipeSummary>,
}

#[derive(Debug, Serialize)]
struct RecipeSummary {
    id: String,
    recipe_type: RecipeType,
    ingredients: Vec<Identifier>,
    results: Vec<Identifier>,
}

impl From<&Recipe> for RecipeSummary {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.as_str().to_owned(),
            recipe_type: recipe.recipe_type.clone(),
            ingredients: recipe.ingredients.clone(),
            results: recipe.results.clone(),
        }
    }
}

/// Exact-match recipe lookup by identifier and role
pub struct FindRecipesTool;

#[async_trait]
impl EngineTool for FindRecipesTool {
    fn name(&self) -> &'static str {
        FIND_RECIPES
    }

    fn description(&self) -> &'static str {
        "Find recipes that consume or produce an exact identifier"
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_CATALOG | ToolCapabilities::READS_CORPUS
    }

    async fn execute(&self, ctx: &ToolExecutionContext, params: Value) -> AppResult<ToolResult> {
        let params: FindRecipesParams = parse_params(FIND_RECIPES, params)?;
        let identifier = Identifier::parse(&params.identifier)?;
        let role = params.role.unwrap_or(RecipeRole::Either);

        // Queries are grounded the same way mutations are: the identifier
        // must exist in the catalog even though the corpus itself may
        // reference stale ids from removed mods.
        ctx.engine.validator().require_known(&identifier, "query")?;

        let corpus = ctx.engine.corpus();
        let recipes: Vec<RecipeSummary> = corpus
            .find_by_identifier(&identifier, role)
            .into_iter()
            .map(RecipeSummary::from)
            .collect();

        ToolResult::from_serializable(&FindRecipesResponse {
            identifier,
            role,
            count: recipes.len(),
            recipes,
        })
    }
}
