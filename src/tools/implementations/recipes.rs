// ABOUTME: Recipe-mutation tools wrapping the validated synthesis constructors
// ABOUTME: Every accepted statement is appended to the patch artifact and flushed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors

//! # Recipe Mutation Tools
//!
//! One tool per synthesis operation:
//! - `add_shapeless_recipe`, `add_shaped_recipe`, `add_smithing_recipe`,
//!   `add_cooking_recipe`, `add_stonecutting_recipe`
//! - `remove_recipes`
//! - `replace_recipe_items`
//!
//! Each tool deserializes its parameters, hands typed values to the
//! synthesizer (which refuses anything referencing an uncatalogued
//! identifier), and only then appends the statement to the patch
//! artifact. A rejected request leaves the artifact untouched.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

use packsmith_core::constants::tools::{
    ADD_COOKING_RECIPE, ADD_SHAPED_RECIPE, ADD_SHAPELESS_RECIPE, ADD_SMITHING_RECIPE,
    ADD_STONECUTTING_RECIPE, REMOVE_RECIPES, REPLACE_RECIPE_ITEMS,
};
use packsmith_core::errors::AppResult;
use packsmith_core::ident::{Identifier, Ingredient, ItemStack};
use packsmith_core::recipe::{CookingMethod, RecipeId};
use packsmith_core::statement::RecipeStatement;

use super::parse_params;
use crate::patch::render_statement;
use crate::tools::context::ToolExecutionContext;
use crate::tools::result::ToolResult;
use crate::tools::traits::{EngineTool, ToolCapabilities};

/// Response payload shared by every mutation tool
#[derive(Debug, Serialize)]
struct MutationResponse {
    status: &'static str,
    op: &'static str,
    statement: RecipeStatement,
    script: String,
}

/// Append an accepted statement and report what was written
fn commit(ctx: &ToolExecutionContext, statement: RecipeStatement) -> AppResult<ToolResult> {
    ctx.engine.append_statement(&statement)?;
    let script = render_statement(&statement);
    ToolResult::from_serializable(&MutationResponse {
        status: "appended",
        op: statement.op_name(),
        statement,
        script,
    })
}

const fn mutation_capabilities() -> ToolCapabilities {
    ToolCapabilities::READS_CATALOG.union(ToolCapabilities::WRITES_PATCH)
}

#[derive(Debug, Deserialize)]
struct AddShapelessParams {
    /// Ingredient spec (`a|b` alternatives allowed) to count
    ingredients: BTreeMap<String, u32>,
    result: String,
    count: Option<u32>,
    comment: Option<String>,
}

/// Append a shapeless crafting recipe
pub struct AddShapelessRecipeTool;

#[async_trait]
impl EngineTool for AddShapelessRecipeTool {
    fn name(&self) -> &'static str {
        ADD_SHAPELESS_RECIPE
    }

    fn description(&self) -> &'static str {
        "Add a shapeless crafting recipe; ingredients map identifier specs (with optional a|b alternatives) to counts"
    }

    fn capabilities(&self) -> ToolCapabilities {
        mutation_capabilities()
    }

    async fn execute(&self, ctx: &ToolExecutionContext, params: Value) -> AppResult<ToolResult> {
        let params: AddShapelessParams = parse_params(ADD_SHAPELESS_RECIPE, params)?;
        let ingredients = params
            .ingredients
            .iter()
            .map(|(spec, count)| Ingredient::parse(spec, *count))
            .collect::<AppResult<Vec<_>>>()?;
        let result = ItemStack::new(
            Identifier::parse(&params.result)?,
            params.count.unwrap_or(1),
        )?;

        let statement =
            ctx.engine
                .synthesizer()
                .shapeless(ingredients, result, params.comment)?;
        commit(ctx, statement)
    }
}

#[derive(Debug, Deserialize)]
struct AddShapedParams {
    pattern: Vec<String>,
    key: BTreeMap<char, String>,
    result: String,
    count: Option<u32>,
    comment: Option<String>,
}

/// Append a shaped crafting recipe
pub struct AddShapedRecipeTool;

#[async_trait]
impl EngineTool for AddShapedRecipeTool {
    fn name(&self) -> &'static str {
        ADD_SHAPED_RECIPE
    }

    fn description(&self) -> &'static str {
        "Add a shaped crafting recipe from a pattern grid and a symbol-to-identifier key; spaces are empty cells"
    }

    fn capabilities(&self) -> ToolCapabilities {
        mutation_capabilities()
    }

    async fn execute(&self, ctx: &ToolExecutionContext, params: Value) -> AppResult<ToolResult> {
        let params: AddShapedParams = parse_params(ADD_SHAPED_RECIPE, params)?;
        let key = params
            .key
            .iter()
            .map(|(symbol, raw)| Ok((*symbol, Identifier::parse(raw)?)))
            .collect::<AppResult<BTreeMap<char, Identifier>>>()?;
        let result = ItemStack::new(
            Identifier::parse(&params.result)?,
            params.count.unwrap_or(1),
        )?;

        let statement =
            ctx.engine
                .synthesizer()
                .shaped(params.pattern, key, result, params.comment)?;
        commit(ctx, statement)
    }
}

#[derive(Debug, Deserialize)]
struct AddSmithingParams {
    template: String,
    base: String,
    addition: String,
    result: String,
    comment: Option<String>,
}

/// Append a smithing recipe
pub struct AddSmithingRecipeTool;

#[async_trait]
impl EngineTool for AddSmithingRecipeTool {
    fn name(&self) -> &'static str {
        ADD_SMITHING_RECIPE
    }

    fn description(&self) -> &'static str {
        "Add a smithing-table recipe upgrading a base item with an addition using a template"
    }

    fn capabilities(&self) -> ToolCapabilities {
        mutation_capabilities()
    }

    async fn execute(&self, ctx: &ToolExecutionContext, params: Value) -> AppResult<ToolResult> {
        let params: AddSmithingParams = parse_params(ADD_SMITHING_RECIPE, params)?;
        let statement = ctx.engine.synthesizer().smithing(
            Identifier::parse(&params.template)?,
            Identifier::parse(&params.base)?,
            Identifier::parse(&params.addition)?,
            Identifier::parse(&params.result)?,
            params.comment,
        )?;
        commit(ctx, statement)
    }
}

#[derive(Debug, Deserialize)]
struct AddCookingParams {
    method: CookingMethod,
    input: String,
    result: String,
    experience: f32,
    cooking_time: u32,
    comment: Option<String>,
}

/// Append a furnace-family cooking recipe
pub struct AddCookingRecipeTool;

#[async_trait]
impl EngineTool for AddCookingRecipeTool {
    fn name(&self) -> &'static str {
        ADD_COOKING_RECIPE
    }

    fn description(&self) -> &'static str {
        "Add a cooking recipe (smelting, blasting, smoking, or campfire_cooking) with experience and duration"
    }

    fn capabilities(&self) -> ToolCapabilities {
        mutation_capabilities()
    }

    async fn execute(&self, ctx: &ToolExecutionContext, params: Value) -> AppResult<ToolResult> {
        let params: AddCookingParams = parse_params(ADD_COOKING_RECIPE, params)?;
        let statement = ctx.engine.synthesizer().cooking(
            params.method,
            Identifier::parse(&params.input)?,
            Identifier::parse(&params.result)?,
            params.experience,
            params.cooking_time,
            params.comment,
        )?;
        commit(ctx, statement)
    }
}

#[derive(Debug, Deserialize)]
struct AddStonecuttingParams {
    input: String,
    result: String,
    count: Option<u32>,
    comment: Option<String>,
}

/// Append a stonecutting recipe
pub struct AddStonecuttingRecipeTool;

#[async_trait]
impl EngineTool for AddStonecuttingRecipeTool {
    fn name(&self) -> &'static str {
        ADD_STONECUTTING_RECIPE
    }

    fn description(&self) -> &'static str {
        "Add a stonecutter recipe cutting an input into a result stack"
    }

    fn capabilities(&self) -> ToolCapabilities {
        mutation_capabilities()
    }

    async fn execute(&self, ctx: &ToolExecutionContext, params: Value) -> AppResult<ToolResult> {
        let params: AddStonecuttingParams = parse_params(ADD_STONECUTTING_RECIPE, params)?;
        let result = ItemStack::new(
            Identifier::parse(&params.result)?,
            params.count.unwrap_or(1),
        )?;
        let statement = ctx.engine.synthesizer().stonecutting(
            Identifier::parse(&params.input)?,
            result,
            params.comment,
        )?;
        commit(ctx, statement)
    }
}

#[derive(Debug, Deserialize)]
struct RemoveRecipesParams {
    ids: Vec<String>,
    comment: Option<String>,
}

/// Append removal statements for recipe ids
pub struct RemoveRecipesTool;

#[async_trait]
impl EngineTool for RemoveRecipesTool {
    fn name(&self) -> &'static str {
        REMOVE_RECIPES
    }

    fn description(&self) -> &'static str {
        "Remove recipes by registry id; removing an already-absent recipe is a no-op at apply time"
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::WRITES_PATCH
    }

    async fn execute(&self, ctx: &ToolExecutionContext, params: Value) -> AppResult<ToolResult> {
        let params: RemoveRecipesParams = parse_params(REMOVE_RECIPES, params)?;
        let ids: BTreeSet<RecipeId> = params
            .ids
            .iter()
            .map(|raw| RecipeId::from(raw.as_str()))
            .collect();
        let statement = ctx.engine.synthesizer().remove(ids, params.comment)?;
        commit(ctx, statement)
    }
}

#[derive(Debug, Deserialize)]
struct ReplaceRecipeItemsParams {
    recipe_id: String,
    substitutions: BTreeMap<String, String>,
    comment: Option<String>,
}

/// Append item substitutions for an existing recipe
pub struct ReplaceRecipeItemsTool;

#[async_trait]
impl EngineTool for ReplaceRecipeItemsTool {
    fn name(&self) -> &'static str {
        REPLACE_RECIPE_ITEMS
    }

    fn description(&self) -> &'static str {
        "Substitute items inside an existing recipe; only the replacement identifiers must be catalogued"
    }

    fn capabilities(&self) -> ToolCapabilities {
        mutation_capabilities()
    }

    async fn execute(&self, ctx: &ToolExecutionContext, params: Value) -> AppResult<ToolResult> {
        let params: ReplaceRecipeItemsParams = parse_params(REPLACE_RECIPE_ITEMS, params)?;
        let substitutions = params
            .substitutions
            .iter()
            .map(|(old, new)| Ok((Identifier::parse(old)?, Identifier::parse(new)?)))
            .collect::<AppResult<BTreeMap<Identifier, Identifier>>>()?;
        let statement = ctx.engine.synthesizer().replace_items(
            RecipeId(params.recipe_id),
            substitutions,
            params.comment,
        )?;
        commit(ctx, statement)
    }
}
