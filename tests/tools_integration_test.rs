// ABOUTME: End-to-end tests for the agent-facing tool surface
// ABOUTME: Registry dispatch, search/lookup tools, mutation tools, and no-partial-write guarantees
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors
#![allow(clippy::unwrap_used)]

mod common;

use common::{read_patch_artifact, test_engine};
use packsmith::tools::{ToolExecutionContext, ToolRegistry};
use packsmith_core::constants::tools;
use packsmith_core::errors::ErrorCode;
use serde_json::json;

#[tokio::test]
async fn registry_lists_every_builtin_tool() {
    let registry = ToolRegistry::with_builtin_tools();
    assert_eq!(registry.len(), 9);
    let names: Vec<String> = registry.list().into_iter().map(|d| d.name).collect();
    for expected in [
        tools::SEARCH_ITEMS,
        tools::FIND_RECIPES,
        tools::ADD_SHAPELESS_RECIPE,
        tools::ADD_SHAPED_RECIPE,
        tools::ADD_SMITHING_RECIPE,
        tools::ADD_COOKING_RECIPE,
        tools::ADD_STONECUTTING_RECIPE,
        tools::REMOVE_RECIPES,
        tools::REPLACE_RECIPE_ITEMS,
    ] {
        assert!(names.iter().any(|n| n == expected), "missing {expected}");
    }
}

#[tokio::test]
async fn unknown_tool_name_is_a_typed_error() {
    let fixture = test_engine();
    let registry = ToolRegistry::with_builtin_tools();
    let ctx = ToolExecutionContext::new(fixture.engine.clone());

    let err = registry
        .execute("summon_dragon", &ctx, json!({}))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ToolNotFound);
}

#[tokio::test]
async fn search_items_returns_grounded_results() {
    let fixture = test_engine();
    let registry = ToolRegistry::with_builtin_tools();
    let ctx = ToolExecutionContext::new(fixture.engine.clone());

    let result = registry
        .execute(tools::SEARCH_ITEMS, &ctx, json!({"query": "iron gear", "top_k": 3}))
        .await
        .unwrap();
    assert!(!result.is_error);

    let results = result.content["results"].as_array().unwrap().clone();
    assert!(!results.is_empty());
    let validator = fixture.engine.validator();
    for entry in &results {
        let raw = entry["identifier"].as_str().unwrap();
        let id = packsmith_core::ident::Identifier::parse(raw).unwrap();
        assert!(validator.is_known_identifier(&id));
    }
}

#[tokio::test]
async fn find_recipes_looks_up_by_role() {
    let fixture = test_engine();
    let registry = ToolRegistry::with_builtin_tools();
    let ctx = ToolExecutionContext::new(fixture.engine.clone());

    let result = registry
        .execute(
            tools::FIND_RECIPES,
            &ctx,
            json!({"identifier": "modx:iron_gear", "role": "ingredient"}),
        )
        .await
        .unwrap();
    assert_eq!(result.content["count"], json!(1));
    assert_eq!(
        result.content["recipes"][0]["id"],
        json!("modx:gear_box")
    );
}

#[tokio::test]
async fn find_recipes_requires_a_known_identifier() {
    let fixture = test_engine();
    let registry = ToolRegistry::with_builtin_tools();
    let ctx = ToolExecutionContext::new(fixture.engine.clone());

    let err = registry
        .execute(
            tools::FIND_RECIPES,
            &ctx,
            json!({"identifier": "modx:unobtainium"}),
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::UnknownIdentifier);
}

#[tokio::test]
async fn add_shapeless_recipe_appends_to_the_artifact() {
    let fixture = test_engine();
    let registry = ToolRegistry::with_builtin_tools();
    let ctx = ToolExecutionContext::new(fixture.engine.clone());

    let result = registry
        .execute(
            tools::ADD_SHAPELESS_RECIPE,
            &ctx,
            json!({
                "ingredients": {"modx:copper_ingot": 4},
                "result": "modx:iron_gear",
                "count": 1,
                "comment": "Press four copper ingots into an iron gear."
            }),
        )
        .await
        .unwrap();
    assert_eq!(result.content["status"], json!("appended"));
    assert_eq!(result.content["op"], json!("add_shapeless"));

    let artifact = read_patch_artifact(&fixture);
    assert!(artifact.contains("'4x modx:copper_ingot'"));
    assert!(artifact.contains("event.shapeless(Item.of('modx:iron_gear', 1)"));
}

#[tokio::test]
async fn shapeless_alternatives_validate_and_render() {
    let fixture = test_engine();
    let registry = ToolRegistry::with_builtin_tools();
    let ctx = ToolExecutionContext::new(fixture.engine.clone());

    let result = registry
        .execute(
            tools::ADD_SHAPELESS_RECIPE,
            &ctx,
            json!({
                "ingredients": {"modx:copper_ingot|modx:raw_copper": 2},
                "result": "modx:gear_box"
            }),
        )
        .await
        .unwrap();
    assert!(!result.is_error);

    let artifact = read_patch_artifact(&fixture);
    assert!(artifact.contains("'2x modx:copper_ingot|modx:raw_copper'"));
}

#[tokio::test]
async fn unknown_identifier_produces_no_artifact_statement() {
    let fixture = test_engine();
    let registry = ToolRegistry::with_builtin_tools();
    let ctx = ToolExecutionContext::new(fixture.engine.clone());

    let before = read_patch_artifact(&fixture);
    let err = registry
        .execute(
            tools::ADD_SHAPED_RECIPE,
            &ctx,
            json!({
                "pattern": ["NN"],
                "key": {"N": "modx:nonexistent"},
                "result": "modx:iron_gear"
            }),
        )
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::UnknownIdentifier);
    assert_eq!(err.context.identifier.as_deref(), Some("modx:nonexistent"));
    // No partial write: the artifact is byte-identical
    assert_eq!(read_patch_artifact(&fixture), before);
    assert_eq!(fixture.engine.statements_appended(), 0);
}

#[tokio::test]
async fn cooking_tool_rejects_negative_experience() {
    let fixture = test_engine();
    let registry = ToolRegistry::with_builtin_tools();
    let ctx = ToolExecutionContext::new(fixture.engine.clone());

    let err = registry
        .execute(
            tools::ADD_COOKING_RECIPE,
            &ctx,
            json!({
                "method": "smelting",
                "input": "modx:raw_copper",
                "result": "modx:copper_ingot",
                "experience": -1.0,
                "cooking_time": 200
            }),
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
}

#[tokio::test]
async fn remove_and_replace_tools_append_statements() {
    let fixture = test_engine();
    let registry = ToolRegistry::with_builtin_tools();
    let ctx = ToolExecutionContext::new(fixture.engine.clone());

    registry
        .execute(
            tools::REMOVE_RECIPES,
            &ctx,
            json!({"ids": ["modx:gear_box", "minecraft:furnace"]}),
        )
        .await
        .unwrap();
    registry
        .execute(
            tools::REPLACE_RECIPE_ITEMS,
            &ctx,
            json!({
                "recipe_id": "modx:gear_box",
                "substitutions": {"modx:iron_gear": "modx:copper_ingot"}
            }),
        )
        .await
        .unwrap();

    let artifact = read_patch_artifact(&fixture);
    assert!(artifact.contains("event.remove({ id: 'minecraft:furnace' })"));
    assert!(artifact.contains("event.remove({ id: 'modx:gear_box' })"));
    assert!(artifact.contains(
        "event.replaceInput({ id: 'modx:gear_box' }, 'modx:iron_gear', 'modx:copper_ingot')"
    ));
    assert_eq!(fixture.engine.statements_appended(), 2);
}

#[tokio::test]
async fn malformed_parameters_are_invalid_input() {
    let fixture = test_engine();
    let registry = ToolRegistry::with_builtin_tools();
    let ctx = ToolExecutionContext::new(fixture.engine.clone());

    let err = registry
        .execute(tools::SEARCH_ITEMS, &ctx, json!({"no_query_here": true}))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn duplicate_registration_is_refused() {
    use packsmith::tools::implementations::search::SearchItemsTool;
    use std::sync::Arc;

    let mut registry = ToolRegistry::with_builtin_tools();
    let result = registry.register(Arc::new(SearchItemsTool));
    assert!(result.is_err());
    assert_eq!(registry.len(), 9);
}
