// ABOUTME: Shared test utilities and fixture builders for integration tests
// ABOUTME: Provides quiet logging, jar fixtures, dump records, and engine setup helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

//! Shared test utilities for `packsmith`
//!
//! Jar fixtures are real zip archives written into a temp directory, so
//! catalog tests exercise the same code path production does.

use packsmith::catalog::{Catalog, CatalogBuilder};
use packsmith::config::EngineConfig;
use packsmith::engine::EngineState;
use packsmith_core::recipe::RawRecipeRecord;
use serde_json::{json, Value};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Once};
use std::time::Duration;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .init();
    });
}

/// Write a jar archive containing the given entry paths (contents are
/// empty JSON objects) and return its path.
pub fn write_test_jar(dir: &Path, jar_name: &str, entries: &[&str]) -> PathBuf {
    let path = dir.join(jar_name);
    let file = File::create(&path).unwrap();
    let mut jar = zip::ZipWriter::new(file);
    let options = SimpleFileOptions::default();
    for entry in entries {
        jar.start_file(*entry, options).unwrap();
        jar.write_all(b"{}").unwrap();
    }
    jar.finish().unwrap();
    path
}

/// A jar defining item models for each `<namespace>:<name>` identifier
pub fn write_items_jar(dir: &Path, jar_name: &str, identifiers: &[&str]) -> PathBuf {
    let entries: Vec<String> = identifiers
        .iter()
        .map(|id| {
            let (namespace, name) = id.split_once(':').unwrap();
            format!("assets/{namespace}/models/item/{name}.json")
        })
        .collect();
    let refs: Vec<&str> = entries.iter().map(String::as_str).collect();
    write_test_jar(dir, jar_name, &refs)
}

/// Build a catalog from jars defining the given item identifiers
pub fn catalog_with_items(dir: &Path, identifiers: &[&str]) -> Catalog {
    init_test_logging();
    let jar = write_items_jar(dir, "fixture_mod.jar", identifiers);
    CatalogBuilder::new().build(&[jar]).unwrap()
}

/// One raw dump record
pub fn record(id: &str, declared: &str, data: Value) -> RawRecipeRecord {
    RawRecipeRecord {
        id: id.to_owned(),
        recipe_type: declared.to_owned(),
        data,
    }
}

/// A small realistic dump: one of each structured family plus one foreign
/// (opaque) record.
pub fn sample_dump_records() -> Vec<RawRecipeRecord> {
    vec![
        record(
            "modx:iron_gear",
            "minecraft:crafting_shapeless",
            json!({
                "ingredients": [
                    {"item": "modx:copper_ingot"},
                    {"item": "modx:copper_ingot"},
                    {"item": "modx:copper_ingot"},
                    {"item": "modx:copper_ingot"}
                ],
                "result": {"item": "modx:iron_gear", "count": 1}
            }),
        ),
        record(
            "modx:gear_box",
            "minecraft:crafting_shaped",
            json!({
                "pattern": ["GG", "GG"],
                "key": {"G": {"item": "modx:iron_gear"}},
                "result": {"item": "modx:gear_box", "count": 1}
            }),
        ),
        record(
            "modx:copper_ingot_from_smelting",
            "minecraft:smelting",
            json!({
                "ingredient": {"item": "modx:raw_copper"},
                "result": "modx:copper_ingot",
                "experience": 0.7,
                "cookingtime": 200
            }),
        ),
        record(
            "modx:gear_from_stonecutting",
            "minecraft:stonecutting",
            json!({
                "ingredient": {"item": "modx:copper_ingot"},
                "result": "modx:iron_gear",
                "count": 1
            }),
        ),
        record(
            "botania:mana_gear",
            "botania:mana_infusion",
            json!({"mana": 5000, "input": {"item": "modx:iron_gear"}}),
        ),
    ]
}

/// The identifier set matching [`sample_dump_records`]
pub const SAMPLE_ITEMS: &[&str] = &[
    "modx:iron_gear",
    "modx:copper_ingot",
    "modx:raw_copper",
    "modx:gear_box",
];

/// A fully wired engine over temp-dir paths, plus the temp dir keeping
/// the fixture files alive.
pub struct TestEngine {
    pub engine: Arc<EngineState>,
    pub dir: TempDir,
}

/// Build an engine with a catalog from [`SAMPLE_ITEMS`] and an ingested
/// [`sample_dump_records`] corpus.
pub fn test_engine() -> TestEngine {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let config = EngineConfig {
        mods_dir: dir.path().join("mods"),
        dump_log_path: dir.path().join("logs/latest.log"),
        dump_cache_path: dir.path().join("cache/dumped_recipes.json"),
        patch_script_path: dir.path().join("kubejs/packsmith_patch.js"),
        catalog_timeout: Duration::from_secs(30),
        ..EngineConfig::default()
    };
    let engine = EngineState::new(config).unwrap();

    let catalog = catalog_with_items(dir.path(), SAMPLE_ITEMS);
    engine.install_catalog(catalog);
    engine.install_corpus(sample_dump_records());

    TestEngine {
        engine: Arc::new(engine),
        dir,
    }
}

/// Read the patch artifact written by a [`TestEngine`]
pub fn read_patch_artifact(test_engine: &TestEngine) -> String {
    std::fs::read_to_string(test_engine.dir.path().join("kubejs/packsmith_patch.js")).unwrap()
}
