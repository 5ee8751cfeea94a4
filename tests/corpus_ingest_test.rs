// ABOUTME: Integration tests for recipe corpus ingestion and indexed lookup
// ABOUTME: Covers lossless opaque retention, index invariants, roles, and dump capture
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors
#![allow(clippy::unwrap_used)]

mod common;

use common::{catalog_with_items, init_test_logging, record, sample_dump_records, SAMPLE_ITEMS};
use packsmith::corpus::{dump, RecipeCorpus};
use packsmith_core::constants::dump::{BEGIN_MARKER, DATA_PREFIX, END_MARKER};
use packsmith_core::errors::ErrorCode;
use packsmith_core::ident::Identifier;
use packsmith_core::recipe::{RecipeRole, RecipeType};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn id(raw: &str) -> Identifier {
    Identifier::parse(raw).unwrap()
}

#[test]
fn ingest_keeps_every_record() {
    init_test_logging();
    let corpus = RecipeCorpus::ingest(sample_dump_records(), None);
    assert_eq!(corpus.len(), 5);
    assert_eq!(corpus.opaque_count(), 1);
}

#[test]
fn foreign_family_is_retained_opaquely() {
    init_test_logging();
    let corpus = RecipeCorpus::ingest(sample_dump_records(), None);
    let recipe = corpus.get(&"botania:mana_gear".into()).unwrap();
    assert!(!recipe.is_structured());
    assert_eq!(
        recipe.recipe_type,
        RecipeType::Other("botania:mana_infusion".to_owned())
    );
    // Opaque recipes never match identifier search even though their raw
    // payload references the identifier
    let hits = corpus.find_by_identifier(&id("modx:iron_gear"), RecipeRole::Ingredient);
    assert!(hits.iter().all(|r| r.id.as_str() != "botania:mana_gear"));
}

#[test]
fn malformed_structured_payload_is_retained_opaquely() {
    init_test_logging();
    let records = vec![record(
        "modx:broken",
        "minecraft:crafting_shapeless",
        json!({"ingredients": 17}),
    )];
    let corpus = RecipeCorpus::ingest(records, None);
    assert_eq!(corpus.len(), 1);
    assert_eq!(corpus.opaque_count(), 1);
    assert_eq!(corpus.get(&"modx:broken".into()).unwrap().raw, json!({"ingredients": 17}));
}

#[test]
fn index_entries_always_resolve() {
    init_test_logging();
    let corpus = RecipeCorpus::ingest(sample_dump_records(), None);
    assert!(corpus.indices_are_consistent());
}

#[test]
fn find_by_identifier_respects_roles() {
    init_test_logging();
    let corpus = RecipeCorpus::ingest(sample_dump_records(), None);
    let gear = id("modx:iron_gear");

    let as_result: Vec<&str> = corpus
        .find_by_identifier(&gear, RecipeRole::Result)
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(as_result, vec!["modx:gear_from_stonecutting", "modx:iron_gear"]);

    let as_ingredient: Vec<&str> = corpus
        .find_by_identifier(&gear, RecipeRole::Ingredient)
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(as_ingredient, vec!["modx:gear_box"]);

    let either = corpus.find_by_identifier(&gear, RecipeRole::Either);
    assert_eq!(either.len(), 3);
}

#[test]
fn missing_identifier_returns_empty_not_error() {
    init_test_logging();
    let corpus = RecipeCorpus::ingest(sample_dump_records(), None);
    let hits = corpus.find_by_identifier(&id("modx:unobtainium"), RecipeRole::Either);
    assert!(hits.is_empty());
}

#[test]
fn stale_identifiers_are_annotated_not_rejected() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    // Catalog is missing modx:raw_copper, as if that mod was removed
    // after the dump was taken
    let catalog = catalog_with_items(dir.path(), &["modx:iron_gear", "modx:copper_ingot", "modx:gear_box"]);
    let corpus = RecipeCorpus::ingest(sample_dump_records(), Some(&catalog));

    assert_eq!(corpus.len(), 5);
    assert!(corpus
        .annotations()
        .iter()
        .any(|note| note.identifier.as_str() == "modx:raw_copper"));
    // The referencing recipe is still fully indexed
    let hits = corpus.find_by_identifier(&id("modx:raw_copper"), RecipeRole::Ingredient);
    assert_eq!(hits.len(), 1);
}

#[test]
fn removal_does_not_mutate_the_corpus_view() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let catalog = catalog_with_items(dir.path(), SAMPLE_ITEMS);
    let corpus = RecipeCorpus::ingest(sample_dump_records(), Some(&catalog));

    // Emit a removal statement for a recipe that is in the corpus
    let validator = packsmith::validator::IdentifierValidator::new(std::sync::Arc::new(catalog));
    let synthesizer = packsmith::synthesis::RecipeSynthesizer::new(validator);
    let statement = synthesizer
        .remove(
            std::collections::BTreeSet::from([packsmith_core::recipe::RecipeId::from(
                "modx:gear_box",
            )]),
            None,
        )
        .unwrap();
    assert_eq!(statement.op_name(), "remove");

    // Removal affects the downstream runtime, not the engine's own corpus
    let hits = corpus.find_by_identifier(&id("modx:gear_box"), RecipeRole::Result);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id.as_str(), "modx:gear_box");
}

#[test]
fn capture_from_log_reads_newest_dump_section() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("latest.log");

    let rec_a = format!(
        "[12:00:01] [Server thread/INFO]: {DATA_PREFIX}{}",
        json!({"id": "modx:old", "type": "minecraft:smelting", "data": {}})
    );
    let rec_b = format!(
        "[12:05:01] [Server thread/INFO]: {DATA_PREFIX}{}",
        json!({"id": "modx:new", "type": "minecraft:smelting", "data": {}})
    );
    let contents = [
        "[11:59:59] [Server thread/INFO]: Preparing spawn area".to_owned(),
        format!("[12:00:00] [Server thread/INFO]: {BEGIN_MARKER}"),
        rec_a,
        format!("[12:00:02] [Server thread/INFO]: {END_MARKER}"),
        format!("[12:05:00] [Server thread/INFO]: {BEGIN_MARKER}"),
        rec_b,
        "[12:05:00] [Server thread/WARN]: unrelated noise".to_owned(),
        format!("[12:05:02] [Server thread/INFO]: {END_MARKER}"),
        "[12:06:00] [Server thread/INFO]: more noise".to_owned(),
    ]
    .join("\n");
    fs::write(&log, contents).unwrap();

    let records = dump::capture_from_log(&log).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "modx:new");
}

#[test]
fn capture_tolerates_malformed_record_lines() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("latest.log");
    let good = format!(
        "{DATA_PREFIX}{}",
        json!({"id": "modx:ok", "type": "minecraft:smelting", "data": {}})
    );
    let contents = format!("{BEGIN_MARKER}\n{DATA_PREFIX}{{not json\n{good}\n{END_MARKER}\n");
    fs::write(&log, contents).unwrap();

    let records = dump::capture_from_log(&log).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "modx:ok");
}

#[test]
fn capture_without_dump_section_fails() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("latest.log");
    fs::write(&log, "just ordinary log lines\n").unwrap();

    let err = dump::capture_from_log(&log).unwrap_err();
    assert_eq!(err.code, ErrorCode::CorpusIngestFailed);
}

#[test]
fn dump_cache_round_trips() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let cache = dir.path().join("cache/dumped_recipes.json");

    let records = sample_dump_records();
    dump::save_cache(&cache, &records).unwrap();
    let loaded = dump::load_cache(&cache).unwrap();
    assert_eq!(loaded.len(), records.len());
    assert_eq!(loaded[0].id, records[0].id);
}
