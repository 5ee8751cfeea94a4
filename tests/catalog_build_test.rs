// ABOUTME: Integration tests for catalog building from jar archives
// ABOUTME: Covers idempotence, partial-failure tolerance, dedup, and fatal cases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors
#![allow(clippy::unwrap_used)]

mod common;

use common::{catalog_with_items, init_test_logging, write_items_jar, write_test_jar};
use packsmith::catalog::{CatalogBuilder, EntryKind};
use packsmith_core::errors::ErrorCode;
use packsmith_core::ident::Identifier;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn builds_catalog_from_item_and_block_models() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let jar = write_test_jar(
        dir.path(),
        "modx.jar",
        &[
            "assets/modx/models/item/iron_gear.json",
            "assets/modx/models/block/gear_box.json",
            "assets/modx/textures/item/iron_gear.png",
            "META-INF/MANIFEST.MF",
        ],
    );
    let catalog = CatalogBuilder::new().build(&[jar]).unwrap();

    assert_eq!(catalog.len(), 2);
    let gear = Identifier::parse("modx:iron_gear").unwrap();
    let entry = catalog.get(&gear).unwrap();
    assert_eq!(entry.kind, EntryKind::Item);
    assert_eq!(entry.display_name, "Iron Gear");
    assert_eq!(entry.source, "modx.jar");

    let block = Identifier::parse("modx:gear_box").unwrap();
    assert_eq!(catalog.get(&block).unwrap().kind, EntryKind::Block);
}

#[test]
fn rebuild_with_unchanged_archives_is_identical() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let jar_a = write_items_jar(dir.path(), "a.jar", &["modx:iron_gear", "modx:copper_ingot"]);
    let jar_b = write_items_jar(dir.path(), "b.jar", &["mody:widget"]);

    let builder = CatalogBuilder::new();
    let first = builder.build(&[jar_a.clone(), jar_b.clone()]).unwrap();
    // Path order must not matter
    let second = builder.build(&[jar_b, jar_a]).unwrap();

    let first_ids: Vec<String> = first.identifiers().map(ToString::to_string).collect();
    let second_ids: Vec<String> = second.identifiers().map(ToString::to_string).collect();
    assert_eq!(first_ids, second_ids);
}

#[test]
fn duplicate_identifiers_across_archives_dedupe_last_writer_wins() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let jar_a = write_items_jar(dir.path(), "a.jar", &["modx:iron_gear"]);
    let jar_b = write_items_jar(dir.path(), "b.jar", &["modx:iron_gear"]);

    let catalog = CatalogBuilder::new().build(&[jar_a, jar_b]).unwrap();
    assert_eq!(catalog.len(), 1);
    let gear = Identifier::parse("modx:iron_gear").unwrap();
    // Archives are visited in sorted order, so b.jar wrote last
    assert_eq!(catalog.get(&gear).unwrap().source, "b.jar");
}

#[test]
fn corrupt_archive_is_skipped_not_fatal() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let good = write_items_jar(dir.path(), "good.jar", &["modx:iron_gear"]);
    let corrupt = dir.path().join("corrupt.jar");
    fs::write(&corrupt, b"this is not a zip archive").unwrap();

    let catalog = CatalogBuilder::new().build(&[good, corrupt]).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.archives_scanned(), 1);
    assert_eq!(catalog.archives_skipped(), 1);
}

#[test]
fn all_archives_corrupt_is_fatal() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let corrupt = dir.path().join("corrupt.jar");
    fs::write(&corrupt, b"junk").unwrap();

    let err = CatalogBuilder::new().build(&[corrupt]).unwrap_err();
    assert_eq!(err.code, ErrorCode::CatalogBuildFailed);
}

#[test]
fn empty_archive_list_is_fatal() {
    init_test_logging();
    let err = CatalogBuilder::new().build(&[]).unwrap_err();
    assert_eq!(err.code, ErrorCode::CatalogBuildFailed);
}

#[test]
fn scan_mods_dir_finds_only_jars() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    write_items_jar(dir.path(), "a.jar", &["modx:iron_gear"]);
    fs::write(dir.path().join("readme.txt"), "not a jar").unwrap();

    let paths = CatalogBuilder::scan_mods_dir(dir.path()).unwrap();
    assert_eq!(paths.len(), 1);
    assert!(paths[0].ends_with("a.jar"));
}

#[test]
fn include_blocks_flag_filters_block_models() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let jar = write_test_jar(
        dir.path(),
        "modx.jar",
        &[
            "assets/modx/models/item/iron_gear.json",
            "assets/modx/models/block/gear_box.json",
        ],
    );
    let catalog = CatalogBuilder::new()
        .include_blocks(false)
        .build(&[jar])
        .unwrap();
    assert_eq!(catalog.len(), 1);
    assert!(catalog.contains(&Identifier::parse("modx:iron_gear").unwrap()));
}

#[tokio::test]
async fn build_with_timeout_returns_catalog() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let jar = write_items_jar(dir.path(), "a.jar", &["modx:iron_gear"]);

    let catalog = CatalogBuilder::new()
        .build_with_timeout(vec![jar], Duration::from_secs(30))
        .await
        .unwrap();
    assert_eq!(catalog.len(), 1);
}

#[test]
fn catalog_fixture_helper_round_trips() {
    let dir = TempDir::new().unwrap();
    let catalog = catalog_with_items(dir.path(), &["modx:iron_gear", "modx:copper_ingot"]);
    assert_eq!(catalog.len(), 2);
}
