// ABOUTME: Criterion benchmarks for semantic index build and search
// ABOUTME: Exercises realistic catalog sizes (tens of thousands of identifiers)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors
#![allow(clippy::unwrap_used, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use packsmith::catalog::CatalogBuilder;
use packsmith::semantic::SemanticIndex;
use packsmith_core::constants::defaults;
use std::fs::File;
use std::io::Write;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

const MATERIALS: &[&str] = &[
    "iron", "copper", "gold", "steel", "bronze", "tin", "zinc", "lead", "silver", "nickel",
];
const PARTS: &[&str] = &[
    "gear", "plate", "rod", "wire", "ingot", "nugget", "dust", "block", "casing", "frame",
];

/// Write one synthetic jar defining `count` item identifiers
fn synthetic_jar(dir: &TempDir, count: usize) -> std::path::PathBuf {
    let path = dir.path().join("synthetic.jar");
    let file = File::create(&path).unwrap();
    let mut jar = zip::ZipWriter::new(file);
    let options = SimpleFileOptions::default();
    for i in 0..count {
        let material = MATERIALS[i % MATERIALS.len()];
        let part = PARTS[(i / MATERIALS.len()) % PARTS.len()];
        let name = format!("assets/modx/models/item/{material}_{part}_{i}.json");
        jar.start_file(name, options).unwrap();
        jar.write_all(b"{}").unwrap();
    }
    jar.finish().unwrap();
    path
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("semantic_search");
    for size in [1_000usize, 10_000, 50_000] {
        let dir = TempDir::new().unwrap();
        let jar = synthetic_jar(&dir, size);
        let catalog = CatalogBuilder::new().build(&[jar]).unwrap();
        let index = SemanticIndex::build(&catalog, defaults::EMBEDDING_DIM);

        group.bench_with_input(BenchmarkId::new("search", size), &index, |b, index| {
            b.iter(|| black_box(index.search("copper gear", 8).unwrap()));
        });
    }
    group.finish();
}

fn bench_index_build(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let jar = synthetic_jar(&dir, 10_000);
    let catalog = CatalogBuilder::new().build(&[jar]).unwrap();

    c.bench_function("index_build_10k", |b| {
        b.iter(|| black_box(SemanticIndex::build(&catalog, defaults::EMBEDDING_DIM)));
    });
}

criterion_group!(benches, bench_search, bench_index_build);
criterion_main!(benches);
