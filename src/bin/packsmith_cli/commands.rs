// ABOUTME: Command implementations for the packsmith CLI
// ABOUTME: Thin wrappers over the engine library with human-readable output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors

//! CLI command implementations.

use anyhow::{bail, Context, Result};
use packsmith::catalog::{Catalog, CatalogBuilder};
use packsmith::config::EngineConfig;
use packsmith::corpus::{dump, RecipeCorpus};
use packsmith::semantic::SemanticIndex;
use packsmith::validator::IdentifierValidator;
use packsmith_core::ident::Identifier;
use packsmith_core::recipe::RecipeRole;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;

async fn build_catalog(config: &EngineConfig) -> Result<Catalog> {
    let paths = CatalogBuilder::scan_mods_dir(&config.mods_dir)?;
    println!(
        "Found {} jar archive(s) in {}",
        paths.len(),
        config.mods_dir.display()
    );
    let catalog = CatalogBuilder::new()
        .build_with_timeout(paths, config.catalog_timeout)
        .await
        .context("catalog build failed")?;
    Ok(catalog)
}

/// `catalog build`: scan the mods directory and report statistics
pub async fn catalog_build(config: &EngineConfig) -> Result<()> {
    let catalog = build_catalog(config).await?;
    println!(
        "Catalogued {} identifier(s) from {} archive(s) ({} skipped)",
        catalog.len(),
        catalog.archives_scanned(),
        catalog.archives_skipped()
    );
    Ok(())
}

/// `catalog export`: write the sorted identifier list, one per line
pub async fn catalog_export(config: &EngineConfig, output: &Path) -> Result<()> {
    let catalog = build_catalog(config).await?;
    let mut text = String::new();
    for id in catalog.identifiers() {
        writeln!(&mut text, "{id}")?;
    }
    std::fs::write(output, text)
        .with_context(|| format!("cannot write identifier list to {}", output.display()))?;
    println!(
        "Wrote {} identifier(s) to {}",
        catalog.len(),
        output.display()
    );
    Ok(())
}

/// `dump capture`: scrape the newest dump section from the server log into
/// the cache file
pub fn dump_capture(config: &EngineConfig, log_override: Option<PathBuf>) -> Result<()> {
    let log_path = log_override.unwrap_or_else(|| config.dump_log_path.clone());
    let records = dump::capture_from_log(&log_path)?;
    dump::save_cache(&config.dump_cache_path, &records)?;
    println!(
        "Captured {} recipe record(s) from {} into {}",
        records.len(),
        log_path.display(),
        config.dump_cache_path.display()
    );
    Ok(())
}

/// `search`: resolve free text to catalogued identifiers
pub async fn search(config: &EngineConfig, query: &str, top_k: Option<usize>) -> Result<()> {
    let catalog = build_catalog(config).await?;
    let index = SemanticIndex::build(&catalog, config.embedding_dim);
    let hits = index.search(query, top_k.unwrap_or(config.default_top_k))?;

    if hits.is_empty() {
        println!("No matches for '{query}'");
        return Ok(());
    }
    println!("Top matches for '{query}':");
    for hit in hits {
        let display_name = catalog
            .get(&hit.identifier)
            .map_or(String::new(), |entry| format!("  ({})", entry.display_name));
        println!("  {:.4}  {}{display_name}", hit.score, hit.identifier);
    }
    Ok(())
}

/// `recipes find`: exact-match recipe lookup over the cached dump
pub async fn recipes_find(config: &EngineConfig, identifier: &str, role: &str) -> Result<()> {
    let role = match role {
        "ingredient" => RecipeRole::Ingredient,
        "result" => RecipeRole::Result,
        "either" => RecipeRole::Either,
        other => bail!("unknown role '{other}', expected ingredient, result, or either"),
    };
    let identifier = Identifier::parse(identifier)?;

    let catalog = Arc::new(build_catalog(config).await?);
    IdentifierValidator::new(Arc::clone(&catalog)).require_known(&identifier, "query")?;

    let records = dump::load_cache(&config.dump_cache_path)?;
    let corpus = RecipeCorpus::ingest(records, Some(&catalog));
    let recipes = corpus.find_by_identifier(&identifier, role);

    println!(
        "{} recipe(s) reference {} ({} in corpus, {} opaque)",
        recipes.len(),
        identifier,
        corpus.len(),
        corpus.opaque_count()
    );
    for recipe in recipes {
        println!("  {}  [{:?}]", recipe.id, recipe.recipe_type);
    }
    Ok(())
}
