// ABOUTME: Extracts item/block identifiers from one mod archive's asset metadata
// ABOUTME: Follows the mod loader's fixed assets/<ns>/models/{item,block} path convention
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors

//! Per-archive identifier extraction.
//!
//! Mod archives are plain zip containers. Every
//! `assets/<namespace>/models/item/<name>.json` entry defines item
//! `<namespace>:<name>`, and likewise under `models/block/` for blocks;
//! `<name>` may contain subdirectories. Nothing inside the model files
//! needs to be read; the paths alone carry the identifier set.

use super::{CatalogEntry, EntryKind};
use packsmith_core::errors::{AppError, AppResult};
use packsmith_core::ident::Identifier;
use std::fs::File;
use std::path::Path;
use tracing::debug;
use zip::ZipArchive;

const MODEL_SUFFIX: &str = ".json";

/// Scan one archive for identifier definitions.
///
/// # Errors
///
/// Returns `CATALOG_BUILD_FAILED` when the archive cannot be opened or is
/// not a readable zip container. The caller treats that as a skippable
/// per-archive failure.
pub(crate) fn extract_entries(path: &Path) -> AppResult<Vec<(Identifier, CatalogEntry)>> {
    let file = File::open(path).map_err(|err| {
        AppError::catalog_build(format!("cannot open mod archive '{}'", path.display()))
            .with_archive(path.display().to_string())
            .with_source(err)
    })?;
    let archive = ZipArchive::new(file).map_err(|err| {
        AppError::catalog_build(format!("'{}' is not a readable archive", path.display()))
            .with_archive(path.display().to_string())
            .with_source(err)
    })?;

    let source = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

    let names: Vec<String> = archive.file_names().map(str::to_owned).collect();
    let mut entries = Vec::new();

    for name in names {
        let Some((id, kind)) = classify_model_path(&name) else {
            continue;
        };
        match Identifier::parse(&id) {
            Ok(identifier) => {
                let entry = CatalogEntry {
                    display_name: identifier.display_name(),
                    kind,
                    source: source.clone(),
                };
                entries.push((identifier, entry));
            }
            Err(_) => {
                // Some archives ship template or placeholder models whose
                // names fall outside the identifier alphabet; they cannot
                // be referenced in-game and are safe to drop.
                debug!(archive = %source, entry = %name, "ignoring non-identifier model path");
            }
        }
    }

    debug!(archive = %source, identifiers = entries.len(), "archive scan complete");
    Ok(entries)
}

/// Map one archive entry path to an identifier string and kind, if it is a
/// model definition.
fn classify_model_path(entry_path: &str) -> Option<(String, EntryKind)> {
    let rest = entry_path.strip_prefix("assets/")?;
    let (namespace, rest) = rest.split_once('/')?;
    let rest = rest.strip_prefix("models/")?;
    let (kind_dir, model_path) = rest.split_once('/')?;
    let kind = match kind_dir {
        "item" => EntryKind::Item,
        "block" => EntryKind::Block,
        _ => return None,
    };
    let name = model_path.strip_suffix(MODEL_SUFFIX)?;
    if namespace.is_empty() || name.is_empty() {
        return None;
    }
    Some((format!("{namespace}:{name}"), kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_item_and_block_models() {
        assert_eq!(
            classify_model_path("assets/modx/models/item/iron_gear.json"),
            Some(("modx:iron_gear".to_owned(), EntryKind::Item))
        );
        assert_eq!(
            classify_model_path("assets/modx/models/block/gear_box.json"),
            Some(("modx:gear_box".to_owned(), EntryKind::Block))
        );
    }

    #[test]
    fn keeps_nested_model_paths() {
        assert_eq!(
            classify_model_path("assets/modx/models/item/tools/iron_gear.json"),
            Some(("modx:tools/iron_gear".to_owned(), EntryKind::Item))
        );
    }

    #[test]
    fn ignores_unrelated_archive_entries() {
        assert!(classify_model_path("assets/modx/textures/item/iron_gear.png").is_none());
        assert!(classify_model_path("assets/modx/models/entity/golem.json").is_none());
        assert!(classify_model_path("data/modx/recipes/iron_gear.json").is_none());
        assert!(classify_model_path("META-INF/MANIFEST.MF").is_none());
    }
}
