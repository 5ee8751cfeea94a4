// ABOUTME: Authoritative identifier catalog built from installed mod archives
// ABOUTME: Scans jar metadata for item/block definitions; sole source of identifier validity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors

//! # Identifier Catalog
//!
//! Builds and holds the set of all valid item/block identifiers for the
//! currently installed mod set, extracted from each packaged archive's
//! asset metadata.
//!
//! The catalog is rebuilt from scratch whenever the mod set changes; there
//! is no implicit invalidation or file watching. Rebuilding with an
//! unchanged archive set yields an identical catalog: archives are visited
//! in sorted path order and entries live in an ordered map, so duplicate
//! definitions resolve the same way every time (last writer wins for
//! metadata, identifiers deduplicated).

mod archive;

use packsmith_core::errors::{AppError, AppResult};
use packsmith_core::ident::Identifier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Whether a catalogued identifier names an item or a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Defined under the archive's item models
    Item,
    /// Defined under the archive's block models
    Block,
}

/// Minimal descriptive metadata for one catalogued identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Human-readable name derived from the identifier path
    pub display_name: String,
    /// Item or block definition
    pub kind: EntryKind,
    /// File name of the archive that defined this identifier
    pub source: String,
}

/// The authoritative set of identifiers valid for the current mod set
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: BTreeMap<Identifier, CatalogEntry>,
    archives_scanned: usize,
    archives_skipped: usize,
}

impl Catalog {
    /// O(log n) membership check; the sole authority for identifier validity
    #[must_use]
    pub fn contains(&self, id: &Identifier) -> bool {
        self.entries.contains_key(id)
    }

    /// Metadata for one identifier, if catalogued
    #[must_use]
    pub fn get(&self, id: &Identifier) -> Option<&CatalogEntry> {
        self.entries.get(id)
    }

    /// Number of catalogued identifiers
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no identifiers
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate identifiers and metadata in lexical identifier order
    pub fn iter(&self) -> impl Iterator<Item = (&Identifier, &CatalogEntry)> {
        self.entries.iter()
    }

    /// Iterate identifiers in lexical order
    pub fn identifiers(&self) -> impl Iterator<Item = &Identifier> {
        self.entries.keys()
    }

    /// Number of archives that contributed entries
    #[must_use]
    pub const fn archives_scanned(&self) -> usize {
        self.archives_scanned
    }

    /// Number of archives skipped as unreadable or corrupt
    #[must_use]
    pub const fn archives_skipped(&self) -> usize {
        self.archives_skipped
    }
}

/// Builds a [`Catalog`] from mod archive paths
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    include_items: bool,
    include_blocks: bool,
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self {
            include_items: true,
            include_blocks: true,
        }
    }
}

impl CatalogBuilder {
    /// A builder cataloguing both item and block definitions
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether block-model definitions are catalogued (items always are)
    #[must_use]
    pub const fn include_blocks(mut self, include: bool) -> Self {
        self.include_blocks = include;
        self
    }

    /// Expand `<dir>/*.jar` into a sorted list of archive paths.
    ///
    /// # Errors
    ///
    /// Returns `CATALOG_BUILD_FAILED` when the pattern itself is invalid;
    /// an empty result is not an error here (the build rejects it).
    pub fn scan_mods_dir(dir: impl AsRef<Path>) -> AppResult<Vec<PathBuf>> {
        let pattern = dir.as_ref().join("*.jar");
        let pattern = pattern.to_string_lossy();
        let mut paths = Vec::new();
        let matches = glob::glob(&pattern).map_err(|err| {
            AppError::catalog_build(format!("invalid mods directory pattern '{pattern}'"))
                .with_source(err)
        })?;
        for entry in matches {
            match entry {
                Ok(path) => paths.push(path),
                Err(err) => warn!("skipping unreadable mods directory entry: {err}"),
            }
        }
        paths.sort();
        Ok(paths)
    }

    /// Scan the given archives into a fresh catalog.
    ///
    /// A single unreadable or corrupt archive is skipped with a warning;
    /// the build only fails when no archives were given or when zero
    /// identifiers result.
    ///
    /// # Errors
    ///
    /// Returns `CATALOG_BUILD_FAILED` in the fatal cases above. Any prior
    /// catalog held by the caller is unaffected.
    pub fn build(&self, archive_paths: &[PathBuf]) -> AppResult<Catalog> {
        if archive_paths.is_empty() {
            return Err(AppError::catalog_build(
                "no mod archives found; is the mods directory populated?",
            ));
        }

        let mut sorted: Vec<PathBuf> = archive_paths.to_vec();
        sorted.sort();
        sorted.dedup();

        let mut entries: BTreeMap<Identifier, CatalogEntry> = BTreeMap::new();
        let mut skipped = 0usize;

        for path in &sorted {
            match archive::extract_entries(path) {
                Ok(found) => {
                    for (id, entry) in found {
                        let keep = match entry.kind {
                            EntryKind::Item => self.include_items,
                            EntryKind::Block => self.include_blocks,
                        };
                        if keep {
                            // Last writer wins for metadata; the identifier
                            // set itself is deduplicated by the map.
                            entries.insert(id, entry);
                        }
                    }
                }
                Err(err) => {
                    warn!(archive = %path.display(), "skipping unreadable mod archive: {err}");
                    skipped += 1;
                }
            }
        }

        if entries.is_empty() {
            return Err(AppError::catalog_build(format!(
                "no identifiers extracted from {} archive(s) ({} skipped)",
                sorted.len(),
                skipped
            )));
        }

        info!(
            identifiers = entries.len(),
            archives = sorted.len() - skipped,
            skipped,
            "catalog build complete"
        );

        Ok(Catalog {
            entries,
            archives_scanned: sorted.len() - skipped,
            archives_skipped: skipped,
        })
    }

    /// Run [`CatalogBuilder::build`] on the blocking pool, bounded by a
    /// caller-supplied timeout.
    ///
    /// # Errors
    ///
    /// Timeout expiry is reported as `CATALOG_BUILD_FAILED`, like any other
    /// failed build attempt; the scan task is abandoned.
    pub async fn build_with_timeout(
        &self,
        archive_paths: Vec<PathBuf>,
        timeout: Duration,
    ) -> AppResult<Catalog> {
        let builder = self.clone();
        let scan = tokio::task::spawn_blocking(move || builder.build(&archive_paths));
        match tokio::time::timeout(timeout, scan).await {
            Err(_elapsed) => Err(AppError::catalog_build(format!(
                "archive scan exceeded the {}s timeout",
                timeout.as_secs()
            ))),
            Ok(Err(join_err)) => {
                Err(AppError::internal("archive scan task failed").with_source(join_err))
            }
            Ok(Ok(result)) => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_archive_list_is_fatal() {
        let err = CatalogBuilder::new().build(&[]).unwrap_err();
        assert_eq!(
            err.code,
            packsmith_core::errors::ErrorCode::CatalogBuildFailed
        );
    }

    #[test]
    fn default_catalog_is_empty() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        let id = Identifier::parse("minecraft:stick").unwrap();
        assert!(!catalog.contains(&id));
    }
}
