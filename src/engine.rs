// ABOUTME: Shared engine state container handed to the agent-facing tool surface
// ABOUTME: Rebuilds construct fully off to the side and swap in atomically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors

//! # Engine State
//!
//! One container owning the current catalog, corpus, semantic index, and
//! patch writer. The engine is driven by a single caller at a time, but
//! the container still guarantees that a rebuild either fully replaces the
//! prior catalog/corpus or leaves it intact: new state is constructed
//! completely before the swap, and the semantic index is rebuilt (never
//! mutated) together with the catalog it was built from.

use crate::catalog::{Catalog, CatalogBuilder};
use crate::config::EngineConfig;
use crate::corpus::RecipeCorpus;
use crate::patch::PatchWriter;
use crate::semantic::SemanticIndex;
use crate::synthesis::RecipeSynthesizer;
use crate::validator::IdentifierValidator;
use packsmith_core::errors::AppResult;
use packsmith_core::recipe::RawRecipeRecord;
use packsmith_core::statement::RecipeStatement;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::info;

/// Shared container for the engine's live components
pub struct EngineState {
    config: EngineConfig,
    catalog: RwLock<Arc<Catalog>>,
    corpus: RwLock<Arc<RecipeCorpus>>,
    index: RwLock<Arc<SemanticIndex>>,
    patch: Mutex<PatchWriter>,
}

impl EngineState {
    /// Create engine state with an empty catalog and corpus, opening (or
    /// creating) the patch artifact configured in `config`.
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_ERROR` for invalid configuration and
    /// `PERSISTENCE_FAILED` when the patch artifact cannot be opened.
    pub fn new(config: EngineConfig) -> AppResult<Self> {
        config.validate()?;
        let patch = PatchWriter::open(&config.patch_script_path)?;
        let catalog = Arc::new(Catalog::default());
        let index = Arc::new(SemanticIndex::build(&catalog, config.embedding_dim));
        Ok(Self {
            config,
            catalog: RwLock::new(catalog),
            corpus: RwLock::new(Arc::new(RecipeCorpus::default())),
            index: RwLock::new(index),
            patch: Mutex::new(patch),
        })
    }

    /// The engine configuration
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The current catalog snapshot
    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// The current corpus snapshot
    #[must_use]
    pub fn corpus(&self) -> Arc<RecipeCorpus> {
        Arc::clone(&self.corpus.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// The current semantic index snapshot
    #[must_use]
    pub fn semantic_index(&self) -> Arc<SemanticIndex> {
        Arc::clone(&self.index.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// A validator over the current catalog snapshot
    #[must_use]
    pub fn validator(&self) -> IdentifierValidator {
        IdentifierValidator::new(self.catalog())
    }

    /// A synthesizer validating against the current catalog snapshot
    #[must_use]
    pub fn synthesizer(&self) -> RecipeSynthesizer {
        RecipeSynthesizer::new(self.validator())
    }

    /// Install a freshly built catalog, rebuilding the semantic index from
    /// it and swapping both in together.
    pub fn install_catalog(&self, catalog: Catalog) {
        let catalog = Arc::new(catalog);
        let index = Arc::new(SemanticIndex::build(&catalog, self.config.embedding_dim));
        // Both snapshots are fully built before either swap; requests are
        // serialized by the single caller, so no request straddles them.
        *self.index.write().unwrap_or_else(PoisonError::into_inner) = index;
        *self.catalog.write().unwrap_or_else(PoisonError::into_inner) = catalog;
        info!("catalog and semantic index swapped in");
    }

    /// Rebuild the catalog from the given archives under the configured
    /// timeout, leaving the prior catalog intact on failure.
    ///
    /// # Errors
    ///
    /// Returns `CATALOG_BUILD_FAILED` on any failed or timed-out build
    /// attempt.
    pub async fn rebuild_catalog(&self, archive_paths: Vec<PathBuf>) -> AppResult<()> {
        let catalog = CatalogBuilder::new()
            .build_with_timeout(archive_paths, self.config.catalog_timeout)
            .await?;
        self.install_catalog(catalog);
        Ok(())
    }

    /// Ingest dump records into a fresh corpus (annotated against the
    /// current catalog) and swap it in.
    pub fn install_corpus(&self, records: Vec<RawRecipeRecord>) {
        let catalog = self.catalog();
        let corpus = Arc::new(RecipeCorpus::ingest(records, Some(&catalog)));
        *self.corpus.write().unwrap_or_else(PoisonError::into_inner) = corpus;
    }

    /// Append one accepted statement to the patch artifact and flush it
    /// durably before returning.
    ///
    /// # Errors
    ///
    /// Returns `PERSISTENCE_FAILED`; artifact state before the failed
    /// append is guaranteed intact.
    pub fn append_statement(&self, statement: &RecipeStatement) -> AppResult<()> {
        let mut patch = self.patch.lock().unwrap_or_else(PoisonError::into_inner);
        patch.append(statement)?;
        patch.flush()
    }

    /// Statements appended to the artifact by this engine instance
    #[must_use]
    pub fn statements_appended(&self) -> u64 {
        self.patch
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .statements_appended()
    }
}
