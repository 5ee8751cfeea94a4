// ABOUTME: Immutable embedding index resolving free-text queries to catalogued identifiers
// ABOUTME: Built once per catalog version; every returned identifier is catalogued by construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors

//! # Semantic Index
//!
//! An embedding-based nearest-neighbor index over catalog identifiers,
//! used to resolve natural-language queries ("that copper gear thing") to
//! exact identifiers. The index is immutable after construction and must
//! be rebuilt (not mutated) whenever the catalog changes.
//!
//! Because the index is built exclusively from catalogued identifiers,
//! every search result passes the validator by construction.

mod embedding;

pub use embedding::TokenEmbedder;

use crate::catalog::Catalog;
use packsmith_core::errors::{AppError, AppResult};
use packsmith_core::ident::Identifier;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, info};

/// One ranked search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// A catalogued identifier
    pub identifier: Identifier,
    /// Cosine similarity against the query, higher is closer
    pub score: f32,
}

/// Immutable vector index over catalogued identifiers
#[derive(Debug, Clone)]
pub struct SemanticIndex {
    embedder: TokenEmbedder,
    entries: Vec<(Identifier, Vec<f32>)>,
}

impl SemanticIndex {
    /// Embed every catalogued identifier into a fresh index.
    ///
    /// The embedded text combines namespace, path, and display name so
    /// queries match on any of them.
    #[must_use]
    pub fn build(catalog: &Catalog, dim: usize) -> Self {
        let embedder = TokenEmbedder::new(dim);
        let entries: Vec<(Identifier, Vec<f32>)> = catalog
            .iter()
            .map(|(id, entry)| {
                let text = format!("{} {} {}", id.namespace(), id.path(), entry.display_name);
                (id.clone(), embedder.embed(&text))
            })
            .collect();
        info!(identifiers = entries.len(), dim, "semantic index built");
        Self { embedder, entries }
    }

    /// Number of indexed identifiers
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rank identifiers by similarity to the query text.
    ///
    /// Results are ordered by descending score with ties broken by
    /// identifier lexical order, so equal inputs always rank identically.
    /// `top_k` values beyond the index size are clamped.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` when `top_k` is zero.
    pub fn search(&self, query: &str, top_k: usize) -> AppResult<Vec<SearchHit>> {
        if top_k == 0 {
            return Err(AppError::invalid_input(
                "top_k must be a positive integer",
            ));
        }
        let top_k = top_k.min(self.entries.len());
        let query_vec = self.embedder.embed(query);

        let mut hits: Vec<SearchHit> = self
            .entries
            .iter()
            .map(|(id, vec)| SearchHit {
                identifier: id.clone(),
                score: embedding::dot(&query_vec, vec),
            })
            .collect();
        hits.sort_by(hit_ordering);
        hits.truncate(top_k);

        debug!(query, top_k, returned = hits.len(), "semantic search");
        Ok(hits)
    }
}

fn hit_ordering(a: &SearchHit, b: &SearchHit) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.identifier.cmp(&b.identifier))
}
