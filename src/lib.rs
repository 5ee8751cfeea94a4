// ABOUTME: Main library entry point for the packsmith recipe modification engine
// ABOUTME: Catalog, corpus, semantic search, validation, synthesis, and patch writing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors

#![deny(unsafe_code)]

//! # Packsmith
//!
//! A grounded recipe modification engine for modded Minecraft servers.
//! Packsmith lets an automated caller (typically an LLM agent layer) locate
//! in-game items and rewrite crafting recipes without ever referencing a
//! nonexistent identifier or emitting a malformed recipe script.
//!
//! ## Architecture
//!
//! - **Catalog**: authoritative identifier set extracted from the installed
//!   mod archives
//! - **Corpus**: parsed, indexed snapshot of every recipe dumped by the
//!   running server
//! - **Semantic**: embedding-based search resolving free text to
//!   catalogued identifiers
//! - **Validator**: the single gate deciding whether an identifier is real
//! - **Synthesis**: validated constructors for recipe-mutation statements
//! - **Patch**: append-only script artifact consumed by the server's
//!   scripting runtime
//! - **Tools**: the typed tool surface exposed to the calling agent layer
//!
//! ## Example
//!
//! ```rust,no_run
//! use packsmith::catalog::CatalogBuilder;
//! use packsmith::semantic::SemanticIndex;
//! use packsmith_core::constants::defaults;
//! use packsmith_core::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let paths = CatalogBuilder::scan_mods_dir("server/mods")?;
//!     let catalog = CatalogBuilder::new().build(&paths)?;
//!     let index = SemanticIndex::build(&catalog, defaults::EMBEDDING_DIM);
//!     for hit in index.search("iron gear", 5)? {
//!         println!("{} ({:.3})", hit.identifier, hit.score);
//!     }
//!     Ok(())
//! }
//! ```

/// Identifier catalog built from installed mod archives
pub mod catalog;

/// Engine configuration from environment variables
pub mod config;

/// Recipe corpus: dump ingestion and identifier-indexed lookup
pub mod corpus;

/// Shared engine state container handed to the tool surface
pub mod engine;

/// Logging configuration and structured logging setup
pub mod logging;

/// Append-only patch artifact serialization and writing
pub mod patch;

/// Embedding-based semantic search over catalogued identifiers
pub mod semantic;

/// Validated constructors for recipe-mutation statements
pub mod synthesis;

/// Agent-facing tool trait, registry, and implementations
pub mod tools;

/// The single identifier-validity gate
pub mod validator;
