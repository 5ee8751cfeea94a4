// ABOUTME: Append-only patch artifact consumed by the server's scripting runtime
// ABOUTME: Statement rendering lives in script, durable appending in writer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors

//! # Patch Artifact
//!
//! Accepted recipe mutations are serialized as an ordered, append-only
//! script artifact the game server's scripting runtime loads at next
//! start. Treating mutations as a log of self-contained statements (rather
//! than rewriting a stateful document) sidesteps concurrent-writer hazards
//! and gives natural replay/audit semantics: the artifact grows
//! monotonically across agent sessions until manually reset.

mod script;
mod writer;

pub use script::render_statement;
pub use writer::PatchWriter;
