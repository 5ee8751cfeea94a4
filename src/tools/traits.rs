// ABOUTME: Defines the EngineTool trait and ToolCapabilities for the tool surface
// ABOUTME: Tools implement this trait to be registered and executed via the ToolRegistry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors

//! # Tool Trait and Capabilities
//!
//! All tools implement [`EngineTool`], which provides:
//! - Tool metadata (name, description)
//! - Capability flags for discovery and host-side reasoning
//! - Async execution with a shared context

use async_trait::async_trait;
use bitflags::bitflags;
use serde_json::Value;

use packsmith_core::errors::AppResult;

use super::context::ToolExecutionContext;
use super::result::ToolResult;

bitflags! {
    /// Capabilities a tool declares for filtering and discovery
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ToolCapabilities: u8 {
        /// Tool consults the identifier catalog
        const READS_CATALOG = 0b0000_0001;
        /// Tool queries the recipe corpus
        const READS_CORPUS = 0b0000_0010;
        /// Tool appends statements to the patch artifact
        const WRITES_PATCH = 0b0000_0100;
        /// Tool performs semantic search
        const SEARCH = 0b0000_1000;
    }
}

impl ToolCapabilities {
    /// Check if the tool writes to the patch artifact
    #[must_use]
    pub const fn writes_patch(self) -> bool {
        self.contains(Self::WRITES_PATCH)
    }

    /// Get a description of all enabled capabilities for logging
    #[must_use]
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if self.contains(Self::READS_CATALOG) {
            parts.push("reads_catalog");
        }
        if self.contains(Self::READS_CORPUS) {
            parts.push("reads_corpus");
        }
        if self.contains(Self::WRITES_PATCH) {
            parts.push("writes_patch");
        }
        if self.contains(Self::SEARCH) {
            parts.push("search");
        }
        parts.join(", ")
    }
}

/// The trait every engine tool implements.
///
/// Tools are stateless: everything they need arrives through the
/// execution context, so one registered instance serves every request.
#[async_trait]
pub trait EngineTool: Send + Sync {
    /// Unique tool name used for dispatch
    fn name(&self) -> &'static str;

    /// Human-readable description surfaced to the calling agent layer
    fn description(&self) -> &'static str;

    /// Capability flags
    fn capabilities(&self) -> ToolCapabilities;

    /// Execute with JSON parameters.
    ///
    /// # Errors
    ///
    /// Implementations return typed [`AppError`](packsmith_core::errors::AppError)
    /// values; validation failures are expected outcomes the caller can
    /// correct and retry.
    async fn execute(&self, ctx: &ToolExecutionContext, params: Value) -> AppResult<ToolResult>;
}
