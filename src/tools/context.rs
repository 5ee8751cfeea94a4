// ABOUTME: Defines ToolExecutionContext which hands tools the shared engine state
// ABOUTME: Replaces scattered parameter passing with one context object per request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors

//! # Tool Execution Context
//!
//! One context object per tool request, carrying the shared
//! [`EngineState`] and a request id for tracing. `EngineState` is
//! `Arc`-shared: contexts are cheap to clone and many requests observe
//! the same catalog/corpus snapshots.

use crate::engine::EngineState;
use std::fmt;
use std::sync::Arc;

/// Context provided to every tool execution
#[derive(Clone)]
pub struct ToolExecutionContext {
    /// Access to the engine's live components
    pub engine: Arc<EngineState>,
    /// Request ID for tracing/logging
    pub request_id: Option<String>,
}

impl ToolExecutionContext {
    /// A context over the given engine state
    #[must_use]
    pub fn new(engine: Arc<EngineState>) -> Self {
        Self {
            engine,
            request_id: None,
        }
    }

    /// Attach a request id for tracing
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}

impl fmt::Debug for ToolExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolExecutionContext")
            .field("request_id", &self.request_id)
            .finish_non_exhaustive()
    }
}
