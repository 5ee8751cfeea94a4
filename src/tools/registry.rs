// ABOUTME: Central registry for engine tools with category grouping and dispatch
// ABOUTME: Built once at startup, then used immutably for lookups and execution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors

//! # Tool Registry
//!
//! Central registry for engine tools, providing registration, lookup,
//! category grouping, and dispatch. The registry is built once at startup
//! and then used immutably; registered tools are `Arc`-wrapped for cheap
//! sharing.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use packsmith_core::errors::AppResult;

use super::context::ToolExecutionContext;
use super::errors::ToolError;
use super::implementations;
use super::result::ToolResult;
use super::traits::EngineTool;

/// Listing entry describing one registered tool to the calling agent layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Dispatch name
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Category the tool was registered under, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Capability flags as strings
    pub capabilities: String,
}

/// Central registry for engine tools
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn EngineTool>>,
    categories: HashMap<String, String>,
}

impl ToolRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every built-in tool registered
    #[must_use]
    pub fn with_builtin_tools() -> Self {
        let mut registry = Self::new();
        implementations::register_all(&mut registry);
        registry
    }

    /// Register a tool.
    ///
    /// # Errors
    ///
    /// Refuses duplicate names with [`ToolError::AlreadyRegistered`].
    pub fn register(&mut self, tool: Arc<dyn EngineTool>) -> Result<(), ToolError> {
        let name = tool.name().to_owned();
        if self.tools.contains_key(&name) {
            warn!("tool '{name}' is already registered, refusing duplicate");
            return Err(ToolError::AlreadyRegistered { tool_name: name });
        }
        debug!(
            "registering tool '{}' with capabilities: {}",
            name,
            tool.capabilities().describe()
        );
        self.tools.insert(name, tool);
        Ok(())
    }

    /// Register a tool under a category.
    ///
    /// # Errors
    ///
    /// Refuses duplicate names with [`ToolError::AlreadyRegistered`].
    pub fn register_with_category(
        &mut self,
        tool: Arc<dyn EngineTool>,
        category: &str,
    ) -> Result<(), ToolError> {
        let name = tool.name().to_owned();
        self.register(tool)?;
        self.categories.insert(name, category.to_owned());
        Ok(())
    }

    /// Get a tool by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn EngineTool>> {
        self.tools.get(name)
    }

    /// Check if a tool is registered
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Number of registered tools
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Describe every registered tool, sorted by name
    #[must_use]
    pub fn list(&self) -> Vec<ToolDescriptor> {
        let mut descriptors: Vec<ToolDescriptor> = self
            .tools
            .values()
            .map(|tool| ToolDescriptor {
                name: tool.name().to_owned(),
                description: tool.description().to_owned(),
                category: self.categories.get(tool.name()).cloned(),
                capabilities: tool.capabilities().describe(),
            })
            .collect();
        descriptors.sort_by(|a, b| a.name.cmp(&b.name));
        descriptors
    }

    /// Dispatch one tool call by name.
    ///
    /// # Errors
    ///
    /// Returns `TOOL_NOT_FOUND` for unregistered names; otherwise the
    /// tool's own typed error.
    pub async fn execute(
        &self,
        name: &str,
        ctx: &ToolExecutionContext,
        params: Value,
    ) -> AppResult<ToolResult> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::not_found(name))?;
        debug!(tool = name, request_id = ?ctx.request_id, "executing tool");
        tool.execute(ctx, params).await
    }
}
