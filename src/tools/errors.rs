// ABOUTME: Defines tool-specific error types for the tool surface
// ABOUTME: Structured errors that convert into the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors

//! # Tool Error Types
//!
//! Errors specific to tool dispatch and parameter handling. These
//! complement the main [`AppError`] system with tool-name context and
//! convert into it for response formatting.

use thiserror::Error;

use packsmith_core::errors::AppError;

/// Errors specific to tool operations
#[derive(Debug, Clone, Error)]
pub enum ToolError {
    /// Tool was not found in the registry
    #[error("tool '{tool_name}' not found")]
    NotFound {
        /// Name of the requested tool
        tool_name: String,
    },
    /// Tool parameters did not deserialize
    #[error("invalid parameters for '{tool_name}': {reason}")]
    InvalidParameters {
        /// Name of the tool
        tool_name: String,
        /// Reason the parameters are invalid
        reason: String,
    },
    /// Tool is already registered (for registry operations)
    #[error("tool '{tool_name}' is already registered")]
    AlreadyRegistered {
        /// Name of the already-registered tool
        tool_name: String,
    },
}

impl ToolError {
    /// Create a "not found" error
    #[must_use]
    pub fn not_found(tool_name: impl Into<String>) -> Self {
        Self::NotFound {
            tool_name: tool_name.into(),
        }
    }

    /// Create an invalid-parameters error
    #[must_use]
    pub fn invalid_parameters(tool_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameters {
            tool_name: tool_name.into(),
            reason: reason.into(),
        }
    }
}

impl From<ToolError> for AppError {
    fn from(error: ToolError) -> Self {
        match &error {
            ToolError::NotFound { tool_name } => Self::tool_not_found(tool_name.as_str()),
            ToolError::InvalidParameters { tool_name, reason } => Self::invalid_input(format!(
                "invalid parameters for '{tool_name}': {reason}"
            )),
            ToolError::AlreadyRegistered { tool_name } => {
                Self::invalid_input(format!("tool '{tool_name}' is already registered"))
            }
        }
    }
}
