// ABOUTME: Defines ToolResult for tool execution responses
// ABOUTME: Success payloads and error payloads share one structured shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors

//! # Tool Result Types
//!
//! The result type returned by tool execution. Error results carry the
//! serialized [`ErrorResponse`](packsmith_core::errors::ErrorResponse)
//! payload so the calling agent layer always receives one structured
//! shape.

use packsmith_core::errors::{AppError, AppResult, ErrorResponse};
use serde::Serialize;
use serde_json::Value;

/// Result returned by tool execution
#[derive(Debug, Clone)]
pub struct ToolResult {
    /// The result value to return to the caller
    pub content: Value,
    /// Whether this result represents an error condition
    pub is_error: bool,
}

impl ToolResult {
    /// Create a successful result with just content
    #[must_use]
    pub const fn ok(content: Value) -> Self {
        Self {
            content,
            is_error: false,
        }
    }

    /// Create an error result carrying the structured error payload
    #[must_use]
    pub fn error(error: AppError) -> Self {
        let response = ErrorResponse::from(error);
        let content = serde_json::to_value(&response)
            .unwrap_or_else(|_| Value::String(response.error.message));
        Self {
            content,
            is_error: true,
        }
    }

    /// Create a result from a serializable value.
    ///
    /// # Errors
    ///
    /// Returns `INTERNAL_ERROR` when the value cannot be converted to JSON.
    pub fn from_serializable<T: Serialize>(value: &T) -> AppResult<Self> {
        let content = serde_json::to_value(value)
            .map_err(|err| AppError::internal("tool payload failed to serialize").with_source(err))?;
        Ok(Self::ok(content))
    }
}

impl Default for ToolResult {
    fn default() -> Self {
        Self::ok(Value::Null)
    }
}
