// ABOUTME: Unified error handling system for the packsmith engine
// ABOUTME: Defines standard error codes, the AppError type, and agent-facing response formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors

//! # Unified Error Handling System
//!
//! This module provides the centralized error handling system for the
//! packsmith engine. It defines standard error types, error codes, and the
//! structured response format returned to the calling agent layer, ensuring
//! consistent error handling across all modules.
//!
//! Nothing in the engine terminates the hosting process: every failure path
//! returns a typed [`AppError`], and validation failures in particular are
//! ordinary recoverable return values the caller is expected to retry with
//! corrected input.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Build-time failures (1000-1999)
    /// A catalog build attempt failed; any prior catalog remains usable
    #[serde(rename = "CATALOG_BUILD_FAILED")]
    CatalogBuildFailed = 1000,
    /// A recipe dump source could not be read or contained no dump section
    #[serde(rename = "CORPUS_INGEST_FAILED")]
    CorpusIngestFailed = 1001,

    // Validation (3000-3999)
    /// An identifier is not present in the active catalog
    #[serde(rename = "UNKNOWN_IDENTIFIER")]
    UnknownIdentifier = 3000,
    /// The provided input is structurally invalid
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3001,
    /// A numeric parameter is outside its acceptable range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3002,

    // Persistence (5000-5999)
    /// The patch artifact could not be appended to or flushed
    #[serde(rename = "PERSISTENCE_FAILED")]
    PersistenceFailed = 5000,

    // Configuration (6000-6999)
    /// Engine configuration is missing or invalid
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,

    // Tool dispatch (7000-7999)
    /// The requested tool is not registered
    #[serde(rename = "TOOL_NOT_FOUND")]
    ToolNotFound = 7000,

    // Internal (9000-9999)
    /// An unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Whether the caller can expect to recover by correcting its request.
    ///
    /// Validation failures are the expected outcome of a malformed request
    /// and should be retried with corrected identifiers or parameters;
    /// build and persistence failures need an operator decision.
    #[must_use]
    pub const fn is_recoverable(self) -> bool {
        matches!(
            self,
            Self::UnknownIdentifier | Self::InvalidInput | Self::ValueOutOfRange
        )
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::CatalogBuildFailed => "Identifier catalog build failed",
            Self::CorpusIngestFailed => "Recipe dump could not be ingested",
            Self::UnknownIdentifier => "Identifier is not present in the catalog",
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::PersistenceFailed => "Durable artifact write failed",
            Self::ConfigError => "Configuration error encountered",
            Self::ToolNotFound => "The requested tool is not registered",
            Self::InternalError => "An internal engine error occurred",
        }
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Request ID for tracing
    pub request_id: Option<String>,
    /// Mod archive path, for catalog build failures
    pub archive: Option<String>,
    /// Recipe record id, for corpus/statement failures
    pub record_id: Option<String>,
    /// The offending identifier, for validation failures
    pub identifier: Option<String>,
    /// The role the offending identifier was used in (ingredient, result, ...)
    pub role: Option<String>,
    /// Additional key-value context
    pub details: serde_json::Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            request_id: None,
            archive: None,
            record_id: None,
            identifier: None,
            role: None,
            details: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

/// Unified error type for the engine
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add a request ID to the error context
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.context.request_id = Some(request_id.into());
        self
    }

    /// Add the offending archive path to the error context
    #[must_use]
    pub fn with_archive(mut self, archive: impl Into<String>) -> Self {
        self.context.archive = Some(archive.into());
        self
    }

    /// Add the offending recipe record id to the error context
    #[must_use]
    pub fn with_record_id(mut self, record_id: impl Into<String>) -> Self {
        self.context.record_id = Some(record_id.into());
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Whether the caller can recover by correcting its request
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        self.code.is_recoverable()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Structured error response returned to the calling agent layer
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Stable machine-readable error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Whether a corrected retry can succeed
    pub recoverable: bool,
    /// The offending identifier, when the failure is identifier-related
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// The role the offending identifier was used in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Request ID for tracing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Additional details
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub details: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                recoverable: error.code.is_recoverable(),
                identifier: error.context.identifier,
                role: error.context.role,
                request_id: error.context.request_id,
                details: error.context.details,
            },
        }
    }
}

/// Convenience constructors for the engine's error kinds
impl AppError {
    /// A catalog build attempt failed
    pub fn catalog_build(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::CatalogBuildFailed, message)
    }

    /// A recipe dump source could not be ingested
    pub fn corpus_ingest(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::CorpusIngestFailed, message)
    }

    /// An identifier was not found in the active catalog.
    ///
    /// `role` names how the identifier was being used (ingredient, result,
    /// catalyst, pattern key, substitution) so the caller can correct the
    /// exact offending parameter.
    pub fn unknown_identifier(identifier: impl Into<String>, role: impl Into<String>) -> Self {
        let identifier = identifier.into();
        let role = role.into();
        let mut err = Self::new(
            ErrorCode::UnknownIdentifier,
            format!("identifier '{identifier}' used as {role} is not in the catalog"),
        );
        err.context.identifier = Some(identifier);
        err.context.role = Some(role);
        err
    }

    /// The provided input is structurally invalid
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// A numeric parameter is outside its acceptable range
    pub fn value_out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// The patch artifact could not be written or flushed
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PersistenceFailed, message)
    }

    /// Engine configuration is missing or invalid
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// The requested tool is not registered
    pub fn tool_not_found(tool_name: impl Into<String>) -> Self {
        let tool_name = tool_name.into();
        Self::new(
            ErrorCode::ToolNotFound,
            format!("tool '{tool_name}' is not registered"),
        )
    }

    /// An unexpected internal failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}
