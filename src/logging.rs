// ABOUTME: Logging configuration and structured logging setup for the engine
// ABOUTME: Env-selected level and format; json for production, human formats for development
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors

//! Structured logging setup on `tracing`.
//!
//! `RUST_LOG` controls the filter, `LOG_FORMAT` selects json, pretty, or
//! compact output. Initialization is fallible rather than panicking so a
//! host embedding the engine alongside its own subscriber gets a typed
//! error instead of a crash.

use packsmith_core::constants::{env_config, service_names};
use packsmith_core::errors::{AppError, AppResult};
use std::env;
use std::io;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Human-readable format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log filter directive (level or full `RUST_LOG` syntax)
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
        let format = match env::var(env_config::LOG_FORMAT).as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };
        Self { level, format }
    }

    /// Initialize the global tracing subscriber.
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_ERROR` when a subscriber is already installed or
    /// the filter directive does not parse.
    pub fn init(&self) -> AppResult<()> {
        let env_filter = EnvFilter::try_new(&self.level).map_err(|err| {
            AppError::config(format!("invalid log filter '{}'", self.level)).with_source(err)
        })?;
        let registry = tracing_subscriber::registry().with(env_filter);

        let result = match self.format {
            LogFormat::Json => registry
                .with(fmt::layer().with_target(true).with_writer(io::stdout).json())
                .try_init(),
            LogFormat::Pretty => registry
                .with(fmt::layer().with_target(true).with_writer(io::stdout))
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stdout),
                )
                .try_init(),
        };
        result.map_err(|err| {
            AppError::config("tracing subscriber is already installed").with_source(err)
        })?;

        info!(
            service.name = service_names::PACKSMITH_ENGINE,
            service.version = env!("CARGO_PKG_VERSION"),
            log.level = %self.level,
            log.format = ?self.format,
            "logging initialized"
        );
        Ok(())
    }
}
