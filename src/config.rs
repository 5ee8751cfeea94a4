// ABOUTME: Environment-based engine configuration with typed enums and validated limits
// ABOUTME: Every knob has a default; env vars only override
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors

//! Environment-based configuration for the engine.
//!
//! Configuration is environment-only: the provisioning layer exports
//! `PACKSMITH_*` variables and the engine reads them once at startup.
//! Paths are resolved relative to the working directory the provisioning
//! layer sets up.

use packsmith_core::constants::{defaults, env_config};
use packsmith_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Runtime environment type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Engine configuration, read once at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Directory of installed mod archives
    pub mods_dir: PathBuf,
    /// Server log file scanned for recipe dumps
    pub dump_log_path: PathBuf,
    /// Cache file for captured recipe dumps
    pub dump_cache_path: PathBuf,
    /// Patch artifact consumed by the server scripting runtime
    pub patch_script_path: PathBuf,
    /// Semantic index embedding dimension
    pub embedding_dim: usize,
    /// Default number of search results
    pub default_top_k: usize,
    /// Catalog build timeout
    pub catalog_timeout: Duration,
    /// Runtime environment
    pub environment: Environment,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mods_dir: PathBuf::from(defaults::MODS_DIR),
            dump_log_path: PathBuf::from(defaults::DUMP_LOG_PATH),
            dump_cache_path: PathBuf::from(defaults::DUMP_CACHE_PATH),
            patch_script_path: PathBuf::from(defaults::PATCH_SCRIPT_PATH),
            embedding_dim: defaults::EMBEDDING_DIM,
            default_top_k: defaults::TOP_K,
            catalog_timeout: Duration::from_secs(defaults::CATALOG_TIMEOUT_SECS),
            environment: Environment::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_ERROR` when a numeric variable does not parse or a
    /// validated limit is violated.
    pub fn from_env() -> AppResult<Self> {
        let base = Self::default();
        let config = Self {
            mods_dir: path_var(env_config::MODS_DIR, base.mods_dir),
            dump_log_path: path_var(env_config::DUMP_LOG_PATH, base.dump_log_path),
            dump_cache_path: path_var(env_config::DUMP_CACHE_PATH, base.dump_cache_path),
            patch_script_path: path_var(env_config::PATCH_SCRIPT_PATH, base.patch_script_path),
            embedding_dim: numeric_var(env_config::EMBEDDING_DIM, base.embedding_dim)?,
            default_top_k: numeric_var(env_config::TOP_K, base.default_top_k)?,
            catalog_timeout: Duration::from_secs(numeric_var(
                env_config::CATALOG_TIMEOUT_SECS,
                base.catalog_timeout.as_secs(),
            )?),
            environment: env::var(env_config::ENVIRONMENT)
                .map(|raw| Environment::from_str_or_default(&raw))
                .unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check validated limits.
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_ERROR` for a zero embedding dimension or top-K.
    pub fn validate(&self) -> AppResult<()> {
        if self.embedding_dim == 0 {
            return Err(AppError::config("embedding dimension must be positive"));
        }
        if self.default_top_k == 0 {
            return Err(AppError::config("default top-K must be positive"));
        }
        if self.catalog_timeout.is_zero() {
            return Err(AppError::config("catalog timeout must be positive"));
        }
        Ok(())
    }
}

fn path_var(name: &str, default: PathBuf) -> PathBuf {
    env::var(name).map_or(default, PathBuf::from)
}

fn numeric_var<T: std::str::FromStr>(name: &str, default: T) -> AppResult<T> {
    match env::var(name) {
        Ok(raw) => raw.parse().map_err(|_| {
            AppError::config(format!("{name} must be a positive integer, got '{raw}'"))
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_top_k_is_rejected() {
        let config = EngineConfig {
            default_top_k: 0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
