// ABOUTME: The single gate deciding whether an identifier exists in the active catalog
// ABOUTME: Every synthesis tool and corpus-facing query passes through this one check
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors

//! # Identifier Validator
//!
//! Delegates identifier-validity checks to the active catalog. No other
//! component decides validity independently; centralizing the check here
//! keeps every producing component agreeing on what "real" means.

use crate::catalog::Catalog;
use packsmith_core::errors::{AppError, AppResult};
use packsmith_core::ident::Identifier;
use std::sync::Arc;

/// Identifier-validity gate over the active catalog
#[derive(Debug, Clone)]
pub struct IdentifierValidator {
    catalog: Arc<Catalog>,
}

impl IdentifierValidator {
    /// A validator over the given catalog snapshot
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Whether the identifier exists in the active catalog
    #[must_use]
    pub fn is_known_identifier(&self, id: &Identifier) -> bool {
        self.catalog.contains(id)
    }

    /// Require the identifier to be catalogued.
    ///
    /// `role` names how the identifier is being used so the resulting
    /// error points the caller at the exact offending parameter.
    ///
    /// # Errors
    ///
    /// Returns `UNKNOWN_IDENTIFIER` naming the identifier and role.
    pub fn require_known(&self, id: &Identifier, role: &str) -> AppResult<()> {
        if self.is_known_identifier(id) {
            Ok(())
        } else {
            Err(AppError::unknown_identifier(id.as_str(), role))
        }
    }

    /// The catalog snapshot this validator consults
    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }
}
