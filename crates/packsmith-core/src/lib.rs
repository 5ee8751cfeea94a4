// ABOUTME: Core types and constants for the packsmith recipe engine
// ABOUTME: Foundation crate with identifiers, recipe models, statements, and errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors

#![deny(unsafe_code)]

//! # Packsmith Core
//!
//! Foundation crate providing shared types for the packsmith recipe
//! modification engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **ident**: Namespaced item/block identifiers and ingredient specs
//! - **recipe**: Recipe records, families, and typed payloads
//! - **statement**: Recipe-mutation statements emitted into the patch artifact
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Application-wide constants organized by domain

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Namespaced identifiers, ingredient specs, and item stacks
pub mod ident;

/// Recipe records, families, and typed per-family payloads
pub mod recipe;

/// Recipe-mutation statements written to the patch artifact
pub mod statement;
