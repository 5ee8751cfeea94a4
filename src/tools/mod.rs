// ABOUTME: Agent-facing tool surface: trait, registry, context, and implementations
// ABOUTME: Tools adapt JSON parameters onto the validated engine components
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors

//! # Tool Surface
//!
//! The engine's public query and mutation surface, shaped for an automated
//! caller: each tool takes JSON parameters, returns a structured success
//! payload or a typed error response, and declares capability flags so the
//! host can reason about what a tool touches.
//!
//! The tools validate and execute well-formed requests; deciding *what* to
//! search for or *which* recipe to propose belongs to the calling agent
//! layer, not to this crate.

/// Tool execution context
pub mod context;
/// Tool-specific error types
pub mod errors;
/// Built-in tool implementations
pub mod implementations;
/// Tool registry and dispatch
pub mod registry;
/// Tool result types
pub mod result;
/// The tool trait and capability flags
pub mod traits;

pub use context::ToolExecutionContext;
pub use errors::ToolError;
pub use registry::{ToolDescriptor, ToolRegistry};
pub use result::ToolResult;
pub use traits::{EngineTool, ToolCapabilities};
