// ABOUTME: Application-wide constants for the packsmith engine organized by domain
// ABOUTME: Grid limits, defaults, env var names, dump markers, and tool names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors

//! Application constants organized by domain.
//!
//! Grouping constants into domain modules keeps call sites readable
//! (`limits::CRAFTING_GRID_SLOTS`) and gives each domain one place to change.

/// Identifier and namespace conventions
pub mod ident {
    /// Namespace assumed for bare identifiers written without a `namespace:` prefix
    pub const DEFAULT_NAMESPACE: &str = "minecraft";

    /// Separator between alternative identifiers in an ingredient spec
    pub const ALTERNATIVE_SEPARATOR: char = '|';
}

/// Structural limits enforced by recipe synthesis
pub mod limits {
    /// Crafting grid width in slots
    pub const CRAFTING_GRID_WIDTH: usize = 3;

    /// Crafting grid height in slots
    pub const CRAFTING_GRID_HEIGHT: usize = 3;

    /// Total ingredient slots available to a shapeless recipe
    pub const CRAFTING_GRID_SLOTS: u32 = 9;

    /// Smallest accepted cooking duration, in ticks
    pub const MIN_COOKING_TIME_TICKS: u32 = 1;
}

/// Default configuration values
pub mod defaults {
    /// Embedding dimension for the semantic index
    pub const EMBEDDING_DIM: usize = 256;

    /// Default number of search results returned
    pub const TOP_K: usize = 8;

    /// Default catalog build timeout in seconds
    pub const CATALOG_TIMEOUT_SECS: u64 = 120;

    /// Default mods directory populated by the provisioning layer
    pub const MODS_DIR: &str = "server/mods";

    /// Default server log file scanned for recipe dumps
    pub const DUMP_LOG_PATH: &str = "server/logs/latest.log";

    /// Default cache file for captured recipe dumps
    pub const DUMP_CACHE_PATH: &str = "cache/dumped_recipes.json";

    /// Default patch artifact consumed by the server scripting runtime
    pub const PATCH_SCRIPT_PATH: &str = "server/kubejs/server_scripts/packsmith_patch.js";
}

/// Environment variable names read by `EngineConfig::from_env`
pub mod env_config {
    /// Mods directory override
    pub const MODS_DIR: &str = "PACKSMITH_MODS_DIR";

    /// Server log path override
    pub const DUMP_LOG_PATH: &str = "PACKSMITH_DUMP_LOG";

    /// Dump cache path override
    pub const DUMP_CACHE_PATH: &str = "PACKSMITH_DUMP_CACHE";

    /// Patch artifact path override
    pub const PATCH_SCRIPT_PATH: &str = "PACKSMITH_PATCH_SCRIPT";

    /// Embedding dimension override
    pub const EMBEDDING_DIM: &str = "PACKSMITH_EMBEDDING_DIM";

    /// Default top-K override
    pub const TOP_K: &str = "PACKSMITH_TOP_K";

    /// Catalog build timeout override, in seconds
    pub const CATALOG_TIMEOUT_SECS: &str = "PACKSMITH_CATALOG_TIMEOUT_SECS";

    /// Runtime environment name (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";

    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}

/// Recipe dump wire conventions shared with the in-game dump hook
pub mod dump {
    /// Log line marking the start of a recipe dump section
    pub const BEGIN_MARKER: &str = "packsmith:recipe-dump:begin";

    /// Log line marking the end of a recipe dump section
    pub const END_MARKER: &str = "packsmith:recipe-dump:end";

    /// Prefix carried by each dumped recipe record line
    pub const DATA_PREFIX: &str = "packsmith:recipe::";
}

/// Canonical tool names exposed to the calling agent layer
pub mod tools {
    /// Resolve free text to catalogued identifiers
    pub const SEARCH_ITEMS: &str = "search_items";

    /// Look up recipes by exact identifier and role
    pub const FIND_RECIPES: &str = "find_recipes";

    /// Append a shapeless crafting recipe
    pub const ADD_SHAPELESS_RECIPE: &str = "add_shapeless_recipe";

    /// Append a shaped crafting recipe
    pub const ADD_SHAPED_RECIPE: &str = "add_shaped_recipe";

    /// Append a smithing recipe
    pub const ADD_SMITHING_RECIPE: &str = "add_smithing_recipe";

    /// Append a cooking recipe
    pub const ADD_COOKING_RECIPE: &str = "add_cooking_recipe";

    /// Append a stonecutting recipe
    pub const ADD_STONECUTTING_RECIPE: &str = "add_stonecutting_recipe";

    /// Append removal statements for recipe ids
    pub const REMOVE_RECIPES: &str = "remove_recipes";

    /// Append item substitutions for an existing recipe
    pub const REPLACE_RECIPE_ITEMS: &str = "replace_recipe_items";
}

/// Service identity used in logs
pub mod service_names {
    /// The engine service name
    pub const PACKSMITH_ENGINE: &str = "packsmith-engine";
}
