// ABOUTME: Captures recipe dump records from the server log and caches them as JSON
// ABOUTME: The in-game dump hook brackets records between begin/end marker lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors

//! # Recipe Dump Capture
//!
//! The server-side dump hook prints every active recipe into the server
//! log: a begin marker line, one `packsmith:recipe::<json>` line per
//! recipe, then an end marker. This module scrapes those records back out
//! of the log (which is full of unrelated lines and timestamp prefixes)
//! and can cache them to a JSON file so the corpus can be rebuilt without
//! re-triggering a dump.
//!
//! A repeated dump in the same log restarts capture at the latest begin
//! marker, so stale sections are ignored.

use packsmith_core::constants::dump::{BEGIN_MARKER, DATA_PREFIX, END_MARKER};
use packsmith_core::errors::{AppError, AppResult};
use packsmith_core::recipe::RawRecipeRecord;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Scrape dump records out of the server log.
///
/// # Errors
///
/// Returns `CORPUS_INGEST_FAILED` when the log cannot be read or contains
/// no dump section. Malformed record lines inside a section are counted
/// and skipped, never fatal.
pub fn capture_from_log(log_path: impl AsRef<Path>) -> AppResult<Vec<RawRecipeRecord>> {
    let log_path = log_path.as_ref();
    let bytes = fs::read(log_path).map_err(|err| {
        AppError::corpus_ingest(format!("cannot read server log '{}'", log_path.display()))
            .with_source(err)
    })?;
    // Server logs can contain invalid UTF-8 from mod output; replace rather
    // than fail.
    let text = String::from_utf8_lossy(&bytes);

    let mut records = Vec::new();
    let mut capturing = false;
    let mut seen_begin = false;
    let mut malformed = 0usize;

    for line in text.lines() {
        if line.contains(BEGIN_MARKER) {
            // Restart on a later dump: only the newest section counts.
            records.clear();
            malformed = 0;
            capturing = true;
            seen_begin = true;
            continue;
        }
        if line.contains(END_MARKER) {
            capturing = false;
            continue;
        }
        if !capturing {
            continue;
        }
        let Some(pos) = line.find(DATA_PREFIX) else {
            continue;
        };
        let raw_json = line[pos + DATA_PREFIX.len()..].trim();
        match serde_json::from_str::<RawRecipeRecord>(raw_json) {
            Ok(record) => records.push(record),
            Err(err) => {
                malformed += 1;
                debug!("skipping malformed dump line: {err}");
            }
        }
    }

    if !seen_begin {
        return Err(AppError::corpus_ingest(format!(
            "no recipe dump section found in '{}'; was the dump hook triggered?",
            log_path.display()
        )));
    }
    if malformed > 0 {
        warn!(malformed, "some dump lines could not be parsed");
    }
    info!(records = records.len(), "recipe dump captured");
    Ok(records)
}

/// Persist captured records to a JSON cache file, creating parent
/// directories as needed.
///
/// # Errors
///
/// Returns `PERSISTENCE_FAILED` when the cache cannot be written.
pub fn save_cache(cache_path: impl AsRef<Path>, records: &[RawRecipeRecord]) -> AppResult<()> {
    let cache_path = cache_path.as_ref();
    if let Some(parent) = cache_path.parent() {
        fs::create_dir_all(parent).map_err(|err| {
            AppError::persistence(format!(
                "cannot create dump cache directory '{}'",
                parent.display()
            ))
            .with_source(err)
        })?;
    }
    let json = serde_json::to_string_pretty(records)
        .map_err(|err| AppError::internal("dump records failed to serialize").with_source(err))?;
    fs::write(cache_path, json).map_err(|err| {
        AppError::persistence(format!(
            "cannot write dump cache '{}'",
            cache_path.display()
        ))
        .with_source(err)
    })?;
    debug!(cache = %cache_path.display(), records = records.len(), "dump cache written");
    Ok(())
}

/// Load previously captured records from the JSON cache file.
///
/// # Errors
///
/// Returns `CORPUS_INGEST_FAILED` when the cache is missing or malformed.
pub fn load_cache(cache_path: impl AsRef<Path>) -> AppResult<Vec<RawRecipeRecord>> {
    let cache_path = cache_path.as_ref();
    let bytes = fs::read(cache_path).map_err(|err| {
        AppError::corpus_ingest(format!(
            "cannot read dump cache '{}'",
            cache_path.display()
        ))
        .with_source(err)
    })?;
    serde_json::from_slice(&bytes).map_err(|err| {
        AppError::corpus_ingest(format!(
            "dump cache '{}' is not a valid record list",
            cache_path.display()
        ))
        .with_source(err)
    })
}
