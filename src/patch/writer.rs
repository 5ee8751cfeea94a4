// ABOUTME: Durable append-only writer for the patch artifact
// ABOUTME: Crash atomicity comes from append-only writes with explicit flush boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors

//! Patch artifact writer.
//!
//! The writer only ever appends: a crash mid-write can at worst truncate
//! the final, unflushed block, never corrupt previously flushed
//! statements. [`PatchWriter::flush`] does not return until everything
//! appended so far is durably on disk.

use super::script::render_statement;
use packsmith_core::errors::{AppError, AppResult};
use packsmith_core::statement::RecipeStatement;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Append-only writer for the patch artifact
#[derive(Debug)]
pub struct PatchWriter {
    path: PathBuf,
    file: BufWriter<File>,
    appended: u64,
}

impl PatchWriter {
    /// Create a fresh artifact at install time, truncating any existing
    /// file and writing the artifact header.
    ///
    /// # Errors
    ///
    /// Returns `PERSISTENCE_FAILED` when the file cannot be created.
    pub fn create(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        ensure_parent(&path)?;
        let file = File::create(&path)
            .map_err(|err| open_error(&path).with_source(err))?;
        let mut writer = Self {
            path,
            file: BufWriter::new(file),
            appended: 0,
        };
        writer.write_header()?;
        writer.flush()?;
        info!(artifact = %writer.path.display(), "patch artifact created");
        Ok(writer)
    }

    /// Open an existing artifact for appending across sessions, creating
    /// it (with header) when absent.
    ///
    /// # Errors
    ///
    /// Returns `PERSISTENCE_FAILED` when the file cannot be opened.
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        ensure_parent(&path)?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|err| open_error(&path).with_source(err))?;
        let empty = file
            .metadata()
            .map(|m| m.len() == 0)
            .unwrap_or(false);
        let mut writer = Self {
            path,
            file: BufWriter::new(file),
            appended: 0,
        };
        if empty {
            writer.write_header()?;
            writer.flush()?;
        }
        Ok(writer)
    }

    /// Append one serialized statement block.
    ///
    /// Statements are self-contained, so the downstream runtime can apply
    /// them out of order. The append is buffered; call
    /// [`PatchWriter::flush`] to make it durable.
    ///
    /// # Errors
    ///
    /// Returns `PERSISTENCE_FAILED` on write failure; the artifact state
    /// up to the previous flush is guaranteed intact.
    pub fn append(&mut self, statement: &RecipeStatement) -> AppResult<()> {
        let block = render_statement(statement);
        self.file
            .write_all(block.as_bytes())
            .and_then(|()| self.file.write_all(b"\n"))
            .map_err(|err| write_error(&self.path).with_source(err))?;
        self.appended += 1;
        debug!(op = statement.op_name(), artifact = %self.path.display(), "statement appended");
        Ok(())
    }

    /// Flush all appended statements to durable storage.
    ///
    /// # Errors
    ///
    /// Returns `PERSISTENCE_FAILED` on flush failure.
    pub fn flush(&mut self) -> AppResult<()> {
        self.file
            .flush()
            .map_err(|err| write_error(&self.path).with_source(err))?;
        self.file
            .get_ref()
            .sync_all()
            .map_err(|err| write_error(&self.path).with_source(err))?;
        Ok(())
    }

    /// The artifact path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Statements appended by this writer instance
    #[must_use]
    pub const fn statements_appended(&self) -> u64 {
        self.appended
    }

    fn write_header(&mut self) -> AppResult<()> {
        let header = format!(
            "// packsmith recipe patch log\n// created: {}\n// Statements are appended in order; do not edit by hand.\n\n",
            chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
        );
        self.file
            .write_all(header.as_bytes())
            .map_err(|err| write_error(&self.path).with_source(err))
    }
}

fn ensure_parent(path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|err| {
                AppError::persistence(format!(
                    "cannot create artifact directory '{}'",
                    parent.display()
                ))
                .with_source(err)
            })?;
        }
    }
    Ok(())
}

fn open_error(path: &Path) -> AppError {
    AppError::persistence(format!("cannot open patch artifact '{}'", path.display()))
}

fn write_error(path: &Path) -> AppError {
    AppError::persistence(format!(
        "cannot write to patch artifact '{}'",
        path.display()
    ))
}
