//! Applies license headers across directory trees.
//!
//! The walk is single-threaded and order-agnostic; a failure on one file
//! is logged and never aborts the rest of the tree.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::ops::AddAssign;
use std::path::Path;

use tracing::{info, warn};
use walkdir::WalkDir;

use crate::rules;

/// What happened to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// No rule matched the file name or extension.
    NotApplicable,
    /// Both license markers were already present.
    AlreadyLicensed,
    /// Dry-run mode reported the insertion without writing.
    WouldAdd,
    /// The header was prepended and the file rewritten.
    Added,
}

/// Per-outcome totals for a walk.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkSummary {
    pub added: usize,
    pub would_add: usize,
    pub skipped: usize,
    pub errors: usize,
}

impl AddAssign for WalkSummary {
    fn add_assign(&mut self, other: Self) {
        self.added += other.added;
        self.would_add += other.would_add;
        self.skipped += other.skipped;
        self.errors += other.errors;
    }
}

/// Inserts the matching header into a single file.
///
/// Files covered by no rule are reported as `NotApplicable` and left
/// alone. In dry-run mode the file is never written.
///
/// # Errors
/// Returns an `io::Error` when the file cannot be read as UTF-8 text or
/// cannot be rewritten.
pub fn apply_header(path: &Path, dry_run: bool) -> io::Result<FileOutcome> {
    let Some(file_name) = path.file_name().and_then(OsStr::to_str) else {
        return Ok(FileOutcome::NotApplicable);
    };
    let Some(header) = rules::header_for(file_name) else {
        return Ok(FileOutcome::NotApplicable);
    };
    let content = fs::read_to_string(path)?;
    if rules::has_license(&content) {
        return Ok(FileOutcome::AlreadyLicensed);
    }
    if dry_run {
        return Ok(FileOutcome::WouldAdd);
    }
    fs::write(path, format!("{header}{content}"))?;
    Ok(FileOutcome::Added)
}

/// Walks a root directory and processes every file under it.
///
/// Per-file failures are logged with the offending path and counted in
/// the summary; the walk always continues to the next file.
#[must_use]
pub fn process_root(root: &Path, dry_run: bool) -> WalkSummary {
    let mut summary = WalkSummary::default();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("failed to walk below {}: {err}", root.display());
                summary.errors += 1;
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        match apply_header(path, dry_run) {
            Ok(FileOutcome::NotApplicable) => {}
            Ok(FileOutcome::AlreadyLicensed) => {
                info!("existing license, skipping {}", path.display());
                summary.skipped += 1;
            }
            Ok(FileOutcome::WouldAdd) => {
                info!("would add license to {}", path.display());
                summary.would_add += 1;
            }
            Ok(FileOutcome::Added) => {
                info!("added license to {}", path.display());
                summary.added += 1;
            }
            Err(err) => {
                warn!("failed to process {}: {err}", path.display());
                summary.errors += 1;
            }
        }
    }
    summary
}
