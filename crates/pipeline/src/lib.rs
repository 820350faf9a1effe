//! Driver: walks the source root and annotates every Java unit in place.
//!
//! Per file:
//! 1. Skip anything not ending in `.java`.
//! 2. Read and decode as UTF-8.
//! 3. [`annotate`]: classify, then rewrite if eligible.
//! 4. Write back only when the text changed.
//!
//! Per-file failures (read, decode, write, traversal below the root) are
//! logged and counted; the run continues. Only an unusable root is fatal.
//! Counts live in the [`Report`] returned by [`run`].

pub mod annotate;

pub use annotate::{annotate, Annotated};

use common::{is_source_path, SourceUnit, Verdict};
use sieve::{Sieve, SieveError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walker::{SourceWalk, WalkerError};

/// Fatal errors: the run cannot start.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Root(#[from] WalkerError),
    #[error(transparent)]
    Sieve(#[from] SieveError),
}

/// Errors confined to a single file.
#[derive(Debug, thiserror::Error)]
pub enum UnitError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not valid UTF-8: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Decide and report, but never write.
    pub dry_run: bool,
}

/// What happened to one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Rewritten (or, in a dry run, would have been).
    Updated,
    /// Eligible, but neither anchor matched so the text is unchanged.
    Unchanged,
    AlreadyAnnotated,
    NotEligible,
    /// Not a `.java` file.
    NotSource,
}

/// Tally of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// `.java` files read.
    pub scanned: usize,
    /// Paths written (or that would be written in a dry run), in walk order.
    pub updated: Vec<PathBuf>,
    pub unchanged: usize,
    pub already_annotated: usize,
    pub not_eligible: usize,
    /// Files or directory entries skipped because of an error.
    pub failed: usize,
}

impl Report {
    pub fn updated_count(&self) -> usize {
        self.updated.len()
    }

    fn record(&mut self, path: &Path, outcome: Outcome) {
        if outcome == Outcome::NotSource {
            return;
        }
        self.scanned += 1;
        match outcome {
            Outcome::Updated => self.updated.push(path.to_path_buf()),
            Outcome::Unchanged => self.unchanged += 1,
            Outcome::AlreadyAnnotated => self.already_annotated += 1,
            Outcome::NotEligible => self.not_eligible += 1,
            Outcome::NotSource => {}
        }
    }
}

/// Processes one path: read, annotate, write back if changed.
pub fn process_file(sieve: &Sieve, path: &Path, opts: &RunOptions) -> Result<Outcome, UnitError> {
    if !is_source_path(path) {
        return Ok(Outcome::NotSource);
    }

    let bytes = fs::read(path).map_err(|source| UnitError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| UnitError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let unit = SourceUnit::new(path, text);

    let annotated = annotate(sieve, &unit);
    match annotated.verdict() {
        Verdict::AlreadyAnnotated => {
            debug!(path = %path.display(), "already annotated");
            return Ok(Outcome::AlreadyAnnotated);
        }
        Verdict::NotEligible => {
            debug!(path = %path.display(), "not an entity or DTO");
            return Ok(Outcome::NotEligible);
        }
        Verdict::Eligible => {}
    }

    if let Some(spliced) = &annotated.spliced {
        if spliced.missing_package() {
            debug!(path = %path.display(), "no package statement, imports not inserted");
        }
        if !spliced.annotations_inserted {
            debug!(path = %path.display(), "no public class declaration, annotations not inserted");
        }
    }

    let Some(new_text) = annotated.rewritten(&unit.text) else {
        return Ok(Outcome::Unchanged);
    };

    if !opts.dry_run {
        fs::write(path, new_text).map_err(|source| UnitError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    info!(
        path = %path.display(),
        entity = annotated.classification.looks_like_entity,
        dry_run = opts.dry_run,
        "updated"
    );
    Ok(Outcome::Updated)
}

/// Annotates every Java file below `root`.
///
/// `on_updated` is called once per updated path, in walk order, as soon as the
/// file has been written.
///
/// # Errors
/// Only when `root` is missing, not a directory, or cannot be listed.
pub fn run(
    root: &Path,
    opts: &RunOptions,
    mut on_updated: impl FnMut(&Path),
) -> Result<Report, PipelineError> {
    let sieve = Sieve::new()?;
    let walk = SourceWalk::open(root)?;
    let mut report = Report::default();

    for entry in walk {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                warn!(path = ?e.path(), error = %e, "skipping unreadable entry");
                report.failed += 1;
                continue;
            }
        };

        match process_file(&sieve, &path, opts) {
            Ok(outcome) => {
                report.record(&path, outcome);
                if outcome == Outcome::Updated {
                    on_updated(&path);
                }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping file");
                report.failed += 1;
            }
        }
    }

    info!(
        root = %root.display(),
        scanned = report.scanned,
        updated = report.updated_count(),
        failed = report.failed,
        "run complete"
    );
    Ok(report)
}
