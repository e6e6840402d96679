//! Workflow context
//!
//! This module defines the options a merge runs with and the report it
//! produces.

use std::path::PathBuf;

use crate::constants::DEFAULT_EXTENSION;
use crate::errors::Error;
use crate::file_ops::CopyOutcome;
use crate::path_gen::MergePlan;

/// What to do when a single file cannot be copied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Log and record the failure, then continue with the next file
    #[default]
    BestEffort,
    /// Stop the run at the first failure
    FailFast,
}

/// Options for a merge run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    /// The left folder, taken in name order
    pub left: PathBuf,
    /// The right folder, taken in reversed name order
    pub right: PathBuf,
    /// The folder the numbered copies go to
    pub target: PathBuf,
    /// Extension filter, compared case-insensitively
    pub extension: String,
    /// Whether to only plan the copies (true) or perform them (false)
    pub dry_run: bool,
    /// How per-file copy errors are handled
    pub error_policy: ErrorPolicy,
}

impl MergeOptions {
    /// Creates options with the default extension, no dry run and best-effort copying
    pub fn new(left: PathBuf, right: PathBuf, target: PathBuf) -> Self {
        MergeOptions {
            left,
            right,
            target,
            extension: DEFAULT_EXTENSION.to_string(),
            dry_run: false,
            error_policy: ErrorPolicy::default(),
        }
    }

    pub fn extension(mut self, extension: &str) -> Self {
        self.extension = extension.to_string();
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }
}

/// A file that could not be copied in a best-effort run
#[derive(Debug)]
pub struct CopyFailure {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub error: Error,
}

/// Statistics about the run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Number of copies in the plan
    pub planned: usize,
    /// Number of destinations created as hard links
    pub linked: usize,
    /// Number of destinations created by copying bytes
    pub copied: usize,
    /// Number of destinations that already were the source file
    pub identical: usize,
    /// Number of copies that failed
    pub failed: usize,
}

/// Result of a merge run
#[derive(Debug)]
pub struct MergeReport {
    /// The plan the run executed (or would execute in a dry run)
    pub plan: MergePlan,
    /// Whether anything was written
    pub dry_run: bool,
    pub stats: MergeStats,
    /// Failures collected in a best-effort run, in plan order
    pub failures: Vec<CopyFailure>,
}

impl MergeReport {
    pub fn new(plan: MergePlan, dry_run: bool) -> Self {
        let stats = MergeStats {
            planned: plan.copies.len(),
            ..MergeStats::default()
        };
        MergeReport {
            plan,
            dry_run,
            stats,
            failures: Vec::new(),
        }
    }

    /// Records a successful copy
    pub fn record_outcome(&mut self, outcome: CopyOutcome) {
        match outcome {
            CopyOutcome::Linked => self.stats.linked += 1,
            CopyOutcome::Copied { .. } => self.stats.copied += 1,
            CopyOutcome::AlreadyIdentical => self.stats.identical += 1,
        }
    }

    /// Records a failed copy
    pub fn record_failure(&mut self, failure: CopyFailure) {
        self.stats.failed += 1;
        self.failures.push(failure);
    }

    /// Number of destinations that hold the source content after the run
    pub fn completed(&self) -> usize {
        self.stats.linked + self.stats.copied + self.stats.identical
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
