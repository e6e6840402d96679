//! File operations module
//!
//! This module contains the copier that places numbered files in the target
//! folder.

mod copier;

pub use copier::{CopyOutcome, FileCopier, LinkOrCopy};
