//! Workflow module
//!
//! This module contains the engine that runs a merge from scanning to copying.

mod context;
mod engine;

pub use context::{CopyFailure, ErrorPolicy, MergeOptions, MergeReport, MergeStats};
pub use engine::{merge_directories, print_plan};
