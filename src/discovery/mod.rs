//! File discovery module
//!
//! This module contains components for scanning the left and right folders.

mod scanner;

pub use scanner::{FileEntry, extension_of, normalise_extension, scan_directory};
