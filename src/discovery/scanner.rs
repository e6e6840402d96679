//! Directory scanning functionality
//!
//! This module contains functions for listing the files of one folder that
//! carry a given extension.

use std::ffi::{OsStr, OsString};
use std::fs::{metadata, read_dir};
use std::path::{Path, PathBuf};

use log::{debug, info, trace};

use crate::errors::{Result, directory_access_error, invalid_filename_error};

/// A file found in a source folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// The filename, without any folder components, exactly as stored on disk
    pub name: OsString,
    /// The full path to the file
    pub path: PathBuf,
    /// Whether the entry is a regular file (symlinks are followed)
    pub is_regular: bool,
}

impl FileEntry {
    /// Creates a new FileEntry from a path
    ///
    /// # Errors
    /// Returns an error if the path has no filename component
    pub fn new(path: PathBuf) -> Result<Self> {
        let name = path
            .file_name()
            .ok_or_else(|| invalid_filename_error(path.clone()))?
            .to_os_string();
        let is_regular = metadata(&path).map(|m| m.is_file()).unwrap_or(false);

        Ok(FileEntry {
            name,
            path,
            is_regular,
        })
    }
}

/// Returns the extension of a filename, including the leading dot
///
/// The extension is everything from the last dot onwards, so `archive.tar.GZ`
/// gives `.GZ` and `.jpg` gives `.jpg`. A name without a dot has an empty
/// extension. Names that are not valid Unicode are split on their raw bytes,
/// and any invalid bytes of the extension come back as U+FFFD.
pub fn extension_of(name: &OsStr) -> String {
    let bytes = name.as_encoded_bytes();
    match bytes.iter().rposition(|&b| b == b'.') {
        Some(index) => String::from_utf8_lossy(&bytes[index..]).into_owned(),
        None => String::new(),
    }
}

/// Ensures an extension starts with a dot (`jpg` becomes `.jpg`)
pub fn normalise_extension(extension: &str) -> String {
    if extension.is_empty() || extension.starts_with('.') {
        extension.to_string()
    } else {
        format!(".{extension}")
    }
}

/// Scans a folder for files with the given extension
///
/// The extension is compared case-insensitively. Entries are returned sorted
/// by name. Matching entries that are not regular files (a folder called
/// `x.jpg`, say) are kept with `is_regular` unset so that they still take
/// part in the pairing. Names do not have to be valid Unicode.
///
/// # Arguments
/// * `directory` - The folder to scan
/// * `extension` - The extension to keep, e.g. `.jpg`
///
/// # Errors
/// Returns a directory access error if the folder cannot be read
pub fn scan_directory(directory: &Path, extension: &str) -> Result<Vec<FileEntry>> {
    debug!("Scanning directory: {}", directory.display());

    let extension = normalise_extension(extension).to_lowercase();
    let entries =
        read_dir(directory).map_err(|e| directory_access_error(e, directory.to_path_buf()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| directory_access_error(e, directory.to_path_buf()))?;
        let file = FileEntry::new(entry.path())?;

        if extension_of(&file.name).to_lowercase() == extension {
            trace!("Matched {}", file.name.to_string_lossy());
            files.push(file);
        }
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));

    info!("{}, {} files", directory.display(), files.len());

    Ok(files)
}
