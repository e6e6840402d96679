//! File copy functionality
//!
//! Copies are tried as hard links first and fall back to a byte copy that is
//! synced to disk before returning.

use std::fs::{File, Metadata, hard_link, metadata};
use std::io;
use std::path::Path;

use log::{debug, trace};

use crate::errors::{
    Result, copy_io_error, destination_not_regular_error, source_not_regular_error,
};

/// How a file ended up at its destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The destination is a new hard link to the source
    Linked,
    /// The bytes were copied and synced
    Copied { bytes: u64 },
    /// Source and destination already are the same file
    AlreadyIdentical,
}

/// Places a copy of `source` at `destination`
///
/// The workflow engine only talks to this trait, so tests can swap in a
/// recording copier.
pub trait FileCopier {
    fn copy_file(&self, source: &Path, destination: &Path) -> Result<CopyOutcome>;
}

/// Filesystem copier: hard link when possible, byte copy otherwise
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkOrCopy;

impl FileCopier for LinkOrCopy {
    fn copy_file(&self, source: &Path, destination: &Path) -> Result<CopyOutcome> {
        let source_meta =
            metadata(source).map_err(|e| copy_io_error(e, source.to_path_buf(), "stat"))?;
        if !source_meta.is_file() {
            return Err(source_not_regular_error(
                source.to_path_buf(),
                describe_kind(&source_meta),
            ));
        }

        match metadata(destination) {
            Ok(destination_meta) => {
                if !destination_meta.is_file() {
                    return Err(destination_not_regular_error(
                        destination.to_path_buf(),
                        describe_kind(&destination_meta),
                    ));
                }
                if is_same_file(source, &source_meta, destination, &destination_meta) {
                    debug!(
                        "{} and {} are the same file",
                        source.display(),
                        destination.display()
                    );
                    return Ok(CopyOutcome::AlreadyIdentical);
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(copy_io_error(e, destination.to_path_buf(), "stat")),
        }

        match hard_link(source, destination) {
            Ok(()) => {
                trace!("Linked {} -> {}", source.display(), destination.display());
                return Ok(CopyOutcome::Linked);
            }
            Err(e) => debug!(
                "Hard link to {} failed ({e}), copying contents",
                destination.display()
            ),
        }

        let bytes = copy_contents(source, destination)?;
        Ok(CopyOutcome::Copied { bytes })
    }
}

/// Replaces the contents of `destination` with those of `source`
///
/// The destination is created or truncated, and synced before returning. A
/// partially written destination is left in place on error.
fn copy_contents(source: &Path, destination: &Path) -> Result<u64> {
    let mut input =
        File::open(source).map_err(|e| copy_io_error(e, source.to_path_buf(), "open"))?;
    let mut output = File::create(destination)
        .map_err(|e| copy_io_error(e, destination.to_path_buf(), "create"))?;

    let bytes = io::copy(&mut input, &mut output)
        .map_err(|e| copy_io_error(e, destination.to_path_buf(), "write"))?;
    output
        .sync_all()
        .map_err(|e| copy_io_error(e, destination.to_path_buf(), "sync"))?;

    trace!(
        "Copied {bytes} bytes {} -> {}",
        source.display(),
        destination.display()
    );
    Ok(bytes)
}

fn describe_kind(meta: &Metadata) -> &'static str {
    let file_type = meta.file_type();
    if file_type.is_dir() {
        "directory"
    } else if file_type.is_symlink() {
        "symlink"
    } else if file_type.is_file() {
        "regular file"
    } else {
        "special file"
    }
}

/// Checks whether two paths refer to the same file on disk
#[cfg(unix)]
fn is_same_file(_: &Path, a: &Metadata, _: &Path, b: &Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;

    a.dev() == b.dev() && a.ino() == b.ino()
}

/// Checks whether two paths refer to the same file on disk
#[cfg(not(unix))]
fn is_same_file(a: &Path, _: &Metadata, b: &Path, _: &Metadata) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{create_dir, read, write};
    use tempfile::tempdir;

    #[test]
    fn test_copy_to_new_destination() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("a.jpg");
        let destination = dir.path().join("1-a.jpg");
        write(&source, b"left image").unwrap();

        let outcome = LinkOrCopy.copy_file(&source, &destination).unwrap();

        assert!(matches!(
            outcome,
            CopyOutcome::Linked | CopyOutcome::Copied { .. }
        ));
        assert_eq!(read(&destination).unwrap(), b"left image");
    }

    #[test]
    fn test_copy_contents_overwrites() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("a.jpg");
        let destination = dir.path().join("1-a.jpg");
        write(&source, b"new").unwrap();
        write(&destination, b"old and longer").unwrap();

        let bytes = copy_contents(&source, &destination).unwrap();

        assert_eq!(bytes, 3);
        assert_eq!(read(&destination).unwrap(), b"new");
    }

    #[test]
    fn test_existing_destination_falls_back_to_copy() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("a.jpg");
        let destination = dir.path().join("1-a.jpg");
        write(&source, b"fresh").unwrap();
        write(&destination, b"stale").unwrap();

        let outcome = LinkOrCopy.copy_file(&source, &destination).unwrap();

        assert_eq!(outcome, CopyOutcome::Copied { bytes: 5 });
        assert_eq!(read(&destination).unwrap(), b"fresh");
    }

    #[test]
    fn test_same_file_is_noop() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("a.jpg");
        write(&source, b"content").unwrap();

        let outcome = LinkOrCopy.copy_file(&source, &source).unwrap();

        assert_eq!(outcome, CopyOutcome::AlreadyIdentical);
        assert_eq!(read(&source).unwrap(), b"content");
    }

    #[test]
    fn test_directory_source_is_rejected() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("folder.jpg");
        create_dir(&source).unwrap();

        let result = LinkOrCopy.copy_file(&source, &dir.path().join("1-folder.jpg"));

        assert!(matches!(
            result,
            Err(crate::errors::Error::SourceNotRegular { .. })
        ));
    }

    #[test]
    fn test_directory_destination_is_rejected() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("a.jpg");
        let destination = dir.path().join("1-a.jpg");
        write(&source, b"content").unwrap();
        create_dir(&destination).unwrap();

        let result = LinkOrCopy.copy_file(&source, &destination);

        assert!(matches!(
            result,
            Err(crate::errors::Error::DestinationNotRegular { .. })
        ));
    }
}
