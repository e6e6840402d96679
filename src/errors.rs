use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the Pair Merge application
#[derive(Debug)]
pub enum Error {
    /// A source or target folder could not be read or created
    DirectoryAccess { source: io::Error, path: PathBuf },
    /// The left and right folders hold a different number of matching files
    CountMismatch { left: usize, right: usize },
    /// The file to copy is not a regular file
    SourceNotRegular { path: PathBuf, kind: String },
    /// The destination exists and is not a regular file
    DestinationNotRegular { path: PathBuf, kind: String },
    /// Reading, writing or syncing failed while copying
    CopyIo {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error when a filename is not valid Unicode
    InvalidFilename { path: PathBuf },
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DirectoryAccess { source, path } => {
                write!(f, "Cannot access folder {}: {source}", path.display())
            }
            Error::CountMismatch { left, right } => {
                write!(
                    f,
                    "Different files count in left ({left}) and right ({right}) folders"
                )
            }
            Error::SourceNotRegular { path, kind } => {
                write!(f, "Non-regular source file {} ({kind})", path.display())
            }
            Error::DestinationNotRegular { path, kind } => {
                write!(f, "Non-regular destination file {} ({kind})", path.display())
            }
            Error::CopyIo {
                source,
                path,
                operation,
            } => {
                write!(f, "Failed to {} {}: {source}", operation, path.display())
            }
            Error::InvalidFilename { path } => {
                write!(f, "Filename is not valid unicode: {}", path.display())
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::DirectoryAccess { source, .. } => Some(source),
            Error::CopyIo { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Custom Result type for the Pair Merge application
///
/// # Examples
/// ```
/// use pair_merge::prelude::{Result, generic_error};
///
/// fn example_function() -> Result<String> {
///     // Return success
///     Ok("success".to_string())
///
///     // Or return an error
///     // Err(generic_error("Something went wrong"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a directory access error
pub fn directory_access_error(err: io::Error, path: PathBuf) -> Error {
    Error::DirectoryAccess { source: err, path }
}

/// Helper function to create a count mismatch error
pub fn count_mismatch_error(left: usize, right: usize) -> Error {
    Error::CountMismatch { left, right }
}

/// Helper function to create a non-regular source error
pub fn source_not_regular_error(path: PathBuf, kind: &str) -> Error {
    Error::SourceNotRegular {
        path,
        kind: kind.to_string(),
    }
}

/// Helper function to create a non-regular destination error
pub fn destination_not_regular_error(path: PathBuf, kind: &str) -> Error {
    Error::DestinationNotRegular {
        path,
        kind: kind.to_string(),
    }
}

/// Helper function to create a copy I/O error
pub fn copy_io_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::CopyIo {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_access_error() {
        let path = PathBuf::from("/test/left");
        let io_error = io::Error::new(io::ErrorKind::NotFound, "No such file or directory");
        let error = directory_access_error(io_error, path);

        let error_string = format!("{error}");
        assert!(
            error_string.contains("/test/left"),
            "Error message should contain the path"
        );
        assert!(
            error_string.contains("No such file or directory"),
            "Error message should contain the cause"
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn test_count_mismatch_error() {
        let error = count_mismatch_error(3, 2);

        assert_eq!(
            format!("{error}"),
            "Different files count in left (3) and right (2) folders"
        );
        assert!(error.source().is_none());
    }

    #[test]
    fn test_not_regular_errors() {
        let error = source_not_regular_error(PathBuf::from("/test/dir.jpg"), "directory");
        let error_string = format!("{error}");
        assert!(error_string.contains("source"));
        assert!(error_string.contains("/test/dir.jpg"));
        assert!(error_string.contains("directory"));

        let error = destination_not_regular_error(PathBuf::from("/test/1-a.jpg"), "directory");
        let error_string = format!("{error}");
        assert!(error_string.contains("destination"));
        assert!(error_string.contains("/test/1-a.jpg"));
    }

    #[test]
    fn test_copy_io_error() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied");
        let error = copy_io_error(io_error, PathBuf::from("/test/out.jpg"), "create");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("create"),
            "Error message should contain the operation"
        );
        assert!(
            error_string.contains("/test/out.jpg"),
            "Error message should contain the path"
        );
    }

    #[test]
    fn test_invalid_filename_error() {
        let error = invalid_filename_error(PathBuf::from("/test/invalid:file"));
        assert!(format!("{error}").contains("/test/invalid:file"));
    }

    #[test]
    fn test_generic_error() {
        let error = generic_error("Something went wrong");
        assert_eq!(format!("{error}"), "Something went wrong");
    }
}
