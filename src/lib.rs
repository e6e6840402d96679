//! Merge two folders of same-extension files into one.
//!
//! Files of the left folder are interleaved with the files of the right
//! folder taken in reverse order. Each copy gets a zero-padded sequence
//! number in front of its original name, so `a.jpg, b.jpg` and
//! `c.jpg, d.jpg` become `1-a.jpg, 2-d.jpg, 3-b.jpg, 4-c.jpg`.

pub mod cli;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod file_ops;
pub mod logging;
pub mod path_gen;
pub mod workflow;

pub mod prelude {
    pub use crate::cli::{
        get_log_file, get_matches, get_merge_options, get_verbosity, print_usage,
    };
    pub use crate::errors::{
        copy_io_error, count_mismatch_error, destination_not_regular_error,
        directory_access_error, generic_error, invalid_filename_error, source_not_regular_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::file_ops::{CopyOutcome, FileCopier, LinkOrCopy};
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::workflow::{ErrorPolicy, MergeOptions, MergeReport, merge_directories};
}
