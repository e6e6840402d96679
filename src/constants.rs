/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Extension used when `-ext` is not given
pub const DEFAULT_EXTENSION: &str = ".jpg";

/// Separator between the numeric prefix and the original filename
pub const NAME_SEPARATOR: &str = "-";

/// Character used to left-pad the numeric prefix
pub const PAD_CHAR: char = '0';

/// Help text for the left folder option
pub const LEFT_HELP: &str = "Left folder, taken in name order";

/// Help text for the right folder option
pub const RIGHT_HELP: &str = "Right folder, taken in reversed name order";

/// Help text for the target folder option
pub const TARGET_HELP: &str = "Target folder for renamed files";

/// Help text for the extension option
pub const EXTENSION_HELP: &str = "File extension, e.g. .jpg (case-insensitive)";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Print the planned copies without touching any files";

/// Help text for the fail-fast command-line option
pub const FAIL_FAST_HELP: &str = "Stop at the first file that cannot be copied";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write log records to this file";
