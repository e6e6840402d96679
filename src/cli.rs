use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command, command, crate_authors, crate_description, crate_name, crate_version};

use crate::constants::{
    DEFAULT_EXTENSION, DRY_RUN_HELP, EXTENSION_HELP, FAIL_FAST_HELP, LEFT_HELP, LOG_FILE_HELP,
    RIGHT_HELP, TARGET_HELP, VERBOSE_HELP,
};
use crate::errors::{Result, generic_error};
use crate::logging::LogLevel;
use crate::workflow::{ErrorPolicy, MergeOptions};

/// Builds the command-line interface
///
/// Defines the following arguments:
/// - `left`, `right`, `target`: the folders to merge (`-l`, `-r`, `-t`)
/// - `ext`: extension filter, `.jpg` by default
/// - `dry`: plan without copying
/// - `fail_fast`: stop at the first failed copy
/// - `verbose`: increase verbosity level
/// - `log_file`: also write log records to a file
///
/// The folder options are not marked as required so that a missing one can
/// be answered with the usage text instead of an error.
pub fn build_command() -> Command {
    let arg_left = Arg::new("left").short('l').value_name("DIR").help(LEFT_HELP);

    let arg_right = Arg::new("right").short('r').value_name("DIR").help(RIGHT_HELP);

    let arg_target = Arg::new("target")
        .short('t')
        .value_name("DIR")
        .help(TARGET_HELP);

    let arg_extension = Arg::new("ext")
        .long("ext")
        .value_name("EXT")
        .help(EXTENSION_HELP)
        .default_value(DEFAULT_EXTENSION);

    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(clap::ArgAction::SetTrue);

    let arg_fail_fast = Arg::new("fail_fast")
        .long("fail-fast")
        .help(FAIL_FAST_HELP)
        .action(clap::ArgAction::SetTrue);

    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(clap::ArgAction::Count);

    let log_file = Arg::new("log_file")
        .long("log-file")
        .value_name("FILE")
        .help(LOG_FILE_HELP);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_left)
        .arg(arg_right)
        .arg(arg_target)
        .arg(arg_extension)
        .arg(arg_dry)
        .arg(arg_fail_fast)
        .arg(log_file)
        .arg(arg_verbose)
}

/// Rewrites the single-dash `-ext` spelling into `--ext`
///
/// Both `-ext .png` and `-ext=.png` are accepted.
pub fn normalise_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            match arg.to_str() {
                Some("-ext") => OsString::from("--ext"),
                Some(s) if s.starts_with("-ext=") => OsString::from(format!("-{s}")),
                _ => arg,
            }
        })
        .collect()
}

/// Parses command-line arguments
///
/// # Errors
/// Returns an error if the arguments do not match the interface
pub fn get_matches_from<I, T>(args: I) -> Result<ArgMatches>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    build_command()
        .try_get_matches_from(normalise_args(args))
        .map_err(|e| generic_error(&e.to_string()))
}

/// Sets up and returns command-line argument matches for this process
///
/// Help, version and usage errors are printed by clap, which then exits.
pub fn get_matches() -> ArgMatches {
    build_command().get_matches_from(normalise_args(std::env::args_os()))
}

/// Prints the usage text
pub fn print_usage() -> Result<()> {
    build_command()
        .print_help()
        .map_err(|e| generic_error(&format!("Failed to print usage: {e}")))
}

fn folder_argument(matches: &ArgMatches, id: &str) -> Option<PathBuf> {
    matches
        .get_one::<String>(id)
        .filter(|value| !value.is_empty())
        .map(|value| PathBuf::from(shellexpand::tilde(value).as_ref()))
}

/// Builds merge options from the command-line arguments
///
/// # Returns
/// * `Option<MergeOptions>` - `None` when one of the left, right or target folders is missing or empty
pub fn get_merge_options(matches: &ArgMatches) -> Option<MergeOptions> {
    let left = folder_argument(matches, "left")?;
    let right = folder_argument(matches, "right")?;
    let target = folder_argument(matches, "target")?;

    let extension = matches
        .get_one::<String>("ext")
        .map(String::as_str)
        .unwrap_or(DEFAULT_EXTENSION);

    let error_policy = if matches.get_flag("fail_fast") {
        ErrorPolicy::FailFast
    } else {
        ErrorPolicy::BestEffort
    };

    Some(
        MergeOptions::new(left, right, target)
            .extension(extension)
            .dry_run(matches.get_flag("dry"))
            .error_policy(error_policy),
    )
}

/// Gets the verbosity level from the number of -v/--verbose flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// Gets the optional log file path from the command-line arguments
pub fn get_log_file(matches: &ArgMatches) -> Option<String> {
    matches.get_one::<String>("log_file").cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_normalise_args() {
        let args = normalise_args(["pmerge", "-ext", ".png", "-l", "a"]);
        assert_eq!(args[1], OsString::from("--ext"));
        assert_eq!(args[2], OsString::from(".png"));

        let args = normalise_args(["pmerge", "-ext=.png"]);
        assert_eq!(args[1], OsString::from("--ext=.png"));

        let args = normalise_args(["pmerge", "--ext", ".png"]);
        assert_eq!(args[1], OsString::from("--ext"));
    }

    #[test]
    fn test_merge_options_from_args() {
        let matches =
            get_matches_from(["pmerge", "-l", "left", "-r", "right", "-t", "out"]).unwrap();
        let options = get_merge_options(&matches).unwrap();

        assert_eq!(options.left, Path::new("left"));
        assert_eq!(options.right, Path::new("right"));
        assert_eq!(options.target, Path::new("out"));
        assert_eq!(options.extension, ".jpg");
        assert!(!options.dry_run);
        assert_eq!(options.error_policy, ErrorPolicy::BestEffort);
    }

    #[test]
    fn test_single_dash_extension_and_flags() {
        let matches = get_matches_from([
            "pmerge", "-l", "a", "-r", "b", "-t", "c", "-ext", ".png", "--dry", "--fail-fast",
        ])
        .unwrap();
        let options = get_merge_options(&matches).unwrap();

        assert_eq!(options.extension, ".png");
        assert!(options.dry_run);
        assert_eq!(options.error_policy, ErrorPolicy::FailFast);
    }

    #[test]
    fn test_missing_folder_gives_no_options() {
        let matches = get_matches_from(["pmerge", "-l", "a", "-r", "b"]).unwrap();
        assert!(get_merge_options(&matches).is_none());

        let matches = get_matches_from(["pmerge", "-l", "a", "-r", "", "-t", "c"]).unwrap();
        assert!(get_merge_options(&matches).is_none());
    }

    #[test]
    fn test_verbosity_and_log_file() {
        let matches = get_matches_from(["pmerge", "-vv", "--log-file", "merge.log"]).unwrap();
        assert_eq!(get_verbosity(&matches), LogLevel::Trace);
        assert_eq!(get_log_file(&matches).as_deref(), Some("merge.log"));

        let matches = get_matches_from(["pmerge"]).unwrap();
        assert_eq!(get_verbosity(&matches), LogLevel::Info);
        assert!(get_log_file(&matches).is_none());
    }
}
