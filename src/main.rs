use std::process::ExitCode;

use anyhow::Result;
use human_panic::setup_panic;
use log::{LevelFilter, error};

use pair_merge::prelude::*;

fn main() -> ExitCode {
    setup_panic!();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The logger may not be up yet
            if log::max_level() == LevelFilter::Off {
                eprintln!("{e}");
            } else {
                error!("{e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let matches = get_matches();

    let log_file = get_log_file(&matches);
    init_logger(get_verbosity(&matches), log_file.as_deref())?;

    let Some(options) = get_merge_options(&matches) else {
        print_usage()?;
        return Ok(());
    };

    merge_directories(&options, &LinkOrCopy)?;

    Ok(())
}
