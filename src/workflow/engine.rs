//! Workflow engine
//!
//! This module contains the engine that orchestrates the workflow steps.

use std::fs::create_dir_all;

use colored::Colorize;
use log::{debug, error, info, warn};

use crate::discovery::scan_directory;
use crate::errors::{Result, directory_access_error};
use crate::file_ops::FileCopier;
use crate::logging::format_message;
use crate::path_gen::{MergePlan, plan_merge};

use super::context::{CopyFailure, ErrorPolicy, MergeOptions, MergeReport};

/// Merges the left and right folders into the target folder
///
/// This function orchestrates the workflow steps:
/// 1. Scan the left and the right folder for files with the extension
/// 2. Pair them up: left in name order, right in reversed name order
/// 3. Make sure the target folder exists
/// 4. Copy every file to its numbered name, in plan order
///
/// Nothing is written before both folders were scanned and found to hold
/// the same number of files. In a dry run nothing is written at all and the
/// plan is printed instead.
///
/// # Arguments
/// * `options` - Options for the run
/// * `copier` - Places each file at its destination
///
/// # Returns
/// * `Result<MergeReport>` - The executed plan with statistics, or an error
///
/// # Errors
/// * Returns an error if a folder cannot be read or the target cannot be created
/// * Returns an error if the folders hold a different number of files
/// * Returns the first copy error when the policy is `FailFast`
pub fn merge_directories<C: FileCopier>(options: &MergeOptions, copier: &C) -> Result<MergeReport> {
    // Step 1: Scan both folders
    let left = scan_directory(&options.left, &options.extension)?;
    let right = scan_directory(&options.right, &options.extension)?;

    // Step 2: Pair them up
    let plan = plan_merge(&left, &right, &options.target)?;

    info!(
        "merge from {} and reversed {} to {}{}",
        options.left.display(),
        options.right.display(),
        options.target.display(),
        if options.dry_run { " (dry run)" } else { "" }
    );

    let mut report = MergeReport::new(plan, options.dry_run);

    if options.dry_run {
        print_plan(&report.plan);
        return Ok(report);
    }

    if report.plan.is_empty() {
        info!("No files found to merge");
        return Ok(report);
    }

    // Step 3: Make sure the target folder exists
    create_dir_all(&options.target)
        .map_err(|e| directory_access_error(e, options.target.clone()))?;

    // Step 4: Copy in plan order
    let copies = report.plan.copies.clone();
    for planned in copies {
        debug!(
            "{} [{}] {} -> {}",
            planned.index,
            planned.side,
            planned.source.display(),
            planned.destination.display()
        );

        match copier.copy_file(&planned.source, &planned.destination) {
            Ok(outcome) => report.record_outcome(outcome),
            Err(e) => match options.error_policy {
                ErrorPolicy::FailFast => {
                    error!("Stopping after failed copy: {e}");
                    return Err(e);
                }
                ErrorPolicy::BestEffort => {
                    error!("Failed to copy {}: {e}", planned.source.display());
                    report.record_failure(CopyFailure {
                        source: planned.source,
                        destination: planned.destination,
                        error: e,
                    });
                }
            },
        }
    }

    log_summary(&report);

    Ok(report)
}

fn log_summary(report: &MergeReport) {
    info!(
        "Finished merging {} of {} files ({} linked, {} copied, {} unchanged)",
        report.completed(),
        report.stats.planned,
        report.stats.linked,
        report.stats.copied,
        report.stats.identical
    );

    if report.has_failures() {
        let message = format!("{} files could not be copied:", report.stats.failed);
        let colored_message = format!("{}", message.as_str().bold().red());
        warn!("{}", format_message(&message, &colored_message));
        for failure in &report.failures {
            warn!(
                "  {} -> {}: {}",
                failure.source.display(),
                failure.destination.display(),
                failure.error
            );
        }
    }
}

/// Prints the planned copies of a dry run
pub fn print_plan(plan: &MergePlan) {
    if plan.is_empty() {
        println!("\nNo files to merge.");
        return;
    }

    println!("\nDetailed plan of operations:");
    println!("===========================");
    for planned in &plan.copies {
        println!("{:>width$} ({})", planned.index, planned.side, width = plan.pad_width);
        println!("  From: {}", planned.source.display());
        println!("  To:   {}", planned.destination.display());
    }

    println!("\nSummary:");
    println!("--------");
    println!("  Pairs:            {}", plan.pairs());
    println!("  Files to copy:    {}", plan.copies.len());
    println!("  Prefix width:     {}", plan.pad_width);
    println!("\nRun without --dry flag to execute these operations.");
}
