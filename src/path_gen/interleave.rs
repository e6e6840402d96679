//! Pairing of the left and right folders
//!
//! The left folder is taken in name order and the right folder in reversed
//! name order. Position `i` of the plan pairs the i-th left file with the
//! i-th-from-last right file, left first.

use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, trace};

use super::numbering::{numbered_name, pad_width};
use crate::discovery::FileEntry;
use crate::errors::{Result, count_mismatch_error};

/// Which source folder a planned copy comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// One copy of the merge, in the order it will be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCopy {
    /// Position in the merged sequence, starting at 1
    pub index: usize,
    /// The folder the source file belongs to
    pub side: Side,
    /// The file to copy
    pub source: PathBuf,
    /// Where the numbered copy goes
    pub destination: PathBuf,
}

/// Ordered list of copies for one run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MergePlan {
    /// Width shared by every numeric prefix of this run
    pub pad_width: usize,
    /// Copies in generation order
    pub copies: Vec<PlannedCopy>,
}

impl MergePlan {
    /// Number of left/right pairs in the plan
    pub fn pairs(&self) -> usize {
        self.copies.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.copies.is_empty()
    }
}

/// Reverses a file list, returning the new order
pub fn reverse(mut files: Vec<FileEntry>) -> Vec<FileEntry> {
    files.reverse();
    files
}

/// Builds the merge plan for two scanned folders
///
/// `right` is given in scan order and is reversed here. Every left file is
/// followed by its right partner, and each gets the next index.
///
/// # Arguments
/// * `left` - Files of the left folder, in scan order
/// * `right` - Files of the right folder, in scan order
/// * `target` - The folder the numbered copies go to
///
/// # Errors
/// Returns a count mismatch error if the folders hold a different number of files
pub fn plan_merge(left: &[FileEntry], right: &[FileEntry], target: &Path) -> Result<MergePlan> {
    if left.len() != right.len() {
        return Err(count_mismatch_error(left.len(), right.len()));
    }

    let width = pad_width(left.len());
    let right = reverse(right.to_vec());
    debug!("Planning {} pairs with prefix width {width}", left.len());

    let mut copies = Vec::with_capacity(left.len() * 2);
    let mut index = 0;
    for (l, r) in left.iter().zip(right.iter()) {
        for (side, file) in [(Side::Left, l), (Side::Right, r)] {
            index += 1;
            let destination = target.join(numbered_name(index, width, &file.name));
            trace!("{index}: {} -> {}", file.path.display(), destination.display());
            copies.push(PlannedCopy {
                index,
                side,
                source: file.path.clone(),
                destination,
            });
        }
    }

    Ok(MergePlan {
        pad_width: width,
        copies,
    })
}
