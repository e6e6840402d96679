//! Path generation module
//!
//! This module contains components for numbering output files and for
//! pairing the left and right folders into one ordered plan.

mod interleave;
mod numbering;

pub use interleave::{MergePlan, PlannedCopy, Side, plan_merge, reverse};
pub use numbering::{numbered_name, pad_index, pad_width};
