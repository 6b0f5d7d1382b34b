//! License header hygiene for platform source trees.
//!
//! This crate decides which header comment a file should carry and applies
//! it in place, walking whole directory trees one file at a time.

pub mod apply;
pub mod rules;

pub use apply::{FileOutcome, WalkSummary, apply_header, process_root};
