//! File selection and traversal
//!
//! This module decides what ends up in an aggregated snapshot:
//!
//! - `Selector`: pure admission checks for directories and files
//! - `Walker`: top-down traversal that prunes rejected directories before
//!   descending and streams admitted files to a `ContentSink`

mod filter;
mod rules;
mod utils;
mod walker;

pub use filter::{Admission, Selector, SkipReason};
pub use rules::{ExtensionFilter, IgnoreRuleSet, normalize_extension};
pub use utils::{normalize_rule, relative_posix, resolve};
pub use walker::{ContentSink, WalkStats, Walker};
