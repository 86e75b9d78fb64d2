//! Collate - concatenate a project tree into one readable snapshot

pub mod collect;
pub mod config;
pub mod defaults;
pub mod error;
pub mod file_utils;
pub mod logging;
pub mod output;
pub mod package;
pub mod select;
pub mod stats;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use collect::{collect, collect_files, resolve_root};
pub use config::CollectConfig;
pub use error::{CollateError, Result};
pub use file_utils::{FileContent, read_lossy};
pub use output::AggregateWriter;
pub use package::{archive_path, zip_output};
pub use select::{
    Admission, ContentSink, ExtensionFilter, IgnoreRuleSet, Selector, SkipReason, WalkStats,
    Walker,
};
pub use stats::{ScanSummary, print_summary, print_summary_json};
