//! Configuration for a collection run

use std::path::PathBuf;

use crate::defaults::DEFAULT_OUTPUT_NAME;
use crate::select::{ExtensionFilter, IgnoreRuleSet};

/// Everything a collection run needs.
#[derive(Debug, Clone)]
pub struct CollectConfig {
    /// Directory to scan. Resolved to an absolute path before traversal.
    pub root: PathBuf,
    /// Output file name, relative to `root`.
    pub output_name: String,
    pub rules: IgnoreRuleSet,
    /// When set, only files with these extensions are considered.
    pub extensions: Option<ExtensionFilter>,
    /// Wrap the output in a zip archive after writing it.
    pub zip: bool,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
            rules: IgnoreRuleSet::with_defaults(),
            extensions: None,
            zip: false,
        }
    }
}

impl CollectConfig {
    /// Default configuration for the given root.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }
}
