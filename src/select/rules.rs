//! Ignore rules and the extension allow-list

use indexmap::IndexSet;

use crate::defaults::{DEFAULT_IGNORE_FILES, DEFAULT_IGNORE_FOLDERS, DEFAULT_IGNORE_GLOBS};

/// Three independent rule collections.
///
/// Each collection is an insertion-ordered set: the first occurrence of a
/// value wins and later duplicates are dropped, so merging defaults with
/// user entries never changes matching behaviour. Empty values are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreRuleSet {
    folders: IndexSet<String>,
    files: IndexSet<String>,
    globs: IndexSet<String>,
}

impl IgnoreRuleSet {
    /// An empty rule set; nothing is ignored except the output file itself.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in defaults.
    pub fn with_defaults() -> Self {
        let mut rules = Self::new();
        rules.extend_folders(DEFAULT_IGNORE_FOLDERS.iter().copied());
        rules.extend_files(DEFAULT_IGNORE_FILES.iter().copied());
        rules.extend_globs(DEFAULT_IGNORE_GLOBS.iter().copied());
        rules
    }

    pub fn extend_folders<I, S>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_set(&mut self.folders, entries);
        self
    }

    pub fn extend_files<I, S>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_set(&mut self.files, entries);
        self
    }

    pub fn extend_globs<I, S>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_set(&mut self.globs, entries);
        self
    }

    pub fn folders(&self) -> impl Iterator<Item = &str> {
        self.folders.iter().map(String::as_str)
    }

    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(String::as_str)
    }

    pub fn globs(&self) -> impl Iterator<Item = &str> {
        self.globs.iter().map(String::as_str)
    }
}

fn extend_set<I, S>(set: &mut IndexSet<String>, entries: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    for entry in entries {
        let entry = entry.into();
        if !entry.is_empty() {
            set.insert(entry);
        }
    }
}

/// Allow-list of lower-cased, dot-prefixed extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter(IndexSet<String>);

impl ExtensionFilter {
    /// Build a filter from raw values such as `"py"`, `".RS"` or `"Md"`.
    ///
    /// Returns `None` when no non-empty value remains, meaning "no filter".
    pub fn from_values<I, S>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: IndexSet<String> = values
            .into_iter()
            .filter_map(|v| normalize_extension(v.as_ref()))
            .collect();

        if set.is_empty() { None } else { Some(Self(set)) }
    }

    /// Check whether a dotted, lower-cased extension is allowed.
    pub fn allows(&self, dotted: Option<&str>) -> bool {
        dotted.is_some_and(|ext| self.0.contains(ext))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Normalize an extension to lowercase with a single leading dot.
pub fn normalize_extension(ext: &str) -> Option<String> {
    let ext = ext.trim();
    if ext.is_empty() {
        return None;
    }
    let lower = ext.to_lowercase();
    if lower.starts_with('.') {
        Some(lower)
    } else {
        Some(format!(".{}", lower))
    }
}
