//! Directory and file admission decisions
//!
//! `Selector` compiles an `IgnoreRuleSet` against a scan root once, then
//! answers "prune this directory?" and "collect this file?" without touching
//! traversal state. Path resolution failures are treated as a non-match for
//! the rule being checked; they never abort a scan.

use std::fmt;
use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::error::{CollateError, Result};

use super::rules::{ExtensionFilter, IgnoreRuleSet};
use super::utils::{
    compile_glob, dotted_extension, glob_matches, normalize_rule, relative_posix, resolve,
};

/// Outcome of an admission check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    Admit,
    Reject(SkipReason),
}

impl Admission {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Admission::Admit)
    }
}

/// The rule that rejected an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// A folder rule equals one of the directory's path components.
    FolderName(String),
    /// A folder rule resolves to the directory or one of its ancestors.
    FolderPath(String),
    /// The entry is the output file being written.
    OutputFile,
    /// The extension is not in the allow-list.
    Extension,
    /// A file rule equals the bare file name.
    FileName(String),
    /// A file rule resolves to the same file.
    FilePath(String),
    /// A glob rule matches the root-relative path.
    Glob(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::FolderName(rule) => write!(f, "component match (matched {})", rule),
            SkipReason::FolderPath(rule) => write!(f, "path prefix match (matched {})", rule),
            SkipReason::OutputFile => write!(f, "output file itself"),
            SkipReason::Extension => write!(f, "extension not allowed"),
            SkipReason::FileName(rule) => write!(f, "exact name match (matched {})", rule),
            SkipReason::FilePath(rule) => write!(f, "relative path match (matched {})", rule),
            SkipReason::Glob(pattern) => write!(f, "glob match (pattern {})", pattern),
        }
    }
}

/// A folder or file rule with its precomputed forms.
#[derive(Debug)]
struct PathRule {
    raw: String,
    normalized: String,
    /// `root.join(normalized)` canonicalized, if it resolves.
    resolved: Option<PathBuf>,
}

impl PathRule {
    fn new(raw: &str, root: &Path) -> Self {
        let normalized = normalize_rule(raw);
        let resolved = resolve(&root.join(&normalized));
        Self {
            raw: raw.to_string(),
            normalized,
            resolved,
        }
    }
}

#[derive(Debug)]
struct GlobRule {
    raw: String,
    pattern: Pattern,
}

/// Admission logic for one scan root.
#[derive(Debug)]
pub struct Selector {
    root: PathBuf,
    output: Option<PathBuf>,
    folders: Vec<PathRule>,
    files: Vec<PathRule>,
    globs: Vec<GlobRule>,
    extensions: Option<ExtensionFilter>,
}

impl Selector {
    /// Compile rules against a canonical scan root.
    ///
    /// Glob rules follow `fnmatch`: `**` is an ordinary `*` and an unclosed
    /// `[` is literal, so shell-valid patterns always compile.
    pub fn new(
        root: &Path,
        rules: &IgnoreRuleSet,
        extensions: Option<ExtensionFilter>,
    ) -> Result<Self> {
        let globs = rules
            .globs()
            .map(|raw| {
                compile_glob(raw)
                    .map(|pattern| GlobRule {
                        raw: raw.to_string(),
                        pattern,
                    })
                    .map_err(|source| CollateError::InvalidPattern {
                        pattern: raw.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            root: root.to_path_buf(),
            output: None,
            folders: rules.folders().map(|r| PathRule::new(r, root)).collect(),
            files: rules.files().map(|r| PathRule::new(r, root)).collect(),
            globs,
            extensions,
        })
    }

    /// Exclude the output file. The path is resolved here, once, so the file
    /// should already exist.
    pub fn with_output(mut self, output: &Path) -> Self {
        self.output = Some(resolve(output).unwrap_or_else(|| output.to_path_buf()));
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Decide whether a directory is kept or pruned with its whole subtree.
    pub fn admit_dir(&self, dir: &Path) -> Admission {
        // Never reached by the walker, which stays under the root
        let Some(rel) = relative_posix(dir, &self.root) else {
            return Admission::Admit;
        };
        let resolved = resolve(dir);

        for rule in &self.folders {
            if rel.split('/').any(|c| !c.is_empty() && c == rule.normalized) {
                return Admission::Reject(SkipReason::FolderName(rule.raw.clone()));
            }
            if let (Some(rule_path), Some(dir_path)) = (&rule.resolved, &resolved) {
                if dir_path.starts_with(rule_path) {
                    return Admission::Reject(SkipReason::FolderPath(rule.raw.clone()));
                }
            }
        }

        Admission::Admit
    }

    /// Decide whether a file's content is collected.
    pub fn admit_file(&self, file: &Path) -> Admission {
        let resolved = resolve(file);

        if let (Some(output), Some(file_path)) = (&self.output, &resolved) {
            if output == file_path {
                return Admission::Reject(SkipReason::OutputFile);
            }
        }

        if let Some(filter) = &self.extensions {
            if !filter.allows(dotted_extension(file).as_deref()) {
                return Admission::Reject(SkipReason::Extension);
            }
        }

        let name = file
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        if let Some(rule) = self.files.iter().find(|r| r.raw == name) {
            return Admission::Reject(SkipReason::FileName(rule.raw.clone()));
        }

        if let Some(file_path) = &resolved {
            if let Some(rule) = self
                .files
                .iter()
                .find(|r| r.resolved.as_ref() == Some(file_path))
            {
                return Admission::Reject(SkipReason::FilePath(rule.raw.clone()));
            }
        }

        let rel = relative_posix(file, &self.root)
            .unwrap_or_else(|| file.to_string_lossy().replace('\\', "/"));
        if let Some(rule) = self.globs.iter().find(|g| glob_matches(&g.pattern, &rel)) {
            return Admission::Reject(SkipReason::Glob(rule.raw.clone()));
        }

        Admission::Admit
    }
}
