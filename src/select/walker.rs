//! Walker - top-down traversal that streams admitted files to a sink

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::file_utils::{FileContent, read_lossy};

use super::filter::{Admission, Selector};
use super::utils::relative_posix;

/// Receives admitted files in traversal order.
pub trait ContentSink {
    /// Emit one file block. `header` is the root-relative path, or the
    /// absolute path for entries that do not exist (broken symlinks).
    fn emit_file(&mut self, header: &str, content: &FileContent) -> io::Result<()>;
}

/// Counters gathered during a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    pub files_included: usize,
    pub files_unreadable: usize,
    pub files_skipped: usize,
    pub dirs_pruned: usize,
}

/// Children of one directory, split by kind, in enumeration order.
#[derive(Debug, Default)]
struct DirListing {
    files: Vec<PathBuf>,
    subdirs: Vec<PathBuf>,
}

/// Depth-first, top-down walker.
///
/// Within a directory its files are emitted before any subdirectory is
/// entered. Entries are taken in the order the filesystem yields them.
/// Symlinked directories are neither descended nor emitted.
pub struct Walker {
    selector: Selector,
}

impl Walker {
    pub fn new(selector: Selector) -> Self {
        Self { selector }
    }

    /// Walk from the selector's root. Only sink errors are returned.
    pub fn walk<S: ContentSink>(&self, sink: &mut S) -> io::Result<WalkStats> {
        let mut stats = WalkStats::default();
        let root = self.selector.root();

        if let Admission::Reject(reason) = self.selector.admit_dir(root) {
            debug!(path = %root.display(), %reason, "skipping directory");
            stats.dirs_pruned += 1;
            return Ok(stats);
        }

        self.walk_dir(root, sink, &mut stats)?;
        Ok(stats)
    }

    fn walk_dir<S: ContentSink>(
        &self,
        dir: &Path,
        sink: &mut S,
        stats: &mut WalkStats,
    ) -> io::Result<()> {
        let Some(listing) = read_listing(dir) else {
            return Ok(());
        };

        let subdirs = self.admitted_subdirs(listing.subdirs, stats);

        for file in &listing.files {
            self.visit_file(file, sink, stats)?;
        }

        for subdir in &subdirs {
            self.walk_dir(subdir, sink, stats)?;
        }

        Ok(())
    }

    /// Build the list of subdirectories to descend into. Pruned directories
    /// are dropped here so their contents are never listed.
    fn admitted_subdirs(&self, candidates: Vec<PathBuf>, stats: &mut WalkStats) -> Vec<PathBuf> {
        candidates
            .into_iter()
            .filter(|dir| match self.selector.admit_dir(dir) {
                Admission::Admit => true,
                Admission::Reject(reason) => {
                    debug!(path = %dir.display(), %reason, "skipping descending into");
                    stats.dirs_pruned += 1;
                    false
                }
            })
            .collect()
    }

    fn visit_file<S: ContentSink>(
        &self,
        file: &Path,
        sink: &mut S,
        stats: &mut WalkStats,
    ) -> io::Result<()> {
        if let Admission::Reject(reason) = self.selector.admit_file(file) {
            debug!(path = %file.display(), %reason, "skipping file");
            stats.files_skipped += 1;
            return Ok(());
        }

        let header = self.header_for(file);
        let content = read_lossy(file);
        match &content {
            FileContent::Text(text) => {
                debug!(path = %header, bytes = text.len(), "including file");
            }
            FileContent::Unreadable(reason) => {
                warn!(path = %header, %reason, "could not read file");
                stats.files_unreadable += 1;
            }
        }

        sink.emit_file(&header, &content)?;
        stats.files_included += 1;
        Ok(())
    }

    fn header_for(&self, file: &Path) -> String {
        if file.exists() {
            if let Some(rel) = relative_posix(file, self.selector.root()) {
                return rel;
            }
        }
        file.display().to_string()
    }
}

/// List a directory. Unlistable directories are logged and skipped.
fn read_listing(dir: &Path) -> Option<DirListing> {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            warn!(path = %dir.display(), error = %e, "cannot list directory");
            return None;
        }
    };

    Some(split_entries(dir, entries))
}

/// Sort listing entries into files and subdirectories. Entries that fail to
/// enumerate are logged and dropped.
fn split_entries<I>(dir: &Path, entries: I) -> DirListing
where
    I: IntoIterator<Item = io::Result<std::fs::DirEntry>>,
{
    let mut listing = DirListing::default();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(path = %dir.display(), error = %e, "cannot read directory entry");
                continue;
            }
        };
        let path = entry.path();
        let Ok(file_type) = entry.file_type() else {
            listing.files.push(path);
            continue;
        };

        if file_type.is_dir() {
            listing.subdirs.push(path);
        } else if file_type.is_symlink() && path.is_dir() {
            debug!(path = %path.display(), "not following directory symlink");
        } else {
            listing.files.push(path);
        }
    }

    listing
}
