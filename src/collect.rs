//! Collection runs: resolve the root, write the snapshot, optionally zip it

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::info;

use crate::config::CollectConfig;
use crate::error::{CollateError, Result};
use crate::output::AggregateWriter;
use crate::package::zip_output;
use crate::select::{Selector, Walker};
use crate::stats::ScanSummary;

/// Canonicalize the scan root and make sure it is a directory.
pub fn resolve_root(root: &Path) -> Result<PathBuf> {
    let resolved = dunce::canonicalize(root).map_err(|source| CollateError::RootNotFound {
        path: root.to_path_buf(),
        source,
    })?;
    if !resolved.is_dir() {
        return Err(CollateError::RootNotDirectory(resolved));
    }
    Ok(resolved)
}

/// Run a full collection and return its summary.
///
/// Fails when the root is unusable, a glob rule is invalid, or the output
/// cannot be created or written. Unreadable inputs never fail the run. An
/// archive failure is reported as `CollateError::Archive` after the output
/// file has been completely written.
pub fn collect(config: &CollectConfig) -> Result<ScanSummary> {
    let started = Instant::now();
    let root = resolve_root(&config.root)?;
    let selector = Selector::new(&root, &config.rules, config.extensions.clone())?;

    let output = root.join(&config.output_name);
    let file = File::create(&output).map_err(|source| CollateError::OutputCreate {
        path: output.clone(),
        source,
    })?;
    let walker = Walker::new(selector.with_output(&output));

    info!(root = %root.display(), output = %output.display(), "collecting files");
    if let Some(filter) = &config.extensions {
        let allowed = filter.iter().collect::<Vec<_>>().join(" ");
        info!(extensions = %allowed, "restricting to extensions");
    }

    let write_error = |source| CollateError::OutputWrite {
        path: output.clone(),
        source,
    };
    let mut writer = AggregateWriter::new(BufWriter::new(file));
    writer.write_preamble(&root).map_err(write_error)?;
    let walk = walker.walk(&mut writer).map_err(write_error)?;
    let (_, bytes) = writer.finish().map_err(write_error)?;

    let mut summary = ScanSummary::new(root, output, walk, bytes, started.elapsed());
    info!(
        files = summary.files_included,
        skipped = summary.files_skipped,
        pruned = summary.dirs_pruned,
        "wrote aggregated file"
    );

    if config.zip {
        summary.archive = Some(zip_output(&summary.output)?);
        summary.elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    }

    Ok(summary)
}

/// Run a collection and return the path of the produced artifact: the
/// archive when zipping was requested, otherwise the text file.
pub fn collect_files(config: &CollectConfig) -> Result<PathBuf> {
    collect(config).map(|summary| summary.result_path().clone())
}
