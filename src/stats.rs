//! Run summary collection and display
//!
//! A `ScanSummary` records what a collection run produced: where the
//! snapshot went and how many entries were included, skipped or pruned.

use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::select::WalkStats;

/// Outcome of a collection run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    /// Canonical scan root
    pub root: PathBuf,
    /// Aggregated text file
    pub output: PathBuf,
    /// Zip archive, when one was requested and written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive: Option<PathBuf>,
    /// Files with a block in the output (readable or not)
    pub files_included: usize,
    /// Included files whose content could not be read
    pub files_unreadable: usize,
    /// Files rejected by a rule
    pub files_skipped: usize,
    /// Directories pruned before descent
    pub dirs_pruned: usize,
    /// Size of the output file
    pub bytes_written: u64,
    pub elapsed_ms: u64,
}

impl ScanSummary {
    pub fn new(root: PathBuf, output: PathBuf, walk: WalkStats, bytes: u64, elapsed: Duration) -> Self {
        Self {
            root,
            output,
            archive: None,
            files_included: walk.files_included,
            files_unreadable: walk.files_unreadable,
            files_skipped: walk.files_skipped,
            dirs_pruned: walk.dirs_pruned,
            bytes_written: bytes,
            elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// The artifact to report: the archive when present, else the output.
    pub fn result_path(&self) -> &PathBuf {
        self.archive.as_ref().unwrap_or(&self.output)
    }
}

/// Print the completion message and a one-line summary to stdout.
pub fn print_summary(summary: &ScanSummary, use_color: bool) -> io::Result<()> {
    let color_choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);

    writeln!(stdout)?;
    let mut done = ColorSpec::new();
    done.set_fg(Some(Color::Green)).set_bold(true);
    stdout.set_color(&done)?;
    writeln!(stdout, "Done.")?;
    stdout.reset()?;

    write!(stdout, "Result: ")?;
    let mut path_color = ColorSpec::new();
    path_color.set_fg(Some(Color::Cyan));
    stdout.set_color(&path_color)?;
    writeln!(stdout, "{}", summary.result_path().display())?;
    stdout.reset()?;

    writeln!(stdout, "{}", summary_line(summary))?;
    Ok(())
}

/// One-line description of the counters.
fn summary_line(summary: &ScanSummary) -> String {
    let mut line = format!(
        "{} {}",
        summary.files_included,
        plural(summary.files_included, "file", "files")
    );
    if summary.files_unreadable > 0 {
        line.push_str(&format!(" ({} unreadable)", summary.files_unreadable));
    }
    line.push_str(&format!(
        ", {} skipped, {} {} pruned, {} in {}",
        summary.files_skipped,
        summary.dirs_pruned,
        plural(summary.dirs_pruned, "directory", "directories"),
        format_size(summary.bytes_written),
        humantime::format_duration(Duration::from_millis(summary.elapsed_ms))
    ));
    line
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}

/// Format a size in bytes to human-readable format.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1}G", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1}M", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}K", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}

/// Print the summary as JSON.
pub fn print_summary_json(summary: &ScanSummary) -> io::Result<()> {
    let json = serde_json::to_string_pretty(summary).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
