//! CLI entry point for collate

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use collate::defaults::DEFAULT_OUTPUT_NAME;
use collate::logging::init_tracing;
use collate::{
    CollateError, CollectConfig, ExtensionFilter, IgnoreRuleSet, collect, print_summary,
    print_summary_json,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "collate")]
#[command(about = "Collect the contents of a directory tree into a single aggregated file")]
#[command(version)]
struct Args {
    /// Root folder to scan
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Output filename to create inside root
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT_NAME)]
    output: String,

    /// Folder name or relative folder path to ignore (can be used multiple times)
    #[arg(short = 'F', long = "ignore-folder", value_name = "FOLDER")]
    ignore_folder: Vec<String>,

    /// File name or relative file path to ignore (can be used multiple times)
    #[arg(short = 'f', long = "ignore-file", value_name = "FILE")]
    ignore_file: Vec<String>,

    /// Glob pattern applied to the relative file path (can be used multiple times)
    #[arg(short = 'g', long = "ignore-glob", value_name = "PATTERN")]
    ignore_glob: Vec<String>,

    /// Only include these file extensions, e.g. `-e py -e .xml`
    /// (leading dot optional, case-insensitive)
    #[arg(short = 'e', long = "only-ext", value_name = "EXT")]
    only_ext: Vec<String>,

    /// Create a zip file containing the generated output file
    #[arg(long = "zip")]
    zip: bool,

    /// Show every skipped and included entry on stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Print the run summary as JSON
    #[arg(long = "json")]
    json: bool,
}

impl Args {
    /// Merge the built-in ignore lists with the user-supplied ones.
    fn to_config(&self) -> CollectConfig {
        let mut rules = IgnoreRuleSet::with_defaults();
        rules
            .extend_folders(self.ignore_folder.iter().cloned())
            .extend_files(self.ignore_file.iter().cloned())
            .extend_globs(self.ignore_glob.iter().cloned());

        CollectConfig {
            root: self.root.clone(),
            output_name: self.output.clone(),
            rules,
            extensions: ExtensionFilter::from_values(&self.only_ext),
            zip: self.zip,
        }
    }
}

fn main() {
    let args = Args::parse();
    let use_color = should_use_color(args.color);

    if let Err(e) = init_tracing(args.verbose, use_color && std::io::stderr().is_terminal()) {
        eprintln!("collate: warning: logging unavailable: {}", e);
    }

    let summary = match collect(&args.to_config()) {
        Ok(summary) => summary,
        Err(e) => {
            report_error(&e);
            process::exit(1);
        }
    };

    let result = if args.json {
        print_summary_json(&summary)
    } else {
        print_summary(&summary, use_color)
    };

    if let Err(e) = result {
        eprintln!("collate: error writing output: {}", e);
        process::exit(1);
    }
}

/// Print a fatal error with its cause chain.
fn report_error(err: &CollateError) {
    eprint!("collate: {}", err);
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        eprint!(": {}", cause);
        source = cause.source();
    }
    eprintln!();

    if let CollateError::Archive { output, .. } = err {
        eprintln!("collate: aggregated file was written: {}", output.display());
    }
}
