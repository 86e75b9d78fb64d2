//! Diagnostic logging setup
//!
//! Library code emits `tracing` events; the binary installs a subscriber
//! that writes compact lines to stderr so the snapshot on disk and the
//! completion message on stdout stay clean.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
///
/// Verbose mode shows every include/skip decision; otherwise only warnings
/// (unreadable files, unlistable directories) get through.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "collate=debug" } else { "collate=warn" }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the verbose flag.
pub fn init_tracing(verbose: bool, use_color: bool) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(verbose)))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(use_color)
                .with_target(verbose)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_line_number(false)
                .with_file(false)
                .without_time()
                .compact(),
        )
        .try_init()?;

    Ok(())
}
