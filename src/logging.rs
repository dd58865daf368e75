//! Diagnostic tracing
//!
//! Dev diagnostics via `RUST_LOG`. Goes to stderr by default. The TUI owns
//! the terminal, so interactive play discards diagnostics unless a log file
//! is given.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Where diagnostics are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
    Discard,
}

impl<'a> LogTarget<'a> {
    /// Pick the target for a run; stderr is never used while the TUI is up
    #[must_use]
    pub const fn select(log_file: Option<&'a Path>, owns_terminal: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path),
            None if owns_terminal => Self::Discard,
            None => Self::Stderr,
        }
    }
}

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset.
/// Output: the log file (no ANSI colors), stderr, or nowhere.
///
/// # Example
/// ```bash
/// RUST_LOG=word_scramble=debug word_scramble --log-file game.log play
/// ```
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init(target: LogTarget<'_>) -> Result<()> {
    match target {
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("create log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(default_filter())
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .compact(),
                )
                .init();
        }
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(default_filter())
                .with(fmt::layer().with_writer(std::io::stderr).compact())
                .init();
        }
        LogTarget::Discard => {
            tracing_subscriber::registry()
                .with(EnvFilter::new("off"))
                .with(fmt::layer().with_writer(std::io::sink))
                .init();
        }
    }

    Ok(())
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_always_wins() {
        let path = Path::new("game.log");
        assert_eq!(LogTarget::select(Some(path), true), LogTarget::File(path));
        assert_eq!(LogTarget::select(Some(path), false), LogTarget::File(path));
    }

    #[test]
    fn tui_without_log_file_discards() {
        assert_eq!(LogTarget::select(None, true), LogTarget::Discard);
        assert_eq!(LogTarget::select(None, false), LogTarget::Stderr);
    }
}
