//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! slot and focus transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=otp_field::update=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/otp-field/logs/otp-field.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::OtpState;

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr so the binary's stdout stays machine-readable.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "otp-field.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of slot/focus state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    pub values: Vec<Option<char>>,
    pub active_index: usize,
}

impl StateSnapshot {
    pub fn from_state(state: &OtpState) -> Self {
        Self {
            values: state.values().to_vec(),
            active_index: state.active_index(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &StateSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        for (i, (before, after)) in self.values.iter().zip(&other.values).enumerate() {
            if before != after {
                changes.push(format!(
                    "slot {}: {} → {}",
                    i,
                    slot_label(*before),
                    slot_label(*after)
                ));
            }
        }

        if self.active_index != other.active_index {
            changes.push(format!(
                "active: {} → {}",
                self.active_index, other.active_index
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

fn slot_label(value: Option<char>) -> String {
    match value {
        Some(c) => format!("{:?}", c),
        None => "_".to_string(),
    }
}
