//! Command-line argument parsing for the replay host
//!
//! Supports:
//! - Replaying an event script from a file or stdin
//! - Overriding the slot count
//! - Loading an explicit config file
//! - JSON step reports instead of text lines

use clap::Parser;
use std::path::PathBuf;

/// Replay OTP field events and print every render and change notification
#[derive(Parser, Debug)]
#[command(name = "otp-field", version, about = "Replay events against an OTP field")]
pub struct CliArgs {
    /// Event script (YAML or JSON list of events); reads stdin when omitted
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// Number of slots (overrides the config file)
    #[arg(short = 'n', long, value_name = "N")]
    pub inputs: Option<usize>,

    /// Config file to use instead of ~/.config/otp-field/config.yaml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print one JSON object per event instead of text lines
    #[arg(long)]
    pub json: bool,
}

/// Where the event script comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSource {
    Stdin,
    File(PathBuf),
}

/// How each step is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub source: ScriptSource,
    /// Slot count override
    pub inputs: Option<usize>,
    /// Explicit config file
    pub config_path: Option<PathBuf>,
    pub output: OutputFormat,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let source = match self.script {
            Some(path) if path.as_os_str() == "-" => ScriptSource::Stdin,
            Some(path) => {
                if path.is_dir() {
                    return Err(format!("Script path is a directory: {}", path.display()));
                }
                ScriptSource::File(path)
            }
            None => ScriptSource::Stdin,
        };

        if let Some(path) = &self.config {
            if path.is_dir() {
                return Err(format!("Config path is a directory: {}", path.display()));
            }
        }

        Ok(StartupConfig {
            source,
            inputs: self.inputs,
            config_path: self.config,
            output: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
        })
    }
}
