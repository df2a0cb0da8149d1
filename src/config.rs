//! Component configuration
//!
//! Construction options for an OTP field. Hosts usually build an `OtpConfig`
//! in code; the binary also reads it from `~/.config/otp-field/config.yaml`.
//! Keys may be written in camelCase (`numberOfInputs`) or snake_case.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Slot count used when nothing is configured
pub const DEFAULT_NUMBER_OF_INPUTS: usize = 6;

/// Construction options for one OTP field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpConfig {
    /// Number of slots; fixed for the component's lifetime
    #[serde(default = "default_number_of_inputs", alias = "number_of_inputs")]
    pub number_of_inputs: usize,

    /// Replaces the default class on every slot
    #[serde(
        default,
        alias = "input_custom_class",
        skip_serializing_if = "Option::is_none"
    )]
    pub input_custom_class: Option<String>,

    /// Applied to filled slots instead of the default "complete" class
    #[serde(
        default,
        alias = "input_complete_custom_class",
        skip_serializing_if = "Option::is_none"
    )]
    pub input_complete_custom_class: Option<String>,

    /// Container styling hook; see [`OtpConfig::container_class_override`]
    #[serde(
        default,
        alias = "inputs_container_custom_class",
        skip_serializing_if = "Option::is_none"
    )]
    pub inputs_container_custom_class: Option<String>,
}

fn default_number_of_inputs() -> usize {
    DEFAULT_NUMBER_OF_INPUTS
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self::with_inputs(DEFAULT_NUMBER_OF_INPUTS)
    }
}

/// Treat an empty class string the same as an unset one
fn non_empty(class: &Option<String>) -> Option<&str> {
    class.as_deref().filter(|c| !c.is_empty())
}

impl OtpConfig {
    /// Default styling with `number_of_inputs` slots
    pub fn with_inputs(number_of_inputs: usize) -> Self {
        Self {
            number_of_inputs,
            input_custom_class: None,
            input_complete_custom_class: None,
            inputs_container_custom_class: None,
        }
    }

    pub fn input_class(&self) -> Option<&str> {
        non_empty(&self.input_custom_class)
    }

    pub fn input_complete_class(&self) -> Option<&str> {
        non_empty(&self.input_complete_custom_class)
    }

    /// The container class to use in place of the default, if any
    ///
    /// Setting `inputs_container_custom_class` does not apply that class.
    /// It switches the container to `input_complete_custom_class`, or to no
    /// class at all when that is unset. This coupling is kept on purpose so
    /// existing stylesheets keep matching; it is the one override slot for
    /// the container.
    pub fn container_class_override(&self) -> Option<&str> {
        non_empty(&self.inputs_container_custom_class)
            .map(|_| self.input_complete_class().unwrap_or(""))
    }

    /// Parse a config from YAML (JSON is accepted too)
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse OTP config")
    }

    /// Load a config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config = Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid config at {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from the user config directory, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }
}
