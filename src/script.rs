//! Event scripts for replaying input against a field
//!
//! A script is a YAML (or JSON) list of surface events:
//!
//! ```yaml
//! - { event: change, value: "1" }
//! - { event: key_down, key: Backspace }
//! - { event: paste, text: "1234" }
//! - { event: focus, index: 2 }
//! ```

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::messages::FieldEvent;

/// Parse a list of events
pub fn parse_events(content: &str) -> Result<Vec<FieldEvent>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yaml::from_str(content).context("Failed to parse event script")
}

/// Read and parse a script file
pub fn load_events(path: &Path) -> Result<Vec<FieldEvent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script at {}", path.display()))?;
    parse_events(&content).with_context(|| format!("Invalid script at {}", path.display()))
}

/// Read and parse a script from any reader (stdin)
pub fn read_events<R: Read>(mut reader: R) -> Result<Vec<FieldEvent>> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .context("Failed to read event script")?;
    parse_events(&content)
}
