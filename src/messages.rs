//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use serde::{Deserialize, Serialize};

use crate::keymap::Key;

/// Slot value messages (the reducer's only action)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotMsg {
    /// Set slot `index` to the last character of `value` (empty clears)
    Write { index: usize, value: String },
    /// Write to whichever slot is active
    WriteActive(String),
    /// Clear the active slot
    ClearActive,
}

/// Focus navigation messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMsg {
    /// Move focus one slot left, stopping at the first slot
    Prev,
    /// Move focus one slot right, stopping at the last slot
    Next,
    /// Focus a specific slot (clamped into range)
    At(usize),
}

/// Raw events routed from the rendering surface
///
/// Change, key-down and paste act on the active slot. Focus carries the
/// 0-indexed position from the slot's data id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FieldEvent {
    /// The field's text changed (character entry)
    Change { value: String },
    /// A key was pressed
    KeyDown { key: Key },
    /// Clipboard text was pasted
    Paste { text: String },
    /// A slot received focus (pointer click, tab)
    Focus { index: usize },
}

impl FieldEvent {
    /// Short label for log output
    pub fn kind(&self) -> &'static str {
        match self {
            FieldEvent::Change { .. } => "change",
            FieldEvent::KeyDown { .. } => "key_down",
            FieldEvent::Paste { .. } => "paste",
            FieldEvent::Focus { .. } => "focus",
        }
    }
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Slot(SlotMsg),
    Focus(FocusMsg),
    Field(FieldEvent),
}
