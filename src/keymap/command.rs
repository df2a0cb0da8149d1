//! Leaf actions a key-down can trigger
//!
//! Actions are the bridge between key identity and the message system.
//! Each action maps to zero or more `Msg` values for the Elm-style update loop.

use crate::messages::{FocusMsg, Msg, SlotMsg};

/// Every key-down the field reacts to resolves to exactly one of these
///
/// All of them suppress the surface's native field behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Erase the active slot and retreat (Backspace)
    ClearAndFocusPrev,
    /// Erase the active slot, focus stays (Delete)
    Clear,
    /// Move focus one slot left
    FocusPrev,
    /// Move focus one slot right
    FocusNext,
    /// Swallow the key without touching state (Space)
    Swallow,
}

impl KeyAction {
    /// Convert this action into the messages it dispatches, in order
    pub fn to_msgs(self) -> Vec<Msg> {
        match self {
            KeyAction::ClearAndFocusPrev => vec![
                Msg::Slot(SlotMsg::ClearActive),
                Msg::Focus(FocusMsg::Prev),
            ],
            KeyAction::Clear => vec![Msg::Slot(SlotMsg::ClearActive)],
            KeyAction::FocusPrev => vec![Msg::Focus(FocusMsg::Prev)],
            KeyAction::FocusNext => vec![Msg::Focus(FocusMsg::Next)],
            KeyAction::Swallow => vec![],
        }
    }

    /// Human-readable name for log output
    pub fn display_name(self) -> &'static str {
        match self {
            KeyAction::ClearAndFocusPrev => "Clear and Focus Previous",
            KeyAction::Clear => "Clear",
            KeyAction::FocusPrev => "Focus Previous",
            KeyAction::FocusNext => "Focus Next",
            KeyAction::Swallow => "Swallow",
        }
    }
}
