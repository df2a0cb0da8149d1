//! Key-down dispatch for the OTP field
//!
//! Key identity is resolved to a leaf action, and the action expands into
//! messages for the update loop.
//!
//! # Architecture
//!
//! ```text
//! surface key name → Key::from_dom_key() → action_for() → KeyAction → Vec<Msg>
//! ```
//!
//! Keys without an action are left to the surface: a printable character
//! comes back as a change event and goes through character entry instead.

mod command;
mod types;

pub use command::KeyAction;
pub use types::Key;

/// Look up the action bound to a key, if any
pub fn action_for(key: &Key) -> Option<KeyAction> {
    match key {
        Key::Backspace => Some(KeyAction::ClearAndFocusPrev),
        Key::Delete => Some(KeyAction::Clear),
        Key::Left => Some(KeyAction::FocusPrev),
        Key::Right => Some(KeyAction::FocusNext),
        Key::Space => Some(KeyAction::Swallow),
        Key::Char(_) | Key::Named(_) => None,
    }
}
