//! Core types for the keymap system: Key

use std::fmt;

use serde::{Deserialize, Serialize};

/// A logical key as reported by the rendering surface on key-down
///
/// Names follow the DOM `KeyboardEvent.key` convention, which is what most
/// surfaces already hand out. Unknown names are kept verbatim in `Named`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Key {
    /// A printable character key (never `' '`, see `Space`)
    Char(char),

    // Named keys with special handling
    Backspace,
    Delete,
    Left,
    Right,
    Space,

    /// Any other named key (Tab, Enter, Home, F1, ...)
    Named(String),
}

impl Key {
    /// Normalize a DOM-style key name
    ///
    /// `" "`, `"Spacebar"` (legacy IE/Edge) and `"space"` all map to `Space`.
    pub fn from_dom_key(name: &str) -> Self {
        match name {
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            "ArrowLeft" => Key::Left,
            "ArrowRight" => Key::Right,
            " " | "Spacebar" | "space" => Key::Space,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Named(name.to_string()),
                }
            }
        }
    }

    /// The DOM-style name for this key
    pub fn dom_name(&self) -> String {
        match self {
            Key::Char(c) => c.to_string(),
            Key::Backspace => "Backspace".to_string(),
            Key::Delete => "Delete".to_string(),
            Key::Left => "ArrowLeft".to_string(),
            Key::Right => "ArrowRight".to_string(),
            Key::Space => " ".to_string(),
            Key::Named(name) => name.clone(),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::from_dom_key(name)
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::from_dom_key(&name)
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.dom_name()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c),
            Key::Backspace => write!(f, "Backspace"),
            Key::Delete => write!(f, "Delete"),
            Key::Left => write!(f, "←"),
            Key::Right => write!(f, "→"),
            Key::Space => write!(f, "Space"),
            Key::Named(name) => write!(f, "{}", name),
        }
    }
}
