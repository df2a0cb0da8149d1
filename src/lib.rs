//! OTP Field - Elm-style segmented passcode input
//!
//! This crate provides the core types and logic for a one-time-passcode
//! field: a row of single-character slots that behaves as one code entry,
//! implementing the Elm Architecture pattern. Drawing is left to a
//! [`surface::Surface`] supplied by the host.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod script;
pub mod surface;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::OtpConfig;
pub use messages::{FieldEvent, Msg};
pub use model::{OtpModel, OtpState};
pub use runtime::{EventResponse, OtpInput};
