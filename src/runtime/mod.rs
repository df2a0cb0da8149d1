//! Runtime module - the component loop
//!
//! Owns one model, runs `update` for each surface event, and executes the
//! resulting commands against the surface and the host callback:
//! - `component` - `OtpInput`, mount/handle/dispatch and command processing

pub mod component;

pub use component::{ChangeCallback, EventResponse, OtpInput};
