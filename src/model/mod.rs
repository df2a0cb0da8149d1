//! Component model - the complete state of one OTP field
//!
//! This module contains the state types following the Elm Architecture pattern.
//! A model is owned by exactly one `OtpInput`; nothing here is shared or static.

pub mod state;

pub use state::OtpState;

use crate::config::OtpConfig;

/// The complete component model
#[derive(Debug, Clone)]
pub struct OtpModel {
    /// Slot values and focus
    pub state: OtpState,
    /// Construction options (slot count, class hooks)
    pub config: OtpConfig,
}

impl OtpModel {
    /// Create a model with `config.number_of_inputs` empty slots
    pub fn new(config: OtpConfig) -> Self {
        Self {
            state: OtpState::new(config.number_of_inputs),
            config,
        }
    }

    /// Create a model with default styling and `len` slots
    pub fn with_inputs(len: usize) -> Self {
        Self::new(OtpConfig::with_inputs(len))
    }

    /// Number of slots (fixed for the model's lifetime)
    #[inline]
    pub fn len(&self) -> usize {
        self.state.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// The joined code
    pub fn code(&self) -> String {
        self.state.code()
    }
}
