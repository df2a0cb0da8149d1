//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use otp_field::config::OtpConfig;
use otp_field::keymap::Key;
use otp_field::messages::{FieldEvent, Msg};
use otp_field::model::{OtpModel, OtpState};
use otp_field::surface::HeadlessSurface;
use otp_field::OtpInput;

/// Create a model with `n` empty slots
pub fn test_model(n: usize) -> OtpModel {
    OtpModel::with_inputs(n)
}

/// Create a model from per-slot strings with the given slot active
pub fn model_with(values: &[&str], active: usize) -> OtpModel {
    let mut model = OtpModel::with_inputs(values.len());
    model.state = OtpState::from_values(values, active);
    model
}

/// Slot values as strings, for compact assertions
pub fn slots(model: &OtpModel) -> Vec<String> {
    model.state.value_strings()
}

pub fn change(value: &str) -> Msg {
    Msg::Field(FieldEvent::Change {
        value: value.to_string(),
    })
}

pub fn key(name: &str) -> Msg {
    Msg::Field(FieldEvent::KeyDown {
        key: Key::from_dom_key(name),
    })
}

pub fn paste(text: &str) -> Msg {
    Msg::Field(FieldEvent::Paste {
        text: text.to_string(),
    })
}

pub fn focus(index: usize) -> Msg {
    Msg::Field(FieldEvent::Focus { index })
}

/// Every code the host callback has received, in order
pub type Notifications = Rc<RefCell<Vec<String>>>;

/// Mount a component on a headless surface, recording notifications
pub fn mount(config: OtpConfig) -> (OtpInput<HeadlessSurface>, Notifications) {
    let notifications: Notifications = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&notifications);
    let input = OtpInput::mount_with_callback(config, HeadlessSurface::new(), move |code| {
        sink.borrow_mut().push(code.to_string());
    });
    (input, notifications)
}

/// Mount with default styling and `n` slots
pub fn mount_n(n: usize) -> (OtpInput<HeadlessSurface>, Notifications) {
    mount(OtpConfig::with_inputs(n))
}
