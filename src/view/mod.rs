//! View model for the rendering surface
//!
//! `render` turns the model into plain data the surface can draw: one
//! `SlotView` per slot plus the container's class. The surface never reads
//! `OtpState` directly.

mod class_list;

pub use class_list::ClassList;

use serde::Serialize;

use crate::model::OtpModel;

/// Default container class
pub const CONTAINER_CLASS: &str = "otp__container";
/// Default slot class
pub const INPUT_CLASS: &str = "otp__input";
/// Default class added to a filled slot
pub const INPUT_COMPLETE_CLASS: &str = "otp__input--complete";

/// Everything the surface needs to draw one slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotView {
    /// 0-indexed position
    pub index: usize,
    /// Data id attribute; handed back in `FieldEvent::Focus`
    pub data_id: String,
    /// Accessible label, 1-indexed for humans
    pub aria_label: String,
    /// Current value (empty or one character)
    pub value: String,
    /// Space-separated class list
    pub class: String,
    /// Whether this slot should hold keyboard focus
    pub active: bool,
}

impl SlotView {
    pub fn is_filled(&self) -> bool {
        !self.value.is_empty()
    }
}

/// The whole field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OtpView {
    pub container_class: String,
    pub slots: Vec<SlotView>,
}

impl OtpView {
    /// Find a slot by its accessible label
    pub fn slot_by_label(&self, label: &str) -> Option<&SlotView> {
        self.slots.iter().find(|s| s.aria_label == label)
    }

    /// One-line text rendering, e.g. `[1][2][_][_]`
    pub fn to_line(&self) -> String {
        self.slots
            .iter()
            .map(|slot| {
                let value = if slot.is_filled() { slot.value.as_str() } else { "_" };
                if slot.active {
                    format!("<{}>", value)
                } else {
                    format!("[{}]", value)
                }
            })
            .collect()
    }
}

/// Accessible label for a slot
pub fn slot_label(index: usize) -> String {
    format!("input position {}", index + 1)
}

/// Build the view for the current model
pub fn render(model: &OtpModel) -> OtpView {
    let config = &model.config;
    let state = &model.state;

    let container_class = match config.container_class_override() {
        Some(class) => class.to_string(),
        None => CONTAINER_CLASS.to_string(),
    };

    let base_class = config.input_class().unwrap_or(INPUT_CLASS);
    let complete_class = config.input_complete_class().unwrap_or(INPUT_COMPLETE_CLASS);

    let slots = state
        .values()
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let class = ClassList::new()
                .toggle(base_class, true)
                .toggle(complete_class, value.is_some());
            SlotView {
                index,
                data_id: index.to_string(),
                aria_label: slot_label(index),
                value: value.map(String::from).unwrap_or_default(),
                class: class.to_string(),
                active: index == state.active_index(),
            }
        })
        .collect();

    OtpView {
        container_class,
        slots,
    }
}
