//! Surface event handlers: character entry, key-down, paste, focus
//!
//! Each event expands into slot and focus messages which run back to back;
//! effects are settled once for the whole event.

use crate::commands::Cmd;
use crate::keymap::{action_for, Key};
use crate::messages::{FieldEvent, FocusMsg, Msg, SlotMsg};
use crate::model::OtpModel;

use super::dispatch;

/// Handle a raw surface event
pub fn update_field(model: &mut OtpModel, event: FieldEvent) -> Option<Cmd> {
    match event {
        FieldEvent::Change { value } => {
            // Auto-advance: filling a slot always tries to move forward
            run(
                model,
                vec![
                    Msg::Slot(SlotMsg::WriteActive(value)),
                    Msg::Focus(FocusMsg::Next),
                ],
            );
            None
        }
        FieldEvent::KeyDown { key } => key_down(model, &key),
        FieldEvent::Paste { text } => {
            paste(model, &text);
            Some(Cmd::PreventDefault)
        }
        FieldEvent::Focus { index } => {
            run(model, vec![Msg::Focus(FocusMsg::At(index))]);
            None
        }
    }
}

fn key_down(model: &mut OtpModel, key: &Key) -> Option<Cmd> {
    let action = action_for(key)?;
    tracing::trace!(key = %key, action = action.display_name(), "key down");
    run(model, action.to_msgs());
    Some(Cmd::PreventDefault)
}

fn run(model: &mut OtpModel, msgs: Vec<Msg>) {
    for msg in msgs {
        dispatch(model, msg);
    }
}

/// Spread pasted text across slots starting at the active one
///
/// The text is cut to the slots remaining from the active slot, written one
/// character per slot, and focus lands after the last written slot (pinned
/// to the last slot when the paste reaches the end). Returns the number of
/// slots written.
pub(crate) fn paste(model: &mut OtpModel, text: &str) -> usize {
    let len = model.len();
    let start = model.state.active_index();
    let mut next_active = start;
    let mut written = 0;

    let pasted = text.chars().take(len.saturating_sub(start));
    for (index, c) in (start..len).zip(pasted) {
        dispatch(
            model,
            Msg::Slot(SlotMsg::Write {
                index,
                value: c.to_string(),
            }),
        );
        next_active = if index + 1 == len {
            index
        } else {
            next_active + 1
        };
        written += 1;
    }

    if written > 0 {
        tracing::debug!(start, written, next_active, "pasted");
        dispatch(model, Msg::Focus(FocusMsg::At(next_active)));
    }
    written
}
