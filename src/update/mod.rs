//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. Handlers only
//! mutate the model; the effects (render, focus, notify) are derived once per
//! top-level message from what actually changed.

mod field;
mod focus;
mod slot;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::{OtpModel, OtpState};

#[cfg(debug_assertions)]
use crate::tracing::StateSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use field::update_field;
pub use focus::update_focus;
pub use slot::update_slot;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut OtpModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut OtpModel, msg: Msg) -> Option<Cmd> {
    let before = model.state.clone();
    let result = dispatch(model, msg);
    Cmd::merge(result, settle(&before, &model.state))
}

/// Route a message to its handler without computing effects
pub(crate) fn dispatch(model: &mut OtpModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Slot(m) => update_slot(model, m),
        Msg::Focus(m) => update_focus(model, m),
        Msg::Field(m) => update_field(model, m),
    }
}

/// Effects owed after a transition from `before` to `after`
///
/// Order matters to the surface: render first, then move focus, then
/// notify the host.
fn settle(before: &OtpState, after: &OtpState) -> Vec<Cmd> {
    let values_changed = before.values() != after.values();
    let focus_changed = before.active_index() != after.active_index();

    let mut effects = Vec::new();
    if values_changed || focus_changed {
        effects.push(Cmd::Render);
    }
    if focus_changed {
        effects.push(Cmd::Focus(after.active_index()));
    }
    if values_changed || focus_changed {
        effects.push(Cmd::NotifyChange { code: after.code() });
    }
    effects
}

/// Update with tracing instrumentation (debug builds only)
#[cfg(debug_assertions)]
fn update_traced(model: &mut OtpModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = StateSnapshot::from_state(&model.state);
    let result = update_inner(model, msg);
    let after = StateSnapshot::from_state(&model.state);

    if let Some(diff) = before.diff(&after) {
        debug!(target: "otp_field::state", "{}", diff);
    }

    result
}

/// Get a short name for a message type (for tracing)
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Slot(m) => format!("Slot::{:?}", m),
        Msg::Focus(m) => format!("Focus::{:?}", m),
        Msg::Field(m) => format!("Field::{}", m.kind()),
    }
}
