//! Focus navigation handlers

use crate::commands::Cmd;
use crate::messages::FocusMsg;
use crate::model::OtpModel;

/// Handle focus messages
///
/// All moves clamp to the slot range, so the edges are no-ops.
pub fn update_focus(model: &mut OtpModel, msg: FocusMsg) -> Option<Cmd> {
    match msg {
        FocusMsg::Prev => {
            model.state.focus_prev();
        }
        FocusMsg::Next => {
            model.state.focus_next();
        }
        FocusMsg::At(index) => {
            if index >= model.len() && !model.is_empty() {
                tracing::debug!(index, len = model.len(), "clamping focus target");
            }
            model.state.focus_at(index);
        }
    }
    None
}
