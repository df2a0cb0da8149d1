//! Slot value handlers (the reducer)

use crate::commands::Cmd;
use crate::messages::SlotMsg;
use crate::model::OtpModel;

/// Handle slot messages
///
/// Navigation is never touched here; callers sequence it explicitly.
pub fn update_slot(model: &mut OtpModel, msg: SlotMsg) -> Option<Cmd> {
    match msg {
        SlotMsg::Write { index, value } => {
            model.state.write(index, &value);
        }
        SlotMsg::WriteActive(value) => {
            let index = model.state.active_index();
            model.state.write(index, &value);
        }
        SlotMsg::ClearActive => {
            let index = model.state.active_index();
            model.state.write(index, "");
        }
    }
    None
}
