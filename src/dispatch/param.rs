use log::debug;

use crate::action::{DispatchResult, NavIntent, ParamAction};
use crate::state::EditorState;

pub(super) fn dispatch_param(action: &ParamAction, state: &mut EditorState) -> DispatchResult {
    match action {
        ParamAction::Add { name, kind } => {
            let id = state.add_parameter(name, *kind);
            debug!("added parameter {} ({:?}) as id {}", name, kind, id);
            // Close the add dialog on successful commit
            let mut result = DispatchResult::with_nav(NavIntent::Pop);
            result.status.push(format!("Added \"{}\" ({})", name, kind.label()));
            result
        }
        ParamAction::SetValue(id, value) => {
            state.set_value(*id, value.clone());
            debug!("set value for parameter {}: {:?}", id, value);
            DispatchResult::none()
        }
        ParamAction::Remove(id) => {
            let name = state.parameter(*id).map(|p| p.name.clone());
            state.remove_parameter(*id);
            debug!("removed parameter {}", id);
            match name {
                Some(name) => DispatchResult::with_status(format!("Deleted \"{}\"", name)),
                None => DispatchResult::none(),
            }
        }
    }
}
