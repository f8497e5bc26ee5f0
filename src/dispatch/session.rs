use log::{info, warn};

use crate::action::{DispatchResult, SessionAction};
use crate::state::EditorState;

pub(super) fn dispatch_session(action: &SessionAction, state: &mut EditorState) -> DispatchResult {
    match action {
        SessionAction::ExportModel => match state.get_model() {
            Ok(json) => {
                info!("model export: {}", json);
                DispatchResult::with_status(json)
            }
            Err(e) => {
                warn!("model export failed: {}", e);
                DispatchResult::with_status(format!("Export failed: {}", e))
            }
        },
    }
}
