mod param;
mod session;

use crate::action::{Action, DispatchResult};
use crate::state::EditorState;

/// Dispatch an action. Returns a DispatchResult describing side effects
/// for the UI layer. Dispatch is the only writer of EditorState.
pub fn dispatch_action(action: &Action, state: &mut EditorState) -> DispatchResult {
    match action {
        Action::Quit => DispatchResult::with_quit(),
        Action::Nav(_) => DispatchResult::none(), // Handled by PaneManager
        Action::Param(a) => param::dispatch_param(a, state),
        Action::Session(a) => session::dispatch_session(a, state),
        Action::None => DispatchResult::none(),
    }
}
