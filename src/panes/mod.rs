mod add_pane;
mod editor_pane;

pub use add_pane::AddPane;
pub use editor_pane::EditorPane;
