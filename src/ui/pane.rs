use std::any::Any;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::action::{Action, NavAction, NavIntent};
use crate::state::EditorState;

use super::input::InputEvent;
use super::keymap::Keymap;

/// A screen of the application. Panes translate input into Actions and
/// render from shared state; they never mutate EditorState themselves.
pub trait Pane {
    fn id(&self) -> &'static str;

    /// Called when the pane becomes active (switched or pushed to)
    fn on_enter(&mut self, _state: &EditorState) {}

    fn handle_input(&mut self, event: &InputEvent, state: &EditorState) -> Action;

    fn render(&mut self, area: Rect, buf: &mut Buffer, state: &EditorState);

    fn keymap(&self) -> &Keymap;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Owns all panes and the modal stack. The bottom entry is the base
/// pane; pushed panes render on top of it (modal dialogs).
pub struct PaneManager {
    panes: Vec<Box<dyn Pane>>,
    stack: Vec<usize>,
}

impl PaneManager {
    pub fn new(base: Box<dyn Pane>) -> Self {
        Self {
            panes: vec![base],
            stack: vec![0],
        }
    }

    pub fn add_pane(&mut self, pane: Box<dyn Pane>) {
        self.panes.push(pane);
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.panes.iter().position(|p| p.id() == id)
    }

    pub fn active(&self) -> &dyn Pane {
        let idx = *self.stack.last().expect("pane stack is never empty");
        self.panes[idx].as_ref()
    }

    pub fn active_mut(&mut self) -> &mut dyn Pane {
        let idx = *self.stack.last().expect("pane stack is never empty");
        self.panes[idx].as_mut()
    }

    /// Push the named pane onto the stack (modal)
    pub fn push_to(&mut self, id: &str, state: &EditorState) {
        if let Some(idx) = self.index_of(id) {
            if self.stack.last() != Some(&idx) {
                self.stack.push(idx);
                self.panes[idx].on_enter(state);
            }
        }
    }

    /// Pop the top pane; the base pane is never popped
    pub fn pop(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    pub fn get_pane_mut<T: Pane + 'static>(&mut self, id: &str) -> Option<&mut T> {
        let idx = self.index_of(id)?;
        self.panes[idx].as_any_mut().downcast_mut::<T>()
    }

    /// Apply a pane-returned navigation action
    pub fn process_nav(&mut self, action: &Action, state: &EditorState) {
        if let Action::Nav(nav) = action {
            match nav {
                NavAction::PushPane(id) => self.push_to(id, state),
                NavAction::PopPane => self.pop(),
            }
        }
    }

    /// Apply navigation intents returned from dispatch
    pub fn process_nav_intents(&mut self, intents: &[NavIntent], state: &EditorState) {
        for intent in intents {
            match intent {
                NavIntent::PushTo(id) => self.push_to(id, state),
                NavIntent::Pop => self.pop(),
            }
        }
    }

    /// Render the stack bottom-up so modals draw over the base pane
    pub fn render(&mut self, area: Rect, buf: &mut Buffer, state: &EditorState) {
        for i in 0..self.stack.len() {
            let idx = self.stack[i];
            self.panes[idx].render(area, buf, state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubPane {
        id: &'static str,
        keymap: Keymap,
        entered: usize,
    }

    impl StubPane {
        fn new(id: &'static str) -> Self {
            Self { id, keymap: Keymap::new(), entered: 0 }
        }
    }

    impl Pane for StubPane {
        fn id(&self) -> &'static str {
            self.id
        }

        fn on_enter(&mut self, _state: &EditorState) {
            self.entered += 1;
        }

        fn handle_input(&mut self, _event: &InputEvent, _state: &EditorState) -> Action {
            Action::None
        }

        fn render(&mut self, _area: Rect, _buf: &mut Buffer, _state: &EditorState) {}

        fn keymap(&self) -> &Keymap {
            &self.keymap
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[test]
    fn push_pop_returns_to_base() {
        let state = EditorState::new();
        let mut panes = PaneManager::new(Box::new(StubPane::new("editor")));
        panes.add_pane(Box::new(StubPane::new("add")));

        assert_eq!(panes.active().id(), "editor");
        panes.push_to("add", &state);
        assert_eq!(panes.active().id(), "add");
        panes.pop();
        assert_eq!(panes.active().id(), "editor");
        // Base pane never pops
        panes.pop();
        assert_eq!(panes.active().id(), "editor");
    }

    #[test]
    fn on_enter_fires_on_push() {
        let state = EditorState::new();
        let mut panes = PaneManager::new(Box::new(StubPane::new("editor")));
        panes.add_pane(Box::new(StubPane::new("add")));
        panes.push_to("add", &state);
        assert_eq!(panes.get_pane_mut::<StubPane>("add").unwrap().entered, 1);
    }

    #[test]
    fn nav_intents_drive_stack() {
        let state = EditorState::new();
        let mut panes = PaneManager::new(Box::new(StubPane::new("editor")));
        panes.add_pane(Box::new(StubPane::new("add")));
        panes.process_nav_intents(&[NavIntent::PushTo("add")], &state);
        assert_eq!(panes.active().id(), "add");
        panes.process_nav_intents(&[NavIntent::Pop], &state);
        assert_eq!(panes.active().id(), "editor");
    }
}
