use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::StatefulWidget;

use rat_event::{HandleEvent, Regular};
use rat_widget::text_input::{TextInput as RatTextInput, TextInputState};

use crate::ui::input::InputEvent;
use crate::ui::rat_compat::{outcome_consumed, to_crossterm_key_event};
use crate::ui::style::input_theme;

/// A single-line text input backed by rat-widget.
///
/// Created focused: the owning pane decides when the widget receives
/// input, so there is always exactly one live editor on screen.
pub struct TextInput {
    state: TextInputState,
}

impl TextInput {
    pub fn new() -> Self {
        let mut state = TextInputState::new();
        state.focus.set(true);
        Self { state }
    }

    pub fn value(&self) -> &str {
        self.state.text()
    }

    pub fn set_value(&mut self, value: &str) {
        self.state.set_value(value);
    }

    pub fn clear(&mut self) {
        self.state.set_value("");
    }

    /// Handle input, returns true if the event was consumed
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        let ct_event = to_crossterm_key_event(event);
        let outcome: rat_event::Outcome = self.state.handle(&ct_event, Regular).into();
        outcome_consumed(outcome)
    }

    /// Render into a ratatui buffer at (x, y) within `width` cells
    pub fn render_buf(&mut self, buf: &mut Buffer, x: u16, y: u16, width: u16) {
        let area = Rect::new(x, y, width, 1).intersection(*buf.area());
        if area.is_empty() {
            return;
        }
        let widget = RatTextInput::new()
            .style(input_theme::base())
            .focus_style(input_theme::focus())
            .select_style(input_theme::select())
            .cursor_style(input_theme::cursor());
        widget.render(area, buf, &mut self.state);
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}
