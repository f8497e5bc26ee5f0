use ratatui::buffer::Buffer;

use crate::ui::input::{InputEvent, KeyCode};

use super::text_input::TextInput;

/// A numeric input: a text input that only accepts characters that can
/// appear in a decimal number. An empty field is a valid "absent" value,
/// so the buffer stays free-form instead of using a masked format.
#[derive(Default)]
pub struct NumberInput {
    inner: TextInput,
}

impl NumberInput {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn text(&self) -> &str {
        self.inner.value()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.value().is_empty()
    }

    /// Parsed value; None when the buffer is empty or not a number
    pub fn value(&self) -> Option<f64> {
        self.inner.value().parse::<f64>().ok()
    }

    pub fn set_value(&mut self, value: f64) {
        // f64 Display already renders 3.0 as "3" and keeps large
        // magnitudes exact, so no integer special case
        self.inner.set_value(&format!("{}", value));
    }

    /// Handle input, returns true if the event was consumed
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        if let KeyCode::Char(c) = event.key {
            if !event.ctrl && !event.alt && !Self::numeric_char(c) {
                // Swallow non-numeric characters so they don't leak to
                // pane keymaps while a numeric field is focused
                return true;
            }
        }
        self.inner.handle_input(event)
    }

    fn numeric_char(c: char) -> bool {
        c.is_ascii_digit() || c == '-' || c == '.'
    }

    pub fn render_buf(&mut self, buf: &mut Buffer, x: u16, y: u16, width: u16) {
        self.inner.render_buf(buf, x, y, width);
    }
}
