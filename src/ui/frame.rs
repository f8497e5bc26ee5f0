use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::state::EditorState;

use super::keymap::Keymap;
use super::style::{Color, Style};

/// Application chrome: title bar on top, status/hints line on the
/// bottom. Panes render in the area between.
pub struct Frame {
    status: Option<String>,
}

impl Frame {
    pub fn new() -> Self {
        Self { status: None }
    }

    pub fn set_status(&mut self, message: String) {
        self.status = Some(message);
    }

    /// Area left for panes after the chrome
    pub fn content_area(&self, area: Rect) -> Rect {
        if area.height < 2 {
            return area;
        }
        Rect::new(area.x, area.y + 1, area.width, area.height - 2)
    }

    pub fn render_buf(&self, area: Rect, buf: &mut Buffer, state: &EditorState, keymap: &Keymap) {
        if area.height == 0 {
            return;
        }

        // Title bar
        let title_area = Rect::new(area.x, area.y, area.width, 1);
        let title = Line::from(vec![
            Span::styled(" PARAMDECK ", ratatui::style::Style::from(Style::new().fg(Color::BLACK).bg(Color::CYAN).bold())),
            Span::styled(
                format!("  {} parameter(s)", state.parameters.len()),
                ratatui::style::Style::from(Style::new().fg(Color::DARK_GRAY)),
            ),
        ]);
        Paragraph::new(title).render(title_area, buf);

        if area.height < 2 {
            return;
        }

        // Footer: status message takes precedence over key hints
        let footer_y = area.y + area.height - 1;
        let footer_area = Rect::new(area.x, footer_y, area.width, 1);
        let line = match &self.status {
            Some(message) => Line::from(Span::styled(
                format!(" {}", message),
                ratatui::style::Style::from(Style::new().fg(Color::LIME)),
            )),
            None => {
                let hints = keymap
                    .bindings()
                    .iter()
                    .map(|b| format!("{}:{}", b.pattern.label(), b.description))
                    .collect::<Vec<_>>()
                    .join("  ");
                Line::from(Span::styled(
                    format!(" {}", hints),
                    ratatui::style::Style::from(Style::new().fg(Color::DARK_GRAY)),
                ))
            }
        };
        Paragraph::new(line).render(footer_area, buf);
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}
