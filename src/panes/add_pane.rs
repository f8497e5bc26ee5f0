use std::any::Any;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::action::{Action, NavAction, ParamAction};
use crate::state::{EditorState, ValueKind};
use crate::ui::widgets::TextInput;
use crate::ui::{center_rect, Color, InputEvent, KeyCode, Keymap, Pane, Style};

const NAME_MIN_CHARS: usize = 2;
const NAME_ERROR: &str = "Name must have at least 2 characters";

/// Modal dialog collecting a new parameter's name and type. The draft
/// (name + staged kind) is reset exactly on open, on commit, and on
/// cancel, so a reopened dialog never shows stale input.
pub struct AddPane {
    keymap: Keymap,
    name_input: TextInput,
    kind: ValueKind,
    error: Option<String>,
}

impl AddPane {
    pub fn new() -> Self {
        Self {
            keymap: Keymap::new()
                .bind_key(KeyCode::Enter, "confirm", "add")
                .bind_key(KeyCode::Tab, "cycle_type", "type")
                .bind_key(KeyCode::Escape, "cancel", "cancel"),
            name_input: TextInput::new(),
            kind: ValueKind::Text,
            error: None,
        }
    }

    fn reset(&mut self) {
        self.name_input.clear();
        self.kind = ValueKind::Text;
        self.error = None;
    }

    fn submit(&mut self) -> Action {
        let name = self.name_input.value().to_string();
        if name.chars().count() < NAME_MIN_CHARS {
            self.error = Some(NAME_ERROR.to_string());
            return Action::None;
        }
        let kind = self.kind;
        self.reset();
        Action::Param(ParamAction::Add { name, kind })
    }

    #[cfg(test)]
    fn staged_name(&self) -> &str {
        self.name_input.value()
    }

    #[cfg(test)]
    fn staged_kind(&self) -> ValueKind {
        self.kind
    }
}

impl Default for AddPane {
    fn default() -> Self {
        Self::new()
    }
}

impl Pane for AddPane {
    fn id(&self) -> &'static str {
        "add"
    }

    fn on_enter(&mut self, _state: &EditorState) {
        self.reset();
    }

    fn handle_input(&mut self, event: &InputEvent, _state: &EditorState) -> Action {
        match event.key {
            KeyCode::Enter => self.submit(),
            KeyCode::Escape => {
                self.reset();
                Action::Nav(NavAction::PopPane)
            }
            KeyCode::Tab | KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.kind = self.kind.next();
                Action::None
            }
            _ => {
                if self.name_input.handle_input(event) {
                    self.error = None;
                }
                Action::None
            }
        }
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, _state: &EditorState) {
        let width = 46_u16.min(area.width.saturating_sub(4));
        let height = if self.error.is_some() { 10 } else { 9 };
        let rect = center_rect(area, width, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Add Parameter ")
            .border_style(ratatui::style::Style::from(Style::new().fg(Color::LIME)))
            .title_style(ratatui::style::Style::from(Style::new().fg(Color::LIME)));
        let inner = block.inner(rect);
        // Clear what the dialog covers so the list underneath doesn't
        // bleed through
        for y in rect.y..rect.y + rect.height {
            for x in rect.x..rect.x + rect.width {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.reset();
                }
            }
        }
        block.render(rect, buf);

        let label_style = ratatui::style::Style::from(Style::new().fg(Color::DARK_GRAY));

        // Name field
        let label_area = Rect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(2), 1);
        Paragraph::new(Line::from(Span::styled("Parameter name:", label_style)))
            .render(label_area, buf);
        let field_width = inner.width.saturating_sub(4);
        self.name_input
            .render_buf(buf, inner.x + 2, inner.y + 2, field_width);

        // Type selector
        let type_area = Rect::new(inner.x + 1, inner.y + 4, inner.width.saturating_sub(2), 1);
        Paragraph::new(Line::from(vec![
            Span::styled("Value type:  ", label_style),
            Span::styled(
                format!("< {} >", self.kind.label()),
                ratatui::style::Style::from(Style::new().fg(Color::YELLOW).bold()),
            ),
        ]))
        .render(type_area, buf);

        // Inline validation error
        if let Some(ref error) = self.error {
            let err_area = Rect::new(inner.x + 1, inner.y + 3, inner.width.saturating_sub(2), 1);
            Paragraph::new(Line::from(Span::styled(
                error.as_str(),
                ratatui::style::Style::from(Style::new().fg(Color::RED)),
            )))
            .render(err_area, buf);
        }

        // Footer
        let footer_y = rect.y + rect.height.saturating_sub(2);
        let footer_area = Rect::new(inner.x + 1, footer_y, inner.width.saturating_sub(2), 1);
        Paragraph::new(Line::from(Span::styled(
            "[Enter] Add  [Tab] Type  [Esc] Cancel",
            label_style,
        )))
        .render(footer_area, buf);
    }

    fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(pane: &mut AddPane, key: KeyCode) -> Action {
        pane.handle_input(&InputEvent::key(key), &EditorState::new())
    }

    fn type_str(pane: &mut AddPane, s: &str) {
        for c in s.chars() {
            press(pane, KeyCode::Char(c));
        }
    }

    #[test]
    fn short_name_shows_error_and_stays_open() {
        let mut pane = AddPane::new();
        type_str(&mut pane, "W");
        assert_eq!(press(&mut pane, KeyCode::Enter), Action::None);
        assert_eq!(pane.error.as_deref(), Some(NAME_ERROR));
        // Draft survives the failed submit
        assert_eq!(pane.staged_name(), "W");
    }

    #[test]
    fn empty_name_rejected() {
        let mut pane = AddPane::new();
        assert_eq!(press(&mut pane, KeyCode::Enter), Action::None);
        assert!(pane.error.is_some());
    }

    #[test]
    fn valid_submit_emits_add_and_resets_draft() {
        let mut pane = AddPane::new();
        type_str(&mut pane, "Weight");
        press(&mut pane, KeyCode::Tab); // string -> number
        let action = press(&mut pane, KeyCode::Enter);
        assert_eq!(
            action,
            Action::Param(ParamAction::Add { name: "Weight".into(), kind: ValueKind::Number })
        );
        assert_eq!(pane.staged_name(), "");
        assert_eq!(pane.staged_kind(), ValueKind::Text);
        assert!(pane.error.is_none());
    }

    #[test]
    fn two_char_name_is_accepted() {
        let mut pane = AddPane::new();
        type_str(&mut pane, "ab");
        assert!(matches!(press(&mut pane, KeyCode::Enter), Action::Param(_)));
    }

    #[test]
    fn cancel_resets_draft_and_pops() {
        let mut pane = AddPane::new();
        type_str(&mut pane, "Weight");
        press(&mut pane, KeyCode::Tab);
        assert_eq!(
            press(&mut pane, KeyCode::Escape),
            Action::Nav(NavAction::PopPane)
        );
        assert_eq!(pane.staged_name(), "");
        assert_eq!(pane.staged_kind(), ValueKind::Text);
    }

    #[test]
    fn type_selector_cycles_both_ways() {
        let mut pane = AddPane::new();
        assert_eq!(pane.staged_kind(), ValueKind::Text);
        press(&mut pane, KeyCode::Tab);
        assert_eq!(pane.staged_kind(), ValueKind::Number);
        press(&mut pane, KeyCode::Left);
        assert_eq!(pane.staged_kind(), ValueKind::Text);
    }

    #[test]
    fn typing_clears_error() {
        let mut pane = AddPane::new();
        press(&mut pane, KeyCode::Enter);
        assert!(pane.error.is_some());
        type_str(&mut pane, "W");
        assert!(pane.error.is_none());
    }

    #[test]
    fn on_enter_resets_stale_draft() {
        let mut pane = AddPane::new();
        type_str(&mut pane, "stale");
        pane.on_enter(&EditorState::new());
        assert_eq!(pane.staged_name(), "");
    }
}
