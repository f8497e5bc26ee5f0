use std::any::Any;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::action::{Action, NavAction, ParamAction, SessionAction};
use crate::state::{EditorState, ParamId, Value, ValueKind};
use crate::ui::widgets::{NumberInput, TextInput};
use crate::ui::{Color, InputEvent, KeyCode, Keymap, Pane, Style};

const NAME_COL_WIDTH: u16 = 18;
const VALUE_COL_WIDTH: u16 = 26;

/// The value widget for the row being edited. One variant per
/// ValueKind — adding a kind forces a change here.
enum ValueWidget {
    Text(TextInput),
    Number(NumberInput),
}

struct ValueEditor {
    param_id: ParamId,
    widget: ValueWidget,
}

/// The parameter list: one row per parameter (name, value, type) with a
/// selection cursor, inline value editing, and delete/add/export keys.
pub struct EditorPane {
    keymap: Keymap,
    selected: usize,
    scroll: usize,
    editing: Option<ValueEditor>,
}

impl EditorPane {
    pub fn new() -> Self {
        Self {
            keymap: Keymap::new()
                .bind_char('a', "add", "add")
                .bind_key(KeyCode::Enter, "edit", "edit value")
                .bind_char('d', "delete", "delete")
                .bind_key(KeyCode::Delete, "delete", "delete")
                .bind_key(KeyCode::Up, "prev", "up")
                .bind_key(KeyCode::Down, "next", "down")
                .bind_char('y', "export", "export model")
                .bind_char('q', "quit", "quit")
                .bind_ctrl('q', "quit", "quit"),
            selected: 0,
            scroll: 0,
            editing: None,
        }
    }

    #[allow(dead_code)]
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    fn clamp_selection(&mut self, state: &EditorState) {
        self.selected = self.selected.min(state.parameters.len().saturating_sub(1));
    }

    /// Keep the selected row on screen when the list is taller than the
    /// pane
    fn scroll_into_view(&mut self, visible: usize) {
        if visible == 0 {
            return;
        }
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected >= self.scroll + visible {
            self.scroll = self.selected + 1 - visible;
        }
    }

    fn selected_id(&self, state: &EditorState) -> Option<ParamId> {
        state.parameters.get(self.selected).map(|p| p.id)
    }

    fn begin_edit(&mut self, state: &EditorState) {
        let Some(param) = state.parameters.get(self.selected) else {
            return;
        };
        let current = state.value(param.id).and_then(|pv| pv.value.as_ref());
        let widget = match param.kind {
            ValueKind::Text => {
                let mut input = TextInput::new();
                if let Some(value) = current {
                    input.set_value(&value.display());
                }
                ValueWidget::Text(input)
            }
            ValueKind::Number => {
                let mut input = NumberInput::new();
                if let Some(Value::Number(n)) = current {
                    input.set_value(*n);
                }
                ValueWidget::Number(input)
            }
        };
        self.editing = Some(ValueEditor { param_id: param.id, widget });
    }

    /// Commit the editor, or keep editing when a numeric buffer does not
    /// parse (e.g. a lone "-").
    fn commit_edit(&mut self) -> Action {
        let Some(editor) = self.editing.as_ref() else {
            return Action::None;
        };
        let value = match &editor.widget {
            ValueWidget::Text(input) => Some(Value::Text(input.value().to_string())),
            ValueWidget::Number(input) => {
                if input.is_empty() {
                    None
                } else {
                    match input.value() {
                        Some(n) => Some(Value::Number(n)),
                        None => return Action::None,
                    }
                }
            }
        };
        let param_id = editor.param_id;
        self.editing = None;
        Action::Param(ParamAction::SetValue(param_id, value))
    }

    fn handle_edit_input(&mut self, event: &InputEvent) -> Action {
        match event.key {
            KeyCode::Enter => self.commit_edit(),
            KeyCode::Escape => {
                self.editing = None;
                Action::None
            }
            _ => {
                if let Some(editor) = self.editing.as_mut() {
                    match &mut editor.widget {
                        ValueWidget::Text(input) => {
                            input.handle_input(event);
                        }
                        ValueWidget::Number(input) => {
                            input.handle_input(event);
                        }
                    }
                }
                Action::None
            }
        }
    }

    fn placeholder(kind: ValueKind) -> String {
        format!("Enter {}", kind.label())
    }
}

impl Default for EditorPane {
    fn default() -> Self {
        Self::new()
    }
}

impl Pane for EditorPane {
    fn id(&self) -> &'static str {
        "editor"
    }

    fn on_enter(&mut self, state: &EditorState) {
        self.clamp_selection(state);
    }

    fn handle_input(&mut self, event: &InputEvent, state: &EditorState) -> Action {
        self.clamp_selection(state);
        if self.editing.is_some() {
            return self.handle_edit_input(event);
        }

        match self.keymap.lookup(event) {
            Some("add") => Action::Nav(NavAction::PushPane("add")),
            Some("edit") => {
                self.begin_edit(state);
                Action::None
            }
            Some("delete") => match self.selected_id(state) {
                Some(id) => Action::Param(ParamAction::Remove(id)),
                None => Action::None,
            },
            Some("prev") => {
                self.selected = self.selected.saturating_sub(1);
                Action::None
            }
            Some("next") => {
                if self.selected + 1 < state.parameters.len() {
                    self.selected += 1;
                }
                Action::None
            }
            Some("export") => Action::Session(SessionAction::ExportModel),
            Some("quit") => Action::Quit,
            _ => Action::None,
        }
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, state: &EditorState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Parameters ")
            .border_style(ratatui::style::Style::from(Style::new().fg(Color::CYAN)))
            .title_style(ratatui::style::Style::from(Style::new().fg(Color::CYAN)));
        let inner = block.inner(area);
        block.render(area, buf);

        if state.parameters.is_empty() {
            let msg_area = Rect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(2), 1);
            Paragraph::new(Line::from(Span::styled(
                "No parameters have been created",
                ratatui::style::Style::from(Style::new().fg(Color::DARK_GRAY)),
            )))
            .render(msg_area, buf);
            if inner.height > 2 {
                let hint_area = Rect::new(inner.x + 1, inner.y + 2, inner.width.saturating_sub(2), 1);
                Paragraph::new(Line::from(Span::styled(
                    "Press a to add one",
                    ratatui::style::Style::from(Style::new().fg(Color::DARK_GRAY)),
                )))
                .render(hint_area, buf);
            }
            return;
        }

        let visible = inner.height.saturating_sub(1) as usize;
        self.scroll_into_view(visible);
        for (i, param) in state.parameters.iter().enumerate().skip(self.scroll).take(visible) {
            let y = inner.y + 1 + (i - self.scroll) as u16;
            let is_selected = i == self.selected;

            let marker_style = if is_selected {
                ratatui::style::Style::from(Style::new().fg(Color::WHITE).bg(Color::SELECTION_BG).bold())
            } else {
                ratatui::style::Style::from(Style::new().fg(Color::DARK_GRAY))
            };
            if let Some(cell) = buf.cell_mut((inner.x + 1, y)) {
                cell.set_char(if is_selected { '>' } else { ' ' })
                    .set_style(marker_style);
            }

            // Name column
            let name_style = if is_selected {
                ratatui::style::Style::from(Style::new().fg(Color::WHITE).bg(Color::SELECTION_BG))
            } else {
                ratatui::style::Style::from(Style::new().fg(Color::WHITE))
            };
            let name_x = inner.x + 3;
            let name: String = param.name.chars().take(NAME_COL_WIDTH as usize - 1).collect();
            for (j, ch) in format!("{:w$}", name, w = NAME_COL_WIDTH as usize).chars().enumerate() {
                if let Some(cell) = buf.cell_mut((name_x + j as u16, y)) {
                    cell.set_char(ch).set_style(name_style);
                }
            }

            // Value column: live widget for the row being edited,
            // otherwise the stored value or a dim placeholder
            let value_x = name_x + NAME_COL_WIDTH;
            let editing_here = self
                .editing
                .as_ref()
                .map(|e| e.param_id == param.id)
                .unwrap_or(false);
            if editing_here {
                if let Some(editor) = self.editing.as_mut() {
                    match &mut editor.widget {
                        ValueWidget::Text(input) => {
                            input.render_buf(buf, value_x, y, VALUE_COL_WIDTH)
                        }
                        ValueWidget::Number(input) => {
                            input.render_buf(buf, value_x, y, VALUE_COL_WIDTH)
                        }
                    }
                }
            } else {
                let stored = state.value(param.id).and_then(|pv| pv.value.as_ref());
                let (text, style) = match stored {
                    Some(value) => (
                        value.display(),
                        ratatui::style::Style::from(Style::new().fg(Color::LIME)),
                    ),
                    None => (
                        Self::placeholder(param.kind),
                        ratatui::style::Style::from(Style::new().fg(Color::DARK_GRAY)),
                    ),
                };
                for (j, ch) in text.chars().take(VALUE_COL_WIDTH as usize).enumerate() {
                    if let Some(cell) = buf.cell_mut((value_x + j as u16, y)) {
                        cell.set_char(ch).set_style(style);
                    }
                }
            }

            // Type column
            let type_x = value_x + VALUE_COL_WIDTH + 1;
            let type_style = ratatui::style::Style::from(Style::new().fg(Color::YELLOW));
            for (j, ch) in param.kind.label().chars().enumerate() {
                let x = type_x + j as u16;
                if x < inner.x + inner.width {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_char(ch).set_style(type_style);
                    }
                }
            }
        }
    }

    fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
