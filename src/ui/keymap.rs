use super::input::{InputEvent, KeyCode};

/// What key(s) a binding matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPattern {
    Char(char),
    Key(KeyCode),
    Ctrl(char),
}

impl KeyPattern {
    pub fn matches(&self, event: &InputEvent) -> bool {
        match self {
            KeyPattern::Char(c) => !event.ctrl && !event.alt && event.key == KeyCode::Char(*c),
            KeyPattern::Key(k) => !event.ctrl && !event.alt && event.key == *k,
            KeyPattern::Ctrl(c) => event.ctrl && event.key == KeyCode::Char(*c),
        }
    }

    /// Short label for footer hints
    pub fn label(&self) -> String {
        match self {
            KeyPattern::Char(' ') => "Space".to_string(),
            KeyPattern::Char(c) => c.to_string(),
            KeyPattern::Ctrl(c) => format!("C-{}", c),
            KeyPattern::Key(k) => match k {
                KeyCode::Up => "Up".to_string(),
                KeyCode::Down => "Down".to_string(),
                KeyCode::Left => "Left".to_string(),
                KeyCode::Right => "Right".to_string(),
                KeyCode::Enter => "Enter".to_string(),
                KeyCode::Escape => "Esc".to_string(),
                KeyCode::Backspace => "Bksp".to_string(),
                KeyCode::Delete => "Del".to_string(),
                KeyCode::Tab => "Tab".to_string(),
                KeyCode::Home => "Home".to_string(),
                KeyCode::End => "End".to_string(),
                KeyCode::F(n) => format!("F{}", n),
                KeyCode::Char(c) => c.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub pattern: KeyPattern,
    pub action: &'static str,
    pub description: &'static str,
}

/// Ordered key → named-action table. Drives both input lookup and the
/// help footer.
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: Vec<KeyBinding>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind_char(mut self, c: char, action: &'static str, description: &'static str) -> Self {
        self.bindings.push(KeyBinding { pattern: KeyPattern::Char(c), action, description });
        self
    }

    pub fn bind_key(mut self, key: KeyCode, action: &'static str, description: &'static str) -> Self {
        self.bindings.push(KeyBinding { pattern: KeyPattern::Key(key), action, description });
        self
    }

    pub fn bind_ctrl(mut self, c: char, action: &'static str, description: &'static str) -> Self {
        self.bindings.push(KeyBinding { pattern: KeyPattern::Ctrl(c), action, description });
        self
    }

    pub fn lookup(&self, event: &InputEvent) -> Option<&'static str> {
        self.bindings
            .iter()
            .find(|b| b.pattern.matches(event))
            .map(|b| b.action)
    }

    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keymap() -> Keymap {
        Keymap::new()
            .bind_char('a', "add", "Add parameter")
            .bind_key(KeyCode::Enter, "confirm", "Confirm")
            .bind_ctrl('q', "quit", "Quit")
    }

    #[test]
    fn lookup_char() {
        assert_eq!(keymap().lookup(&InputEvent::key(KeyCode::Char('a'))), Some("add"));
        assert_eq!(keymap().lookup(&InputEvent::key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn ctrl_does_not_match_plain_char() {
        assert_eq!(keymap().lookup(&InputEvent::ctrl('a')), None);
        assert_eq!(keymap().lookup(&InputEvent::ctrl('q')), Some("quit"));
        assert_eq!(keymap().lookup(&InputEvent::key(KeyCode::Char('q'))), None);
    }

    #[test]
    fn lookup_named_key() {
        assert_eq!(keymap().lookup(&InputEvent::key(KeyCode::Enter)), Some("confirm"));
    }

    #[test]
    fn pattern_labels() {
        assert_eq!(KeyPattern::Char('a').label(), "a");
        assert_eq!(KeyPattern::Ctrl('q').label(), "C-q");
        assert_eq!(KeyPattern::Key(KeyCode::Escape).label(), "Esc");
    }
}
