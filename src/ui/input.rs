use crossterm::event::{KeyCode as CtKeyCode, KeyEvent, KeyModifiers};

/// Backend-independent key identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    Home,
    End,
    F(u8),
}

/// A key press with modifiers, translated from the terminal backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub key: KeyCode,
    pub ctrl: bool,
    pub alt: bool,
}

impl InputEvent {
    #[allow(dead_code)]
    pub fn key(key: KeyCode) -> Self {
        Self { key, ctrl: false, alt: false }
    }

    #[allow(dead_code)]
    pub fn ctrl(c: char) -> Self {
        Self { key: KeyCode::Char(c), ctrl: true, alt: false }
    }

    /// Translate a crossterm key event; keys we don't handle map to None.
    pub fn from_crossterm(event: &KeyEvent) -> Option<Self> {
        let key = match event.code {
            CtKeyCode::Char(c) => KeyCode::Char(c),
            CtKeyCode::Up => KeyCode::Up,
            CtKeyCode::Down => KeyCode::Down,
            CtKeyCode::Left => KeyCode::Left,
            CtKeyCode::Right => KeyCode::Right,
            CtKeyCode::Enter => KeyCode::Enter,
            CtKeyCode::Esc => KeyCode::Escape,
            CtKeyCode::Backspace => KeyCode::Backspace,
            CtKeyCode::Delete => KeyCode::Delete,
            CtKeyCode::Tab => KeyCode::Tab,
            CtKeyCode::Home => KeyCode::Home,
            CtKeyCode::End => KeyCode::End,
            CtKeyCode::F(n) => KeyCode::F(n),
            _ => return None,
        };
        Some(Self {
            key,
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            alt: event.modifiers.contains(KeyModifiers::ALT),
        })
    }
}
