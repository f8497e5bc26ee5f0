use crossterm::event::{Event, KeyCode as CtKeyCode, KeyEvent, KeyModifiers};
use rat_event::Outcome;

use super::input::{InputEvent, KeyCode};

/// Rebuild a crossterm event from a translated InputEvent so rat-widget
/// state handlers can consume it.
pub fn to_crossterm_key_event(event: &InputEvent) -> Event {
    let code = match event.key {
        KeyCode::Char(c) => CtKeyCode::Char(c),
        KeyCode::Up => CtKeyCode::Up,
        KeyCode::Down => CtKeyCode::Down,
        KeyCode::Left => CtKeyCode::Left,
        KeyCode::Right => CtKeyCode::Right,
        KeyCode::Enter => CtKeyCode::Enter,
        KeyCode::Escape => CtKeyCode::Esc,
        KeyCode::Backspace => CtKeyCode::Backspace,
        KeyCode::Delete => CtKeyCode::Delete,
        KeyCode::Tab => CtKeyCode::Tab,
        KeyCode::Home => CtKeyCode::Home,
        KeyCode::End => CtKeyCode::End,
        KeyCode::F(n) => CtKeyCode::F(n),
    };
    let mut modifiers = KeyModifiers::NONE;
    if event.ctrl {
        modifiers |= KeyModifiers::CONTROL;
    }
    if event.alt {
        modifiers |= KeyModifiers::ALT;
    }
    Event::Key(KeyEvent::new(code, modifiers))
}

/// Everything except Continue means the widget used the event
pub fn outcome_consumed(outcome: Outcome) -> bool {
    !matches!(outcome, Outcome::Continue)
}
