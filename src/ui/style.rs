/// Small RGB palette shared by the panes and chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Color = Color::new(230, 230, 230);
    pub const BLACK: Color = Color::new(10, 10, 12);
    pub const DARK_GRAY: Color = Color::new(110, 110, 120);
    pub const CYAN: Color = Color::new(80, 200, 220);
    pub const YELLOW: Color = Color::new(230, 200, 80);
    pub const LIME: Color = Color::new(150, 220, 110);
    pub const RED: Color = Color::new(230, 90, 90);
    pub const SELECTION_BG: Color = Color::new(45, 50, 65);
    pub const FIELD_BG: Color = Color::new(30, 30, 40);
}

impl From<Color> for ratatui::style::Color {
    fn from(c: Color) -> Self {
        ratatui::style::Color::Rgb(c.r, c.g, c.b)
    }
}

/// Builder mirroring the subset of ratatui styling the panes use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    fg: Option<Color>,
    bg: Option<Color>,
    bold: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Styles handed to the rat-widget input widgets
pub mod input_theme {
    use super::{Color, Style};

    pub fn base() -> ratatui::style::Style {
        Style::new().fg(Color::WHITE).bg(Color::FIELD_BG).into()
    }

    pub fn focus() -> ratatui::style::Style {
        Style::new().fg(Color::WHITE).bg(Color::FIELD_BG).into()
    }

    pub fn select() -> ratatui::style::Style {
        Style::new().fg(Color::BLACK).bg(Color::CYAN).into()
    }

    pub fn cursor() -> ratatui::style::Style {
        Style::new().fg(Color::BLACK).bg(Color::WHITE).into()
    }
}

impl From<Style> for ratatui::style::Style {
    fn from(s: Style) -> Self {
        let mut out = ratatui::style::Style::default();
        if let Some(fg) = s.fg {
            out = out.fg(fg.into());
        }
        if let Some(bg) = s.bg {
            out = out.bg(bg.into());
        }
        if s.bold {
            out = out.add_modifier(ratatui::style::Modifier::BOLD);
        }
        out
    }
}
