mod backend;
mod frame;
mod input;
mod keymap;
mod layout_helpers;
mod pane;
mod rat_compat;
mod style;
pub mod widgets;

pub use backend::RatatuiBackend;
pub use frame::Frame;
pub use input::{InputEvent, KeyCode};
pub use keymap::{KeyBinding, KeyPattern, Keymap};
pub use layout_helpers::center_rect;
pub use pane::{Pane, PaneManager};
pub use style::{Color, Style};
