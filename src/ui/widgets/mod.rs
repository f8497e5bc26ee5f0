mod number_input;
mod text_input;

pub use number_input::NumberInput;
pub use text_input::TextInput;
