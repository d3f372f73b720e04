mod buttons;
mod pointer;

pub use buttons::{toggle_label, wire_buttons};
pub use pointer::{wire_input_handlers, InputWiring};
