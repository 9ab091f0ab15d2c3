//! Event system: terminal input and the touch model built on it.

pub mod input;
pub mod touch;

pub use input::{
    try_from_crossterm, InputEvent, Key, KeyEvent, Modifiers, MouseAction, MouseBtn, MouseEvent,
};
pub use touch::{TouchEvent, TouchId, TouchPhase};
