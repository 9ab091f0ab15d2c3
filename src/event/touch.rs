//! Touch model: single-pointer press tracking on top of mouse events.
//!
//! A terminal has no touches, only mouse buttons. Each button is treated as a
//! distinct touch so that pressing a second button while the first is held
//! shows up as a second, simultaneous touch.

use std::fmt;

use super::input::{MouseAction, MouseBtn, MouseEvent};
use crate::geometry::Offset;

/// Identifies one tracked touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TouchId(pub u64);

impl TouchId {
    /// The touch id a mouse button maps to.
    pub const fn from_button(button: MouseBtn) -> Self {
        match button {
            MouseBtn::Left => TouchId(0),
            MouseBtn::Right => TouchId(1),
            MouseBtn::Middle => TouchId(2),
        }
    }
}

impl fmt::Display for TouchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Phase of a touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    Began,
    Moved,
    Ended,
    Cancelled,
}

/// A touch event at an absolute cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TouchEvent {
    pub id: TouchId,
    pub phase: TouchPhase,
    pub position: Offset,
}

impl TouchEvent {
    pub fn new(id: TouchId, phase: TouchPhase, x: i32, y: i32) -> Self {
        Self { id, phase, position: Offset::new(x, y) }
    }

    /// Interpret a mouse event as a touch.
    ///
    /// Down, drag and up map to began, moved and ended. Plain motion and
    /// scrolling carry no touch and return `None`.
    pub fn from_mouse(event: &MouseEvent) -> Option<Self> {
        let (button, phase) = match event.kind {
            MouseAction::Down(b) => (b, TouchPhase::Began),
            MouseAction::Drag(b) => (b, TouchPhase::Moved),
            MouseAction::Up(b) => (b, TouchPhase::Ended),
            MouseAction::Moved | MouseAction::Scroll => return None,
        };
        Some(Self::new(
            TouchId::from_button(button),
            phase,
            i32::from(event.x),
            i32::from(event.y),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_map_to_distinct_touches() {
        let ids = [MouseBtn::Left, MouseBtn::Right, MouseBtn::Middle].map(TouchId::from_button);
        assert_ne!(ids[0], ids[1]);
        assert_ne!(ids[1], ids[2]);
        assert_ne!(ids[0], ids[2]);
    }

    #[test]
    fn mouse_phases() {
        let down = MouseEvent::new(MouseAction::Down(MouseBtn::Left), 4, 2);
        let drag = MouseEvent::new(MouseAction::Drag(MouseBtn::Left), 4, 3);
        let up = MouseEvent::new(MouseAction::Up(MouseBtn::Left), 4, 3);

        let t = TouchEvent::from_mouse(&down).unwrap();
        assert_eq!(t.phase, TouchPhase::Began);
        assert_eq!(t.position, Offset::new(4, 2));
        assert_eq!(t.id, TouchId(0));

        assert_eq!(TouchEvent::from_mouse(&drag).unwrap().phase, TouchPhase::Moved);
        assert_eq!(TouchEvent::from_mouse(&up).unwrap().phase, TouchPhase::Ended);
    }

    #[test]
    fn motion_and_scroll_are_not_touches() {
        assert!(TouchEvent::from_mouse(&MouseEvent::new(MouseAction::Moved, 0, 0)).is_none());
        assert!(TouchEvent::from_mouse(&MouseEvent::new(MouseAction::Scroll, 0, 0)).is_none());
    }

    #[test]
    fn touch_id_display() {
        assert_eq!(TouchId(3).to_string(), "#3");
    }
}
