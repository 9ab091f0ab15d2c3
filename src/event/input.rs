//! Input event types wrapping crossterm for decoupling.
//!
//! Defines [`InputEvent`], [`KeyEvent`], [`MouseEvent`] and supporting types.
//! Crossterm events are converted here so the stepper and its touch model
//! never depend on crossterm directly.

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// Keyboard key, decoupled from crossterm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Escape,
    Up,
    Down,
    /// Any key the stepper has no use for.
    Other,
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Modifier key bitmask. Only Ctrl is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(2);

    /// Check whether `self` contains all the bits in `other`.
    pub fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }
}

// ---------------------------------------------------------------------------
// KeyEvent
// ---------------------------------------------------------------------------

/// A keyboard event with key and modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a new key event.
    pub fn new(code: Key, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// A key event with no modifiers.
    pub fn plain(code: Key) -> Self {
        Self::new(code, Modifiers::NONE)
    }
}

// ---------------------------------------------------------------------------
// MouseBtn / MouseAction / MouseEvent
// ---------------------------------------------------------------------------

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseBtn {
    Left,
    Right,
    Middle,
}

/// Mouse action kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseAction {
    Down(MouseBtn),
    Up(MouseBtn),
    Drag(MouseBtn),
    Moved,
    Scroll,
}

/// A mouse event with action and cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    pub kind: MouseAction,
    pub x: u16,
    pub y: u16,
}

impl MouseEvent {
    pub fn new(kind: MouseAction, x: u16, y: u16) -> Self {
        Self { kind, x, y }
    }
}

// ---------------------------------------------------------------------------
// InputEvent
// ---------------------------------------------------------------------------

/// Top-level input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize { width: u16, height: u16 },
    FocusGained,
    FocusLost,
}

// ---------------------------------------------------------------------------
// crossterm conversions
// ---------------------------------------------------------------------------

fn convert_modifiers(m: crossterm::event::KeyModifiers) -> Modifiers {
    if m.contains(crossterm::event::KeyModifiers::CONTROL) {
        Modifiers::CTRL
    } else {
        Modifiers::NONE
    }
}

impl From<crossterm::event::KeyEvent> for KeyEvent {
    fn from(ct: crossterm::event::KeyEvent) -> Self {
        use crossterm::event::KeyCode;

        let code = match ct.code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            _ => Key::Other,
        };
        KeyEvent { code, modifiers: convert_modifiers(ct.modifiers) }
    }
}

/// Convert a crossterm mouse button to our `MouseBtn`.
fn convert_mouse_button(b: crossterm::event::MouseButton) -> MouseBtn {
    match b {
        crossterm::event::MouseButton::Left => MouseBtn::Left,
        crossterm::event::MouseButton::Right => MouseBtn::Right,
        crossterm::event::MouseButton::Middle => MouseBtn::Middle,
    }
}

impl From<crossterm::event::MouseEvent> for MouseEvent {
    fn from(me: crossterm::event::MouseEvent) -> Self {
        use crossterm::event::MouseEventKind;

        let kind = match me.kind {
            MouseEventKind::Down(b) => MouseAction::Down(convert_mouse_button(b)),
            MouseEventKind::Up(b) => MouseAction::Up(convert_mouse_button(b)),
            MouseEventKind::Drag(b) => MouseAction::Drag(convert_mouse_button(b)),
            MouseEventKind::Moved => MouseAction::Moved,
            _ => MouseAction::Scroll,
        };
        MouseEvent { kind, x: me.column, y: me.row }
    }
}

/// Convert a crossterm `Event` into our `InputEvent`.
///
/// Returns `None` for events the stepper does not consume (pastes, and key
/// releases/repeats on terminals that report them).
pub fn try_from_crossterm(event: crossterm::event::Event) -> Option<InputEvent> {
    use crossterm::event::{Event, KeyEventKind};

    match event {
        Event::Key(ke) if ke.kind == KeyEventKind::Press => Some(InputEvent::Key(ke.into())),
        Event::Key(_) => None,
        Event::Mouse(me) => Some(InputEvent::Mouse(me.into())),
        Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),
        Event::FocusGained => Some(InputEvent::FocusGained),
        Event::FocusLost => Some(InputEvent::FocusLost),
        Event::Paste(_) => None,
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event as ct;

    fn ct_mouse(kind: ct::MouseEventKind, column: u16, row: u16) -> ct::Event {
        ct::Event::Mouse(ct::MouseEvent {
            kind,
            column,
            row,
            modifiers: ct::KeyModifiers::NONE,
        })
    }

    // ── Modifiers ────────────────────────────────────────────────────

    #[test]
    fn modifiers_contains() {
        assert!(Modifiers::CTRL.contains(Modifiers::CTRL));
        assert!(Modifiers::CTRL.contains(Modifiers::NONE));
        assert!(!Modifiers::NONE.contains(Modifiers::CTRL));
    }

    #[test]
    fn shift_and_alt_are_not_tracked() {
        let ke = KeyEvent::from(ct::KeyEvent::new(
            ct::KeyCode::Char('k'),
            ct::KeyModifiers::SHIFT | ct::KeyModifiers::ALT,
        ));
        assert_eq!(ke.modifiers, Modifiers::NONE);
    }

    // ── Keys ─────────────────────────────────────────────────────────

    #[test]
    fn from_crossterm_key_arrows() {
        for (code, expected) in [
            (ct::KeyCode::Up, Key::Up),
            (ct::KeyCode::Down, Key::Down),
            (ct::KeyCode::Esc, Key::Escape),
        ] {
            let ke = KeyEvent::from(ct::KeyEvent::new(code, ct::KeyModifiers::NONE));
            assert_eq!(ke.code, expected);
        }
    }

    #[test]
    fn from_crossterm_key_with_ctrl() {
        let ke = KeyEvent::from(ct::KeyEvent::new(
            ct::KeyCode::Char('c'),
            ct::KeyModifiers::CONTROL,
        ));
        assert_eq!(ke.code, Key::Char('c'));
        assert!(ke.modifiers.contains(Modifiers::CTRL));
    }

    #[test]
    fn unsupported_keys_map_to_other() {
        for code in [
            ct::KeyCode::Tab,
            ct::KeyCode::Enter,
            ct::KeyCode::PageUp,
            ct::KeyCode::Home,
        ] {
            let ke = KeyEvent::from(ct::KeyEvent::new(code, ct::KeyModifiers::NONE));
            assert_eq!(ke.code, Key::Other);
        }
    }

    #[test]
    fn key_release_is_dropped() {
        let mut release = ct::KeyEvent::new(ct::KeyCode::Up, ct::KeyModifiers::NONE);
        release.kind = ct::KeyEventKind::Release;
        assert_eq!(try_from_crossterm(ct::Event::Key(release)), None);
    }

    // ── Mouse ────────────────────────────────────────────────────────

    #[test]
    fn mouse_down_from_crossterm() {
        let input = try_from_crossterm(ct_mouse(
            ct::MouseEventKind::Down(ct::MouseButton::Left),
            10,
            5,
        ));
        assert_eq!(
            input,
            Some(InputEvent::Mouse(MouseEvent::new(MouseAction::Down(MouseBtn::Left), 10, 5)))
        );
    }

    #[test]
    fn mouse_drag_and_up_from_crossterm() {
        let drag = try_from_crossterm(ct_mouse(
            ct::MouseEventKind::Drag(ct::MouseButton::Right),
            3,
            7,
        ));
        match drag {
            Some(InputEvent::Mouse(me)) => assert_eq!(me.kind, MouseAction::Drag(MouseBtn::Right)),
            other => panic!("expected mouse drag, got {other:?}"),
        }

        let up = try_from_crossterm(ct_mouse(
            ct::MouseEventKind::Up(ct::MouseButton::Middle),
            0,
            0,
        ));
        match up {
            Some(InputEvent::Mouse(me)) => assert_eq!(me.kind, MouseAction::Up(MouseBtn::Middle)),
            other => panic!("expected mouse up, got {other:?}"),
        }
    }

    #[test]
    fn mouse_scroll_collapses() {
        let input = try_from_crossterm(ct_mouse(ct::MouseEventKind::ScrollUp, 0, 0));
        match input {
            Some(InputEvent::Mouse(me)) => assert_eq!(me.kind, MouseAction::Scroll),
            other => panic!("expected mouse scroll, got {other:?}"),
        }
    }

    // ── Other events ─────────────────────────────────────────────────

    #[test]
    fn resize_focus_and_paste() {
        assert_eq!(
            try_from_crossterm(ct::Event::Resize(120, 40)),
            Some(InputEvent::Resize { width: 120, height: 40 })
        );
        assert_eq!(try_from_crossterm(ct::Event::FocusLost), Some(InputEvent::FocusLost));
        assert_eq!(try_from_crossterm(ct::Event::FocusGained), Some(InputEvent::FocusGained));
        assert_eq!(try_from_crossterm(ct::Event::Paste("x".into())), None);
    }
}
