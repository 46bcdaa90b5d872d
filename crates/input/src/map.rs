//! Mapping from terminal events to game input.
//!
//! Keys cover the out-of-game controls (restart, quit); swaps come from
//! mouse drags routed through [`PointerTracker`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::pointer::{PointerTracker, SwipeIntent};

/// Out-of-game controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Restart,
    Quit,
}

/// Map keyboard input to UI actions.
pub fn handle_key_event(key: KeyEvent) -> Option<UiAction> {
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(UiAction::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(UiAction::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(UiAction::Quit)
        }
        _ => None,
    }
}

/// Feed a terminal mouse event into the tracker.
///
/// Only the left button drives swipes; drag events are ignored because the
/// gesture is resolved entirely from the press/release pair.
pub fn handle_mouse_event(tracker: &mut PointerTracker, ev: MouseEvent) -> Option<SwipeIntent> {
    match ev.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            tracker.pointer_down(f32::from(ev.column), f32::from(ev.row));
            None
        }
        MouseEventKind::Up(MouseButton::Left) => {
            tracker.pointer_up(f32::from(ev.column), f32::from(ev.row))
        }
        _ => None,
    }
}
