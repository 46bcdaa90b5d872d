//! Input mapping for the terminal front end.
//!
//! [`pointer`] is pure gesture math (pointer coordinates + layout metrics
//! to swipes); [`map`] adapts crossterm key/mouse events onto it.

pub mod map;
pub mod pointer;

pub use map::{handle_key_event, handle_mouse_event, UiAction};
pub use pointer::{GridLayout, PointerTracker, SwipeIntent};
