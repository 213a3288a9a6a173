//! Immediate-mode UI helpers for the menu screens
//!
//! Design principles:
//! - Immediate mode (no retained state, rebuilt each frame)
//! - Simple rectangle-based hit-testing against a per-frame mouse snapshot
//! - Macroquad integration for rendering

mod input;
mod theme;
mod widgets;

pub use input::*;
pub use theme::*;
pub use widgets::*;
