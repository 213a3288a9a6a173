//! UI Theme - Shared colors and styling constants
//!
//! Centralized color definitions so the screens stay visually consistent.

use macroquad::prelude::*;

// =============================================================================
// World Colors
// =============================================================================

/// Sky backdrop
pub const SKY: Color = SKYBLUE;

/// Ground strip
pub const GROUND: Color = GREEN;

// =============================================================================
// Text Colors / Sizes
// =============================================================================

/// Title-screen heading
pub const HEADING_COLOR: Color = YELLOW;

/// HUD and button label text
pub const LABEL_COLOR: Color = BLACK;

/// Title heading text size
pub const FONT_SIZE_HEADING: f32 = 75.0;

/// Menu button label size
pub const FONT_SIZE_BUTTON: f32 = 40.0;

/// Settings button label size
pub const FONT_SIZE_PANEL: f32 = 30.0;

/// HUD text size
pub const FONT_SIZE_HUD: f32 = 20.0;

// =============================================================================
// Button Colors
// =============================================================================

/// Start button hover wash
pub const START_HOVER: Color = Color::new(0.99, 0.98, 0.0, 0.4);

/// Exit button hover wash
pub const EXIT_HOVER: Color = Color::new(0.90, 0.16, 0.22, 0.3);

/// Settings screen backdrop
pub const SETTINGS_BG: Color = DARKGRAY;

/// Resume button idle / hover
pub const RESUME_IDLE: Color = DARKGREEN;
pub const RESUME_HOVER: Color = GREEN;

/// Sound toggle idle / hover
pub const SOUND_IDLE: Color = GOLD;
pub const SOUND_HOVER: Color = YELLOW;

/// Quit button idle / hover
pub const QUIT_IDLE: Color = MAROON;
pub const QUIT_HOVER: Color = RED;

// =============================================================================
// Placeholder Colors (drawn when a texture failed to load)
// =============================================================================

pub const PLAYER_FALLBACK: Color = RED;
pub const ENEMY_FALLBACK: Color = DARKBROWN;
pub const COIN_FALLBACK: Color = GOLD;
pub const STONE_FALLBACK: Color = GRAY;
pub const QUESTION_FALLBACK: Color = ORANGE;
pub const CLOUD_FALLBACK: Color = WHITE;
pub const BUTTON_FALLBACK: Color = LIGHTGRAY;
pub const ICON_FALLBACK: Color = LIGHTGRAY;
pub const TITLE_BG_FALLBACK: Color = SKYBLUE;
