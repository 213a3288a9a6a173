//! Settings / pause screen

use macroquad::prelude::*;

use crate::app::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::ui::{self, MouseState};

/// What the settings screen asked for this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    None,
    Resume,
    ToggleSound,
    Quit,
}

fn resume_button() -> Rect {
    Rect::new(SCREEN_WIDTH * 0.5 - 100.0, 200.0, 200.0, 50.0)
}

fn sound_button() -> Rect {
    Rect::new(SCREEN_WIDTH * 0.5 - 100.0, 280.0, 200.0, 50.0)
}

fn quit_button() -> Rect {
    Rect::new(SCREEN_WIDTH * 0.5 - 100.0, 360.0, 200.0, 50.0)
}

/// Draw the settings screen and hit-test its buttons
pub fn draw(mouse: &MouseState, muted: bool) -> SettingsAction {
    draw_rectangle(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT, ui::SETTINGS_BG);

    if ui::panel_button(
        mouse,
        resume_button(),
        "RESUME",
        ui::RESUME_IDLE,
        ui::RESUME_HOVER,
    ) {
        return SettingsAction::Resume;
    }

    let sound_label = if muted { "SOUND: OFF" } else { "SOUND: ON" };
    if ui::panel_button(
        mouse,
        sound_button(),
        sound_label,
        ui::SOUND_IDLE,
        ui::SOUND_HOVER,
    ) {
        return SettingsAction::ToggleSound;
    }

    if ui::panel_button(mouse, quit_button(), "QUIT", ui::QUIT_IDLE, ui::QUIT_HOVER) {
        return SettingsAction::Quit;
    }
    SettingsAction::None
}
