//! Title screen

use macroquad::prelude::*;

use crate::app::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::assets::GameAssets;
use crate::ui::{self, MouseState};

/// What the title screen asked for this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleAction {
    None,
    Start,
    Exit,
}

const HEADING: &str = "SUPER MANO BROS";
const HEADING_BASELINE_Y: f32 = 160.0;

fn start_button() -> Rect {
    Rect::new(SCREEN_WIDTH * 0.5 - 400.0, 340.0, 300.0, 80.0)
}

fn exit_button() -> Rect {
    Rect::new(SCREEN_WIDTH * 0.5 - 400.0, 460.0, 300.0, 80.0)
}

/// Draw the title screen and hit-test its buttons
pub fn draw(assets: &GameAssets, mouse: &MouseState) -> TitleAction {
    let backdrop = Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT);
    ui::draw_texture_or_rect(
        assets.title_background.as_ref(),
        &backdrop,
        ui::TITLE_BG_FALLBACK,
    );

    let dims = measure_text(HEADING, None, ui::FONT_SIZE_HEADING as u16, 1.0);
    draw_text(
        HEADING,
        ((SCREEN_WIDTH - dims.width) * 0.5).round(),
        HEADING_BASELINE_Y,
        ui::FONT_SIZE_HEADING,
        ui::HEADING_COLOR,
    );

    if ui::texture_button(
        mouse,
        start_button(),
        assets.button.as_ref(),
        "START",
        ui::START_HOVER,
    ) {
        return TitleAction::Start;
    }
    if ui::texture_button(
        mouse,
        exit_button(),
        assets.button.as_ref(),
        "EXIT",
        ui::EXIT_HOVER,
    ) {
        return TitleAction::Exit;
    }
    TitleAction::None
}
