//! World rendering
//!
//! Draws the gameplay scene through a scrolling 2D camera, then the HUD in
//! screen space. Every sprite falls back to a flat placeholder rect when
//! its texture failed to load, so the demo runs without its asset pack.

use macroquad::prelude::*;

use crate::app::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::assets::GameAssets;
use crate::ui::{self, MouseState};

use super::level::{BlockKind, Level, GROUND_HEIGHT, GROUND_LENGTH, GROUND_START_X};
use super::player::{Player, PLAYER_WIDTH};

/// Camera that keeps the player centered horizontally with the full screen
/// height visible. Macroquad's NDC y points up, so the y zoom is negated
/// to keep world y pointing down.
pub fn world_camera(player: &Player) -> Camera2D {
    Camera2D {
        target: vec2(player.pos.x + PLAYER_WIDTH * 0.5, SCREEN_HEIGHT * 0.5),
        zoom: vec2(2.0 / SCREEN_WIDTH, -2.0 / SCREEN_HEIGHT),
        ..Default::default()
    }
}

/// Draw a world sprite, or a flat placeholder when the texture is missing
fn draw_sprite(texture: Option<&Texture2D>, rect: &Rect, flip_x: bool, fallback: Color) {
    match texture {
        Some(tex) => draw_texture_ex(
            tex,
            rect.x,
            rect.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(rect.w, rect.h)),
                flip_x,
                ..Default::default()
            },
        ),
        None => draw_rectangle(rect.x, rect.y, rect.w, rect.h, fallback),
    }
}

/// Draw everything that lives in world space (call inside the camera)
pub fn draw_world(level: &Level, player: &Player, clouds: &[Vec2], assets: &GameAssets) {
    let (cloud_w, cloud_h) = assets.cloud_size();
    for cloud in clouds {
        let rect = Rect::new(cloud.x, cloud.y, cloud_w, cloud_h);
        draw_sprite(assets.cloud.as_ref(), &rect, false, ui::CLOUD_FALLBACK);
    }

    draw_rectangle(
        GROUND_START_X,
        level.ground_top,
        GROUND_LENGTH,
        GROUND_HEIGHT,
        ui::GROUND,
    );

    for block in &level.blocks {
        if block.is_removed() {
            continue;
        }
        let (texture, fallback) = match block.kind {
            BlockKind::Question => (assets.question_block.as_ref(), ui::QUESTION_FALLBACK),
            BlockKind::Stone => (assets.stone_block.as_ref(), ui::STONE_FALLBACK),
        };
        draw_sprite(texture, &block.rect, false, fallback);
    }

    for enemy in &level.enemies {
        if !enemy.active {
            continue;
        }
        // Enemy art faces left; flip it when walking right
        let flip = enemy.direction > 0.0;
        draw_sprite(assets.enemy.as_ref(), &enemy.rect, flip, ui::ENEMY_FALLBACK);
    }

    for coin in &level.coins {
        if coin.collected || coin.is_removed() {
            continue;
        }
        draw_sprite(assets.coin.as_ref(), &coin.rect, false, ui::COIN_FALLBACK);
    }

    let texture = if player.jumping {
        assets.player_jump.as_ref()
    } else if player.moving {
        assets.player_walk[player.walk_frame].as_ref()
    } else {
        assets.player_idle.as_ref()
    };
    draw_sprite(
        texture,
        &player.collider(),
        player.facing.flip_x(),
        ui::PLAYER_FALLBACK,
    );
}

fn settings_icon_rect() -> Rect {
    Rect::new(SCREEN_WIDTH - 60.0, 20.0, 40.0, 40.0)
}

/// Draw the screen-space HUD (call after resetting the camera).
/// Returns true when the settings icon was clicked.
pub fn draw_hud(assets: &GameAssets, mouse: &MouseState, score: i32) -> bool {
    draw_text(
        "Super Mano Bros",
        10.0,
        30.0,
        ui::FONT_SIZE_HUD,
        ui::LABEL_COLOR,
    );
    draw_text(
        &format!("Score: {}", score),
        10.0,
        60.0,
        ui::FONT_SIZE_HUD,
        ui::LABEL_COLOR,
    );

    let icon = settings_icon_rect();
    ui::draw_texture_or_rect(assets.settings_icon.as_ref(), &icon, ui::ICON_FALLBACK);
    mouse.clicked(&icon)
}
