//! Asset loading
//!
//! All textures and music are loaded once at startup from fixed paths
//! under assets/. Every load is individually checked: a failure is logged
//! and the slot left empty, and the renderer substitutes flat placeholder
//! shapes for missing art so the demo stays playable without the asset
//! pack.

use macroquad::audio::{load_sound, Sound};
use macroquad::prelude::*;

use crate::game::player::WALK_FRAME_COUNT;

/// Nominal cloud sprite size used when the texture is missing
const CLOUD_FALLBACK_SIZE: (f32, f32) = (128.0, 64.0);

/// Every texture and music track the demo uses. Each slot is `None` when
/// its file failed to load.
pub struct GameAssets {
    pub player_walk: [Option<Texture2D>; WALK_FRAME_COUNT],
    pub player_jump: Option<Texture2D>,
    pub player_idle: Option<Texture2D>,
    pub cloud: Option<Texture2D>,
    pub title_background: Option<Texture2D>,
    pub button: Option<Texture2D>,
    pub settings_icon: Option<Texture2D>,
    pub coin: Option<Texture2D>,
    pub enemy: Option<Texture2D>,
    pub question_block: Option<Texture2D>,
    pub stone_block: Option<Texture2D>,
    pub title_music: Option<Sound>,
    pub game_music: Option<Sound>,
}

impl GameAssets {
    pub async fn load() -> Self {
        Self {
            player_walk: [
                load_texture_or_warn("assets/textures/walk_1.png").await,
                load_texture_or_warn("assets/textures/walk_2.png").await,
                load_texture_or_warn("assets/textures/walk_3.png").await,
            ],
            player_jump: load_texture_or_warn("assets/textures/jump.png").await,
            player_idle: load_texture_or_warn("assets/textures/idle.png").await,
            cloud: load_texture_or_warn("assets/textures/cloud.png").await,
            title_background: load_texture_or_warn("assets/textures/background.png").await,
            button: load_texture_or_warn("assets/textures/button.png").await,
            settings_icon: load_texture_or_warn("assets/textures/settings.png").await,
            coin: load_texture_or_warn("assets/textures/coin.png").await,
            enemy: load_texture_or_warn("assets/textures/enemy.png").await,
            question_block: load_texture_or_warn("assets/textures/question_block.png").await,
            stone_block: load_texture_or_warn("assets/textures/stone_block.png").await,
            title_music: load_music_or_warn("assets/music/title.wav").await,
            game_music: load_music_or_warn("assets/music/game.wav").await,
        }
    }

    /// Native cloud sprite size, or a nominal size when missing (the cloud
    /// scatter and the renderer both need it)
    pub fn cloud_size(&self) -> (f32, f32) {
        match &self.cloud {
            Some(tex) => (tex.width(), tex.height()),
            None => CLOUD_FALLBACK_SIZE,
        }
    }
}

async fn load_texture_or_warn(path: &str) -> Option<Texture2D> {
    match load_texture(path).await {
        Ok(tex) => {
            // Pixel art: keep edges hard when scaled
            tex.set_filter(FilterMode::Nearest);
            Some(tex)
        }
        Err(e) => {
            println!("Failed to load texture {}: {}", path, e);
            None
        }
    }
}

async fn load_music_or_warn(path: &str) -> Option<Sound> {
    match load_sound(path).await {
        Ok(sound) => Some(sound),
        Err(e) => {
            println!("Failed to load music {}: {}", path, e);
            None
        }
    }
}
