//! Application state and the screen state machine
//!
//! Three screens driven purely by mouse hit-testing against fixed button
//! rects: Title -> Gameplay, Gameplay <-> Settings. The gameplay screen
//! runs one simulation step before drawing; the menu screens only draw
//! and hit-test.

use macroquad::prelude::*;

use crate::assets::GameAssets;
use crate::audio::{MusicPlayer, MusicTrack};
use crate::game::{self, collision, enemy, renderer};
use crate::game::level::{Level, GROUND_HEIGHT};
use crate::game::{Player, PlayerInput};
use crate::settings::{self, SettingsAction};
use crate::title::{self, TitleAction};
use crate::ui::{self, MouseState};

pub const SCREEN_WIDTH: f32 = 1200.0;
pub const SCREEN_HEIGHT: f32 = 800.0;

/// The active screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameScreen {
    Title,
    Gameplay,
    Settings,
}

/// Top-level application state, passed explicitly to every update and
/// draw call (no globals)
pub struct App {
    pub assets: GameAssets,
    pub screen: GameScreen,
    pub score: i32,
    pub level: Level,
    pub player: Player,
    pub clouds: Vec<Vec2>,
    pub music: MusicPlayer,
}

impl App {
    pub fn new(assets: GameAssets) -> Self {
        let ground_top = SCREEN_HEIGHT - GROUND_HEIGHT;
        let (cloud_w, _) = assets.cloud_size();
        let mut music = MusicPlayer::new();
        music.play(&assets, MusicTrack::Title);
        Self {
            screen: GameScreen::Title,
            score: 0,
            level: Level::build(ground_top),
            player: Player::spawn(ground_top),
            clouds: game::scatter_clouds(cloud_w),
            music,
            assets,
        }
    }

    /// Run one frame of the active screen: update, then draw.
    /// Returns false when the app should quit.
    pub fn frame(&mut self, mouse: &MouseState) -> bool {
        clear_background(ui::SKY);
        match self.screen {
            GameScreen::Title => match title::draw(&self.assets, mouse) {
                TitleAction::Start => {
                    self.screen = GameScreen::Gameplay;
                    self.music.play(&self.assets, MusicTrack::Game);
                }
                TitleAction::Exit => return false,
                TitleAction::None => {}
            },
            GameScreen::Gameplay => {
                let input = PlayerInput::poll();
                self.player.update(&input, self.level.ground_top);
                enemy::update_enemies(&mut self.level.enemies, &self.level.blocks);
                let result = collision::resolve_player_collisions(&mut self.player, &mut self.level);
                self.score += result.points;

                set_camera(&renderer::world_camera(&self.player));
                renderer::draw_world(&self.level, &self.player, &self.clouds, &self.assets);
                set_default_camera();

                if renderer::draw_hud(&self.assets, mouse, self.score) {
                    self.screen = GameScreen::Settings;
                }
            }
            GameScreen::Settings => match settings::draw(mouse, self.music.muted()) {
                SettingsAction::Resume => self.screen = GameScreen::Gameplay,
                SettingsAction::ToggleSound => self.music.toggle_mute(&self.assets),
                SettingsAction::Quit => return false,
                SettingsAction::None => {}
            },
        }
        true
    }
}
