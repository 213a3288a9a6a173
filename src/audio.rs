//! Background music
//!
//! One looping track plays per screen (title music on the title screen,
//! game music everywhere else). The settings screen's sound toggle mutes
//! by dropping the playing track's volume to zero rather than stopping
//! it, so unmuting picks the music back up in place.

use macroquad::audio::{play_sound, set_sound_volume, stop_sound, PlaySoundParams};

use crate::assets::GameAssets;

/// The music tracks the demo ships
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicTrack {
    Title,
    Game,
}

impl MusicTrack {
    fn sound<'a>(&self, assets: &'a GameAssets) -> Option<&'a macroquad::audio::Sound> {
        match self {
            MusicTrack::Title => assets.title_music.as_ref(),
            MusicTrack::Game => assets.game_music.as_ref(),
        }
    }
}

/// Tracks which music is playing and whether sound is muted
pub struct MusicPlayer {
    muted: bool,
    current: Option<MusicTrack>,
}

impl MusicPlayer {
    pub fn new() -> Self {
        Self {
            muted: false,
            current: None,
        }
    }

    /// Switch to a track, stopping whatever was playing. Re-requesting the
    /// current track is a no-op so screens can call this every transition.
    pub fn play(&mut self, assets: &GameAssets, track: MusicTrack) {
        if self.current == Some(track) {
            return;
        }
        if let Some(prev) = self.current.take() {
            if let Some(sound) = prev.sound(assets) {
                stop_sound(sound);
            }
        }
        if let Some(sound) = track.sound(assets) {
            play_sound(
                sound,
                PlaySoundParams {
                    looped: true,
                    volume: self.volume(),
                },
            );
        }
        self.current = Some(track);
    }

    pub fn toggle_mute(&mut self, assets: &GameAssets) {
        self.muted = !self.muted;
        if let Some(track) = self.current {
            if let Some(sound) = track.sound(assets) {
                set_sound_volume(sound, self.volume());
            }
        }
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    fn volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            1.0
        }
    }
}
