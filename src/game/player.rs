//! Player state and per-frame physics
//!
//! The player is a single axis-aligned collider driven by keyboard input
//! and a fixed-step Euler integrator: gravity accumulates into vertical
//! velocity each frame, velocity integrates into position, and crossing
//! the ground plane snaps the player back onto it.

use macroquad::prelude::*;

use super::level::{GROUND_LENGTH, GROUND_START_X};

pub const PLAYER_WIDTH: f32 = 25.0;
pub const PLAYER_HEIGHT: f32 = 49.0;
pub const PLAYER_START_X: f32 = GROUND_START_X + 100.0;

/// Horizontal walk speed per frame
const WALK_SPEED: f32 = 5.0;
/// Upward velocity applied on jump
const JUMP_IMPULSE: f32 = 10.0;
/// Downward acceleration per frame
const GRAVITY: f32 = 0.5;

pub const WALK_FRAME_COUNT: usize = 3;
/// Frames between walk-animation steps
const WALK_FRAME_TICKS: u32 = 8;

/// Which way the player sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// The walk/jump art faces right; flip it when heading left
    pub fn flip_x(&self) -> bool {
        *self == Facing::Left
    }
}

/// Keyboard input relevant to the player, captured once per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    /// Edge-triggered: true only on the frame the key went down
    pub jump_pressed: bool,
}

impl PlayerInput {
    pub fn poll() -> Self {
        Self {
            left: is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::Right),
            jump_pressed: is_key_pressed(KeyCode::Space),
        }
    }
}

/// The player character
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner of the collider
    pub pos: Vec2,
    pub velocity_y: f32,
    /// Set on jump, cleared when the fall is arrested by ground or block
    pub jumping: bool,
    pub facing: Facing,
    /// Current walk-cycle frame index
    pub walk_frame: usize,
    pub walk_frame_counter: u32,
    /// Was there horizontal input this frame? (drives sprite selection)
    pub moving: bool,
}

impl Player {
    /// Spawn standing on the ground at the level start
    pub fn spawn(ground_top: f32) -> Self {
        Self {
            pos: vec2(PLAYER_START_X, ground_top - PLAYER_HEIGHT),
            velocity_y: 0.0,
            jumping: false,
            facing: Facing::Right,
            walk_frame: 0,
            walk_frame_counter: 0,
            moving: false,
        }
    }

    /// The collider used for all overlap tests
    pub fn collider(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    /// Advance one frame: horizontal movement, walk animation, jump
    /// trigger, gravity, and the ground-plane check.
    pub fn update(&mut self, input: &PlayerInput, ground_top: f32) {
        self.moving = false;

        let right_limit = GROUND_START_X + GROUND_LENGTH - PLAYER_WIDTH;
        if input.right {
            self.pos.x = (self.pos.x + WALK_SPEED).min(right_limit);
            self.moving = true;
            self.facing = Facing::Right;
        }
        if input.left && self.pos.x > GROUND_START_X {
            self.pos.x = (self.pos.x - WALK_SPEED).max(GROUND_START_X);
            self.moving = true;
            self.facing = Facing::Left;
        }

        // Walk cycle only advances while walking on the ground
        if self.moving && !self.jumping {
            self.walk_frame_counter += 1;
            if self.walk_frame_counter >= WALK_FRAME_TICKS {
                self.walk_frame_counter = 0;
                self.walk_frame = (self.walk_frame + 1) % WALK_FRAME_COUNT;
            }
        } else {
            self.walk_frame = 0;
            self.walk_frame_counter = 0;
        }

        if input.jump_pressed && !self.jumping {
            self.velocity_y = -JUMP_IMPULSE;
            self.jumping = true;
        }

        self.velocity_y += GRAVITY;
        self.pos.y += self.velocity_y;

        if self.pos.y >= ground_top - PLAYER_HEIGHT {
            self.snap_to_ground(ground_top);
        }
    }

    /// Arrest a fall on the ground plane
    pub fn snap_to_ground(&mut self, ground_top: f32) {
        self.pos.y = ground_top - PLAYER_HEIGHT;
        self.velocity_y = 0.0;
        self.jumping = false;
    }
}
