//! Level layout and entity storage
//!
//! The demo level is built once at startup: a raised platform of
//! alternating stone/question blocks, a coin floating over each question
//! block, and two patrolling enemies flanking the platform. Entities are
//! never removed from storage once spawned - defeated enemies and collected
//! coins are flagged and skipped, and a zero-area rect marks a block as
//! removed.

use macroquad::prelude::*;
use macroquad::rand::gen_range;

use super::player::PLAYER_START_X;

/// Left edge of the world
pub const GROUND_START_X: f32 = 0.0;
/// Horizontal extent of the world
pub const GROUND_LENGTH: f32 = 2000.0;
/// Height of the solid ground strip at the bottom of the screen
pub const GROUND_HEIGHT: f32 = 100.0;

pub const BLOCK_SIZE: f32 = 64.0;
pub const COIN_SIZE: f32 = 32.0;
pub const ENEMY_SIZE: f32 = 48.0;

/// Storage capacities (entities are flagged, not removed, so the vecs
/// never grow past these)
pub const MAX_BLOCKS: usize = 50;
pub const MAX_ENEMIES: usize = 10;
pub const MAX_COINS: usize = 20;

// Platform layout
const PLATFORM_START_X: f32 = GROUND_START_X + 250.0;
const PLATFORM_BLOCK_COUNT: usize = 8;
/// Gap between the ground and the underside of the platform
const PLATFORM_RAISE: f32 = 40.0;

// Enemy placement
const ENEMY_PATROL_SPEED: f32 = 2.0;
/// Enemies patrol at platform height so they bump into the stone blocks
const ENEMY_RAISE: f32 = 100.0;
const ENEMY_LEFT_GAP: f32 = 120.0;
const ENEMY_RIGHT_GAP: f32 = 40.0;

// Cloud backdrop
const CLOUD_CAPACITY: usize = 100;
const CLOUD_SPACING: f32 = 200.0;
const CLOUD_MIN_Y: f32 = 50.0;
const CLOUD_MAX_Y: f32 = 200.0;

/// Block variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Awards points when landed on for the first time
    Question,
    /// Plain solid block, also turns patrolling enemies around
    Stone,
}

/// A static level block
#[derive(Debug, Clone)]
pub struct Block {
    pub rect: Rect,
    pub kind: BlockKind,
    /// Question blocks carry a score payout for their first hit
    pub has_coin: bool,
    /// Set once on the first resolved landing, never cleared
    pub hit: bool,
}

impl Block {
    /// Zero-area rects act as "removed" sentinels and are skipped everywhere
    pub fn is_removed(&self) -> bool {
        self.rect.w == 0.0
    }
}

/// A patrolling enemy
#[derive(Debug, Clone)]
pub struct Enemy {
    pub rect: Rect,
    /// Cleared when the player stomps the enemy; inactive enemies neither
    /// move nor collide
    pub active: bool,
    /// Horizontal heading, +1 right / -1 left
    pub direction: f32,
    pub speed: f32,
}

/// A collectible coin
#[derive(Debug, Clone)]
pub struct Coin {
    pub rect: Rect,
    pub collected: bool,
}

impl Coin {
    pub fn is_removed(&self) -> bool {
        self.rect.w == 0.0
    }
}

/// All static and patrolling level content
pub struct Level {
    pub blocks: Vec<Block>,
    pub enemies: Vec<Enemy>,
    pub coins: Vec<Coin>,
    /// World-space y of the walkable ground surface
    pub ground_top: f32,
}

impl Level {
    /// Build the demo level. Layout is deterministic: even platform slots
    /// are stone, odd slots are question blocks with a coin above.
    pub fn build(ground_top: f32) -> Self {
        let mut blocks = Vec::with_capacity(MAX_BLOCKS);
        let mut enemies = Vec::with_capacity(MAX_ENEMIES);
        let mut coins = Vec::with_capacity(MAX_COINS);

        let platform_y = ground_top - BLOCK_SIZE - PLATFORM_RAISE;
        for i in 0..PLATFORM_BLOCK_COUNT {
            let kind = if i % 2 == 0 {
                BlockKind::Stone
            } else {
                BlockKind::Question
            };
            let x = PLATFORM_START_X + i as f32 * BLOCK_SIZE;
            blocks.push(Block {
                rect: Rect::new(x, platform_y, BLOCK_SIZE, BLOCK_SIZE),
                kind,
                has_coin: kind == BlockKind::Question,
                hit: false,
            });

            if kind == BlockKind::Question {
                coins.push(Coin {
                    rect: Rect::new(
                        x + (BLOCK_SIZE - COIN_SIZE) * 0.5,
                        platform_y - COIN_SIZE,
                        COIN_SIZE,
                        COIN_SIZE,
                    ),
                    collected: false,
                });
            }
        }

        let platform_end_x = PLATFORM_START_X + PLATFORM_BLOCK_COUNT as f32 * BLOCK_SIZE;
        let enemy_y = ground_top - ENEMY_SIZE - ENEMY_RAISE;
        enemies.push(Enemy {
            rect: Rect::new(PLATFORM_START_X - ENEMY_LEFT_GAP, enemy_y, ENEMY_SIZE, ENEMY_SIZE),
            active: true,
            direction: 1.0,
            speed: ENEMY_PATROL_SPEED,
        });
        enemies.push(Enemy {
            rect: Rect::new(platform_end_x + ENEMY_RIGHT_GAP, enemy_y, ENEMY_SIZE, ENEMY_SIZE),
            active: true,
            direction: -1.0,
            speed: ENEMY_PATROL_SPEED,
        });

        Self {
            blocks,
            enemies,
            coins,
            ground_top,
        }
    }
}

/// Scatter the cloud backdrop along the world, spaced on a fixed grid with
/// random heights. Clouds before the player spawn or past the world edge
/// are dropped.
pub fn scatter_clouds(cloud_w: f32) -> Vec<Vec2> {
    let mut clouds = Vec::with_capacity(CLOUD_CAPACITY);
    for i in 0..CLOUD_CAPACITY * 2 {
        if clouds.len() >= CLOUD_CAPACITY {
            break;
        }
        let x = GROUND_START_X + i as f32 * CLOUD_SPACING;
        if x < PLAYER_START_X {
            continue;
        }
        if x > GROUND_START_X + GROUND_LENGTH - cloud_w {
            break;
        }
        clouds.push(vec2(x, gen_range(CLOUD_MIN_Y, CLOUD_MAX_Y)));
    }
    clouds
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUND_TOP: f32 = 700.0;

    #[test]
    fn test_platform_alternates_stone_question() {
        let level = Level::build(GROUND_TOP);
        assert_eq!(level.blocks.len(), 8);
        for (i, block) in level.blocks.iter().enumerate() {
            let expected = if i % 2 == 0 {
                BlockKind::Stone
            } else {
                BlockKind::Question
            };
            assert_eq!(block.kind, expected);
            assert_eq!(block.has_coin, expected == BlockKind::Question);
            assert!(!block.hit);
            assert_eq!(block.rect.x, 250.0 + i as f32 * BLOCK_SIZE);
            assert_eq!(block.rect.y, GROUND_TOP - BLOCK_SIZE - 40.0);
        }
    }

    #[test]
    fn test_coin_floats_over_each_question_block() {
        let level = Level::build(GROUND_TOP);
        let questions: Vec<_> = level
            .blocks
            .iter()
            .filter(|b| b.kind == BlockKind::Question)
            .collect();
        assert_eq!(level.coins.len(), questions.len());
        for (coin, block) in level.coins.iter().zip(&questions) {
            // Centered horizontally, resting directly on the block top
            assert_eq!(coin.rect.x, block.rect.x + (BLOCK_SIZE - COIN_SIZE) * 0.5);
            assert_eq!(coin.rect.y, block.rect.y - COIN_SIZE);
            assert!(!coin.collected);
        }
    }

    #[test]
    fn test_enemies_flank_the_platform() {
        let level = Level::build(GROUND_TOP);
        assert_eq!(level.enemies.len(), 2);

        let left = &level.enemies[0];
        let right = &level.enemies[1];
        assert_eq!(left.rect.x, 130.0);
        assert_eq!(left.direction, 1.0);
        assert_eq!(right.rect.x, 250.0 + 8.0 * BLOCK_SIZE + 40.0);
        assert_eq!(right.direction, -1.0);
        for enemy in &level.enemies {
            assert!(enemy.active);
            assert_eq!(enemy.speed, 2.0);
            assert_eq!(enemy.rect.y, GROUND_TOP - ENEMY_SIZE - 100.0);
        }
    }

    #[test]
    fn test_clouds_stay_inside_world_after_spawn() {
        let cloud_w = 128.0;
        let clouds = scatter_clouds(cloud_w);
        assert!(!clouds.is_empty());
        assert!(clouds.len() <= CLOUD_CAPACITY);
        for cloud in &clouds {
            assert!(cloud.x >= PLAYER_START_X);
            assert!(cloud.x <= GROUND_START_X + GROUND_LENGTH - cloud_w);
            assert!(cloud.y >= CLOUD_MIN_Y && cloud.y <= CLOUD_MAX_Y);
        }
    }
}
