//! Collision resolution between the player and the level
//!
//! One pass per frame over blocks, enemies, and coins. The collider is
//! snapshotted at entry; resolution mutates the player's position and
//! velocity, so later tests in the same pass see the updated velocity but
//! the original collider (a landing that zeroes the fall also disables the
//! stomp check for the rest of the frame).

use super::level::{BlockKind, Level};
use super::player::Player;

/// A landing counts as "on top" while the collider bottom is within this
/// distance below the block top
const BLOCK_LANDING_TOLERANCE: f32 = 10.0;
/// Same idea for stomping an enemy, but tighter
const STOMP_TOLERANCE: f32 = 5.0;
/// Upward velocity handed to the player after a stomp
const STOMP_BOUNCE: f32 = 5.0;

const QUESTION_BLOCK_POINTS: i32 = 100;
const STOMP_POINTS: i32 = 200;
const COIN_POINTS: i32 = 50;

/// What one resolution pass did
#[derive(Debug, Clone, Copy, Default)]
pub struct CollisionResult {
    /// Points awarded this frame
    pub points: i32,
    /// Did the fall get arrested on a block top?
    pub landed_on_block: bool,
    /// Was an enemy defeated from above?
    pub stomped_enemy: bool,
    /// Coins picked up this frame
    pub coins_collected: u32,
}

/// Test the player against all blocks, enemies, and coins and resolve
/// the contacts
pub fn resolve_player_collisions(player: &mut Player, level: &mut Level) -> CollisionResult {
    let mut result = CollisionResult::default();
    let collider = player.collider();

    // Blocks: only top landings are resolved - a falling player whose feet
    // are within tolerance of the block top gets set down on it. Question
    // blocks pay out on their first such hit.
    for block in &mut level.blocks {
        if block.is_removed() {
            continue;
        }
        if collider.overlaps(&block.rect)
            && collider.y + collider.h <= block.rect.y + BLOCK_LANDING_TOLERANCE
            && player.velocity_y > 0.0
        {
            player.pos.y = block.rect.y - collider.h;
            player.velocity_y = 0.0;
            player.jumping = false;
            result.landed_on_block = true;
            if block.kind == BlockKind::Question && !block.hit {
                block.hit = true;
                if block.has_coin {
                    result.points += QUESTION_BLOCK_POINTS;
                }
            }
        }
    }

    // Enemies: coming down on an enemy's head defeats it and bounces the
    // player. Side or underside contact is deliberately left without
    // effect.
    for enemy in &mut level.enemies {
        if !enemy.active {
            continue;
        }
        if collider.overlaps(&enemy.rect)
            && collider.y + collider.h - STOMP_TOLERANCE <= enemy.rect.y
            && player.velocity_y > 0.0
        {
            enemy.active = false;
            player.velocity_y = -STOMP_BOUNCE;
            result.points += STOMP_POINTS;
            result.stomped_enemy = true;
        }
    }

    // Coins: any overlap collects
    for coin in &mut level.coins {
        if coin.collected || coin.is_removed() {
            continue;
        }
        if collider.overlaps(&coin.rect) {
            coin.collected = true;
            result.points += COIN_POINTS;
            result.coins_collected += 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::level::{Block, Coin, Enemy, ENEMY_SIZE};
    use crate::game::player::PLAYER_HEIGHT;
    use macroquad::prelude::*;

    const GROUND_TOP: f32 = 700.0;

    fn empty_level() -> Level {
        Level {
            blocks: Vec::new(),
            enemies: Vec::new(),
            coins: Vec::new(),
            ground_top: GROUND_TOP,
        }
    }

    fn falling_player_at(x: f32, y: f32) -> Player {
        let mut player = Player::spawn(GROUND_TOP);
        player.pos = vec2(x, y);
        player.velocity_y = 3.0;
        player.jumping = true;
        player
    }

    fn stone_block(x: f32, y: f32) -> Block {
        Block {
            rect: Rect::new(x, y, 64.0, 64.0),
            kind: BlockKind::Stone,
            has_coin: false,
            hit: false,
        }
    }

    fn question_block(x: f32, y: f32) -> Block {
        Block {
            rect: Rect::new(x, y, 64.0, 64.0),
            kind: BlockKind::Question,
            has_coin: true,
            hit: false,
        }
    }

    #[test]
    fn test_falling_player_lands_on_block_top() {
        let mut level = empty_level();
        level.blocks.push(stone_block(250.0, 596.0));
        // Feet at 602, within the 10px window below the block top at 596
        let mut player = falling_player_at(260.0, 602.0 - PLAYER_HEIGHT);

        let result = resolve_player_collisions(&mut player, &mut level);
        assert!(result.landed_on_block);
        assert_eq!(player.pos.y, 596.0 - PLAYER_HEIGHT);
        assert_eq!(player.velocity_y, 0.0);
        assert!(!player.jumping);
        assert_eq!(result.points, 0);
    }

    #[test]
    fn test_rising_player_passes_through_block() {
        let mut level = empty_level();
        level.blocks.push(stone_block(250.0, 596.0));
        let mut player = falling_player_at(260.0, 602.0 - PLAYER_HEIGHT);
        player.velocity_y = -3.0;

        let result = resolve_player_collisions(&mut player, &mut level);
        assert!(!result.landed_on_block);
        assert_eq!(player.pos.y, 602.0 - PLAYER_HEIGHT);
        assert_eq!(player.velocity_y, -3.0);
    }

    #[test]
    fn test_no_landing_when_feet_are_past_tolerance() {
        let mut level = empty_level();
        level.blocks.push(stone_block(250.0, 596.0));
        // Feet at 620, deeper than block top + 10
        let mut player = falling_player_at(260.0, 620.0 - PLAYER_HEIGHT);

        let result = resolve_player_collisions(&mut player, &mut level);
        assert!(!result.landed_on_block);
        assert_eq!(player.pos.y, 620.0 - PLAYER_HEIGHT);
    }

    #[test]
    fn test_question_block_pays_out_exactly_once() {
        let mut level = empty_level();
        level.blocks.push(question_block(250.0, 596.0));

        let mut player = falling_player_at(260.0, 602.0 - PLAYER_HEIGHT);
        let first = resolve_player_collisions(&mut player, &mut level);
        assert_eq!(first.points, 100);
        assert!(level.blocks[0].hit);

        // Land on it again: still solid, no second payout
        let mut player = falling_player_at(260.0, 602.0 - PLAYER_HEIGHT);
        let second = resolve_player_collisions(&mut player, &mut level);
        assert!(second.landed_on_block);
        assert_eq!(second.points, 0);
    }

    #[test]
    fn test_zero_area_block_is_skipped() {
        let mut level = empty_level();
        let mut removed = stone_block(250.0, 596.0);
        removed.rect.w = 0.0;
        level.blocks.push(removed);
        let mut player = falling_player_at(250.0, 602.0 - PLAYER_HEIGHT);

        let result = resolve_player_collisions(&mut player, &mut level);
        assert!(!result.landed_on_block);
        assert_eq!(player.pos.y, 602.0 - PLAYER_HEIGHT);
    }

    #[test]
    fn test_stomp_defeats_enemy_once_and_bounces() {
        let mut level = empty_level();
        level.enemies.push(Enemy {
            rect: Rect::new(300.0, 600.0, ENEMY_SIZE, ENEMY_SIZE),
            active: true,
            direction: 1.0,
            speed: 2.0,
        });
        // Feet at 602: within the 5px stomp window above the enemy top
        let mut player = falling_player_at(310.0, 602.0 - PLAYER_HEIGHT);

        let result = resolve_player_collisions(&mut player, &mut level);
        assert!(result.stomped_enemy);
        assert_eq!(result.points, 200);
        assert!(!level.enemies[0].active);
        assert_eq!(player.velocity_y, -5.0);

        // The defeated enemy no longer collides
        let mut player = falling_player_at(310.0, 602.0 - PLAYER_HEIGHT);
        let again = resolve_player_collisions(&mut player, &mut level);
        assert!(!again.stomped_enemy);
        assert_eq!(again.points, 0);
    }

    #[test]
    fn test_side_contact_with_enemy_has_no_effect() {
        let mut level = empty_level();
        level.enemies.push(Enemy {
            rect: Rect::new(300.0, 600.0, ENEMY_SIZE, ENEMY_SIZE),
            active: true,
            direction: 1.0,
            speed: 2.0,
        });
        // Standing beside the enemy, feet level with its feet
        let mut player = falling_player_at(290.0, 648.0 - PLAYER_HEIGHT);

        let result = resolve_player_collisions(&mut player, &mut level);
        assert!(!result.stomped_enemy);
        assert_eq!(result.points, 0);
        assert!(level.enemies[0].active);
        assert_eq!(player.pos.y, 648.0 - PLAYER_HEIGHT);
    }

    #[test]
    fn test_coin_pickup_is_idempotent() {
        let mut level = empty_level();
        level.coins.push(Coin {
            rect: Rect::new(266.0, 564.0, 32.0, 32.0),
            collected: false,
        });
        let mut player = falling_player_at(266.0, 570.0);

        let first = resolve_player_collisions(&mut player, &mut level);
        assert_eq!(first.points, 50);
        assert_eq!(first.coins_collected, 1);
        assert!(level.coins[0].collected);

        let second = resolve_player_collisions(&mut player, &mut level);
        assert_eq!(second.points, 0);
        assert_eq!(second.coins_collected, 0);
    }

    #[test]
    fn test_landing_disables_stomp_in_same_pass() {
        // A block landing zeroes the fall; the enemy test later in the
        // pass then sees velocity 0 and must not trigger
        let mut level = empty_level();
        level.blocks.push(stone_block(250.0, 596.0));
        level.enemies.push(Enemy {
            rect: Rect::new(250.0, 600.0, ENEMY_SIZE, ENEMY_SIZE),
            active: true,
            direction: 1.0,
            speed: 2.0,
        });
        let mut player = falling_player_at(260.0, 602.0 - PLAYER_HEIGHT);

        let result = resolve_player_collisions(&mut player, &mut level);
        assert!(result.landed_on_block);
        assert!(!result.stomped_enemy);
        assert!(level.enemies[0].active);
    }
}
