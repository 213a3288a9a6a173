//! Enemy patrol logic
//!
//! Enemies walk back and forth at a fixed speed. Before committing to the
//! next step they probe one step ahead against the stone blocks and turn
//! around on contact; the world edges also turn them around, with the
//! position clamped exactly onto the boundary.

use super::level::{Block, BlockKind, Enemy, ENEMY_SIZE, GROUND_LENGTH, GROUND_START_X};

/// Advance all active enemies by one frame
pub fn update_enemies(enemies: &mut [Enemy], blocks: &[Block]) {
    for enemy in enemies.iter_mut() {
        if !enemy.active {
            continue;
        }
        enemy.rect.x += enemy.direction * enemy.speed;

        // Probe the next step against stone blocks and reverse on contact
        let mut probe = enemy.rect;
        probe.x += enemy.direction * enemy.speed;
        for block in blocks {
            if block.kind == BlockKind::Stone && probe.overlaps(&block.rect) {
                enemy.direction = -enemy.direction;
                break;
            }
        }

        let max_x = GROUND_START_X + GROUND_LENGTH - ENEMY_SIZE;
        if enemy.rect.x < GROUND_START_X {
            enemy.rect.x = GROUND_START_X;
            enemy.direction = 1.0;
        }
        if enemy.rect.x > max_x {
            enemy.rect.x = max_x;
            enemy.direction = -1.0;
        }
    }
}
