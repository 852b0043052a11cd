//! Per-tick simulation passes over a [`World`].
//!
//! `advance_world` moves everything; `resolve_collisions` then settles
//! damage, projectile expiry and player contact.  Both are only called while
//! the game is in the Playing phase.

use tracing::debug;

use crate::animation::{AnimationSet, Animations};
use crate::config::GameConfig;
use crate::enemy::Enemy;
use crate::entities::{Platform, Rect, World};
use crate::input::HeldKeys;

/// What the combat pass decided about the player this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CombatOutcome {
    Continue,
    PlayerKilled,
}

// ── Movement ──────────────────────────────────────────────────────────────────

/// Player first, then projectiles, then zombies (which chase the player's
/// already-updated position).
pub fn advance_world(
    world: &mut World,
    held: HeldKeys,
    anims: &Animations,
    config: &GameConfig,
    now_ms: u64,
) {
    world
        .player
        .update(&world.platforms, held, &anims.player, config, now_ms);

    for shot in &mut world.projectiles {
        shot.update();
    }

    update_enemies(
        &mut world.enemies,
        world.player.rect(),
        &world.platforms,
        &anims.zombie,
        config,
        now_ms,
    );
}

/// Update zombies in list order.  Each one sees its peers' positions as
/// they are at that moment, so earlier zombies have already moved.
pub fn update_enemies(
    enemies: &mut [Enemy],
    player: Rect,
    platforms: &[Platform],
    anims: &AnimationSet,
    config: &GameConfig,
    now_ms: u64,
) {
    for i in 0..enemies.len() {
        let (before, rest) = enemies.split_at_mut(i);
        if let Some((enemy, after)) = rest.split_first_mut() {
            let peers = before.iter().chain(after.iter());
            enemy.update(player, platforms, peers, anims, config, now_ms);
        }
    }
}

// ── Combat ────────────────────────────────────────────────────────────────────

/// Settle projectiles and contacts.
///
/// 1. Projectiles fully off-screen are discarded.
/// 2. Every other projectile hits the first living zombie it overlaps
///    (list order), deals one damage and is spent.
/// 3. The player contact check always runs afterwards: touching any living
///    zombie kills an alive player.
pub fn resolve_collisions(world: &mut World, config: &GameConfig, now_ms: u64) -> CombatOutcome {
    let World {
        player,
        enemies,
        projectiles,
        ..
    } = world;
    let screen_width = config.screen.width;

    projectiles.retain(|shot| {
        if shot.is_offscreen(screen_width) {
            return false;
        }
        match enemies
            .iter_mut()
            .find(|e| e.alive && shot.rect.intersects(&e.rect()))
        {
            Some(enemy) => {
                enemy.take_damage(1);
                debug!(health = enemy.health, "zombie hit");
                false
            }
            None => true,
        }
    });

    if player.is_alive() {
        let touched = enemies
            .iter()
            .any(|e| e.alive && player.rect().intersects(&e.rect()));
        if touched {
            player.die(config, now_ms);
            return CombatOutcome::PlayerKilled;
        }
    }
    CombatOutcome::Continue
}

pub fn all_enemies_defeated(world: &World) -> bool {
    world.living_enemies() == 0
}
