//! The hardcoded level: platform layout, zombie spawns, player start.

use tracing::info;

use crate::config::GameConfig;
use crate::enemy::Enemy;
use crate::entities::{Platform, World};
use crate::player::Player;

/// Sprite used to tile every platform.
pub const PLATFORM_TILE: &str = "platform_tile";

/// Named platforms of the single level, positioned relative to the screen.
struct Layout {
    ground: Platform,
    mid_long: Platform,
    left_high: Platform,
    right_high: Platform,
    top_center: Platform,
}

impl Layout {
    fn new(config: &GameConfig) -> Self {
        let (w, h) = (config.screen.width, config.screen.height);
        Self {
            ground: Platform::new(0, h - 50, w, 40, PLATFORM_TILE),
            mid_long: Platform::new(200, h - 170, 400, 30, PLATFORM_TILE),
            left_high: Platform::new(50, h - 300, 110, 30, PLATFORM_TILE),
            right_high: Platform::new(630, h - 250, 140, 30, PLATFORM_TILE),
            top_center: Platform::new(600, h - 450, 200, 30, PLATFORM_TILE),
        }
    }

    fn platforms(&self) -> Vec<Platform> {
        vec![
            self.ground.clone(),
            self.mid_long.clone(),
            self.left_high.clone(),
            self.right_high.clone(),
            self.top_center.clone(),
        ]
    }

    /// Top-left corners of the six zombies, each standing on a platform.
    fn zombie_spawns(&self, config: &GameConfig) -> [(i32, i32); 6] {
        let (zw, zh) = (config.zombie.width, config.zombie.height);
        let on = |p: &Platform| p.rect.top() - zh;
        [
            (700, on(&self.ground)),
            (300, on(&self.mid_long)),
            (100, on(&self.left_high)),
            (self.right_high.rect.center_x() - zw / 2, on(&self.right_high)),
            (self.top_center.rect.left() + 30, on(&self.top_center)),
            (self.top_center.rect.right() - zw - 30, on(&self.top_center)),
        ]
    }
}

pub fn build_platforms(config: &GameConfig) -> Vec<Platform> {
    Layout::new(config).platforms()
}

pub fn zombie_spawns(config: &GameConfig) -> Vec<(i32, i32)> {
    Layout::new(config).zombie_spawns(config).to_vec()
}

/// Player start: centred on the screen.
pub fn player_spawn(config: &GameConfig) -> (i32, i32) {
    (
        (config.screen.width - config.player.width) / 2,
        (config.screen.height - config.player.height) / 2,
    )
}

/// Fresh playthrough: new player, full zombie roster, no projectiles.
pub fn build_world(config: &GameConfig, now_ms: u64) -> World {
    let layout = Layout::new(config);
    let (px, py) = player_spawn(config);
    let enemies: Vec<Enemy> = layout
        .zombie_spawns(config)
        .iter()
        .map(|&(x, y)| Enemy::new(x, y, config, now_ms))
        .collect();
    info!(zombies = enemies.len(), player_x = px, player_y = py, "level built");

    World {
        player: Player::new(px, py, config, now_ms),
        enemies,
        platforms: layout.platforms(),
        projectiles: Vec::new(),
    }
}
