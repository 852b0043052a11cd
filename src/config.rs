//! Gameplay tuning and runtime configuration.
//!
//! Every constant the simulation uses lives in [`GameConfig`], which is
//! built once at startup and passed by reference to constructors and
//! updates.  Defaults reproduce the stock game; a TOML file named by
//! `PLATFORM_SHOOTER_CONFIG` may override any subset of fields.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Environment variable naming an optional TOML override file.
pub const CONFIG_ENV: &str = "PLATFORM_SHOOTER_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen: ScreenConfig,
    pub physics: PhysicsConfig,
    pub player: PlayerTuning,
    pub projectile: ProjectileTuning,
    pub zombie: ZombieTuning,
    pub timing: TimingConfig,
    pub assets: AssetConfig,
}

/// Logical play-field size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration added to vertical velocity every tick.
    pub gravity: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self { gravity: 0.8 }
    }
}

/// Gameplay tuning for the player character.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Horizontal pixels per tick while a direction is held.
    pub speed: f32,

    /// Vertical velocity set by a jump (negative is up).
    pub jump_impulse: f32,

    pub width: i32,
    pub height: i32,

    /// Milliseconds between run-cycle frames.
    pub run_frame_ms: u64,

    /// Milliseconds between death-animation frames.
    pub death_frame_ms: u64,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: 5.0,
            jump_impulse: -15.0,
            width: 40,
            height: 45,
            run_frame_ms: 90,
            death_frame_ms: 150,
        }
    }
}

/// Gameplay tuning for projectiles.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProjectileTuning {
    /// Horizontal pixels per tick; the sign comes from the shooter's facing.
    pub speed: f32,
    pub width: i32,
    pub height: i32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            speed: 10.0,
            width: 10,
            height: 5,
        }
    }
}

/// Gameplay tuning for zombies.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ZombieTuning {
    /// Horizontal pixels per tick while chasing.
    pub speed: f32,
    pub width: i32,
    pub height: i32,
    pub health: u32,

    /// Milliseconds between walk-cycle frames.
    pub walk_frame_ms: u64,

    /// Minimum displacement for a zombie to count as moving this tick.
    pub moving_epsilon: f32,
}

impl Default for ZombieTuning {
    fn default() -> Self {
        Self {
            speed: 1.0,
            width: 35,
            height: 45,
            health: 4,
            walk_frame_ms: 150,
            moving_epsilon: 0.1,
        }
    }
}

/// Frame pacing per phase group.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Ticks per second while the world is simulated.
    pub playing_fps: u32,

    /// Ticks per second on text-only screens.
    pub idle_fps: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            playing_fps: 60,
            idle_fps: 15,
        }
    }
}

/// Sprite manifest: where sprites live and how many frames each
/// animation declares.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub dir: PathBuf,
    pub player_run_frames: usize,
    pub player_death_frames: usize,
    pub zombie_walk_frames: usize,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("assets"),
            player_run_frames: 4,
            player_death_frames: 3,
            zombie_walk_frames: 2,
        }
    }
}

impl GameConfig {
    /// Defaults, overridden by the file named in `PLATFORM_SHOOTER_CONFIG`
    /// when that variable is set.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let sizes = [
            ("screen", self.screen.width, self.screen.height),
            ("player", self.player.width, self.player.height),
            ("projectile", self.projectile.width, self.projectile.height),
            ("zombie", self.zombie.width, self.zombie.height),
        ];
        for (what, w, h) in sizes {
            if w <= 0 || h <= 0 {
                return Err(ConfigError::Invalid(format!(
                    "{what} size must be positive, got {w}x{h}"
                )));
            }
        }
        let finite = [
            ("physics.gravity", self.physics.gravity),
            ("player.jump_impulse", self.player.jump_impulse),
        ];
        for (what, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("{what} must be finite, got {value}")));
            }
        }
        let positive = [
            ("player.speed", self.player.speed),
            ("projectile.speed", self.projectile.speed),
            ("zombie.speed", self.zombie.speed),
            ("zombie.moving_epsilon", self.zombie.moving_epsilon),
        ];
        for (what, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!("{what} must be positive, got {value}")));
            }
        }
        if self.player.width > self.screen.width {
            return Err(ConfigError::Invalid(
                "player is wider than the screen".to_string(),
            ));
        }
        if self.zombie.health == 0 {
            return Err(ConfigError::Invalid(
                "zombie health must be at least 1".to_string(),
            ));
        }
        if self.timing.playing_fps == 0 || self.timing.idle_fps == 0 {
            return Err(ConfigError::Invalid(
                "frame rates must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
