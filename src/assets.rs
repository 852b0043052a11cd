//! Sprite loading.
//!
//! Sprites are small text files (`<dir>/<name>.txt`) of glyph art where a
//! space is transparent.  Which files make up each animation is declared up
//! front by a [`SpriteManifest`]; nothing probes the disk for "the next
//! frame".  A sprite that cannot be loaded is replaced by a flat-coloured
//! placeholder and the game carries on.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crossterm::style::Color;
use tracing::warn;

use crate::animation::{AnimationSet, Animations, FrameId, Pose};
use crate::config::AssetConfig;
use crate::entities::Facing;
use crate::level::PLATFORM_TILE;

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("sprite not found: {0}")]
    NotFound(String),

    #[error("failed to read sprite {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("sprite {0} has no visible glyphs")]
    Empty(String),
}

// ── Sprites ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum Sprite {
    /// Rows of glyphs, all padded to the same width.
    Glyphs(Vec<Vec<char>>),
    /// Solid block of one colour, used when the art is missing.
    Placeholder(Color),
}

impl Sprite {
    pub fn parse(name: &str, text: &str) -> Result<Self, AssetError> {
        let mut rows: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.trim_end_matches('\r').chars().collect())
            .collect();
        while rows.last().is_some_and(|r| r.iter().all(|c| *c == ' ')) {
            rows.pop();
        }
        if rows.iter().all(|r| r.iter().all(|c| *c == ' ')) {
            return Err(AssetError::Empty(name.to_string()));
        }
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, ' ');
        }
        Ok(Sprite::Glyphs(rows))
    }

    /// Horizontally flipped copy; directional glyphs are swapped too.
    pub fn mirrored(&self) -> Self {
        match self {
            Sprite::Glyphs(rows) => Sprite::Glyphs(
                rows.iter()
                    .map(|row| row.iter().rev().map(|&c| mirror_glyph(c)).collect())
                    .collect(),
            ),
            Sprite::Placeholder(color) => Sprite::Placeholder(*color),
        }
    }

    /// Nearest-neighbour sample for cell `(col, row)` of a `cols` x `rows`
    /// target area.  `None` means transparent.
    pub fn sample(&self, col: usize, row: usize, cols: usize, rows: usize) -> Option<char> {
        match self {
            Sprite::Placeholder(_) => Some('█'),
            Sprite::Glyphs(glyphs) => {
                let src_rows = glyphs.len();
                let src_cols = glyphs.first().map_or(0, Vec::len);
                if src_rows == 0 || src_cols == 0 || cols == 0 || rows == 0 {
                    return None;
                }
                let r = row * src_rows / rows;
                let c = col * src_cols / cols;
                glyphs
                    .get(r)
                    .and_then(|line| line.get(c))
                    .copied()
                    .filter(|&ch| ch != ' ')
            }
        }
    }
}

fn mirror_glyph(c: char) -> char {
    match c {
        '/' => '\\',
        '\\' => '/',
        '(' => ')',
        ')' => '(',
        '<' => '>',
        '>' => '<',
        '[' => ']',
        ']' => '[',
        '{' => '}',
        '}' => '{',
        other => other,
    }
}

// ── Sources ───────────────────────────────────────────────────────────────────

/// Resolves a logical sprite name to sprite data.
pub trait SpriteSource {
    fn load(&self, name: &str) -> Result<Sprite, AssetError>;
}

/// Reads `<root>/<name>.txt`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl SpriteSource for DirectorySource {
    fn load(&self, name: &str) -> Result<Sprite, AssetError> {
        let path = self.root.join(format!("{name}.txt"));
        let text = std::fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => AssetError::NotFound(name.to_string()),
            _ => AssetError::Io {
                name: name.to_string(),
                source,
            },
        })?;
        Sprite::parse(name, &text)
    }
}

/// Load `name`, or log and fall back to a placeholder of `color`.
pub fn load_or_placeholder(source: &dyn SpriteSource, name: &str, color: Color) -> Sprite {
    match source.load(name) {
        Ok(sprite) => sprite,
        Err(err) => {
            warn!(sprite = name, %err, "sprite unavailable, using placeholder");
            Sprite::Placeholder(color)
        }
    }
}

// ── Manifest & sheets ─────────────────────────────────────────────────────────

/// Every sprite name that makes up one entity type's animations.
#[derive(Clone, Debug, PartialEq)]
pub struct SpriteManifest {
    pub idle: String,
    pub run: Vec<String>,
    pub death: Vec<String>,
    /// Placeholder colour for this entity type.
    pub fallback: Color,
}

fn numbered(prefix: &str, count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("{prefix}{i}")).collect()
}

impl SpriteManifest {
    pub fn player(config: &AssetConfig) -> Self {
        Self {
            idle: "john_stopped".to_string(),
            run: numbered("john_run", config.player_run_frames),
            death: numbered("john_defeated", config.player_death_frames),
            fallback: Color::Blue,
        }
    }

    pub fn zombie(config: &AssetConfig) -> Self {
        Self {
            idle: "zombie_idle".to_string(),
            run: numbered("zombie_walk", config.zombie_walk_frames),
            death: Vec::new(),
            fallback: Color::Red,
        }
    }
}

/// Loaded frames of one entity type, pre-mirrored for left facing.
#[derive(Clone, Debug)]
pub struct SpriteSheet {
    idle_right: Sprite,
    idle_left: Sprite,
    run_right: Vec<Sprite>,
    run_left: Vec<Sprite>,
    death: Vec<Sprite>,
}

impl SpriteSheet {
    /// Empty run or death lists fall back to the idle frame so every pose
    /// has at least one frame.
    pub fn load(manifest: &SpriteManifest, source: &dyn SpriteSource) -> Self {
        let idle_right = load_or_placeholder(source, &manifest.idle, manifest.fallback);
        let idle_left = idle_right.mirrored();

        let mut run_right: Vec<Sprite> = manifest
            .run
            .iter()
            .map(|name| load_or_placeholder(source, name, manifest.fallback))
            .collect();
        if run_right.is_empty() {
            run_right.push(idle_right.clone());
        }
        let run_left = run_right.iter().map(Sprite::mirrored).collect();

        let mut death: Vec<Sprite> = manifest
            .death
            .iter()
            .map(|name| load_or_placeholder(source, name, manifest.fallback))
            .collect();
        if death.is_empty() {
            death.push(idle_right.clone());
        }

        Self {
            idle_right,
            idle_left,
            run_right,
            run_left,
            death,
        }
    }

    pub fn animation_set(&self) -> AnimationSet {
        AnimationSet::new(self.run_right.len(), self.death.len())
    }

    pub fn sprite(&self, frame: FrameId) -> &Sprite {
        let left = frame.facing == Facing::Left;
        match frame.pose {
            Pose::Idle if left => &self.idle_left,
            Pose::Idle => &self.idle_right,
            Pose::Run => {
                let frames = if left { &self.run_left } else { &self.run_right };
                &frames[frame.index % frames.len()]
            }
            Pose::Death => &self.death[frame.index.min(self.death.len() - 1)],
        }
    }
}

/// Tiled behind the play field when present.
pub const BACKGROUND_TILE: &str = "platform_background";

/// All art the game draws.
#[derive(Clone, Debug)]
pub struct SpriteAtlas {
    pub player: SpriteSheet,
    pub zombie: SpriteSheet,
    pub platform_tile: Sprite,
    /// `None` leaves the play field blank.
    pub background: Option<Sprite>,
}

impl SpriteAtlas {
    pub fn load(config: &AssetConfig, source: &dyn SpriteSource) -> Self {
        let background = match source.load(BACKGROUND_TILE) {
            Ok(sprite) => Some(sprite),
            Err(err) => {
                warn!(sprite = BACKGROUND_TILE, %err, "background unavailable, leaving it blank");
                None
            }
        };
        Self {
            player: SpriteSheet::load(&SpriteManifest::player(config), source),
            zombie: SpriteSheet::load(&SpriteManifest::zombie(config), source),
            platform_tile: load_or_placeholder(source, PLATFORM_TILE, Color::Green),
            background,
        }
    }

    pub fn animations(&self) -> Animations {
        Animations {
            player: self.player.animation_set(),
            zombie: self.zombie.animation_set(),
        }
    }
}
