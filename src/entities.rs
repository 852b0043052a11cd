//! Shared game types: geometry, platforms, phases and the world container.

use crate::enemy::Enemy;
use crate::player::Player;
use crate::projectile::Projectile;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Authoritative float position of a moving entity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Integer rectangle in screen pixels, y pointing down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size whose centre lands on `(cx, cy)`.
    pub const fn from_center(cx: i32, cy: i32, w: i32, h: i32) -> Self {
        Self::new(cx - w / 2, cy - h / 2, w, h)
    }

    pub const fn left(&self) -> i32 {
        self.x
    }

    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    pub const fn top(&self) -> i32 {
        self.y
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub const fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    pub const fn center_y(&self) -> i32 {
        self.y + self.h / 2
    }

    pub fn set_left(&mut self, left: i32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.w;
    }

    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.h;
    }

    /// Strict overlap test: rectangles that only share an edge do not
    /// intersect, and empty rectangles never intersect anything.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.w > 0
            && self.h > 0
            && other.w > 0
            && other.h > 0
            && self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Snap a float coordinate to the pixel grid (ties go to the even pixel).
pub fn round_px(value: f32) -> i32 {
    value.round_ties_even() as i32
}

/// Horizontal facing of a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// -1.0 for left, +1.0 for right.
    pub const fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

// ── Level geometry ────────────────────────────────────────────────────────────

/// Static, immutable ground piece.
#[derive(Clone, Debug, PartialEq)]
pub struct Platform {
    pub rect: Rect,
    /// Sprite name used to tile the platform surface.
    pub tile: &'static str,
}

impl Platform {
    pub const fn new(x: i32, y: i32, w: i32, h: i32, tile: &'static str) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            tile,
        }
    }
}

// ── Phases ────────────────────────────────────────────────────────────────────

/// Top-level screen/mode of the game. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Menu,
    Playing,
    PlayerDying,
    GameOver,
    Victory,
    Quit,
}

impl GamePhase {
    /// Phases that integrate physics every frame run at the fast tick rate.
    pub const fn is_simulated(self) -> bool {
        matches!(self, GamePhase::Playing | GamePhase::PlayerDying)
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Everything that exists during one playthrough.  Rebuilt from scratch
/// every time the game leaves the menu.
#[derive(Clone, Debug)]
pub struct World {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub platforms: Vec<Platform>,
    pub projectiles: Vec<Projectile>,
}

impl World {
    pub fn living_enemies(&self) -> usize {
        self.enemies.iter().filter(|e| e.alive).count()
    }
}
