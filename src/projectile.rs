//! Straight-line horizontal shots.

use crate::config::ProjectileTuning;
use crate::entities::{round_px, Facing, Rect};

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    /// Authoritative left edge.
    pub x: f32,
    pub rect: Rect,
    /// Signed pixels per tick.
    pub vel_x: f32,
}

impl Projectile {
    /// Spawn a shot centred on `(cx, cy)` travelling toward `facing`.
    pub fn new(cx: i32, cy: i32, facing: Facing, tuning: &ProjectileTuning) -> Self {
        let rect = Rect::from_center(cx, cy, tuning.width, tuning.height);
        Self {
            x: rect.x as f32,
            rect,
            vel_x: tuning.speed * facing.sign(),
        }
    }

    pub fn update(&mut self) {
        self.x += self.vel_x;
        self.rect.x = round_px(self.x);
    }

    /// Entirely past the left or right edge of a screen `screen_width` wide.
    pub fn is_offscreen(&self, screen_width: i32) -> bool {
        self.rect.right() < 0 || self.rect.left() > screen_width
    }
}
