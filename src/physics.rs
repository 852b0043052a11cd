//! Gravity and platform collision shared by the player and the zombies.

use crate::entities::{round_px, Platform, Rect, Vec2};

/// A falling, platform-colliding body.  `pos` is authoritative; `rect` is
/// its rounded projection onto the pixel grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel_y: f32,
    pub rect: Rect,
}

impl Body {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: Vec2::new(x as f32, y as f32),
            vel_y: 0.0,
            rect: Rect::new(x, y, w, h),
        }
    }

    pub fn sync_rect(&mut self) {
        self.rect.x = round_px(self.pos.x);
        self.rect.y = round_px(self.pos.y);
    }

    /// Apply one tick of gravity and resolve overlaps against `platforms`.
    ///
    /// Platforms are visited in list order and every overlapping one is
    /// resolved in turn, so a later platform can overwrite an earlier
    /// resolution.  Returns `true` when the body landed on a platform.
    pub fn integrate(&mut self, gravity: f32, platforms: &[Platform]) -> bool {
        self.rect.x = round_px(self.pos.x);

        self.vel_y += gravity;
        self.pos.y += self.vel_y;
        self.rect.y = round_px(self.pos.y);

        let mut grounded = false;
        for platform in platforms {
            if !self.rect.intersects(&platform.rect) {
                continue;
            }
            if self.vel_y > 0.0 {
                self.rect.set_bottom(platform.rect.top());
                self.vel_y = 0.0;
                grounded = true;
            } else if self.vel_y < 0.0 {
                self.rect.set_top(platform.rect.bottom());
                self.vel_y = 0.0;
            }
            self.pos.y = self.rect.y as f32;
        }
        grounded
    }
}
