//! Zombies: chase the player along their platform, keep out of each other's
//! way, take four hits to kill.

use tracing::debug;

use crate::animation::{AnimationClock, AnimationSet, FrameId, Pose};
use crate::config::GameConfig;
use crate::entities::{round_px, Facing, Platform, Rect};
use crate::physics::Body;

#[derive(Clone, Debug)]
pub struct Enemy {
    pub body: Body,
    pub health: u32,
    pub alive: bool,
    pub facing: Facing,
    /// Whether the zombie actually moved this tick; gates the walk cycle.
    pub is_moving: bool,
    pub anim: AnimationClock,
}

impl Enemy {
    pub fn new(x: i32, y: i32, config: &GameConfig, now_ms: u64) -> Self {
        let tuning = &config.zombie;
        Self {
            body: Body::new(x, y, tuning.width, tuning.height),
            health: tuning.health,
            alive: true,
            facing: Facing::Left,
            is_moving: false,
            anim: AnimationClock::new(now_ms),
        }
    }

    pub fn rect(&self) -> Rect {
        self.body.rect
    }

    /// Health never goes below zero and a dead zombie never revives.
    pub fn take_damage(&mut self, amount: u32) {
        if !self.alive {
            return;
        }
        self.health = self.health.saturating_sub(amount);
        if self.health == 0 {
            self.alive = false;
            debug!(x = self.body.rect.x, y = self.body.rect.y, "zombie destroyed");
        }
    }

    /// Step toward the player's centre, stopping flush against the first
    /// living peer in the way.  `peers` must not contain `self`.
    pub fn move_horizontal<'a>(
        &mut self,
        player: Rect,
        peers: impl IntoIterator<Item = &'a Enemy>,
        config: &GameConfig,
    ) {
        let step = config.zombie.speed;
        let dist = (player.center_x() - self.body.rect.center_x()) as f32;

        // close enough: standing still avoids jittering across the target
        if dist.abs() <= step {
            self.is_moving = false;
            return;
        }

        let dx = if dist < 0.0 {
            self.facing = Facing::Left;
            -step
        } else {
            self.facing = Facing::Right;
            step
        };

        let start_x = self.body.pos.x;
        self.body.pos.x += dx;
        self.body.rect.x = round_px(self.body.pos.x);

        for peer in peers {
            if !peer.alive || !self.body.rect.intersects(&peer.body.rect) {
                continue;
            }
            if dx > 0.0 {
                self.body.rect.set_right(peer.body.rect.left());
            } else {
                self.body.rect.set_left(peer.body.rect.right());
            }
            self.body.pos.x = self.body.rect.x as f32;
            break;
        }

        self.is_moving = (self.body.pos.x - start_x).abs() > config.zombie.moving_epsilon;
    }

    pub fn update<'a>(
        &mut self,
        player: Rect,
        platforms: &[Platform],
        peers: impl IntoIterator<Item = &'a Enemy>,
        anims: &AnimationSet,
        config: &GameConfig,
        now_ms: u64,
    ) {
        if !self.alive {
            return;
        }
        self.move_horizontal(player, peers, config);
        self.body.integrate(config.physics.gravity, platforms);
        if self.is_moving {
            self.anim
                .advance_looping(now_ms, config.zombie.walk_frame_ms, anims.frame_count(Pose::Run));
        }
        self.body.sync_rect();
    }

    pub fn frame(&self) -> FrameId {
        let (pose, index) = if self.is_moving {
            (Pose::Run, self.anim.frame)
        } else {
            (Pose::Idle, 0)
        };
        FrameId {
            pose,
            index,
            facing: self.facing,
        }
    }
}
