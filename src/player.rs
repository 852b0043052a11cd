//! The player character: input, movement, lifecycle and animation.

use tracing::debug;

use crate::animation::{AnimationClock, AnimationSet, FrameId, Pose};
use crate::config::GameConfig;
use crate::entities::{Facing, Platform, Rect};
use crate::input::{HeldKeys, InputEvent};
use crate::physics::Body;
use crate::projectile::Projectile;

/// Upward pop on death, as a fraction of the jump impulse.
const DEATH_POP: f32 = 0.5;

/// One-way lifecycle: `Alive` → `Dying { finished: false }` →
/// `Dying { finished: true }`.  Only a new game brings the player back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Alive,
    Dying { finished: bool },
}

#[derive(Clone, Debug)]
pub struct Player {
    pub body: Body,
    pub grounded: bool,
    pub facing: Facing,
    pub is_moving: bool,
    pub life: Lifecycle,
    pub anim: AnimationClock,
}

impl Player {
    pub fn new(x: i32, y: i32, config: &GameConfig, now_ms: u64) -> Self {
        Self {
            body: Body::new(x, y, config.player.width, config.player.height),
            grounded: false,
            facing: Facing::Right,
            is_moving: false,
            life: Lifecycle::Alive,
            anim: AnimationClock::new(now_ms),
        }
    }

    pub fn rect(&self) -> Rect {
        self.body.rect
    }

    pub fn is_alive(&self) -> bool {
        self.life == Lifecycle::Alive
    }

    pub fn death_finished(&self) -> bool {
        self.life == Lifecycle::Dying { finished: true }
    }

    /// React to a discrete input.  Returns the projectile fired, if any.
    pub fn handle_input(&mut self, event: InputEvent, config: &GameConfig) -> Option<Projectile> {
        if !self.is_alive() {
            return None;
        }
        match event {
            InputEvent::Jump => {
                self.jump(config);
                None
            }
            InputEvent::Shoot => Some(self.shoot(config)),
            InputEvent::Confirm | InputEvent::Back | InputEvent::Quit => None,
        }
    }

    /// Only takes effect while standing on a platform.
    pub fn jump(&mut self, config: &GameConfig) {
        if self.grounded {
            self.body.vel_y = config.player.jump_impulse;
            self.grounded = false;
        }
    }

    pub fn shoot(&self, config: &GameConfig) -> Projectile {
        let rect = self.body.rect;
        debug!(x = rect.center_x(), y = rect.center_y(), facing = ?self.facing, "shot fired");
        Projectile::new(rect.center_x(), rect.center_y(), self.facing, &config.projectile)
    }

    /// Left wins when both directions are held.
    pub fn move_horizontal(&mut self, held: HeldKeys, config: &GameConfig) {
        self.is_moving = false;
        if held.left {
            self.body.pos.x -= config.player.speed;
            self.facing = Facing::Left;
            self.is_moving = true;
        } else if held.right {
            self.body.pos.x += config.player.speed;
            self.facing = Facing::Right;
            self.is_moving = true;
        }
    }

    pub fn update(
        &mut self,
        platforms: &[Platform],
        held: HeldKeys,
        anims: &AnimationSet,
        config: &GameConfig,
        now_ms: u64,
    ) {
        match self.life {
            Lifecycle::Alive => {
                self.move_horizontal(held, config);
                self.grounded = self.body.integrate(config.physics.gravity, platforms);
                self.clamp_to_screen(config);
                self.advance_run_animation(anims, config, now_ms);
            }
            Lifecycle::Dying { finished } => {
                // no screen clamp here: the death pop may carry the body off-screen
                self.grounded = self.body.integrate(config.physics.gravity, platforms);
                if !finished {
                    self.advance_death_animation(anims, config, now_ms);
                }
            }
        }
        self.body.sync_rect();
    }

    /// Start dying.  Ignored unless currently alive.
    pub fn die(&mut self, config: &GameConfig, now_ms: u64) {
        if self.life != Lifecycle::Alive {
            return;
        }
        self.life = Lifecycle::Dying { finished: false };
        self.anim.reset(now_ms);
        self.body.vel_y = config.player.jump_impulse * DEATH_POP;
        debug!(x = self.body.rect.x, y = self.body.rect.y, "player died");
    }

    pub fn frame(&self, anims: &AnimationSet) -> FrameId {
        let (pose, index) = match self.life {
            Lifecycle::Alive if self.is_moving => (Pose::Run, self.anim.frame),
            Lifecycle::Alive => (Pose::Idle, 0),
            Lifecycle::Dying { .. } => {
                let last = anims.frame_count(Pose::Death) - 1;
                (Pose::Death, self.anim.frame.min(last))
            }
        };
        FrameId {
            pose,
            index,
            facing: self.facing,
        }
    }

    fn clamp_to_screen(&mut self, config: &GameConfig) {
        let max_x = (config.screen.width - config.player.width) as f32;
        self.body.pos.x = self.body.pos.x.clamp(0.0, max_x);
    }

    fn advance_run_animation(&mut self, anims: &AnimationSet, config: &GameConfig, now_ms: u64) {
        if !self.is_moving {
            self.anim.frame = 0;
            return;
        }
        self.anim
            .advance_looping(now_ms, config.player.run_frame_ms, anims.frame_count(Pose::Run));
    }

    fn advance_death_animation(&mut self, anims: &AnimationSet, config: &GameConfig, now_ms: u64) {
        if !self.anim.due(now_ms, config.player.death_frame_ms) {
            return;
        }
        let count = anims.frame_count(Pose::Death);
        self.anim.frame += 1;
        if self.anim.frame >= count {
            self.anim.frame = count - 1;
            self.life = Lifecycle::Dying { finished: true };
            debug!("death animation finished");
        }
    }
}
