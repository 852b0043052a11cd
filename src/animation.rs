//! Animation timing.
//!
//! Frame counts live in an [`AnimationSet`] built once per entity type from
//! the sprite manifest.  Entities only carry an [`AnimationClock`] (current
//! index + time of the last advance) and borrow the set when they update.

use crate::entities::Facing;

/// Sprite category an entity is currently showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pose {
    Idle,
    /// Running for the player, walking for zombies.
    Run,
    Death,
}

/// What the renderer should draw for an entity this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameId {
    pub pose: Pose,
    pub index: usize,
    pub facing: Facing,
}

/// Number of frames available per pose.  Never zero: an empty category is
/// backed by the single idle frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationSet {
    run: usize,
    death: usize,
}

impl AnimationSet {
    pub fn new(run: usize, death: usize) -> Self {
        Self {
            run: run.max(1),
            death: death.max(1),
        }
    }

    pub fn frame_count(&self, pose: Pose) -> usize {
        match pose {
            Pose::Idle => 1,
            Pose::Run => self.run,
            Pose::Death => self.death,
        }
    }
}

impl Default for AnimationSet {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Animation sets for every animated entity type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Animations {
    pub player: AnimationSet,
    pub zombie: AnimationSet,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationClock {
    pub frame: usize,
    last_advance_ms: u64,
}

impl AnimationClock {
    pub fn new(now_ms: u64) -> Self {
        Self {
            frame: 0,
            last_advance_ms: now_ms,
        }
    }

    pub fn reset(&mut self, now_ms: u64) {
        self.frame = 0;
        self.last_advance_ms = now_ms;
    }

    /// `true` once strictly more than `interval_ms` has passed since the last
    /// advance; the interval restarts at `now_ms` in that case.
    pub fn due(&mut self, now_ms: u64, interval_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_advance_ms) > interval_ms {
            self.last_advance_ms = now_ms;
            true
        } else {
            false
        }
    }

    /// Step a looping animation of `frame_count` frames when due.
    pub fn advance_looping(&mut self, now_ms: u64, interval_ms: u64, frame_count: usize) {
        if self.due(now_ms, interval_ms) {
            self.frame = (self.frame + 1) % frame_count.max(1);
        }
    }
}
