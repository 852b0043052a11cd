//! Game phase state machine.
//!
//! ```text
//! Menu ──confirm──▶ Playing ──contact──▶ PlayerDying ──anim done──▶ GameOver
//!   ▲                 │  │                                             │
//!   │◀──────back──────┘  └──all zombies dead──▶ Victory               │
//!   │◀──────────────────────confirm───────────────┴───────────────────┘
//! any phase ──quit──▶ Quit   (Playing also honours back)
//! ```

use std::time::Duration;

use tracing::info;

use crate::animation::Animations;
use crate::compute::{advance_world, all_enemies_defeated, resolve_collisions, CombatOutcome};
use crate::config::GameConfig;
use crate::entities::{GamePhase, World};
use crate::input::{HeldKeys, InputEvent};
use crate::level::build_world;

/// Owns the configuration, the per-type animation sets, the current phase
/// and (once a game has started) the world.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    animations: Animations,
    phase: GamePhase,
    world: Option<World>,
}

impl Game {
    pub fn new(config: GameConfig, animations: Animations) -> Self {
        Self {
            config,
            animations,
            phase: GamePhase::Menu,
            world: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn animations(&self) -> &Animations {
        &self.animations
    }

    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    pub fn world_mut(&mut self) -> Option<&mut World> {
        self.world.as_mut()
    }

    /// Target wall-clock length of one iteration in the current phase.
    pub fn frame_duration(&self) -> Duration {
        let fps = if self.phase.is_simulated() {
            self.config.timing.playing_fps
        } else {
            self.config.timing.idle_fps
        };
        Duration::from_secs_f64(1.0 / f64::from(fps.max(1)))
    }

    /// Run one iteration of the current phase with this frame's input.
    /// Returns the phase active afterwards.
    pub fn step(&mut self, events: &[InputEvent], held: HeldKeys, now_ms: u64) -> GamePhase {
        match self.phase {
            GamePhase::Menu => self.step_menu(events, now_ms),
            GamePhase::Playing => self.step_playing(events, held, now_ms),
            GamePhase::PlayerDying => self.step_dying(events, now_ms),
            GamePhase::GameOver | GamePhase::Victory => self.step_result_screen(events),
            GamePhase::Quit => {}
        }
        self.phase
    }

    fn step_menu(&mut self, events: &[InputEvent], now_ms: u64) {
        for event in events {
            match event {
                InputEvent::Quit => {
                    self.transition(GamePhase::Quit);
                    return;
                }
                InputEvent::Confirm => {
                    self.world = Some(build_world(&self.config, now_ms));
                    self.transition(GamePhase::Playing);
                    return;
                }
                _ => {}
            }
        }
    }

    fn step_playing(&mut self, events: &[InputEvent], held: HeldKeys, now_ms: u64) {
        for &event in events {
            match event {
                InputEvent::Quit => {
                    self.transition(GamePhase::Quit);
                    return;
                }
                InputEvent::Back => {
                    self.transition(GamePhase::Menu);
                    return;
                }
                other => {
                    if let Some(world) = self.world.as_mut() {
                        if let Some(shot) = world.player.handle_input(other, &self.config) {
                            world.projectiles.push(shot);
                        }
                    }
                }
            }
        }

        let Some(world) = self.world.as_mut() else {
            self.transition(GamePhase::Menu);
            return;
        };
        advance_world(world, held, &self.animations, &self.config, now_ms);
        let outcome = resolve_collisions(world, &self.config, now_ms);
        let defeated = all_enemies_defeated(world);

        match outcome {
            CombatOutcome::PlayerKilled => self.transition(GamePhase::PlayerDying),
            CombatOutcome::Continue if defeated => self.transition(GamePhase::Victory),
            CombatOutcome::Continue => {}
        }
    }

    /// Only the player keeps animating; zombies and shots stay frozen.
    fn step_dying(&mut self, events: &[InputEvent], now_ms: u64) {
        if events.contains(&InputEvent::Quit) {
            self.transition(GamePhase::Quit);
            return;
        }

        let Some(world) = self.world.as_mut() else {
            self.transition(GamePhase::GameOver);
            return;
        };
        world.player.update(
            &world.platforms,
            HeldKeys::default(),
            &self.animations.player,
            &self.config,
            now_ms,
        );
        if world.player.death_finished() {
            self.transition(GamePhase::GameOver);
        }
    }

    fn step_result_screen(&mut self, events: &[InputEvent]) {
        for event in events {
            match event {
                InputEvent::Quit => {
                    self.transition(GamePhase::Quit);
                    return;
                }
                InputEvent::Confirm => {
                    self.transition(GamePhase::Menu);
                    return;
                }
                _ => {}
            }
        }
    }

    fn transition(&mut self, next: GamePhase) {
        if next == self.phase {
            return;
        }
        info!(from = ?self.phase, to = ?next, "phase transition");
        self.phase = next;
    }
}
