//! Platform shooter: a small 2D platformer simulation with a terminal front-end.
//!
//! The library holds everything that decides what happens in a frame
//! (physics, zombie AI, combat, game phases) plus the collaborators the
//! binary needs to drive it (configuration, input mapping, sprite loading).

pub mod animation;
pub mod assets;
pub mod compute;
pub mod config;
pub mod enemy;
pub mod entities;
pub mod error;
pub mod game;
pub mod input;
pub mod level;
pub mod physics;
pub mod player;
pub mod projectile;
