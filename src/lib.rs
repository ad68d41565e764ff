/*
 * Spalla Bird - Module Definitions
 *
 * This file defines the module structure for the game. The simulation core
 * (entity, bird, pipe, world, physics, clock) has no dependency on a window
 * or GPU; the remaining modules wire it into a nannou application.
 */

// Re-export key components for easier access
pub use app::Model;
pub use bird::Bird;
pub use entity::{Body, Entity, Hitbox};
pub use error::GameError;
pub use params::GameParams;
pub use physics::{Obstacle, StepOutcome};
pub use pipe::{Pipe, PipeKind};
pub use world::{SpriteId, SpriteSizes, World};

// Define modules
pub mod app;
pub mod assets;
pub mod bird;
pub mod camera;
pub mod clock;
pub mod debug;
pub mod entity;
pub mod error;
pub mod input;
pub mod params;
pub mod physics;
pub mod pipe;
pub mod renderer;
pub mod ui;
pub mod world;

// Playfield size in game units
pub const SCREEN_W: f32 = 288.0;
pub const SCREEN_H: f32 = 512.0;
