/*
 * Game Parameters Module
 *
 * This module defines the GameParams struct that holds every tunable
 * constant of the game: window, physics, bird, pipes, assets and debug
 * switches. Parameters are layered from built-in defaults, an optional
 * `spalla-bird.toml` file and `SPALLA_` environment variables, then
 * validated before the game starts.
 */

use config::{Config, Environment, File, Source};
use serde::{Deserialize, Serialize};

use crate::error::GameError;

// Configuration file looked up in the working directory (extension optional)
pub const CONFIG_FILE: &str = "spalla-bird";

// Environment variable prefix, e.g. SPALLA_PHYSICS__GRAVITY=0.2
pub const ENV_PREFIX: &str = "SPALLA";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowParams {
    pub title: String,
    // Window pixels per game unit
    pub scale: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsParams {
    // Added to the bird's fall speed every frame
    pub gravity: f32,
    // Upward speed set by a flap
    pub thrust: f32,
    // Horizontal speed of the pipes, the bird's forward reference speed
    pub scroll_speed: f32,
    pub fps: u32,
    pub max_steps_per_frame: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirdParams {
    pub start_x: f32,
    pub start_y: f32,
    pub hitbox_inset: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipeParams {
    pub top_min_y: i32,
    pub top_max_y: i32,
    pub bottom_min_y: i32,
    pub bottom_max_y: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetParams {
    pub dir: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugParams {
    pub show_hitboxes: bool,
    pub show_panel: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameParams {
    pub window: WindowParams,
    pub physics: PhysicsParams,
    pub bird: BirdParams,
    pub pipes: PipeParams,
    pub assets: AssetParams,
    pub debug: DebugParams,
}

impl Default for GameParams {
    fn default() -> Self {
        Self {
            window: WindowParams {
                title: "Spalla Bird".to_string(),
                scale: 1.0,
            },
            physics: PhysicsParams {
                gravity: 0.1,
                thrust: 3.0,
                scroll_speed: 4.0,
                fps: 60,
                max_steps_per_frame: 5,
            },
            bird: BirdParams {
                start_x: 20.0,
                start_y: 130.0,
                hitbox_inset: 5.0,
            },
            pipes: PipeParams {
                top_min_y: -140,
                top_max_y: -40,
                bottom_min_y: 300,
                bottom_max_y: 350,
            },
            assets: AssetParams {
                dir: "assets".to_string(),
            },
            debug: DebugParams {
                show_hitboxes: false,
                show_panel: false,
            },
        }
    }
}

impl GameParams {
    // Optional config file and environment on top of the built-in defaults
    pub fn load() -> Result<Self, GameError> {
        Self::layered(File::with_name(CONFIG_FILE).required(false), environment())
    }

    fn layered<S>(file: S, env: Environment) -> Result<Self, GameError>
    where
        S: Source + Send + Sync + 'static,
    {
        let params: GameParams = Config::builder()
            .add_source(Config::try_from(&GameParams::default())?)
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()?;

        params.validate()?;
        Ok(params)
    }

    // Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), GameError> {
        let physics = &self.physics;
        if !physics.gravity.is_finite() {
            return Err(invalid("physics.gravity", "must be a finite number"));
        }
        if !physics.thrust.is_finite() {
            return Err(invalid("physics.thrust", "must be a finite number"));
        }
        if !(physics.scroll_speed.is_finite() && physics.scroll_speed > 0.0) {
            return Err(invalid("physics.scroll_speed", "must be greater than zero"));
        }
        if physics.fps == 0 {
            return Err(invalid("physics.fps", "must be greater than zero"));
        }
        if physics.max_steps_per_frame == 0 {
            return Err(invalid("physics.max_steps_per_frame", "must be at least one"));
        }
        if !(self.bird.hitbox_inset.is_finite() && self.bird.hitbox_inset >= 0.0) {
            return Err(invalid("bird.hitbox_inset", "must not be negative"));
        }
        if !(self.bird.start_x.is_finite() && self.bird.start_y.is_finite()) {
            return Err(invalid("bird.start_x/start_y", "must be finite numbers"));
        }
        if self.pipes.top_min_y > self.pipes.top_max_y {
            return Err(invalid("pipes.top_min_y", "must not exceed pipes.top_max_y"));
        }
        if self.pipes.bottom_min_y > self.pipes.bottom_max_y {
            return Err(invalid("pipes.bottom_min_y", "must not exceed pipes.bottom_max_y"));
        }
        if !(self.window.scale.is_finite() && self.window.scale > 0.0) {
            return Err(invalid("window.scale", "must be greater than zero"));
        }
        Ok(())
    }
}

// SPALLA_<SECTION>__<KEY>, values parsed as numbers or booleans where possible
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn invalid(name: &'static str, reason: &str) -> GameError {
    GameError::InvalidParam {
        name,
        reason: reason.to_string(),
    }
}
