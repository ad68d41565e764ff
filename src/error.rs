/*
 * Error Module
 *
 * Startup failures. Nothing in the simulation itself can fail: a collision
 * is ordinary game state, not an error.
 */

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("failed to read configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParam { name: &'static str, reason: String },

    #[error("failed to load asset {}: {source}", .path.display())]
    Asset {
        path: PathBuf,
        #[source]
        source: nannou::image::ImageError,
    },

    #[error("failed to create window: {0}")]
    Window(String),
}
