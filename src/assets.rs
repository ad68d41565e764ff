/*
 * Assets Module
 *
 * Loads every sprite once at startup and uploads it to the GPU. The top
 * pipe reuses the pipe image flipped vertically. Entity sizes are taken
 * from the image dimensions, so swapping the art resizes the hitboxes too.
 */

use std::path::{Path, PathBuf};

use nannou::image::{self, DynamicImage, GenericImageView};
use nannou::prelude::*;
use nannou::wgpu;
use tracing::info;

use crate::error::GameError;
use crate::world::{SpriteId, SpriteSizes};

pub const BACKGROUND_FILE: &str = "background-day.png";
pub const BIRD_FILE: &str = "bird.png";
pub const PIPE_FILE: &str = "pipe.png";
pub const BASE_FILE: &str = "base.png";
pub const GAME_OVER_FILE: &str = "gameover.png";

pub struct Sprite {
    pub texture: wgpu::Texture,
    pub size: [f32; 2],
}

impl Sprite {
    fn upload(app: &App, image: &DynamicImage) -> Self {
        let (w, h) = image.dimensions();
        Self {
            texture: wgpu::Texture::from_image(app, image),
            size: [w as f32, h as f32],
        }
    }
}

pub struct Assets {
    pub background: Sprite,
    pub bird: Sprite,
    pub pipe_top: Sprite,
    pub pipe_bottom: Sprite,
    pub base: Sprite,
    pub game_over: Sprite,
}

impl Assets {
    pub fn load(app: &App, dir: &Path) -> Result<Self, GameError> {
        info!(dir = %dir.display(), "loading sprites");

        let pipe = load_image(dir, PIPE_FILE)?;
        let assets = Self {
            background: Sprite::upload(app, &load_image(dir, BACKGROUND_FILE)?),
            bird: Sprite::upload(app, &load_image(dir, BIRD_FILE)?),
            pipe_top: Sprite::upload(app, &pipe.flipv()),
            pipe_bottom: Sprite::upload(app, &pipe),
            base: Sprite::upload(app, &load_image(dir, BASE_FILE)?),
            game_over: Sprite::upload(app, &load_image(dir, GAME_OVER_FILE)?),
        };

        Ok(assets)
    }

    pub fn sizes(&self) -> SpriteSizes {
        SpriteSizes {
            bird: self.bird.size,
            pipe: self.pipe_bottom.size,
            base: self.base.size,
        }
    }

    pub fn sprite(&self, id: SpriteId) -> &Sprite {
        match id {
            SpriteId::PipeBottom => &self.pipe_bottom,
            SpriteId::PipeTop => &self.pipe_top,
            SpriteId::Base => &self.base,
            SpriteId::Bird => &self.bird,
        }
    }
}

pub fn load_image(dir: &Path, file: &str) -> Result<DynamicImage, GameError> {
    let path: PathBuf = dir.join(file);
    image::open(&path).map_err(|source| GameError::Asset { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sprite_reports_its_path() {
        let dir = Path::new("no-such-asset-dir");
        match load_image(dir, BIRD_FILE) {
            Err(GameError::Asset { path, .. }) => {
                assert_eq!(path, dir.join(BIRD_FILE));
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("loaded a sprite that does not exist"),
        }
    }
}
