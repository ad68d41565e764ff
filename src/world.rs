/*
 * World Module
 *
 * This module defines the World struct, the complete simulation state of
 * one running game: the bird, the top and bottom pipes, the static ground,
 * the random source used to recycle pipes and per-round bookkeeping.
 *
 * The world is created once at startup and owned by the application model
 * for the lifetime of the process.
 */

use rand::rngs::StdRng;
use tracing::info;

use crate::bird::Bird;
use crate::entity::Entity;
use crate::params::GameParams;
use crate::pipe::{Pipe, PipeKind};
use crate::{SCREEN_H, SCREEN_W};

// Sprite dimensions the entities take their sizes from
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteSizes {
    pub bird: [f32; 2],
    pub pipe: [f32; 2],
    pub base: [f32; 2],
}

// Which texture an entity is drawn with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteId {
    PipeBottom,
    PipeTop,
    Base,
    Bird,
}

pub struct World {
    pub bird: Bird,
    pub pipe_top: Pipe,
    pub pipe_bottom: Pipe,
    pub base: Entity,
    pub round: u32,
    pub frames_survived: u64,
    pub(crate) rng: StdRng,
}

impl World {
    pub fn new(params: &GameParams, sizes: SpriteSizes, mut rng: StdRng) -> Self {
        let speed = params.physics.scroll_speed;
        let pipes = &params.pipes;

        let pipe_top = Pipe::new(
            PipeKind::Top,
            sizes.pipe,
            (pipes.top_min_y, pipes.top_max_y),
            speed,
            SCREEN_W,
            &mut rng,
        );
        let pipe_bottom = Pipe::new(
            PipeKind::Bottom,
            sizes.pipe,
            (pipes.bottom_min_y, pipes.bottom_max_y),
            speed,
            SCREEN_W,
            &mut rng,
        );
        let base = Entity::new(0.0, SCREEN_H - sizes.base[1], sizes.base, 0.0);

        Self {
            bird: Bird::new(sizes.bird, &params.bird, &params.physics),
            pipe_top,
            pipe_bottom,
            base,
            round: 1,
            frames_survived: 0,
            rng,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.bird.alive
    }

    // Back to front: later entries are painted over earlier ones
    pub fn draw_order(&self) -> [(SpriteId, &Entity); 4] {
        [
            (SpriteId::PipeBottom, &self.pipe_bottom.entity),
            (SpriteId::PipeTop, &self.pipe_top.entity),
            (SpriteId::Base, &self.base),
            (SpriteId::Bird, &self.bird.entity),
        ]
    }

    // Start a new round after a death. The ground never moves, so it is left alone.
    pub fn reset_round(&mut self) {
        self.bird.reset();
        self.pipe_top.reset(&mut self.rng);
        self.pipe_bottom.reset(&mut self.rng);
        self.round += 1;
        self.frames_survived = 0;
        info!(round = self.round, "round started");
    }
}
