/*
 * Pipe Module
 *
 * This module defines the Pipe struct, a scrolling obstacle. A pipe moves
 * left at the scroll speed and, once it has fully left the screen, comes
 * back at the right edge with a fresh random height.
 *
 * The top and bottom pipes recycle independently. The gap between them is
 * only guaranteed by choosing non-overlapping height ranges.
 */

use rand::Rng;
use tracing::debug;

use crate::entity::{Body, Entity};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipeKind {
    Top,
    Bottom,
}

#[derive(Clone, Debug)]
pub struct Pipe {
    pub entity: Entity,
    pub kind: PipeKind,
    pub speed: f32,
    min_y: i32,
    max_y: i32,
    right_edge: f32,
}

impl Pipe {
    // Spawns at the right edge with a random height in [min_y, max_y]
    pub fn new<R: Rng>(
        kind: PipeKind,
        size: [f32; 2],
        (min_y, max_y): (i32, i32),
        speed: f32,
        right_edge: f32,
        rng: &mut R,
    ) -> Self {
        let y = rng.gen_range(min_y..=max_y) as f32;
        Self {
            entity: Entity::new(right_edge, y, size, 0.0),
            kind,
            speed,
            min_y,
            max_y,
            right_edge,
        }
    }

    pub fn y_range(&self) -> (i32, i32) {
        (self.min_y, self.max_y)
    }

    pub fn right_edge(&self) -> f32 {
        self.right_edge
    }

    pub fn update<R: Rng>(&mut self, rng: &mut R) {
        self.entity.x -= self.speed;
        if self.entity.x <= -self.entity.w {
            self.reset(rng);
        }
        self.entity.update();
    }

    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.entity.x = self.right_edge;
        self.entity.y = rng.gen_range(self.min_y..=self.max_y) as f32;
        self.entity.update();
        debug!(pipe = ?self.kind, y = self.entity.y, "pipe recycled");
    }
}

impl Body for Pipe {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn update<R: Rng>(&mut self, rng: &mut R) {
        Pipe::update(self, rng);
    }
}
