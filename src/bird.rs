/*
 * Bird Module
 *
 * This module defines the Bird struct, the player-controlled entity.
 * The bird never moves horizontally; it falls under constant gravity and a
 * flap replaces its vertical speed with a fixed upward thrust.
 *
 * State machine: Alive -> (collision) -> Dead -> (reset) -> Alive
 */

use rand::Rng;

use crate::entity::{Body, Entity};
use crate::params::{BirdParams, PhysicsParams};

#[derive(Clone, Debug)]
pub struct Bird {
    pub entity: Entity,
    pub fall_speed: f32,
    pub alive: bool,
    start_y: f32,
    gravity: f32,
    thrust: f32,
}

impl Bird {
    pub fn new(size: [f32; 2], bird: &BirdParams, physics: &PhysicsParams) -> Self {
        Self {
            entity: Entity::new(bird.start_x, bird.start_y, size, bird.hitbox_inset),
            fall_speed: 0.0,
            alive: true,
            start_y: bird.start_y,
            gravity: physics.gravity,
            thrust: physics.thrust,
        }
    }

    pub fn start_y(&self) -> f32 {
        self.start_y
    }

    // Apply one frame of gravity. The loop only calls this while alive.
    pub fn update(&mut self) {
        self.fall_speed += self.gravity;
        self.entity.y += self.fall_speed;
        self.entity.update();
    }

    // Overrides the current speed, so repeated flaps never stack
    pub fn fly(&mut self) {
        self.fall_speed = -self.thrust;
    }

    pub fn reset(&mut self) {
        self.alive = true;
        self.fall_speed = 0.0;
        self.entity.y = self.start_y;
        self.entity.update();
    }
}

impl Body for Bird {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn update<R: Rng>(&mut self, _rng: &mut R) {
        Bird::update(self);
    }
}
