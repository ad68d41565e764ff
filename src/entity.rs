/*
 * Entity Module
 *
 * This module defines the Entity struct, the positioned and sized box that
 * every drawable and collidable object in the game is built on.
 *
 * Coordinates are in game space: the origin is the top-left corner of the
 * 288x512 playfield and y grows downward. An entity's hitbox is its visual
 * box shrunk by the same inset on every side.
 */

use rand::Rng;

// Axis-aligned rectangle in game space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hitbox {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Hitbox {
    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    // Inclusive on every edge: boxes that only touch count as overlapping
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        self.left() <= other.right()
            && self.right() >= other.left()
            && self.top() <= other.bottom()
            && self.bottom() >= other.top()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    inset: f32,
    hitbox: Hitbox,
}

impl Entity {
    pub fn new(x: f32, y: f32, size: [f32; 2], inset: f32) -> Self {
        let [w, h] = size;
        Self {
            x,
            y,
            w,
            h,
            inset,
            hitbox: Hitbox {
                x: x + inset,
                y: y + inset,
                w: w - inset * 2.0,
                h: h - inset * 2.0,
            },
        }
    }

    pub fn hitbox(&self) -> Hitbox {
        self.hitbox
    }

    // Full visual box, used by the renderer
    pub fn bounds(&self) -> Hitbox {
        Hitbox {
            x: self.x,
            y: self.y,
            w: self.w,
            h: self.h,
        }
    }

    // Move the hitbox back onto the current position
    pub fn update(&mut self) {
        self.hitbox.x = self.x + self.inset;
        self.hitbox.y = self.y + self.inset;
    }

    pub fn is_colliding(&self, other: &Entity) -> bool {
        self.hitbox.overlaps(&other.hitbox)
    }
}

// Anything in the world that owns an Entity and advances once per frame.
//
// Each kind brings its own physics; the static ground uses the bare
// Entity implementation, which only refreshes the hitbox.
pub trait Body {
    fn entity(&self) -> &Entity;

    fn update<R: Rng>(&mut self, rng: &mut R);

    fn is_colliding<B: Body>(&self, other: &B) -> bool {
        self.entity().is_colliding(other.entity())
    }
}

impl Body for Entity {
    fn entity(&self) -> &Entity {
        self
    }

    fn update<R: Rng>(&mut self, _rng: &mut R) {
        Entity::update(self);
    }
}
