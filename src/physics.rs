/*
 * Physics Module
 *
 * This module advances the world by one simulation frame and checks the
 * bird against every obstacle. A single hit ends the round: there are no
 * lives and no partial damage. While the bird is dead the world is frozen.
 */

use tracing::info;

use crate::entity::Body;
use crate::world::World;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Obstacle {
    TopPipe,
    BottomPipe,
    Base,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    // Bird is dead; nothing moved
    Frozen,
    Flying,
    Died(Obstacle),
}

// Update every entity in draw order
pub fn advance(world: &mut World) {
    Body::update(&mut world.pipe_bottom, &mut world.rng);
    Body::update(&mut world.pipe_top, &mut world.rng);
    Body::update(&mut world.base, &mut world.rng);
    Body::update(&mut world.bird, &mut world.rng);
}

// First obstacle the bird is touching, checked top pipe, bottom pipe, ground
pub fn detect_collision(world: &World) -> Option<Obstacle> {
    let bird = &world.bird;
    if bird.is_colliding(&world.pipe_top) {
        Some(Obstacle::TopPipe)
    } else if bird.is_colliding(&world.pipe_bottom) {
        Some(Obstacle::BottomPipe)
    } else if bird.is_colliding(&world.base) {
        Some(Obstacle::Base)
    } else {
        None
    }
}

// One simulation frame: move everything, then look for a hit
pub fn step(world: &mut World) -> StepOutcome {
    if !world.is_alive() {
        return StepOutcome::Frozen;
    }

    advance(world);
    world.frames_survived += 1;

    match detect_collision(world) {
        Some(obstacle) => {
            world.bird.alive = false;
            info!(
                round = world.round,
                frames = world.frames_survived,
                ?obstacle,
                "bird died"
            );
            StepOutcome::Died(obstacle)
        }
        None => StepOutcome::Flying,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::tests::world;

    // Park both pipes far off to the right so only the ground matters
    fn clear_pipes(world: &mut World) {
        world.pipe_top.entity.x = 1000.0;
        world.pipe_bottom.entity.x = 1000.0;
        world.pipe_top.entity.update();
        world.pipe_bottom.entity.update();
    }

    #[test]
    fn step_moves_pipes_and_bird() {
        let mut world = world(4);
        let top_x = world.pipe_top.entity.x;
        let bottom_x = world.pipe_bottom.entity.x;

        assert_eq!(step(&mut world), StepOutcome::Flying);

        assert_eq!(world.pipe_top.entity.x, top_x - 4.0);
        assert_eq!(world.pipe_bottom.entity.x, bottom_x - 4.0);
        assert_eq!(world.bird.fall_speed, 0.1);
        assert_eq!(world.frames_survived, 1);
    }

    #[test]
    fn ground_does_not_move() {
        let mut world = world(4);
        for _ in 0..10 {
            advance(&mut world);
        }
        assert_eq!((world.base.x, world.base.y), (0.0, 400.0));
    }

    #[test]
    fn touching_the_ground_kills_the_bird() {
        let mut world = world(8);
        clear_pipes(&mut world);
        // Hitbox bottom sits on the ground's top edge; the next frame pushes it in
        world.bird.entity.y = 400.0 - 24.0 + 5.0;

        assert_eq!(step(&mut world), StepOutcome::Died(Obstacle::Base));
        assert!(!world.is_alive());
    }

    #[test]
    fn dead_world_is_frozen() {
        let mut world = world(8);
        world.bird.alive = false;
        let y = world.bird.entity.y;
        let pipe_x = world.pipe_top.entity.x;

        for _ in 0..5 {
            assert_eq!(step(&mut world), StepOutcome::Frozen);
        }

        assert_eq!(world.bird.entity.y, y);
        assert_eq!(world.pipe_top.entity.x, pipe_x);
        assert_eq!(world.frames_survived, 0);
    }

    #[test]
    fn pipe_hit_is_reported_before_the_ground() {
        let mut world = world(3);
        world.pipe_top.entity.x = world.bird.entity.x;
        world.pipe_top.entity.y = world.bird.entity.y - 300.0;
        world.pipe_top.entity.update();
        world.pipe_bottom.entity.x = 1000.0;
        world.pipe_bottom.entity.update();

        assert_eq!(detect_collision(&world), Some(Obstacle::TopPipe));
    }

    #[test]
    fn bottom_pipe_hit() {
        let mut world = world(3);
        world.pipe_top.entity.x = 1000.0;
        world.pipe_top.entity.update();
        world.pipe_bottom.entity.x = world.bird.entity.x;
        world.pipe_bottom.entity.y = world.bird.entity.y;
        world.pipe_bottom.entity.update();

        assert_eq!(detect_collision(&world), Some(Obstacle::BottomPipe));
    }

    #[test]
    fn open_sky_has_no_collision() {
        let mut world = world(3);
        clear_pipes(&mut world);
        assert_eq!(detect_collision(&world), None);
    }

    #[test]
    fn unattended_bird_eventually_hits_something() {
        let mut world = world(21);
        let died = (0..600).any(|_| matches!(step(&mut world), StepOutcome::Died(_)));
        assert!(died);
        assert!(!world.is_alive());
    }
}
