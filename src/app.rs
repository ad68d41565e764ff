/*
 * Application Module
 *
 * This module defines the nannou application model and the per-frame
 * update for the game. Each display refresh is turned into a whole number
 * of fixed simulation frames; every simulation frame advances the world
 * (unless the bird is dead), then drains the queued keyboard input.
 */

use std::path::Path;

use nannou::prelude::*;
use nannou_egui::Egui;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, error, info};

use crate::assets::Assets;
use crate::camera::Camera;
use crate::clock::FrameClock;
use crate::debug::DebugInfo;
use crate::error::GameError;
use crate::input::{self, GameInput, InputQueue};
use crate::params::{DebugParams, GameParams};
use crate::physics;
use crate::renderer::view;
use crate::ui;
use crate::world::World;
use crate::{SCREEN_H, SCREEN_W};

// Main model for the application
pub struct Model {
    pub world: World,
    pub params: GameParams,
    pub assets: Assets,
    pub camera: Camera,
    pub clock: FrameClock,
    pub input: InputQueue,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub paused: bool,
}

// Initialize the model. Startup failures are fatal.
pub fn model(app: &App) -> Model {
    match try_model(app) {
        Ok(model) => model,
        Err(e) => {
            error!(error = %e, "failed to start");
            std::process::exit(1);
        }
    }
}

fn try_model(app: &App) -> Result<Model, GameError> {
    let params = GameParams::load()?;
    info!(?params, "starting");

    // Escape is handled through the input queue like every other key
    app.set_exit_on_escape(false);
    app.set_loop_mode(LoopMode::RefreshSync);

    let camera = Camera::new(vec2(SCREEN_W, SCREEN_H), params.window.scale);
    let (width, height) = camera.window_size();

    let window_id = app
        .new_window()
        .title(params.window.title.clone())
        .size(width, height)
        .resizable(false)
        .view(view)
        .key_pressed(input::key_pressed)
        .key_released(input::key_released)
        .raw_event(input::raw_window_event)
        .build()
        .map_err(|e| GameError::Window(format!("{e:?}")))?;
    info!(width, height, "window created");

    let egui = {
        let window = app
            .window(window_id)
            .ok_or_else(|| GameError::Window("window closed during startup".to_string()))?;
        Egui::from_window(&window)
    };

    let assets = Assets::load(app, Path::new(&params.assets.dir))?;
    let world = World::new(&params, assets.sizes(), StdRng::from_entropy());
    let clock = FrameClock::new(params.physics.fps, params.physics.max_steps_per_frame);

    info!(round = world.round, "round started");

    Ok(Model {
        world,
        params,
        assets,
        camera,
        clock,
        input: InputQueue::default(),
        egui,
        debug_info: DebugInfo::default(),
        paused: false,
    })
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    model.egui.set_elapsed_time(update.since_start);
    ui::update_ui(
        &mut model.egui,
        &mut model.params.debug,
        &mut model.paused,
        &model.debug_info,
        &model.world,
    );

    let steps = model.clock.advance(update.since_last);
    model.debug_info.steps_this_frame = steps;

    for _ in 0..steps {
        if !model.paused {
            physics::step(&mut model.world);
        }

        if drain_input(app, model) == Flow::Quit {
            return;
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

fn drain_input(app: &App, model: &mut Model) -> Flow {
    while let Some(event) = model.input.pop() {
        let flow = handle_input(
            event,
            &mut model.world,
            &mut model.params.debug,
            model.paused,
        );
        if flow == Flow::Quit {
            app.quit();
            return Flow::Quit;
        }
    }
    Flow::Continue
}

// Jumps are ignored while the simulation is paused
fn handle_input(
    event: GameInput,
    world: &mut World,
    debug_params: &mut DebugParams,
    paused: bool,
) -> Flow {
    match event {
        GameInput::Jump if paused => {
            debug!("jump ignored while paused");
        }
        GameInput::Jump => input::apply_jump(world),
        GameInput::ToggleDebug => {
            debug_params.show_panel = !debug_params.show_panel;
            debug!(show_panel = debug_params.show_panel, "debug panel toggled");
        }
        GameInput::Quit => {
            info!(round = world.round, "quit requested");
            return Flow::Quit;
        }
    }
    Flow::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::tests::world;

    #[test]
    fn paused_jump_leaves_the_bird_alone() {
        let mut world = world(1);
        let mut debug_params = GameParams::default().debug;
        world.bird.fall_speed = 1.5;

        let flow = handle_input(GameInput::Jump, &mut world, &mut debug_params, true);

        assert_eq!(flow, Flow::Continue);
        assert_eq!(world.bird.fall_speed, 1.5);
    }

    #[test]
    fn paused_jump_does_not_restart_the_round() {
        let mut world = world(1);
        let mut debug_params = GameParams::default().debug;
        world.bird.alive = false;

        handle_input(GameInput::Jump, &mut world, &mut debug_params, true);

        assert!(!world.is_alive());
        assert_eq!(world.round, 1);
    }

    #[test]
    fn jump_flaps_when_running() {
        let mut world = world(1);
        let mut debug_params = GameParams::default().debug;

        handle_input(GameInput::Jump, &mut world, &mut debug_params, false);

        assert_eq!(world.bird.fall_speed, -3.0);
    }

    #[test]
    fn toggle_and_quit_work_while_paused() {
        let mut world = world(1);
        let mut debug_params = GameParams::default().debug;

        let flow = handle_input(GameInput::ToggleDebug, &mut world, &mut debug_params, true);
        assert_eq!(flow, Flow::Continue);
        assert!(debug_params.show_panel);

        let flow = handle_input(GameInput::Quit, &mut world, &mut debug_params, true);
        assert_eq!(flow, Flow::Quit);
    }
}
