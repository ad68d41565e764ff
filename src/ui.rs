/*
 * UI Module
 *
 * The developer debug panel, built with nannou_egui. It is hidden unless
 * toggled with F1 (or enabled in the configuration) and shows frame timing
 * and the bird's state, with switches for hitbox outlines and pausing.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::DebugParams;
use crate::world::World;

pub fn update_ui(
    egui: &mut Egui,
    debug: &mut DebugParams,
    paused: &mut bool,
    debug_info: &DebugInfo,
    world: &World,
) {
    let ctx = egui.begin_frame();

    if !debug.show_panel {
        return;
    }

    egui::Window::new("Debug")
        .default_pos([8.0, 8.0])
        .show(&ctx, |ui| {
            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!(
                "Frame time: {:.2} ms",
                debug_info.frame_time.as_secs_f64() * 1000.0
            ));
            ui.label(format!("Steps this frame: {}", debug_info.steps_this_frame));

            ui.separator();

            let bird = &world.bird;
            ui.label(format!("Round: {}", world.round));
            ui.label(format!("Frames survived: {}", world.frames_survived));
            ui.label(format!("Bird y: {:.2}", bird.entity.y));
            ui.label(format!("Fall speed: {:.2}", bird.fall_speed));
            ui.label(if bird.alive { "State: alive" } else { "State: dead" });

            ui.separator();

            ui.checkbox(&mut debug.show_hitboxes, "Show hitboxes");
            ui.checkbox(paused, "Pause simulation");
        });
}
