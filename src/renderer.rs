/*
 * Renderer Module
 *
 * This module draws one frame: the background, every entity in z-order
 * (bottom pipe, top pipe, ground, bird), the game-over banner while the
 * bird is dead, optional hitbox outlines and finally the debug panel.
 */

use nannou::prelude::*;
use tracing::error;

use crate::app::Model;
use crate::assets::Sprite;
use crate::camera::Camera;
use crate::entity::{Entity, Hitbox};
use crate::{SCREEN_H, SCREEN_W};

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let window_rect = app.window_rect();
    let camera = &model.camera;
    let assets = &model.assets;

    // Sky
    let sky = Hitbox {
        x: 0.0,
        y: 0.0,
        w: assets.background.size[0],
        h: assets.background.size[1],
    };
    draw_sprite(&draw, camera, window_rect, &assets.background, sky);

    for (id, entity) in model.world.draw_order() {
        draw_entity(
            &draw,
            camera,
            window_rect,
            assets.sprite(id),
            entity,
            model.params.debug.show_hitboxes,
        );
    }

    if !model.world.is_alive() {
        draw_sprite(
            &draw,
            camera,
            window_rect,
            &assets.game_over,
            centered(assets.game_over.size),
        );
    }

    if let Err(e) = draw.to_frame(app, &frame) {
        error!(error = ?e, "failed to draw frame");
    }

    if let Err(e) = model.egui.draw_to_frame(&frame) {
        error!(error = ?e, "failed to draw debug panel");
    }
}

// Paint an entity's sprite, plus its hitbox outline in debug mode
pub fn draw_entity(
    draw: &Draw,
    camera: &Camera,
    window_rect: Rect,
    sprite: &Sprite,
    entity: &Entity,
    show_hitbox: bool,
) {
    draw_sprite(draw, camera, window_rect, sprite, entity.bounds());

    if show_hitbox {
        let rect = camera.box_to_screen(entity.hitbox(), window_rect);
        draw.rect()
            .xy(rect.xy())
            .wh(rect.wh())
            .no_fill()
            .stroke(RED)
            .stroke_weight(1.0);
    }
}

fn draw_sprite(draw: &Draw, camera: &Camera, window_rect: Rect, sprite: &Sprite, bounds: Hitbox) {
    let rect = camera.box_to_screen(bounds, window_rect);
    draw.texture(&sprite.texture).xy(rect.xy()).wh(rect.wh());
}

// Box of the given size centred on the playfield
fn centered(size: [f32; 2]) -> Hitbox {
    Hitbox {
        x: SCREEN_W / 2.0 - size[0] / 2.0,
        y: SCREEN_H / 2.0 - size[1] / 2.0,
        w: size[0],
        h: size[1],
    }
}
