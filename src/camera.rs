/*
 * Camera Module
 *
 * This module defines the Camera struct that maps game space onto the
 * window. Game space has its origin at the top-left corner of the playfield
 * with y growing downward; nannou draws around the window centre with y
 * growing upward. The camera is fixed: it only centres and scales.
 */

use nannou::prelude::*;

use crate::entity::Hitbox;

pub struct Camera {
    // Playfield size in game units
    pub world_size: Vec2,
    // Window pixels per game unit
    pub zoom: f32,
}

impl Camera {
    pub fn new(world_size: Vec2, zoom: f32) -> Self {
        Self { world_size, zoom }
    }

    // Window size needed to show the whole playfield
    pub fn window_size(&self) -> (u32, u32) {
        let size = self.world_size * self.zoom;
        (size.x.round() as u32, size.y.round() as u32)
    }

    // Convert a point from game space to screen space
    pub fn world_to_screen(&self, point: Vec2, window_rect: Rect) -> Vec2 {
        let centered = vec2(
            point.x - self.world_size.x / 2.0,
            self.world_size.y / 2.0 - point.y,
        );
        centered * self.zoom + window_rect.xy()
    }

    // Screen rectangle covering a game-space box
    pub fn box_to_screen(&self, bounds: Hitbox, window_rect: Rect) -> Rect {
        let center = vec2(bounds.x + bounds.w / 2.0, bounds.y + bounds.h / 2.0);
        let xy = self.world_to_screen(center, window_rect);
        Rect::from_x_y_w_h(xy.x, xy.y, bounds.w * self.zoom, bounds.h * self.zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera(zoom: f32) -> Camera {
        Camera::new(vec2(288.0, 512.0), zoom)
    }

    #[test]
    fn corners_map_to_window_edges() {
        let camera = camera(1.0);
        let window = Rect::from_w_h(288.0, 512.0);
        assert_eq!(camera.world_to_screen(vec2(0.0, 0.0), window), vec2(-144.0, 256.0));
        assert_eq!(camera.world_to_screen(vec2(288.0, 512.0), window), vec2(144.0, -256.0));
    }

    #[test]
    fn full_playfield_box_fills_the_window() {
        let camera = camera(2.0);
        let window = Rect::from_w_h(576.0, 1024.0);
        let rect = camera.box_to_screen(
            Hitbox { x: 0.0, y: 0.0, w: 288.0, h: 512.0 },
            window,
        );
        assert_eq!(rect.xy(), vec2(0.0, 0.0));
        assert_eq!(rect.wh(), vec2(576.0, 1024.0));
    }

    #[test]
    fn ground_box_sits_at_the_bottom() {
        let camera = camera(1.0);
        let window = Rect::from_w_h(288.0, 512.0);
        let rect = camera.box_to_screen(
            Hitbox { x: 0.0, y: 400.0, w: 336.0, h: 112.0 },
            window,
        );
        assert_eq!(rect.bottom(), -256.0);
        assert_eq!(rect.left(), -144.0);
        assert_eq!(rect.top(), -144.0);
    }

    #[test]
    fn zoom_scales_distances_from_the_centre() {
        let camera = camera(1.5);
        let window = Rect::from_w_h(432.0, 768.0);
        let point = camera.world_to_screen(vec2(20.0, 130.0), window);
        assert_eq!(point, vec2((20.0 - 144.0) * 1.5, (256.0 - 130.0) * 1.5));
    }

    #[test]
    fn window_size_scales_the_playfield() {
        assert_eq!(camera(1.0).window_size(), (288, 512));
        assert_eq!(camera(2.0).window_size(), (576, 1024));
    }
}
