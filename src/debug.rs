/*
 * Debug Information Module
 *
 * Frame timing figures shown in the debug panel.
 */

use std::time::Duration;

#[derive(Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    // Simulation frames run during the last display refresh
    pub steps_this_frame: u32,
}
