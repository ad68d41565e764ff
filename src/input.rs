/*
 * Input Module
 *
 * This module handles keyboard input for the game. Key presses arrive from
 * nannou between frames; they are queued here and drained by the update
 * loop after the physics step, so input always acts on the latest state.
 *
 * Controls:
 * - Space: flap, or start a new round after a crash
 * - Escape: quit
 * - F1: toggle the debug panel
 */

use std::collections::{HashSet, VecDeque};

use nannou::prelude::*;

use crate::app::Model;
use crate::world::World;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameInput {
    Jump,
    Quit,
    ToggleDebug,
}

impl GameInput {
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Space => Some(Self::Jump),
            Key::Escape => Some(Self::Quit),
            Key::F1 => Some(Self::ToggleDebug),
            _ => None,
        }
    }
}

// Pending inputs in arrival order. A key held down counts once: the OS
// auto-repeat presses are dropped until the key is released.
#[derive(Default)]
pub struct InputQueue {
    pending: VecDeque<GameInput>,
    held: HashSet<Key>,
}

impl InputQueue {
    pub fn push(&mut self, input: GameInput) {
        self.pending.push_back(input);
    }

    pub fn pop(&mut self) -> Option<GameInput> {
        self.pending.pop_front()
    }

    pub fn press(&mut self, key: Key) {
        if !self.held.insert(key) {
            return;
        }
        if let Some(input) = GameInput::from_key(key) {
            self.push(input);
        }
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }
}

// Flap while flying; after a crash, the same key starts the next round
pub fn apply_jump(world: &mut World) {
    if world.is_alive() {
        world.bird.fly();
    } else {
        world.reset_round();
    }
}

// Key pressed event handler
pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    model.input.press(key);
}

// Key released event handler
pub fn key_released(_app: &App, model: &mut Model, key: Key) {
    model.input.release(key);
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
