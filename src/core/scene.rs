// One mounted effect instance, whichever variant is active.

use super::constants::{Variant, CONSTELLATION, GRID, REPULSION};
use super::field::FieldState;
use super::grid::GridField;
use glam::DVec2;

pub enum Scene {
    Particles(FieldState),
    Grid(GridField),
}

impl Scene {
    pub fn mount(variant: Variant, width: u32, height: u32, seed: u64) -> Self {
        match variant {
            Variant::Constellation => {
                Scene::Particles(FieldState::new(CONSTELLATION, width, height, seed))
            }
            Variant::Repulsion => {
                Scene::Particles(FieldState::new(REPULSION, width, height, seed))
            }
            Variant::GridGlow => Scene::Grid(GridField::new(GRID, width, height)),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        match self {
            Scene::Particles(f) => f.resize(width, height),
            Scene::Grid(g) => g.resize(width, height),
        }
    }

    pub fn pointer_moved(&mut self, pos: DVec2) {
        match self {
            Scene::Particles(f) => f.set_pointer(pos),
            Scene::Grid(g) => g.set_pointer(pos),
        }
    }

    pub fn pointer_left(&mut self) {
        match self {
            Scene::Particles(f) => f.clear_pointer(),
            Scene::Grid(g) => g.clear_pointer(),
        }
    }

    pub fn step(&mut self) {
        match self {
            Scene::Particles(f) => f.step(),
            Scene::Grid(g) => g.step(),
        }
    }
}
