#[macro_use]
mod utils;

pub mod background;
pub mod color;
pub mod config;
pub mod contact;
pub mod counter;
pub mod field;
pub mod glitch;
pub mod particle;
pub mod projects;
pub mod renderer;
pub mod scheduler;
pub mod surface;
pub mod typing;

use wasm_bindgen::prelude::*;
use web_sys::console;

pub use background::Background;
pub use config::FieldConfig;
pub use field::ParticleField;
pub use particle::Particle;
pub use surface::Surface;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}
