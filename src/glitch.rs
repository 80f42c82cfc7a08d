use rand::Rng;
use wasm_bindgen::prelude::*;

pub const GLITCH_CHARS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";
pub const GLITCH_RATE: f64 = 0.1;

// Timing of a hover burst: a glitched frame is shown for FRAME_MS, one is
// produced every INTERVAL_MS, and the burst stops after BURST_MS.
pub const GLITCH_FRAME_MS: u32 = 50;
pub const GLITCH_INTERVAL_MS: u32 = 100;
pub const GLITCH_BURST_MS: u32 = 500;

// Replaces each character with a random symbol with probability `rate`.
pub fn glitch_text<R: Rng>(text: &str, rate: f64, rng: &mut R) -> String {
    let rate = rate.max(0.0).min(1.0);
    text.chars()
        .map(|c| {
            if rng.gen_bool(rate) {
                GLITCH_CHARS[rng.gen_range(0, GLITCH_CHARS.len())] as char
            } else {
                c
            }
        })
        .collect()
}

#[wasm_bindgen]
pub fn glitch(text: &str) -> String {
    glitch_text(text, GLITCH_RATE, &mut rand::thread_rng())
}
