// Simple color struct, created from an unsigned 32 representing RRGGBBAA

use serde::Deserialize;

#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "u32")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    // The green used across the site (#00ff41)
    pub const MATRIX_GREEN: Color = Color {
        r: 0x00,
        g: 0xff,
        b: 0x41,
        a: 0xff,
    };

    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = (num >> 0) as u8;

        Color { r, g, b, a }
    }

    // CSS color string with the given alpha, ignoring the stored alpha byte
    pub fn to_css(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

impl From<u32> for Color {
    fn from(num: u32) -> Self {
        Color::from_u32(num)
    }
}
