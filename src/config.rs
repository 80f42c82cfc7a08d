use crate::color::Color;
use serde::Deserialize;

// Rendering links every pair, so the frame cost grows with count squared.
pub const MAX_COUNT: usize = 10_000;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Range { min, max }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
    pub count: usize,
    // Largest absolute velocity per axis, in pixels per frame.
    pub speed: f64,
    pub radius: Range,
    pub opacity: Range,
    // Pairs closer than this get a connecting line.
    pub link_distance: f64,
    // Line alpha for coincident particles, fading to 0 at `link_distance`.
    pub link_opacity: f64,
    pub color: Color,
    // Time each frame phase with `console.time`.
    pub profile: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            count: 50,
            speed: 0.25,
            radius: Range::new(1.0, 3.0),
            opacity: Range::new(0.2, 0.7),
            link_distance: 100.0,
            link_opacity: 0.1,
            color: Color::MATRIX_GREEN,
            profile: false,
        }
    }
}

impl FieldConfig {
    pub fn from_json(text: &str) -> Result<FieldConfig, String> {
        let config: FieldConfig =
            serde_json::from_str(text).map_err(|e| format!("invalid field config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.count > MAX_COUNT {
            return Err(format!(
                "count must be at most {}, got {}",
                MAX_COUNT, self.count
            ));
        }
        if !(self.speed >= 0.0) {
            return Err(format!("speed must be non-negative, got {}", self.speed));
        }
        if !(self.link_distance > 0.0) {
            return Err(format!(
                "link_distance must be positive, got {}",
                self.link_distance
            ));
        }
        if !(0.0..=1.0).contains(&self.link_opacity) {
            return Err(format!(
                "link_opacity must be within [0, 1], got {}",
                self.link_opacity
            ));
        }
        for (name, range) in &[("radius", self.radius), ("opacity", self.opacity)] {
            if !(range.min >= 0.0) || range.min > range.max {
                return Err(format!(
                    "{} range must satisfy 0 <= min <= max, got [{}, {}]",
                    name, range.min, range.max
                ));
            }
        }
        if self.opacity.max > 1.0 {
            return Err(format!(
                "opacity range must stay within [0, 1], got max {}",
                self.opacity.max
            ));
        }
        Ok(())
    }
}
