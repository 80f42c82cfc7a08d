// Particle field simulator: a fixed set of slowly drifting particles that bounce
// off the canvas edges, with faint lines between neighbours.
//
// The host drives it once per animation frame through `frame()`. Nothing here
// touches the DOM, so the whole simulation can be stepped synchronously.

use crate::config::{FieldConfig, Range};
use crate::particle::Particle;
use crate::surface::Surface;
use rand::Rng;

pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    config: FieldConfig,
}

fn sample<R: Rng>(rng: &mut R, range: Range) -> f64 {
    rng.gen::<f64>() * (range.max - range.min) + range.min
}

impl ParticleField {
    pub fn create<R: Rng>(width: f64, height: f64, count: usize, rng: &mut R) -> ParticleField {
        let config = FieldConfig {
            count,
            ..FieldConfig::default()
        };
        ParticleField::with_config(width, height, config, rng)
    }

    pub fn with_config<R: Rng>(
        width: f64,
        height: f64,
        config: FieldConfig,
        rng: &mut R,
    ) -> ParticleField {
        let velocity = Range::new(-config.speed, config.speed);
        let mut particles = Vec::with_capacity(config.count);
        for _ in 0..config.count {
            let pos_x = rng.gen::<f64>() * width;
            let pos_y = rng.gen::<f64>() * height;
            let vel_x = sample(rng, velocity);
            let vel_y = sample(rng, velocity);
            let radius = sample(rng, config.radius);
            let opacity = sample(rng, config.opacity);
            particles.push(Particle::new(pos_x, pos_y, vel_x, vel_y, radius, opacity));
        }

        ParticleField {
            width,
            height,
            particles,
            config,
        }
    }

    // Builds a field around an explicit particle set, using default styling
    pub fn from_particles(width: f64, height: f64, particles: Vec<Particle>) -> ParticleField {
        let config = FieldConfig {
            count: particles.len(),
            ..FieldConfig::default()
        };
        ParticleField {
            width,
            height,
            particles,
            config,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    // Particles are not moved; anything now out of bounds reflects back on its own.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn advance(&mut self) {
        if !self.has_area() {
            return;
        }
        for particle in &mut self.particles {
            particle.step();
            particle.reflect(self.width, self.height);
        }
    }

    pub fn render<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        if !self.has_area() {
            return Ok(());
        }
        let color = self.config.color;
        surface.clear(self.width, self.height)?;

        for p in &self.particles {
            surface.fill_circle(p.pos, p.radius, color, p.opacity)?;
        }

        // O(n^2) over pairs, fine for a few dozen particles
        let link_distance = self.config.link_distance;
        for (i, p) in self.particles.iter().enumerate() {
            for other in &self.particles[i + 1..] {
                let distance = p.distance_to(other);
                if distance < link_distance {
                    let alpha = self.config.link_opacity * (1.0 - distance / link_distance);
                    surface.stroke_line(p.pos, other.pos, color, alpha, 1.0)?;
                }
            }
        }
        Ok(())
    }

    // One animation frame
    pub fn frame<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        self.advance();
        self.render(surface)
    }

    pub fn dispose(self) {}
}
