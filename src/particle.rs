// Simple particle struct to keep track of individual position, velocity, size and opacity

extern crate nalgebra_glm as glm;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub radius: f64,
    pub opacity: f64,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64, opacity: f64) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
            opacity,
        }
    }

    pub fn step(&mut self) {
        self.pos[0] += self.vel[0];
        self.pos[1] += self.vel[1];
    }

    // Flips the velocity on each axis where the particle sits outside [0, bound].
    // Position is left alone, so a particle may overshoot by one step.
    pub fn reflect(&mut self, width: f64, height: f64) {
        if self.pos[0] < 0.0 || self.pos[0] > width {
            self.vel[0] *= -1.0;
        }
        if self.pos[1] < 0.0 || self.pos[1] > height {
            self.vel[1] *= -1.0;
        }
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        glm::distance(
            &glm::vec2(self.pos[0], self.pos[1]),
            &glm::vec2(other.pos[0], other.pos[1]),
        )
    }
}
