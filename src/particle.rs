// Simple particle struct to keep track of individual position, velocity, size,
// color and opacity, plus the per-frame steps the field runs on it

use crate::color::Color;
use crate::config::FieldConfig;
use rand::Rng;
use vecmath::{self, Vector2};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub size: f64,
    pub color: Color,
    pub opacity: f64,
    // Rebuild of the field that spawned this particle
    pub generation: u64,
}

impl Particle {
    pub fn new(
        pos: Vector2<f64>,
        vel: Vector2<f64>,
        size: f64,
        color: Color,
        opacity: f64,
    ) -> Particle {
        Particle {
            pos,
            vel,
            size,
            color,
            opacity,
            generation: 0,
        }
    }

    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        width: f64,
        height: f64,
        config: &FieldConfig,
    ) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let vel_x = (rng.gen::<f64>() * 2.0 - 1.0) * config.max_speed;
        let vel_y = (rng.gen::<f64>() * 2.0 - 1.0) * config.max_speed;
        let size = rng.gen::<f64>() * (config.max_size - config.min_size) + config.min_size;
        let opacity =
            rng.gen::<f64>() * (config.max_opacity - config.min_opacity) + config.min_opacity;
        let color = if rng.gen_bool(0.5) {
            config.palette[0]
        } else {
            config.palette[1]
        };
        Particle::new([pos_x, pos_y], [vel_x, vel_y], size, color, opacity)
    }

    pub fn integrate(&mut self) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
    }

    // Flips the velocity component on each axis that left the surface.
    // The position is left where it is, so a particle can sit outside for a frame.
    pub fn reflect(&mut self, width: f64, height: f64) {
        if self.pos[0] < 0.0 || self.pos[0] > width {
            self.vel[0] *= -1.0;
        }
        if self.pos[1] < 0.0 || self.pos[1] > height {
            self.vel[1] *= -1.0;
        }
    }

    pub fn nudge(&mut self, offset: Vector2<f64>) {
        self.pos = vecmath::vec2_add(self.pos, offset);
    }

    pub fn distance_to(&self, other: Vector2<f64>) -> f64 {
        vecmath::vec2_len(vecmath::vec2_sub(self.pos, other))
    }
}
