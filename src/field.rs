//! The particle network behind the hero banner.
//!
//! A [`ParticleField`] owns every particle, the pointer state and the surface
//! size. Hosts call [`ParticleField::tick`] once per frame; it advances the
//! physics and draws the frame through a [`Renderer`].

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::pointer::Pointer;
use crate::renderer::Renderer;
use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::debug;
use vecmath::Vector2;

/// Line between two particles closer than the link distance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Link {
    pub from: Vector2<f64>,
    pub to: Vector2<f64>,
    pub distance: f64,
    pub alpha: f64,
}

pub struct ParticleField<R: Rng = ThreadRng> {
    config: FieldConfig,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    pointer: Pointer,
    generation: u64,
    rng: R,
}

impl ParticleField<ThreadRng> {
    pub fn new(viewport_width: f64, height: f64) -> Self {
        ParticleField::with_config(
            FieldConfig::default(),
            rand::thread_rng(),
            viewport_width,
            height,
        )
    }
}

impl<R: Rng> ParticleField<R> {
    pub fn with_config(config: FieldConfig, rng: R, viewport_width: f64, height: f64) -> Self {
        let pointer = Pointer::new(config.influence_radius);
        let mut field = ParticleField {
            config,
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
            pointer,
            generation: 0,
            rng,
        };
        field.resize(viewport_width, height);
        field
    }

    /// Adopts a new surface size and rebuilds the particle set from scratch.
    /// The surface is as wide as the viewport.
    pub fn resize(&mut self, viewport_width: f64, height: f64) {
        self.width = viewport_width.max(0.0);
        self.height = height.max(0.0);
        self.generation += 1;

        let count = self.config.particle_count(viewport_width);
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            let mut p = Particle::random(&mut self.rng, self.width, self.height, &self.config);
            p.generation = self.generation;
            particles.push(p);
        }
        self.particles = particles;
        debug!(
            width = self.width,
            height = self.height,
            count,
            generation = self.generation,
            "Rebuilt particle field"
        );
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer.move_to(x, y);
    }

    pub fn clear_pointer(&mut self) {
        self.pointer.leave();
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn update(&mut self) {
        let (width, height) = (self.width, self.height);
        let pointer = self.pointer;
        let push = self.config.push_strength;
        for particle in &mut self.particles {
            particle.integrate();
            particle.reflect(width, height);
            if let Some(offset) = pointer.repulsion(particle.pos, push) {
                particle.nudge(offset);
            }
        }
    }

    /// Every unordered pair of distinct particles that should be joined by a
    /// line this frame. Pairs whose alpha would not be positive are left out.
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.distance_to(b.pos);
                if distance >= self.config.link_distance {
                    continue;
                }
                let alpha = self.config.link_alpha(distance);
                if alpha <= 0.0 {
                    continue;
                }
                links.push(Link {
                    from: a.pos,
                    to: b.pos,
                    distance,
                    alpha,
                });
            }
        }
        links
    }

    pub fn render<T: Renderer>(&self, renderer: &mut T) -> Result<(), T::Error> {
        renderer.clear(self.width, self.height)?;
        for p in &self.particles {
            renderer.fill_circle(p.pos, p.size, p.color, p.opacity)?;
        }
        for link in self.links() {
            renderer.stroke_line(
                link.from,
                link.to,
                self.config.link_width,
                self.config.link_color,
                link.alpha,
            )?;
        }
        Ok(())
    }

    pub fn tick<T: Renderer>(&mut self, renderer: &mut T) -> Result<(), T::Error> {
        self.update();
        self.render(renderer)
    }
}
