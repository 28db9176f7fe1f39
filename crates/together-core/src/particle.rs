use crate::color::Rgba;
use crate::constants::*;
use crate::math::{map_range, random_between};
use crate::render::{Canvas2d, Viewport};
use glam::Vec2;
use rand::Rng;

/// Which half of the screen a particle system lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn base_hue(self) -> f32 {
        match self {
            Side::Left => LEFT_HUE,
            Side::Right => RIGHT_HUE,
        }
    }

    /// Point the side's particles are steered toward or away from.
    pub fn attraction_center(self, viewport: Viewport) -> Vec2 {
        let fx = match self {
            Side::Left => LEFT_CENTER_FRACTION,
            Side::Right => RIGHT_CENTER_FRACTION,
        };
        Vec2::new(viewport.width * fx, viewport.height * 0.5)
    }

    /// Uniform random point inside this side's half of the viewport.
    pub fn random_position(self, viewport: Viewport, rng: &mut impl Rng) -> Vec2 {
        let half = viewport.width * 0.5;
        let x = match self {
            Side::Left => random_between(rng, 0.0, half),
            Side::Right => random_between(rng, half, viewport.width),
        };
        Vec2::new(x, random_between(rng, 0.0, viewport.height))
    }
}

/// Speed cap for a given amplitude level: 1 at silence, 6 at full volume.
#[inline]
pub fn speed_cap(volume_level: f32) -> f32 {
    map_range(volume_level, 0.0, 1.0, SPEED_CAP_MIN, SPEED_CAP_MAX)
}

/// Population a system grows or shrinks toward for a given amplitude level.
#[inline]
pub fn target_population(volume_level: f32, max_particles: usize) -> usize {
    map_range(volume_level, 0.0, 1.0, MIN_PARTICLES, max_particles as f32)
        .floor()
        .max(0.0) as usize
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    pub size: f32,
    pub hue: f32,
    pub side: Side,
    pub alpha: f32,
}

impl Particle {
    pub fn new(pos: Vec2, hue: f32, side: Side, rng: &mut impl Rng) -> Self {
        Self {
            pos,
            vel: Vec2::new(
                random_between(rng, -1.0, 1.0),
                random_between(rng, -1.0, 1.0),
            ),
            acc: Vec2::ZERO,
            size: random_between(rng, PARTICLE_SIZE_MIN, PARTICLE_SIZE_MAX),
            hue,
            side,
            alpha: PARTICLE_ALPHA,
        }
    }

    pub fn apply_force(&mut self, force: Vec2) {
        self.acc += force;
    }

    /// Steer toward `center` for low frequency content, away from it for high.
    pub fn set_attraction(&mut self, center: Vec2, energy: f32, frequency_value: f32) {
        let dir = (center - self.pos).normalize_or_zero();
        let force = if frequency_value > DISPERSE_THRESHOLD {
            dir * (-energy * DISPERSE_GAIN)
        } else {
            dir * (energy * CONVERGE_GAIN)
        };
        self.apply_force(force);
    }

    /// Deterministic part of [`Particle::update`]: accelerate, cap speed, move.
    pub fn integrate(&mut self, volume_level: f32) {
        let cap = speed_cap(volume_level);
        self.vel = (self.vel + self.acc).clamp_length_max(cap);
        self.pos += self.vel;
        self.acc = Vec2::ZERO;
    }

    pub fn update(&mut self, volume_level: f32, rng: &mut impl Rng) {
        self.integrate(volume_level);
        self.vel += Vec2::new(
            random_between(rng, -VELOCITY_JITTER, VELOCITY_JITTER),
            random_between(rng, -VELOCITY_JITTER, VELOCITY_JITTER),
        );
    }

    /// Inelastic bounce: reflect the offending velocity component and damp it.
    pub fn check_edges(&mut self, width: f32, height: f32) {
        if self.pos.x > width || self.pos.x < 0.0 {
            self.vel.x *= -EDGE_BOUNCE;
        }
        if self.pos.y > height || self.pos.y < 0.0 {
            self.vel.y *= -EDGE_BOUNCE;
        }
    }

    pub fn color(&self) -> Rgba {
        let hue = match self.side {
            Side::Left => self.hue,
            Side::Right => self.hue + 180.0,
        };
        Rgba::from_hsb(hue, PARTICLE_SATURATION, PARTICLE_BRIGHTNESS, self.alpha)
    }

    pub fn display(&self, canvas: &mut dyn Canvas2d) {
        canvas.fill_circle(self.pos, self.size, self.color());
    }
}

/// One screen half's worth of particles.
#[derive(Clone, Debug)]
pub struct ParticleSystem {
    pub particles: Vec<Particle>,
    pub side: Side,
    pub hue: f32,
}

impl ParticleSystem {
    pub fn new(count: usize, side: Side, viewport: Viewport, rng: &mut impl Rng) -> Self {
        let mut system = Self {
            particles: Vec::with_capacity(count),
            side,
            hue: side.base_hue(),
        };
        for _ in 0..count {
            system.add_particle(viewport, rng);
        }
        system
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn add_particle(&mut self, viewport: Viewport, rng: &mut impl Rng) {
        let pos = self.side.random_position(viewport, rng);
        let particle = Particle::new(pos, self.hue, self.side, rng);
        self.particles.push(particle);
    }

    /// Move every particle one frame and draw it.
    pub fn run(
        &mut self,
        frequency_value: f32,
        volume_level: f32,
        viewport: Viewport,
        canvas: &mut dyn Canvas2d,
        rng: &mut impl Rng,
    ) {
        let center = self.side.attraction_center(viewport);
        let energy = volume_level * ATTRACTION_ENERGY_SCALE;
        for particle in &mut self.particles {
            particle.set_attraction(center, energy, frequency_value);
            particle.update(volume_level, rng);
            particle.check_edges(viewport.width, viewport.height);
            particle.display(canvas);
        }
    }

    /// Rate-limited population change toward the volume-derived target.
    ///
    /// Growth adds at most two particles per call; shrinking drops the oldest
    /// particle only with a small probability, so transient peaks do not cause
    /// the population to collapse the moment the music gets quieter.
    pub fn adjust_particles(
        &mut self,
        volume_level: f32,
        max_particles: usize,
        viewport: Viewport,
        rng: &mut impl Rng,
    ) {
        let target = target_population(volume_level, max_particles);
        let current = self.particles.len();
        if current < target {
            for _ in 0..PARTICLES_PER_GROWTH_STEP {
                if self.particles.len() < max_particles {
                    self.add_particle(viewport, rng);
                }
            }
        } else if current > target && rng.gen::<f32>() < SHRINK_PROBABILITY {
            self.particles.remove(0);
        }
    }
}
