use crate::color::Rgba;
use crate::constants::*;
use crate::heart::Heart;
use crate::math::random_between;
use crate::render::Scene3d;
use glam::Vec3;
use rand::Rng;

pub const DEFAULT_CONNECTION_CAPACITY: usize = 50;

/// A particle travelling along the segment between two hearts.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitParticle {
    pub pos: Vec3,
    /// Interpolation parameter from the first heart (0) to the second (1).
    pub t: f32,
    pub speed: f32,
    pub size: f32,
    pub life: f32,
}

/// Stream of particles linking two hearts.
#[derive(Clone, Debug)]
pub struct HeartConnection {
    pub particles: Vec<TransitParticle>,
    pub capacity: usize,
}

impl HeartConnection {
    pub fn new(from: &Heart, to: &Heart, capacity: usize, rng: &mut impl Rng) -> Self {
        let mut connection = Self {
            particles: Vec::with_capacity(capacity),
            capacity,
        };
        for _ in 0..capacity {
            connection.add_particle(from, to, rng);
        }
        connection
    }

    pub fn add_particle(&mut self, from: &Heart, to: &Heart, rng: &mut impl Rng) {
        let t = rng.gen::<f32>();
        let [sx, sy, sz] = CONNECTION_SPAWN_SPREAD;
        let scatter = Vec3::new(
            random_between(rng, -sx, sx),
            random_between(rng, -sy, sy),
            random_between(rng, -sz, sz),
        );
        self.particles.push(TransitParticle {
            pos: from.pos.lerp(to.pos, t) + scatter,
            t,
            speed: random_between(rng, CONNECTION_SPEED_MIN, CONNECTION_SPEED_MAX),
            size: random_between(rng, CONNECTION_SIZE_MIN, CONNECTION_SIZE_MAX),
            life: CONNECTION_LIFE,
        });
    }

    /// Advance every particle one frame; spent particles are replaced.
    pub fn update(
        &mut self,
        from: &Heart,
        to: &Heart,
        bass_value: f32,
        frame: u64,
        rng: &mut impl Rng,
    ) {
        let phase = frame as f32;
        for i in (0..self.particles.len()).rev() {
            let p = &mut self.particles[i];
            p.t += p.speed * (1.0 + bass_value);
            if p.t > 1.0 {
                p.t = 0.0;
            }
            let seed = i as f32;
            let sway = Vec3::new(
                (phase * CONNECTION_JITTER_FREQ[0] + seed).sin() * CONNECTION_JITTER_AMP[0],
                (phase * CONNECTION_JITTER_FREQ[1] + seed).cos() * CONNECTION_JITTER_AMP[1],
                0.0,
            );
            p.pos = from.pos.lerp(to.pos, p.t) + sway;
            p.life -= CONNECTION_LIFE_DECAY;
            if p.life <= 0.0 {
                self.particles.remove(i);
                self.add_particle(from, to, rng);
            }
        }

        let spawn_chance = CONNECTION_SPAWN_BASE + bass_value * CONNECTION_SPAWN_BASS_SLOPE;
        if rng.gen::<f32>() < spawn_chance && self.particles.len() < self.capacity {
            self.add_particle(from, to, rng);
        }
    }

    pub fn display(&self, from: &Heart, to: &Heart, scene: &mut dyn Scene3d) {
        scene.draw_line(from.pos, to.pos, Rgba::gray(HUD_GRAY, CONNECTION_LINE_ALPHA));
        for p in &self.particles {
            let color = from
                .color
                .lerp(to.color, p.t)
                .with_alpha(p.life / CONNECTION_LIFE);
            scene.draw_point(p.pos, p.size, color);
        }
    }
}
