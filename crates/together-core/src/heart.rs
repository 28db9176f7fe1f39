use crate::color::Rgba;
use crate::constants::*;
use crate::math::random_between;
use crate::render::Scene3d;
use glam::{Mat4, Quat, Vec2, Vec3};
use rand::Rng;
use std::f32::consts::TAU;

/// Polar radius of the heart curve at angle `theta`.
///
/// `r(θ) = 2 − 2 sin θ + sin θ · sqrt(|cos θ|) / (sin θ + 1.4)`
#[inline]
pub fn heart_radius(theta: f32) -> f32 {
    let s = theta.sin();
    2.0 - 2.0 * s + s * theta.cos().abs().sqrt() / (s + 1.4)
}

/// Point on the unit heart outline (y down, so the lobes sit on top).
#[inline]
pub fn heart_outline(theta: f32) -> Vec2 {
    let r = heart_radius(theta);
    Vec2::new(r * theta.cos(), -r * theta.sin())
}

/// Depth of the front face at `theta`; the back face mirrors it.
#[inline]
pub fn heart_depth(theta: f32) -> f32 {
    (1.0 - (theta * 2.0).cos()) * HEART_DEPTH_SCALE
}

/// Closed heart volume at unit size, built from the 2D curve.
///
/// Layout of `positions`:
/// - `[0]` front centroid, `[1..=face]` front rim
/// - next: back centroid, then back rim
/// - then `strip` front/back pairs for the ruled side wall
#[derive(Clone, Debug)]
pub struct HeartMesh {
    pub positions: Vec<Vec3>,
    pub indices: Vec<u32>,
    pub face_vertices: usize,
    pub strip_pairs: usize,
}

impl HeartMesh {
    pub fn unit() -> Self {
        let face_vertices = (TAU / HEART_FACE_STEP).ceil() as usize;
        let strip_pairs = ((TAU + HEART_STRIP_STEP) / HEART_STRIP_STEP).ceil() as usize;
        let mut positions = Vec::with_capacity(2 * (face_vertices + 1) + 2 * strip_pairs);
        let mut indices = Vec::new();

        for sign in [1.0_f32, -1.0] {
            let base = positions.len() as u32;
            let rim: Vec<Vec3> = (0..face_vertices)
                .map(|i| {
                    let theta = i as f32 * HEART_FACE_STEP;
                    heart_outline(theta).extend(sign * heart_depth(theta))
                })
                .collect();
            let centroid = rim.iter().copied().sum::<Vec3>() / face_vertices as f32;
            positions.push(centroid);
            positions.extend(rim);
            for i in 0..face_vertices as u32 {
                let a = base + 1 + i;
                let b = base + 1 + (i + 1) % face_vertices as u32;
                if sign > 0.0 {
                    indices.extend_from_slice(&[base, a, b]);
                } else {
                    indices.extend_from_slice(&[base, b, a]);
                }
            }
        }

        let strip_base = positions.len() as u32;
        for i in 0..strip_pairs {
            let theta = i as f32 * HEART_STRIP_STEP;
            let p = heart_outline(theta);
            let d = heart_depth(theta);
            positions.push(p.extend(d));
            positions.push(p.extend(-d));
        }
        for i in 0..strip_pairs as u32 - 1 {
            let f0 = strip_base + 2 * i;
            let (b0, f1, b1) = (f0 + 1, f0 + 2, f0 + 3);
            indices.extend_from_slice(&[f0, b0, f1, f1, b0, b1]);
        }

        Self {
            positions,
            indices,
            face_vertices,
            strip_pairs,
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// A pulsing, spinning 3D heart.
#[derive(Clone, Debug)]
pub struct Heart {
    pub pos: Vec3,
    pub base_size: f32,
    pub size: f32,
    pub target_size: f32,
    pub color: Rgba,
    pub rotation: f32,
    pub pulse_speed: f32,
    pub pulse_amount: f32,
    pub rotation_speed: f32,
    pub time: f32,
    pub pulse_intensity: f32,
}

impl Heart {
    pub fn new(pos: Vec3, size: f32, color: Rgba, rng: &mut impl Rng) -> Self {
        Self {
            pos,
            base_size: size,
            size,
            target_size: size,
            color,
            rotation: 0.0,
            pulse_speed: random_between(rng, HEART_PULSE_SPEED_MIN, HEART_PULSE_SPEED_MAX),
            pulse_amount: HEART_PULSE_AMOUNT,
            rotation_speed: HEART_ROTATION_SPEED,
            time: random_between(rng, 0.0, HEART_PHASE_MAX),
            pulse_intensity: 1.0,
        }
    }

    pub fn set_pulse_intensity(&mut self, intensity: f32) {
        self.pulse_intensity = intensity;
    }

    /// Size the heart should settle at for a normalized bass level.
    pub fn target_for(&self, bass_value: f32) -> f32 {
        self.base_size * (1.0 + bass_value * HEART_BASS_GAIN * self.pulse_intensity)
    }

    /// Ease toward the bass-driven size without the natural oscillation.
    pub fn relax(&mut self, bass_value: f32) {
        self.target_size = self.target_for(bass_value);
        self.size += (self.target_size - self.size) * HEART_SIZE_SMOOTHING;
    }

    pub fn pulse(&mut self, bass_value: f32) {
        self.relax(bass_value);
        self.time += self.pulse_speed;
        self.size += self.time.sin() * self.pulse_amount * self.pulse_intensity;
        self.rotation += self.rotation_speed * (1.0 + bass_value * HEART_BASS_GAIN);
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.size),
            Quat::from_rotation_y(self.rotation)
                * Quat::from_rotation_x(self.rotation * HEART_TILT_RATIO),
            self.pos,
        )
    }

    pub fn display(&self, scene: &mut dyn Scene3d) {
        scene.draw_heart(self.model_matrix(), self.color);
    }
}
