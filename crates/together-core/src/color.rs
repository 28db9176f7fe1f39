//! Colors in the sketch's HSB space and the linear RGBA the renderers consume.

use glam::Vec4;

/// Straight (non-premultiplied) RGBA with every channel in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn gray(level: f32, a: f32) -> Self {
        Self::new(level, level, level, a)
    }

    /// Convert hue (degrees, wrapped), saturation and brightness (0..100) to RGBA.
    pub fn from_hsb(hue: f32, saturation: f32, brightness: f32, alpha: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let s = (saturation / 100.0).clamp(0.0, 1.0);
        let v = (brightness / 100.0).clamp(0.0, 1.0);
        let c = v * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = v - c;
        Self::new(r + m, g + m, b + m, alpha.clamp(0.0, 1.0))
    }

    pub fn from_hsb_array(hsb: [f32; 3], alpha: f32) -> Self {
        Self::from_hsb(hsb[0], hsb[1], hsb[2], alpha)
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Channel-wise interpolation, `t` clamped to \[0, 1\].
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::from(Vec4::from(self).lerp(Vec4::from(other), t))
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Rgba> for Vec4 {
    fn from(c: Rgba) -> Self {
        Vec4::new(c.r, c.g, c.b, c.a)
    }
}

impl From<Vec4> for Rgba {
    fn from(v: Vec4) -> Self {
        Rgba::new(v.x, v.y, v.z, v.w)
    }
}
