//! Drawing collaborators the sketch talks to.
//!
//! The simulation never touches a real graphics API. Front-ends implement these
//! traits on top of whatever they have (a Canvas2D context, a WebGPU surface, a
//! recording buffer in tests) and hand them to [`crate::Sketch::tick`].

use crate::color::Rgba;
use glam::{Mat4, Vec2, Vec3};

/// Canvas size in sketch pixels (origin top-left, y down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Hearts, connection stream and HUD.
    ThreeD,
    /// HUD only; used when the 3D surface could not be created.
    TwoD,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Flat 2D drawing surface in sketch pixels.
pub trait Canvas2d {
    /// Reset to fully transparent and drop any translation.
    fn clear(&mut self);
    /// Paint the whole surface with `color` (alpha < 1 leaves trails) and drop any translation.
    fn background(&mut self, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, diameter: f32, color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, weight: f32);
    fn stroke_polyline(&mut self, points: &[Vec2], color: Rgba, weight: f32);
    fn text(&mut self, text: &str, pos: Vec2, size: f32, align: TextAlign, color: Rgba);
    /// Offset everything drawn afterwards until the next `clear`/`background`.
    fn translate(&mut self, offset: Vec2);
}

/// 3D scene in sketch space: origin at the viewport center, y down, z toward the viewer.
pub trait Scene3d {
    fn clear(&mut self, color: Rgba);
    /// Draw the unit heart mesh transformed by `model`.
    fn draw_heart(&mut self, model: Mat4, color: Rgba);
    fn draw_line(&mut self, from: Vec3, to: Vec3, color: Rgba);
    fn draw_point(&mut self, center: Vec3, diameter: f32, color: Rgba);
}

/// The page element that names the current track.
pub trait StatusDisplay {
    fn set_track_text(&mut self, text: &str);
    fn set_pulsing(&mut self, pulsing: bool);
}

/// Everything a frame draws into.
pub struct Surfaces<'a> {
    pub canvas: &'a mut dyn Canvas2d,
    pub scene: Option<&'a mut dyn Scene3d>,
    pub status: &'a mut dyn StatusDisplay,
}
