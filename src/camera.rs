use glam::{Mat4, Vec3, Vec4};

/// Perspective camera looking down -z at the sketch origin.
///
/// Sketch space has its origin at the viewport center with y pointing down,
/// and the eye distance is chosen so that one unit at z = 0 covers one CSS
/// pixel. The y flip is folded into [`SketchCamera::view_matrix`], so winding
/// order is mirrored; pipelines using this camera should not cull faces.
#[derive(Clone, Debug)]
pub struct SketchCamera {
    pub eye: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl SketchCamera {
    pub fn for_viewport(
        width: f32,
        height: f32,
        fovy_radians: f32,
        near_factor: f32,
        far_factor: f32,
    ) -> Self {
        let height = height.max(1.0);
        let eye_z = (height * 0.5) / (fovy_radians * 0.5).tan();
        Self {
            eye: Vec3::new(0.0, 0.0, eye_z),
            aspect: width.max(1.0) / height,
            fovy_radians,
            znear: eye_z * near_factor,
            zfar: eye_z * far_factor,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// World (y up) look-at composed with the sketch's y-down flip.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, Vec3::ZERO, Vec3::Y) * Mat4::from_scale(Vec3::new(1.0, -1.0, 1.0))
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Normalized device coordinates of a sketch-space point.
    pub fn project(&self, p: Vec3) -> Vec3 {
        let clip = self.view_proj() * Vec4::new(p.x, p.y, p.z, 1.0);
        clip.truncate() / clip.w
    }
}
