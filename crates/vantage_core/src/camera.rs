use glam::{Mat4, Vec3};

use crate::config::RendererConfig;

/// Camera state shared between the application and the renderer.
///
/// The camera is described by its **world transform** (camera-local `+Z` is
/// the viewing direction) plus the projection parameters. The view matrix is
/// always the inverse of the world transform — there is no separate "view"
/// field to keep in sync.
///
/// `fov` is the horizontal field of view; `aspect` is stored as
/// `height / width` and scales the vertical frustum extent.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera-to-world matrix. Column `w` is the camera position.
    pub transform: Mat4,
    /// Horizontal field of view in radians.
    pub fov: f32,
    /// `height / width` of the viewport.
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            transform: Mat4::from_translation(Vec3::new(0.0, 0.0, -10.0)),
            fov: std::f32::consts::FRAC_PI_3,
            aspect: 720.0 / 1280.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

impl Camera {
    /// Builds a camera from the renderer configuration and an initial
    /// viewport aspect (`height / width`).
    pub fn with_config(cfg: &RendererConfig, aspect: f32) -> Self {
        Self {
            fov: cfg.fov,
            znear: cfg.znear,
            zfar: cfg.zfar,
            aspect,
            ..Default::default()
        }
    }

    /// World-space camera position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.transform.w_axis.truncate()
    }

    /// View matrix — world-to-camera.
    #[inline]
    pub fn view(&self) -> Mat4 {
        self.transform.inverse()
    }

    /// Half extents `(horizontal, vertical)` of the view volume at the given
    /// camera-space distance.
    #[inline]
    pub fn half_extents(&self, dist: f32) -> (f32, f32) {
        let hw = dist * (self.fov * 0.5).tan();
        (hw, hw * self.aspect)
    }

    /// Projection matrix. Left-handed (camera looks down `+Z`), depth in
    /// `[0, 1]` as wgpu expects.
    pub fn projection(&self) -> Mat4 {
        // glam takes a vertical fov and width/height, so convert from the
        // horizontal-fov convention used everywhere else in this crate.
        let fov_y = 2.0 * (self.aspect * (self.fov * 0.5).tan()).atan();
        Mat4::perspective_lh(fov_y, 1.0 / self.aspect, self.znear, self.zfar)
    }

    /// Combined view-projection matrix for the current state.
    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }

    /// Update the stored aspect (`height / width`) when the viewport resizes.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn position_comes_from_transform() {
        let mut cam = Camera::default();
        cam.transform = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(cam.position(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn view_inverts_transform() {
        let mut cam = Camera::default();
        cam.transform =
            Mat4::from_rotation_y(0.7) * Mat4::from_translation(Vec3::new(0.0, 1.0, -4.0));
        let round_trip = cam.view() * cam.transform;
        assert!(round_trip.abs_diff_eq(Mat4::IDENTITY, 1e-5));
    }

    #[test]
    fn point_ahead_projects_inside_clip_volume() {
        let cam = Camera {
            transform: Mat4::IDENTITY,
            ..Default::default()
        };
        // A point straight ahead, between near and far.
        let clip = cam.view_projection() * Vec4::new(0.0, 0.0, 5.0, 1.0);
        let ndc = clip / clip.w;
        assert!(ndc.x.abs() < 1.0 && ndc.y.abs() < 1.0);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn vertical_extent_scales_with_aspect() {
        let cam = Camera::default();
        let (hw, hh) = cam.half_extents(10.0);
        assert!((hh - hw * cam.aspect).abs() < 1e-6);
    }
}
