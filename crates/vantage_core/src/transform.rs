//! World-space transform: position, rotation (quaternion), scale.
//!
//! `Transform` is `Copy`, so scene code can store and pass it freely. Call
//! `.matrix()` to get the model matrix the renderer consumes.

use glam::{Mat4, Quat, Vec3};

/// World-space transform component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World-space position.
    pub position: Vec3,
    /// Orientation as a unit quaternion.
    pub rotation: Quat,
    /// Non-uniform scale factor.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// Identity transform — no translation, no rotation, uniform scale 1.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Construct with a world-space position, identity rotation and scale.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Construct with a uniform scale and a world-space position.
    pub fn scaled_at(scale: f32, position: Vec3) -> Self {
        Self {
            position,
            scale: Vec3::splat(scale),
            ..Self::IDENTITY
        }
    }

    /// Build the TRS model matrix (`T * R * S`).
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Apply a translation offset in world space.
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    /// Rotate by `angle` radians around the given world-space axis.
    pub fn rotate_axis(&mut self, axis: Vec3, angle: f32) {
        self.rotation = Quat::from_axis_angle(axis, angle) * self.rotation;
    }

    /// Rotate around the world Y axis (yaw).
    pub fn rotate_y(&mut self, angle: f32) {
        self.rotate_axis(Vec3::Y, angle);
    }

    /// Set uniform scale.
    pub fn set_scale_uniform(&mut self, s: f32) {
        self.scale = Vec3::splat(s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_matrix() {
        let t = Transform::default();
        assert!((t.matrix() - Mat4::IDENTITY).abs_diff_eq(Mat4::ZERO, 1e-6));
    }

    #[test]
    fn translation_only() {
        let t = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
        let (_, _, pos) = t.matrix().to_scale_rotation_translation();
        assert!((pos - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-5);
    }

    #[test]
    fn scaled_at_combines_scale_and_position() {
        let t = Transform::scaled_at(2.0, Vec3::new(-1.0, 1.0, 3.0));
        let (scale, _, pos) = t.matrix().to_scale_rotation_translation();
        assert!((scale - Vec3::splat(2.0)).length() < 1e-5);
        assert!((pos - Vec3::new(-1.0, 1.0, 3.0)).length() < 1e-5);
    }

    #[test]
    fn yaw_accumulates() {
        let mut t = Transform::IDENTITY;
        t.rotate_y(std::f32::consts::FRAC_PI_2);
        t.rotate_y(std::f32::consts::FRAC_PI_2);
        // Two quarter turns rotate +X into -X.
        let rotated = t.rotation * Vec3::X;
        assert!((rotated - Vec3::NEG_X).length() < 1e-5);
    }
}
