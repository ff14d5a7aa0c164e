/// One placement of a shared geometry in the scene: a world transform, the
/// material parameters the shader needs, and a cached world-space AABB.
///
/// The AABB is recomputed from the geometry's support points every time the
/// transform changes, so by the time culling runs it always reflects the
/// current placement.
use glam::{Mat4, Vec3, Vec4};

use crate::scene::culling::Aabb;

// ── Material ─────────────────────────────────────────────────────────────────

/// Shading parameters shared by the opaque and transparent pipelines.
#[derive(Debug, Clone, Copy)]
pub struct Material {
    /// Base RGBA color; alpha below 1 only matters for transparent
    /// collections.
    pub base_color: Vec4,
    /// `x` ambient, `y` diffuse, `z` specular strength, `w` shininess.
    pub light_params: Vec4,
    /// Layer index into the color texture array; negative disables sampling.
    pub texture_id: i32,
    /// When false the surface is emitted unshaded (light markers).
    pub lit: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            base_color: Vec4::ONE,
            light_params: Vec4::new(1.0, 1.0, 3.0, 32.0),
            texture_id: 0,
            lit: true,
        }
    }
}

impl Material {
    /// Unshaded solid color (used for the light marker sphere).
    pub fn unlit(base_color: Vec4) -> Self {
        Self {
            base_color,
            texture_id: -1,
            lit: false,
            ..Default::default()
        }
    }
}

// ── GPU record ───────────────────────────────────────────────────────────────

/// Per-instance record as the shader sees it, packed into the fixed-capacity
/// uniform array of the batch upload buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRecord {
    pub model: [[f32; 4]; 4],
    /// Inverse-transpose of `model`, for normal transformation under
    /// non-uniform scale.
    pub normal: [[f32; 4]; 4],
    pub light_params: [f32; 4],
    pub base_color: [f32; 4],
    /// `x` texture layer, `y` lit flag; `z`/`w` padding.
    pub material: [i32; 4],
}

// ── Instance ─────────────────────────────────────────────────────────────────

/// One object placement. Owned exclusively by its collection; the renderer
/// only reads it during culling and record packing.
#[derive(Debug, Clone)]
pub struct Instance {
    transform: Mat4,
    pub material: Material,
    aabb: Aabb,
}

impl Instance {
    /// Creates an instance and caches its AABB from `support_points`.
    pub fn new(transform: Mat4, material: Material, support_points: &[Vec3]) -> Self {
        let mut inst = Self {
            transform,
            material,
            aabb: Aabb::default(),
        };
        inst.update_aabb(support_points);
        inst
    }

    #[inline]
    pub fn transform(&self) -> &Mat4 {
        &self.transform
    }

    #[inline]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// Replaces the world transform and refreshes the cached AABB.
    pub fn set_transform(&mut self, transform: Mat4, support_points: &[Vec3]) {
        self.transform = transform;
        self.update_aabb(support_points);
    }

    /// Recomputes the cached AABB for the current transform.
    ///
    /// An empty support set leaves the previous box untouched.
    pub fn update_aabb(&mut self, support_points: &[Vec3]) {
        if let Some(aabb) = Aabb::from_support_points(support_points, &self.transform) {
            self.aabb = aabb;
        }
    }

    /// Packs the shader-facing record for this instance.
    pub fn record(&self) -> InstanceRecord {
        InstanceRecord {
            model: self.transform.to_cols_array_2d(),
            normal: self.transform.inverse().transpose().to_cols_array_2d(),
            light_params: self.material.light_params.to_array(),
            base_color: self.material.base_color.to_array(),
            material: [
                self.material.texture_id,
                self.material.lit as i32,
                0,
                0,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORNERS: [Vec3; 8] = [
        Vec3::new(0.5, 0.5, 0.5),
        Vec3::new(-0.5, 0.5, 0.5),
        Vec3::new(0.5, -0.5, 0.5),
        Vec3::new(-0.5, -0.5, 0.5),
        Vec3::new(0.5, 0.5, -0.5),
        Vec3::new(-0.5, 0.5, -0.5),
        Vec3::new(0.5, -0.5, -0.5),
        Vec3::new(-0.5, -0.5, -0.5),
    ];

    #[test]
    fn aabb_follows_transform_changes() {
        let mut inst = Instance::new(Mat4::IDENTITY, Material::default(), &CORNERS);
        assert_eq!(inst.aabb().min, Vec3::splat(-0.5));

        inst.set_transform(Mat4::from_translation(Vec3::new(3.0, 0.0, 0.0)), &CORNERS);
        assert_eq!(inst.aabb().min, Vec3::new(2.5, -0.5, -0.5));
        assert_eq!(inst.aabb().max, Vec3::new(3.5, 0.5, 0.5));
    }

    #[test]
    fn empty_support_set_keeps_previous_aabb() {
        let mut inst = Instance::new(Mat4::IDENTITY, Material::default(), &CORNERS);
        let before = *inst.aabb();
        inst.set_transform(Mat4::from_translation(Vec3::splat(100.0)), &[]);
        assert_eq!(*inst.aabb(), before);
    }

    #[test]
    fn record_carries_material_flags() {
        let inst = Instance::new(
            Mat4::IDENTITY,
            Material::unlit(Vec4::new(1.0, 0.0, 0.0, 0.4)),
            &CORNERS,
        );
        let rec = inst.record();
        assert_eq!(rec.material[0], -1);
        assert_eq!(rec.material[1], 0);
        assert_eq!(rec.base_color, [1.0, 0.0, 0.0, 0.4]);
    }
}
