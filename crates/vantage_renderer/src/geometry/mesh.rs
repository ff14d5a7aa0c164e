/// A drawable GPU mesh plus the support points culling needs.
///
/// Meshes are cheaply cloneable because the underlying buffers are `Arc`-
/// wrapped; a second handle does not copy GPU memory. The `support_points`
/// are a small local-space point set (usually the 8 corners of the local
/// bounding box) from which instances derive their world AABBs without
/// touching vertex data.
use std::sync::Arc;

use glam::Vec3;

#[derive(Clone)]
pub struct Mesh {
    pub vertex_buffer: Arc<wgpu::Buffer>,
    pub index_buffer: Arc<wgpu::Buffer>,
    pub index_count: u32,
    /// Index format used when binding this mesh.
    pub index_format: wgpu::IndexFormat,
    /// Local-space points bounding the mesh, consumed by AABB updates.
    pub support_points: Vec<Vec3>,
}

impl Mesh {
    /// Unit cube centred at the origin.
    pub fn cube(device: &wgpu::Device) -> Self {
        super::primitives::cube(device)
    }

    /// UV sphere of the given radius.
    pub fn sphere(device: &wgpu::Device, radius: f32) -> Self {
        super::primitives::sphere(device, 16, 16, radius)
    }

    /// Two-sided unit quad in the local XY plane.
    pub fn plane(device: &wgpu::Device) -> Self {
        super::primitives::plane(device)
    }
}

/// The 8 corners of a box with the given half-extents — the usual support
/// set for solid primitives.
pub fn box_corners(half: Vec3) -> Vec<Vec3> {
    let mut corners = Vec::with_capacity(8);
    for &x in &[half.x, -half.x] {
        for &y in &[half.y, -half.y] {
            for &z in &[half.z, -half.z] {
                corners.push(Vec3::new(x, y, z));
            }
        }
    }
    corners
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_corners_cover_all_octants() {
        let corners = box_corners(Vec3::splat(0.5));
        assert_eq!(corners.len(), 8);
        for sx in [-1.0f32, 1.0] {
            for sy in [-1.0f32, 1.0] {
                for sz in [-1.0f32, 1.0] {
                    assert!(corners.contains(&Vec3::new(sx * 0.5, sy * 0.5, sz * 0.5)));
                }
            }
        }
    }
}
