/// Two-sided unit quad in the local XY plane (z = 0), half-extent 1.
///
/// Both windings are emitted as separate faces so the quad stays visible
/// under back-face culling from either side. Support points are the four
/// in-plane corners.
use glam::Vec3;

use crate::geometry::Mesh;
use crate::geometry::Vertex;
use crate::resources::buffer;

pub fn plane(device: &wgpu::Device) -> Mesh {
    let v = |pos: [f32; 3], normal: [f32; 3], uv: [f32; 2]| Vertex {
        position: pos,
        normal,
        uv,
    };

    #[rustfmt::skip]
    let vertices: &[Vertex] = &[
        // facing z-
        v([-1.0, -1.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0]),
        v([-1.0,  1.0, 0.0], [0.0, 0.0, -1.0], [0.0, 0.0]),
        v([ 1.0,  1.0, 0.0], [0.0, 0.0, -1.0], [1.0, 0.0]),
        v([ 1.0, -1.0, 0.0], [0.0, 0.0, -1.0], [1.0, 1.0]),
        // facing z+
        v([ 1.0, -1.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0]),
        v([ 1.0,  1.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0]),
        v([-1.0,  1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0]),
        v([-1.0, -1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 1.0]),
    ];

    #[rustfmt::skip]
    let indices: &[u16] = &[
        0, 1, 2,  2, 3, 0,
        4, 5, 6,  6, 7, 4,
    ];

    Mesh {
        vertex_buffer: buffer::create_vertex(device, "Plane VB", vertices),
        index_buffer: buffer::create_index(device, "Plane IB", indices),
        index_count: indices.len() as u32,
        index_format: wgpu::IndexFormat::Uint16,
        support_points: vec![
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(-1.0, 1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(-1.0, -1.0, 0.0),
        ],
    }
}
