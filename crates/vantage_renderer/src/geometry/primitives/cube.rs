/// Unit cube primitive centred at the origin (half-extent 0.5).
///
/// 24 unique vertices (4 per face, so normals and UVs stay per-face) and
/// 36 indices. Support points are the 8 box corners.
use glam::Vec3;

use crate::geometry::mesh::{box_corners, Mesh};
use crate::geometry::Vertex;
use crate::resources::buffer;

pub fn cube(device: &wgpu::Device) -> Mesh {
    let v = |pos: [f32; 3], normal: [f32; 3], uv: [f32; 2]| Vertex {
        position: pos,
        normal,
        uv,
    };

    const H: f32 = 0.5;
    #[rustfmt::skip]
    let vertices: &[Vertex] = &[
        // front  (z+)
        v([-H, -H,  H], [0.0, 0.0,  1.0], [0.0, 1.0]), v([ H, -H,  H], [0.0, 0.0,  1.0], [1.0, 1.0]),
        v([ H,  H,  H], [0.0, 0.0,  1.0], [1.0, 0.0]), v([-H,  H,  H], [0.0, 0.0,  1.0], [0.0, 0.0]),
        // back   (z-)
        v([-H, -H, -H], [0.0, 0.0, -1.0], [1.0, 1.0]), v([ H, -H, -H], [0.0, 0.0, -1.0], [0.0, 1.0]),
        v([ H,  H, -H], [0.0, 0.0, -1.0], [0.0, 0.0]), v([-H,  H, -H], [0.0, 0.0, -1.0], [1.0, 0.0]),
        // left   (x-)
        v([-H, -H, -H], [-1.0, 0.0, 0.0], [0.0, 1.0]), v([-H, -H,  H], [-1.0, 0.0, 0.0], [1.0, 1.0]),
        v([-H,  H,  H], [-1.0, 0.0, 0.0], [1.0, 0.0]), v([-H,  H, -H], [-1.0, 0.0, 0.0], [0.0, 0.0]),
        // right  (x+)
        v([ H, -H, -H], [1.0, 0.0, 0.0], [1.0, 1.0]),  v([ H, -H,  H], [1.0, 0.0, 0.0], [0.0, 1.0]),
        v([ H,  H,  H], [1.0, 0.0, 0.0], [0.0, 0.0]),  v([ H,  H, -H], [1.0, 0.0, 0.0], [1.0, 0.0]),
        // top    (y+)
        v([-H,  H, -H], [0.0, 1.0, 0.0], [0.0, 0.0]),  v([-H,  H,  H], [0.0, 1.0, 0.0], [0.0, 1.0]),
        v([ H,  H,  H], [0.0, 1.0, 0.0], [1.0, 1.0]),  v([ H,  H, -H], [0.0, 1.0, 0.0], [1.0, 0.0]),
        // bottom (y-)
        v([-H, -H, -H], [0.0, -1.0, 0.0], [0.0, 1.0]), v([-H, -H,  H], [0.0, -1.0, 0.0], [0.0, 0.0]),
        v([ H, -H,  H], [0.0, -1.0, 0.0], [1.0, 0.0]), v([ H, -H, -H], [0.0, -1.0, 0.0], [1.0, 1.0]),
    ];

    #[rustfmt::skip]
    let indices: &[u16] = &[
        0,  1,  2,  2,  3,  0,  // front
        4,  6,  5,  4,  7,  6,  // back  (CCW flip)
        8,  9,  10, 8,  10, 11, // left
        12, 14, 13, 12, 15, 14, // right (CCW flip)
        16, 17, 18, 16, 18, 19, // top
        20, 22, 21, 20, 23, 22, // bottom (CCW flip)
    ];

    Mesh {
        vertex_buffer: buffer::create_vertex(device, "Cube VB", vertices),
        index_buffer: buffer::create_index(device, "Cube IB", indices),
        index_count: indices.len() as u32,
        index_format: wgpu::IndexFormat::Uint16,
        support_points: box_corners(Vec3::splat(H)),
    }
}
