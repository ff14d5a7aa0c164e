/// UV sphere primitive.
///
/// Latitude rings from pole to pole, `h_res` segments per ring. The two
/// polar rings emit only one triangle per segment to avoid degenerate
/// quads. Used both for the skybox dome and the light marker.
use glam::Vec3;

use crate::geometry::mesh::{box_corners, Mesh};
use crate::geometry::Vertex;
use crate::resources::buffer;

pub fn sphere(device: &wgpu::Device, h_res: u16, w_res: u16, radius: f32) -> Mesh {
    let mut vertices = Vec::with_capacity(((h_res + 1) * (w_res + 1)) as usize);
    for w in 0..=w_res {
        for h in 0..=h_res {
            let alpha = std::f32::consts::TAU * h as f32 / h_res as f32;
            let beta = std::f32::consts::PI * w as f32 / w_res as f32;
            let dir = Vec3::new(
                beta.sin() * alpha.cos(),
                beta.cos(),
                beta.sin() * alpha.sin(),
            );
            vertices.push(Vertex {
                position: (dir * radius).to_array(),
                normal: dir.to_array(),
                uv: [h as f32 / h_res as f32, w as f32 / w_res as f32],
            });
        }
    }

    let mut indices: Vec<u16> = Vec::new();
    for w in 0..w_res {
        for h in 0..h_res {
            let i = w * (h_res + 1) + h;
            let i_next = i + h_res + 1;
            if w != 0 {
                indices.extend_from_slice(&[i_next + 1, i + 1, i]);
            }
            if w + 1 != w_res {
                indices.extend_from_slice(&[i, i_next, i_next + 1]);
            }
        }
    }

    Mesh {
        vertex_buffer: buffer::create_vertex(device, "Sphere VB", &vertices),
        index_buffer: buffer::create_index(device, "Sphere IB", &indices),
        index_count: indices.len() as u32,
        index_format: wgpu::IndexFormat::Uint16,
        support_points: box_corners(Vec3::splat(radius)),
    }
}
