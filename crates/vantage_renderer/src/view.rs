/// GPU-side view resources: the per-frame uniform holding the camera and
/// the light set, plus its bind group (group 0 everywhere).
///
/// Lights are a dynamically sized sequence on the CPU side; the uniform
/// carries a fixed array of [`MAX_LIGHTS`] and a count, and `sync` truncates
/// to the configured per-frame maximum.
use std::sync::Arc;

use bytemuck::Zeroable;
use glam::{Vec3, Vec4};

use vantage_core::Camera;

use crate::resources::buffer;

/// Shader-side bound of the light array; `RendererConfig::max_lights` is
/// clamped to this. Must match `world.wgsl`.
pub const MAX_LIGHTS: usize = 10;

/// A point light.
#[derive(Debug, Clone, Copy)]
pub struct Light {
    pub position: Vec3,
    /// Linear RGB intensity (unnormalized — doubles as brightness).
    pub color: Vec3,
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct GpuLight {
    position: [f32; 4],
    color: [f32; 4],
}

/// Uniform data uploaded once per frame, shared by every pipeline.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ViewUniform {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    ambient: [f32; 4],
    light_count: [u32; 4],
    lights: [GpuLight; MAX_LIGHTS],
}

pub struct GpuView {
    uniform: ViewUniform,
    buffer: Arc<wgpu::Buffer>,
    pub bind_group: Arc<wgpu::BindGroup>,
}

impl GpuView {
    /// Allocates the uniform buffer and its bind group. `layout` must have a
    /// single `UNIFORM` entry at binding 0.
    pub fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout) -> Self {
        let uniform = ViewUniform::zeroed();
        let buffer = buffer::create_uniform(device, "View Uniform Buffer", &uniform);
        let bind_group = Arc::new(device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("View Bind Group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        }));
        Self {
            uniform,
            buffer,
            bind_group,
        }
    }

    /// Uploads the camera and light state for this frame. `max_lights` is
    /// the configured per-frame limit; lights beyond it are not uploaded.
    pub fn sync(
        &mut self,
        queue: &wgpu::Queue,
        camera: &Camera,
        lights: &[Light],
        ambient: Vec4,
        max_lights: usize,
    ) {
        self.uniform.view_proj = camera.view_projection().to_cols_array_2d();
        self.uniform.camera_pos = camera.position().extend(1.0).to_array();
        self.uniform.ambient = ambient.to_array();

        let count = lights.len().min(max_lights).min(MAX_LIGHTS);
        self.uniform.light_count = [count as u32, 0, 0, 0];
        for (slot, light) in self.uniform.lights.iter_mut().zip(lights.iter().take(count)) {
            *slot = GpuLight {
                position: light.position.extend(1.0).to_array(),
                color: light.color.extend(1.0).to_array(),
            };
        }

        buffer::update_uniform(queue, &self.buffer, &self.uniform);
    }
}
