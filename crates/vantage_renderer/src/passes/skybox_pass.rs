/// Skybox pass.
///
/// Draws a camera-centred sphere sized just past the near plane, with depth
/// pinned to the far value in the shader, after the opaque world — so only
/// uncovered background pixels get shaded. The dome radius is recomputed
/// per frame from the current projection and delivered through a small
/// uniform.
use std::sync::Arc;

use wgpu::{
    CommandEncoder, LoadOp, Operations, Queue, RenderPassColorAttachment,
    RenderPassDepthStencilAttachment, RenderPassDescriptor, StoreOp, TextureView,
};

use crate::geometry::Mesh;
use crate::graph::{FramePacket, RenderPass};
use crate::pipeline::SkyboxPipeline;
use crate::render_target::RenderTarget;
use crate::resources::buffer;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SkyParams {
    /// `x` = dome radius; `yzw` padding.
    scale: [f32; 4],
}

pub struct SkyboxPass {
    pipeline: SkyboxPipeline,
    view_bind_group: Arc<wgpu::BindGroup>,
    dome: Mesh,
    params_buffer: Arc<wgpu::Buffer>,
    params_bind_group: Arc<wgpu::BindGroup>,
}

impl SkyboxPass {
    pub fn new(
        device: &wgpu::Device,
        pipeline: SkyboxPipeline,
        view_bind_group: Arc<wgpu::BindGroup>,
        sky_layout: &wgpu::BindGroupLayout,
        dome: Mesh,
    ) -> Self {
        let params = SkyParams {
            scale: [1.0, 0.0, 0.0, 0.0],
        };
        let params_buffer = buffer::create_uniform(device, "Sky Params", &params);
        let params_bind_group = Arc::new(device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Sky Params Bind Group"),
            layout: sky_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: params_buffer.as_entire_binding(),
            }],
        }));
        Self {
            pipeline,
            view_bind_group,
            dome,
            params_buffer,
            params_bind_group,
        }
    }
}

impl RenderPass for SkyboxPass {
    fn name(&self) -> &str {
        "Skybox Pass"
    }

    fn prepare(&mut self, queue: &Queue, packet: &FramePacket) {
        let params = SkyParams {
            scale: [packet.skybox_scale, 0.0, 0.0, 0.0],
        };
        buffer::update_uniform(queue, &self.params_buffer, &params);
    }

    fn execute(
        &mut self,
        encoder: &mut CommandEncoder,
        target: &RenderTarget,
        _dest_view: &TextureView,
        _packet: &FramePacket,
    ) {
        let mut rpass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some(self.name()),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: target.color_view(),
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Load,
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(RenderPassDepthStencilAttachment {
                view: target.depth_view(),
                depth_ops: Some(Operations {
                    load: LoadOp::Load,
                    store: StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        rpass.set_pipeline(&self.pipeline.inner);
        rpass.set_bind_group(0, &*self.view_bind_group, &[]);
        rpass.set_bind_group(1, &*self.params_bind_group, &[]);
        rpass.set_vertex_buffer(0, self.dome.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.dome.index_buffer.slice(..), self.dome.index_format);
        rpass.draw_indexed(0..self.dome.index_count, 0, 0..1);
    }
}
