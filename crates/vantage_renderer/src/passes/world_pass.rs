/// Opaque world geometry pass.
///
/// Clears color + depth, binds the view and material groups once, then
/// emits one instanced draw per opaque batch in the `FramePacket`.
use std::sync::Arc;

use wgpu::{
    Color, CommandEncoder, LoadOp, Operations, RenderPassColorAttachment,
    RenderPassDepthStencilAttachment, RenderPassDescriptor, StoreOp, TextureView,
};

use crate::graph::{FramePacket, RenderPass};
use crate::pipeline::WorldPipeline;
use crate::render_target::RenderTarget;

pub struct WorldPass {
    pipeline: WorldPipeline,
    view_bind_group: Arc<wgpu::BindGroup>,
    material_bind_group: Arc<wgpu::BindGroup>,
    /// Sky / clear color behind everything.
    pub clear_color: Color,
}

impl WorldPass {
    pub fn new(
        pipeline: WorldPipeline,
        view_bind_group: Arc<wgpu::BindGroup>,
        material_bind_group: Arc<wgpu::BindGroup>,
    ) -> Self {
        Self {
            pipeline,
            view_bind_group,
            material_bind_group,
            clear_color: Color {
                r: 0.3,
                g: 0.2,
                b: 0.8,
                a: 1.0,
            },
        }
    }
}

impl RenderPass for WorldPass {
    fn name(&self) -> &str {
        "World Opaque Pass"
    }

    fn execute(
        &mut self,
        encoder: &mut CommandEncoder,
        target: &RenderTarget,
        _dest_view: &TextureView,
        packet: &FramePacket,
    ) {
        let mut rpass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some(self.name()),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: target.color_view(),
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(self.clear_color),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(RenderPassDepthStencilAttachment {
                view: target.depth_view(),
                depth_ops: Some(Operations {
                    load: LoadOp::Clear(1.0),
                    store: StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        rpass.set_pipeline(&self.pipeline.inner);
        rpass.set_bind_group(0, &*self.view_bind_group, &[]);
        rpass.set_bind_group(2, &*self.material_bind_group, &[]);

        for cmd in &packet.opaque {
            rpass.set_bind_group(1, &*cmd.instance_bind_group, &[]);
            rpass.set_vertex_buffer(0, cmd.vertex_buffer.slice(..));
            rpass.set_index_buffer(cmd.index_buffer.slice(..), cmd.index_format);
            rpass.draw_indexed(0..cmd.index_count, 0, 0..cmd.instance_count);
        }
    }
}
