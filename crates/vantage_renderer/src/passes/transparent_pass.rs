/// Transparent geometry pass.
///
/// Runs after the opaque world and the skybox so blending composites over a
/// complete background. Batches arrive already back-to-front; the pipeline
/// leaves depth read-only, so the order cannot corrupt the depth buffer.
use std::sync::Arc;

use wgpu::{
    CommandEncoder, LoadOp, Operations, RenderPassColorAttachment,
    RenderPassDepthStencilAttachment, RenderPassDescriptor, StoreOp, TextureView,
};

use crate::graph::{FramePacket, RenderPass};
use crate::pipeline::WorldPipeline;
use crate::render_target::RenderTarget;

pub struct TransparentPass {
    pipeline: WorldPipeline,
    view_bind_group: Arc<wgpu::BindGroup>,
    material_bind_group: Arc<wgpu::BindGroup>,
}

impl TransparentPass {
    pub fn new(
        pipeline: WorldPipeline,
        view_bind_group: Arc<wgpu::BindGroup>,
        material_bind_group: Arc<wgpu::BindGroup>,
    ) -> Self {
        Self {
            pipeline,
            view_bind_group,
            material_bind_group,
        }
    }
}

impl RenderPass for TransparentPass {
    fn name(&self) -> &str {
        "World Transparent Pass"
    }

    fn execute(
        &mut self,
        encoder: &mut CommandEncoder,
        target: &RenderTarget,
        _dest_view: &TextureView,
        packet: &FramePacket,
    ) {
        if packet.transparent.is_empty() {
            return;
        }

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
        rpass.set_bind_group(2, &*self.material_bind_group, &[]);

        for cmd in &packet.transparent {
            rpass.set_bind_group(1, &*cmd.instance_bind_group, &[]);
            rpass.set_vertex_buffer(0, cmd.vertex_buffer.slice(..));
            rpass.set_index_buffer(cmd.index_buffer.slice(..), cmd.index_format);
            rpass.draw_indexed(0..cmd.index_count, 0, 0..cmd.instance_count);
        }
    }
}
