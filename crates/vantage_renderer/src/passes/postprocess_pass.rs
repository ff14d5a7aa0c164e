/// Post-process pass — the only stage that touches the final destination.
///
/// Samples the off-screen scene color with a full-screen triangle and
/// writes it to `dest_view`, optionally converting to grayscale. The bind
/// group references the scene color view, so it is rebuilt whenever the
/// render target is recreated.
use std::sync::Arc;

use wgpu::{
    CommandEncoder, Device, LoadOp, Operations, Queue, RenderPassColorAttachment,
    RenderPassDescriptor, StoreOp, TextureView,
};

use crate::graph::{FramePacket, RenderPass};
use crate::pipeline::PostProcessPipeline;
use crate::render_target::RenderTarget;
use crate::resources::buffer;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct PostSettings {
    /// `x` = 1 for grayscale, 0 for passthrough; `yzw` padding.
    mode: [u32; 4],
}

pub struct PostProcessPass {
    pipeline: PostProcessPipeline,
    layout: Arc<wgpu::BindGroupLayout>,
    sampler: wgpu::Sampler,
    settings_buffer: Arc<wgpu::Buffer>,
    /// Rebuilt in `rebind`; `None` only before the first rebind.
    bind_group: Option<wgpu::BindGroup>,
}

impl PostProcessPass {
    pub fn new(
        device: &Device,
        pipeline: PostProcessPipeline,
        layout: Arc<wgpu::BindGroupLayout>,
    ) -> Self {
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("PostProcess Sampler"),
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let settings_buffer =
            buffer::create_uniform(device, "PostProcess Settings", &PostSettings { mode: [0; 4] });
        Self {
            pipeline,
            layout,
            sampler,
            settings_buffer,
            bind_group: None,
        }
    }
}

impl RenderPass for PostProcessPass {
    fn name(&self) -> &str {
        "PostProcess Pass"
    }

    fn rebind(&mut self, device: &Device, target: &RenderTarget) {
        self.bind_group = Some(device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("PostProcess Bind Group"),
            layout: &self.layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(target.color_view()),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: self.settings_buffer.as_entire_binding(),
                },
            ],
        }));
    }

    fn prepare(&mut self, queue: &Queue, packet: &FramePacket) {
        let settings = PostSettings {
            mode: [packet.grayscale as u32, 0, 0, 0],
        };
        buffer::update_uniform(queue, &self.settings_buffer, &settings);
    }

    fn execute(
        &mut self,
        encoder: &mut CommandEncoder,
        _target: &RenderTarget,
        dest_view: &TextureView,
        _packet: &FramePacket,
    ) {
        let Some(bind_group) = &self.bind_group else {
            log::warn!("post-process pass executed before rebind; skipping");
            return;
        };

        let mut rpass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some(self.name()),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: dest_view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(wgpu::Color::BLACK),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        rpass.set_pipeline(&self.pipeline.inner);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.draw(0..3, 0..1);
    }
}
