/// The instanced world pipeline, built in two flavors from one shader.
///
/// Opaque and transparent geometry share `assets/shaders/world.wgsl` and the
/// same bind-group interface; only the blend state, depth write and color
/// mask differ. Building both from the same constructor keeps the two
/// "stages" one component instead of parallel code paths.
use std::sync::Arc;

use crate::geometry::Vertex;
use crate::pipeline::PipelineLayouts;
use crate::render_target::DEPTH_FORMAT;
use crate::scene::Blend;

#[derive(Clone)]
pub struct WorldPipeline {
    pub inner: Arc<wgpu::RenderPipeline>,
    pub blend: Blend,
}

impl WorldPipeline {
    /// Compiles and links the world shader for `target_format` with the
    /// blend/depth configuration of `blend`.
    pub fn new(
        device: &wgpu::Device,
        target_format: wgpu::TextureFormat,
        layouts: &PipelineLayouts,
        blend: Blend,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::include_wgsl!(
            "../../../../assets/shaders/world.wgsl"
        ));

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("World Pipeline Layout"),
            bind_group_layouts: &[&layouts.view, &layouts.instances, &layouts.material],
            push_constant_ranges: &[],
        });

        let (label, blend_state, write_mask, depth_write) = match blend {
            Blend::Opaque => (
                "World Pipeline (opaque)",
                wgpu::BlendState::REPLACE,
                wgpu::ColorWrites::ALL,
                true,
            ),
            // Alpha compositing over the existing color; depth is read-only
            // so the back-to-front order cannot corrupt the depth buffer.
            Blend::Transparent => (
                "World Pipeline (transparent)",
                wgpu::BlendState::ALPHA_BLENDING,
                wgpu::ColorWrites::COLOR,
                false,
            ),
        };

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: Some(blend_state),
                    write_mask,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: depth_write,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            inner: Arc::new(pipeline),
            blend,
        }
    }
}
