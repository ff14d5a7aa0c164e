/// Shared `wgpu::BindGroupLayout` objects used across pipelines.
/// Centralising them here lets every pass create bind groups against the
/// *same* layout objects without re-creating them.
use std::sync::Arc;

/// All bind-group layouts used by the built-in pipelines.
///
/// Created once and shared via `Arc` so individual passes can hold a
/// reference without owning the whole struct.
#[derive(Clone)]
pub struct PipelineLayouts {
    /// group(0) — per-frame view uniform (camera + lights).
    pub view: Arc<wgpu::BindGroupLayout>,
    /// group(1) — batch upload buffers: instance records at binding 0, the
    /// visible-index list at binding 1.
    pub instances: Arc<wgpu::BindGroupLayout>,
    /// group(2) — color texture array + sampler.
    pub material: Arc<wgpu::BindGroupLayout>,
    /// skybox group(1) — dome parameters.
    pub sky: Arc<wgpu::BindGroupLayout>,
    /// post-process group(0) — scene color, sampler, settings.
    pub postprocess: Arc<wgpu::BindGroupLayout>,
}

impl PipelineLayouts {
    pub fn new(device: &wgpu::Device) -> Self {
        let uniform_entry = |binding: u32, visibility: wgpu::ShaderStages| wgpu::BindGroupLayoutEntry {
            binding,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        };

        let view = Arc::new(device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Layout: View"),
                entries: &[uniform_entry(
                    0,
                    wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                )],
            },
        ));

        let instances = Arc::new(device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Layout: Instances"),
                entries: &[
                    uniform_entry(0, wgpu::ShaderStages::VERTEX),
                    uniform_entry(1, wgpu::ShaderStages::VERTEX),
                ],
            },
        ));

        let material = Arc::new(device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Layout: Material"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                            view_dimension: wgpu::TextureViewDimension::D2Array,
                            multisampled: false,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                        count: None,
                    },
                ],
            },
        ));

        let sky = Arc::new(device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Layout: Sky"),
                entries: &[uniform_entry(0, wgpu::ShaderStages::VERTEX)],
            },
        ));

        let postprocess = Arc::new(device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Layout: PostProcess"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                            view_dimension: wgpu::TextureViewDimension::D2,
                            multisampled: false,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                        count: None,
                    },
                    uniform_entry(2, wgpu::ShaderStages::FRAGMENT),
                ],
            },
        ));

        Self {
            view,
            instances,
            material,
            sky,
            postprocess,
        }
    }
}
