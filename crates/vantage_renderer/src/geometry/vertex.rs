/// GPU vertex type shared by the world, transparent and skybox pipelines.
///
/// Position, normal and texture coordinates are contiguous `f32` fields so
/// `bytemuck` can reinterpret vertex slices as bytes. Attribute locations
/// match `assets/shaders/world.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Object-space surface normal.
    pub normal: [f32; 3],
    /// Texture coordinates.
    pub uv: [f32; 2],
}

impl Vertex {
    /// Returns the `VertexBufferLayout` matching this struct's memory layout.
    pub fn layout<'a>() -> wgpu::VertexBufferLayout<'a> {
        const F32X3: u64 = std::mem::size_of::<[f32; 3]>() as u64;
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // @location(0) position
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                // @location(1) normal
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: F32X3,
                    shader_location: 1,
                },
                // @location(2) uv
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: F32X3 * 2,
                    shader_location: 2,
                },
            ],
        }
    }
}
