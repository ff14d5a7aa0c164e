/// Thin wrappers over `wgpu::Buffer` creation that enforce common usage
/// patterns and remove boilerplate from higher-level modules.
use std::sync::Arc;
use wgpu::util::DeviceExt;

/// Creates a GPU uniform buffer initialised with `data`, wrapped in an `Arc`
/// so ownership can be shared between CPU-side code and the bind groups that
/// reference it.
///
/// `UNIFORM | COPY_DST` is the correct usage combination for a uniform that
/// is rewritten every frame.
pub fn create_uniform<T: bytemuck::Pod>(
    device: &wgpu::Device,
    label: &str,
    data: &T,
) -> Arc<wgpu::Buffer> {
    Arc::new(
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::bytes_of(data),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        }),
    )
}

/// Creates a zero-initialised uniform buffer of `size` bytes.
///
/// Used for the fixed-capacity batch upload buffers, which are partially
/// rewritten each frame: zeroed slack keeps unwritten slots harmless.
pub fn create_uniform_zeroed(device: &wgpu::Device, label: &str, size: u64) -> Arc<wgpu::Buffer> {
    Arc::new(device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    }))
}

/// Creates a GPU vertex buffer from a slice of `Pod` data.
pub fn create_vertex<T: bytemuck::Pod>(
    device: &wgpu::Device,
    label: &str,
    data: &[T],
) -> Arc<wgpu::Buffer> {
    Arc::new(
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(data),
            usage: wgpu::BufferUsages::VERTEX,
        }),
    )
}

/// Creates a GPU index buffer from a slice of `Pod` data (`u16` or `u32`).
pub fn create_index<T: bytemuck::Pod>(
    device: &wgpu::Device,
    label: &str,
    data: &[T],
) -> Arc<wgpu::Buffer> {
    Arc::new(
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(data),
            usage: wgpu::BufferUsages::INDEX,
        }),
    )
}

/// Writes `data` to an existing uniform buffer at offset 0.
pub fn update_uniform<T: bytemuck::Pod>(queue: &wgpu::Queue, buffer: &wgpu::Buffer, data: &T) {
    queue.write_buffer(buffer, 0, bytemuck::bytes_of(data));
}
