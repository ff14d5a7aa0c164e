/// Data bundle assembled once per frame and passed immutably to every
/// `RenderPass`.
///
/// Building a `FramePacket` on the CPU side decouples culling and batching
/// from the GPU passes: passes only see fully resolved batches, not how the
/// scene is structured.
use std::sync::Arc;

use glam::{Mat4, Vec3};

// ── Camera ────────────────────────────────────────────────────────────────────

/// Snapshot of camera state for a single frame.
pub struct CameraPacket {
    pub view_proj: Mat4,
    pub eye: Vec3,
}

// ── Batches ───────────────────────────────────────────────────────────────────

/// One instanced draw, fully resolved to GPU handles.
///
/// `instance_count` equals the compacted visible count for the batch; the
/// bind group carries the packed records and the visible-index list the
/// shader walks.
pub struct BatchCommand {
    pub vertex_buffer: Arc<wgpu::Buffer>,
    pub index_buffer: Arc<wgpu::Buffer>,
    pub index_count: u32,
    pub index_format: wgpu::IndexFormat,
    pub instance_count: u32,
    /// Batch upload buffers (group 1).
    pub instance_bind_group: Arc<wgpu::BindGroup>,
}

// ── Frame packet ──────────────────────────────────────────────────────────────

/// All data the passes need for one frame.
pub struct FramePacket {
    pub camera: CameraPacket,
    /// Opaque batches, collection order.
    pub opaque: Vec<BatchCommand>,
    /// Transparent batches, already back-to-front within each collection.
    pub transparent: Vec<BatchCommand>,
    /// World-space radius of the skybox dome for this frame's projection.
    pub skybox_scale: f32,
    /// Grayscale post-process toggle.
    pub grayscale: bool,
}
