/// Per-collection batch upload buffers.
///
/// ## Layout
///
/// Each chunk pairs two fixed-capacity uniform arrays, mirroring what the
/// world shader declares:
///
/// - **records** — `array<InstanceRecord, MAX_BATCH_INSTANCES>`, one packed
///   transform/material record per slot;
/// - **visible** — `array<vec4<u32>, MAX_BATCH_INSTANCES>`, the compacted
///   index list; the shader reads `slots[instance_index].x` and uses it to
///   address the record array.
///
/// The `vec4<u32>` stride keeps the uniform-array element alignment rules
/// satisfied while carrying a single index per slot.
///
/// A collection normally owns one chunk; under
/// [`OverflowPolicy::Split`](vantage_core::OverflowPolicy) further chunks
/// are allocated lazily so each window of the collection gets its own pair
/// of buffers — `wgpu` forbids rewriting one buffer between draws that were
/// recorded into the same submission.
use std::sync::Arc;

use crate::scene::InstanceRecord;

/// Shader-side bound of both uniform arrays. `RendererConfig::max_instances`
/// is clamped to this; raising it requires touching `world.wgsl` too.
pub const MAX_BATCH_INSTANCES: usize = 100;

const RECORD_BYTES: u64 = std::mem::size_of::<InstanceRecord>() as u64;
const SLOT_BYTES: u64 = std::mem::size_of::<[u32; 4]>() as u64;

struct Chunk {
    records: Arc<wgpu::Buffer>,
    visible: Arc<wgpu::Buffer>,
    bind_group: Arc<wgpu::BindGroup>,
}

pub struct InstanceBuffer {
    chunks: Vec<Chunk>,
}

impl InstanceBuffer {
    /// Creates the buffer with its first chunk.
    ///
    /// `layout` must be the instances bind-group layout (two uniform
    /// entries at bindings 0 and 1).
    pub fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout) -> Self {
        Self {
            chunks: vec![Self::create_chunk(device, layout, 0)],
        }
    }

    /// Makes sure at least `needed` chunks exist, allocating lazily.
    pub fn ensure_chunks(
        &mut self,
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        needed: usize,
    ) {
        while self.chunks.len() < needed {
            let idx = self.chunks.len();
            log::debug!("allocating instance buffer chunk {idx}");
            self.chunks.push(Self::create_chunk(device, layout, idx));
        }
    }

    /// Uploads one batch into chunk `chunk`: the packed records and the
    /// visible-index list the draw will walk.
    ///
    /// Both slices must fit the fixed capacity; callers enforce this through
    /// compaction, so exceeding it here is a programming error.
    pub fn write(
        &self,
        queue: &wgpu::Queue,
        chunk: usize,
        records: &[InstanceRecord],
        visible: &[u32],
    ) {
        debug_assert!(records.len() <= MAX_BATCH_INSTANCES);
        debug_assert!(visible.len() <= MAX_BATCH_INSTANCES);
        let c = &self.chunks[chunk];
        if !records.is_empty() {
            queue.write_buffer(&c.records, 0, bytemuck::cast_slice(records));
        }
        if !visible.is_empty() {
            let slots: Vec<[u32; 4]> = visible.iter().map(|&i| [i, 0, 0, 0]).collect();
            queue.write_buffer(&c.visible, 0, bytemuck::cast_slice(&slots));
        }
    }

    /// Bind group for chunk `chunk` (group 1 of the world pipelines).
    #[inline]
    pub fn bind_group(&self, chunk: usize) -> Arc<wgpu::BindGroup> {
        self.chunks[chunk].bind_group.clone()
    }

    // ── Private helpers ──────────────────────────────────────────────────────

    fn create_chunk(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, idx: usize) -> Chunk {
        let records = super::buffer::create_uniform_zeroed(
            device,
            &format!("Instance Records [{idx}]"),
            MAX_BATCH_INSTANCES as u64 * RECORD_BYTES,
        );
        let visible = super::buffer::create_uniform_zeroed(
            device,
            &format!("Visible Indices [{idx}]"),
            MAX_BATCH_INSTANCES as u64 * SLOT_BYTES,
        );
        let bind_group = Arc::new(device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Instance BindGroup"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: records.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: visible.as_entire_binding(),
                },
            ],
        }));
        Chunk {
            records,
            visible,
            bind_group,
        }
    }
}
