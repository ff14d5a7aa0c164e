//! `vantage_renderer` — the per-frame culling, batching and draw pipeline.
//!
//! # Module layout
//!
//! | Module          | Responsibility                                        |
//! |-----------------|-------------------------------------------------------|
//! | `context`       | Explicit wgpu instance/adapter/device ownership       |
//! | `resources`     | Buffer/texture helpers, batch upload buffers          |
//! | `geometry`      | `Vertex`, `Mesh`, built-in primitives                 |
//! | `scene`         | Collections, instances, culling, compaction, sorting  |
//! | `view`          | Per-frame camera + light uniform                      |
//! | `pipeline`      | Bind-group layouts + compiled pipelines               |
//! | `render_target` | Off-screen color + depth targets                      |
//! | `graph`         | `RenderPass` trait + `FramePacket`                    |
//! | `passes`        | World, skybox, transparent and post-process passes    |
//!
//! # Frame anatomy
//!
//! `render` derives the frustum from the camera, culls every collection's
//! instances against it, compacts the survivors into per-batch index lists
//! (transparent collections are additionally depth-sorted back-to-front),
//! uploads the packed records, and hands fully resolved [`BatchCommand`]s to
//! the passes — one instanced draw per batch.

pub mod context;
pub mod geometry;
pub mod graph;
pub mod passes;
pub mod pipeline;
pub mod render_target;
pub mod resources;
pub mod scene;
pub mod view;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use context::{ContextError, RenderContext};
pub use geometry::{Mesh, Vertex};
pub use graph::{BatchCommand, FramePacket, RenderPass};
pub use render_target::RenderTarget;
pub use resources::MAX_BATCH_INSTANCES;
pub use scene::{Blend, Material, ObjectCollection};
pub use view::{Light, MAX_LIGHTS};

pub use glam;

// ── Internal imports ──────────────────────────────────────────────────────────

use glam::Vec4;
use thiserror::Error;

use vantage_core::{Camera, OverflowPolicy, RendererConfig};

use graph::CameraPacket;
use passes::{PostProcessPass, SkyboxPass, TransparentPass, WorldPass};
use pipeline::{PipelineLayouts, PostProcessPipeline, SkyboxPipeline, WorldPipeline};
use resources::InstanceBuffer;
use scene::compact::BatchSlice;
use scene::culling::Frustum;
use scene::instance::InstanceRecord;
use scene::sort::{apply_order, sort_back_to_front};
use scene::{compact, compact_windows};
use view::GpuView;

// ── Frame errors ──────────────────────────────────────────────────────────────

/// A frame that could not be presented. The caller simply skips the frame;
/// the next loop iteration starts over with fresh input.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("failed to acquire the surface frame: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}

// ── Post-processing selection ─────────────────────────────────────────────────

/// Which full-screen transform the final pass applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostEffect {
    Passthrough,
    Grayscale,
}

// ── Collection handles ────────────────────────────────────────────────────────

/// Stable handle to a collection registered with [`Renderer::add_collection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionId(usize);

/// A collection paired with its GPU upload buffers.
struct CollectionSlot {
    data: ObjectCollection,
    buffers: InstanceBuffer,
}

// ── Renderer ──────────────────────────────────────────────────────────────────

/// Top-level renderer.
///
/// Owns the GPU context, the off-screen target, the scene collections and
/// the ordered pass list. Explicitly constructed and passed by reference —
/// there is no global instance.
pub struct Renderer {
    pub context: RenderContext,
    config: RendererConfig,
    render_target: RenderTarget,
    layouts: PipelineLayouts,

    // ── Per-frame inputs ──────────────────────────────────────────────────
    pub camera: Camera,
    pub lights: Vec<Light>,
    pub ambient: Vec4,
    pub post_effect: PostEffect,

    // ── Scene ─────────────────────────────────────────────────────────────
    gpu_view: GpuView,
    collections: Vec<CollectionSlot>,

    /// Ordered list of passes executed every frame.
    passes: Vec<Box<dyn RenderPass>>,

    width: u32,
    height: u32,
}

impl Renderer {
    /// Creates a renderer targeting `format` at the given resolution.
    ///
    /// Config limits above the shader-side array bounds are clamped here,
    /// once, with a warning.
    pub fn new(
        context: RenderContext,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
        mut config: RendererConfig,
    ) -> Self {
        if config.max_instances > MAX_BATCH_INSTANCES {
            log::warn!(
                "max_instances {} exceeds the shader bound {}; clamping",
                config.max_instances,
                MAX_BATCH_INSTANCES
            );
            config.max_instances = MAX_BATCH_INSTANCES;
        }
        if config.max_lights > MAX_LIGHTS {
            log::warn!(
                "max_lights {} exceeds the shader bound {}; clamping",
                config.max_lights,
                MAX_LIGHTS
            );
            config.max_lights = MAX_LIGHTS;
        }

        let device = context.device.clone();
        let queue = context.queue.clone();

        let render_target = RenderTarget::new(&device, width, height, format);
        let layouts = PipelineLayouts::new(&device);
        let gpu_view = GpuView::new(&device, &layouts.view);
        let camera = Camera::with_config(&config, height as f32 / width as f32);

        // Shared material bindings (procedural stand-ins for asset textures).
        let (_texture, texture_view) = resources::texture::create_color_array(&device, &queue);
        let sampler = resources::texture::create_repeat_sampler(&device);
        let material_bind_group = std::sync::Arc::new(device.create_bind_group(
            &wgpu::BindGroupDescriptor {
                label: Some("Material Bind Group"),
                layout: &layouts.material,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(&texture_view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(&sampler),
                    },
                ],
            },
        ));

        // Built-in passes, in draw order.
        let world_pipeline = WorldPipeline::new(&device, format, &layouts, Blend::Opaque);
        let transparent_pipeline = WorldPipeline::new(&device, format, &layouts, Blend::Transparent);
        let skybox_pipeline = SkyboxPipeline::new(&device, format, &layouts);
        let postprocess_pipeline = PostProcessPipeline::new(&device, format, &layouts);

        let world_pass = WorldPass::new(
            world_pipeline,
            gpu_view.bind_group.clone(),
            material_bind_group.clone(),
        );
        let skybox_pass = SkyboxPass::new(
            &device,
            skybox_pipeline,
            gpu_view.bind_group.clone(),
            &layouts.sky,
            geometry::primitives::sphere(&device, 16, 16, 1.0),
        );
        let transparent_pass = TransparentPass::new(
            transparent_pipeline,
            gpu_view.bind_group.clone(),
            material_bind_group,
        );
        let postprocess_pass =
            PostProcessPass::new(&device, postprocess_pipeline, layouts.postprocess.clone());

        let mut passes: Vec<Box<dyn RenderPass>> = vec![
            Box::new(world_pass),
            Box::new(skybox_pass),
            Box::new(transparent_pass),
            Box::new(postprocess_pass),
        ];
        for pass in &mut passes {
            pass.rebind(&device, &render_target);
        }

        Self {
            context,
            config,
            render_target,
            layouts,
            camera,
            lights: Vec::new(),
            ambient: Vec4::new(0.1, 0.1, 0.1, 1.0),
            post_effect: PostEffect::Passthrough,
            gpu_view,
            collections: Vec::new(),
            passes,
            width,
            height,
        }
    }

    #[inline]
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    // ── Frame API ─────────────────────────────────────────────────────────────

    /// Allocates a fresh `CommandEncoder` for the current frame.
    pub fn begin_frame(&self) -> wgpu::CommandEncoder {
        self.context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            })
    }

    /// Culls, batches and records the whole frame into `encoder`, with
    /// `dest_view` (normally the surface frame) as the final destination.
    ///
    /// Instance transforms must be up to date before this runs — AABBs are
    /// refreshed on `set_transform`, and culling reads the cached boxes.
    pub fn render(&mut self, encoder: &mut wgpu::CommandEncoder, dest_view: &wgpu::TextureView) {
        // 1. Upload camera + lights.
        self.gpu_view.sync(
            &self.context.queue,
            &self.camera,
            &self.lights,
            self.ambient,
            self.config.max_lights,
        );

        // 2. Cull and upload batches (pure CPU work + buffer writes).
        let packet = self.build_packet();

        // 3. Per-pass upload, then recording.
        for pass in &mut self.passes {
            pass.prepare(&self.context.queue, &packet);
        }
        for pass in &mut self.passes {
            pass.execute(encoder, &self.render_target, dest_view, &packet);
        }
    }

    // ── Scene management ──────────────────────────────────────────────────────

    /// Registers a collection of instances sharing `mesh` and one pipeline
    /// kind; returns its stable handle.
    pub fn add_collection(&mut self, mesh: Mesh, blend: Blend) -> CollectionId {
        let buffers = InstanceBuffer::new(&self.context.device, &self.layouts.instances);
        self.collections.push(CollectionSlot {
            data: ObjectCollection::new(mesh, blend),
            buffers,
        });
        CollectionId(self.collections.len() - 1)
    }

    /// Mutable access to a collection's instances.
    pub fn collection_mut(&mut self, id: CollectionId) -> Option<&mut ObjectCollection> {
        self.collections.get_mut(id.0).map(|slot| &mut slot.data)
    }

    // ── Resize ────────────────────────────────────────────────────────────────

    /// Recreates size-dependent GPU resources when the window changes size.
    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if (new_width, new_height) == (self.width, self.height)
            || new_width == 0
            || new_height == 0
        {
            return;
        }
        self.width = new_width;
        self.height = new_height;
        self.render_target
            .resize(&self.context.device, new_width, new_height);
        self.camera
            .set_aspect(new_height as f32 / new_width as f32);
        for pass in &mut self.passes {
            pass.rebind(&self.context.device, &self.render_target);
        }
    }

    // ── Private helpers ───────────────────────────────────────────────────────

    /// Builds the frame packet: frustum derivation, per-collection culling,
    /// transparency ordering and batch uploads.
    fn build_packet(&mut self) -> FramePacket {
        let frustum = Frustum::from_camera(&self.camera);
        let capacity = self.config.max_instances;
        let device = &self.context.device;
        let queue = &self.context.queue;

        let mut opaque = Vec::new();
        let mut transparent = Vec::new();

        for (idx, slot) in self.collections.iter_mut().enumerate() {
            let data = &slot.data;
            if data.is_empty() {
                continue;
            }
            let instances = data.instances();

            // Per-batch record + index lists, per blend kind and policy.
            let batches: Vec<(Vec<InstanceRecord>, Vec<u32>)> = match data.blend {
                Blend::Opaque => {
                    let slices = match self.config.overflow {
                        OverflowPolicy::Truncate => {
                            if instances.len() > capacity {
                                log::warn!(
                                    "collection {idx}: {} instances exceed the {capacity}-instance \
                                     batch capacity; overflow truncated",
                                    instances.len()
                                );
                            }
                            vec![BatchSlice {
                                start: 0,
                                indices: compact(instances, &frustum, capacity),
                            }]
                        }
                        OverflowPolicy::Split => compact_windows(instances, &frustum, capacity),
                    };
                    // Records in storage order per window; the index list
                    // addresses them by window-relative instance index.
                    slices
                        .into_iter()
                        .filter(|s| !s.indices.is_empty())
                        .map(|s| {
                            let end = (s.start + capacity).min(instances.len());
                            let records =
                                instances[s.start..end].iter().map(|i| i.record()).collect();
                            (records, s.indices)
                        })
                        .collect()
                }
                Blend::Transparent => {
                    // Cull, then draw the survivors farthest-first. Records
                    // are packed in draw order, so the index list is the
                    // identity over each batch.
                    let visible = match self.config.overflow {
                        OverflowPolicy::Truncate => {
                            if instances.len() > capacity {
                                log::warn!(
                                    "collection {idx}: {} instances exceed the {capacity}-instance \
                                     batch capacity; overflow truncated",
                                    instances.len()
                                );
                            }
                            compact(instances, &frustum, capacity)
                        }
                        OverflowPolicy::Split => compact(instances, &frustum, usize::MAX),
                    };
                    let order = sort_back_to_front(instances, &self.camera.transform);
                    let ordered = apply_order(&visible, &order);
                    ordered
                        .chunks(capacity.max(1))
                        .map(|chunk| {
                            let records = chunk
                                .iter()
                                .map(|&i| instances[i as usize].record())
                                .collect();
                            let indices = (0..chunk.len() as u32).collect();
                            (records, indices)
                        })
                        .collect()
                }
            };

            if batches.is_empty() {
                // Nothing visible — no draw for this collection this frame.
                continue;
            }

            slot.buffers
                .ensure_chunks(device, &self.layouts.instances, batches.len());
            for (chunk, (records, indices)) in batches.into_iter().enumerate() {
                let instance_count = indices.len() as u32;
                slot.buffers.write(queue, chunk, &records, &indices);
                let cmd = BatchCommand {
                    vertex_buffer: data.mesh.vertex_buffer.clone(),
                    index_buffer: data.mesh.index_buffer.clone(),
                    index_count: data.mesh.index_count,
                    index_format: data.mesh.index_format,
                    instance_count,
                    instance_bind_group: slot.buffers.bind_group(chunk),
                };
                match data.blend {
                    Blend::Opaque => opaque.push(cmd),
                    Blend::Transparent => transparent.push(cmd),
                }
            }
        }

        // Dome radius just past the near-plane corners.
        let (hw, hh) = self.camera.half_extents(self.camera.znear);
        let skybox_scale = (self.camera.znear * self.camera.znear + hw * hw + hh * hh).sqrt() * 1.1;

        FramePacket {
            camera: CameraPacket {
                view_proj: self.camera.view_projection(),
                eye: self.camera.position(),
            },
            opaque,
            transparent,
            skybox_scale,
            grayscale: self.post_effect == PostEffect::Grayscale,
        }
    }
}
