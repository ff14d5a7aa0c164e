/// The `RenderPass` trait — every stage of the frame implements this.
///
/// ## Two-phase design
/// `prepare` → `execute` lets passes upload GPU data **before** a
/// `wgpu::RenderPass` is recording, which is required because buffer writes
/// are not allowed mid-pass.
///
/// ## Target rebinding
/// Passes that sample the off-screen target (post-processing) recreate
/// their bind groups in `rebind`, called at construction time and whenever
/// the render target is recreated on resize.
use wgpu::{CommandEncoder, Device, Queue, TextureView};

use crate::graph::FramePacket;
use crate::render_target::RenderTarget;

pub trait RenderPass: Send + Sync + 'static {
    /// Short human-readable label used as the wgpu debug label.
    fn name(&self) -> &str;

    /// Re-acquire target-dependent resources. Default: nothing to rebind.
    #[allow(unused_variables)]
    fn rebind(&mut self, device: &Device, target: &RenderTarget) {}

    /// Upload per-frame GPU data. Called before any `execute` runs.
    #[allow(unused_variables)]
    fn prepare(&mut self, queue: &Queue, packet: &FramePacket) {}

    /// Record draw commands into `encoder`.
    ///
    /// - `target`    — the off-screen scene target (color + depth)
    /// - `dest_view` — the final destination (normally the surface frame)
    fn execute(
        &mut self,
        encoder: &mut CommandEncoder,
        target: &RenderTarget,
        dest_view: &TextureView,
        packet: &FramePacket,
    );
}
