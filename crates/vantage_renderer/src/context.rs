/// The explicitly constructed GPU context.
///
/// Holds the wgpu instance, the selected adapter and the device/queue pair.
/// There is no global accessor: whoever creates the context owns it and
/// hands references down, and all GPU objects created from it are released
/// by normal drop order at teardown.
use std::sync::Arc;

use anyhow::Context as _;
use thiserror::Error;

pub struct RenderContext {
    pub instance: wgpu::Instance,
    pub adapter: wgpu::Adapter,
    /// `Arc` so long-lived resources can hold the device across threads.
    pub device: Arc<wgpu::Device>,
    pub queue: Arc<wgpu::Queue>,
}

#[derive(Debug, Error)]
pub enum ContextError {
    #[error("no suitable graphics adapter available")]
    AdapterUnavailable,
    #[error("device request failed: {0}")]
    DeviceRequest(String),
}

impl RenderContext {
    /// Creates a headless context (no surface) — enough for render-to-texture
    /// use and tests.
    pub async fn new() -> anyhow::Result<Self> {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        Self::new_with_instance(instance, None).await
    }

    /// Creates a context reusing an existing `Instance`, optionally tied to a
    /// surface so the selected adapter is guaranteed compatible with the
    /// window (avoids cross-GPU presentation paths on multi-GPU systems).
    pub async fn new_with_instance(
        instance: wgpu::Instance,
        compatible_surface: Option<&wgpu::Surface<'_>>,
    ) -> anyhow::Result<Self> {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface,
                force_fallback_adapter: false,
            })
            .await
            .context(ContextError::AdapterUnavailable)?;

        let info = adapter.get_info();
        log::info!("selected adapter: {} ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Render Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    ..Default::default()
                },
                None,
            )
            .await
            .map_err(|e| ContextError::DeviceRequest(e.to_string()))?;

        Ok(Self {
            instance,
            adapter,
            device: Arc::new(device),
            queue: Arc::new(queue),
        })
    }
}
