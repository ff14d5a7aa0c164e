/// Surface + renderer bundle for one window.
///
/// A failed frame is contained here: surface loss reconfigures and reports
/// a [`FrameError`], the caller skips presenting and the next iteration
/// starts over with fresh input.
use std::sync::Arc;

use winit::window::Window;

use vantage_core::RendererConfig;
use vantage_renderer::{FrameError, RenderContext, Renderer};

pub struct GraphicsState {
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    pub renderer: Renderer,
}

impl GraphicsState {
    pub async fn new(window: Arc<Window>, width: u32, height: u32) -> anyhow::Result<Self> {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        // `Arc<Window>` keeps the surface 'static without unsafe lifetime
        // games.
        let surface = instance.create_surface(window)?;
        let context = RenderContext::new_with_instance(instance, Some(&surface)).await?;

        let caps = surface.get_capabilities(&context.adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 1,
        };
        surface.configure(&context.device, &config);

        let renderer = Renderer::new(
            context,
            config.width,
            config.height,
            config.format,
            RendererConfig::default(),
        );

        Ok(Self {
            surface,
            config,
            renderer,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.config.width = width;
            self.config.height = height;
            self.surface
                .configure(&self.renderer.context.device, &self.config);
            self.renderer.resize(width, height);
        }
    }

    /// Renders and presents one frame.
    ///
    /// On surface loss the swapchain is reconfigured before reporting the
    /// error, so the following frame can succeed.
    pub fn render_frame(&mut self) -> Result<(), FrameError> {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(err) => {
                if matches!(
                    err,
                    wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated
                ) {
                    self.surface
                        .configure(&self.renderer.context.device, &self.config);
                }
                return Err(err.into());
            }
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.renderer.begin_frame();
        self.renderer.render(&mut encoder, &view);
        self.renderer
            .context
            .queue
            .submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
