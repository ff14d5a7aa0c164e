/// Off-screen scene target: a color attachment the world passes render into
/// and the post-process pass samples, plus the depth attachment.
///
/// The post-process pass owns the final hop to the surface, so the scene
/// color texture always carries `TEXTURE_BINDING` usage.

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

use crate::resources::texture::{self, RenderTextureDesc};

pub struct ColorTarget {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub format: wgpu::TextureFormat,
}

impl ColorTarget {
    fn new(device: &wgpu::Device, width: u32, height: u32, format: wgpu::TextureFormat) -> Self {
        let tex = texture::create_render_texture(
            device,
            &RenderTextureDesc {
                label: "Scene Color Texture",
                width,
                height,
                format,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT
                    | wgpu::TextureUsages::TEXTURE_BINDING,
            },
        );
        let view = texture::default_view(&tex);
        Self {
            texture: tex,
            view,
            format,
        }
    }
}

pub struct DepthTarget {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
}

impl DepthTarget {
    fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let tex = texture::create_render_texture(
            device,
            &RenderTextureDesc {
                label: "Depth Texture",
                width,
                height,
                format: DEPTH_FORMAT,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            },
        );
        let view = texture::default_view(&tex);
        Self { texture: tex, view }
    }
}

pub struct RenderTarget {
    pub color: ColorTarget,
    pub depth: DepthTarget,
    pub width: u32,
    pub height: u32,
}

impl RenderTarget {
    pub fn new(device: &wgpu::Device, width: u32, height: u32, format: wgpu::TextureFormat) -> Self {
        Self {
            color: ColorTarget::new(device, width, height, format),
            depth: DepthTarget::new(device, width, height),
            width,
            height,
        }
    }

    /// Recreates both attachments when the resolution changes.
    ///
    /// Returns early (no GPU allocation) if the dimensions are identical.
    pub fn resize(&mut self, device: &wgpu::Device, new_width: u32, new_height: u32) {
        if new_width == self.width && new_height == self.height {
            return;
        }
        self.width = new_width;
        self.height = new_height;
        self.color = ColorTarget::new(device, new_width, new_height, self.color.format);
        self.depth = DepthTarget::new(device, new_width, new_height);
    }

    #[inline]
    pub fn color_view(&self) -> &wgpu::TextureView {
        &self.color.view
    }

    #[inline]
    pub fn depth_view(&self) -> &wgpu::TextureView {
        &self.depth.view
    }
}
