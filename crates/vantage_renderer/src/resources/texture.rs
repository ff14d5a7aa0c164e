/// Texture creation helpers: render attachments, the procedural material
/// array and the shared sampler.
///
/// Asset decoding is outside this crate; the material layers are generated
/// in memory so the pipeline has real array textures to sample without an
/// asset dependency.

/// Descriptor for a 2-D render-attachment texture.
pub struct RenderTextureDesc<'a> {
    pub label: &'a str,
    pub width: u32,
    pub height: u32,
    pub format: wgpu::TextureFormat,
    pub usage: wgpu::TextureUsages,
}

/// Creates a 2-D texture from a [`RenderTextureDesc`].
pub fn create_render_texture(device: &wgpu::Device, desc: &RenderTextureDesc<'_>) -> wgpu::Texture {
    device.create_texture(&wgpu::TextureDescriptor {
        label: Some(desc.label),
        size: wgpu::Extent3d {
            width: desc.width,
            height: desc.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: desc.format,
        usage: desc.usage,
        view_formats: &[],
    })
}

/// Creates a default `TextureView` for a texture (all mips, all layers).
#[inline]
pub fn default_view(texture: &wgpu::Texture) -> wgpu::TextureView {
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

// ── Material array ───────────────────────────────────────────────────────────

const LAYER_SIZE: u32 = 64;

/// Builds the 2-layer color texture array the world shader samples by
/// material index: layer 0 a checkerboard, layer 1 a banded pattern.
pub fn create_color_array(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
) -> (wgpu::Texture, wgpu::TextureView) {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Color Texture Array"),
        size: wgpu::Extent3d {
            width: LAYER_SIZE,
            height: LAYER_SIZE,
            depth_or_array_layers: 2,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    for (layer, pixels) in [checker_layer(), banded_layer()].iter().enumerate() {
        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d {
                    x: 0,
                    y: 0,
                    z: layer as u32,
                },
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(LAYER_SIZE * 4),
                rows_per_image: Some(LAYER_SIZE),
            },
            wgpu::Extent3d {
                width: LAYER_SIZE,
                height: LAYER_SIZE,
                depth_or_array_layers: 1,
            },
        );
    }

    let view = texture.create_view(&wgpu::TextureViewDescriptor {
        label: Some("Color Texture Array View"),
        dimension: Some(wgpu::TextureViewDimension::D2Array),
        ..Default::default()
    });
    (texture, view)
}

/// Repeating anisotropic sampler shared by every material.
pub fn create_repeat_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("Material Sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        address_mode_w: wgpu::AddressMode::Repeat,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Linear,
        anisotropy_clamp: 16,
        ..Default::default()
    })
}

fn checker_layer() -> Vec<u8> {
    let mut pixels = Vec::with_capacity((LAYER_SIZE * LAYER_SIZE * 4) as usize);
    for y in 0..LAYER_SIZE {
        for x in 0..LAYER_SIZE {
            let light = ((x / 8) + (y / 8)) % 2 == 0;
            if light {
                pixels.extend_from_slice(&[220, 220, 210, 255]);
            } else {
                pixels.extend_from_slice(&[70, 70, 80, 255]);
            }
        }
    }
    pixels
}

fn banded_layer() -> Vec<u8> {
    let mut pixels = Vec::with_capacity((LAYER_SIZE * LAYER_SIZE * 4) as usize);
    for y in 0..LAYER_SIZE {
        for x in 0..LAYER_SIZE {
            let band = (y / 16) % 2 == 0;
            let mortar = y % 16 < 2 || (x + if band { 0 } else { 32 }) % 64 < 2;
            if mortar {
                pixels.extend_from_slice(&[180, 180, 175, 255]);
            } else {
                pixels.extend_from_slice(&[150, 60, 50, 255]);
            }
        }
    }
    pixels
}
