use std::path::Path;

use wgpu::util::DeviceExt;

use crate::error::{EngineError, EngineResult};

use super::RenderCtx;

/// Pixel dimensions of something that can be sampled as a sprite.
///
/// Widgets only need the extent to lay out source rectangles, so they are
/// generic over this instead of the GPU texture itself.
pub trait TextureExtent {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
}

/// Decoded image: tightly packed RGBA8, row stride `width * 4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> u32 {
        self.width * 4
    }

    /// Decodes PNG/JPEG/BMP bytes into RGBA8.
    pub fn decode(bytes: &[u8]) -> EngineResult<Self> {
        let img = image::load_from_memory(bytes).map_err(|e| EngineError::resource("image", e))?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        if width == 0 || height == 0 {
            return Err(EngineError::resource("image", "image has zero size"));
        }

        Ok(Self {
            width,
            height,
            pixels: rgba.into_raw(),
        })
    }
}

/// Immutable GPU texture sampled by the sprite pipeline.
///
/// Share it with `Arc` between widgets; wgpu keeps the memory alive until
/// submitted work that references it has finished.
#[derive(Debug)]
pub struct Texture {
    label: String,
    width: u32,
    height: u32,
    // Kept so the resource is owned alongside its view.
    _texture: wgpu::Texture,
    view: wgpu::TextureView,
}

impl Texture {
    /// Loads and uploads an image file.
    ///
    /// A missing file is reported as [`EngineError::MissingAsset`]; every other
    /// failure (I/O, decode, GPU limits) as [`EngineError::ResourceCreation`].
    pub fn from_file(ctx: &RenderCtx<'_>, path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let bytes = read_asset(path)?;
        let texture = Self::from_bytes(ctx, &path.display().to_string(), &bytes)?;
        log::debug!(
            "loaded texture `{}` ({}x{})",
            path.display(),
            texture.width,
            texture.height
        );
        Ok(texture)
    }

    /// Decodes encoded image bytes and uploads them.
    pub fn from_bytes(ctx: &RenderCtx<'_>, label: &str, bytes: &[u8]) -> EngineResult<Self> {
        let image = DecodedImage::decode(bytes)?;
        Self::from_image(ctx, label, &image)
    }

    /// Uploads already decoded pixels.
    pub fn from_image(ctx: &RenderCtx<'_>, label: &str, image: &DecodedImage) -> EngineResult<Self> {
        let what = || format!("texture `{label}`");

        if image.width == 0 || image.height == 0 {
            return Err(EngineError::resource(what(), "image has zero size"));
        }
        let expected = image.stride() as usize * image.height as usize;
        if image.pixels.len() != expected {
            return Err(EngineError::resource(
                what(),
                format!("expected {expected} bytes of RGBA8, got {}", image.pixels.len()),
            ));
        }
        let max = ctx.device.limits().max_texture_dimension_2d;
        if image.width > max || image.height > max {
            return Err(EngineError::resource(
                what(),
                format!("{}x{} exceeds device limit {max}", image.width, image.height),
            ));
        }

        let texture = ctx.device.create_texture_with_data(
            ctx.queue,
            &wgpu::TextureDescriptor {
                label: Some(label),
                size: wgpu::Extent3d {
                    width: image.width,
                    height: image.height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::Rgba8UnormSrgb,
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            },
            wgpu::util::TextureDataOrder::LayerMajor,
            &image.pixels,
        );
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Ok(Self {
            label: label.to_string(),
            width: image.width,
            height: image.height,
            _texture: texture,
            view,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Shader-visible view bound by the sprite pipeline.
    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }
}

/// Reads an asset file, distinguishing "absent" from "unreadable".
pub(crate) fn read_asset(path: &Path) -> EngineResult<Vec<u8>> {
    if !path.is_file() {
        return Err(EngineError::MissingAsset {
            path: path.to_path_buf(),
        });
    }
    std::fs::read(path).map_err(|e| EngineError::resource(format!("asset `{}`", path.display()), e))
}

impl TextureExtent for Texture {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}
