/// Device-facing context handed to resource constructors.
///
/// Borrowed from [`Gpu`](crate::device::Gpu); nothing here is global.
#[derive(Clone, Copy)]
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
        }
    }
}

/// The color view draws are rendered into (the current backbuffer).
#[derive(Clone, Copy)]
pub struct RenderTarget<'a> {
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(color_view: &'a wgpu::TextureView) -> Self {
        Self { color_view }
    }
}
