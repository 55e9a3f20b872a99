/// The backbuffer acquired for the current frame.
///
/// Short-lived: holding the surface texture prevents acquiring the next one.
/// Finalize it with [`Gpu::present`](super::Gpu::present).
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
}
