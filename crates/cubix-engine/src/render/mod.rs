//! GPU rendering subsystem.
//!
//! Convention:
//! - CPU geometry is in pixels (top-left origin, +Y down).
//! - Vertices are converted to NDC on the CPU; the vertex shader passes them through.
//! - Every renderer owns its GPU resources (pipeline, buffers, samplers).

mod ctx;
#[cfg(test)]
pub(crate) mod offscreen;
pub mod sprite;
pub mod texture;

pub use ctx::{RenderCtx, RenderTarget};
pub use sprite::{SpritePass, SpritePipeline, SpriteSink, SpriteVertex};
pub use texture::{DecodedImage, Texture, TextureExtent};
