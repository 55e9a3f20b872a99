//! Sprite drawing: quad geometry and the fixed textured-quad pipeline.

mod pipeline;
pub mod quad;

pub use pipeline::{SpritePass, SpritePipeline};
pub use quad::{build_quad, SpriteVertex, QUAD_VERTEX_COUNT};

use crate::coords::{Rect, Viewport};

use super::Texture;

/// Anything that accepts sprite draws.
///
/// [`SpritePass`] submits them to the GPU; widgets are written against this
/// trait so their layout can be checked without a device.
pub trait SpriteSink<T: ?Sized = Texture> {
    /// Draws `src` of `texture` (whole texture when `None`) into `dest`.
    fn draw(&mut self, texture: &T, dest: Rect, src: Option<Rect>, viewport: Viewport);
}
