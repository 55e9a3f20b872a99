//! Coordinate and geometry types shared by the sprite renderer and widgets.
//!
//! Canonical CPU space:
//! - Pixels of the current backbuffer
//! - Origin top-left
//! - +X right, +Y down
//!
//! Conversion to NDC happens on the CPU, see [`Viewport::to_ndc`].

mod color;
mod rect;
mod vec2;
mod viewport;

pub use color::ColorRgba;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
