//! Cubix engine crate.
//!
//! Platform and GPU pieces for a small 2D sprite renderer: the window loop,
//! the wgpu device and swap chain, textures and the sprite pipeline, keyboard
//! and controller input, and the audio mastering voice.

pub mod audio;
pub mod core;
pub mod device;
pub mod input;
pub mod window;

pub mod coords;
pub mod error;
pub mod logging;
pub mod render;

pub use error::{EngineError, EngineResult};
