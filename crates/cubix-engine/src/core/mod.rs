//! Contract between the runtime loop and the game.
//!
//! The runtime drives one frame per redraw: sample the controller, call
//! [`App::update`], then [`App::render`]. Nothing here exposes winit types.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, UpdateCtx};
