use super::ctx::{FrameCtx, UpdateCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the game layer.
///
/// The app is built by a factory the runtime calls once the GPU exists, so
/// pipelines and textures can be created up front.
pub trait App {
    /// Game logic for this frame. Runs before [`App::render`].
    fn update(&mut self, ctx: &UpdateCtx<'_>) -> AppControl;

    /// Draws this frame; use [`FrameCtx::render`] to clear, draw and present.
    fn render(&mut self, frame: &mut FrameCtx<'_, '_>) -> AppControl;
}
