use winit::window::Window;

use crate::coords::{ColorRgba, Viewport};
use crate::device::{Gpu, SurfaceErrorAction};
use crate::input::{ButtonEdges, InputState};
use crate::render::{RenderCtx, RenderTarget};

use super::app::AppControl;

/// Per-frame input handed to [`App::update`](super::App::update).
pub struct UpdateCtx<'a> {
    /// Controller slot 0, already advanced to this frame's sample.
    pub pad: &'a ButtonEdges,
    pub input: &'a InputState,
    pub frame_index: u64,
}

/// Per-frame render context. Apps only reach the backbuffer through
/// [`FrameCtx::render`]; the window and GPU stay inside the engine.
///
/// ```compile_fail
/// fn window_of<'a>(frame: &'a cubix_engine::core::FrameCtx<'a, '_>) -> &'a winit::window::Window {
///     frame.window
/// }
/// ```
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub(crate) window: &'a Window,
    pub(crate) gpu: &'a mut Gpu<'w>,
}

impl FrameCtx<'_, '_> {
    /// Acquires the backbuffer, clears it to `clear`, runs `draw`, then
    /// presents.
    ///
    /// `draw` receives the device handles, the backbuffer as target and the
    /// backbuffer size as viewport. When the window has no drawable area or
    /// the surface cannot be acquired the frame is skipped.
    pub fn render<F>(&mut self, clear: ColorRgba, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, RenderTarget<'_>, Viewport),
    {
        let viewport = self.gpu.viewport();
        if !viewport.is_valid() {
            return AppControl::Continue;
        }

        let frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => AppControl::Exit,
                    _ => AppControl::Continue,
                };
            }
        };

        self.gpu.clear(&frame, clear);

        {
            let ctx = self.gpu.render_ctx();
            draw(&ctx, RenderTarget::new(&frame.view), viewport);
        }

        self.window.pre_present_notify();
        self.gpu.present(frame);

        AppControl::Continue
    }
}
