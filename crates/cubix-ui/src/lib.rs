//! Cubix UI: menu state and sprite widgets on top of `cubix-engine`.
//!
//! Widgets only issue draws into a [`SpriteSink`](cubix_engine::render::SpriteSink),
//! so a frame's `SpritePass` renders them and tests can record them.

pub mod drawable;
pub mod menu;
pub mod widgets;

#[cfg(test)]
pub(crate) mod testing;

/// Common imports for the game layer.
pub mod prelude {
    pub use crate::drawable::{Drawable, Widget};
    pub use crate::menu::{Menu, MenuSelection};
    pub use crate::widgets::button::{Button, ButtonLayout, Slice};
    pub use crate::widgets::image::Image;

    pub use cubix_engine::coords::{Rect, Viewport};
}
