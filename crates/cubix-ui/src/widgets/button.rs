use std::sync::Arc;

use cubix_engine::coords::{Rect, Viewport};
use cubix_engine::render::{SpriteSink, Texture, TextureExtent};

/// Nine-slice style button stretched horizontally.
///
/// The texture is split into three equal columns: left cap, middle, right cap.
/// Caps are drawn 1:1; only the middle column is stretched to reach the
/// requested width. Height is always the texture height.
#[derive(Debug)]
pub struct Button<T = Texture> {
    texture: Arc<T>,
}

/// One draw of a [`ButtonLayout`]: where it lands and what it samples.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Slice {
    pub dest: Rect,
    pub src: Rect,
}

/// Slices of a button at a given position and width.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonLayout {
    pub left: Slice,
    /// `None` when the requested width leaves no room for the middle.
    pub middle: Option<Slice>,
    pub right: Slice,
}

impl ButtonLayout {
    /// Slices in draw order.
    pub fn slices(&self) -> impl Iterator<Item = Slice> + '_ {
        std::iter::once(self.left)
            .chain(self.middle)
            .chain(std::iter::once(self.right))
    }

    /// Horizontal extent actually covered, caps included.
    pub fn width(&self) -> f32 {
        self.right.dest.right() - self.left.dest.left()
    }
}

impl<T: TextureExtent> Button<T> {
    pub fn new(texture: Arc<T>) -> Self {
        Self { texture }
    }

    pub fn texture(&self) -> &Arc<T> {
        &self.texture
    }

    /// Width of one column: a third of the texture, rounded down.
    pub fn slice_width(&self) -> u32 {
        self.texture.width() / 3
    }

    pub fn height(&self) -> f32 {
        self.texture.height() as f32
    }

    /// Computes the slices for a button at `(x, y)` spanning `total_width` pixels.
    ///
    /// The middle width is `total_width - 2 * slice`, clamped to zero; below
    /// that the caps still draw at full size.
    pub fn layout(&self, x: f32, y: f32, total_width: f32) -> ButtonLayout {
        let slice = self.slice_width() as f32;
        let height = self.height();
        let middle_width = (total_width.max(0.0) - 2.0 * slice).max(0.0);

        let column = |i: f32| Rect::new(i * slice, 0.0, slice, height);

        let left = Slice {
            dest: Rect::new(x, y, slice, height),
            src: column(0.0),
        };
        let middle = (middle_width > 0.0).then(|| Slice {
            dest: Rect::new(x + slice, y, middle_width, height),
            src: column(1.0),
        });
        let right = Slice {
            dest: Rect::new(x + slice + middle_width, y, slice, height),
            src: column(2.0),
        };

        ButtonLayout { left, middle, right }
    }

    /// Draws the button: left cap, stretched middle (if any), right cap.
    pub fn draw<S>(&self, sink: &mut S, x: f32, y: f32, total_width: f32, viewport: Viewport)
    where
        S: SpriteSink<T> + ?Sized,
    {
        for slice in self.layout(x, y, total_width).slices() {
            sink.draw(&self.texture, slice.dest, Some(slice.src), viewport);
        }
    }
}
