//! Test doubles shared by the widget tests.

use cubix_engine::coords::{Rect, Viewport};
use cubix_engine::render::{SpriteSink, TextureExtent};

#[derive(Debug)]
pub struct FakeTexture {
    pub width: u32,
    pub height: u32,
}

impl TextureExtent for FakeTexture {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

/// Records every draw as `(dest, src)`.
#[derive(Debug, Default)]
pub struct Recorder {
    pub draws: Vec<(Rect, Option<Rect>)>,
}

impl SpriteSink<FakeTexture> for Recorder {
    fn draw(&mut self, _texture: &FakeTexture, dest: Rect, src: Option<Rect>, _viewport: Viewport) {
        self.draws.push((dest, src));
    }
}
