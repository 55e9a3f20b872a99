use std::sync::Arc;

use cubix_engine::coords::{Rect, Viewport};
use cubix_engine::render::{SpriteSink, Texture, TextureExtent};

/// A texture (or a region of it) stretched over its bounds.
#[derive(Debug)]
pub struct Image<T = Texture> {
    texture: Arc<T>,
    src: Option<Rect>,
}

impl<T: TextureExtent> Image<T> {
    pub fn new(texture: Arc<T>) -> Self {
        Self { texture, src: None }
    }

    /// Samples only `src` (texture pixels) instead of the whole texture.
    pub fn region(mut self, src: Rect) -> Self {
        self.src = Some(src);
        self
    }

    /// Natural size in pixels: the region if set, else the texture.
    pub fn size(&self) -> (f32, f32) {
        match self.src {
            Some(r) => (r.width, r.height),
            None => (self.texture.width() as f32, self.texture.height() as f32),
        }
    }

    pub fn draw<S>(&self, sink: &mut S, bounds: Rect, viewport: Viewport)
    where
        S: SpriteSink<T> + ?Sized,
    {
        sink.draw(&self.texture, bounds, self.src, viewport);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeTexture, Recorder};

    #[test]
    fn draws_whole_texture_by_default() {
        let image = Image::new(Arc::new(FakeTexture { width: 64, height: 32 }));
        assert_eq!(image.size(), (64.0, 32.0));

        let mut sink = Recorder::default();
        let bounds = Rect::new(10.0, 10.0, 128.0, 64.0);
        image.draw(&mut sink, bounds, Viewport::new(800.0, 600.0));
        assert_eq!(sink.draws, vec![(bounds, None)]);
    }

    #[test]
    fn region_is_forwarded_as_source() {
        let src = Rect::new(16.0, 0.0, 16.0, 16.0);
        let image = Image::new(Arc::new(FakeTexture { width: 64, height: 16 })).region(src);
        assert_eq!(image.size(), (16.0, 16.0));

        let mut sink = Recorder::default();
        image.draw(&mut sink, Rect::from_size(32.0, 32.0), Viewport::new(800.0, 600.0));
        assert_eq!(sink.draws[0].1, Some(src));
    }
}
