use cubix_engine::coords::{Rect, Viewport};
use cubix_engine::render::{SpriteSink, Texture, TextureExtent};

use crate::widgets::button::Button;
use crate::widgets::image::Image;

/// Something that renders itself into `bounds` through sprite draws.
pub trait Drawable<T: TextureExtent = Texture> {
    fn draw(&self, sink: &mut dyn SpriteSink<T>, bounds: Rect, viewport: Viewport);
}

/// The closed set of widgets the game places on screen.
#[derive(Debug)]
pub enum Widget<T = Texture> {
    Button(Button<T>),
    Image(Image<T>),
}

impl<T: TextureExtent> Drawable<T> for Button<T> {
    /// Only `bounds.width` and the origin are used; height is the texture's.
    fn draw(&self, sink: &mut dyn SpriteSink<T>, bounds: Rect, viewport: Viewport) {
        Button::draw(self, sink, bounds.x, bounds.y, bounds.width, viewport);
    }
}

impl<T: TextureExtent> Drawable<T> for Image<T> {
    fn draw(&self, sink: &mut dyn SpriteSink<T>, bounds: Rect, viewport: Viewport) {
        Image::draw(self, sink, bounds, viewport);
    }
}

impl<T: TextureExtent> Drawable<T> for Widget<T> {
    fn draw(&self, sink: &mut dyn SpriteSink<T>, bounds: Rect, viewport: Viewport) {
        match self {
            Widget::Button(button) => Drawable::draw(button, sink, bounds, viewport),
            Widget::Image(image) => Drawable::draw(image, sink, bounds, viewport),
        }
    }
}

impl<T> From<Button<T>> for Widget<T> {
    fn from(button: Button<T>) -> Self {
        Widget::Button(button)
    }
}

impl<T> From<Image<T>> for Widget<T> {
    fn from(image: Image<T>) -> Self {
        Widget::Image(image)
    }
}
