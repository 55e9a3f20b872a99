//! Sprite widgets.

pub mod button;
pub mod image;
