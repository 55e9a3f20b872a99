use super::Vec2;

/// Backbuffer size in pixels.
///
/// Used only to convert pixel positions to NDC; renderers never store it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Maps a pixel position (top-left origin, +Y down) to NDC (center origin, +Y up).
    ///
    /// The viewport must be valid; a zero extent yields non-finite output.
    #[inline]
    pub fn to_ndc(self, p: Vec2) -> [f32; 2] {
        debug_assert!(self.is_valid(), "viewport must be non-zero: {self:?}");
        [
            (p.x / self.width) * 2.0 - 1.0,
            1.0 - (p.y / self.height) * 2.0,
        ]
    }

    /// Inverse of [`to_ndc`](Self::to_ndc).
    #[inline]
    pub fn from_ndc(self, ndc: [f32; 2]) -> Vec2 {
        Vec2::new(
            (ndc[0] + 1.0) * 0.5 * self.width,
            (1.0 - ndc[1]) * 0.5 * self.height,
        )
    }
}
