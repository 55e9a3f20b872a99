/// Straight-alpha RGBA color used for clearing the backbuffer.
///
/// Channels are display values, as they would be written to an 8-bit UNorm
/// backbuffer: `0.2` shows up as byte 51. On an sRGB target they are decoded
/// to linear first so the stored bytes come out the same.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from three channels.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// The classic "hello world" clear color of Direct3D samples.
    #[inline]
    pub const fn cornflower_blue() -> Self {
        Self::rgb(0.39, 0.58, 0.93)
    }

    /// Clear value for a render target of `format`.
    pub(crate) fn to_wgpu(self, format: wgpu::TextureFormat) -> wgpu::Color {
        let channel = |c: f32| {
            let c = c as f64;
            if format.is_srgb() { srgb_to_linear(c) } else { c }
        };
        wgpu::Color {
            r: channel(self.r),
            g: channel(self.g),
            b: channel(self.b),
            a: self.a as f64,
        }
    }
}

fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_is_opaque() {
        assert_eq!(ColorRgba::rgb(0.2, 0.6, 0.2).a, 1.0);
    }

    fn linear_to_srgb_byte(c: f64) -> u8 {
        let encoded = if c <= 0.0031308 {
            c * 12.92
        } else {
            1.055 * c.powf(1.0 / 2.4) - 0.055
        };
        (encoded * 255.0).round() as u8
    }

    #[test]
    fn unorm_target_keeps_channels() {
        let c = ColorRgba::new(0.25, 0.5, 0.75, 1.0).to_wgpu(wgpu::TextureFormat::Bgra8Unorm);
        assert_eq!((c.r, c.g, c.b, c.a), (0.25, 0.5, 0.75, 1.0));
    }

    #[test]
    fn srgb_target_stores_the_display_bytes() {
        let c = ColorRgba::rgb(0.2, 0.6, 0.2).to_wgpu(wgpu::TextureFormat::Rgba8UnormSrgb);
        let bytes = [c.r, c.g, c.b].map(linear_to_srgb_byte);
        assert_eq!(bytes, [51, 153, 51]);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn srgb_decode_keeps_black_and_white() {
        let c = ColorRgba::new(0.0, 1.0, 0.0, 0.5).to_wgpu(wgpu::TextureFormat::Bgra8UnormSrgb);
        assert_eq!((c.r, c.g, c.b, c.a), (0.0, 1.0, 0.0, 0.5));
    }
}
