use bytemuck::{Pod, Zeroable};

use crate::coords::{Rect, Vec2, Viewport};

/// Vertices per sprite: two triangles, no index buffer.
pub const QUAD_VERTEX_COUNT: usize = 6;

/// Sprite vertex: NDC position + texture coordinate.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct SpriteVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

impl SpriteVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // position
        1 => Float32x2  // uv
    ];

    #[inline]
    const fn new(position: [f32; 2], uv: [f32; 2]) -> Self {
        Self { position, uv }
    }

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Builds the six vertices of a textured quad.
///
/// - `dest` is in backbuffer pixels and is mapped to NDC through `viewport`.
/// - `src` is in texture pixels; `None` samples the whole texture.
/// - `texture_size` and `viewport` must be non-zero.
///
/// Triangle order: (top-left, top-right, bottom-left), (bottom-left, top-right,
/// bottom-right). A zero-area `dest` produces a degenerate but valid quad.
pub fn build_quad(
    dest: Rect,
    src: Option<Rect>,
    texture_size: (u32, u32),
    viewport: Viewport,
) -> [SpriteVertex; QUAD_VERTEX_COUNT] {
    debug_assert!(texture_size.0 > 0 && texture_size.1 > 0, "texture must be non-empty");

    let [left, top] = viewport.to_ndc(dest.top_left());
    let [right, bottom] = viewport.to_ndc(dest.bottom_right());

    let (u0, v0, u1, v1) = match src {
        None => (0.0, 0.0, 1.0, 1.0),
        Some(src) => {
            let tw = texture_size.0 as f32;
            let th = texture_size.1 as f32;
            (
                src.left() / tw,
                src.top() / th,
                src.right() / tw,
                src.bottom() / th,
            )
        }
    };

    let top_left = SpriteVertex::new([left, top], [u0, v0]);
    let top_right = SpriteVertex::new([right, top], [u1, v0]);
    let bottom_left = SpriteVertex::new([left, bottom], [u0, v1]);
    let bottom_right = SpriteVertex::new([right, bottom], [u1, v1]);

    [
        top_left,
        top_right,
        bottom_left,
        bottom_left,
        top_right,
        bottom_right,
    ]
}

/// Maps quad vertices back to backbuffer pixels.
pub fn quad_pixel_corners(quad: &[SpriteVertex; QUAD_VERTEX_COUNT], viewport: Viewport) -> [Vec2; 4] {
    [quad[0], quad[1], quad[2], quad[5]].map(|v| viewport.from_ndc(v.position))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VP: Viewport = Viewport::new(1280.0, 720.0);

    fn corners(q: &[SpriteVertex; QUAD_VERTEX_COUNT]) -> [[f32; 2]; 4] {
        [q[0].position, q[1].position, q[2].position, q[5].position]
    }

    // ── positions ─────────────────────────────────────────────────────────

    #[test]
    fn full_screen_rect_hits_ndc_corners_exactly() {
        let q = build_quad(Rect::from_size(1280.0, 720.0), None, (4, 4), VP);
        assert_eq!(corners(&q), [[-1.0, 1.0], [1.0, 1.0], [-1.0, -1.0], [1.0, -1.0]]);
    }

    #[test]
    fn rects_inside_viewport_stay_inside_ndc_cube() {
        let rects = [
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Rect::new(100.0, 50.0, 300.0, 200.0),
            Rect::new(1279.0, 719.0, 1.0, 1.0),
            Rect::new(640.0, 0.0, 640.0, 720.0),
            Rect::new(17.5, 33.25, 0.0, 12.0),
        ];
        for r in rects {
            assert!(Rect::from_size(VP.width, VP.height).contains_rect(r));
            for [x, y] in corners(&build_quad(r, None, (8, 8), VP)) {
                assert!((-1.0..=1.0).contains(&x), "{r:?} -> x {x}");
                assert!((-1.0..=1.0).contains(&y), "{r:?} -> y {y}");
            }
        }
    }

    #[test]
    fn corners_map_back_to_input_pixels() {
        let r = Rect::new(123.0, 45.5, 210.25, 99.0);
        let q = build_quad(r, None, (8, 8), VP);
        let expected = [
            Vec2::new(r.left(), r.top()),
            Vec2::new(r.right(), r.top()),
            Vec2::new(r.left(), r.bottom()),
            Vec2::new(r.right(), r.bottom()),
        ];
        for (got, want) in quad_pixel_corners(&q, VP).iter().zip(expected) {
            assert!((got.x - want.x).abs() < 1e-3 && (got.y - want.y).abs() < 1e-3, "{got:?} vs {want:?}");
        }
    }

    #[test]
    fn triangles_share_top_right_and_bottom_left() {
        let q = build_quad(Rect::new(10.0, 10.0, 20.0, 20.0), None, (8, 8), VP);
        assert_eq!(q[1], q[4]);
        assert_eq!(q[2], q[3]);
        // Top edge above bottom edge in NDC (+Y up).
        assert!(q[0].position[1] > q[2].position[1]);
        assert!(q[1].position[0] > q[0].position[0]);
    }

    // ── texture coordinates ───────────────────────────────────────────────

    #[test]
    fn missing_source_samples_whole_texture() {
        let q = build_quad(Rect::new(0.0, 0.0, 64.0, 32.0), None, (30, 10), VP);
        assert_eq!(q[0].uv, [0.0, 0.0]);
        assert_eq!(q[1].uv, [1.0, 0.0]);
        assert_eq!(q[2].uv, [0.0, 1.0]);
        assert_eq!(q[5].uv, [1.0, 1.0]);
    }

    #[test]
    fn source_rect_is_divided_by_texture_size() {
        let src = Rect::new(10.0, 0.0, 10.0, 10.0);
        let q = build_quad(Rect::new(0.0, 0.0, 10.0, 10.0), Some(src), (30, 10), VP);
        let (u0, u1) = (q[0].uv[0], q[5].uv[0]);
        assert!((u0 - 1.0 / 3.0).abs() < 1e-6);
        assert!((u1 - 2.0 / 3.0).abs() < 1e-6);
        assert_eq!((q[0].uv[1], q[5].uv[1]), (0.0, 1.0));
    }

    // ── degenerate input ──────────────────────────────────────────────────

    #[test]
    fn zero_width_or_height_yields_valid_degenerate_quad() {
        for r in [Rect::new(50.0, 50.0, 0.0, 20.0), Rect::new(50.0, 50.0, 20.0, 0.0)] {
            let q = build_quad(r, None, (8, 8), VP);
            assert!(q.iter().all(|v| v.position.iter().chain(&v.uv).all(|c| c.is_finite())));
            let [tl, tr, bl, br] = corners(&q);
            let area = (tr[0] - tl[0]).abs() * (tl[1] - bl[1]).abs();
            assert_eq!(area, 0.0);
            assert_eq!(br, [tr[0], bl[1]]);
        }
    }

    #[test]
    fn vertex_layout_is_four_floats() {
        assert_eq!(std::mem::size_of::<SpriteVertex>(), 16);
        let layout = SpriteVertex::layout();
        assert_eq!(layout.array_stride, 16);
        assert_eq!(layout.attributes[1].offset, 8);
    }
}
