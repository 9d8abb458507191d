//! This module re-exports the types from the [`rgb`](https://crates.io/crates/rgb) crate.

pub use rgb::*;

/// A color with `f32` channels in the range `[0.0, 1.0]`.
///
/// The alpha channel is straight (not premultiplied).
pub type Color = Rgba<f32>;

/// The color black with full opacity
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};
/// The color white with full opacity
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};
/// A color with no opacity
pub const TRANSPARENT: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};

/// Shorthand for `Color { r, g, b, a }`.
#[inline]
pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
    Color { r, g, b, a }
}

/// Compares two colors channel by channel with exact float equality.
#[inline]
pub fn colors_equal(a: Color, b: Color) -> bool {
    a.r == b.r && a.g == b.g && a.b == b.b && a.a == b.a
}

/// Returns the color as premultiplied `[r, g, b, a]`.
#[inline]
pub fn premultiplied(color: Color) -> [f32; 4] {
    [
        color.r * color.a,
        color.g * color.a,
        color.b * color.a,
        color.a,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_exact() {
        assert!(colors_equal(BLACK, rgba(0.0, 0.0, 0.0, 1.0)));
        assert!(!colors_equal(BLACK, rgba(0.0, 0.0, 0.0, 0.999_999)));
        assert!(!colors_equal(TRANSPARENT, rgba(f32::NAN, 0.0, 0.0, 0.0)));
    }

    #[test]
    fn premultiply_scales_rgb() {
        assert_eq!(premultiplied(rgba(1.0, 0.5, 0.0, 0.5)), [0.5, 0.25, 0.0, 0.5]);
    }
}
