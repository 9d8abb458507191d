use image::Rgba32FImage;

use skinfx_core::color::{premultiplied, Color};
use skinfx_core::math::{to_physical_rect, PhysicalRect, Point, ScaleFactor};

use crate::SoftLayout;

/// Source-over blend of a premultiplied color onto a premultiplied pixel.
#[inline]
pub(crate) fn blend_over(dst: &mut image::Rgba<f32>, src: [f32; 4]) {
    let inv_a = 1.0 - src[3];
    for (d, s) in dst.0.iter_mut().zip(src) {
        *d = s + *d * inv_a;
    }
}

/// Fill every pixel whose center lies inside `rect`.
pub(crate) fn fill_rect(pixels: &mut Rgba32FImage, rect: PhysicalRect, color: Color) {
    let src = premultiplied(color);
    if src[3] <= 0.0 {
        return;
    }

    let (width, height) = pixels.dimensions();
    let span = |min: f32, max: f32, limit: u32| {
        let start = (min - 0.5).ceil().clamp(0.0, limit as f32) as u32;
        let end = (max - 0.5).ceil().clamp(0.0, limit as f32) as u32;
        start..end
    };

    let xs = span(rect.min_x(), rect.max_x(), width);
    for y in span(rect.min_y(), rect.max_y(), height) {
        for x in xs.clone() {
            blend_over(pixels.get_pixel_mut(x, y), src);
        }
    }
}

/// Rasterize `layout` with its top-left corner at `origin`.
pub(crate) fn draw_layout(
    pixels: &mut Rgba32FImage,
    scale_factor: ScaleFactor,
    origin: Point,
    layout: &SoftLayout,
    brush_color: Color,
) {
    for (position, cell) in layout.glyph_cells(origin) {
        let color = layout.drawing_effect(position).unwrap_or(brush_color);
        fill_rect(pixels, to_physical_rect(cell, scale_factor), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skinfx_core::color::{rgba, WHITE};

    #[test]
    fn fill_uses_pixel_centers() {
        let mut pixels = Rgba32FImage::new(8, 8);
        fill_rect(
            &mut pixels,
            PhysicalRect::new((1.4, 2.0).into(), (2.2, 1.0).into()),
            WHITE,
        );

        let filled: Vec<(u32, u32)> = pixels
            .enumerate_pixels()
            .filter(|(_, _, p)| p[3] > 0.0)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert_eq!(filled, [(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn fill_clips_to_bounds() {
        let mut pixels = Rgba32FImage::new(4, 4);
        fill_rect(
            &mut pixels,
            PhysicalRect::new((-10.0, -10.0).into(), (100.0, 100.0).into()),
            WHITE,
        );
        assert!(pixels.pixels().all(|p| p[3] == 1.0));
    }

    #[test]
    fn blend_is_premultiplied_source_over() {
        let mut dst = image::Rgba([0.0, 0.0, 1.0, 1.0]);
        blend_over(&mut dst, premultiplied(rgba(1.0, 0.0, 0.0, 0.5)));
        assert_eq!(dst.0, [0.5, 0.0, 0.5, 1.0]);
    }
}
