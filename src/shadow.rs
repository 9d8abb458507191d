//! A drop shadow behind selected characters.
//!
//! Rendering happens in two passes. Every character outside the format's
//! ranges is first painted transparent on the layout, and the layout is drawn
//! onto an offscreen surface. That surface is then run through the target's
//! shadow effect and composited onto the target at the configured offset.
//!
//! A failure at any stage skips the shadow for that frame. Resources created
//! along the way are released when the render returns.

use skinfx_core::color::{colors_equal, Color, TRANSPARENT};
use skinfx_core::error::ResourceError;
use skinfx_core::math::{Point, Vector};
use skinfx_core::target::RenderTarget;

use crate::format::InlineFormatBase;
use crate::mask::apply_exclusion_mask;

mod compositor;
mod filter;
mod params;

pub use params::ShadowParameters;

#[derive(Debug, Clone, PartialEq)]
pub struct ShadowFormat {
    base: InlineFormatBase,
    blur_radius: f32,
    offset: Vector,
    color: Color,
}

impl ShadowFormat {
    pub fn new(params: ShadowParameters) -> Self {
        let ShadowParameters {
            pattern,
            blur_radius,
            offset,
            color,
        } = params;

        Self {
            base: InlineFormatBase::new(pattern),
            blur_radius: blur_radius.max(0.0),
            offset,
            color,
        }
    }

    pub fn base(&self) -> &InlineFormatBase {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut InlineFormatBase {
        &mut self.base
    }

    pub fn pattern(&self) -> &str {
        self.base.pattern()
    }

    pub fn blur_radius(&self) -> f32 {
        self.blur_radius
    }

    pub fn offset(&self) -> Vector {
        self.offset
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// A copy of the current parameters.
    pub fn parameters(&self) -> ShadowParameters {
        ShadowParameters {
            pattern: self.base.pattern().to_owned(),
            blur_radius: self.blur_radius,
            offset: self.offset,
            color: self.color,
        }
    }

    /// Draw the shadow of the characters in this format's ranges.
    ///
    /// `layout` holds `str_len` characters and is drawn at `draw_position` with
    /// `brush`. Characters outside the ranges are left with a transparent
    /// drawing effect on `layout`.
    ///
    /// Nothing is drawn if the target or layout is absent or if any resource
    /// cannot be created.
    pub fn render<T: RenderTarget>(
        &self,
        target: Option<&mut T>,
        layout: Option<&mut T::Layout>,
        brush: &T::Brush,
        str_len: u32,
        draw_position: Point,
    ) {
        let (Some(target), Some(layout)) = (target, layout) else {
            return;
        };

        let _ = self.try_render(target, layout, brush, str_len, draw_position);
    }

    fn try_render<T: RenderTarget>(
        &self,
        target: &mut T,
        layout: &mut T::Layout,
        brush: &T::Brush,
        str_len: u32,
        draw_position: Point,
    ) -> Result<(), ResourceError> {
        let transparent = target.create_solid_brush(TRANSPARENT)?;
        apply_exclusion_mask(layout, &transparent, str_len, self.base.ranges());

        let image = compositor::render_offscreen(target, layout, brush, draw_position)?;
        filter::draw_shadow(target, image, self.blur_radius, self.color, self.offset)
    }

    /// Apply reloaded configuration, returning whether the shadow changed.
    ///
    /// The shadow counts as changed when `pattern` differs from the stored
    /// pattern ignoring case, or when `color` differs in any channel. Only then
    /// are the pattern (verbatim), offset and color stored. The blur radius is
    /// never updated here, and an offset change on its own is ignored.
    pub fn compare_and_update(
        &mut self,
        pattern: &str,
        _blur_radius: f32,
        offset: Vector,
        color: Color,
    ) -> bool {
        if self.base.pattern_matches(pattern) && colors_equal(self.color, color) {
            return false;
        }

        self.base.set_pattern(pattern);
        self.offset = offset;
        self.color = color;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skinfx_core::color::{rgba, BLACK};
    use skinfx_core::math::vector;

    const RED: Color = rgba(1.0, 0.0, 0.0, 1.0);
    const BLUE: Color = rgba(0.0, 0.0, 1.0, 1.0);

    fn shadow(pattern: &str, blur: f32, offset: Vector, color: Color) -> ShadowFormat {
        ShadowFormat::new(ShadowParameters::new(pattern, blur, offset, color))
    }

    #[test]
    fn case_only_pattern_change_is_ignored() {
        let mut format = shadow("ABC", 5.0, vector(1.0, 1.0), RED);

        assert!(!format.compare_and_update("abc", 5.0, vector(2.0, 2.0), RED));
        assert_eq!(format.pattern(), "ABC");
        assert_eq!(format.offset(), vector(1.0, 1.0));
    }

    #[test]
    fn color_change_stores_pattern_offset_and_color() {
        let mut format = shadow("ABC", 5.0, vector(1.0, 1.0), RED);

        assert!(format.compare_and_update("aBc", 9.0, vector(4.0, -2.0), BLUE));
        assert_eq!(format.pattern(), "aBc");
        assert_eq!(format.offset(), vector(4.0, -2.0));
        assert_eq!(format.color(), BLUE);
        assert_eq!(format.blur_radius(), 5.0);
    }

    #[test]
    fn pattern_change_is_detected() {
        let mut format = shadow("ABC", 5.0, vector(1.0, 1.0), RED);

        assert!(format.compare_and_update("ABD", 5.0, vector(3.0, 3.0), RED));
        assert_eq!(format.pattern(), "ABD");
        assert_eq!(format.offset(), vector(3.0, 3.0));
    }

    #[test]
    fn blur_and_offset_alone_never_change() {
        let mut format = shadow("x", 2.0, vector(1.0, 1.0), BLACK);
        let before = format.clone();

        assert!(!format.compare_and_update("x", 8.0, vector(1.0, 1.0), BLACK));
        assert!(!format.compare_and_update("x", 2.0, vector(7.0, 7.0), BLACK));
        assert_eq!(format, before);
    }

    #[test]
    fn blur_is_never_written() {
        let mut format = shadow("x", 2.0, Vector::zero(), BLACK);

        assert!(format.compare_and_update("y", 10.0, Vector::zero(), RED));
        assert_eq!(format.blur_radius(), 2.0);
    }

    #[test]
    fn alpha_only_color_change_counts() {
        let mut format = shadow("x", 2.0, Vector::zero(), rgba(0.0, 0.0, 0.0, 0.5));

        assert!(format.compare_and_update("x", 2.0, Vector::zero(), rgba(0.0, 0.0, 0.0, 0.6)));
    }

    #[test]
    fn identical_updates_converge() {
        let mut format = shadow("x", 2.0, Vector::zero(), BLACK);

        assert!(format.compare_and_update("Hello", 1.0, vector(2.0, 2.0), BLUE));
        for _ in 0..3 {
            assert!(!format.compare_and_update("Hello", 1.0, vector(2.0, 2.0), BLUE));
        }
        assert_eq!(
            format.parameters(),
            ShadowParameters::new("Hello", 2.0, vector(2.0, 2.0), BLUE)
        );
    }

    #[test]
    fn blur_is_never_negative() {
        assert_eq!(shadow("x", -2.0, Vector::zero(), BLACK).blur_radius(), 0.0);
        assert_eq!(shadow("x", f32::NAN, Vector::zero(), BLACK).blur_radius(), 0.0);
        assert_eq!(shadow("x", 1.5, Vector::zero(), BLACK).blur_radius(), 1.5);
    }

    #[test]
    fn ranges_survive_updates() {
        let mut format = shadow("x", 2.0, Vector::zero(), BLACK);
        format
            .base_mut()
            .set_ranges([skinfx_core::range::CharacterRange::new(0, 1)]);

        assert!(format.compare_and_update("y", 2.0, Vector::zero(), BLACK));
        assert_eq!(format.base().ranges().len(), 1);
    }
}
