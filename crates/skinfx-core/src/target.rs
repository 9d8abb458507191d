//! The capabilities a render backend must provide to draw inline text effects.
//!
//! Handles returned by a [`RenderTarget`] (brushes, offscreen targets, effects and
//! images) own their underlying resource and release it when dropped.

use crate::color::Color;
use crate::error::ResourceError;
use crate::math::{Point, Vector};
use crate::range::CharacterRange;

/// How a shadow effect trades output quality for speed.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadowOptimization {
    Speed,
    #[default]
    Balanced,
    Quality,
}

/// A laid out run of text whose characters can be repainted individually.
pub trait TextLayout {
    type Brush;

    /// Paint the characters in `range` with `brush` instead of the brush the
    /// layout is drawn with.
    fn set_drawing_effect(&mut self, brush: &Self::Brush, range: CharacterRange);

    /// Remove every drawing-effect override from the layout.
    fn clear_drawing_effects(&mut self);
}

/// A transient surface compatible with the [`RenderTarget`] that created it.
///
/// Drawing happens between [`OffscreenTarget::begin_draw`] and
/// [`OffscreenTarget::end_draw`]. Use [`DrawSession`] instead of calling these
/// directly so the session is always closed.
pub trait OffscreenTarget {
    type Brush;
    type Layout: TextLayout<Brush = Self::Brush>;
    type Image;

    fn begin_draw(&mut self) -> Result<(), ResourceError>;

    fn draw_text_layout(&mut self, origin: Point, layout: &Self::Layout, brush: &Self::Brush);

    fn end_draw(&mut self) -> Result<(), ResourceError>;

    /// The current contents of the surface.
    fn image(&self) -> Result<Self::Image, ResourceError>;
}

/// An image filter that turns the alpha of its input into a blurred, colored
/// silhouette.
pub trait ShadowEffect {
    type Image;

    fn set_input(&mut self, image: Self::Image);

    /// The standard deviation of the Gaussian blur, in logical points.
    fn set_blur_standard_deviation(&mut self, sigma: f32);

    fn set_color(&mut self, color: Color);

    fn set_optimization(&mut self, optimization: ShadowOptimization);
}

/// The visible canvas that inline formats draw onto.
pub trait RenderTarget {
    type Brush;
    type Layout: TextLayout<Brush = Self::Brush>;
    type Image;
    type Offscreen: OffscreenTarget<Brush = Self::Brush, Layout = Self::Layout, Image = Self::Image>;
    type Effect: ShadowEffect<Image = Self::Image>;

    fn create_solid_brush(&mut self, color: Color) -> Result<Self::Brush, ResourceError>;

    /// Create a transparent offscreen target with the same size and scale factor
    /// as this target.
    fn create_compatible_target(&mut self) -> Result<Self::Offscreen, ResourceError>;

    fn create_shadow_effect(&mut self) -> Result<Self::Effect, ResourceError>;

    /// Composite the output of `effect` over this target, translated by `offset`.
    fn draw_effect(&mut self, effect: &Self::Effect, offset: Vector);
}

/// An open drawing session on an [`OffscreenTarget`].
///
/// The session is ended when this is dropped.
pub struct DrawSession<'a, T: OffscreenTarget> {
    target: &'a mut T,
}

impl<'a, T: OffscreenTarget> DrawSession<'a, T> {
    pub fn begin(target: &'a mut T) -> Result<Self, ResourceError> {
        target.begin_draw()?;
        Ok(Self { target })
    }

    pub fn draw_text_layout(&mut self, origin: Point, layout: &T::Layout, brush: &T::Brush) {
        self.target.draw_text_layout(origin, layout, brush);
    }
}

impl<'a, T: OffscreenTarget> Drop for DrawSession<'a, T> {
    fn drop(&mut self) {
        // End failures are ignored here.
        let _ = self.target.end_draw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct NullLayout;

    impl TextLayout for NullLayout {
        type Brush = ();
        fn set_drawing_effect(&mut self, _: &(), _: CharacterRange) {}
        fn clear_drawing_effects(&mut self) {}
    }

    #[derive(Default)]
    struct RecordingTarget {
        events: Vec<&'static str>,
        fail_begin: bool,
    }

    impl OffscreenTarget for RecordingTarget {
        type Brush = ();
        type Layout = NullLayout;
        type Image = ();

        fn begin_draw(&mut self) -> Result<(), ResourceError> {
            if self.fail_begin {
                return Err(ResourceError::BeginDraw);
            }
            self.events.push("begin");
            Ok(())
        }

        fn draw_text_layout(&mut self, _: Point, _: &NullLayout, _: &()) {
            self.events.push("draw");
        }

        fn end_draw(&mut self) -> Result<(), ResourceError> {
            self.events.push("end");
            Err(ResourceError::EndDraw)
        }

        fn image(&self) -> Result<(), ResourceError> {
            Ok(())
        }
    }

    #[test]
    fn session_ends_on_drop() {
        let mut target = RecordingTarget::default();
        {
            let mut session = DrawSession::begin(&mut target).unwrap();
            session.draw_text_layout(Point::zero(), &NullLayout, &());
        }
        assert_eq!(target.events, ["begin", "draw", "end"]);
    }

    #[test]
    fn failed_begin_never_ends() {
        let mut target = RecordingTarget {
            fail_begin: true,
            ..Default::default()
        };
        assert_eq!(
            DrawSession::begin(&mut target).err(),
            Some(ResourceError::BeginDraw)
        );
        assert!(target.events.is_empty());
    }
}
