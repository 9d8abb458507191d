use skinfx_core::error::ResourceError;
use skinfx_core::math::Point;
use skinfx_core::target::{DrawSession, OffscreenTarget, RenderTarget};

/// Draw the already masked `layout` onto a fresh transparent surface compatible
/// with `target` and return its contents.
pub(super) fn render_offscreen<T: RenderTarget>(
    target: &mut T,
    layout: &T::Layout,
    brush: &T::Brush,
    draw_position: Point,
) -> Result<T::Image, ResourceError> {
    let mut offscreen = target.create_compatible_target()?;

    {
        let mut session = DrawSession::begin(&mut offscreen)?;
        session.draw_text_layout(draw_position, layout, brush);
    }

    offscreen.image()
}
