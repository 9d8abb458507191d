use skinfx_core::color::Color;
use skinfx_core::error::ResourceError;
use skinfx_core::math::Vector;
use skinfx_core::target::{RenderTarget, ShadowEffect, ShadowOptimization};

/// Turn `image` into a blurred, colored silhouette and composite it over
/// `target` at `offset`.
pub(super) fn draw_shadow<T: RenderTarget>(
    target: &mut T,
    image: T::Image,
    blur_radius: f32,
    color: Color,
    offset: Vector,
) -> Result<(), ResourceError> {
    let mut effect = target.create_shadow_effect()?;

    effect.set_input(image);
    effect.set_blur_standard_deviation(blur_radius);
    effect.set_color(color);
    effect.set_optimization(ShadowOptimization::Speed);

    target.draw_effect(&effect, offset);
    Ok(())
}
