use image::{imageops, ImageBuffer, Luma, Rgba32FImage};

use skinfx_core::color::{premultiplied, Color, BLACK};
use skinfx_core::math::{PhysicalVectorI32, ScaleFactor};
use skinfx_core::target::{ShadowEffect, ShadowOptimization};

use crate::device::ResourceHandle;
use crate::raster::blend_over;
use crate::SoftImage;

/// A single channel coverage mask.
pub type AlphaImage = ImageBuffer<Luma<f32>, Vec<f32>>;

/// A drop-shadow filter.
///
/// The defaults match the usual shadow effect defaults: a standard deviation
/// of 3 points and opaque black.
#[derive(Debug)]
pub struct SoftShadowEffect {
    input: Option<SoftImage>,
    sigma: f32,
    color: Color,
    optimization: ShadowOptimization,
    _handle: ResourceHandle,
}

impl SoftShadowEffect {
    pub(crate) fn new(handle: ResourceHandle) -> Self {
        Self {
            input: None,
            sigma: 3.0,
            color: BLACK,
            optimization: ShadowOptimization::Balanced,
            _handle: handle,
        }
    }

    pub fn blur_standard_deviation(&self) -> f32 {
        self.sigma
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn optimization(&self) -> ShadowOptimization {
        self.optimization
    }

    /// The alpha of the input blurred by a Gaussian with the configured
    /// standard deviation, or `None` without an input.
    pub fn shadow_mask(&self, scale_factor: ScaleFactor) -> Option<AlphaImage> {
        let input = self.input.as_ref()?.pixels();
        let alpha = AlphaImage::from_fn(input.width(), input.height(), |x, y| {
            Luma([input.get_pixel(x, y)[3]])
        });

        let sigma = self.sigma * scale_factor.0;
        if sigma <= 0.0 {
            return Some(alpha);
        }

        // Every optimization hint gets the same Gaussian on this backend.
        Some(imageops::blur(&alpha, sigma))
    }

    pub(crate) fn composite_onto(
        &self,
        dst: &mut Rgba32FImage,
        offset: PhysicalVectorI32,
        scale_factor: ScaleFactor,
    ) {
        let Some(mask) = self.shadow_mask(scale_factor) else {
            return;
        };

        let shadow = premultiplied(self.color);
        let (width, height) = dst.dimensions();

        for (x, y, a) in mask.enumerate_pixels() {
            let a = a[0].clamp(0.0, 1.0);
            if a <= 0.0 {
                continue;
            }

            let dx = x as i64 + offset.x as i64;
            let dy = y as i64 + offset.y as i64;
            if dx < 0 || dy < 0 || dx >= width as i64 || dy >= height as i64 {
                continue;
            }

            blend_over(
                dst.get_pixel_mut(dx as u32, dy as u32),
                shadow.map(|c| c * a),
            );
        }
    }
}

impl ShadowEffect for SoftShadowEffect {
    type Image = SoftImage;

    fn set_input(&mut self, image: SoftImage) {
        self.input = Some(image);
    }

    fn set_blur_standard_deviation(&mut self, sigma: f32) {
        self.sigma = sigma.max(0.0);
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn set_optimization(&mut self, optimization: ShadowOptimization) {
        self.optimization = optimization;
    }
}
