use image::Rgba32FImage;

use skinfx_core::color::{premultiplied, Color};
use skinfx_core::error::ResourceError;
use skinfx_core::math::{to_physical_vector_rounded, PhysicalSizeU32, Point, ScaleFactor, Vector};
use skinfx_core::target::RenderTarget;

use crate::device::{ResourceKind, SoftDevice};
use crate::{raster, SoftBitmapTarget, SoftBrush, SoftImage, SoftLayout, SoftShadowEffect};

/// A visible canvas backed by a premultiplied `f32` RGBA pixel buffer.
#[derive(Debug)]
pub struct SoftCanvas {
    device: SoftDevice,
    pixels: Rgba32FImage,
    scale_factor: ScaleFactor,
    draw_calls: u64,
}

impl SoftCanvas {
    /// Create a transparent canvas.
    pub fn new(
        device: &SoftDevice,
        physical_size: PhysicalSizeU32,
        scale_factor: ScaleFactor,
    ) -> Result<Self, ResourceError> {
        if physical_size.is_empty() {
            return Err(ResourceError::InvalidSize(
                physical_size.width,
                physical_size.height,
            ));
        }

        log::debug!(
            "created {}x{} canvas at scale factor {}",
            physical_size.width,
            physical_size.height,
            scale_factor.0
        );

        Ok(Self {
            device: device.clone(),
            pixels: Rgba32FImage::new(physical_size.width, physical_size.height),
            scale_factor,
            draw_calls: 0,
        })
    }

    pub fn device(&self) -> &SoftDevice {
        &self.device
    }

    pub fn physical_size(&self) -> PhysicalSizeU32 {
        let (width, height) = self.pixels.dimensions();
        PhysicalSizeU32::new(width, height)
    }

    pub fn scale_factor(&self) -> ScaleFactor {
        self.scale_factor
    }

    /// The number of draw calls issued on this canvas so far.
    pub fn draw_calls(&self) -> u64 {
        self.draw_calls
    }

    pub fn pixels(&self) -> &Rgba32FImage {
        &self.pixels
    }

    /// The premultiplied color of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> [f32; 4] {
        self.pixels.get_pixel(x, y).0
    }

    pub fn alpha(&self, x: u32, y: u32) -> f32 {
        self.pixels.get_pixel(x, y)[3]
    }

    pub fn clear(&mut self, color: Color) {
        let color = image::Rgba(premultiplied(color));
        for p in self.pixels.pixels_mut() {
            *p = color;
        }
    }

    /// Draw `layout` with its top-left corner at `origin`.
    pub fn draw_text_layout(&mut self, origin: Point, layout: &SoftLayout, brush: &SoftBrush) {
        self.draw_calls += 1;
        raster::draw_layout(
            &mut self.pixels,
            self.scale_factor,
            origin,
            layout,
            brush.color(),
        );
    }
}

impl RenderTarget for SoftCanvas {
    type Brush = SoftBrush;
    type Layout = SoftLayout;
    type Image = SoftImage;
    type Offscreen = SoftBitmapTarget;
    type Effect = SoftShadowEffect;

    fn create_solid_brush(&mut self, color: Color) -> Result<SoftBrush, ResourceError> {
        let handle = self
            .device
            .acquire(ResourceKind::Brush, ResourceError::BrushCreation)?;
        Ok(SoftBrush {
            color,
            _handle: handle,
        })
    }

    fn create_compatible_target(&mut self) -> Result<SoftBitmapTarget, ResourceError> {
        let (width, height) = self.pixels.dimensions();
        SoftBitmapTarget::new(&self.device, width, height, self.scale_factor)
    }

    fn create_shadow_effect(&mut self) -> Result<SoftShadowEffect, ResourceError> {
        let handle = self
            .device
            .acquire(ResourceKind::Effect, ResourceError::EffectCreation)?;
        Ok(SoftShadowEffect::new(handle))
    }

    fn draw_effect(&mut self, effect: &SoftShadowEffect, offset: Vector) {
        self.draw_calls += 1;
        effect.composite_onto(
            &mut self.pixels,
            to_physical_vector_rounded(offset, self.scale_factor),
            self.scale_factor,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skinfx_core::color::{rgba, BLACK, WHITE};
    use skinfx_core::math::{point, vector};
    use skinfx_core::target::{DrawSession, OffscreenTarget, ShadowEffect, ShadowOptimization};

    fn canvas(device: &SoftDevice) -> SoftCanvas {
        SoftCanvas::new(device, PhysicalSizeU32::new(32, 16), ScaleFactor(1.0)).unwrap()
    }

    #[test]
    fn empty_canvas_is_rejected() {
        let device = SoftDevice::new();
        assert_eq!(
            SoftCanvas::new(&device, PhysicalSizeU32::new(0, 4), ScaleFactor(1.0)).err(),
            Some(ResourceError::InvalidSize(0, 4))
        );
    }

    #[test]
    fn sharp_shadow_lands_at_offset() {
        let device = SoftDevice::new();
        let mut canvas = canvas(&device);
        let layout = SoftLayout::new("x", 4.0, 4.0);

        let brush = canvas.create_solid_brush(WHITE).unwrap();
        let mut offscreen = canvas.create_compatible_target().unwrap();
        {
            let mut session = DrawSession::begin(&mut offscreen).unwrap();
            session.draw_text_layout(point(2.0, 2.0), &layout, &brush);
        }
        let image = offscreen.image().unwrap();

        let mut effect = canvas.create_shadow_effect().unwrap();
        effect.set_input(image);
        effect.set_blur_standard_deviation(0.0);
        effect.set_color(rgba(1.0, 0.0, 0.0, 0.5));
        canvas.draw_effect(&effect, vector(3.0, 1.0));

        assert_eq!(canvas.pixel(5, 3), [0.5, 0.0, 0.0, 0.5]);
        assert_eq!(canvas.pixel(8, 6), [0.5, 0.0, 0.0, 0.5]);
        assert_eq!(canvas.alpha(4, 3), 0.0);
        assert_eq!(canvas.alpha(9, 3), 0.0);
        assert_eq!(canvas.alpha(5, 7), 0.0);
        assert_eq!(canvas.draw_calls(), 1);

        drop((brush, offscreen, effect));
        assert_eq!(device.live_resources(), 0);
    }

    #[test]
    fn blurred_shadow_spreads_and_fades() {
        let device = SoftDevice::new();
        let mut canvas = canvas(&device);
        let layout = SoftLayout::new("xx", 4.0, 8.0);
        let brush = canvas.create_solid_brush(WHITE).unwrap();

        let mut offscreen = canvas.create_compatible_target().unwrap();
        offscreen.begin_draw().unwrap();
        offscreen.draw_text_layout(point(8.0, 4.0), &layout, &brush);
        offscreen.end_draw().unwrap();

        for optimization in [ShadowOptimization::Speed, ShadowOptimization::Quality] {
            let mut effect = canvas.create_shadow_effect().unwrap();
            effect.set_input(offscreen.image().unwrap());
            effect.set_blur_standard_deviation(1.5);
            effect.set_color(BLACK);
            effect.set_optimization(optimization);

            let mask = effect.shadow_mask(ScaleFactor(1.0)).unwrap();
            let center = mask.get_pixel(12, 8)[0];
            let edge = mask.get_pixel(7, 8)[0];
            let far = mask.get_pixel(30, 1)[0];

            assert!(center > 0.5, "{optimization:?}: center {center}");
            assert!(edge > 0.0 && edge < center, "{optimization:?}: edge {edge}");
            assert!(far.abs() < 1e-3, "{optimization:?}: far {far}");
        }
    }

    #[test]
    fn draw_outside_session_is_ignored() {
        let device = SoftDevice::new();
        let mut canvas = canvas(&device);
        let brush = canvas.create_solid_brush(WHITE).unwrap();
        let mut offscreen = canvas.create_compatible_target().unwrap();

        offscreen.draw_text_layout(Point::zero(), &SoftLayout::new("x", 4.0, 4.0), &brush);
        let image = offscreen.image().unwrap();
        assert!(image.pixels().pixels().all(|p| p[3] == 0.0));
        assert_eq!(offscreen.end_draw(), Err(ResourceError::EndDraw));
    }
}
