use std::rc::Rc;

use image::Rgba32FImage;

use skinfx_core::error::ResourceError;
use skinfx_core::math::{Point, ScaleFactor};
use skinfx_core::target::OffscreenTarget;

use crate::device::{ResourceHandle, ResourceKind, SoftDevice};
use crate::raster;
use crate::{SoftBrush, SoftLayout};

/// An immutable snapshot of a surface, in premultiplied `f32` RGBA.
#[derive(Debug, Clone)]
pub struct SoftImage {
    pixels: Rc<Rgba32FImage>,
    _handle: ResourceHandle,
}

impl SoftImage {
    pub(crate) fn new(pixels: Rc<Rgba32FImage>, handle: ResourceHandle) -> Self {
        Self {
            pixels,
            _handle: handle,
        }
    }

    pub fn pixels(&self) -> &Rgba32FImage {
        &self.pixels
    }
}

/// An offscreen surface created by [`SoftCanvas`](crate::SoftCanvas).
#[derive(Debug)]
pub struct SoftBitmapTarget {
    device: SoftDevice,
    pixels: Rgba32FImage,
    scale_factor: ScaleFactor,
    drawing: bool,
    _handle: ResourceHandle,
}

impl SoftBitmapTarget {
    pub(crate) fn new(
        device: &SoftDevice,
        width: u32,
        height: u32,
        scale_factor: ScaleFactor,
    ) -> Result<Self, ResourceError> {
        let handle = device.acquire(ResourceKind::Surface, ResourceError::SurfaceCreation)?;

        Ok(Self {
            device: device.clone(),
            pixels: Rgba32FImage::new(width, height),
            scale_factor,
            drawing: false,
            _handle: handle,
        })
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }
}

impl OffscreenTarget for SoftBitmapTarget {
    type Brush = SoftBrush;
    type Layout = SoftLayout;
    type Image = SoftImage;

    fn begin_draw(&mut self) -> Result<(), ResourceError> {
        self.device.check(ResourceError::BeginDraw)?;
        if self.drawing {
            return Err(ResourceError::BeginDraw);
        }
        self.drawing = true;
        Ok(())
    }

    fn draw_text_layout(&mut self, origin: Point, layout: &SoftLayout, brush: &SoftBrush) {
        if !self.drawing {
            log::warn!("offscreen draw outside of begin_draw/end_draw was ignored");
            return;
        }
        raster::draw_layout(
            &mut self.pixels,
            self.scale_factor,
            origin,
            layout,
            brush.color(),
        );
    }

    fn end_draw(&mut self) -> Result<(), ResourceError> {
        if !self.drawing {
            return Err(ResourceError::EndDraw);
        }
        self.drawing = false;
        self.device.check(ResourceError::EndDraw)
    }

    fn image(&self) -> Result<SoftImage, ResourceError> {
        let handle = self
            .device
            .acquire(ResourceKind::Image, ResourceError::ImageExtraction)?;

        Ok(SoftImage::new(Rc::new(self.pixels.clone()), handle))
    }
}
