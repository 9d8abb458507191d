//! A CPU implementation of the skinfx render target traits.
//!
//! Every resource the device hands out is tracked until its last handle is
//! dropped, and resource creation can be made to fail on demand.

mod bitmap;
mod canvas;
mod device;
mod effect;
mod layout;
mod raster;

pub use bitmap::{SoftBitmapTarget, SoftImage};
pub use canvas::SoftCanvas;
pub use device::{ResourceKind, SoftDevice};
pub use effect::{AlphaImage, SoftShadowEffect};
pub use layout::SoftLayout;

use skinfx_core::color::Color;

/// A solid color paint handle.
#[derive(Debug, Clone)]
pub struct SoftBrush {
    color: Color,
    _handle: device::ResourceHandle,
}

impl SoftBrush {
    pub fn color(&self) -> Color {
        self.color
    }
}
