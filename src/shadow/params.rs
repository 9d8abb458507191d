use skinfx_core::color::{Color, BLACK};
use skinfx_core::math::Vector;

/// The configuration of a shadow inline format.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShadowParameters {
    /// The pattern selecting the characters that cast a shadow. Compared
    /// without regard to letter case.
    pub pattern: String,
    /// The standard deviation of the shadow's Gaussian blur in logical points.
    /// A negative or NaN value is treated as `0.0` by
    /// [`ShadowFormat`](crate::ShadowFormat).
    ///
    /// By default this is set to `3.0`.
    pub blur_radius: f32,
    /// How far the shadow is moved from the text, in logical points.
    ///
    /// By default this is set to `(0.0, 0.0)`.
    pub offset: Vector,
    /// The color of the shadow.
    ///
    /// By default this is set to opaque black.
    pub color: Color,
}

impl ShadowParameters {
    pub fn new(pattern: impl Into<String>, blur_radius: f32, offset: Vector, color: Color) -> Self {
        Self {
            pattern: pattern.into(),
            blur_radius,
            offset,
            color,
        }
    }
}

impl Default for ShadowParameters {
    fn default() -> Self {
        Self {
            pattern: String::new(),
            blur_radius: 3.0,
            offset: Vector::zero(),
            color: BLACK,
        }
    }
}
