/// Units in physical pixels.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Physical;

/// A point in units of logical points.
///
/// Alias for ```euclid::default::Point2D<f32>```.
pub type Point = euclid::default::Point2D<f32>;

/// A vector in units of logical points.
///
/// Alias for ```euclid::default::Vector2D<f32>```.
pub type Vector = euclid::default::Vector2D<f32>;

/// A size in units of logical points.
///
/// Alias for ```euclid::default::Size2D<f32>```.
pub type Size = euclid::default::Size2D<f32>;

/// A rectangle in units of logical points.
///
/// Alias for ```euclid::default::Rect<f32>```
pub type Rect = euclid::default::Rect<f32>;

/// A point in units of physical pixels.
pub type PhysicalPoint = euclid::Point2D<f32, Physical>;
/// A size in units of physical pixels.
pub type PhysicalSize = euclid::Size2D<f32, Physical>;
/// A size in units of physical pixels.
pub type PhysicalSizeU32 = euclid::Size2D<u32, Physical>;
/// A rectagngle in units of physical pixels.
pub type PhysicalRect = euclid::Rect<f32, Physical>;
/// A vector in units of physical pixels.
pub type PhysicalVectorI32 = euclid::Vector2D<i32, Physical>;

/// Convert a point from logical points to physical pixels.
#[inline]
pub fn to_physical_point(point: Point, scale_factor: ScaleFactor) -> PhysicalPoint {
    PhysicalPoint::new(point.x * scale_factor.0, point.y * scale_factor.0)
}

/// Convert a size from logical points to physical pixels.
#[inline]
pub fn to_physical_size(size: Size, scale_factor: ScaleFactor) -> PhysicalSize {
    PhysicalSize::new(size.width * scale_factor.0, size.height * scale_factor.0)
}

/// Convert a rectangle from logical points to physical pixels.
#[inline]
pub fn to_physical_rect(rect: Rect, scale_factor: ScaleFactor) -> PhysicalRect {
    PhysicalRect::new(
        to_physical_point(rect.origin, scale_factor),
        to_physical_size(rect.size, scale_factor),
    )
}

/// Convert a vector from logical points to whole physical pixels, rounding to
/// the nearest pixel.
#[inline]
pub fn to_physical_vector_rounded(vector: Vector, scale_factor: ScaleFactor) -> PhysicalVectorI32 {
    PhysicalVectorI32::new(
        (vector.x * scale_factor.0).round() as i32,
        (vector.y * scale_factor.0).round() as i32,
    )
}

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub const fn vector(x: f32, y: f32) -> Vector {
    Vector::new(x, y)
}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub const fn point(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

/// Shorthand for `Size::new(x, y)`.
#[inline]
pub const fn size(w: f32, h: f32) -> Size {
    Size::new(w, h)
}

/// A scaling factor in points per pixel.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleFactor(pub f32);
