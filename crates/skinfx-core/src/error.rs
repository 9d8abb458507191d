/// A failure to create or use a render resource.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceError {
    #[error("failed to create a solid color brush")]
    BrushCreation,

    #[error("failed to create a compatible offscreen surface")]
    SurfaceCreation,

    #[error("failed to create the shadow effect")]
    EffectCreation,

    #[error("failed to begin drawing on the offscreen surface")]
    BeginDraw,

    #[error("failed to end drawing on the offscreen surface")]
    EndDraw,

    #[error("failed to extract an image from the offscreen surface")]
    ImageExtraction,

    #[error("invalid surface size {0}x{1}")]
    InvalidSize(u32, u32),
}
