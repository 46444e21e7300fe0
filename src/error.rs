use thiserror::Error;

/// Échecs documentés de l'animation.
///
/// Les moteurs renvoient des `anyhow::Result` ; ces variantes restent
/// accessibles via `downcast_ref::<AnimationError>()`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnimationError {
    #[error("invalid setting `{field}`: {reason}")]
    InvalidSettings { field: &'static str, reason: String },

    #[error("heart sprite of size {size}px could not be rasterized")]
    SpriteUnavailable { size: u32 },

    #[error("drawing surface unavailable ({width}x{height})")]
    SurfaceUnavailable { width: u32, height: u32 },

    #[error("frame scheduling unavailable: {0}")]
    SchedulingUnavailable(String),

    #[error("window initialization failed: {0}")]
    WindowInit(String),
}

impl AnimationError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        AnimationError::InvalidSettings {
            field,
            reason: reason.into(),
        }
    }
}
