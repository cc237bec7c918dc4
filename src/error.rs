use thiserror::Error;

/// Top-level error type for the sketch2d geometry engine.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("radius must be non-negative, got {0}")]
    NegativeRadius(f64),

    #[error("coordinate is not finite: {0}")]
    NonFinite(f64),
}

/// Convenience type alias for results using [`SketchError`].
pub type Result<T> = std::result::Result<T, SketchError>;
