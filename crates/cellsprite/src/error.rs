use thiserror::Error;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("cannot allocate a {width}x{height} canvas")]
    CanvasAllocation { width: u32, height: u32 },
    #[error("path has no drawable segments")]
    EmptyPath,
    #[error("cannot stroke path at width {width}")]
    Stroke { width: f32 },
    #[error("invalid cell metrics: {0}")]
    InvalidMetrics(String),
    #[error("octant table line {line}: {reason}")]
    OctantTable { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, RasterError>;
