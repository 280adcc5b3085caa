use thiserror::Error;

use crate::core::Orientation;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid plot size: width={width}, height={height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("plot has no line or area points to derive a scale from")]
    EmptyData,

    #[error("degenerate {axis:?} range: all values collapse to a single point")]
    DegenerateRange { axis: Orientation },

    #[error("invalid tick delta {0}: must be finite and > 0")]
    InvalidTickDelta(f64),

    #[error("{axis:?} axis would need more than {limit} ticks")]
    TooManyTicks { axis: Orientation, limit: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
