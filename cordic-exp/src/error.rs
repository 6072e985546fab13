use thiserror::Error;

use crate::params::{BitWidth, CordicVariant, ErrorMode};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CordicError {
    #[error("Unsupported bit width {0}, expected one of 8, 16, 24, 32")]
    UnsupportedBitWidth(u32),
    #[error("Unsupported error mode code {0}, expected 0 (average), 1 (worst case) or 2 (negligible)")]
    UnsupportedMode(u8),
    #[error("Unsupported CORDIC variant code {0}, expected 0 (control), 1 (conventional), 2 (angle recoded) or 3 (pipelined)")]
    UnsupportedVariant(u8),
    #[error("Unsupported engine code {0}, expected 0 (conventional) or 1 (pipelined)")]
    UnsupportedEngine(u8),
    #[error("Variant {0} has no iterative engine to simulate")]
    NoEngine(CordicVariant),
    #[error("No bias recorded for mode {mode}, width {bit_width}, variant {variant}")]
    MissingBias {
        mode: ErrorMode,
        bit_width: BitWidth,
        variant: CordicVariant,
    },
    #[error("Shape mismatch: {left:?} vs {right:?}")]
    ShapeMismatch { left: Vec<usize>, right: Vec<usize> },
    #[error("No batch entry to compare in traces of shape {shape:?}")]
    EmptyBatch { shape: Vec<usize> },
    #[error("Normalization window must be at least one time step")]
    ZeroWindow,
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CordicError>;
