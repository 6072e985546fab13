//! Bias model of measured hardware exponential units.
//!
//! Rather than running a unit bit by bit, the exact exponential is offset by
//! the average or worst-case absolute error measured on that unit. The table
//! is closed: every (mode, width, variant) combination is listed and
//! anything else is rejected.

use log::debug;
use ndarray::{Array, ArrayBase, Data, Dimension};

use crate::engine::compute_exp;
use crate::error::{CordicError, Result};
use crate::params::{BitWidth, CordicVariant, ErrorMode};

use BitWidth::*;
use CordicVariant::*;
use ErrorMode::*;

/// Bias of an idealized unit, independent of width and variant.
pub const NEGLIGIBLE_BIAS: f64 = 1e-10;

#[rustfmt::skip]
const BIAS_TABLE: [(ErrorMode, BitWidth, CordicVariant, f64); 32] = [
    (Average,   W8,  Control,      0.01557),
    (Average,   W8,  Conventional, 0.01654),
    (Average,   W8,  AngleRecoded, 0.010595),
    (Average,   W8,  Pipelined,    0.02143),
    (Average,   W16, Control,      1.74e-4),
    (Average,   W16, Conventional, 9.0429e-5),
    (Average,   W16, AngleRecoded, 1.27197e-4),
    (Average,   W16, Pipelined,    1.4967e-4),
    (Average,   W24, Control,      1.18e-6),
    (Average,   W24, Conventional, 4.65562e-7),
    (Average,   W24, AngleRecoded, 8.27986e-7),
    (Average,   W24, Pipelined,    1.19239e-6),
    (Average,   W32, Control,      7.95e-9),
    (Average,   W32, Conventional, 2.12247e-9),
    (Average,   W32, AngleRecoded, 6.27273e-9),
    (Average,   W32, Pipelined,    7.94588e-9),
    (WorstCase, W8,  Control,      0.04866),
    (WorstCase, W8,  Conventional, 0.06592),
    (WorstCase, W8,  AngleRecoded, 0.0445),
    (WorstCase, W8,  Pipelined,    0.06258),
    (WorstCase, W16, Control,      6.12e-4),
    (WorstCase, W16, Conventional, 2.91189e-4),
    (WorstCase, W16, AngleRecoded, 5.04581e-4),
    (WorstCase, W16, Pipelined,    5.04581e-4),
    (WorstCase, W24, Control,      3.69e-6),
    (WorstCase, W24, Conventional, 1.6199e-6),
    (WorstCase, W24, AngleRecoded, 2.61432e-6),
    (WorstCase, W24, Pipelined,    2.90097e-6),
    (WorstCase, W32, Control,      2.38e-8),
    (WorstCase, W32, Conventional, 8.25555e-9),
    (WorstCase, W32, AngleRecoded, 1.76028e-8),
    (WorstCase, W32, Pipelined,    2.07546e-8),
];

/// Constant offset injected for a unit.
pub fn bias(mode: ErrorMode, bit_width: BitWidth, variant: CordicVariant) -> Result<f64> {
    if mode == Negligible {
        return Ok(NEGLIGIBLE_BIAS);
    }
    BIAS_TABLE
        .iter()
        .find(|(m, w, v, _)| *m == mode && *w == bit_width && *v == variant)
        .map(|entry| entry.3)
        .ok_or(CordicError::MissingBias {
            mode,
            bit_width,
            variant,
        })
}

/// `exp(z) + bias` for every element, or the plain exponential when `exact`.
pub fn approximate_exp<S, D>(
    z: &ArrayBase<S, D>,
    bit_width: BitWidth,
    mode: ErrorMode,
    variant: CordicVariant,
    exact: bool,
) -> Result<Array<f64, D>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    if exact {
        return Ok(z.mapv(f64::exp));
    }
    let offset = bias(mode, bit_width, variant)?;
    debug!(
        "biased exp of {:?}: {} {} {}, bias {:e}",
        z.shape(),
        variant,
        bit_width,
        mode,
        offset
    );
    Ok(z.mapv(|v| v.exp() + offset))
}

/// Runs the iterative engine that emulates `variant` instead of injecting
/// its bias. The control unit has no engine.
pub fn simulate_exp<S, D>(
    z: &ArrayBase<S, D>,
    bit_width: BitWidth,
    variant: CordicVariant,
    exact: bool,
) -> Result<Array<f64, D>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let engine = variant.engine().ok_or(CordicError::NoEngine(variant))?;
    Ok(compute_exp(z, bit_width, engine, exact))
}
