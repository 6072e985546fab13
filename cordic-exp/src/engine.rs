use log::debug;
use ndarray::{Array, ArrayBase, Data, Dimension};

use crate::conventional::conventional_exp;
use crate::params::{BitWidth, Engine};
use crate::pipelined::pipelined_exp;

/// Element count from which the engines spread their stages over rayon.
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Exponential of every element of `z` as computed by the given CORDIC engine.
///
/// With `exact` set the library exponential is returned instead; that is the
/// baseline the emulated units are compared against.
pub fn compute_exp<S, D>(
    z: &ArrayBase<S, D>,
    bit_width: BitWidth,
    engine: Engine,
    exact: bool,
) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    debug!(
        "exp of {:?} with {} engine, {}, exact: {}",
        z.shape(),
        engine,
        bit_width,
        exact
    );
    match engine {
        Engine::Conventional => conventional_exp(z, bit_width, exact),
        Engine::Pipelined => pipelined_exp(z, bit_width, exact),
    }
}
