//! Conventional hyperbolic CORDIC exponential.
//!
//! Every element walks the angle table in order, one rotation per bit of the
//! datapath, starting from `x` pre-scaled by the inverse CORDIC gain. Steps 3
//! and 12 are rotated twice.
//!
//! Only `|z| <= ~1.13` converges. Larger arguments are not detected and give
//! meaningless results; clamp upstream.

use log::trace;
use ndarray::{Array, ArrayBase, Data, Dimension, Zip};

use crate::engine::PARALLEL_THRESHOLD;
use crate::params::BitWidth;
use crate::rotation::rotate;
use crate::tables::prescale;

/// Iteration indices that are rotated twice in one pass.
pub const DOUBLE_STEPS: [usize; 2] = [3, 12];

pub fn conventional_exp<S, D>(z: &ArrayBase<S, D>, bit_width: BitWidth, exact: bool) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    if exact {
        return z.mapv(f64::exp);
    }

    let parallel = z.len() >= PARALLEL_THRESHOLD;

    let mut x = Array::from_elem(z.raw_dim(), prescale(bit_width));
    let mut y = Array::<f64, D>::zeros(z.raw_dim());
    let mut residual = z.to_owned();

    for i in 0..bit_width.bits() {
        let rotations = if DOUBLE_STEPS.contains(&i) { 2 } else { 1 };
        let step = |x: &mut f64, y: &mut f64, z: &mut f64| {
            for _ in 0..rotations {
                rotate(x, y, z, i);
            }
        };

        let zip = Zip::from(&mut x).and(&mut y).and(&mut residual);
        if parallel {
            zip.par_for_each(step);
        } else {
            zip.for_each(step);
        }
        trace!("conventional step {} of {}: {} rotation(s)", i, bit_width, rotations);
    }

    x + y
}
