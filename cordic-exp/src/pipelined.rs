//! Pipelined hyperbolic CORDIC exponential with angle recoding.
//!
//! Instead of stepping through the angle table in order, each stage picks the
//! tabled angle nearest to the element's remaining residual, rotates by it
//! and corrects the gain of that rotation straight away. Elements stop as
//! soon as their residual falls to the datapath resolution; the `active`
//! mask keeps them frozen while their neighbours keep iterating.

use log::trace;
use ndarray::{Array, ArrayBase, Data, Dimension, Zip};

use crate::engine::PARALLEL_THRESHOLD;
use crate::params::BitWidth;
use crate::rotation::rotate;
use crate::tables::{ANGLES, SCALES};

pub fn pipelined_exp<S, D>(z: &ArrayBase<S, D>, bit_width: BitWidth, exact: bool) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    if exact {
        return z.mapv(f64::exp);
    }

    let parallel = z.len() >= PARALLEL_THRESHOLD;
    let tolerance = bit_width.tolerance();

    let mut x = Array::<f64, D>::ones(z.raw_dim());
    let mut y = Array::<f64, D>::zeros(z.raw_dim());
    let mut residual = z.to_owned();
    let mut active = Array::from_elem(z.raw_dim(), true);

    for stage in 0..bit_width.bits() {
        let step = |x: &mut f64, y: &mut f64, z: &mut f64, active: &mut bool| {
            if *active {
                *active = recode_step(x, y, z, tolerance);
            }
        };

        let zip = Zip::from(&mut x)
            .and(&mut y)
            .and(&mut residual)
            .and(&mut active);
        if parallel {
            zip.par_for_each(step);
        } else {
            zip.for_each(step);
        }

        let remaining = active.iter().filter(|&&a| a).count();
        trace!("pipelined stage {} of {}: {} element(s) active", stage, bit_width, remaining);
        if remaining == 0 {
            break;
        }
    }

    x + y
}

/// Runs one stage for a single element. Returns `false`, leaving the element
/// untouched, once its residual is within `tolerance`.
#[inline]
fn recode_step(x: &mut f64, y: &mut f64, z: &mut f64, tolerance: f64) -> bool {
    let z_abs = z.abs();
    if z_abs <= tolerance {
        return false;
    }

    let index = nearest_angle(&ANGLES, z_abs);
    rotate(x, y, z, index);
    *x *= SCALES[index];
    *y *= SCALES[index];
    true
}

/// Index of the angle closest to `z_abs`; ties go to the lowest index.
pub fn nearest_angle(angles: &[f64], z_abs: f64) -> usize {
    angles
        .iter()
        .enumerate()
        .fold((0, f64::INFINITY), |(best, best_distance), (j, &theta)| {
            let distance = (z_abs - theta).abs();
            if distance < best_distance {
                (j, distance)
            } else {
                (best, best_distance)
            }
        })
        .0
}
