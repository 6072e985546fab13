use std::slice;

use cordic_exp::{approximate_exp, compute_exp, BitWidth, CordicVariant, Engine, ErrorMode};
use log::warn;
use ndarray::ArrayView1;

// borrow the caller's buffers; both must be non-null and of the same length
unsafe fn buffers<'a>(
    values: *const f64,
    values_length: usize,
    results: *mut f64,
    results_length: usize,
) -> Option<(&'a [f64], &'a mut [f64])> {
    if values.is_null() || results.is_null() || values_length != results_length {
        return None;
    }
    Some((
        slice::from_raw_parts(values, values_length),
        slice::from_raw_parts_mut(results, results_length),
    ))
}

fn copy_results(src: &ndarray::Array1<f64>, dst: &mut [f64]) {
    dst.iter_mut().zip(src.iter()).for_each(|(d, s)| *d = *s);
}

// engine: 0 = conventional, 1 = pipelined
#[no_mangle]
pub extern "C" fn cordic_compute_exp(
    values: *const f64,
    values_length: usize,
    results: *mut f64,
    results_length: usize,
    bit_width: u32,
    engine: u8,
    exact: bool,
) -> bool {
    let params = BitWidth::try_from(bit_width).and_then(|w| Ok((w, Engine::try_from(engine)?)));
    let (width, engine) = match params {
        Ok(p) => p,
        Err(err) => {
            warn!("rejected cordic_compute_exp call: {}", err);
            return false;
        }
    };

    let (vals, res) = match unsafe { buffers(values, values_length, results, results_length) } {
        Some(b) => b,
        None => return false,
    };

    let exp = compute_exp(&ArrayView1::from(vals), width, engine, exact);
    copy_results(&exp, res);
    true
}

// mode: 0 = average, 1 = worst case, 2 = negligible
// variant: 0 = control, 1 = conventional, 2 = angle recoded, 3 = pipelined
#[no_mangle]
pub extern "C" fn cordic_approximate_exp(
    values: *const f64,
    values_length: usize,
    results: *mut f64,
    results_length: usize,
    bit_width: u32,
    mode: u8,
    variant: u8,
    exact: bool,
) -> bool {
    let params = BitWidth::try_from(bit_width)
        .and_then(|w| Ok((w, ErrorMode::try_from(mode)?, CordicVariant::try_from(variant)?)));
    let (width, mode, variant) = match params {
        Ok(p) => p,
        Err(err) => {
            warn!("rejected cordic_approximate_exp call: {}", err);
            return false;
        }
    };

    let (vals, res) = match unsafe { buffers(values, values_length, results, results_length) } {
        Some(b) => b,
        None => return false,
    };

    match approximate_exp(&ArrayView1::from(vals), width, mode, variant, exact) {
        Ok(exp) => {
            copy_results(&exp, res);
            true
        }
        Err(err) => {
            warn!("cordic_approximate_exp failed: {}", err);
            false
        }
    }
}
