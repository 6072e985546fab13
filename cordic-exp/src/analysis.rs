//! Value-error statistics between an exact and an emulated simulation run.
//!
//! Recorded traces use the `[time, batch, neuron]` layout; only batch 0 is
//! compared. Every routine takes the nominal encoding window `time` that the
//! statistics are normalized by.

use ndarray::{Array1, ArrayBase, Data, Dimension, Ix2, Ix3, Zip};

use crate::error::{CordicError, Result};

fn check_shapes<S1, S2, D>(left: &ArrayBase<S1, D>, right: &ArrayBase<S2, D>) -> Result<()>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D: Dimension,
{
    if left.shape() != right.shape() {
        return Err(CordicError::ShapeMismatch {
            left: left.shape().to_vec(),
            right: right.shape().to_vec(),
        });
    }
    Ok(())
}

// batch 0 must exist and `time` must be usable as a divisor
fn check_traces<S>(trace: &ArrayBase<S, Ix3>, time: usize) -> Result<()>
where
    S: Data<Elem = f64>,
{
    if trace.dim().1 == 0 {
        return Err(CordicError::EmptyBatch {
            shape: trace.shape().to_vec(),
        });
    }
    if time == 0 {
        return Err(CordicError::ZeroWindow);
    }
    Ok(())
}

fn spike_times<S>(trace: &ArrayBase<S, Ix3>, neuron: usize) -> Vec<usize>
where
    S: Data<Elem = f64>,
{
    (0..trace.dim().0)
        .filter(|&t| trace[[t, 0, neuron]] != 0.0)
        .collect()
}

/// Mean signed shift of spike times of `spikes_b` against `spikes`, per
/// neuron, divided by `time`.
///
/// A non-zero sample marks a spike. The k-th spike of one run is paired with
/// the k-th spike of the other; unpaired spikes are ignored and a neuron
/// without any pair scores zero.
///
/// Fails on an empty batch axis or a zero `time`.
pub fn spike_timing_error<S1, S2>(
    spikes: &ArrayBase<S1, Ix3>,
    spikes_b: &ArrayBase<S2, Ix3>,
    time: usize,
) -> Result<Array1<f64>>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    check_shapes(spikes, spikes_b)?;
    check_traces(spikes, time)?;
    let neurons = spikes.dim().2;

    Ok(Array1::from_shape_fn(neurons, |n| {
        let a = spike_times(spikes, n);
        let b = spike_times(spikes_b, n);
        let paired = a.len().min(b.len());
        if paired == 0 {
            return 0.0;
        }
        let shift: f64 = a
            .iter()
            .zip(&b)
            .map(|(&ta, &tb)| tb as f64 - ta as f64)
            .sum();
        shift / paired as f64 / time as f64
    }))
}

/// Root of the summed squared voltage difference per neuron over `time`.
///
/// Fails on an empty batch axis or a zero `time`.
pub fn nrmsd_error<S1, S2>(
    voltages: &ArrayBase<S1, Ix3>,
    voltages_b: &ArrayBase<S2, Ix3>,
    time: usize,
) -> Result<Array1<f64>>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    check_shapes(voltages, voltages_b)?;
    check_traces(voltages, time)?;
    let (steps, _, neurons) = voltages.dim();

    Ok(Array1::from_shape_fn(neurons, |n| {
        let squared: f64 = (0..steps)
            .map(|t| (voltages[[t, 0, n]] - voltages_b[[t, 0, n]]).powi(2))
            .sum();
        (squared / time as f64).sqrt()
    }))
}

/// Root mean square difference of two weight matrices. Empty matrices score
/// zero.
pub fn weights_error<S1, S2>(weights: &ArrayBase<S1, Ix2>, weights_b: &ArrayBase<S2, Ix2>) -> Result<f64>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    check_shapes(weights, weights_b)?;
    if weights.is_empty() {
        return Ok(0.0);
    }

    let mut squared = 0.0;
    Zip::from(weights)
        .and(weights_b)
        .for_each(|&a, &b| squared += (a - b).powi(2));
    Ok((squared / weights.len() as f64).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{arr2, Array2, Array3};

    fn spike_train(times: &[&[usize]], steps: usize) -> Array3<f64> {
        let mut trace = Array3::zeros((steps, 1, times.len()));
        for (n, spikes) in times.iter().enumerate() {
            for &t in spikes.iter() {
                trace[[t, 0, n]] = 1.0;
            }
        }
        trace
    }

    #[test]
    fn spike_timing() {
        let a = spike_train(&[&[1, 5, 9], &[2], &[]], 10);
        let b = spike_train(&[&[2, 7], &[1, 4], &[3]], 10);
        let res = spike_timing_error(&a, &b, 10).unwrap();
        // neuron 0: ((2 - 1) + (7 - 5)) / 2 / 10
        assert_abs_diff_eq!(res[0], 0.15, epsilon = 1e-15);
        // neuron 1: (1 - 2) / 1 / 10
        assert_abs_diff_eq!(res[1], -0.1, epsilon = 1e-15);
        assert_eq!(res[2], 0.0);
    }

    #[test]
    fn identical_runs_have_no_error() {
        let a = spike_train(&[&[0, 3], &[4]], 6);
        assert_eq!(spike_timing_error(&a, &a, 6).unwrap(), Array1::<f64>::zeros(2));
        assert_eq!(nrmsd_error(&a, &a, 6).unwrap(), Array1::<f64>::zeros(2));
        let w = arr2(&[[0.5, 0.25], [1.0, -1.0]]);
        assert_eq!(weights_error(&w, &w).unwrap(), 0.0);
    }

    #[test]
    fn nrmsd() {
        let mut a = Array3::zeros((4, 1, 2));
        let mut b = Array3::zeros((4, 1, 2));
        a[[0, 0, 0]] = 1.0;
        b[[2, 0, 0]] = -1.0;
        a[[3, 0, 1]] = 2.0;
        let res = nrmsd_error(&a, &b, 4).unwrap();
        assert_abs_diff_eq!(res[0], (2.0f64 / 4.0).sqrt(), epsilon = 1e-15);
        assert_abs_diff_eq!(res[1], 1.0, epsilon = 1e-15);
    }

    #[test]
    fn weights() {
        let a = arr2(&[[1.0, 2.0], [3.0, 4.0]]);
        let b = arr2(&[[1.0, 0.0], [3.0, 6.0]]);
        // sqrt((4 + 4) / 4)
        assert_abs_diff_eq!(weights_error(&a, &b).unwrap(), 2f64.sqrt(), epsilon = 1e-15);
        let empty = Array2::<f64>::zeros((0, 3));
        assert_eq!(weights_error(&empty, &empty).unwrap(), 0.0);
    }

    #[test]
    fn empty_batch_rejected() {
        let a = Array3::<f64>::zeros((4, 0, 2));
        let expected = CordicError::EmptyBatch {
            shape: vec![4, 0, 2],
        };
        assert_eq!(spike_timing_error(&a, &a, 4).unwrap_err(), expected);
        assert_eq!(nrmsd_error(&a, &a, 4).unwrap_err(), expected);
    }

    #[test]
    fn zero_window_rejected() {
        let a = spike_train(&[&[1], &[2]], 3);
        assert_eq!(
            spike_timing_error(&a, &a, 0).unwrap_err(),
            CordicError::ZeroWindow
        );
        assert_eq!(nrmsd_error(&a, &a, 0).unwrap_err(), CordicError::ZeroWindow);
    }

    #[test]
    fn no_time_steps() {
        let a = Array3::<f64>::zeros((0, 1, 2));
        assert_eq!(spike_timing_error(&a, &a, 5).unwrap(), Array1::<f64>::zeros(2));
        assert_eq!(nrmsd_error(&a, &a, 5).unwrap(), Array1::<f64>::zeros(2));
    }

    #[test]
    fn shape_mismatch() {
        let a = Array3::<f64>::zeros((5, 1, 3));
        let b = Array3::<f64>::zeros((5, 1, 4));
        assert_eq!(
            spike_timing_error(&a, &b, 5).unwrap_err(),
            CordicError::ShapeMismatch {
                left: vec![5, 1, 3],
                right: vec![5, 1, 4]
            }
        );
        assert!(nrmsd_error(&a, &b, 5).is_err());
        assert!(weights_error(&arr2(&[[1.0]]), &arr2(&[[1.0, 2.0]])).is_err());
    }
}
