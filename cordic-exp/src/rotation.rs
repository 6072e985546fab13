use crate::tables::{shift, ANGLES};

/// Rotation direction for a residual. Zero rotates in the positive
/// direction: every step has to rotate for the pre-scaled gain to cancel.
/// NaN is returned as is and poisons the accumulators.
#[inline(always)]
pub fn direction(z: f64) -> f64 {
    if z.is_nan() {
        z
    } else if z < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// One sign-directed hyperbolic micro-rotation by `ANGLES[index]`.
///
/// `y` is updated from the already rotated `x`, undoing the `x` step inside
/// the bracket, the way the shift-add datapath reuses its register.
#[inline(always)]
pub fn rotate(x: &mut f64, y: &mut f64, z: &mut f64, index: usize) {
    let d = direction(*z);
    let t = d * shift(index);
    *x += *y * t;
    *y += (*x - *y * t) * t;
    *z -= d * ANGLES[index];
}
