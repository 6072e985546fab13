//! Rotation tables shared by every CORDIC engine.
//!
//! Both tables are indexed by the rotation step `i`, which shifts by
//! `2^-(i+1)`. Neither depends on the bit width; the bit width only decides
//! how many of the entries a conventional engine walks through and which
//! pre-scale constant it starts from.

use crate::params::BitWidth;

pub const TABLE_LEN: usize = 32;

/// Hyperbolic rotation angles, `atanh(2^-(i+1))`.
pub const ANGLES: [f64; TABLE_LEN] = [
    0.549306144334055,
    0.255412811882995,
    0.125657214140453,
    0.0625815714770030,
    0.0312601784906670,
    0.0156262717520522,
    0.00781265895154042,
    0.00390626986839683,
    0.00195312748353255,
    0.000976562810441036,
    0.000488281288805113,
    0.000244140629850639,
    0.000122070313106330,
    6.10351563257912e-05,
    3.05175781344739e-05,
    1.52587890636842e-05,
    7.62939453139803e-06,
    3.81469726564350e-06,
    1.90734863281481e-06,
    9.53674316406539e-07,
    4.76837158203161e-07,
    2.38418579101567e-07,
    1.19209289550782e-07,
    5.96046447753907e-08,
    2.98023223876953e-08,
    1.49011611938477e-08,
    7.45058059692383e-09,
    3.72529029846191e-09,
    1.86264514923096e-09,
    9.31322574615479e-10,
    4.65661287307739e-10,
    2.32830643653870e-10,
];

/// Gain correction for a single rotation by `ANGLES[i]`: `1 / sqrt(1 - 2^-2(i+1))`.
pub const SCALES: [f64; TABLE_LEN] = [
    1.15470053837925,
    1.03279555898864,
    1.00790526135794,
    1.00195886573624,
    1.00048863916916,
    1.00012209266879,
    1.00003051897518,
    1.00000762948184,
    1.00000190735409,
    1.00000047683750,
    1.00000011920931,
    1.00000002980232,
    1.00000000745058,
    1.00000000186265,
    1.00000000046566,
    1.00000000011642,
    1.00000000002910,
    1.00000000000728,
    1.00000000000182,
    1.00000000000045,
    1.00000000000011,
    1.00000000000003,
    1.00000000000001,
    1.0,
    1.0,
    1.0,
    1.0,
    1.0,
    1.0,
    1.0,
    1.0,
    1.0,
];

/// Starting value of `x` for the conventional engine, i.e. the inverse of the
/// accumulated gain of a full run (double steps included), quantized to the
/// datapath.
pub fn prescale(bit_width: BitWidth) -> f64 {
    match bit_width {
        BitWidth::W8 => 1.2109375,
        BitWidth::W16 => 1.207489013671875,
        BitWidth::W24 => 1.207497000694275,
        BitWidth::W32 => 1.2074970677495,
    }
}

/// Shift amount of rotation step `index`, `2^-(index+1)`.
#[inline(always)]
pub fn shift(index: usize) -> f64 {
    2f64.powi(-(index as i32 + 1))
}
