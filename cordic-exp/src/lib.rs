//! Hyperbolic CORDIC exponential units for error evaluation.
//!
//! Emulates 8/16/24/32-bit hardware exponential units, either by running the
//! CORDIC iteration ([`compute_exp`]) or by injecting the measured error of a
//! unit into the exact exponential ([`approximate_exp`]).

//
// parameters, errors and tables
//
pub mod error;
pub mod params;
pub mod tables;

//
// CORDIC engines
//
mod rotation;

pub mod conventional;
pub mod engine;
pub mod pipelined;

//
// error emulation
//
pub mod error_model;
pub mod unit;

//
// value-error statistics
//
pub mod analysis;

pub use engine::compute_exp;
pub use error::{CordicError, Result};
pub use error_model::{approximate_exp, bias, simulate_exp};
pub use params::{BitWidth, CordicVariant, Engine, ErrorMode};
pub use unit::{ExpUnit, ExpUnitConfig, Method};
