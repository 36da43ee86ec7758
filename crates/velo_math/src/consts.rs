//! Numeric `f64` constants.

pub use std::f64::consts::*;

pub const TWO_PI: f64 = TAU;
