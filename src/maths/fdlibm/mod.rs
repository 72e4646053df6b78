//! fdlibm-derived logarithms for `no_std` targets.
//!
//! `ln` follows SunPro's `__ieee754_log`: frexp-style argument reduction, an
//! even-power minimax polynomial in `s = f/(2+f)` and a split `ln 2` for the
//! reconstruction. `log10` scales the natural log by `1/ln 10`.

#![allow(clippy::excessive_precision)]
#![allow(clippy::unusual_byte_groupings)]

mod classify;
mod log;
mod log10;
mod scaling;

pub use classify::{isinf, isnan, signbit};
pub use log::{ln, ln_with};
pub use log10::{log10, log10_with};
pub use scaling::{BitFrexp, Frexp, frexp, ldexp};

// ========= bit helpers =========

#[inline(always)]
fn f64_from_bits(u: u64) -> f64 {
    f64::from_bits(u)
}
#[inline(always)]
fn f64_to_bits(x: f64) -> u64 {
    x.to_bits()
}

#[inline(always)]
fn get_exp_bits(u: u64) -> i32 {
    ((u >> 52) & 0x7ff) as i32
}
