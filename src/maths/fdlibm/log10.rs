use super::log::ln_with;
use super::scaling::{BitFrexp, Frexp};

// 1/ln(10)
const IVLN10: f64 = f64::from_bits(0x3fdb_cb7b_1526_e50e);

/// Base-10 logarithm computed as `ln(x) / ln(10)`.
///
/// Zero is outside the domain here: `log10(±0)` is NaN, whereas [`ln`]
/// returns `-inf` for zero. NaN propagates and `log10(+inf) = +inf`.
///
/// [`ln`]: super::ln
#[inline]
pub fn log10(x: f64) -> f64 {
    log10_with::<BitFrexp>(x)
}

/// [`log10`] with a caller-supplied mantissa/exponent split.
#[inline]
pub fn log10_with<D: Frexp>(x: f64) -> f64 {
    if x <= 0.0 {
        return f64::NAN;
    }
    ln_with::<D>(x) * IVLN10
}
