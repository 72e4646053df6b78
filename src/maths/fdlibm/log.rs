// The algorithm and constants below come from FreeBSD's
// /usr/src/lib/msun/src/e_log.c, which came with this notice:
//
// ====================================================
// Copyright (C) 1993 by Sun Microsystems, Inc. All rights reserved.
//
// Developed at SunPro, a Sun Microsystems, Inc. business.
// Permission to use, copy, modify, and distribute this
// software is freely granted, provided that this notice
// is preserved.
// ====================================================

use super::scaling::{BitFrexp, Frexp};
use super::{isinf, isnan, signbit};

// ========= fdlibm e_log.c constants =========

// ln2 = LN2_HI + LN2_LO; n*LN2_HI is exact for |n| < 2000.
const LN2_HI: f64 = f64::from_bits(0x3fe6_2e42_fee0_0000);
const LN2_LO: f64 = f64::from_bits(0x3dea_39ef_3579_3c76);

// Remez fit of R(s) on [0, 0.1716], |error| <= 2^-58.45.
const LG1: f64 = f64::from_bits(0x3fe5_5555_5555_5593);
const LG2: f64 = f64::from_bits(0x3fd9_9999_9997_fa04);
const LG3: f64 = f64::from_bits(0x3fd2_4924_9422_9359);
const LG4: f64 = f64::from_bits(0x3fcc_71c5_1d8e_78af);
const LG5: f64 = f64::from_bits(0x3fc7_4664_96cb_03de);
const LG6: f64 = f64::from_bits(0x3fc3_9a09_d078_c69f);
const LG7: f64 = f64::from_bits(0x3fc2_f112_df3e_5244);

const SQRT2: f64 = core::f64::consts::SQRT_2;

/// Splits finite positive `x` into `(f1, k)` with `x = f1 * 2^k` and
/// `f1` in `[sqrt(2)/2, sqrt(2))`.
#[inline(always)]
pub(crate) fn reduce<D: Frexp>(x: f64) -> (f64, i32) {
    let (mut f1, mut ki) = D::frexp(x);
    if f1 < SQRT2 / 2.0 {
        f1 *= 2.0;
        ki -= 1;
    }
    (f1, ki)
}

/// Natural logarithm, error < 1 ulp.
///
/// * `ln(NaN)` is that NaN, `ln(+inf) = +inf`
/// * `ln(x) = NaN` for `x < 0`, including `-inf`
/// * `ln(±0) = -inf`
#[inline]
pub fn ln(x: f64) -> f64 {
    ln_with::<BitFrexp>(x)
}

/// [`ln`] with a caller-supplied mantissa/exponent split.
#[inline]
pub fn ln_with<D: Frexp>(x: f64) -> f64 {
    // NaN and +inf must be handled before the sign test.
    if isnan(x) || (isinf(x) && !signbit(x)) {
        return x;
    }
    if x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 {
        return f64::NEG_INFINITY;
    }

    let (f1, ki) = reduce::<D>(x);
    let f = f1 - 1.0;
    let k = ki as f64;

    // log(1+f) = 2s + s*R(s^2), s = f/(2+f); odd and even terms split
    // into two shorter Horner chains.
    let s = f / (2.0 + f);
    let s2 = s * s;
    let s4 = s2 * s2;
    let t1 = s2 * (LG1 + s4 * (LG3 + s4 * (LG5 + s4 * LG7)));
    let t2 = s4 * (LG2 + s4 * (LG4 + s4 * LG6));
    let r = t1 + t2;

    let hfsq = 0.5 * f * f;
    k * LN2_HI - ((hfsq - (s * (hfsq + r) + k * LN2_LO)) - f)
}
