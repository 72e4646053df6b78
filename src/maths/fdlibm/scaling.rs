use super::{f64_from_bits, f64_to_bits, get_exp_bits};

const SIGN_EXP_CLEAR: u64 = 0x800f_ffff_ffff_ffffu64;
const HALF_EXP: u64 = 0x3feu64 << 52;

const TWO54: f64 = f64::from_bits(0x4350_0000_0000_0000); // 2^54
const TWO1023: f64 = f64::from_bits(0x7fe0_0000_0000_0000); // 2^1023
const TWOM1022: f64 = f64::from_bits(0x0010_0000_0000_0000); // 2^-1022
const TWO53: f64 = f64::from_bits(0x4340_0000_0000_0000); // 2^53

/// Mantissa/exponent split used by the log kernel.
///
/// Implementations must return `(f1, k)` with `x == f1 * 2^k` exactly and
/// `|f1|` in `[0.5, 1)` for every finite non-zero `x`. The kernel never calls
/// it with zero, NaN or an infinity.
pub trait Frexp {
    fn frexp(x: f64) -> (f64, i32);
}

/// Portable split reading the IEEE-754 exponent and mantissa fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitFrexp;

impl Frexp for BitFrexp {
    #[inline(always)]
    fn frexp(x: f64) -> (f64, i32) {
        frexp(x)
    }
}

/// C `frexp`: `(±0, 0)` for zeros, NaN and infinities come back unchanged.
#[inline(always)]
pub fn frexp(x: f64) -> (f64, i32) {
    let ux = f64_to_bits(x);
    let e = get_exp_bits(ux);
    if e == 0 {
        if x == 0.0 {
            return (x, 0);
        }
        // subnormal: scale into the normal range first
        let uy = f64_to_bits(x * TWO54);
        let exp = get_exp_bits(uy) - 1022 - 54;
        return (f64_from_bits((uy & SIGN_EXP_CLEAR) | HALF_EXP), exp);
    }
    if e == 0x7ff {
        return (x, 0);
    }
    (f64_from_bits((ux & SIGN_EXP_CLEAR) | HALF_EXP), e - 1022)
}

/// Inverse of [`frexp`]: `x * 2^n`.
///
/// Exact whenever `x * 2^n` is representable; otherwise the result is
/// rounded once, saturating to ±inf or a signed zero.
#[inline]
pub fn ldexp(mut x: f64, mut n: i32) -> f64 {
    if n > 1023 {
        x *= TWO1023;
        n -= 1023;
        if n > 1023 {
            x *= TWO1023;
            n -= 1023;
            if n > 1023 {
                n = 1023;
            }
        }
    } else if n < -1022 {
        // prescale by 2^-969 so the final multiply rounds only once
        x *= TWOM1022 * TWO53;
        n += 1022 - 53;
        if n < -1022 {
            x *= TWOM1022 * TWO53;
            n += 1022 - 53;
            if n < -1022 {
                n = -1022;
            }
        }
    }
    x * f64_from_bits(((0x3ff + n) as u64) << 52)
}
