use super::f64_to_bits;

const ABS_MASK: u64 = 0x7fff_ffff_ffff_ffffu64;
const INF_BITS: u64 = 0x7ff0_0000_0000_0000u64;

/// Any NaN, quiet or signalling, either sign.
#[inline(always)]
pub fn isnan(x: f64) -> bool {
    (f64_to_bits(x) & ABS_MASK) > INF_BITS
}

/// Infinity of either sign.
#[inline(always)]
pub fn isinf(x: f64) -> bool {
    (f64_to_bits(x) & ABS_MASK) == INF_BITS
}

/// Sign bit, set for `-0.0` and negative NaNs too.
#[inline(always)]
pub fn signbit(x: f64) -> bool {
    (f64_to_bits(x) >> 63) != 0
}
