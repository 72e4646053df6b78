#![no_std]

#[cfg(test)]
extern crate std;

pub mod maths;

pub use maths::fdlibm;
pub use maths::fdlibm::{BitFrexp, Frexp, frexp, ldexp, ln, ln_with, log10, log10_with};
