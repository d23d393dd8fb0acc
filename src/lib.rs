//! Bit-for-bit reproducible IEEE 754 binary64 elementary functions.
//!
//! Every function in this crate computes the same bit pattern on every
//! platform. The algorithms are pure word manipulation in the fdlibm
//! lineage: split the argument into its 32-bit halves, reduce, evaluate a
//! minimax polynomial, and patch the exponent bits back in. No hardware
//! intrinsics and no calls into the system libm, so a language runtime can
//! rely on `exp`, `pow`, `atan2`, ... agreeing across architectures down to
//! the last bit.
//!
//! Accuracy is within 1 ulp for finite in-domain inputs (`sqrt` is
//! correctly rounded), and each function reproduces its documented IEEE
//! special-case table exactly. All functions are total and pure: domain
//! errors come back as NaN, range overflows as ±inf or ±0, and nothing
//! panics or allocates.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod math;

pub use math::{
    acos, asin, atan, atan2, cbrt, cosh, exp, expm1, hypot, ln, log10, log1p, pow, sinh, sqrt,
    tanh,
};
