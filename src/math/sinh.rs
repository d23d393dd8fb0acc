//! sinh(x) implementation.
//!
//! fdlibm e_sinh: expm1-based formulas below |x| = 22 to keep cancellation
//! out, a bare exp in the middle range, and exp(|x|/2) squared to stretch
//! past the point where exp alone would already overflow.

use super::{exp, expm1, hi_word, lo_word};

const SHUGE: f64 = 1.0e307;

#[inline]
pub fn sinh(x: f64) -> f64 {
    let jx = hi_word(x) as i32;
    let ix = (jx as u32) & 0x7fff_ffff;

    // x is inf or NaN
    if ix >= 0x7ff0_0000 {
        return x + x;
    }

    let h = if jx < 0 { -0.5 } else { 0.5 };
    if ix < 0x4036_0000 {
        // |x| < 22
        if ix < 0x3e30_0000 {
            // |x| < 2^-28: sinh(x) = x to working precision
            if SHUGE + x > 1.0 {
                return x;
            }
        }
        let t = expm1(x.abs());
        if ix < 0x3ff0_0000 {
            return h * (2.0 * t - t * t / (t + 1.0));
        }
        return h * (t + t / (t + 1.0));
    }
    if ix < 0x4086_2e42 {
        // 22 <= |x| < log(DBL_MAX): sinh(x) = sign(x)*exp(|x|)/2
        return h * exp(x.abs());
    }
    // log(DBL_MAX) <= |x| <= overflow threshold
    let lx = lo_word(x);
    if ix < 0x4086_33ce || (ix == 0x4086_33ce && lx <= 0x8fb9_f87d) {
        let w = exp(0.5 * x.abs());
        let t = h * w;
        return t * w;
    }
    // |x| > overflow threshold
    x * SHUGE
}
