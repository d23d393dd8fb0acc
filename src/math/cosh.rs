//! cosh(x) implementation.
//!
//! fdlibm e_cosh. Below 0.5*ln2 the expm1 form keeps cosh exactly
//! 1 + t^2/(2(1+t)); larger ranges ladder through exp the same way sinh
//! does, overflowing to +inf past the shared threshold.

use super::{exp, expm1, hi_word, lo_word};

const HUGE: f64 = 1.0e300;

#[inline]
pub fn cosh(x: f64) -> f64 {
    let ix = hi_word(x) & 0x7fff_ffff;

    // x is inf or NaN: cosh(±inf) = +inf, cosh(NaN) = NaN
    if ix >= 0x7ff0_0000 {
        return x * x;
    }

    if ix < 0x3fd6_2e43 {
        // |x| < 0.5 ln2
        let t = expm1(x.abs());
        let w = 1.0 + t;
        if ix < 0x3c80_0000 {
            return w; // cosh(tiny) = 1
        }
        return 1.0 + (t * t) / (w + w);
    }
    if ix < 0x4036_0000 {
        // 0.5 ln2 <= |x| < 22
        let t = exp(x.abs());
        return 0.5 * t + 0.5 / t;
    }
    if ix < 0x4086_2e42 {
        // 22 <= |x| < log(DBL_MAX): cosh(x) = exp(|x|)/2
        return 0.5 * exp(x.abs());
    }
    // log(DBL_MAX) <= |x| <= overflow threshold
    let lx = lo_word(x);
    if ix < 0x4086_33ce || (ix == 0x4086_33ce && lx <= 0x8fb9_f87d) {
        let w = exp(0.5 * x.abs());
        let t = 0.5 * w;
        return t * w;
    }
    HUGE * HUGE // overflow
}
