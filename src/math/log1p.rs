//! log1p(x) implementation.
//!
//! fdlibm s_log1p: computes log(1+x) without ever forming 1+x when that
//! addition would round, by carrying the rounding error c = (1+x) - u back
//! into the result as c/u. Shares the e_log polynomial.

use super::utils::{LN2_HI, LN2_LO, TWO54};
use super::{hi_word, set_high_word};

const LP1: f64 = 6.666_666_666_666_735_130e-01;
const LP2: f64 = 3.999_999_999_940_941_908e-01;
const LP3: f64 = 2.857_142_874_366_239_149e-01;
const LP4: f64 = 2.222_219_843_214_978_396e-01;
const LP5: f64 = 1.818_357_216_161_805_012e-01;
const LP6: f64 = 1.531_383_769_920_937_332e-01;
const LP7: f64 = 1.479_819_860_511_658_591e-01;

#[inline]
pub fn log1p(x: f64) -> f64 {
    let hx = hi_word(x) as i32;
    let ax = (hx as u32) & 0x7fff_ffff;

    let mut k: i32 = 1;
    let mut f = x;
    let mut hu: i32 = 1;
    let mut c = 0.0;
    if hx < 0x3fda_827a {
        // 1+x < sqrt(2)
        if ax >= 0x3ff0_0000 {
            // x <= -1
            if x == -1.0 {
                return f64::NEG_INFINITY; // log1p(-1) = -inf
            }
            return f64::NAN; // log1p(x < -1)
        }
        if ax < 0x3e20_0000 {
            // |x| < 2^-29
            if TWO54 + x > 0.0 && ax < 0x3c90_0000 {
                // |x| < 2^-54
                return x;
            }
            return x - x * x * 0.5;
        }
        if hx > 0 || hx <= 0xbfd2_bec3u32 as i32 {
            // -0.2929 < x < 0.41422
            k = 0;
        }
    } else if ax >= 0x7ff0_0000 {
        return x + x; // +inf or NaN
    }
    if k != 0 {
        let mut u;
        if hx < 0x4340_0000 {
            u = 1.0 + x;
            hu = hi_word(u) as i32;
            k = (hu >> 20) - 1023;
            // correction term for the rounding of 1+x
            c = if k > 0 { 1.0 - (u - x) } else { x - (u - 1.0) };
            c /= u;
        } else {
            // x >= 2^53: 1+x == x
            u = x;
            hu = hi_word(u) as i32;
            k = (hu >> 20) - 1023;
            c = 0.0;
        }
        hu &= 0x000f_ffff;
        if hu < 0x6a09e {
            u = set_high_word(u, (hu | 0x3ff0_0000) as u32); // normalize u
        } else {
            k += 1;
            u = set_high_word(u, (hu | 0x3fe0_0000) as u32); // normalize u/2
            hu = (0x0010_0000 - hu) >> 2;
        }
        f = u - 1.0;
    }
    let hfsq = 0.5 * f * f;
    if hu == 0 {
        // |f| < 2^-20
        if f == 0.0 {
            if k == 0 {
                return 0.0;
            }
            c += k as f64 * LN2_LO;
            return k as f64 * LN2_HI + c;
        }
        let r = hfsq * (1.0 - 0.666_666_666_666_666_66 * f);
        if k == 0 {
            return f - r;
        }
        return k as f64 * LN2_HI - ((r - (k as f64 * LN2_LO + c)) - f);
    }
    let s = f / (2.0 + f);
    let z = s * s;
    let r = z * (LP1 + z * (LP2 + z * (LP3 + z * (LP4 + z * (LP5 + z * (LP6 + z * LP7))))));
    if k == 0 {
        f - (hfsq - s * (hfsq + r))
    } else {
        k as f64 * LN2_HI - ((hfsq - (s * (hfsq + r) + (k as f64 * LN2_LO + c))) - f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_cases() {
        assert_eq!(log1p(0.0).to_bits(), 0.0f64.to_bits());
        assert_eq!(log1p(-0.0).to_bits(), (-0.0f64).to_bits());
        assert_eq!(log1p(-1.0), f64::NEG_INFINITY);
        assert!(log1p(-1.5).is_nan());
        assert!(log1p(f64::NEG_INFINITY).is_nan());
        assert!(log1p(f64::NAN).is_nan());
        assert_eq!(log1p(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn tiny_arguments_pass_through() {
        let x = 1.0e-20;
        assert_eq!(log1p(x).to_bits(), x.to_bits());
        assert_eq!(log1p(-x).to_bits(), (-x).to_bits());
    }

    #[test]
    fn close_to_std() {
        let values = [
            1.0e-10, -1.0e-10, 0.1, -0.1, 0.41, -0.29, 1.0, 10.0, 1.0e15, 1.0e300, -0.999_999,
        ];
        for &x in &values {
            let got = log1p(x);
            let want = x.ln_1p();
            let rel = ((got - want) / want).abs();
            assert!(rel < 1.0e-15, "log1p({x:e}): got {got:e}, want {want:e}");
        }
    }
}
