//! Natural logarithm implementation.
//!
//! fdlibm e_log: reduce x = 2^k * (1+f) with f in [sqrt(2)/2 - 1, sqrt(2) - 1],
//! then approximate log(1+f) through s = f/(2+f) and a degree-7 even
//! polynomial in s^2, with a cheaper path when |f| < 2^-20.

use super::utils::{LN2_HI, LN2_LO, TWO54};
use super::{hi_word, lo_word, set_high_word};

const LG1: f64 = 6.666_666_666_666_735_130e-01;
const LG2: f64 = 3.999_999_999_940_941_908e-01;
const LG3: f64 = 2.857_142_874_366_239_149e-01;
const LG4: f64 = 2.222_219_843_214_978_396e-01;
const LG5: f64 = 1.818_357_216_161_805_012e-01;
const LG6: f64 = 1.531_383_769_920_937_332e-01;
const LG7: f64 = 1.479_819_860_511_658_591e-01;

#[inline]
pub fn ln(mut x: f64) -> f64 {
    let mut hx = hi_word(x) as i32;
    let lx = lo_word(x);

    let mut k: i32 = 0;
    if hx < 0x0010_0000 {
        // x < 2^-1022
        if (((hx as u32) & 0x7fff_ffff) | lx) == 0 {
            return f64::NEG_INFINITY; // log(±0) = -inf
        }
        if hx < 0 {
            return f64::NAN; // log of a negative number
        }
        k -= 54;
        x *= TWO54; // renormalize subnormal x
        hx = hi_word(x) as i32;
    }
    if hx >= 0x7ff0_0000 {
        return x + x; // +inf or NaN
    }
    k += (hx >> 20) - 1023;
    hx &= 0x000f_ffff;
    let i = (hx + 0x95f64) & 0x10_0000;
    x = set_high_word(x, (hx | (i ^ 0x3ff0_0000)) as u32); // normalize x or x/2
    k += i >> 20;
    let f = x - 1.0;

    if (0x000f_ffff & (2 + hx)) < 3 {
        // |f| < 2^-20
        if f == 0.0 {
            if k == 0 {
                return 0.0;
            }
            let dk = k as f64;
            return dk * LN2_HI + dk * LN2_LO;
        }
        let r = f * f * (0.5 - 0.333_333_333_333_333_33 * f);
        if k == 0 {
            return f - r;
        }
        let dk = k as f64;
        return dk * LN2_HI - ((r - dk * LN2_LO) - f);
    }

    let s = f / (2.0 + f);
    let dk = k as f64;
    let z = s * s;
    let i = hx - 0x6147a;
    let w = z * z;
    let j = 0x6b851 - hx;
    let t1 = w * (LG2 + w * (LG4 + w * LG6));
    let t2 = z * (LG1 + w * (LG3 + w * (LG5 + w * LG7)));
    let i = i | j;
    let r = t2 + t1;
    if i > 0 {
        let hfsq = 0.5 * f * f;
        if k == 0 {
            f - (hfsq - s * (hfsq + r))
        } else {
            dk * LN2_HI - ((hfsq - (s * (hfsq + r) + dk * LN2_LO)) - f)
        }
    } else if k == 0 {
        f - s * (f - r)
    } else {
        dk * LN2_HI - ((s * (f - r) - dk * LN2_LO) - f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_cases() {
        assert_eq!(ln(1.0).to_bits(), 0.0f64.to_bits());
        assert_eq!(ln(0.0), f64::NEG_INFINITY);
        assert_eq!(ln(-0.0), f64::NEG_INFINITY);
        assert!(ln(-1.0).is_nan());
        assert!(ln(f64::NEG_INFINITY).is_nan());
        assert!(ln(f64::NAN).is_nan());
        assert_eq!(ln(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn close_to_std() {
        let values = [
            core::f64::consts::E,
            2.0,
            0.5,
            10.0,
            1.0e300,
            1.0e-300,
            1.000_000_1,
            0.999_999_9,
            f64::MIN_POSITIVE,
            f64::from_bits(1), // smallest subnormal
        ];
        for &x in &values {
            let got = ln(x);
            let want = x.ln();
            let rel = ((got - want) / want).abs();
            assert!(rel < 1.0e-15, "ln({x:e}): got {got:e}, want {want:e}");
        }
    }

    #[test]
    fn ln_e_within_one_ulp_of_one() {
        let y = ln(core::f64::consts::E);
        assert!((y - 1.0).abs() <= f64::EPSILON, "ln(e) = {y:.17}");
    }
}
