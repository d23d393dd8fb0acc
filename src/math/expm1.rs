//! expm1(x) implementation.
//!
//! fdlibm s_expm1: the same k*ln2 reduction as exp, but the -1 stays
//! explicit all the way through so small arguments lose nothing to
//! cancellation. Reconstruction picks one of six formulas depending on k.

use super::utils::{LN2_HI, LN2_LO};
use super::{hi_word, lo_word, set_high_word};

const HUGE: f64 = 1.0e300;
const TINY: f64 = 1.0e-300;
const O_THRESHOLD: f64 = 7.097_827_128_933_839_730_96e+02;
const INVLN2: f64 = 1.442_695_040_888_963_387_00e+00;

const Q1: f64 = -3.333_333_333_333_313_164_28e-02;
const Q2: f64 = 1.587_301_587_254_814_601_65e-03;
const Q3: f64 = -7.936_507_578_674_879_424_73e-05;
const Q4: f64 = 4.008_217_827_329_362_395_52e-06;
const Q5: f64 = -2.010_992_181_836_243_713_26e-07;

#[inline]
pub fn expm1(mut x: f64) -> f64 {
    let mut hx = hi_word(x);
    let xsb = hx & 0x8000_0000; // sign bit of x
    hx &= 0x7fff_ffff;

    // Filter out huge and non-finite arguments.
    if hx >= 0x4043_687a {
        // |x| >= 56 ln2
        if hx >= 0x4086_2e42 {
            // |x| >= 709.78...
            if hx >= 0x7ff0_0000 {
                if ((hx & 0xf_ffff) | lo_word(x)) != 0 {
                    return x + x; // NaN
                }
                return if xsb == 0 { x } else { -1.0 }; // expm1(±inf) = inf, -1
            }
            if x > O_THRESHOLD {
                return HUGE * HUGE; // overflow
            }
        }
        if xsb != 0 {
            // x < -56 ln2: the answer is -1 to working precision
            return TINY - 1.0;
        }
    }

    // Argument reduction.
    let mut k: i32 = 0;
    let mut c = 0.0;
    if hx > 0x3fd6_2e42 {
        // |x| > 0.5 ln2
        let (hi, lo) = if hx < 0x3ff0_a2b2 {
            // and |x| < 1.5 ln2
            if xsb == 0 {
                k = 1;
                (x - LN2_HI, LN2_LO)
            } else {
                k = -1;
                (x + LN2_HI, -LN2_LO)
            }
        } else {
            k = (INVLN2 * x + if xsb == 0 { 0.5 } else { -0.5 }) as i32;
            let t = k as f64;
            (x - t * LN2_HI, t * LN2_LO) // t*ln2_hi is exact here
        };
        x = hi - lo;
        c = (hi - x) - lo;
    } else if hx < 0x3c90_0000 {
        // |x| < 2^-54: x itself is the rounded answer
        let t = HUGE + x;
        return x - (t - (HUGE + x));
    }

    // expm1(r) on the primary range, via a degree-5 rational correction.
    let hfx = 0.5 * x;
    let hxs = x * hfx;
    let r1 = 1.0 + hxs * (Q1 + hxs * (Q2 + hxs * (Q3 + hxs * (Q4 + hxs * Q5))));
    let t = 3.0 - r1 * hfx;
    let mut e = hxs * ((r1 - t) / (6.0 - x * t));
    if k == 0 {
        return x - (x * e - hxs); // c is 0
    }
    e = x * (e - c) - c;
    e -= hxs;
    if k == -1 {
        return 0.5 * (x - e) - 0.5;
    }
    if k == 1 {
        if x < -0.25 {
            return -2.0 * (e - (x + 0.5));
        }
        return 1.0 + 2.0 * (x - e);
    }
    if k <= -2 || k > 56 {
        // exp(x) - 1 and exp(x) agree to working precision
        let mut y = 1.0 - (e - x);
        y = set_high_word(y, hi_word(y).wrapping_add((k as u32) << 20)); // 2^k
        return y - 1.0;
    }
    if k < 20 {
        let t = set_high_word(1.0, 0x3ff0_0000u32 - (0x0020_0000u32 >> k)); // 1 - 2^-k
        let mut y = t - (e - x);
        y = set_high_word(y, hi_word(y).wrapping_add((k as u32) << 20)); // 2^k
        return y;
    }
    let t = set_high_word(1.0, (0x3ffu32 - k as u32) << 20); // 2^-k
    let mut y = x - (e + t);
    y += 1.0;
    y = set_high_word(y, hi_word(y).wrapping_add((k as u32) << 20)); // 2^k
    y
}
