//! cbrt(x) implementation.
//!
//! fdlibm s_cbrt: a 5-bit seed straight from the exponent bits, one rational
//! correction step good to about 23 bits, then a single Newton iteration on
//! a truncated-and-biased value of t so that t*t stays exact.

use super::{hi_word, lo_word, set_high_word, set_low_word};

const B1: u32 = 715_094_163; // B1 = (682-0.03306235651)*2^20
const B2: u32 = 696_219_795; // B2 = (664-0.03306235651)*2^20

const C: f64 = 5.428_571_428_571_428_159_06e-01; // 19/35
const D: f64 = -7.053_061_224_489_796_110_50e-01; // -864/1225
const E: f64 = 1.414_285_714_285_714_368_19e+00; // 99/70
const F: f64 = 1.607_142_857_142_857_206_30e+00; // 45/28
const G: f64 = 3.571_428_571_428_571_507_87e-01; // 5/14

#[inline]
pub fn cbrt(x: f64) -> f64 {
    let hx = hi_word(x) & 0x7fff_ffff;

    if hx >= 0x7ff0_0000 {
        return x + x; // cbrt(NaN, ±inf) is itself
    }
    if (hx | lo_word(x)) == 0 {
        return x; // cbrt(±0) is itself
    }

    let ax = set_high_word(x, hx); // |x|

    // Rough cbrt to 5 bits.
    let mut t;
    if hx < 0x0010_0000 {
        // subnormal: prescale by 2^54 so the exponent trick applies
        t = set_high_word(0.0, 0x4350_0000);
        t *= ax;
        t = set_high_word(t, hi_word(t) / 3 + B2);
    } else {
        t = set_high_word(0.0, hx / 3 + B1);
    }

    // Rational step: cbrt to 23 bits.
    let r = t * t / ax;
    let s = C + r * t;
    t *= G + F / (s + E + D / s);

    // Chop t to 20 bits and bias it 1 ulp above cbrt(|x|).
    t = set_low_word(t, 0);
    t = set_high_word(t, hi_word(t) + 1);

    // One Newton step to 53 bits; t*t and r-s are exact.
    let s = t * t;
    let mut r = ax / s;
    let w = t + t;
    r = (r - t) / (w + r);
    t += t * r;

    if x.is_sign_negative() {
        t = -t;
    }
    t
}
