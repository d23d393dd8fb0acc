//! exp(x) implementation.
//!
//! fdlibm e_exp: reduce x = k*ln2 + r with the split ln2 constants so the
//! reduction is exact, evaluate a degree-5 minimax correction for exp(r) on
//! |r| <= 0.5*ln2, and rebuild the result by writing k straight into the
//! exponent bits. No tables and no platform exp.

use super::utils::{LN2_HI, LN2_LO};
use super::{hi_word, lo_word, set_high_word};

const HALF: [f64; 2] = [0.5, -0.5];
const LN2HI: [f64; 2] = [LN2_HI, -LN2_HI];
const LN2LO: [f64; 2] = [LN2_LO, -LN2_LO];

const HUGE: f64 = 1.0e300;
const TWOM1000: f64 = 9.332_636_185_032_188_789_90e-302; // 2^-1000
const O_THRESHOLD: f64 = 7.097_827_128_933_839_730_96e+02;
const U_THRESHOLD: f64 = -7.451_332_191_019_411_084_20e+02;
const INVLN2: f64 = 1.442_695_040_888_963_387_00e+00;

const P1: f64 = 1.666_666_666_666_660_190_37e-01;
const P2: f64 = -2.777_777_777_701_559_338_42e-03;
const P3: f64 = 6.613_756_321_437_934_361_17e-05;
const P4: f64 = -1.653_390_220_546_525_153_90e-06;
const P5: f64 = 4.138_136_797_057_238_460_39e-08;

#[inline]
pub fn exp(mut x: f64) -> f64 {
    let mut hx = hi_word(x);
    let xsb = ((hx >> 31) & 1) as usize; // sign bit of x
    hx &= 0x7fff_ffff;

    let mut k: i32 = 0;
    let mut hi = 0.0;
    let mut lo = 0.0;

    // Filter out non-finite and out-of-range arguments.
    if hx >= 0x4086_2e42 {
        // |x| >= 709.78...
        if hx >= 0x7ff0_0000 {
            if ((hx & 0xf_ffff) | lo_word(x)) != 0 {
                return x + x; // NaN
            }
            return if xsb == 0 { x } else { 0.0 }; // exp(±inf) = inf, 0
        }
        if x > O_THRESHOLD {
            return HUGE * HUGE; // overflow
        }
        if x < U_THRESHOLD {
            return TWOM1000 * TWOM1000; // underflow
        }
    }

    // Argument reduction.
    if hx > 0x3fd6_2e42 {
        // |x| > 0.5 ln2
        if hx < 0x3ff0_a2b2 {
            // and |x| < 1.5 ln2
            hi = x - LN2HI[xsb];
            lo = LN2LO[xsb];
            k = 1 - (xsb as i32) - (xsb as i32);
        } else {
            k = (INVLN2 * x + HALF[xsb]) as i32;
            let t = k as f64;
            hi = x - t * LN2HI[0]; // t*ln2_hi is exact here
            lo = t * LN2LO[0];
        }
        x = hi - lo;
    } else if hx < 0x3e30_0000 {
        // |x| < 2^-28: 1 + x is the rounded answer
        if HUGE + x > 1.0 {
            return 1.0 + x;
        }
    }

    // x is now in the primary range.
    let t = x * x;
    let c = x - t * (P1 + t * (P2 + t * (P3 + t * (P4 + t * P5))));
    if k == 0 {
        return 1.0 - ((x * c) / (c - 2.0) - x);
    }
    let mut y = 1.0 - ((lo - (x * c) / (2.0 - c)) - hi);
    if k >= -1021 {
        // add k to y's exponent
        y = set_high_word(y, hi_word(y).wrapping_add((k as u32) << 20));
        return y;
    }
    y = set_high_word(y, hi_word(y).wrapping_add(((k + 1000) as u32) << 20));
    y * TWOM1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_cases() {
        assert_eq!(exp(0.0), 1.0);
        assert_eq!(exp(-0.0), 1.0);
        assert!(exp(f64::NAN).is_nan());
        assert_eq!(exp(f64::INFINITY), f64::INFINITY);
        assert_eq!(exp(f64::NEG_INFINITY).to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn overflow_underflow_thresholds() {
        assert!(exp(O_THRESHOLD).is_finite());
        assert_eq!(exp(710.0), f64::INFINITY);
        assert_eq!(exp(1000.0), f64::INFINITY);
        assert!(exp(U_THRESHOLD) > 0.0);
        assert_eq!(exp(-746.0).to_bits(), 0.0f64.to_bits());
        assert_eq!(exp(-1000.0).to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn subnormal_results() {
        // between the gradual-underflow threshold and full underflow
        let y = exp(-709.0);
        assert!(y > 0.0 && y < f64::MIN_POSITIVE);
        let want = (-709.0f64).exp();
        assert!(((y - want) / want).abs() < 1.0e-12, "exp(-709) = {y:e}");
    }

    #[test]
    fn close_to_std() {
        let values = [
            1.0, -1.0, 0.5, -0.5, 2.5, -2.5, 20.0, -20.0, 1.0e-10, 700.0, -700.0,
            0.346_573_590_279_972_64, // 0.5 ln2, reduction boundary
        ];
        for &x in &values {
            let got = exp(x);
            let want = x.exp();
            let rel = ((got - want) / want).abs();
            assert!(rel < 1.0e-15, "exp({x}): got {got:e}, want {want:e}");
        }
    }
}
