//! tanh(x) implementation.
//!
//! fdlibm s_tanh: expm1(±2|x|) with a branch at |x| = 1 to dodge
//! cancellation on either side, saturating to ±1 from |x| = 22 on.

use super::{expm1, hi_word};

const TINY: f64 = 1.0e-300;

#[inline]
pub fn tanh(x: f64) -> f64 {
    let jx = hi_word(x) as i32;
    let ix = (jx as u32) & 0x7fff_ffff;

    if ix >= 0x7ff0_0000 {
        // tanh(±inf) = ±1, tanh(NaN) = NaN
        if jx >= 0 {
            return 1.0 / x + 1.0;
        }
        return 1.0 / x - 1.0;
    }

    let z;
    if ix < 0x4036_0000 {
        // |x| < 22
        if ix < 0x3c80_0000 {
            // |x| < 2^-55
            return x * (1.0 + x);
        }
        if ix >= 0x3ff0_0000 {
            // |x| >= 1
            let t = expm1(2.0 * x.abs());
            z = 1.0 - 2.0 / (t + 2.0);
        } else {
            let t = expm1(-2.0 * x.abs());
            z = -t / (t + 2.0);
        }
    } else {
        // |x| >= 22: tanh(x) = ±1 to working precision
        z = 1.0 - TINY;
    }
    if jx >= 0 {
        z
    } else {
        -z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_cases() {
        assert_eq!(tanh(0.0).to_bits(), 0.0f64.to_bits());
        assert_eq!(tanh(-0.0).to_bits(), (-0.0f64).to_bits());
        assert!(tanh(f64::NAN).is_nan());
        assert_eq!(tanh(f64::INFINITY), 1.0);
        assert_eq!(tanh(f64::NEG_INFINITY), -1.0);
    }

    #[test]
    fn saturation() {
        assert_eq!(tanh(22.0), 1.0);
        assert_eq!(tanh(-22.0), -1.0);
        assert_eq!(tanh(1.0e10), 1.0);
        assert_eq!(tanh(1.0e300), 1.0);
        assert!(tanh(18.0) < 1.0);
    }

    #[test]
    fn close_to_std() {
        let values = [1.0e-20, 0.1, -0.1, 0.5, 0.99, 1.0, -1.0, 1.5, 5.0, -5.0, 21.0];
        for &x in &values {
            let got = tanh(x);
            let want = x.tanh();
            let rel = ((got - want) / want).abs();
            assert!(rel < 4.0e-15, "tanh({x}): got {got:e}, want {want:e}");
        }
    }
}
