//! asin(x) implementation.
//!
//! fdlibm e_asin: |x| < 0.5 goes through a direct rational approximation;
//! otherwise asin(x) = pi/2 - 2*asin(sqrt((1-|x|)/2)) with the square root
//! carried in split precision, and a closer formula above |x| = 0.975.
//! The rational kernel is shared with acos.

use super::utils::{PIO2_HI, PIO2_LO};
use super::{hi_word, lo_word, set_low_word, sqrt};

const HUGE: f64 = 1.0e300;
const PIO4_HI: f64 = 7.853_981_633_974_482_789_99e-01;

const PS0: f64 = 1.666_666_666_666_666_574_15e-01;
const PS1: f64 = -3.255_658_186_224_009_154_05e-01;
const PS2: f64 = 2.012_125_321_348_629_348_97e-01;
const PS3: f64 = -4.005_553_450_067_941_140_27e-02;
const PS4: f64 = 7.915_349_942_898_145_321_76e-04;
const PS5: f64 = 3.479_331_075_960_211_675_70e-05;
const QS1: f64 = -2.403_394_911_734_414_218_78e+00;
const QS2: f64 = 2.020_945_760_233_505_694_71e+00;
const QS3: f64 = -6.882_839_716_054_532_930_06e-01;
const QS4: f64 = 7.703_815_055_590_193_527_91e-02;

/// Rational approximation of (asin(sqrt(z)) - sqrt(z)) / sqrt(z)^3 for
/// z in [0, 0.25]. Shared by asin and acos.
pub(crate) fn r(z: f64) -> f64 {
    let p = z * (PS0 + z * (PS1 + z * (PS2 + z * (PS3 + z * (PS4 + z * PS5)))));
    let q = 1.0 + z * (QS1 + z * (QS2 + z * (QS3 + z * QS4)));
    p / q
}

#[inline]
pub fn asin(x: f64) -> f64 {
    let hx = hi_word(x) as i32;
    let ix = (hx as u32) & 0x7fff_ffff;

    if ix >= 0x3ff0_0000 {
        // |x| >= 1
        if (ix.wrapping_sub(0x3ff0_0000) | lo_word(x)) == 0 {
            // asin(±1) = ±pi/2
            return x * PIO2_HI + x * PIO2_LO;
        }
        return f64::NAN; // |x| > 1
    }
    if ix < 0x3fe0_0000 {
        // |x| < 0.5
        if ix < 0x3e40_0000 {
            // |x| < 2^-27: asin(x) = x to working precision
            if HUGE + x > 1.0 {
                return x;
            }
        }
        let t = x * x;
        return x + x * r(t);
    }

    // 0.5 <= |x| < 1
    let w = 1.0 - x.abs();
    let t = w * 0.5;
    let s = sqrt(t);
    if ix >= 0x3fef_3333 {
        // |x| > 0.975
        let t = PIO2_HI - (2.0 * (s + s * r(t)) - PIO2_LO);
        return if hx > 0 { t } else { -t };
    }
    let w = set_low_word(s, 0);
    let c = (t - w * w) / (s + w); // sqrt(t) - w, exactly
    let p = 2.0 * s * r(t) - (PIO2_LO - 2.0 * c);
    let q = PIO4_HI - 2.0 * w;
    let t = PIO4_HI - (p - q);
    if hx > 0 {
        t
    } else {
        -t
    }
}
