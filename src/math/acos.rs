//! acos(x) implementation.
//!
//! fdlibm e_acos, sharing asin's rational kernel. The |x| > 0.5 ranges go
//! through sqrt((1±x)/2), with the low half of the square root zeroed to
//! form an exact split for the x > 0.5 case.

use super::asin::r;
use super::utils::{PIO2_HI, PIO2_LO};
use super::{hi_word, lo_word, set_low_word, sqrt};

use core::f64::consts::PI;

#[inline]
pub fn acos(x: f64) -> f64 {
    let hx = hi_word(x) as i32;
    let ix = (hx as u32) & 0x7fff_ffff;

    if ix >= 0x3ff0_0000 {
        // |x| >= 1
        if (ix.wrapping_sub(0x3ff0_0000) | lo_word(x)) == 0 {
            // acos(1) = 0, acos(-1) = pi
            if hx > 0 {
                return 0.0;
            }
            return PI + 2.0 * PIO2_LO;
        }
        return f64::NAN; // |x| > 1
    }
    if ix < 0x3fe0_0000 {
        // |x| < 0.5
        if ix <= 0x3c60_0000 {
            // |x| < 2^-57: acos(x) = pi/2 to working precision
            return PIO2_HI + PIO2_LO;
        }
        let z = x * x;
        return PIO2_HI - (x - (PIO2_LO - x * r(z)));
    }
    if hx < 0 {
        // x < -0.5
        let z = (1.0 + x) * 0.5;
        let s = sqrt(z);
        let w = r(z) * s - PIO2_LO;
        return PI - 2.0 * (s + w);
    }
    // x > 0.5
    let z = (1.0 - x) * 0.5;
    let s = sqrt(z);
    let df = set_low_word(s, 0);
    let c = (z - df * df) / (s + df);
    let w = r(z) * s + c;
    2.0 * (df + w)
}
