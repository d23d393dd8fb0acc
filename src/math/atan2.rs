//! atan2(y, x) implementation.
//!
//! fdlibm e_atan2: a 2-bit sign code picks among the special cases for zero
//! and infinite operands; everything else reduces to atan(|y/x|) with a
//! quadrant fixup against the split pi.

use super::{atan, hi_word, lo_word, set_high_word};

use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

const TINY: f64 = 1.0e-300;
const PI_LO: f64 = 1.224_646_799_147_353_177_2e-16;

#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    if x.is_nan() || y.is_nan() {
        return x + y;
    }
    let hx = hi_word(x) as i32;
    let lx = lo_word(x);
    let ix = (hx as u32) & 0x7fff_ffff;
    let hy = hi_word(y) as i32;
    let ly = lo_word(y);
    let iy = (hy as u32) & 0x7fff_ffff;

    if ((hx as u32).wrapping_sub(0x3ff0_0000) | lx) == 0 {
        return atan(y); // x = 1.0
    }
    let m = ((hy >> 31) & 1) | ((hx >> 30) & 2); // 2*sign(x) + sign(y)

    // y = 0
    if (iy | ly) == 0 {
        return match m {
            0 | 1 => y,           // atan2(±0, +...) = ±0
            2 => PI + TINY,       // atan2(+0, -...) = pi
            _ => -PI - TINY,      // atan2(-0, -...) = -pi
        };
    }
    // x = 0
    if (ix | lx) == 0 {
        return if hy < 0 { -FRAC_PI_2 - TINY } else { FRAC_PI_2 + TINY };
    }
    // x = ±inf
    if ix == 0x7ff0_0000 {
        if iy == 0x7ff0_0000 {
            return match m {
                0 => FRAC_PI_4 + TINY,        // atan2(+inf, +inf)
                1 => -FRAC_PI_4 - TINY,       // atan2(-inf, +inf)
                2 => 3.0 * FRAC_PI_4 + TINY,  // atan2(+inf, -inf)
                _ => -3.0 * FRAC_PI_4 - TINY, // atan2(-inf, -inf)
            };
        }
        return match m {
            0 => 0.0,        // atan2(+..., +inf)
            1 => -0.0,       // atan2(-..., +inf)
            2 => PI + TINY,  // atan2(+..., -inf)
            _ => -PI - TINY, // atan2(-..., -inf)
        };
    }
    // y = ±inf
    if iy == 0x7ff0_0000 {
        return if hy < 0 { -FRAC_PI_2 - TINY } else { FRAC_PI_2 + TINY };
    }

    // Compute y/x, dodging spurious over/underflow.
    let k = (iy as i32 - ix as i32) >> 20;
    let z = if k > 60 {
        FRAC_PI_2 + 0.5 * PI_LO // |y/x| > 2^60
    } else if hx < 0 && k < -60 {
        0.0 // |y/x| < -2^60
    } else {
        atan((y / x).abs())
    };
    match m {
        0 => z,                                          // atan2(+, +)
        1 => set_high_word(z, hi_word(z) ^ 0x8000_0000), // atan2(-, +)
        2 => PI - (z - PI_LO),                           // atan2(+, -)
        _ => (z - PI_LO) - PI,                           // atan2(-, -)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_table() {
        assert_eq!(atan2(0.0, 1.0).to_bits(), 0.0f64.to_bits());
        assert_eq!(atan2(-0.0, 1.0).to_bits(), (-0.0f64).to_bits());
        assert_eq!(atan2(0.0, 0.0).to_bits(), 0.0f64.to_bits());
        assert_eq!(atan2(0.0, -1.0), PI);
        assert_eq!(atan2(-0.0, -1.0), -PI);
        assert_eq!(atan2(-0.0, -0.0), -PI);
        assert_eq!(atan2(1.0, 0.0), FRAC_PI_2);
        assert_eq!(atan2(-1.0, 0.0), -FRAC_PI_2);
        assert_eq!(atan2(1.0, -0.0), FRAC_PI_2);
    }

    #[test]
    fn infinity_table() {
        let inf = f64::INFINITY;
        assert_eq!(atan2(inf, inf), FRAC_PI_4);
        assert_eq!(atan2(-inf, inf), -FRAC_PI_4);
        assert_eq!(atan2(inf, -inf), 3.0 * FRAC_PI_4);
        assert_eq!(atan2(-inf, -inf), -3.0 * FRAC_PI_4);
        assert_eq!(atan2(1.0, inf).to_bits(), 0.0f64.to_bits());
        assert_eq!(atan2(-1.0, inf).to_bits(), (-0.0f64).to_bits());
        assert_eq!(atan2(1.0, -inf), PI);
        assert_eq!(atan2(-1.0, -inf), -PI);
        assert_eq!(atan2(inf, 1.0), FRAC_PI_2);
        assert_eq!(atan2(-inf, 1.0), -FRAC_PI_2);
        assert!(atan2(f64::NAN, 1.0).is_nan());
        assert!(atan2(1.0, f64::NAN).is_nan());
    }

    #[test]
    fn quadrants_close_to_std() {
        let cases = [
            (1.0, 2.0),
            (-1.0, 2.0),
            (1.0, -2.0),
            (-1.0, -2.0),
            (3.0, 0.1),
            (-0.1, 3.0),
            (1.0e200, 1.0e-200), // shortcut: ratio > 2^60
            (-1.0e-200, -1.0e200),
        ];
        for &(y, x) in &cases {
            let got = atan2(y, x);
            let want = y.atan2(x);
            let rel = ((got - want) / want).abs();
            assert!(rel < 1.0e-15, "atan2({y}, {x}): got {got:e}, want {want:e}");
        }
    }
}
