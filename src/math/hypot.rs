//! hypot(x, y) implementation.
//!
//! fdlibm e_hypot: order the operands by magnitude, rescale by 2^±600 when
//! either is extreme, and accumulate the sum of squares in split hi/lo
//! pieces so sqrt sees an argument good to the last bit. Stays within 1 ulp
//! without ever overflowing an intermediate.

use super::{hi_word, lo_word, set_high_word, sqrt, with_hi_lo};

#[inline]
pub fn hypot(x: f64, y: f64) -> f64 {
    let mut ha = hi_word(x) & 0x7fff_ffff;
    let mut hb = hi_word(y) & 0x7fff_ffff;
    let (mut a, mut b) = if hb > ha {
        core::mem::swap(&mut ha, &mut hb);
        (y, x)
    } else {
        (x, y)
    };
    a = set_high_word(a, ha); // a = |a|
    b = set_high_word(b, hb); // b = |b|
    if ha - hb > 0x3c0_0000 {
        return a + b; // a/b > 2^60
    }

    let mut k: i32 = 0;
    if ha > 0x5f30_0000 {
        // a > 2^500
        if ha >= 0x7ff0_0000 {
            // inf or NaN; an infinity wins even against NaN
            let mut w = a + b;
            if ((ha & 0xf_ffff) | lo_word(a)) == 0 {
                w = a;
            }
            if ((hb ^ 0x7ff0_0000) | lo_word(b)) == 0 {
                w = b;
            }
            return w;
        }
        // scale a and b by 2^-600
        ha -= 0x2580_0000;
        hb -= 0x2580_0000;
        k += 600;
        a = set_high_word(a, ha);
        b = set_high_word(b, hb);
    }
    if hb < 0x20b0_0000 {
        // b < 2^-500
        if hb <= 0x000f_ffff {
            // subnormal b, or zero
            if (hb | lo_word(b)) == 0 {
                return a;
            }
            let t1 = with_hi_lo(0x7fd0_0000, 0); // 2^1022
            b *= t1;
            a *= t1;
            k -= 1022;
        } else {
            // scale a and b by 2^600
            ha += 0x2580_0000;
            hb += 0x2580_0000;
            k -= 600;
            a = set_high_word(a, ha);
            b = set_high_word(b, hb);
        }
    }

    // Medium-sized a and b: split the squares.
    let mut w = a - b;
    if w > b {
        let t1 = with_hi_lo(ha, 0);
        let t2 = a - t1;
        w = sqrt(t1 * t1 - (b * (-b) - t2 * (a + t1)));
    } else {
        a += a;
        let y1 = with_hi_lo(hb, 0);
        let y2 = b - y1;
        let t1 = with_hi_lo(ha + 0x0010_0000, 0);
        let t2 = a - t1;
        w = sqrt(t1 * y1 - (w * (-w) - (t1 * y2 + t2 * b)));
    }
    if k != 0 {
        let t1 = with_hi_lo(0x3ff0_0000u32.wrapping_add((k as u32) << 20), 0);
        t1 * w
    } else {
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pythagorean_triples() {
        assert_eq!(hypot(3.0, 4.0), 5.0);
        assert_eq!(hypot(-3.0, 4.0), 5.0);
        assert_eq!(hypot(4.0, -3.0), 5.0);
        assert_eq!(hypot(5.0, 12.0), 13.0);
        assert_eq!(hypot(0.0, -7.5), 7.5);
    }

    #[test]
    fn infinity_beats_nan() {
        assert_eq!(hypot(f64::INFINITY, f64::NAN), f64::INFINITY);
        assert_eq!(hypot(f64::NAN, f64::NEG_INFINITY), f64::INFINITY);
        assert_eq!(hypot(f64::NEG_INFINITY, 1.0), f64::INFINITY);
        assert!(hypot(f64::NAN, 1.0).is_nan());
        assert!(hypot(2.0, f64::NAN).is_nan());
    }

    #[test]
    fn scaling_paths() {
        // huge operands: would overflow without the 2^-600 rescale
        let big = hypot(1.5e300, 2.0e300);
        let want = (1.5f64 * 1.5 + 2.0 * 2.0).sqrt() * 1.0e300;
        assert!(((big - want) / want).abs() < 1.0e-15, "got {big:e}");
        // subnormal operands: would flush to zero without the 2^1022 prescale
        let tiny = hypot(3.0e-320, 4.0e-320);
        assert!((tiny / 5.0e-320 - 1.0).abs() < 1.0e-10, "got {tiny:e}");
        // lopsided: answer is just the bigger magnitude
        assert_eq!(hypot(1.0e300, 1.0e-300), 1.0e300);
    }
}
