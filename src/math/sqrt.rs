//! sqrt(x) implementation.
//!
//! Digit-by-digit square root on the two 32-bit mantissa words, after the
//! fdlibm e_sqrt scheme: normalize to an even exponent, generate one result
//! bit per step for 53 bits plus a guard, then round to nearest on the
//! leftover remainder. Correctly rounded, and identical on every target.

use super::{hi_word, lo_word, with_hi_lo};

const TINY: f64 = 1.0e-300;

#[inline]
pub fn sqrt(x: f64) -> f64 {
    const SIGN: u32 = 0x8000_0000;

    let mut ix0 = hi_word(x);
    let mut ix1 = lo_word(x);

    // sqrt(NaN) = NaN, sqrt(+inf) = +inf, sqrt(-inf) = NaN
    if (ix0 & 0x7ff0_0000) == 0x7ff0_0000 {
        return x * x + x;
    }
    if (ix0 as i32) <= 0 {
        if ((ix0 & !SIGN) | ix1) == 0 {
            return x; // sqrt(±0) = ±0
        }
        if (ix0 as i32) < 0 {
            return (x - x) / (x - x); // sqrt(negative) = NaN
        }
    }

    // Normalize: even exponent, explicit leading mantissa bit.
    let mut m = (ix0 >> 20) as i32;
    if m == 0 {
        // subnormal x
        while ix0 == 0 {
            m -= 21;
            ix0 |= ix1 >> 11;
            ix1 <<= 21;
        }
        let mut i = 0;
        while (ix0 & 0x0010_0000) == 0 {
            ix0 <<= 1;
            i += 1;
        }
        m -= i - 1;
        if i > 0 {
            ix0 |= ix1 >> (32 - i);
            ix1 <<= i;
        }
    }
    m -= 1023;
    ix0 = (ix0 & 0x000f_ffff) | 0x0010_0000;
    if (m & 1) != 0 {
        // odd exponent: double the mantissa
        ix0 = ix0.wrapping_add(ix0).wrapping_add(ix1 >> 31);
        ix1 = ix1.wrapping_add(ix1);
    }
    m >>= 1;

    // Generate sqrt(x) one bit at a time.
    ix0 = ix0.wrapping_add(ix0).wrapping_add(ix1 >> 31);
    ix1 = ix1.wrapping_add(ix1);
    let mut q: u32 = 0; // q + q1 holds the result bits
    let mut q1: u32 = 0;
    let mut s0: u32 = 0;
    let mut s1: u32 = 0;

    let mut r: u32 = 0x0020_0000;
    while r != 0 {
        let t = s0 + r;
        if t <= ix0 {
            s0 = t + r;
            ix0 -= t;
            q += r;
        }
        ix0 = ix0.wrapping_add(ix0).wrapping_add(ix1 >> 31);
        ix1 = ix1.wrapping_add(ix1);
        r >>= 1;
    }

    r = SIGN;
    while r != 0 {
        let t1 = s1.wrapping_add(r);
        let t = s0;
        if t < ix0 || (t == ix0 && t1 <= ix1) {
            s1 = t1.wrapping_add(r);
            if (t1 & SIGN) == SIGN && (s1 & SIGN) == 0 {
                s0 += 1; // carry into the high half
            }
            ix0 -= t;
            if ix1 < t1 {
                ix0 -= 1; // borrow from the high half
            }
            ix1 = ix1.wrapping_sub(t1);
            q1 = q1.wrapping_add(r);
        }
        ix0 = ix0.wrapping_add(ix0).wrapping_add(ix1 >> 31);
        ix1 = ix1.wrapping_add(ix1);
        r >>= 1;
    }

    // Round to nearest on the remainder.
    if (ix0 | ix1) != 0 {
        let mut z = 1.0 - TINY;
        if z >= 1.0 {
            z = 1.0 + TINY;
            if q1 == 0xffff_ffff {
                q1 = 0;
                q += 1;
            } else if z > 1.0 {
                if q1 == 0xffff_fffe {
                    q += 1;
                }
                q1 = q1.wrapping_add(2);
            } else {
                q1 += q1 & 1;
            }
        }
    }
    ix0 = (q >> 1) + 0x3fe0_0000;
    ix1 = q1 >> 1;
    if (q & 1) != 0 {
        ix1 |= SIGN;
    }
    ix0 = ix0.wrapping_add((m as u32) << 20);
    with_hi_lo(ix0, ix1)
}
