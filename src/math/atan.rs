//! atan(x) implementation.
//!
//! fdlibm s_atan: reduce onto [0, 7/16] against the split-precision offsets
//! atan(0.5), atan(1), atan(1.5) and pi/2, then evaluate an 11-term odd
//! polynomial as two interleaved sums.

use super::{hi_word, lo_word};

use core::f64::consts::{FRAC_PI_2, FRAC_PI_4};

const ATANHI: [f64; 4] = [
    4.636_476_090_008_060_935_15e-01, // atan(0.5) hi
    FRAC_PI_4,                        // atan(1.0) hi
    9.827_937_232_473_290_540_82e-01, // atan(1.5) hi
    FRAC_PI_2,                        // atan(inf) hi
];
const ATANLO: [f64; 4] = [
    2.269_877_745_296_168_709_24e-17, // atan(0.5) lo
    3.061_616_997_868_383_017_93e-17, // atan(1.0) lo
    1.390_331_103_123_099_845_16e-17, // atan(1.5) lo
    6.123_233_995_736_766_035_87e-17, // atan(inf) lo
];
const AT: [f64; 11] = [
    3.333_333_333_333_293_180_27e-01,
    -1.999_999_999_987_648_324_76e-01,
    1.428_571_427_250_346_637_11e-01,
    -1.111_111_040_546_235_578_80e-01,
    9.090_887_133_436_506_561_96e-02,
    -7.691_876_205_044_829_994_95e-02,
    6.661_073_137_387_531_206_69e-02,
    -5.833_570_133_790_573_486_45e-02,
    4.976_877_994_615_932_360_17e-02,
    -3.653_157_274_421_691_552_70e-02,
    1.628_582_011_536_578_236_23e-02,
];

const HUGE: f64 = 1.0e300;

#[inline]
pub fn atan(x: f64) -> f64 {
    let hx = hi_word(x) as i32;
    let ix = (hx as u32) & 0x7fff_ffff;

    if ix >= 0x4410_0000 {
        // |x| >= 2^66
        if ix > 0x7ff0_0000 || (ix == 0x7ff0_0000 && lo_word(x) != 0) {
            return x + x; // NaN
        }
        if hx > 0 {
            return ATANHI[3] + ATANLO[3];
        }
        return -ATANHI[3] - ATANLO[3];
    }

    let mut id: i32 = -1;
    let mut ax = x;
    if ix < 0x3fdc_0000 {
        // |x| < 7/16
        if ix < 0x3e40_0000 {
            // |x| < 2^-27: atan(x) = x to working precision
            if HUGE + x > 1.0 {
                return x;
            }
        }
    } else {
        ax = x.abs();
        if ix < 0x3ff3_0000 {
            if ix < 0x3fe6_0000 {
                // 7/16 <= |x| < 11/16
                id = 0;
                ax = (2.0 * ax - 1.0) / (2.0 + ax);
            } else {
                // 11/16 <= |x| < 19/16
                id = 1;
                ax = (ax - 1.0) / (ax + 1.0);
            }
        } else if ix < 0x4003_8000 {
            // 19/16 <= |x| < 39/16
            id = 2;
            ax = (ax - 1.5) / (1.0 + 1.5 * ax);
        } else {
            // |x| >= 39/16
            id = 3;
            ax = -1.0 / ax;
        }
    }

    // Break sum(at[i] * z^(i+1)) into odd and even polynomials.
    let z = ax * ax;
    let w = z * z;
    let s1 = z * (AT[0] + w * (AT[2] + w * (AT[4] + w * (AT[6] + w * (AT[8] + w * AT[10])))));
    let s2 = w * (AT[1] + w * (AT[3] + w * (AT[5] + w * (AT[7] + w * AT[9]))));
    if id < 0 {
        return ax - ax * (s1 + s2);
    }
    let z = ATANHI[id as usize] - ((ax * (s1 + s2) - ATANLO[id as usize]) - ax);
    if hx < 0 {
        -z
    } else {
        z
    }
}
