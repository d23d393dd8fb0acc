//! pow(x, y) implementation.
//!
//! fdlibm e_pow: after the IEEE special-case ladder, compute log2|x| in
//! split precision over one of two intervals, multiply by y in split
//! precision, screen the product against the overflow/underflow cutoffs
//! (with the OVT tie-break), and rebuild 2^z with the exp polynomial and
//! direct exponent patching. The sign, for negative x and odd integer y,
//! goes on last.
//!
//! Three shortcuts sit ahead of the ladder: y = 0 answers 1 for every x
//! including NaN, y = 2 answers x*x exactly, and y = 0.5 defers to sqrt.

use super::{hi_word, lo_word, scalbn_internal, set_high_word, set_low_word, sqrt};

const BP: [f64; 2] = [1.0, 1.5];
const DP_H: [f64; 2] = [0.0, 5.849_624_872_207_641_601_56e-01]; // log2(1.5) hi
const DP_L: [f64; 2] = [0.0, 1.350_039_202_129_748_971_28e-08]; // log2(1.5) lo

const TWO53: f64 = 9_007_199_254_740_992.0;
const HUGE: f64 = 1.0e300;
const TINY: f64 = 1.0e-300;

// Polynomial for (3/2)*(log(x) - 2s - 2/3*s^3).
const L1: f64 = 5.999_999_999_999_946_487_25e-01;
const L2: f64 = 4.285_714_285_785_501_842_52e-01;
const L3: f64 = 3.333_333_298_183_774_329_18e-01;
const L4: f64 = 2.727_281_238_085_340_064_89e-01;
const L5: f64 = 2.306_607_457_755_617_540_67e-01;
const L6: f64 = 2.069_750_178_003_384_177_84e-01;
// exp-family correction polynomial.
const P1: f64 = 1.666_666_666_666_660_190_37e-01;
const P2: f64 = -2.777_777_777_701_559_338_42e-03;
const P3: f64 = 6.613_756_321_437_934_361_17e-05;
const P4: f64 = -1.653_390_220_546_525_153_90e-06;
const P5: f64 = 4.138_136_797_057_238_460_39e-08;

const LG2: f64 = 6.931_471_805_599_452_862_27e-01;
const LG2_H: f64 = 6.931_471_824_645_996_093_75e-01;
const LG2_L: f64 = -1.904_654_299_957_768_045_25e-09;
const OVT: f64 = 8.008_566_259_537_294_437_2e-17; // -(1024 - log2(ovfl + 0.5 ulp))
const CP: f64 = 9.617_966_939_259_755_543_29e-01; // 2/(3 ln2)
const CP_H: f64 = 9.617_967_009_544_372_558_59e-01; // head of CP
const CP_L: f64 = -7.028_461_650_952_758_265_16e-09; // tail of CP_H
const IVLN2: f64 = 1.442_695_040_888_963_387_00e+00; // 1/ln2
const IVLN2_H: f64 = 1.442_695_021_629_333_496_09e+00; // 24 bits of 1/ln2
const IVLN2_L: f64 = 1.925_962_991_126_617_468_87e-08; // 1/ln2 tail

#[inline]
pub fn pow(x: f64, y: f64) -> f64 {
    let hx = hi_word(x) as i32;
    let lx = lo_word(x);
    let hy = hi_word(y) as i32;
    let ly = lo_word(y);
    let ix = (hx as u32) & 0x7fff_ffff;
    let iy = (hy as u32) & 0x7fff_ffff;

    // x**0 = 1 for every x, NaN included.
    if (iy | ly) == 0 {
        return 1.0;
    }
    // NaN propagates once y = 0 is out of the way.
    if ix > 0x7ff0_0000
        || (ix == 0x7ff0_0000 && lx != 0)
        || iy > 0x7ff0_0000
        || (iy == 0x7ff0_0000 && ly != 0)
    {
        return x + y;
    }

    // For x < 0, classify y: 0 = not an integer, 1 = odd, 2 = even.
    let mut yisint: i32 = 0;
    if hx < 0 {
        if iy >= 0x4340_0000 {
            yisint = 2; // |y| >= 2^52 is always an even integer
        } else if iy >= 0x3ff0_0000 {
            let k = ((iy >> 20) as i32) - 0x3ff;
            if k > 20 {
                let j = ly >> (52 - k);
                if (j << (52 - k)) == ly {
                    yisint = 2 - (j & 1) as i32;
                }
            } else if ly == 0 {
                let j = iy >> (20 - k);
                if (j << (20 - k)) == iy {
                    yisint = 2 - (j & 1) as i32;
                }
            }
        }
    }

    // Special values of y.
    if ly == 0 {
        if iy == 0x7ff0_0000 {
            // y is ±inf
            if (ix.wrapping_sub(0x3ff0_0000) | lx) == 0 {
                return y - y; // (±1)**±inf is NaN
            }
            if ix >= 0x3ff0_0000 {
                // (|x| > 1)**±inf = inf, 0
                return if hy >= 0 { y } else { 0.0 };
            }
            // (|x| < 1)**∓inf = inf, 0
            return if hy < 0 { -y } else { 0.0 };
        }
        if iy == 0x3ff0_0000 {
            // y is ±1
            return if hy < 0 { 1.0 / x } else { x };
        }
        if hy == 0x4000_0000 {
            return x * x; // y is 2
        }
        if hy == 0x3fe0_0000 && hx >= 0 {
            return sqrt(x); // y is 0.5, x is not negative
        }
    }

    let mut ax = x.abs();
    // Special values of x.
    if lx == 0 && (ix == 0x7ff0_0000 || ix == 0 || ix == 0x3ff0_0000) {
        // x is ±0, ±inf or ±1
        let mut z = ax;
        if hy < 0 {
            z = 1.0 / z; // (1/|x|)**|y|
        }
        if hx < 0 {
            if (ix.wrapping_sub(0x3ff0_0000) | yisint as u32) == 0 {
                z = (z - z) / (z - z); // (-1)**non-integer is NaN
            } else if yisint == 1 {
                z = -z; // (x < 0)**odd
            }
        }
        return z;
    }

    let n = (hx >> 31) + 1;
    // (x < 0)**(non-integer) is NaN.
    if (n | yisint) == 0 {
        return (x - x) / (x - x);
    }

    // s carries the sign of the result.
    let mut s = 1.0;
    if (n | (yisint - 1)) == 0 {
        s = -1.0; // (x < 0)**(odd integer)
    }

    // t1 + t2 = log2(ax) in split precision.
    let t1;
    let t2;
    if iy > 0x41e0_0000 {
        // |y| > 2^31
        if iy > 0x43f0_0000 {
            // |y| > 2^64: must over- or underflow
            if ix <= 0x3fef_ffff {
                return if hy < 0 { HUGE * HUGE } else { TINY * TINY };
            }
            if ix >= 0x3ff0_0000 {
                return if hy > 0 { HUGE * HUGE } else { TINY * TINY };
            }
        }
        // Over/underflow unless x is within 2^-20 of 1.
        if ix < 0x3fef_ffff {
            return if hy < 0 { s * HUGE * HUGE } else { s * TINY * TINY };
        }
        if ix > 0x3ff0_0000 {
            return if hy > 0 { s * HUGE * HUGE } else { s * TINY * TINY };
        }
        // |1-x| is tiny: log2(ax) from x - x^2/2 + x^3/3 - x^4/4.
        let t = ax - 1.0;
        let w = (t * t) * (0.5 - t * (0.333_333_333_333_333_333_33 - t * 0.25));
        let u = IVLN2_H * t; // IVLN2_H has 21 significant bits
        let v = t * IVLN2_L - w * IVLN2;
        t1 = set_low_word(u + v, 0);
        t2 = v - (t1 - u);
    } else {
        let mut n = 0;
        let mut ix = ix;
        if ix < 0x0010_0000 {
            // subnormal x
            ax *= TWO53;
            n -= 53;
            ix = hi_word(ax);
        }
        n += ((ix >> 20) as i32) - 0x3ff;
        let j = ix & 0x000f_ffff;
        // Determine the interval: bp[k] is 1 or 1.5.
        ix = j | 0x3ff0_0000;
        let k: usize;
        if j <= 0x3988e {
            k = 0; // |x| < sqrt(3/2)
        } else if j < 0xbb67a {
            k = 1; // |x| < sqrt(3)
        } else {
            k = 0;
            n += 1;
            ix -= 0x0010_0000;
        }
        ax = set_high_word(ax, ix);

        // ss = s_h + s_l = (ax - bp[k]) / (ax + bp[k]) in split precision.
        let u = ax - BP[k];
        let v = 1.0 / (ax + BP[k]);
        let ss = u * v;
        let s_h = set_low_word(ss, 0);
        // t_h = ax + bp[k] with the low half cleared.
        let t_h = set_high_word(
            0.0,
            ((ix >> 1) | 0x2000_0000) + 0x0008_0000 + ((k as u32) << 18),
        );
        let t_l = ax - (t_h - BP[k]);
        let s_l = v * ((u - s_h * t_h) - s_h * t_l);
        // Compute log(ax).
        let s2 = ss * ss;
        let mut r = s2 * s2 * (L1 + s2 * (L2 + s2 * (L3 + s2 * (L4 + s2 * (L5 + s2 * L6)))));
        r += s_l * (s_h + ss);
        let s2 = s_h * s_h;
        let t_h = set_low_word(3.0 + s2 + r, 0);
        let t_l = r - ((t_h - 3.0) - s2);
        // u + v = ss*(1 + ...).
        let u = s_h * t_h;
        let v = s_l * t_h + t_l * ss;
        // 2/(3 log2)*(ss + ...).
        let p_h = set_low_word(u + v, 0);
        let p_l = v - (p_h - u);
        let z_h = CP_H * p_h;
        let z_l = CP_L * p_h + p_l * CP + DP_L[k];
        // log2(ax) = (ss + ...)*2/(3 ln2) = n + dp_h + z_h + z_l.
        let t = n as f64;
        t1 = set_low_word(((z_h + z_l) + DP_H[k]) + t, 0);
        t2 = z_l - (((t1 - t) - DP_H[k]) - z_h);
    }

    // Split y into y1 + y2 and compute (y1 + y2)*(t1 + t2).
    let y1 = set_low_word(y, 0);
    let mut p_l = (y - y1) * t1 + y * t2;
    let mut p_h = y1 * t1;
    let z = p_l + p_h;
    let j = hi_word(z) as i32;
    let i = lo_word(z);
    if j >= 0x4090_0000 {
        // z >= 1024
        if (((j - 0x4090_0000) as u32) | i) != 0 {
            return s * HUGE * HUGE; // overflow
        }
        if p_l + OVT > z - p_h {
            return s * HUGE * HUGE; // overflow
        }
    } else if (j & 0x7fff_ffff) >= 0x4090_cc00 {
        // z <= -1075
        if ((j.wrapping_sub(0xc090_cc00u32 as i32) as u32) | i) != 0 {
            return s * TINY * TINY; // underflow
        }
        if p_l <= z - p_h {
            return s * TINY * TINY; // underflow
        }
    }

    // 2^(p_h + p_l) via the exp polynomial, in the exact same split style.
    let i = j & 0x7fff_ffff;
    let k = (i >> 20) - 0x3ff;
    let mut n = 0;
    if i > 0x3fe0_0000 {
        // |z| > 0.5: set n to the nearest integer of z
        n = j + (0x0010_0000 >> (k + 1));
        let k = ((n & 0x7fff_ffff) >> 20) - 0x3ff; // new k for n
        let t = set_high_word(0.0, (n as u32) & !(0x000f_ffffu32 >> k));
        n = ((n & 0x000f_ffff) | 0x0010_0000) >> (20 - k);
        if j < 0 {
            n = -n;
        }
        p_h -= t;
    }
    let t = set_low_word(p_l + p_h, 0);
    let u = t * LG2_H;
    let v = (p_l - (t - p_h)) * LG2 + t * LG2_L;
    let mut z = u + v;
    let w = v - (z - u);
    let t = z * z;
    let t1 = z - t * (P1 + t * (P2 + t * (P3 + t * (P4 + t * P5))));
    let r = (z * t1) / (t1 - 2.0) - (w + z * w);
    z = 1.0 - (r - z);
    let j = (hi_word(z) as i32).wrapping_add(n << 20);
    if (j >> 20) <= 0 {
        z = scalbn_internal(z, n); // subnormal output
    } else {
        z = set_high_word(z, j as u32);
    }
    s * z
}
