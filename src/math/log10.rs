//! log10(x) implementation.
//!
//! fdlibm e_log10: pull the binary exponent out by hand so k*log10(2) can be
//! added in split precision, then scale the natural log of the remaining
//! mantissa by 1/ln(10). Keeps log10(10^n) exact for small n.

use super::utils::TWO54;
use super::{hi_word, ln, lo_word, set_high_word};

const IVLN10: f64 = 4.342_944_819_032_518_166_68e-01;
const LOG10_2HI: f64 = 3.010_299_956_636_117_713_06e-01;
const LOG10_2LO: f64 = 3.694_239_077_158_930_786_16e-13;

#[inline]
pub fn log10(mut x: f64) -> f64 {
    let mut hx = hi_word(x) as i32;
    let lx = lo_word(x);

    let mut k: i32 = 0;
    if hx < 0x0010_0000 {
        // x < 2^-1022
        if (((hx as u32) & 0x7fff_ffff) | lx) == 0 {
            return f64::NEG_INFINITY; // log10(±0) = -inf
        }
        if hx < 0 {
            return f64::NAN; // log10 of a negative number
        }
        k -= 54;
        x *= TWO54; // renormalize subnormal x
        hx = hi_word(x) as i32;
    }
    if hx >= 0x7ff0_0000 {
        return x + x; // +inf or NaN
    }
    k += (hx >> 20) - 1023;
    let i = ((k as u32) & 0x8000_0000) >> 31;
    let hx = ((hx as u32) & 0x000f_ffff) | ((0x3ff - i) << 20);
    let y = (k + i as i32) as f64;
    x = set_high_word(x, hx);
    let z = y * LOG10_2LO + IVLN10 * ln(x);
    z + y * LOG10_2HI
}
