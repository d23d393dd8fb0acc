//! Portable f64 elementary functions and the shared bit-view helpers.
//!
//! Every routine in this module is a pure word-based algorithm in the fdlibm
//! lineage: the argument is split into its high and low 32-bit words, reduced,
//! approximated by a minimax polynomial, and reassembled by patching exponent
//! bits. No hardware intrinsics and no platform libm are involved, so the
//! results are bit-for-bit identical on every target.

#![allow(clippy::excessive_precision)]

mod acos;
mod asin;
mod atan;
mod atan2;
mod cbrt;
mod cosh;
mod exp;
mod expm1;
mod hypot;
mod log;
mod log10;
mod log1p;
mod pow;
mod sinh;
mod sqrt;
mod tanh;
mod utils;

pub use acos::acos;
pub use asin::asin;
pub use atan::atan;
pub use atan2::atan2;
pub use cbrt::cbrt;
pub use cosh::cosh;
pub use exp::exp;
pub use expm1::expm1;
pub use hypot::hypot;
pub use log::ln;
pub use log10::log10;
pub use log1p::log1p;
pub use pow::pow;
pub use sinh::sinh;
pub use sqrt::sqrt;
pub use tanh::tanh;

/// High 32 bits of `x`: sign, biased exponent, top 20 mantissa bits.
#[inline(always)]
fn hi_word(x: f64) -> u32 {
    (x.to_bits() >> 32) as u32
}

/// Low 32 bits of `x`'s mantissa.
#[inline(always)]
fn lo_word(x: f64) -> u32 {
    x.to_bits() as u32
}

/// Assemble an f64 from its two 32-bit words.
#[inline(always)]
fn with_hi_lo(hi: u32, lo: u32) -> f64 {
    f64::from_bits(((hi as u64) << 32) | (lo as u64))
}

/// Replace the high word of `x`, keeping the low word.
#[inline(always)]
fn set_high_word(x: f64, hi: u32) -> f64 {
    f64::from_bits((x.to_bits() & 0x0000_0000_ffff_ffff) | ((hi as u64) << 32))
}

/// Replace the low word of `x`, keeping the high word.
#[inline(always)]
fn set_low_word(x: f64, lo: u32) -> f64 {
    f64::from_bits((x.to_bits() & 0xffff_ffff_0000_0000) | (lo as u64))
}

/// x * 2^n by patching the exponent word, with overflow/underflow handling.
///
/// Only the subnormal-result path of `pow` needs this; everything else
/// patches exponents inline.
#[inline(always)]
fn scalbn_internal(mut x: f64, n: i32) -> f64 {
    const TWO54: f64 = f64::from_bits(0x4350_0000_0000_0000);
    const TWOM54: f64 = f64::from_bits(0x3c90_0000_0000_0000);
    const HUGE: f64 = 1.0e300;
    const TINY: f64 = 1.0e-300;

    let mut ix = x.to_bits();
    let mut k = ((ix >> 52) & 0x7ff) as i32;
    if k == 0 {
        // 0 or subnormal x
        if (ix & 0x7fff_ffff_ffff_ffff) == 0 {
            return x;
        }
        x *= TWO54;
        ix = x.to_bits();
        k = ((ix >> 52) & 0x7ff) as i32 - 54;
        if n < -50_000 {
            return TINY * x; // underflow
        }
    }
    if k == 0x7ff {
        return x + x; // NaN or inf
    }
    if n > 50_000 || (k as i64 + n as i64) > 0x7fe {
        return HUGE * HUGE.copysign(x); // overflow
    }
    k += n;
    if k > 0 {
        return f64::from_bits((ix & 0x800f_ffff_ffff_ffff) | ((k as u64) << 52));
    }
    if k <= -54 {
        return TINY * TINY.copysign(x); // underflow
    }
    // Subnormal result
    k += 54;
    f64::from_bits((ix & 0x800f_ffff_ffff_ffff) | ((k as u64) << 52)) * TWOM54
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_round_trip() {
        let values = [
            0.0,
            -0.0,
            1.5,
            -1.5,
            f64::MIN_POSITIVE,
            f64::MAX,
            f64::INFINITY,
        ];
        for &x in &values {
            assert_eq!(with_hi_lo(hi_word(x), lo_word(x)).to_bits(), x.to_bits());
        }
        let nan = f64::from_bits(0xfff8_0000_dead_beef);
        assert_eq!(
            with_hi_lo(hi_word(nan), lo_word(nan)).to_bits(),
            nan.to_bits()
        );
    }

    #[test]
    fn word_surgery() {
        assert_eq!(set_high_word(1.0, hi_word(2.0)), 2.0);
        assert_eq!(set_low_word(2.0, 0).to_bits(), 2.0f64.to_bits());
        assert_eq!(set_low_word(1.0, 1).to_bits(), 0x3ff0_0000_0000_0001);
        assert_eq!(with_hi_lo(0x3fe0_0000, 0), 0.5);
    }

    #[test]
    fn scalbn_matches_powi() {
        let cases = [
            (1.0, 1),
            (1.0, -1),
            (1.5, 100),
            (1.5, -100),
            (1e-300, 40),
            (1.0, -1060),
            (f64::MIN_POSITIVE, 30),
        ];
        for &(x, n) in &cases {
            assert_eq!(
                scalbn_internal(x, n).to_bits(),
                (x * 2.0f64.powi(n)).to_bits(),
                "scalbn({x:e}, {n})"
            );
        }
    }

    #[test]
    fn scalbn_edges() {
        assert_eq!(scalbn_internal(-0.0, 10).to_bits(), (-0.0f64).to_bits());
        assert!(scalbn_internal(f64::NAN, 3).is_nan());
        assert_eq!(scalbn_internal(1.0, 5000), f64::INFINITY);
        assert_eq!(scalbn_internal(-1.0, 5000), f64::NEG_INFINITY);
        assert_eq!(scalbn_internal(1.0, -5000), 0.0);
        assert_eq!(scalbn_internal(-1.0, -5000).to_bits(), (-0.0f64).to_bits());
    }
}
