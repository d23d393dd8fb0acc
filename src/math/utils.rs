//! Shared split-precision constants.
//!
//! Split pairs follow fdlibm: the `_HI` half carries enough trailing zero
//! bits that products like `k * LN2_HI` stay exact for every `k` the
//! reductions can produce, and the `_LO` half holds the remainder.

/// ln(2), high part.
pub(crate) const LN2_HI: f64 = f64::from_bits(0x3fe6_2e42_fee0_0000);
/// ln(2), low part.
pub(crate) const LN2_LO: f64 = f64::from_bits(0x3dea_39ef_3579_3c76);

/// pi/2, high part (pi/2 rounded to double).
pub(crate) const PIO2_HI: f64 = f64::from_bits(0x3ff9_21fb_5444_2d18);
/// pi/2, low part.
pub(crate) const PIO2_LO: f64 = f64::from_bits(0x3c91_a626_3314_5c07);

/// 2^54, used to renormalize subnormal arguments.
pub(crate) const TWO54: f64 = f64::from_bits(0x4350_0000_0000_0000);
