//! 16.16 fixed-point screen arithmetic.
//!
//! Every position the animator accumulates is a `Fix32` so that hundreds of
//! small per-frame steps never drift from rounding.  The legacy animation
//! timing depends on the exact rounding behaviour, so the shift amounts and
//! truncation points are fixed:
//!
//! - products go through `i64` and are shifted right by 16;
//! - conversion to screen integers is an arithmetic `>> 16` (floors toward
//!   negative infinity, exactly like the original integer shifts).

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Number of fractional bits in a [`Fix32`].
pub const FRAC_BITS: u32 = 16;

/// A 16.16 fixed-point value stored in an `i32`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fix32(i32);

impl Fix32 {
    pub const ZERO: Fix32 = Fix32(0);
    pub const ONE:  Fix32 = Fix32(1 << FRAC_BITS);

    /// Wrap a raw 16.16 bit pattern.
    #[inline(always)]
    pub const fn from_raw(raw: i32) -> Self {
        Fix32(raw)
    }

    /// The raw 16.16 bit pattern.
    #[inline(always)]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Promote an integer screen coordinate.
    #[inline(always)]
    pub const fn from_int(v: i32) -> Self {
        Fix32(v << FRAC_BITS)
    }

    /// Truncate to an integer screen coordinate.
    ///
    /// Arithmetic shift: floors toward negative infinity.  Do not replace
    /// with rounding — frame positions must match the legacy truncation.
    #[inline(always)]
    pub const fn to_int(self) -> i32 {
        self.0 >> FRAC_BITS
    }

    /// Fixed × fixed product, intermediate in `i64`.
    #[inline]
    pub fn mul(self, rhs: Fix32) -> Fix32 {
        Fix32(((self.0 as i64 * rhs.0 as i64) >> FRAC_BITS) as i32)
    }

    /// Fixed × integer product.
    #[inline]
    pub fn mul_int(self, n: i32) -> Fix32 {
        Fix32((self.0 as i64 * n as i64) as i32)
    }

    /// Fixed ÷ integer, truncating toward zero.
    #[inline]
    pub fn div_int(self, n: i32) -> Fix32 {
        Fix32(self.0 / n)
    }

    #[inline]
    pub const fn abs(self) -> Fix32 {
        Fix32(self.0.abs())
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Sign as `-1`, `0`, or `1`.
    #[inline]
    pub const fn signum(self) -> i32 {
        self.0.signum()
    }
}

impl Add for Fix32 {
    type Output = Fix32;
    #[inline(always)]
    fn add(self, rhs: Fix32) -> Fix32 {
        Fix32(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for Fix32 {
    type Output = Fix32;
    #[inline(always)]
    fn sub(self, rhs: Fix32) -> Fix32 {
        Fix32(self.0.wrapping_sub(rhs.0))
    }
}

impl Neg for Fix32 {
    type Output = Fix32;
    #[inline(always)]
    fn neg(self) -> Fix32 {
        Fix32(-self.0)
    }
}

impl AddAssign for Fix32 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Fix32) {
        *self = *self + rhs;
    }
}

impl SubAssign for Fix32 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Fix32) {
        *self = *self - rhs;
    }
}

impl fmt::Display for Fix32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0 as f64 / (1i64 << FRAC_BITS) as f64)
    }
}
