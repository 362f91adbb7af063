//! Unsigned 16.16 fixed-point arithmetic
//!
//! MCTS scores live in `[0, 1]` (loss = 0, draw = 0.5, win = 1). The UCT
//! exploration term needs a square root and a natural logarithm, both
//! computed here on integers only.
//!
//! # Example
//!
//! ```
//! use xo::Fixed;
//!
//! let two = Fixed::from_int(2);
//! assert_eq!(two.sqrt(), Fixed::SQRT_2);
//! assert_eq!(Fixed::ONE.ln(), Fixed::ZERO);
//! ```

use std::fmt;

/// Fractional bits
pub const SCALE_BITS: u32 = 16;

/// Interpolation rounds used by [`Fixed::ln`].
const LN_ROUNDS: usize = 20;

/// A value `raw / 2^16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fixed(pub u32);

impl Fixed {
    pub const ZERO: Fixed = Fixed(0);
    pub const HALF: Fixed = Fixed(1 << (SCALE_BITS - 1));
    pub const ONE: Fixed = Fixed(1 << SCALE_BITS);
    /// ln 2 = 0.69314718
    pub const LN_2: Fixed = Fixed(45_426);
    /// sqrt 2, the UCT exploration constant
    pub const SQRT_2: Fixed = Fixed(92_682);

    /// Integer `n` as fixed-point, saturating at the top of the range.
    #[inline]
    pub fn from_int(n: u32) -> Fixed {
        if n < (1 << (32 - SCALE_BITS)) {
            Fixed(n << SCALE_BITS)
        } else {
            Fixed(u32::MAX)
        }
    }

    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }

    /// `(a * b) >> 16` with a 64-bit intermediate.
    #[inline]
    pub fn mul(self, rhs: Fixed) -> Fixed {
        Fixed(((u64::from(self.0) * u64::from(rhs.0)) >> SCALE_BITS) as u32)
    }

    /// Divide by a plain integer.
    #[inline]
    pub fn div_int(self, n: u32) -> Fixed {
        debug_assert!(n > 0);
        Fixed(self.0 / n)
    }

    /// `1 - self`, the same score seen from the opponent.
    #[inline]
    pub fn complement(self) -> Fixed {
        Fixed(Self::ONE.0.saturating_sub(self.0))
    }

    /// Fixed-point square root by bit-by-bit restoring.
    ///
    /// Exact for 0 and 1.0, monotonic everywhere else.
    #[inline]
    pub fn sqrt(self) -> Fixed {
        Fixed(sqrt_raw(u64::from(self.0)) as u32)
    }

    /// Natural logarithm.
    ///
    /// Brackets the input between neighbouring powers of two, then narrows
    /// the bracket [`LN_ROUNDS`] times with a geometric-mean midpoint while
    /// interpolating log2 linearly, finally scaling by ln 2. Inputs below 1.0
    /// (including 0) have no representable unsigned logarithm and map to 0.
    pub fn ln(self) -> Fixed {
        let one = u64::from(Self::ONE.0);
        let y = u64::from(self.0);
        if y < one {
            return Fixed::ZERO;
        }

        let exponent = 63 - y.leading_zeros();
        let mut lo = 1u64 << exponent;
        let mut hi = lo << 1;
        let mut lo_log = u64::from(exponent - SCALE_BITS) << SCALE_BITS;
        let mut hi_log = lo_log + one;
        let mut log = lo_log;

        for _ in 0..LN_ROUNDS {
            if y == lo {
                return Fixed::from_log2(lo_log);
            } else if y == hi {
                return Fixed::from_log2(hi_log);
            }

            log = (lo_log + hi_log) >> 1;
            let mid = sqrt_raw((lo * hi) >> SCALE_BITS);
            if y >= mid {
                lo = mid;
                lo_log = log;
            } else {
                hi = mid;
                hi_log = log;
            }
        }

        Fixed::from_log2(log)
    }

    /// Convert a fixed-point log2 into a natural log.
    #[inline]
    fn from_log2(log2: u64) -> Fixed {
        Fixed(((log2 * u64::from(Self::LN_2.0)) >> SCALE_BITS) as u32)
    }
}

/// Restoring square root of a raw fixed-point value held in a `u64`.
fn sqrt_raw(x: u64) -> u64 {
    let one = 1u64 << SCALE_BITS;
    if x == 0 || x == one {
        return x;
    }

    let target = u128::from(x) << SCALE_BITS;
    let top = (127 - target.leading_zeros()) / 2;
    let mut s = 0u64;
    for i in (0..=top).rev() {
        let candidate = s + (1u64 << i);
        let square = u128::from(candidate) * u128::from(candidate);
        if (square >> SCALE_BITS) <= u128::from(x) {
            s = candidate;
        }
    }
    s
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", f64::from(self.0) / f64::from(Self::ONE.0))
    }
}
