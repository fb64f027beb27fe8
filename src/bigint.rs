use crate::lib::Vec;
use crate::math::{self, large, small, Limb, LimbVecType};

/// An arbitrary-precision signed integer.
///
/// The value is a sign flag plus a magnitude of 32-bit limbs stored least
/// significant first. After every public operation the magnitude has no
/// leading zero limb, and zero is exactly one `0` limb with a non-negative
/// sign, so two equal values always have identical representations.
///
/// Each value owns its limb buffer. `Clone` makes a deep copy; moving a
/// `BigInteger` transfers the buffer and the source binding can no longer be
/// used. [`core::mem::take`] leaves canonical zero behind.
#[derive(Clone)]
pub struct BigInteger {
    pub(crate) negative: bool,
    pub(crate) data: LimbVecType,
}

impl BigInteger {
    /// The value `0`.
    #[inline]
    pub fn zero() -> Self {
        let mut data = LimbVecType::with_capacity(1);
        data.push(0);
        BigInteger {
            negative: false,
            data,
        }
    }

    /// The value `1`.
    #[inline]
    pub fn one() -> Self {
        BigInteger::from(1u32)
    }

    /// Build a value from a sign and an arbitrary little-endian magnitude.
    pub(crate) fn from_parts(negative: bool, data: LimbVecType) -> Self {
        let mut value = BigInteger { negative, data };
        value.normalize();
        value
    }

    #[inline]
    fn from_u128(negative: bool, magnitude: u128) -> Self {
        let limbs = math::split_u128(magnitude);
        BigInteger::from_parts(negative, limbs.to_vec())
    }

    /// Restore the representation invariants after a mutation.
    ///
    /// Pops leading zero limbs down to a single limb and clears the sign of
    /// zero. Every operation that writes `data` finishes here.
    #[inline]
    pub(crate) fn normalize(&mut self) {
        small::normalize(&mut self.data);
        if self.is_zero() {
            self.negative = false;
        }
        debug_assert!(!self.data.is_empty());
        debug_assert!(self.data.len() == 1 || self.data.last() != Some(&0));
    }

    /// Returns true if the value is strictly less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Force the sign of the value without touching the magnitude.
    ///
    /// Zero has no sign, so asking for a negative zero leaves it unchanged.
    ///
    /// ```
    /// # use biginteger::BigInteger;
    /// let mut n = BigInteger::from(123);
    /// n.set_negative(true);
    /// assert_eq!(n, -123);
    ///
    /// let mut zero = BigInteger::zero();
    /// zero.set_negative(true);
    /// assert!(!zero.is_negative());
    /// ```
    #[inline]
    pub fn set_negative(&mut self, negative: bool) {
        self.negative = negative && !self.is_zero();
    }

    /// Number of 32-bit limbs in the magnitude. Always at least 1.
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// The magnitude as limbs, least significant first.
    #[inline]
    pub fn limbs(&self) -> &[Limb] {
        &self.data
    }

    /// Returns true if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.data.len() == 1 && self.data[0] == 0
    }

    /// The absolute value.
    #[inline]
    pub fn abs(&self) -> BigInteger {
        BigInteger {
            negative: false,
            data: self.data.clone(),
        }
    }

    /// `-1`, `0` or `1` according to the sign of the value.
    #[inline]
    pub fn signum(&self) -> i32 {
        if self.negative {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    /// Divide the magnitude in place by a single limb and return the
    /// remainder.
    ///
    /// The sign is kept unless the quotient becomes zero. Formatting calls
    /// this with `10^9` and `2^28` to take out several digits per step.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    pub fn div_rem_small(&mut self, divisor: Limb) -> Limb {
        let remainder = small::idiv(&mut self.data, divisor);
        self.normalize();
        remainder
    }

    /// Divide the magnitude by 10 in place and return the decimal digit that
    /// was removed.
    ///
    /// ```
    /// # use biginteger::BigInteger;
    /// let mut n = BigInteger::from(1234);
    /// assert_eq!(n.divide_by_10(), 4);
    /// assert_eq!(n, 123);
    /// ```
    #[inline]
    pub fn divide_by_10(&mut self) -> u32 {
        self.div_rem_small(10)
    }

    /// Divide the magnitude by 16 in place and return the hexadecimal digit
    /// that was removed.
    #[inline]
    pub fn divide_by_16(&mut self) -> u32 {
        self.div_rem_small(16)
    }

    /// Returns true if the value can be represented by u64.
    #[inline]
    pub fn is_u64(&self) -> bool {
        self.as_u64().is_some()
    }

    /// Returns true if the value can be represented by i64.
    #[inline]
    pub fn is_i64(&self) -> bool {
        self.as_i64().is_some()
    }

    /// Returns the value represented as u64 if possible, or else None.
    pub fn as_u64(&self) -> Option<u64> {
        if self.negative {
            return None;
        }
        let magnitude = math::join_u128(&self.data)?;
        u64::try_from(magnitude).ok()
    }

    /// Returns the value represented as i64 if possible, or else None.
    pub fn as_i64(&self) -> Option<i64> {
        let magnitude = math::join_u128(&self.data)?;
        if self.negative {
            // i64::MIN has no positive counterpart, so go through i128.
            i64::try_from(-i128::try_from(magnitude).ok()?).ok()
        } else {
            i64::try_from(magnitude).ok()
        }
    }

    /// Returns true if `|x| < |y|`, ignoring signs.
    ///
    /// ```
    /// # use biginteger::BigInteger;
    /// let x = BigInteger::from(-5);
    /// let y = BigInteger::from(7);
    /// assert!(BigInteger::is_abs_less(&x, &y));
    /// assert!(!BigInteger::is_abs_less(&y, &x));
    /// ```
    #[inline]
    pub fn is_abs_less(x: &BigInteger, y: &BigInteger) -> bool {
        large::less(&x.data, &y.data)
    }

    /// Returns true if `x < y` in signed order.
    pub fn is_less(x: &BigInteger, y: &BigInteger) -> bool {
        if x == y {
            return false;
        }
        if x.negative != y.negative {
            return x.negative;
        }
        if x.negative {
            // The larger magnitude is the smaller negative number.
            !BigInteger::is_abs_less(x, y)
        } else {
            BigInteger::is_abs_less(x, y)
        }
    }
}

impl Default for BigInteger {
    #[inline]
    fn default() -> Self {
        BigInteger::zero()
    }
}

macro_rules! from_unsigned {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigInteger {
                #[inline]
                fn from(primitive: $ty) -> Self {
                    BigInteger::from_u128(false, primitive as u128)
                }
            }
        )*
    };
}

macro_rules! from_signed {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigInteger {
                #[inline]
                fn from(primitive: $ty) -> Self {
                    BigInteger::from_u128(primitive < 0, primitive.unsigned_abs() as u128)
                }
            }
        )*
    };
}

from_unsigned!(u8 u16 u32 u64 u128 usize);
from_signed!(i8 i16 i32 i64 i128 isize);

impl From<BigInteger> for Vec<Limb> {
    /// Take the magnitude limbs, least significant first. The sign is dropped.
    #[inline]
    fn from(value: BigInteger) -> Self {
        value.data
    }
}
