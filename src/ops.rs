//! Arithmetic on big integers.
//!
//! Every operator is implemented once, in its compound-assignment form taking
//! the right-hand side by reference. The by-value, by-reference and
//! native-integer forms all forward to that one implementation.
//!
//! Native right-hand sides are accepted for every primitive width, so an
//! unsuffixed literal has no single type to infer. Give it a suffix when the
//! result is bound and then used through a method call:
//!
//! ```
//! # use biginteger::BigInteger;
//! let n = BigInteger::from(u32::MAX) + 1u32;
//! assert_eq!(n.size(), 2);
//! ```

use crate::bigint::BigInteger;
use crate::error::{Error, Result};
use crate::lib::iter::{Product, Sum};
use crate::lib::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};
use crate::math::{large, Limb};

impl BigInteger {
    /// Add a signed magnitude to `self`.
    ///
    /// Equal signs add magnitudes. Opposite signs subtract the smaller
    /// magnitude from the larger one, and the result takes the sign of the
    /// larger operand.
    fn add_signed(&mut self, negative: bool, magnitude: &[Limb]) {
        if self.negative == negative {
            large::iadd(&mut self.data, magnitude);
        } else if large::less(magnitude, &self.data) {
            large::isub(&mut self.data, magnitude);
        } else {
            let mut data = magnitude.to_vec();
            large::isub(&mut data, &self.data);
            self.data = data;
            self.negative = negative;
        }
        self.normalize();
    }

    /// Divide `self` by `divisor` in place, truncating toward zero.
    ///
    /// On error `self` is left unchanged.
    ///
    /// ```
    /// # use biginteger::BigInteger;
    /// let mut n = BigInteger::from(-100);
    /// n.try_div_assign(&BigInteger::from(7)).unwrap();
    /// assert_eq!(n, -14);
    ///
    /// assert!(n.try_div_assign(&BigInteger::zero()).is_err());
    /// assert_eq!(n, -14);
    /// ```
    pub fn try_div_assign(&mut self, divisor: &BigInteger) -> Result<()> {
        if divisor.is_zero() {
            return Err(Error::division_by_zero());
        }

        let negative = self.negative != divisor.negative;
        if BigInteger::is_abs_less(self, divisor) {
            *self = BigInteger::zero();
            return Ok(());
        }

        let (quotient, _) = large::divrem(&self.data, &divisor.data);
        self.data = quotient;
        self.negative = negative;
        self.normalize();
        Ok(())
    }

    /// Replace `self` with the remainder of dividing it by `divisor`.
    ///
    /// Computed as `self - (self / divisor) * divisor`, so a non-zero
    /// remainder has the sign of the dividend. On error `self` is left
    /// unchanged.
    pub fn try_rem_assign(&mut self, divisor: &BigInteger) -> Result<()> {
        let quotient = self.checked_div(divisor)?;
        *self -= quotient * divisor;
        Ok(())
    }

    /// Truncating division, or an error if `divisor` is zero.
    pub fn checked_div(&self, divisor: &BigInteger) -> Result<BigInteger> {
        let mut quotient = self.clone();
        quotient.try_div_assign(divisor)?;
        Ok(quotient)
    }

    /// Truncating remainder, or an error if `divisor` is zero.
    ///
    /// ```
    /// # use biginteger::BigInteger;
    /// let r = BigInteger::from(100).checked_rem(&BigInteger::from(-7)).unwrap();
    /// assert_eq!(r, 2);
    /// ```
    pub fn checked_rem(&self, divisor: &BigInteger) -> Result<BigInteger> {
        let mut remainder = self.clone();
        remainder.try_rem_assign(divisor)?;
        Ok(remainder)
    }

    /// Quotient and remainder of truncating division in one call.
    ///
    /// Satisfies `quotient * divisor + remainder == self`.
    pub fn div_rem(&self, divisor: &BigInteger) -> Result<(BigInteger, BigInteger)> {
        let quotient = self.checked_div(divisor)?;
        let remainder = self - &quotient * divisor;
        Ok((quotient, remainder))
    }

    /// Prefix increment: add one and return the updated value.
    ///
    /// ```
    /// # use biginteger::BigInteger;
    /// let mut n = BigInteger::from(10);
    /// assert_eq!(*n.inc(), 11);
    /// assert_eq!(n.post_inc(), 11);
    /// assert_eq!(n, 12);
    /// ```
    #[inline]
    pub fn inc(&mut self) -> &mut Self {
        self.add_signed(false, &[1]);
        self
    }

    /// Prefix decrement: subtract one and return the updated value.
    #[inline]
    pub fn dec(&mut self) -> &mut Self {
        self.add_signed(true, &[1]);
        self
    }

    /// Postfix increment: add one and return the previous value.
    pub fn post_inc(&mut self) -> BigInteger {
        let previous = self.clone();
        self.inc();
        previous
    }

    /// Postfix decrement: subtract one and return the previous value.
    pub fn post_dec(&mut self) -> BigInteger {
        let previous = self.clone();
        self.dec();
        previous
    }
}

impl<'a> AddAssign<&'a BigInteger> for BigInteger {
    #[inline]
    fn add_assign(&mut self, other: &BigInteger) {
        self.add_signed(other.negative, &other.data);
    }
}

// Subtraction is addition of the negated right-hand side.
impl<'a> SubAssign<&'a BigInteger> for BigInteger {
    #[inline]
    fn sub_assign(&mut self, other: &BigInteger) {
        self.add_signed(!other.negative, &other.data);
    }
}

impl<'a> MulAssign<&'a BigInteger> for BigInteger {
    fn mul_assign(&mut self, other: &BigInteger) {
        if self.is_zero() || other.is_zero() {
            *self = BigInteger::zero();
            return;
        }
        self.data = large::mul(&self.data, &other.data);
        self.negative = self.negative != other.negative;
        self.normalize();
    }
}

/// # Panics
///
/// Panics if the divisor is zero. Use [`BigInteger::try_div_assign`] to
/// handle that case.
impl<'a> DivAssign<&'a BigInteger> for BigInteger {
    fn div_assign(&mut self, divisor: &BigInteger) {
        if let Err(err) = self.try_div_assign(divisor) {
            panic!("{}", err);
        }
    }
}

/// # Panics
///
/// Panics if the divisor is zero. Use [`BigInteger::try_rem_assign`] to
/// handle that case.
impl<'a> RemAssign<&'a BigInteger> for BigInteger {
    fn rem_assign(&mut self, divisor: &BigInteger) {
        if let Err(err) = self.try_rem_assign(divisor) {
            panic!("{}", err);
        }
    }
}

macro_rules! forward_binop {
    ($($imp:ident $method:ident $imp_assign:ident $method_assign:ident;)*) => {
        $(
            impl $imp_assign<BigInteger> for BigInteger {
                #[inline]
                fn $method_assign(&mut self, other: BigInteger) {
                    $imp_assign::$method_assign(self, &other);
                }
            }

            impl<'a> $imp<&'a BigInteger> for BigInteger {
                type Output = BigInteger;

                #[inline]
                fn $method(mut self, other: &BigInteger) -> BigInteger {
                    $imp_assign::$method_assign(&mut self, other);
                    self
                }
            }

            impl $imp<BigInteger> for BigInteger {
                type Output = BigInteger;

                #[inline]
                fn $method(mut self, other: BigInteger) -> BigInteger {
                    $imp_assign::$method_assign(&mut self, &other);
                    self
                }
            }

            impl<'a, 'b> $imp<&'b BigInteger> for &'a BigInteger {
                type Output = BigInteger;

                #[inline]
                fn $method(self, other: &BigInteger) -> BigInteger {
                    let mut result = self.clone();
                    $imp_assign::$method_assign(&mut result, other);
                    result
                }
            }

            impl<'a> $imp<BigInteger> for &'a BigInteger {
                type Output = BigInteger;

                #[inline]
                fn $method(self, other: BigInteger) -> BigInteger {
                    let mut result = self.clone();
                    $imp_assign::$method_assign(&mut result, &other);
                    result
                }
            }
        )*
    };
}

forward_binop! {
    Add add AddAssign add_assign;
    Sub sub SubAssign sub_assign;
    Mul mul MulAssign mul_assign;
    Div div DivAssign div_assign;
    Rem rem RemAssign rem_assign;
}

macro_rules! forward_primitive_binop {
    ($imp:ident $method:ident $imp_assign:ident $method_assign:ident: $($ty:ident)*) => {
        $(
            impl $imp_assign<$ty> for BigInteger {
                #[inline]
                fn $method_assign(&mut self, other: $ty) {
                    $imp_assign::$method_assign(self, &BigInteger::from(other));
                }
            }

            impl $imp<$ty> for BigInteger {
                type Output = BigInteger;

                #[inline]
                fn $method(mut self, other: $ty) -> BigInteger {
                    $imp_assign::$method_assign(&mut self, &BigInteger::from(other));
                    self
                }
            }

            impl<'a> $imp<$ty> for &'a BigInteger {
                type Output = BigInteger;

                #[inline]
                fn $method(self, other: $ty) -> BigInteger {
                    let mut result = self.clone();
                    $imp_assign::$method_assign(&mut result, &BigInteger::from(other));
                    result
                }
            }
        )*
    };
}

macro_rules! forward_primitive_binops {
    ($($imp:ident $method:ident $imp_assign:ident $method_assign:ident;)*) => {
        $(
            forward_primitive_binop! {
                $imp $method $imp_assign $method_assign:
                    i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize
            }
        )*
    };
}

forward_primitive_binops! {
    Add add AddAssign add_assign;
    Sub sub SubAssign sub_assign;
    Mul mul MulAssign mul_assign;
    Div div DivAssign div_assign;
    Rem rem RemAssign rem_assign;
}

impl Neg for BigInteger {
    type Output = BigInteger;

    #[inline]
    fn neg(mut self) -> BigInteger {
        let negative = !self.negative;
        self.set_negative(negative);
        self
    }
}

impl<'a> Neg for &'a BigInteger {
    type Output = BigInteger;

    #[inline]
    fn neg(self) -> BigInteger {
        -self.clone()
    }
}

impl Sum for BigInteger {
    fn sum<I: Iterator<Item = BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a BigInteger> for BigInteger {
    fn sum<I: Iterator<Item = &'a BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::zero(), |acc, x| acc + x)
    }
}

impl Product for BigInteger {
    fn product<I: Iterator<Item = BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a BigInteger> for BigInteger {
    fn product<I: Iterator<Item = &'a BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::one(), |acc, x| acc * x)
    }
}
