use crate::bigint::BigInteger;
use crate::lib::cmp::Ordering;
use crate::lib::hash::{Hash, Hasher};

// Zero is canonical, so comparing the representation field by field is the
// same as comparing values.
impl PartialEq for BigInteger {
    fn eq(&self, other: &Self) -> bool {
        self.negative == other.negative && self.data == other.data
    }
}

impl Eq for BigInteger {}

impl Hash for BigInteger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.negative.hash(state);
        self.data.hash(state);
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            Ordering::Equal
        } else if BigInteger::is_less(self, other) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

impl PartialOrd for BigInteger {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

macro_rules! partialeq_numeric {
    ($($ty:ty)*) => {
        $(
            impl PartialEq<$ty> for BigInteger {
                fn eq(&self, other: &$ty) -> bool {
                    *self == BigInteger::from(*other)
                }
            }

            impl PartialEq<BigInteger> for $ty {
                fn eq(&self, other: &BigInteger) -> bool {
                    BigInteger::from(*self) == *other
                }
            }

            impl<'a> PartialEq<$ty> for &'a BigInteger {
                fn eq(&self, other: &$ty) -> bool {
                    **self == BigInteger::from(*other)
                }
            }

            impl PartialOrd<$ty> for BigInteger {
                fn partial_cmp(&self, other: &$ty) -> Option<Ordering> {
                    Some(self.cmp(&BigInteger::from(*other)))
                }
            }

            impl PartialOrd<BigInteger> for $ty {
                fn partial_cmp(&self, other: &BigInteger) -> Option<Ordering> {
                    Some(BigInteger::from(*self).cmp(other))
                }
            }
        )*
    }
}

partialeq_numeric! {
    i8 i16 i32 i64 i128 isize
    u8 u16 u32 u64 u128 usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_order_test() {
        let values = [-100i64, -5, -1, 0, 1, 5, 100];
        for &x in &values {
            for &y in &values {
                let bx = BigInteger::from(x);
                let by = BigInteger::from(y);
                assert_eq!(bx.cmp(&by), x.cmp(&y), "{} vs {}", x, y);
                assert_eq!(BigInteger::is_less(&bx, &by), x < y);
            }
        }
    }

    #[test]
    fn multi_limb_order_test() {
        let big = BigInteger::from(1u64 << 40);
        let small = BigInteger::from(u32::MAX);
        assert!(small < big);
        assert!(-&big < -&small);
        assert!(BigInteger::is_abs_less(&small, &-&big));
    }

    #[test]
    fn primitive_comparison_test() {
        let x = BigInteger::from(-7);
        assert!(x == -7);
        assert!(-7 == x);
        assert!(x < 0);
        assert!(0u8 > x);
        assert!(&x == -7i64);
    }
}
