//! Building-blocks for arbitrary-precision integer math.
//!
//! These algorithms assume little-endian order for the large integer
//! buffers, so for a `vec![0, 1, 2, 3]`, `3` is the most significant limb,
//! and `0` is the least significant limb.
//!
//! Unless noted otherwise, inputs are expected to be normalized: no leading
//! zero limb, and zero stored as the single limb `0`.

use crate::lib::{cmp, mem, Vec};

// ALIASES
// -------

/// Type for a single limb of the big integer.
///
/// A limb is analogous to a digit in base10, except, it stores 32-bit
/// numbers instead.
pub type Limb = u32;

/// Double-width type, wide enough to hold a limb product plus two carries.
type Wide = u64;

/// Number of bits in one limb.
pub(crate) const LIMB_BITS: usize = mem::size_of::<Limb>() * 8;

/// Storage for the magnitude of a big integer.
pub(crate) type LimbVecType = Vec<Limb>;

/// Cast to wide type.
#[inline(always)]
fn as_wide(x: Limb) -> Wide {
    Wide::from(x)
}

/// Split a wide value into its (low, high) limbs.
#[inline(always)]
fn split_wide(z: Wide) -> (Limb, Limb) {
    (z as Limb, (z >> LIMB_BITS) as Limb)
}

// SPLIT
// -----

/// Split u128 into limbs, in little-endian order.
///
/// The result is not normalized.
#[inline]
pub(crate) fn split_u128(x: u128) -> [Limb; 4] {
    [
        x as Limb,
        (x >> LIMB_BITS) as Limb,
        (x >> (2 * LIMB_BITS)) as Limb,
        (x >> (3 * LIMB_BITS)) as Limb,
    ]
}

/// Combine up to four limbs back into a u128, or `None` if there are more.
#[inline]
pub(crate) fn join_u128(x: &[Limb]) -> Option<u128> {
    if x.len() > 4 {
        return None;
    }
    let value = x
        .iter()
        .rev()
        .fold(0u128, |acc, &xi| (acc << LIMB_BITS) | u128::from(xi));
    Some(value)
}

// SCALAR
// ------

// Scalar-to-scalar operations, for building-blocks for arbitrary-precision
// operations.

mod scalar {
    use super::*;

    // ADDITION

    /// Add two limbs and an incoming carry, returning (sum, carry).
    #[inline]
    pub fn add(x: Limb, y: Limb, carry: Limb) -> (Limb, Limb) {
        split_wide(as_wide(x) + as_wide(y) + as_wide(carry))
    }

    /// AddAssign with carry, returning the outgoing carry.
    #[inline]
    pub fn iadd(x: &mut Limb, y: Limb, carry: Limb) -> Limb {
        let (value, carry) = add(*x, y, carry);
        *x = value;
        carry
    }

    // SUBTRACTION

    /// SubAssign with borrow, returning whether a borrow propagates.
    #[inline]
    pub fn isub(x: &mut Limb, y: Limb, borrow: bool) -> bool {
        let (value, b1) = x.overflowing_sub(y);
        let (value, b2) = value.overflowing_sub(Limb::from(borrow));
        *x = value;
        b1 || b2
    }

    // MULTIPLICATION

    /// Multiply two limbs and add `z` and `carry`, returning (low, high).
    ///
    /// Cannot overflow: `(2^32 - 1)^2 + 2 * (2^32 - 1) == 2^64 - 1`.
    #[inline]
    pub fn mul_add(x: Limb, y: Limb, z: Limb, carry: Limb) -> (Limb, Limb) {
        split_wide(as_wide(x) * as_wide(y) + as_wide(z) + as_wide(carry))
    }

    /// MulAssign with carry, returning the high half.
    #[inline]
    pub fn imul(x: &mut Limb, y: Limb, carry: Limb) -> Limb {
        let (value, carry) = mul_add(*x, y, 0, carry);
        *x = value;
        carry
    }

    // DIVISION

    /// Divide the two-limb value `(hi, x)` by `y`, returning (quotient, remainder).
    ///
    /// Requires `hi < y` so the quotient fits in one limb.
    #[inline]
    pub fn div(hi: Limb, x: Limb, y: Limb) -> (Limb, Limb) {
        debug_assert!(hi < y);
        let z = (as_wide(hi) << LIMB_BITS) | as_wide(x);
        let y = as_wide(y);
        ((z / y) as Limb, (z % y) as Limb)
    }
} // scalar

// SMALL
// -----

// Large-to-small operations, to modify a big integer from a native scalar.

pub(crate) mod small {
    use super::*;

    // ADDITION

    /// Implied AddAssign implementation for adding a small integer to bigint.
    ///
    /// Allows us to choose a start-index in x to store, to allow incrementing
    /// from a non-zero start.
    #[inline]
    pub fn iadd_impl(x: &mut LimbVecType, y: Limb, xstart: usize) {
        if x.len() <= xstart {
            x.push(y);
            return;
        }

        let mut carry = scalar::iadd(&mut x[xstart], y, 0);
        let mut index = xstart + 1;
        while carry != 0 && index < x.len() {
            carry = scalar::iadd(&mut x[index], 0, carry);
            index += 1;
        }

        // Carried out of the top limb: the buffer grows by exactly one.
        if carry != 0 {
            x.push(carry);
        }
    }

    /// AddAssign small integer to bigint.
    #[inline]
    pub fn iadd(x: &mut LimbVecType, y: Limb) {
        iadd_impl(x, y, 0);
    }

    // MULTIPLICATION

    /// MulAssign small integer to bigint.
    #[inline]
    pub fn imul(x: &mut LimbVecType, y: Limb) {
        let mut carry: Limb = 0;
        for xi in x.iter_mut() {
            carry = scalar::imul(xi, y, carry);
        }

        if carry != 0 {
            x.push(carry);
        }
    }

    /// Mul small integer to bigint, storing the product in `z`.
    ///
    /// `z` is cleared first, so one buffer can be reused across calls
    /// without reallocating once it has grown to `x.len() + 1` limbs.
    #[inline]
    pub fn mul_into(z: &mut LimbVecType, x: &[Limb], y: Limb) {
        z.clear();
        z.extend_from_slice(x);
        imul(z, y);
        normalize(z);
    }

    // DIVISION

    /// DivAssign bigint by small integer, returning the remainder.
    ///
    /// Walks from the most significant limb down, carrying the running
    /// remainder into the high half of the next two-limb dividend.
    pub fn idiv(x: &mut LimbVecType, y: Limb) -> Limb {
        assert!(y != 0, "attempt to divide by zero");
        let mut rem: Limb = 0;
        for xi in x.iter_mut().rev() {
            let (quotient, remainder) = scalar::div(rem, *xi, y);
            *xi = quotient;
            rem = remainder;
        }
        normalize(x);
        rem
    }

    // NORMALIZE

    /// Normalize the container by popping any leading zeros.
    ///
    /// Leaves exactly one `0` limb for zero, and fills in that limb if the
    /// container was empty.
    #[inline]
    pub fn normalize(x: &mut LimbVecType) {
        while x.len() > 1 && x.last() == Some(&0) {
            x.pop();
        }
        if x.is_empty() {
            x.push(0);
        }
    }

    /// Check if the normalized magnitude is zero.
    #[inline]
    pub fn is_zero(x: &[Limb]) -> bool {
        x.iter().all(|&xi| xi == 0)
    }
} // small

// LARGE
// -----

// Large-to-large operations, to modify a big integer from another big integer.

pub(crate) mod large {
    use super::*;

    // RELATIVE OPERATORS

    /// Compare `x` to `y`, in little-endian order.
    ///
    /// With no leading zero limbs, the longer buffer is the larger value;
    /// equal lengths are decided by the first differing limb from the top.
    #[inline]
    pub fn compare(x: &[Limb], y: &[Limb]) -> cmp::Ordering {
        match x.len().cmp(&y.len()) {
            cmp::Ordering::Equal => {}
            ordering => return ordering,
        }
        for (xi, yi) in x.iter().rev().zip(y.iter().rev()) {
            match xi.cmp(yi) {
                cmp::Ordering::Equal => {}
                ordering => return ordering,
            }
        }
        cmp::Ordering::Equal
    }

    /// Check if x is less than y.
    #[inline]
    pub fn less(x: &[Limb], y: &[Limb]) -> bool {
        compare(x, y) == cmp::Ordering::Less
    }

    /// Check if x is greater than or equal to y.
    #[inline]
    pub fn greater_equal(x: &[Limb], y: &[Limb]) -> bool {
        !less(x, y)
    }

    // ADDITION

    /// Implied AddAssign implementation for bigints.
    ///
    /// Allows us to choose a start-index in x to store, so we can avoid
    /// padding the buffer with zeros when not needed.
    pub fn iadd_impl(x: &mut LimbVecType, y: &[Limb], xstart: usize) {
        if y.len() > x.len() - xstart {
            x.resize(y.len() + xstart, 0);
        }

        let mut carry: Limb = 0;
        for (xi, &yi) in x[xstart..].iter_mut().zip(y.iter()) {
            carry = scalar::iadd(xi, yi, carry);
        }

        if carry != 0 {
            small::iadd_impl(x, carry, y.len() + xstart);
        }
    }

    /// AddAssign bigint to bigint.
    #[inline]
    pub fn iadd(x: &mut LimbVecType, y: &[Limb]) {
        iadd_impl(x, y, 0);
        small::normalize(x);
    }

    // SUBTRACTION

    /// SubAssign bigint to bigint.
    ///
    /// # Panics
    ///
    /// Panics if `y` is greater than `x`. Callers establish `x >= y` before
    /// calling, so a surviving borrow is a logic error, not bad input.
    pub fn isub(x: &mut LimbVecType, y: &[Limb]) {
        // Limbs of `y` past the end of `x` can only be absorbed if zero.
        let overflow = y.iter().skip(x.len()).any(|&yi| yi != 0);

        let mut borrow = false;
        for (index, xi) in x.iter_mut().enumerate() {
            let yi = y.get(index).copied().unwrap_or(0);
            if index >= y.len() && !borrow {
                break;
            }
            borrow = scalar::isub(xi, yi, borrow);
        }

        assert!(
            !borrow && !overflow,
            "big integer subtraction underflow: subtrahend exceeds minuend",
        );
        small::normalize(x);
    }

    // MULTIPLICATION

    /// Grade-school multiplication algorithm.
    ///
    /// For each limb of `y`, scan every limb of `x`, accumulating the
    /// double-width product into `z[i + j]` with a running carry, then push
    /// whatever carry remains into the limbs above. Runs in O(n*m) time.
    pub fn long_mul(x: &[Limb], y: &[Limb]) -> LimbVecType {
        let len = x.len() + y.len();
        let mut z: LimbVecType = LimbVecType::with_capacity(len);
        z.resize(len, 0);

        for (j, &yj) in y.iter().enumerate() {
            let mut carry: Limb = 0;
            for (i, &xi) in x.iter().enumerate() {
                let (value, high) = scalar::mul_add(xi, yj, z[i + j], carry);
                z[i + j] = value;
                carry = high;
            }

            let mut k = j + x.len();
            while carry != 0 && k < len {
                carry = scalar::iadd(&mut z[k], 0, carry);
                k += 1;
            }
        }

        small::normalize(&mut z);
        z
    }

    /// Mul bigint by bigint.
    #[inline]
    pub fn mul(x: &[Limb], y: &[Limb]) -> LimbVecType {
        if small::is_zero(x) || small::is_zero(y) {
            let mut z = LimbVecType::with_capacity(1);
            z.push(0);
            return z;
        }
        long_mul(x, y)
    }

    // DIVISION

    /// Largest `q` in `0..=Limb::MAX` with `y * q <= rem`, by binary search.
    ///
    /// Every probe performs a full multiply of `y` by the candidate into the
    /// `product` scratch buffer. On return `product` holds `y * q`.
    fn quotient_limb(rem: &[Limb], y: &[Limb], product: &mut LimbVecType) -> Limb {
        if less(rem, y) {
            product.clear();
            product.push(0);
            return 0;
        }

        // `q == 1` is known to fit, so search the rest of the range.
        let mut lo: Wide = 2;
        let mut hi: Wide = as_wide(Limb::MAX);
        let mut q: Wide = 1;
        while lo <= hi {
            let mid = lo + (hi - lo) / 2;
            small::mul_into(product, y, mid as Limb);
            if greater_equal(rem, product) {
                q = mid;
                lo = mid + 1;
            } else {
                // `mid >= 2` here, so this cannot wrap.
                hi = mid - 1;
            }
        }

        small::mul_into(product, y, q as Limb);
        q as Limb
    }

    /// Long division of magnitudes, returning (quotient, remainder).
    ///
    /// Processes `x` from the most significant limb down in base `2^32`: the
    /// running remainder is shifted up one limb, the next limb of `x` is
    /// brought in, and the next quotient limb is found by `quotient_limb`.
    ///
    /// Before each shift the remainder is below `y`, so afterwards it is
    /// below `y * 2^32`. That keeps every quotient digit within one limb and
    /// the remainder at most one limb longer than `y`, so the remainder and
    /// the scratch product are allocated once at `y.len() + 1` limbs.
    pub fn divrem(x: &[Limb], y: &[Limb]) -> (LimbVecType, LimbVecType) {
        debug_assert!(!small::is_zero(y), "divrem() by zero");

        if less(x, y) {
            let mut quotient = LimbVecType::with_capacity(1);
            quotient.push(0);
            return (quotient, x.to_vec());
        }

        let mut quotient = LimbVecType::with_capacity(x.len());
        let mut rem = LimbVecType::with_capacity(y.len() + 1);
        let mut product = LimbVecType::with_capacity(y.len() + 1);
        for &xi in x.iter().rev() {
            // Shift left by one limb. Zero stays a single limb.
            if small::is_zero(&rem) {
                rem.clear();
                rem.push(xi);
            } else {
                rem.insert(0, xi);
            }

            let q = quotient_limb(&rem, y, &mut product);
            if q != 0 {
                isub(&mut rem, &product);
            }
            quotient.push(q);
        }

        // Digits were produced most significant first.
        quotient.reverse();
        small::normalize(&mut quotient);
        (quotient, rem)
    }
} // large

// TESTS
// -----
