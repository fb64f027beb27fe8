//! Rendering big integers as decimal and hexadecimal text.
//!
//! Digits are produced by repeatedly dividing a working copy of the
//! magnitude, least significant first. Each division step takes out a whole
//! group of digits at once: nine decimal digits (`10^9`) or seven hexadecimal
//! digits (`16^7`), the largest groups whose divisor fits in one limb.
//! Each step is [`BigInteger::div_rem_small`], the same routine behind the
//! one-digit `divide_by_10` and `divide_by_16`, so the text matches what
//! dividing out one digit at a time would produce.

use crate::bigint::BigInteger;
use crate::lib::fmt::{self, Debug, Display, LowerHex, UpperHex};
use crate::lib::{String, Vec};
use crate::math::Limb;

const DEC_CHUNK: Limb = 1_000_000_000;
const DEC_CHUNK_DIGITS: usize = 9;

const HEX_CHUNK: Limb = 1 << 28;
const HEX_CHUNK_DIGITS: usize = 7;

const UPPER_HEX: &[u8; 16] = b"0123456789ABCDEF";
const LOWER_HEX: &[u8; 16] = b"0123456789abcdef";

/// Split the magnitude into base-`chunk` groups, least significant first.
fn chunks(value: &BigInteger, chunk: Limb) -> Vec<Limb> {
    let mut working = value.abs();
    let mut groups = Vec::with_capacity(working.size() * 2);
    loop {
        groups.push(working.div_rem_small(chunk));
        if working.is_zero() {
            return groups;
        }
    }
}

/// Decimal digits of the magnitude, without sign.
fn decimal_digits(value: &BigInteger) -> String {
    if value.is_zero() {
        return String::from("0");
    }

    let groups = chunks(value, DEC_CHUNK);
    let mut out = String::with_capacity(groups.len() * DEC_CHUNK_DIGITS);
    let mut buffer = itoa::Buffer::new();
    for (index, &group) in groups.iter().rev().enumerate() {
        let printed = buffer.format(group);
        // Only the leading group goes without zero padding.
        if index > 0 {
            for _ in printed.len()..DEC_CHUNK_DIGITS {
                out.push('0');
            }
        }
        out.push_str(printed);
    }
    out
}

/// Hexadecimal digits of the magnitude, without sign or prefix.
fn hex_digits(value: &BigInteger, alphabet: &[u8; 16]) -> String {
    if value.is_zero() {
        return String::from("0");
    }

    let groups = chunks(value, HEX_CHUNK);
    let mut out = String::with_capacity(groups.len() * HEX_CHUNK_DIGITS);
    for (index, &group) in groups.iter().rev().enumerate() {
        for shift in (0..HEX_CHUNK_DIGITS).rev() {
            let digit = (group >> (4 * shift)) & 0xF;
            if index == 0 && out.is_empty() && digit == 0 {
                continue;
            }
            out.push(alphabet[digit as usize] as char);
        }
    }
    out
}

/// Render the value in decimal, with a leading `-` when negative.
///
/// ```
/// use biginteger::{to_decimal_string, BigInteger};
///
/// let n: BigInteger = "-00012345678901234567890".parse().unwrap();
/// assert_eq!(to_decimal_string(&n), "-12345678901234567890");
/// ```
pub fn to_decimal_string(value: &BigInteger) -> String {
    let digits = decimal_digits(value);
    if value.is_negative() {
        let mut out = String::with_capacity(digits.len() + 1);
        out.push('-');
        out.push_str(&digits);
        out
    } else {
        digits
    }
}

/// Render the value in uppercase hexadecimal, with a leading `-` when
/// negative and no `0x` prefix.
///
/// ```
/// use biginteger::{to_hex_string, Base, BigInteger};
///
/// let n = BigInteger::parse("-abcdef", Base::Hexadecimal).unwrap();
/// assert_eq!(to_hex_string(&n), "-ABCDEF");
/// ```
pub fn to_hex_string(value: &BigInteger) -> String {
    let digits = hex_digits(value, UPPER_HEX);
    if value.is_negative() {
        let mut out = String::with_capacity(digits.len() + 1);
        out.push('-');
        out.push_str(&digits);
        out
    } else {
        digits
    }
}

impl Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(!self.negative, "", &decimal_digits(self))
    }
}

impl UpperHex for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(!self.negative, "0x", &hex_digits(self, UPPER_HEX))
    }
}

impl LowerHex for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(!self.negative, "0x", &hex_digits(self, LOWER_HEX))
    }
}

impl Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigInteger({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn decimal_group_padding_test() {
        // 10^9 needs a zero-padded low group.
        let x = BigInteger::from(1_000_000_000u32);
        assert_eq!(to_decimal_string(&x), "1000000000");

        let x = BigInteger::from(1_000_000_007u64 * 1_000_000_000);
        assert_eq!(to_decimal_string(&x), "1000000007000000000");

        let x = BigInteger::from(u128::MAX);
        assert_eq!(
            to_decimal_string(&x),
            "340282366920938463463374607431768211455",
        );
    }

    #[test]
    fn hex_group_test() {
        assert_eq!(to_hex_string(&BigInteger::from(0xFu8)), "F");
        assert_eq!(to_hex_string(&BigInteger::from(1u32 << 28)), "10000000");
        assert_eq!(to_hex_string(&BigInteger::from(u64::MAX)), "FFFFFFFFFFFFFFFF");
        assert_eq!(
            to_hex_string(&BigInteger::from(0x1234_5678_9ABC_DEF0_u64)),
            "123456789ABCDEF0",
        );
    }

    #[test]
    fn matches_digit_at_a_time_test() {
        let mut x = BigInteger::from(u128::MAX) * BigInteger::from(u64::MAX);
        let decimal = to_decimal_string(&x);
        let hex = to_hex_string(&x);

        let mut digits = String::new();
        let mut working = x.clone();
        while !working.is_zero() {
            digits.insert(0, char::from_digit(working.divide_by_10(), 10).unwrap());
        }
        assert_eq!(decimal, digits);

        digits.clear();
        while !x.is_zero() {
            let digit = char::from_digit(x.divide_by_16(), 16).unwrap();
            digits.insert(0, digit.to_ascii_uppercase());
        }
        assert_eq!(hex, digits);
    }

    #[test]
    fn zero_test() {
        assert_eq!(to_decimal_string(&BigInteger::zero()), "0");
        assert_eq!(to_hex_string(&BigInteger::zero()), "0");
    }

    #[test]
    fn formatter_flags_test() {
        let x = BigInteger::from(-255);
        assert_eq!(format!("{}", x), "-255");
        assert_eq!(format!("{:X}", x), "-FF");
        assert_eq!(format!("{:x}", x), "-ff");
        assert_eq!(format!("{:#X}", x), "-0xFF");
        assert_eq!(format!("{:>6}", x), "  -255");
        assert_eq!(format!("{:+}", BigInteger::from(7)), "+7");
        assert_eq!(format!("{:05}", BigInteger::from(-42)), "-0042");
        assert_eq!(format!("{:?}", x), "BigInteger(-255)");
    }
}
