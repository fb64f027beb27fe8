//! Converting decimal and hexadecimal text into big integers.

use crate::bigint::BigInteger;
use crate::error::{Error, ErrorCode, Result};
use crate::lib::str::FromStr;
use crate::math::{small, LimbVecType};

/// The radix of an integer written as text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Base {
    /// Digits `0-9`.
    #[default]
    Decimal,

    /// Digits `0-9` and `A-F`. Letters are accepted in either case when
    /// parsing and written in uppercase by [`to_hex_string`].
    ///
    /// [`to_hex_string`]: crate::to_hex_string
    Hexadecimal,
}

impl Base {
    /// The numeric radix: 10 or 16.
    #[inline]
    pub fn radix(self) -> u32 {
        match self {
            Base::Decimal => 10,
            Base::Hexadecimal => 16,
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Base::Decimal => "decimal",
            Base::Hexadecimal => "hexadecimal",
        }
    }

    // Upper bound on the limbs needed for `digits` digits in this base.
    fn limbs_for(self, digits: usize) -> usize {
        match self {
            // 9 decimal digits always fit in a 32-bit limb.
            Base::Decimal => digits / 9 + 1,
            Base::Hexadecimal => digits / 8 + 1,
        }
    }
}

impl BigInteger {
    /// Parse an integer from text in the given base.
    ///
    /// The text is an optional `+` or `-` followed by one or more digits of
    /// the base. Leading zeros are ignored and any form of zero, signed or
    /// not, parses to the canonical zero. No whitespace is accepted.
    ///
    /// ```
    /// use biginteger::{Base, BigInteger};
    ///
    /// let n = BigInteger::parse("FFFFFFFF", Base::Hexadecimal).unwrap();
    /// assert_eq!(n, 0xFFFF_FFFFu32);
    ///
    /// let zero = BigInteger::parse("-000", Base::Decimal).unwrap();
    /// assert!(!zero.is_negative());
    ///
    /// let err = BigInteger::parse("12a4", Base::Decimal).unwrap_err();
    /// assert_eq!(err.column(), 3);
    /// ```
    pub fn parse(text: &str, base: Base) -> Result<BigInteger> {
        if text.is_empty() {
            return Err(Error::syntax(ErrorCode::EmptyInput, 0));
        }

        let (negative, digits) = match text.as_bytes()[0] {
            b'-' => (true, &text[1..]),
            b'+' => (false, &text[1..]),
            _ => (false, text),
        };
        if digits.is_empty() {
            return Err(Error::syntax(ErrorCode::MissingDigits, 1));
        }

        let sign_len = text.len() - digits.len();
        let significant = digits.trim_start_matches('0');
        let zeros = digits.len() - significant.len();

        let radix = base.radix();
        let mut data = LimbVecType::with_capacity(base.limbs_for(significant.len()));
        data.push(0);
        for (index, ch) in significant.chars().enumerate() {
            let digit = match ch.to_digit(radix) {
                Some(digit) => digit,
                None => {
                    let column = sign_len + zeros + index + 1;
                    return Err(Error::syntax(ErrorCode::InvalidDigit(ch, base), column));
                }
            };
            small::imul(&mut data, radix);
            small::iadd(&mut data, digit);
        }

        Ok(BigInteger::from_parts(negative, data))
    }
}

/// Parses decimal text. Use [`BigInteger::parse`] for hexadecimal.
impl FromStr for BigInteger {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self> {
        BigInteger::parse(s, Base::Decimal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn parse_decimal_test() {
        let x = BigInteger::parse("4294967296", Base::Decimal).unwrap();
        assert_eq!(x.data, vec![0, 1]);
        assert!(!x.negative);

        let x = BigInteger::parse("-12345", Base::Decimal).unwrap();
        assert_eq!(x.data, vec![12345]);
        assert!(x.negative);

        let x = BigInteger::parse("+0000042", Base::Decimal).unwrap();
        assert_eq!(x.data, vec![42]);
    }

    #[test]
    fn parse_hexadecimal_test() {
        let x = BigInteger::parse("FFFFFFFF", Base::Hexadecimal).unwrap();
        assert_eq!(x.data, vec![0xFFFFFFFF]);

        let x = BigInteger::parse("-abcDEF", Base::Hexadecimal).unwrap();
        assert_eq!(x.data, vec![0xABCDEF]);
        assert!(x.negative);

        let x = BigInteger::parse("123456789ABCDEF0", Base::Hexadecimal).unwrap();
        assert_eq!(x.data, vec![0x9ABCDEF0, 0x12345678]);
    }

    #[test]
    fn parse_zero_test() {
        for text in ["0", "-0", "+0", "0000", "-0000"] {
            let x = BigInteger::parse(text, Base::Decimal).unwrap();
            assert_eq!(x.data, vec![0], "{}", text);
            assert!(!x.negative, "{}", text);
        }
    }

    #[test]
    fn parse_errors_test() {
        let err = BigInteger::parse("", Base::Decimal).unwrap_err();
        assert_eq!(*err.code(), ErrorCode::EmptyInput);
        assert_eq!(err.column(), 0);

        for text in ["-", "+"] {
            let err = BigInteger::parse(text, Base::Decimal).unwrap_err();
            assert_eq!(*err.code(), ErrorCode::MissingDigits);
            assert_eq!(err.column(), 1);
        }

        let err = BigInteger::parse("-00x1", Base::Decimal).unwrap_err();
        assert_eq!(*err.code(), ErrorCode::InvalidDigit('x', Base::Decimal));
        assert_eq!(err.column(), 4);

        let err = BigInteger::parse("ABCG", Base::Hexadecimal).unwrap_err();
        assert_eq!(*err.code(), ErrorCode::InvalidDigit('G', Base::Hexadecimal));
        assert_eq!(err.column(), 4);

        let err = BigInteger::parse("12\u{e9}", Base::Decimal).unwrap_err();
        assert_eq!(*err.code(), ErrorCode::InvalidDigit('\u{e9}', Base::Decimal));
        assert_eq!(err.column(), 3);

        assert!(BigInteger::parse(" 1", Base::Decimal).is_err());
        assert!(BigInteger::parse("--1", Base::Decimal).is_err());
        assert!(BigInteger::parse("FF", Base::Decimal).is_err());
    }
}
