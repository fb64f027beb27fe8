#![no_main]

use biginteger::{to_decimal_string, to_hex_string, Base, BigInteger};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(n) = BigInteger::parse(s, Base::Decimal) {
            let back = BigInteger::parse(&to_decimal_string(&n), Base::Decimal).unwrap();
            assert_eq!(back, n);
        }
        if let Ok(n) = BigInteger::parse(s, Base::Hexadecimal) {
            let back = BigInteger::parse(&to_hex_string(&n), Base::Hexadecimal).unwrap();
            assert_eq!(back, n);
        }
    }
});
