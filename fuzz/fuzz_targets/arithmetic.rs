#![no_main]

use biginteger::{Base, BigInteger};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str)| {
    let (x, y) = match (
        BigInteger::parse(data.0, Base::Hexadecimal),
        BigInteger::parse(data.1, Base::Hexadecimal),
    ) {
        (Ok(x), Ok(y)) => (x, y),
        _ => return,
    };

    assert_eq!(&x + &y - &y, x);
    if let Ok((q, r)) = x.div_rem(&y) {
        assert_eq!(q * &y + &r, x);
        assert!(BigInteger::is_abs_less(&r, &y));
    }
});
