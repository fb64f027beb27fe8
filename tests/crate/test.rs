#![no_std]

extern crate alloc;

use alloc::string::String;

pub use biginteger::*;

pub fn factorial_text(n: u32) -> String {
    let product: BigInteger = (1..=n).map(BigInteger::from).product();
    to_decimal_string(&product)
}
