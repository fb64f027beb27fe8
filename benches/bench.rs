#![feature(test)]

extern crate test;

use biginteger::{to_decimal_string, to_hex_string, Base, BigInteger};
use test::Bencher;

fn factorial(n: u32) -> BigInteger {
    (1..=n).map(BigInteger::from).product()
}

fn input_decimal() -> String {
    to_decimal_string(&factorial(500))
}

#[bench]
fn bench_factorial(b: &mut Bencher) {
    b.iter(|| factorial(test::black_box(200)));
}

#[bench]
fn bench_parse_decimal(b: &mut Bencher) {
    let text = input_decimal();
    b.bytes = text.len() as u64;
    b.iter(|| BigInteger::parse(test::black_box(&text), Base::Decimal).unwrap());
}

#[bench]
fn bench_parse_hexadecimal(b: &mut Bencher) {
    let text = to_hex_string(&factorial(500));
    b.bytes = text.len() as u64;
    b.iter(|| BigInteger::parse(test::black_box(&text), Base::Hexadecimal).unwrap());
}

#[bench]
fn bench_to_decimal_string(b: &mut Bencher) {
    let n = factorial(500);
    b.iter(|| to_decimal_string(test::black_box(&n)));
}

#[bench]
fn bench_to_hex_string(b: &mut Bencher) {
    let n = factorial(500);
    b.iter(|| to_hex_string(test::black_box(&n)));
}

#[bench]
fn bench_mul(b: &mut Bencher) {
    let x = factorial(300);
    let y = factorial(250);
    b.iter(|| test::black_box(&x) * test::black_box(&y));
}

#[bench]
fn bench_div_rem(b: &mut Bencher) {
    let x = factorial(300);
    let y = factorial(120) + 1u32;
    b.iter(|| test::black_box(&x).div_rem(test::black_box(&y)).unwrap());
}
