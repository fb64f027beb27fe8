use biginteger::{Base, BigInteger};

#[test]
fn biginteger() {
    assert_eq!(format!("{:?}", BigInteger::zero()), "BigInteger(0)");
    assert_eq!(format!("{:?}", BigInteger::from(1)), "BigInteger(1)");
    assert_eq!(format!("{:?}", BigInteger::from(-1)), "BigInteger(-1)");
    assert_eq!(
        format!("{:?}", BigInteger::from(u64::MAX) + 1),
        "BigInteger(18446744073709551616)",
    );
}

#[test]
fn error() {
    let err = BigInteger::parse("12a4", Base::Decimal).unwrap_err();
    let expected = "Error(\"invalid decimal digit `a`\", column: 3)";
    assert_eq!(format!("{:?}", err), expected);

    let err = BigInteger::parse("", Base::Hexadecimal).unwrap_err();
    let expected = "Error(\"cannot parse integer from empty string\", column: 0)";
    assert_eq!(format!("{:?}", err), expected);

    let err = BigInteger::from(5).checked_rem(&BigInteger::zero()).unwrap_err();
    let expected = "Error(\"attempt to divide by zero\", column: 0)";
    assert_eq!(format!("{:?}", err), expected);
}

#[test]
fn error_code() {
    let err = BigInteger::parse("-", Base::Decimal).unwrap_err();
    assert_eq!(format!("{:?}", err.code()), "MissingDigits");

    let err = BigInteger::parse("G", Base::Hexadecimal).unwrap_err();
    assert_eq!(format!("{:?}", err.code()), "InvalidDigit('G', Hexadecimal)");
}

#[test]
fn indented() {
    let values = vec![BigInteger::from(-2), BigInteger::from(3)];
    let expected = "\
[
    BigInteger(-2),
    BigInteger(3),
]";
    assert_eq!(format!("{:#?}", values), expected);
}
