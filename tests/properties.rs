use biginteger::{to_decimal_string, to_hex_string, Base, BigInteger};
use proptest::collection::vec as pvec;
use proptest::num::u32::ANY as pu32;
use proptest::bool::ANY as pbool;
use proptest::{prop_assert, prop_assert_eq, prop_assume, proptest};

fn from_limbs(negative: bool, limbs: &[u32]) -> BigInteger {
    let mut value = BigInteger::zero();
    for &limb in limbs.iter().rev() {
        value = value * (1u64 << 32) + limb;
    }
    if negative {
        -value
    } else {
        value
    }
}

proptest! {
    #[test]
    fn matches_native_arithmetic(x: i64, y: i64) {
        let bx = BigInteger::from(x);
        let by = BigInteger::from(y);
        let (x, y) = (i128::from(x), i128::from(y));

        prop_assert_eq!(&bx + &by, x + y);
        prop_assert_eq!(&bx - &by, x - y);
        prop_assert_eq!(&bx * &by, x * y);
        prop_assert_eq!(bx.cmp(&by), x.cmp(&y));
        if y != 0 {
            prop_assert_eq!(&bx / &by, x / y);
            prop_assert_eq!(&bx % &by, x % y);
        }
    }

    #[test]
    fn limbs_are_normalized(negative in pbool, limbs in pvec(pu32, 0..8)) {
        let value = from_limbs(negative, &limbs);
        prop_assert!(value.size() >= 1);
        prop_assert!(value.size() == 1 || *value.limbs().last().unwrap() != 0);
        if value.is_zero() {
            prop_assert!(!value.is_negative());
        }
    }

    #[test]
    fn division_identity(
        xneg in pbool,
        xlimbs in pvec(pu32, 1..8),
        yneg in pbool,
        ylimbs in pvec(pu32, 1..5),
    ) {
        let x = from_limbs(xneg, &xlimbs);
        let y = from_limbs(yneg, &ylimbs);
        prop_assume!(!y.is_zero());

        let (q, r) = x.div_rem(&y).unwrap();
        prop_assert_eq!(&q * &y + &r, x.clone());
        prop_assert!(BigInteger::is_abs_less(&r, &y));
        prop_assert!(r.is_zero() || r.is_negative() == x.is_negative());
    }

    #[test]
    fn add_sub_inverse(
        xneg in pbool,
        xlimbs in pvec(pu32, 1..8),
        yneg in pbool,
        ylimbs in pvec(pu32, 1..8),
    ) {
        let x = from_limbs(xneg, &xlimbs);
        let y = from_limbs(yneg, &ylimbs);
        prop_assert_eq!(&x + &y, &y + &x);
        prop_assert_eq!(&x + &y - &y, x.clone());
        prop_assert_eq!(&x * &y, &y * &x);
        prop_assert_eq!(&x - &x, 0);
        prop_assert_eq!(&x + -&x, 0);
        prop_assert_eq!(&x + BigInteger::zero(), x.clone());
        prop_assert!((&x * BigInteger::zero()).is_zero());
        prop_assert!(!(&x * BigInteger::zero()).is_negative());
    }

    #[test]
    fn associativity(
        x in pvec(pu32, 1..5),
        y in pvec(pu32, 1..5),
        z in pvec(pu32, 1..5),
        signs in (pbool, pbool, pbool),
    ) {
        let x = from_limbs(signs.0, &x);
        let y = from_limbs(signs.1, &y);
        let z = from_limbs(signs.2, &z);
        prop_assert_eq!((&x + &y) + &z, &x + (&y + &z));
        prop_assert_eq!((&x * &y) * &z, &x * (&y * &z));
    }

    #[test]
    fn text_round_trip(negative in pbool, limbs in pvec(pu32, 1..10)) {
        let value = from_limbs(negative, &limbs);

        let decimal = to_decimal_string(&value);
        prop_assert_eq!(BigInteger::parse(&decimal, Base::Decimal).unwrap(), value.clone());

        let hex = to_hex_string(&value);
        prop_assert_eq!(BigInteger::parse(&hex, Base::Hexadecimal).unwrap(), value.clone());
        prop_assert_eq!(hex.to_lowercase(), format!("{:x}", value));
    }

    #[test]
    fn parse_never_panics(text in "[-+]?[0-9a-fA-FxX ]{0,40}") {
        let _ = BigInteger::parse(&text, Base::Decimal);
        let _ = BigInteger::parse(&text, Base::Hexadecimal);
    }
}
