//! Property-based tests for the digit-vector algorithms.
//!
//! Every result is checked against `num-bigint` after converting the
//! digit vectors back to integers.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;
use proptest::prelude::*;

use longarith_core::digits::{compare, is_divisible_by_five, is_even};
use longarith_core::{
    add, divide, divide_by_small, multiply_karatsuba_with, multiply_schoolbook, subtract, Base,
    KaratsubaConfig,
};

fn to_big(digits: &[i32], base: i32) -> BigUint {
    digits.iter().rev().fold(BigUint::zero(), |acc, &d| {
        acc * u32::try_from(base).unwrap() + u32::try_from(d).unwrap()
    })
}

fn to_big_wide(digits: &[i64], base: i32) -> BigUint {
    digits.iter().rev().fold(BigUint::zero(), |acc, &d| {
        acc * u32::try_from(base).unwrap() + u64::try_from(d).unwrap()
    })
}

/// A base and two digit vectors in that base.
fn operands(max_len: usize) -> impl Strategy<Value = (i32, Vec<i32>, Vec<i32>)> {
    prop_oneof![Just(2), Just(3), Just(10), Just(256), Just(10_000)].prop_flat_map(move |base| {
        (
            Just(base),
            prop::collection::vec(0..base, 1..max_len),
            prop::collection::vec(0..base, 1..max_len),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Schoolbook and Karatsuba both agree with the bigint product.
    #[test]
    fn products_match_bigint((base, a, b) in operands(80), cutoff in 1usize..9) {
        let desc = Base::new(base).unwrap();
        let expected = to_big(&a, base) * to_big(&b, base);

        let mut wide = vec![0i64; a.len() + b.len()];
        multiply_schoolbook(desc, &mut wide, &a, &b).unwrap();
        prop_assert_eq!(to_big_wide(&wide, base), expected.clone());

        let config = KaratsubaConfig::with_cutoff(cutoff);
        let kara = multiply_karatsuba_with(&config, desc, &a, &b).unwrap();
        prop_assert_eq!(kara.len(), a.len() + b.len());
        prop_assert_eq!(to_big(&kara, base), expected);
    }

    /// The Karatsuba cutoff never changes the product digits.
    #[test]
    fn karatsuba_cutoff_invariance((base, a, b) in operands(120)) {
        let desc = Base::new(base).unwrap();
        let reference = multiply_karatsuba_with(&KaratsubaConfig::with_cutoff(1), desc, &a, &b).unwrap();
        for cutoff in [2, 4, 7, 32, 64, 1024] {
            let got = multiply_karatsuba_with(&KaratsubaConfig::with_cutoff(cutoff), desc, &a, &b).unwrap();
            prop_assert_eq!(&got, &reference, "cutoff {}", cutoff);
        }
    }

    /// Multiplication commutes.
    #[test]
    fn karatsuba_commutes((base, a, b) in operands(60)) {
        let desc = Base::new(base).unwrap();
        let config = KaratsubaConfig::with_cutoff(2);
        let ab = multiply_karatsuba_with(&config, desc, &a, &b).unwrap();
        let ba = multiply_karatsuba_with(&config, desc, &b, &a).unwrap();
        prop_assert_eq!(ab, ba);
    }

    /// Multi-operand addition matches the bigint sum.
    #[test]
    fn sum_matches_bigint((base, a, b) in operands(50), extra in prop::collection::vec(0i32..2, 1..10)) {
        let desc = Base::new(base).unwrap();
        let mut out = vec![0; a.len().max(b.len()).max(extra.len()) + 2];
        add(desc, &mut out, &[&a, &b, &extra]).unwrap();
        let expected = to_big(&a, base) + to_big(&b, base) + to_big(&extra, base);
        prop_assert_eq!(to_big(&out, base), expected);
    }

    /// Subtraction borrows exactly when the subtrahend is larger, and the
    /// digits are the wraparound difference.
    #[test]
    fn subtract_borrow_contract((base, a, b) in operands(40)) {
        let desc = Base::new(base).unwrap();
        let len = a.len().max(b.len());
        let mut out = vec![0; len];
        let borrowed = subtract(desc, &mut out, &a, &b).unwrap();

        let (x, y) = (to_big(&a, base), to_big(&b, base));
        prop_assert_eq!(borrowed, y > x);
        let expected = if borrowed {
            BigUint::from(u32::try_from(base).unwrap()).pow(u32::try_from(len).unwrap()) - (y - x)
        } else {
            x - y
        };
        prop_assert_eq!(to_big(&out, base), expected);
    }

    /// `a = q*b + r` with `r < b`.
    #[test]
    fn division_round_trip((base, a, b) in operands(40)) {
        prop_assume!(b.iter().any(|&d| d != 0));
        let desc = Base::new(base).unwrap();
        let (q, r) = divide(desc, &a, &b).unwrap();
        prop_assert!(compare(&r, &b).is_lt());

        let (x, y) = (to_big(&a, base), to_big(&b, base));
        let (eq, er) = x.div_rem(&y);
        prop_assert_eq!(to_big(&q, base), eq);
        prop_assert_eq!(to_big(&r, base), er);
    }

    /// Division by a machine integer agrees with the bigint quotient.
    #[test]
    fn small_division_matches_bigint((base, a, _b) in operands(60), d in 1i32..100_000) {
        let desc = Base::new(base).unwrap();
        let (q, r) = divide_by_small(desc, &a, d).unwrap();
        let (eq, er) = to_big(&a, base).div_rem(&BigUint::from(u32::try_from(d).unwrap()));
        prop_assert_eq!(to_big(&q, base), eq);
        prop_assert_eq!(BigUint::from(u32::try_from(r).unwrap()), er);
    }

    /// Parity and divisibility by five agree with the integer value in any base.
    #[test]
    fn parity_and_fives_match_bigint(base in 2i32..40, seed in prop::collection::vec(0i32..i32::MAX, 1..30)) {
        let desc = Base::new(base).unwrap();
        let digits: Vec<i32> = seed.iter().map(|&s| s % base).collect();
        let value = to_big(&digits, base);
        prop_assert_eq!(is_even(desc, &digits).unwrap(), value.is_even());
        prop_assert_eq!(
            is_divisible_by_five(desc, &digits).unwrap(),
            (&value % 5u32).is_zero()
        );
    }
}
