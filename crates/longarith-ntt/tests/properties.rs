//! Property-based tests for NTT multiplication.
//!
//! Products are compared against a brute-force O(n*m) convolution and
//! against `num-bigint`.

use num_bigint::BigUint;
use num_traits::Zero;
use proptest::prelude::*;

use longarith_core::carry::perform_carry;
use longarith_core::{ArithError, Base, Operands};
use longarith_ntt::{multiply_ntt, multiply_ntt_with, square_ntt, NttParams};

fn to_big(digits: &[i64], base: i32) -> BigUint {
    digits.iter().rev().fold(BigUint::zero(), |acc, &d| {
        acc * u32::try_from(base).unwrap() + u64::try_from(d).unwrap()
    })
}

fn to_big_narrow(digits: &[i32], base: i32) -> BigUint {
    digits.iter().rev().fold(BigUint::zero(), |acc, &d| {
        acc * u32::try_from(base).unwrap() + u32::try_from(d).unwrap()
    })
}

/// Direct convolution followed by carry propagation.
fn brute_force(base: Base, a: &[i32], b: &[i32]) -> Vec<i64> {
    let mut out = vec![0i64; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            out[i + j] += i64::from(x) * i64::from(y);
        }
    }
    assert_eq!(perform_carry(base, &mut out), 0);
    out
}

fn operands(max_len: usize) -> impl Strategy<Value = (i32, Vec<i32>, Vec<i32>)> {
    prop_oneof![Just(2), Just(10), Just(10_000)].prop_flat_map(move |base| {
        (
            Just(base),
            prop::collection::vec(0..base, 1..max_len),
            prop::collection::vec(0..base, 1..max_len),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// The transform pipeline agrees with direct convolution.
    #[test]
    fn ntt_matches_brute_force((base, a, b) in operands(200)) {
        let desc = Base::new(base).unwrap();
        let mut out = vec![0i64; a.len() + b.len()];
        multiply_ntt(desc, &mut out, &a, &b).unwrap();
        prop_assert_eq!(&out, &brute_force(desc, &a, &b));
        prop_assert_eq!(
            to_big(&out, base),
            to_big_narrow(&a, base) * to_big_narrow(&b, base)
        );
    }

    /// Squaring with one forward transform equals the general product.
    #[test]
    fn square_matches_product((base, a, _b) in operands(150)) {
        let desc = Base::new(base).unwrap();
        let mut squared = vec![0i64; 2 * a.len()];
        square_ntt(desc, &mut squared, &a).unwrap();
        prop_assert_eq!(squared, brute_force(desc, &a, &a));
    }

    /// Both shipped fields give the same digits when the small one has room.
    #[test]
    fn fields_agree_in_base_ten(
        a in prop::collection::vec(0i32..10, 1..120),
        b in prop::collection::vec(0i32..10, 1..120),
    ) {
        let mut wide = vec![0i64; a.len() + b.len()];
        let mut small = vec![0i64; a.len() + b.len()];
        multiply_ntt_with(&NttParams::DEFAULT, Base::DECIMAL, &mut wide, Operands::Product(&a, &b)).unwrap();
        multiply_ntt_with(&NttParams::SMALL, Base::DECIMAL, &mut small, Operands::Product(&a, &b)).unwrap();
        prop_assert_eq!(wide, small);
    }

    /// Past the restricted capacity the product fails instead of wrapping.
    #[test]
    fn capacity_error_never_wraps(max_log in 2u32..6, extra in 1usize..20) {
        let params = NttParams::SMALL.restricted(max_log).unwrap();
        // Longest operand that still fits: 2 * len <= 2^max_log
        let fits = 1usize << (max_log - 1);
        let a = vec![9; fits];
        let mut out = vec![0i64; 2 * (fits + extra)];
        prop_assert!(multiply_ntt_with(&params, Base::DECIMAL, &mut out, Operands::Square(&a)).is_ok());

        let too_long = vec![9; fits + extra];
        let err = multiply_ntt_with(&params, Base::DECIMAL, &mut out, Operands::Square(&too_long));
        prop_assert!(
            matches!(err, Err(ArithError::NttCapacityExceeded { max_log: m, .. }) if m == max_log),
            "expected capacity error"
        );
    }
}
