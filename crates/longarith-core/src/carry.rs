//! Single-digit carry and borrow arithmetic in an arbitrary base.
//!
//! Every helper widens to `i64` before combining digits, so digit products
//! stay exact for any base up to `i32::MAX`.

use num_traits::AsPrimitive;

use crate::base::Base;

/// Add with carry: a + b + carry -> (digit, `new_carry`).
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn add_with_carry(base: Base, a: i32, b: i32, carry: i32) -> (i32, i32) {
    let sum = i64::from(a) + i64::from(b) + i64::from(carry);
    if sum >= base.wide() {
        ((sum - base.wide()) as i32, 1)
    } else {
        (sum as i32, 0)
    }
}

/// Subtract with borrow: a - b - borrow -> (digit, `new_borrow`).
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn sub_with_borrow(base: Base, a: i32, b: i32, borrow: i32) -> (i32, i32) {
    let diff = i64::from(a) - i64::from(b) - i64::from(borrow);
    if diff < 0 {
        ((diff + base.wide()) as i32, 1)
    } else {
        (diff as i32, 0)
    }
}

/// Multiply-accumulate: acc + a * b + carry -> (digit, `new_carry`).
#[inline]
#[must_use]
pub fn mul_add_carry(base: Base, acc: i64, a: i32, b: i32, carry: i64) -> (i64, i64) {
    let t = acc + i64::from(a) * i64::from(b) + carry;
    (t % base.wide(), t / base.wide())
}

/// Resolve every digit into `[0, base)`, moving the excess upward.
///
/// Digits may be negative or far above the base on entry (e.g. raw
/// convolution sums). Returns the carry that did not fit in `digits`.
pub fn perform_carry<D>(base: Base, digits: &mut [D]) -> i64
where
    D: AsPrimitive<i64>,
    i64: AsPrimitive<D>,
{
    let b = base.wide();
    let mut carry = 0i64;
    for digit in digits.iter_mut() {
        let value: i64 = (*digit).as_();
        let t = value + carry;
        *digit = t.rem_euclid(b).as_();
        carry = t.div_euclid(b);
    }
    carry
}

/// Multiply `a` by a small non-negative factor into `result`.
///
/// Digits of the product beyond `result.len()` are dropped; the returned
/// value is the carry out of the last written digit.
#[allow(clippy::cast_possible_truncation)]
pub fn multiply_by_small(base: Base, result: &mut [i32], a: &[i32], k: i32) -> i64 {
    let mut carry = 0i64;
    for (i, slot) in result.iter_mut().enumerate() {
        let digit = a.get(i).copied().unwrap_or(0);
        let t = i64::from(digit) * i64::from(k) + carry;
        *slot = (t % base.wide()) as i32;
        carry = t / base.wide();
    }
    carry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_carry_overflows_base() {
        assert_eq!(add_with_carry(Base::DECIMAL, 9, 1, 0), (0, 1));
        assert_eq!(add_with_carry(Base::DECIMAL, 9, 9, 1), (9, 1));
        assert_eq!(add_with_carry(Base::DECIMAL, 3, 4, 0), (7, 0));
    }

    #[test]
    fn add_carry_large_base() {
        let base = Base::new(i32::MAX).unwrap();
        assert_eq!(
            add_with_carry(base, i32::MAX - 1, i32::MAX - 1, 1),
            (i32::MAX - 1, 1)
        );
    }

    #[test]
    fn sub_borrow_underflows() {
        assert_eq!(sub_with_borrow(Base::DECIMAL, 5, 8, 0), (7, 1));
        assert_eq!(sub_with_borrow(Base::DECIMAL, 0, 0, 1), (9, 1));
        assert_eq!(sub_with_borrow(Base::DECIMAL, 8, 5, 1), (2, 0));
    }

    #[test]
    fn mul_add_carry_splits_digit() {
        assert_eq!(mul_add_carry(Base::DECIMAL, 3, 7, 8, 2), (1, 6));
        assert_eq!(mul_add_carry(Base::DEFAULT, 0, 9_999, 9_999, 0), (1, 9_998));
    }

    #[test]
    fn perform_carry_resolves_oversized_digits() {
        let mut digits: Vec<i64> = vec![25, 13, 0, 0];
        let carry = perform_carry(Base::DECIMAL, &mut digits);
        assert_eq!(digits, vec![5, 5, 1, 0]);
        assert_eq!(carry, 0);
    }

    #[test]
    fn perform_carry_resolves_negative_digits() {
        // 1*100 + (-3)*10 + 5 = 75
        let mut digits: Vec<i32> = vec![5, -3, 1];
        let carry = perform_carry(Base::DECIMAL, &mut digits);
        assert_eq!(digits, vec![5, 7, 0]);
        assert_eq!(carry, 0);
    }

    #[test]
    fn perform_carry_reports_overflow() {
        let mut digits: Vec<i64> = vec![99, 9];
        let carry = perform_carry(Base::DECIMAL, &mut digits);
        assert_eq!(digits, vec![9, 8]);
        assert_eq!(carry, 1);
    }

    #[test]
    fn perform_carry_empty() {
        let mut digits: Vec<i32> = vec![];
        assert_eq!(perform_carry(Base::DECIMAL, &mut digits), 0);
    }

    #[test]
    fn multiply_by_small_extends() {
        let mut out = vec![0; 4];
        // 997 * 3 = 2991
        let carry = multiply_by_small(Base::DECIMAL, &mut out, &[7, 9, 9], 3);
        assert_eq!(out, vec![1, 9, 9, 2]);
        assert_eq!(carry, 0);
    }

    #[test]
    fn multiply_by_small_truncates() {
        let mut out = vec![0; 2];
        let carry = multiply_by_small(Base::DECIMAL, &mut out, &[9, 9], 9);
        assert_eq!(out, vec![1, 9]);
        assert_eq!(carry, 8);
    }
}
