//! Digit-vector primitives.
//!
//! A digit vector stores one machine integer per digit in a fixed [`Base`],
//! least significant digit first. High-order zero digits are allowed and
//! ignored by every comparison.
//!
//! The functions here are unchecked building blocks: they assume every digit
//! is already in `[0, base)` and they silently drop carries that do not fit
//! the caller's buffer. Validation happens once, at the public entry points,
//! through [`check_operand`].

use std::cmp::Ordering;

use crate::base::Base;
use crate::carry::{add_with_carry, sub_with_borrow};
use crate::error::ArithError;

/// Index of the highest non-zero digit plus one; 0 for a zero value.
#[must_use]
pub fn significant_len(digits: &[i32]) -> usize {
    digits.iter().rposition(|&d| d != 0).map_or(0, |i| i + 1)
}

/// `digits` without its high-order zeros, keeping at least one digit.
#[must_use]
pub fn canonical(digits: &[i32]) -> &[i32] {
    let len = significant_len(digits).max(1).min(digits.len());
    &digits[..len]
}

/// Compare two digit vectors of possibly different lengths.
#[must_use]
pub fn compare(a: &[i32], b: &[i32]) -> Ordering {
    let common = a.len().min(b.len());
    if a[common..].iter().any(|&d| d != 0) {
        return Ordering::Greater;
    }
    if b[common..].iter().any(|&d| d != 0) {
        return Ordering::Less;
    }
    a[..common].iter().rev().cmp(b[..common].iter().rev())
}

/// Returns `(a > b, a == b)`.
#[must_use]
pub fn greater_than(a: &[i32], b: &[i32]) -> (bool, bool) {
    match compare(a, b) {
        Ordering::Greater => (true, false),
        Ordering::Equal => (false, true),
        Ordering::Less => (false, false),
    }
}

/// Numeric equality, ignoring high-order zeros.
#[must_use]
pub fn equals(a: &[i32], b: &[i32]) -> bool {
    compare(a, b) == Ordering::Equal
}

/// Whether the value is even.
///
/// Inspects only the lowest digit when the base is even; otherwise every
/// power of the base is odd and the parity is that of the digit sum.
pub fn is_even(base: Base, digits: &[i32]) -> Result<bool, ArithError> {
    let lowest = *digits.first().ok_or(ArithError::EmptyOperand)?;
    if base.get() % 2 == 0 {
        return Ok(lowest % 2 == 0);
    }
    let parity = digits.iter().fold(0, |acc, &d| (acc + d % 2) % 2);
    Ok(parity == 0)
}

/// Whether the value is divisible by five.
///
/// Inspects only the lowest digit when the base is a multiple of five.
/// Otherwise `base^i mod 5` cycles with period 1, 2 or 4 and each digit is
/// weighted by its position in the cycle.
pub fn is_divisible_by_five(base: Base, digits: &[i32]) -> Result<bool, ArithError> {
    let lowest = *digits.first().ok_or(ArithError::EmptyOperand)?;
    let period: &[i64] = match base.get() % 5 {
        0 => return Ok(lowest % 5 == 0),
        1 => &[1],
        2 => &[1, 2, 4, 3],
        3 => &[1, 3, 4, 2],
        _ => &[1, 4],
    };
    let residue = digits
        .iter()
        .zip(period.iter().cycle())
        .fold(0i64, |acc, (&d, &w)| (acc + i64::from(d) * w) % 5);
    Ok(residue == 0)
}

/// Positional sum of any number of operands into `result`.
///
/// `result` should hold [`crate::constants::sum_len`] digits; carry past the
/// end of the buffer is dropped.
#[allow(clippy::cast_possible_truncation)]
pub fn sum(base: Base, result: &mut [i32], operands: &[&[i32]]) {
    let b = base.wide();
    let mut carry = 0i64;
    for (i, slot) in result.iter_mut().enumerate() {
        let column: i64 = operands
            .iter()
            .filter_map(|op| op.get(i))
            .map(|&d| i64::from(d))
            .sum();
        let t = column + carry;
        *slot = (t % b) as i32;
        carry = t / b;
    }
}

/// `result = a * base^shift_a + b * base^shift_b`.
///
/// Carry past the end of the buffer is dropped.
pub fn sum_shifted(
    base: Base,
    result: &mut [i32],
    a: &[i32],
    shift_a: usize,
    b: &[i32],
    shift_b: usize,
) {
    let shifted = |digits: &[i32], shift: usize, i: usize| {
        i.checked_sub(shift)
            .and_then(|j| digits.get(j))
            .copied()
            .unwrap_or(0)
    };
    let mut carry = 0;
    for (i, slot) in result.iter_mut().enumerate() {
        let (digit, c) = add_with_carry(
            base,
            shifted(a, shift_a, i),
            shifted(b, shift_b, i),
            carry,
        );
        *slot = digit;
        carry = c;
    }
}

/// `acc += x`, returning the carry out of the top of `acc`.
///
/// Digits of `x` beyond `acc.len()` are ignored.
pub fn add_in_place(base: Base, acc: &mut [i32], x: &[i32]) -> i32 {
    let mut carry = 0;
    for (i, slot) in acc.iter_mut().enumerate() {
        let digit = x.get(i).copied().unwrap_or(0);
        if digit == 0 && carry == 0 && i >= x.len() {
            break;
        }
        let (d, c) = add_with_carry(base, *slot, digit, carry);
        *slot = d;
        carry = c;
    }
    carry
}

/// `result = one - two`, returning whether the subtraction borrowed.
///
/// When `two > one` the subtraction still completes: `result` then holds
/// `base^result.len() - (two - one)` and `true` is returned. Callers must
/// check the flag; the digits alone do not reveal the wraparound.
pub fn subtract(base: Base, result: &mut [i32], one: &[i32], two: &[i32]) -> bool {
    let mut borrow = 0;
    for (i, slot) in result.iter_mut().enumerate() {
        let a = one.get(i).copied().unwrap_or(0);
        let b = two.get(i).copied().unwrap_or(0);
        let (d, br) = sub_with_borrow(base, a, b, borrow);
        *slot = d;
        borrow = br;
    }
    borrow != 0
}

/// `acc -= x` with the same wraparound contract as [`subtract`].
///
/// Digits of `x` beyond `acc.len()` are ignored.
pub fn subtract_in_place(base: Base, acc: &mut [i32], x: &[i32]) -> bool {
    let mut borrow = 0;
    for (i, slot) in acc.iter_mut().enumerate() {
        let digit = x.get(i).copied().unwrap_or(0);
        if digit == 0 && borrow == 0 && i >= x.len() {
            break;
        }
        let (d, br) = sub_with_borrow(base, *slot, digit, borrow);
        *slot = d;
        borrow = br;
    }
    borrow != 0
}

/// Check an operand at a public entry point: non-empty, digits in range.
pub fn check_operand(base: Base, digits: &[i32]) -> Result<(), ArithError> {
    if digits.is_empty() {
        return Err(ArithError::EmptyOperand);
    }
    validate_digits(base, digits)
}

/// Check that every digit lies in `[0, base)`.
pub fn validate_digits(base: Base, digits: &[i32]) -> Result<(), ArithError> {
    match digits
        .iter()
        .enumerate()
        .find(|&(_, &d)| d < 0 || d >= base.get())
    {
        Some((index, &digit)) => Err(ArithError::InvalidDigit {
            index,
            digit: i64::from(digit),
            base: base.get(),
        }),
        None => Ok(()),
    }
}
