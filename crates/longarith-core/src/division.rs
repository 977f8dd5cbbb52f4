//! Long division: by a machine integer, and by another digit vector.

use std::cmp::Ordering;

use tracing::debug;

use crate::base::Base;
use crate::carry::multiply_by_small;
use crate::digits::{
    add_in_place, canonical, check_operand, compare, significant_len, subtract_in_place,
};
use crate::error::ArithError;

/// Divide `a` by a positive machine integer in one most-significant-first pass.
///
/// Quotient digit `i` is written to `quotient[i]` when it exists; the rest
/// of `quotient` is zeroed. Returns the remainder.
#[allow(clippy::cast_possible_truncation)]
pub fn divide_by_integer(base: Base, quotient: &mut [i32], a: &[i32], d: i32) -> i32 {
    quotient.fill(0);
    let divisor = i64::from(d);
    let mut rem = 0i64;
    for (i, &digit) in a.iter().enumerate().rev() {
        let cur = rem * base.wide() + i64::from(digit);
        if let Some(slot) = quotient.get_mut(i) {
            *slot = (cur / divisor) as i32;
        }
        rem = cur % divisor;
    }
    rem as i32
}

/// Divide `a` by the machine integer `d`, returning `(quotient, remainder)`.
///
/// The quotient has as many digits as the significant part of `a`.
pub fn divide_by_small(base: Base, a: &[i32], d: i32) -> Result<(Vec<i32>, i32), ArithError> {
    check_operand(base, a)?;
    match d.cmp(&0) {
        Ordering::Equal => return Err(ArithError::DivisionByZero),
        Ordering::Less => return Err(ArithError::NegativeDivisor(d)),
        Ordering::Greater => {}
    }
    let a = canonical(a);
    let mut quotient = vec![0; a.len()];
    let rem = divide_by_integer(base, &mut quotient, a, d);
    Ok((quotient, rem))
}

/// Divide `a` by `b`, returning `(quotient, remainder)`.
///
/// Normalized long division (Knuth, Algorithm D). Both operands are scaled
/// so the divisor's top digit is at least `base / 2`; each quotient digit is
/// then estimated from the top two digits of the running remainder, refined
/// against the divisor's second digit, and corrected at most once more when
/// the trial subtraction borrows.
///
/// For significant lengths `m >= n` the quotient has `m - n + 1` digits and
/// the remainder `n` digits. When `a < b` the quotient is `[0]` and the
/// remainder is `a`.
pub fn divide(base: Base, a: &[i32], b: &[i32]) -> Result<(Vec<i32>, Vec<i32>), ArithError> {
    check_operand(base, a)?;
    check_operand(base, b)?;

    let n = significant_len(b);
    if n == 0 {
        return Err(ArithError::DivisionByZero);
    }
    if compare(a, b) == Ordering::Less {
        return Ok((vec![0], canonical(a).to_vec()));
    }
    let m = significant_len(a);
    debug!(dividend_len = m, divisor_len = n, "long division");

    if n == 1 {
        let mut quotient = vec![0; m];
        let rem = divide_by_integer(base, &mut quotient, &a[..m], b[0]);
        return Ok((quotient, vec![rem]));
    }

    Ok(divide_normalized(base, &a[..m], &b[..n]))
}

/// Algorithm D on trimmed operands with `a >= b` and `b.len() >= 2`.
#[allow(clippy::cast_possible_truncation)]
fn divide_normalized(base: Base, a: &[i32], b: &[i32]) -> (Vec<i32>, Vec<i32>) {
    let (m, n) = (a.len(), b.len());
    let big = base.wide();
    let scale = base.get() / (b[n - 1] + 1);

    let mut u = vec![0; m + 1];
    multiply_by_small(base, &mut u, a, scale);
    let mut v = vec![0; n];
    multiply_by_small(base, &mut v, b, scale);

    let v_top = i64::from(v[n - 1]);
    let v_next = i64::from(v[n - 2]);
    let mut quotient = vec![0; m - n + 1];
    let mut trial = vec![0; n + 1];

    for j in (0..=m - n).rev() {
        let num = i64::from(u[j + n]) * big + i64::from(u[j + n - 1]);
        let mut q_guess = (num / v_top).min(big - 1);
        let mut r_guess = num - q_guess * v_top;
        while r_guess < big && q_guess * v_next > r_guess * big + i64::from(u[j + n - 2]) {
            q_guess -= 1;
            r_guess += v_top;
        }

        multiply_by_small(base, &mut trial, &v, q_guess as i32);
        let window = &mut u[j..=j + n];
        if subtract_in_place(base, window, &trial) {
            // One too high: adding the divisor back carries out of the
            // window and cancels the borrow.
            q_guess -= 1;
            add_in_place(base, window, &v);
        }
        quotient[j] = q_guess as i32;
    }

    let mut remainder = vec![0; n];
    let rest = divide_by_integer(base, &mut remainder, &u[..n], scale);
    debug_assert_eq!(rest, 0, "normalized remainder must be a multiple of the scale");
    (quotient, remainder)
}
