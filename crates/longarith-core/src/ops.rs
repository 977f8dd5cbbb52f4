//! Checked entry points for addition, subtraction and schoolbook multiplication.
//!
//! Each function validates its operands and buffer once, then hands off to
//! the unchecked primitives in [`crate::digits`] and [`crate::schoolbook`].

use tracing::debug;

use crate::base::Base;
use crate::constants::{difference_len, product_len, sum_len};
use crate::digits::{self, check_operand, significant_len};
use crate::error::ArithError;
use crate::schoolbook::multiply_simple;

fn check_buffer(needed: usize, actual: usize) -> Result<(), ArithError> {
    if actual < needed {
        return Err(ArithError::BufferTooShort { needed, actual });
    }
    Ok(())
}

/// Multiply `a` by `b` into `result` with the O(n·m) method.
///
/// `result` must hold at least `significant_len(a) + significant_len(b)`
/// digits; any further digits are zeroed.
pub fn multiply_schoolbook(
    base: Base,
    result: &mut [i64],
    a: &[i32],
    b: &[i32],
) -> Result<(), ArithError> {
    check_operand(base, a)?;
    check_operand(base, b)?;
    let (len_a, len_b) = (significant_len(a), significant_len(b));
    check_buffer(product_len(len_a, len_b), result.len())?;
    debug!(len_a, len_b, "schoolbook multiply");
    multiply_simple(base, result, &a[..len_a], &b[..len_b]);
    Ok(())
}

/// Sum any number of operands into `result`.
///
/// `result` must hold [`sum_len`] digits of the operands' significant lengths.
pub fn add(base: Base, result: &mut [i32], operands: &[&[i32]]) -> Result<(), ArithError> {
    if operands.is_empty() {
        return Err(ArithError::EmptyOperand);
    }
    for operand in operands {
        check_operand(base, operand)?;
    }
    let lens: Vec<usize> = operands.iter().map(|op| significant_len(op)).collect();
    check_buffer(sum_len(base.get(), &lens), result.len())?;
    digits::sum(base, result, operands);
    Ok(())
}

/// `result = a - b`, returning whether the subtraction borrowed.
///
/// See [`digits::subtract`] for the wraparound contract when `b > a`.
pub fn subtract(
    base: Base,
    result: &mut [i32],
    a: &[i32],
    b: &[i32],
) -> Result<bool, ArithError> {
    check_operand(base, a)?;
    check_operand(base, b)?;
    check_buffer(
        difference_len(significant_len(a), significant_len(b)),
        result.len(),
    )?;
    Ok(digits::subtract(base, result, a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEN: Base = Base::DECIMAL;

    #[test]
    fn schoolbook_concrete() {
        let mut out = vec![0i64; 5];
        multiply_schoolbook(TEN, &mut out, &[7, 9, 9], &[3, 2]).unwrap();
        assert_eq!(out, vec![1, 3, 9, 2, 2]);
    }

    #[test]
    fn schoolbook_leading_zeros_need_no_room() {
        let mut out = vec![0i64; 2];
        multiply_schoolbook(TEN, &mut out, &[4, 0, 0, 0], &[2, 0]).unwrap();
        assert_eq!(out, vec![8, 0]);
    }

    #[test]
    fn schoolbook_short_buffer() {
        let mut out = vec![0i64; 4];
        assert_eq!(
            multiply_schoolbook(TEN, &mut out, &[7, 9, 9], &[3, 2]),
            Err(ArithError::BufferTooShort {
                needed: 5,
                actual: 4
            })
        );
    }

    #[test]
    fn schoolbook_rejects_digit_out_of_range() {
        let mut out = vec![0i64; 4];
        assert!(matches!(
            multiply_schoolbook(TEN, &mut out, &[10], &[1]),
            Err(ArithError::InvalidDigit { digit: 10, .. })
        ));
    }

    #[test]
    fn add_binary() {
        let mut out = vec![0; 4];
        add(TEN, &mut out, &[&[7, 9, 9], &[3, 2]]).unwrap();
        assert_eq!(out, vec![0, 2, 0, 1]);
    }

    #[test]
    fn add_zero_is_identity() {
        let a = [3, 1, 4, 1, 5];
        let mut out = vec![0; 6];
        add(TEN, &mut out, &[&a, &[0]]).unwrap();
        assert_eq!(&out[..5], &a);
        assert_eq!(out[5], 0);
    }

    #[test]
    fn add_requires_carry_room() {
        let mut out = vec![0; 3];
        assert_eq!(
            add(TEN, &mut out, &[&[9, 9, 9], &[1]]),
            Err(ArithError::BufferTooShort {
                needed: 4,
                actual: 3
            })
        );
        assert_eq!(add(TEN, &mut out, &[]), Err(ArithError::EmptyOperand));
    }

    #[test]
    fn subtract_reports_borrow() {
        let mut out = vec![0; 1];
        assert!(subtract(TEN, &mut out, &[5], &[8]).unwrap());
        assert_eq!(out, vec![7]);
    }

    #[test]
    fn subtract_no_borrow() {
        let mut out = vec![0; 3];
        assert!(!subtract(TEN, &mut out, &[0, 0, 1], &[1]).unwrap());
        assert_eq!(out, vec![9, 9, 0]);
    }

    #[test]
    fn subtract_short_buffer() {
        let mut out = vec![0; 1];
        assert!(matches!(
            subtract(TEN, &mut out, &[0, 0, 1], &[1]),
            Err(ArithError::BufferTooShort { needed: 3, .. })
        ));
    }
}
