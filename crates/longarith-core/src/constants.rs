//! Constants for digit bases, algorithm cutoffs and buffer sizing.

/// Default digit base: four decimal digits per machine digit.
pub const DEFAULT_BASE: i32 = 10_000;

/// Default operand dimension (in digits) at or below which Karatsuba
/// falls back to schoolbook multiplication.
pub const DEFAULT_KARATSUBA_CUTOFF: usize = 32;

/// Default operand dimension (in digits) at which recursive subproblems
/// start running on the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1024;

/// Default operand length (in digits) above which NTT multiplication is preferred.
pub const DEFAULT_NTT_THRESHOLD: usize = 256;

/// Result length needed to hold the product of operands with `len_a` and `len_b` digits.
#[must_use]
pub const fn product_len(len_a: usize, len_b: usize) -> usize {
    len_a + len_b
}

/// Result length needed to hold a difference of operands with `len_a` and `len_b` digits.
#[must_use]
pub const fn difference_len(len_a: usize, len_b: usize) -> usize {
    if len_a > len_b {
        len_a
    } else {
        len_b
    }
}

/// Result length needed to hold the sum of `lens.len()` operands in `base`.
///
/// The longest operand plus `ceil(log_base(count))` digits of carry.
#[must_use]
pub fn sum_len(base: i32, lens: &[usize]) -> usize {
    let longest = lens.iter().copied().max().unwrap_or(0);
    let count = lens.len() as u64;
    let mut carry_digits = 0;
    let mut reach = 1u64;
    while reach < count {
        reach = reach.saturating_mul(u64::from(base.unsigned_abs()));
        carry_digits += 1;
    }
    longest + carry_digits
}
