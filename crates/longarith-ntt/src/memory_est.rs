//! Memory estimation for NTT multiplication.

use crate::ntt::transform_len;

/// Estimate the bytes an NTT product of operands with these lengths allocates.
///
/// Counts the two padded transform buffers, the forward and inverse roots
/// tables, the copy each transform makes of its input, and the `i64` result.
#[must_use]
pub fn estimate_ntt_memory(len_a: usize, len_b: usize) -> usize {
    if len_a == 0 || len_b == 0 {
        return 0;
    }
    let n = transform_len(len_a, len_b);
    let word = std::mem::size_of::<u64>();

    // Two operand transforms plus one scratch copy
    let transform_bytes = 3 * n * word;
    // Forward and inverse half tables
    let root_bytes = n * word;
    let result_bytes = (len_a + len_b) * std::mem::size_of::<i64>();

    transform_bytes + root_bytes + result_bytes
}
