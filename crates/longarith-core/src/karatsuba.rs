//! Karatsuba divide-and-conquer multiplication.
//!
//! Operands are padded to a common power-of-two dimension and split into
//! halves as slice views, never copied. Three half-size products replace the
//! four of the schoolbook method; below the cutoff the recursion bottoms out
//! in [`multiply_simple`].

use tracing::{debug, trace};

use crate::base::Base;
use crate::constants::{DEFAULT_KARATSUBA_CUTOFF, DEFAULT_PARALLEL_THRESHOLD};
use crate::digits::{add_in_place, check_operand, significant_len, subtract_in_place, sum};
use crate::error::ArithError;
use crate::schoolbook::multiply_simple;

/// Tuning knobs for the Karatsuba recursion. Neither affects the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KaratsubaConfig {
    /// Dimension (in digits) at or below which schoolbook multiplication is used.
    pub cutoff: usize,
    /// Dimension (in digits) at or above which the three subproducts run in parallel.
    pub parallel_threshold: usize,
}

impl Default for KaratsubaConfig {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_KARATSUBA_CUTOFF,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl KaratsubaConfig {
    /// Config with the given cutoff and the default parallel threshold.
    #[must_use]
    pub fn with_cutoff(cutoff: usize) -> Self {
        Self {
            cutoff,
            ..Self::default()
        }
    }

    /// Normalize the config, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.cutoff == 0 {
            self.cutoff = DEFAULT_KARATSUBA_CUTOFF;
        }
        if self.parallel_threshold == 0 {
            self.parallel_threshold = DEFAULT_PARALLEL_THRESHOLD;
        }
        self
    }
}

/// Multiply `a` by `b` with the default Karatsuba configuration.
///
/// Returns `a.len() + b.len()` canonical digits.
pub fn multiply_karatsuba(base: Base, a: &[i32], b: &[i32]) -> Result<Vec<i32>, ArithError> {
    multiply_karatsuba_with(&KaratsubaConfig::default(), base, a, b)
}

/// Multiply `a` by `b` with an explicit Karatsuba configuration.
pub fn multiply_karatsuba_with(
    config: &KaratsubaConfig,
    base: Base,
    a: &[i32],
    b: &[i32],
) -> Result<Vec<i32>, ArithError> {
    check_operand(base, a)?;
    check_operand(base, b)?;
    let config = config.normalize();

    let mut out = vec![0; a.len() + b.len()];
    let len_a = significant_len(a);
    let len_b = significant_len(b);
    if len_a == 0 || len_b == 0 {
        return Ok(out);
    }

    let dim = len_a.max(len_b).next_power_of_two();
    debug!(len_a, len_b, dim, cutoff = config.cutoff, "karatsuba multiply");

    let mut padded_a = vec![0; dim];
    padded_a[..len_a].copy_from_slice(&a[..len_a]);
    let mut padded_b = vec![0; dim];
    padded_b[..len_b].copy_from_slice(&b[..len_b]);

    let mut full = vec![0; 2 * dim];
    karatsuba(base, &config, &mut full, &padded_a, &padded_b)?;

    // The product has at most len_a + len_b significant digits.
    let keep = out.len().min(full.len());
    out[..keep].copy_from_slice(&full[..keep]);
    Ok(out)
}

/// Recursive step: `result = x * y` for equal power-of-two lengths,
/// with `result.len() == 2 * x.len()`.
fn karatsuba(
    base: Base,
    config: &KaratsubaConfig,
    result: &mut [i32],
    x: &[i32],
    y: &[i32],
) -> Result<(), ArithError> {
    let dim = x.len();
    debug_assert!(dim.is_power_of_two() && y.len() == dim && result.len() == 2 * dim);

    if dim <= config.cutoff {
        multiply_simple(base, result, x, y);
        return Ok(());
    }

    let half = dim / 2;
    let (x_lo, x_hi) = x.split_at(half);
    let (y_lo, y_hi) = y.split_at(half);

    // (lo + hi) may carry into one extra digit; keep it aside so the
    // recursive product stays on half-length views.
    let mut x_sum = vec![0; half + 1];
    sum(base, &mut x_sum, &[x_lo, x_hi]);
    let mut y_sum = vec![0; half + 1];
    sum(base, &mut y_sum, &[y_lo, y_hi]);
    let (x_carry, y_carry) = (x_sum[half], y_sum[half]);
    let (x_sum, y_sum) = (&x_sum[..half], &y_sum[..half]);

    let mut middle = vec![0; dim + 2];
    {
        let (low, high) = result.split_at_mut(dim);
        let cross = &mut middle[..dim];
        let (low_res, high_res, cross_res) = if dim >= config.parallel_threshold {
            trace!(dim, "karatsuba parallel split");
            let ((low_res, high_res), cross_res) = rayon::join(
                move || {
                    rayon::join(
                        move || karatsuba(base, config, low, x_lo, y_lo),
                        move || karatsuba(base, config, high, x_hi, y_hi),
                    )
                },
                move || karatsuba(base, config, cross, x_sum, y_sum),
            );
            (low_res, high_res, cross_res)
        } else {
            (
                karatsuba(base, config, low, x_lo, y_lo),
                karatsuba(base, config, high, x_hi, y_hi),
                karatsuba(base, config, cross, x_sum, y_sum),
            )
        };
        low_res?;
        high_res?;
        cross_res?;
    }

    // Fold the carry digits back: (s + c*B^h)(t + d*B^h) = st + B^h(ct + ds) + cd*B^2h.
    if x_carry != 0 {
        add_in_place(base, &mut middle[half..], y_sum);
    }
    if y_carry != 0 {
        add_in_place(base, &mut middle[half..], x_sum);
    }
    if x_carry != 0 && y_carry != 0 {
        add_in_place(base, &mut middle[dim..], &[1]);
    }

    // middle = (lo + hi)(lo' + hi') - lo*lo' - hi*hi' = lo*hi' + hi*lo' >= 0
    if subtract_in_place(base, &mut middle, &result[..dim])
        || subtract_in_place(base, &mut middle, &result[dim..])
    {
        return Err(ArithError::InvariantViolation(
            "karatsuba middle term borrowed past zero",
        ));
    }

    debug_assert!(significant_len(&middle) <= result.len() - half);
    if add_in_place(base, &mut result[half..], &middle) != 0 {
        return Err(ArithError::InvariantViolation(
            "karatsuba product overflowed its buffer",
        ));
    }
    Ok(())
}
