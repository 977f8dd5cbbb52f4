//! Multiplication by convolution in a prime field.
//!
//! Pipeline: validate, size the transform, pad, forward transform (once for
//! a square), pointwise multiply, inverse transform, then carry the
//! convolution sums back into digits of the base.

use tracing::debug;

use longarith_core::carry::perform_carry;
use longarith_core::digits::significant_len;
use longarith_core::{ArithError, Base, Multiplier, Operands, DEFAULT_PARALLEL_THRESHOLD};

use crate::field::NttParams;
use crate::roots::{RootCache, RootKey};
use crate::transform::{forward, inverse};

/// Transform length for operands of the given significant lengths.
///
/// At least twice the longer operand so the cyclic convolution cannot wrap.
#[must_use]
pub fn transform_len(len_a: usize, len_b: usize) -> usize {
    (2 * len_a.max(len_b)).next_power_of_two()
}

/// Multiply `a` by `b` into `result` using [`NttParams::DEFAULT`].
///
/// `result` must hold `significant_len(a) + significant_len(b)` digits.
pub fn multiply_ntt(
    base: Base,
    result: &mut [i64],
    a: &[i32],
    b: &[i32],
) -> Result<(), ArithError> {
    multiply_ntt_with(&NttParams::DEFAULT, base, result, Operands::Product(a, b))
}

/// Square `a` into `result` with a single forward transform.
pub fn square_ntt(base: Base, result: &mut [i64], a: &[i32]) -> Result<(), ArithError> {
    multiply_ntt_with(&NttParams::DEFAULT, base, result, Operands::Square(a))
}

/// Multiply in the field described by `params`.
pub fn multiply_ntt_with(
    params: &NttParams,
    base: Base,
    result: &mut [i64],
    operands: Operands<'_>,
) -> Result<(), ArithError> {
    let cache = RootCache::new(2);
    convolve(params, &cache, DEFAULT_PARALLEL_THRESHOLD, base, result, operands)
}

/// Check that the field can hold a product of operands with these lengths.
pub fn check_capacity(
    params: &NttParams,
    base: Base,
    len_a: usize,
    len_b: usize,
) -> Result<u32, ArithError> {
    let log_len = transform_len(len_a, len_b).trailing_zeros();
    if log_len > params.max_log {
        return Err(ArithError::NttCapacityExceeded {
            required_log: log_len,
            max_log: params.max_log,
        });
    }
    let max_digit = u128::from(base.max_digit().unsigned_abs());
    let bound = (len_a.min(len_b) as u128).saturating_mul(max_digit * max_digit);
    if bound >= u128::from(params.modulus) {
        return Err(ArithError::NttCoefficientOverflow {
            bound,
            modulus: params.modulus,
        });
    }
    Ok(log_len)
}

fn convolve(
    params: &NttParams,
    cache: &RootCache,
    parallel_threshold: usize,
    base: Base,
    result: &mut [i64],
    operands: Operands<'_>,
) -> Result<(), ArithError> {
    operands.check(base)?;
    let (a, b) = operands.factors();
    let (len_a, len_b) = (significant_len(a), significant_len(b));
    let needed = len_a + len_b;
    if result.len() < needed {
        return Err(ArithError::BufferTooShort {
            needed,
            actual: result.len(),
        });
    }
    result.fill(0);
    if len_a == 0 || len_b == 0 {
        return Ok(());
    }

    let log_len = check_capacity(params, base, len_a, len_b)?;
    let n = 1usize << log_len;
    debug!(len_a, len_b, n, square = operands.is_square(), "ntt multiply");

    let roots = cache.get_or_compute(params, RootKey { log_len, inverse: false })?;
    let inv_roots = cache.get_or_compute(params, RootKey { log_len, inverse: true })?;

    let mut fa = pad(&a[..len_a], n);
    forward(params, &mut fa, &roots, parallel_threshold)?;
    if operands.is_square() {
        for x in &mut fa {
            *x = params.mul(*x, *x);
        }
    } else {
        let mut fb = pad(&b[..len_b], n);
        forward(params, &mut fb, &roots, parallel_threshold)?;
        for (x, y) in fa.iter_mut().zip(&fb) {
            *x = params.mul(*x, *y);
        }
    }
    inverse(params, &mut fa, &inv_roots, parallel_threshold)?;

    for (slot, &coeff) in result.iter_mut().zip(&fa) {
        *slot = i64::try_from(coeff)
            .map_err(|_| ArithError::InvariantViolation("convolution sum exceeds i64"))?;
    }
    if perform_carry(base, result) != 0 {
        return Err(ArithError::InvariantViolation(
            "ntt product overflowed its buffer",
        ));
    }
    Ok(())
}

fn pad(digits: &[i32], n: usize) -> Vec<u64> {
    let mut out = vec![0u64; n];
    for (slot, &d) in out.iter_mut().zip(digits) {
        *slot = u64::from(d.unsigned_abs());
    }
    out
}

/// NTT strategy over one field, with its own roots cache.
#[derive(Debug)]
pub struct NttMultiplier {
    params: NttParams,
    parallel_threshold: usize,
    cache: RootCache,
}

impl NttMultiplier {
    #[must_use]
    pub fn new(params: NttParams) -> Self {
        Self {
            params,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            cache: RootCache::default(),
        }
    }

    /// Set the transform length at which sub-transforms run in parallel.
    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = if threshold == 0 {
            DEFAULT_PARALLEL_THRESHOLD
        } else {
            threshold
        };
        self
    }

    #[must_use]
    pub fn params(&self) -> &NttParams {
        &self.params
    }

    /// Number of cached roots tables.
    #[must_use]
    pub fn cached_tables(&self) -> usize {
        self.cache.len()
    }

    /// Multiply into a caller-provided wide buffer.
    pub fn multiply_into(
        &self,
        base: Base,
        result: &mut [i64],
        operands: Operands<'_>,
    ) -> Result<(), ArithError> {
        convolve(
            &self.params,
            &self.cache,
            self.parallel_threshold,
            base,
            result,
            operands,
        )
    }
}

impl Default for NttMultiplier {
    fn default() -> Self {
        Self::new(NttParams::DEFAULT)
    }
}

impl Multiplier for NttMultiplier {
    #[allow(clippy::cast_possible_truncation)]
    fn multiply(&self, base: Base, operands: Operands<'_>) -> Result<Vec<i32>, ArithError> {
        let mut wide = vec![0i64; operands.product_len()];
        self.multiply_into(base, &mut wide, operands)?;
        // perform_carry leaves every digit in [0, base)
        Ok(wide.into_iter().map(|d| d as i32).collect())
    }

    fn name(&self) -> &'static str {
        "NTT"
    }
}
