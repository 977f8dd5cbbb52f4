//! Recursive radix-2 number-theoretic transform.
//!
//! Decimation in time over strided views of the input: the even and odd
//! subsequences are transformed into the two halves of the output, then
//! combined with one butterfly pass. Subtransforms at or above the parallel
//! threshold run on the rayon pool.

use tracing::trace;

use longarith_core::ArithError;

use crate::field::NttParams;

/// Forward transform of `data` in place.
///
/// `roots` must be the half table for `data.len()` (see
/// [`crate::roots::roots_of_unity_half`]); the length must be a power of two.
pub fn forward(
    params: &NttParams,
    data: &mut [u64],
    roots: &[u64],
    parallel_threshold: usize,
) -> Result<(), ArithError> {
    let n = data.len();
    if !n.is_power_of_two() {
        return Err(ArithError::InvariantViolation(
            "transform length must be a power of two",
        ));
    }
    if roots.len() != n / 2 {
        return Err(ArithError::InvariantViolation(
            "roots table does not match transform length",
        ));
    }
    if n == 1 {
        return Ok(());
    }
    trace!(n, "ntt transform");
    let input = data.to_vec();
    let pass = Pass {
        params,
        roots,
        parallel_threshold: parallel_threshold.max(2),
    };
    pass.run(&input, 1, data, 1);
    Ok(())
}

/// Inverse transform: forward with the inverse roots, then scale by `n^-1`.
pub fn inverse(
    params: &NttParams,
    data: &mut [u64],
    inv_roots: &[u64],
    parallel_threshold: usize,
) -> Result<(), ArithError> {
    forward(params, data, inv_roots, parallel_threshold)?;
    let n = data.len() as u64;
    let n_inv = params
        .inv(n)
        .ok_or(ArithError::InvariantViolation("transform length not invertible"))?;
    for x in data.iter_mut() {
        *x = params.mul(*x, n_inv);
    }
    Ok(())
}

/// State shared by every level of one transform.
#[derive(Clone, Copy)]
struct Pass<'a> {
    params: &'a NttParams,
    roots: &'a [u64],
    parallel_threshold: usize,
}

impl Pass<'_> {
    /// `out = NTT(input[0], input[stride], input[2*stride], ...)`.
    ///
    /// `roots[k * root_stride]` is the `k`-th power of the principal
    /// `out.len()`-th root.
    fn run(self, input: &[u64], stride: usize, out: &mut [u64], root_stride: usize) {
        let n = out.len();
        if n == 1 {
            out[0] = input[0];
            return;
        }

        let half = n / 2;
        let (even, odd) = out.split_at_mut(half);
        let odd_input = &input[stride..];
        let (next_stride, next_root_stride) = (2 * stride, 2 * root_stride);
        if n >= self.parallel_threshold {
            rayon::join(
                || self.run(input, next_stride, even, next_root_stride),
                || self.run(odd_input, next_stride, odd, next_root_stride),
            );
        } else {
            self.run(input, next_stride, even, next_root_stride);
            self.run(odd_input, next_stride, odd, next_root_stride);
        }

        let params = self.params;
        for (k, (e, o)) in even.iter_mut().zip(odd.iter_mut()).enumerate() {
            let t = params.mul(self.roots[k * root_stride], *o);
            let u = *e;
            *e = params.add(u, t);
            *o = params.sub(u, t);
        }
    }
}
