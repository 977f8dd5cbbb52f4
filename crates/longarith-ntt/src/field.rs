//! Prime-field parameters and arithmetic for the number-theoretic transform.
//!
//! A field is described by a prime modulus `p`, a primitive `2^K`-th root of
//! unity and its inverse. Transforms of any length `2^k` with `k <= K` use
//! the principal root `root^(2^(K-k))`.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;

use longarith_core::ArithError;

/// Modulus/root configuration for one NTT-friendly prime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NttParams {
    /// Prime modulus, below `2^63`.
    pub modulus: u64,
    /// Primitive `2^max_log`-th root of unity.
    pub root: u64,
    /// `root^-1 mod modulus`.
    pub root_inv: u64,
    /// Largest supported transform length exponent `K`.
    pub max_log: u32,
}

impl NttParams {
    /// `p = 29·2^57 + 1` with root `3^29`. Transforms up to `2^57` points.
    pub const DEFAULT: NttParams = NttParams {
        modulus: 4_179_340_454_199_820_289,
        root: 68_630_377_364_883,
        root_inv: 182_099_332_568_824_125,
        max_log: 57,
    };

    /// `p = 119·2^23 + 1` with root `3^119`. Transforms up to `2^23` points.
    pub const SMALL: NttParams = NttParams {
        modulus: 998_244_353,
        root: 15_311_432,
        root_inv: 469_870_224,
        max_log: 23,
    };

    /// The same prime with the root reduced to order `2^max_log`.
    pub fn restricted(&self, max_log: u32) -> Result<Self, ArithError> {
        let root = self.principal_root(max_log, false)?;
        let root_inv = self.principal_root(max_log, true)?;
        Ok(Self {
            modulus: self.modulus,
            root,
            root_inv,
            max_log,
        })
    }

    /// Check the root-of-unity invariants with arbitrary-precision arithmetic.
    ///
    /// `root^(2^K) = 1`, `root^(2^(K-1)) != 1` and `root * root_inv = 1`.
    #[must_use]
    pub fn verify(&self) -> bool {
        if self.modulus < 2 || self.max_log >= 64 {
            return false;
        }
        let p = BigUint::from(self.modulus);
        let root = BigUint::from(self.root);
        let one = BigUint::one();
        let order = BigUint::one() << self.max_log;

        let full_cycle = root.modpow(&order, &p) == one;
        let primitive = self.max_log == 0 || root.modpow(&(&order >> 1u32), &p) != one;
        let inverse = (&root * BigUint::from(self.root_inv)) % &p == one;
        full_cycle && primitive && inverse
    }

    #[inline]
    #[must_use]
    pub fn add(&self, a: u64, b: u64) -> u64 {
        let s = a + b;
        if s >= self.modulus {
            s - self.modulus
        } else {
            s
        }
    }

    #[inline]
    #[must_use]
    pub fn sub(&self, a: u64, b: u64) -> u64 {
        if a >= b {
            a - b
        } else {
            a + self.modulus - b
        }
    }

    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn mul(&self, a: u64, b: u64) -> u64 {
        ((u128::from(a) * u128::from(b)) % u128::from(self.modulus)) as u64
    }

    /// `a^exp mod p` by square-and-multiply.
    #[must_use]
    pub fn pow(&self, a: u64, mut exp: u64) -> u64 {
        let mut acc = 1 % self.modulus;
        let mut square = a % self.modulus;
        while exp > 0 {
            if exp & 1 == 1 {
                acc = self.mul(acc, square);
            }
            square = self.mul(square, square);
            exp >>= 1;
        }
        acc
    }

    /// Multiplicative inverse, or `None` when `a` shares a factor with `p`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn inv(&self, a: u64) -> Option<u64> {
        let m = i128::from(self.modulus);
        let egcd = i128::from(a % self.modulus).extended_gcd(&m);
        if egcd.gcd != 1 {
            return None;
        }
        Some(egcd.x.rem_euclid(m) as u64)
    }

    /// Principal `2^log_len`-th root of unity, or its inverse.
    pub fn principal_root(&self, log_len: u32, inverse: bool) -> Result<u64, ArithError> {
        if log_len > self.max_log {
            return Err(ArithError::NttCapacityExceeded {
                required_log: log_len,
                max_log: self.max_log,
            });
        }
        let generator = if inverse { self.root_inv } else { self.root };
        // root^(2^(K - log_len)) by repeated squaring
        let mut w = generator;
        for _ in log_len..self.max_log {
            w = self.mul(w, w);
        }
        Ok(w)
    }
}

impl Default for NttParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}
