//! Multiplication strategy trait and the in-crate strategies.
//!
//! `Multiplier` is the narrow interface every algorithm implements.
//! `Operands` makes squaring an explicit request rather than something
//! inferred from two references pointing at the same digits.

use crate::base::Base;
use crate::digits::check_operand;
use crate::error::ArithError;
use crate::karatsuba::{multiply_karatsuba_with, KaratsubaConfig};
use crate::schoolbook::multiply_simple;

/// The operands of one multiplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operands<'a> {
    /// `a * a`; algorithms may share work between the two factors.
    Square(&'a [i32]),
    /// `a * b`.
    Product(&'a [i32], &'a [i32]),
}

impl<'a> Operands<'a> {
    /// The two factors, equal for a square.
    #[must_use]
    pub fn factors(&self) -> (&'a [i32], &'a [i32]) {
        match *self {
            Self::Square(a) => (a, a),
            Self::Product(a, b) => (a, b),
        }
    }

    /// Whether this is a squaring request.
    #[must_use]
    pub fn is_square(&self) -> bool {
        matches!(self, Self::Square(_))
    }

    /// Digits needed for the product of the raw operand lengths.
    #[must_use]
    pub fn product_len(&self) -> usize {
        let (a, b) = self.factors();
        a.len() + b.len()
    }

    /// Validate both factors against `base`.
    pub fn check(&self, base: Base) -> Result<(), ArithError> {
        match *self {
            Self::Square(a) => check_operand(base, a),
            Self::Product(a, b) => {
                check_operand(base, a)?;
                check_operand(base, b)
            }
        }
    }
}

/// Narrow interface for multiplication algorithms.
pub trait Multiplier: Send + Sync {
    /// Multiply the operands, returning `product_len()` canonical digits.
    fn multiply(&self, base: Base, operands: Operands<'_>) -> Result<Vec<i32>, ArithError>;

    /// Square `a`.
    fn square(&self, base: Base, a: &[i32]) -> Result<Vec<i32>, ArithError> {
        self.multiply(base, Operands::Square(a))
    }

    /// Get the name of this multiplication strategy.
    fn name(&self) -> &str;
}

/// O(n·m) schoolbook strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchoolbookMultiplier;

impl SchoolbookMultiplier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Multiplier for SchoolbookMultiplier {
    fn multiply(&self, base: Base, operands: Operands<'_>) -> Result<Vec<i32>, ArithError> {
        operands.check(base)?;
        let (a, b) = operands.factors();
        let mut out = vec![0i32; operands.product_len()];
        multiply_simple(base, &mut out, a, b);
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "Schoolbook"
    }
}

/// Karatsuba strategy with a configurable cutoff.
#[derive(Debug, Clone, Copy, Default)]
pub struct KaratsubaMultiplier {
    config: KaratsubaConfig,
}

impl KaratsubaMultiplier {
    #[must_use]
    pub fn new(config: KaratsubaConfig) -> Self {
        Self {
            config: config.normalize(),
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &KaratsubaConfig {
        &self.config
    }
}

impl Multiplier for KaratsubaMultiplier {
    fn multiply(&self, base: Base, operands: Operands<'_>) -> Result<Vec<i32>, ArithError> {
        let (a, b) = operands.factors();
        multiply_karatsuba_with(&self.config, base, a, b)
    }

    fn name(&self) -> &'static str {
        "Karatsuba"
    }
}
