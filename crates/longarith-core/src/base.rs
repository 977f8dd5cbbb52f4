//! The digit base descriptor.

use crate::constants::DEFAULT_BASE;
use crate::error::ArithError;

/// A validated digit base (always at least 2).
///
/// Every digit array passed to one operation is interpreted in the same
/// `Base`; there is no implicit conversion between bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Base(i32);

impl Base {
    /// Base 2.
    pub const BINARY: Base = Base(2);
    /// Base 10.
    pub const DECIMAL: Base = Base(10);
    /// Base 10 000, four decimal digits per machine digit.
    pub const DEFAULT: Base = Base(DEFAULT_BASE);

    /// Create a base, rejecting anything below 2.
    pub fn new(base: i32) -> Result<Self, ArithError> {
        if base < 2 {
            return Err(ArithError::InvalidBase(base));
        }
        Ok(Self(base))
    }

    /// The base as an `i32`.
    #[inline]
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// The base widened to the accumulator type.
    #[inline]
    #[must_use]
    pub const fn wide(self) -> i64 {
        self.0 as i64
    }

    /// Largest digit value, `base - 1`.
    #[inline]
    #[must_use]
    pub const fn max_digit(self) -> i32 {
        self.0 - 1
    }
}

impl Default for Base {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i32> for Base {
    type Error = ArithError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Base> for i32 {
    fn from(base: Base) -> Self {
        base.0
    }
}

impl std::fmt::Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
