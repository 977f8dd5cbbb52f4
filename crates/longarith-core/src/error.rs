//! Error type shared by every arithmetic entry point.

/// Error type for digit-array arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArithError {
    /// The digit base is not at least 2.
    #[error("invalid base {0}: base must be at least 2")]
    InvalidBase(i32),

    /// A digit lies outside `[0, base)`.
    #[error("invalid digit {digit} at index {index} for base {base}")]
    InvalidDigit {
        /// Position of the offending digit (least significant first).
        index: usize,
        /// The digit value.
        digit: i64,
        /// The base the digit was checked against.
        base: i32,
    },

    /// An operand slice was empty.
    #[error("empty operand")]
    EmptyOperand,

    /// The caller-provided result buffer cannot hold the result.
    #[error("result buffer too short: need {needed} digits, got {actual}")]
    BufferTooShort {
        /// Required length in digits.
        needed: usize,
        /// Provided length in digits.
        actual: usize,
    },

    /// Division by a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// A call used a different base from the one the multiplier was built for.
    #[error("base mismatch: configured for base {expected}, called with base {actual}")]
    BaseMismatch {
        /// The configured base.
        expected: i32,
        /// The base passed to the call.
        actual: i32,
    },

    /// A machine-integer divisor was negative.
    #[error("negative divisor {0}")]
    NegativeDivisor(i32),

    /// The NTT transform length exceeds the field's maximum power of two.
    #[error("NTT capacity exceeded: transform needs 2^{required_log}, field supports 2^{max_log}")]
    NttCapacityExceeded {
        /// Exponent of the required transform length.
        required_log: u32,
        /// Largest exponent the modulus/root pair supports.
        max_log: u32,
    },

    /// Convolution sums could reach the modulus and wrap.
    #[error("NTT coefficient overflow: convolution sums up to {bound} do not fit modulus {modulus}")]
    NttCoefficientOverflow {
        /// Upper bound on a single convolution sum.
        bound: u128,
        /// The field modulus.
        modulus: u64,
    },

    /// An internal algorithm invariant was broken. This is a library bug.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(&'static str),
}

/// Broad classification of an [`ArithError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed malformed input.
    Input,
    /// Valid input that exceeds what this build can compute.
    Capacity,
    /// A bug in the library itself.
    Internal,
}

impl ArithError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidBase(_)
            | Self::InvalidDigit { .. }
            | Self::EmptyOperand
            | Self::BufferTooShort { .. }
            | Self::BaseMismatch { .. }
            | Self::DivisionByZero
            | Self::NegativeDivisor(_) => ErrorKind::Input,
            Self::NttCapacityExceeded { .. } | Self::NttCoefficientOverflow { .. } => {
                ErrorKind::Capacity
            }
            Self::InvariantViolation(_) => ErrorKind::Internal,
        }
    }
}
