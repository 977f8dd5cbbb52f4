//! # longarith-core
//!
//! Fixed-base long-integer arithmetic over digit vectors: comparison,
//! addition, subtraction with an explicit borrow flag, schoolbook and
//! Karatsuba multiplication, and normalized long division.
//!
//! Digit vectors are least-significant-digit first and carry no sign.

pub mod base;
pub mod carry;
pub mod constants;
pub mod digits;
pub mod division;
pub mod error;
pub mod karatsuba;
pub mod multiplier;
pub mod ops;
pub mod schoolbook;

// Re-exports
pub use base::Base;
pub use constants::{
    DEFAULT_BASE, DEFAULT_KARATSUBA_CUTOFF, DEFAULT_NTT_THRESHOLD, DEFAULT_PARALLEL_THRESHOLD,
};
pub use division::{divide, divide_by_small};
pub use error::{ArithError, ErrorKind};
pub use karatsuba::{multiply_karatsuba, multiply_karatsuba_with, KaratsubaConfig};
pub use multiplier::{KaratsubaMultiplier, Multiplier, Operands, SchoolbookMultiplier};
pub use ops::{add, multiply_schoolbook, subtract};
