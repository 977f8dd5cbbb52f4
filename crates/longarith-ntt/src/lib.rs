//! # longarith-ntt
//!
//! Number-theoretic-transform multiplication of digit vectors: prime-field
//! parameters, roots-of-unity tables, a recursive radix-2 transform and the
//! convolution pipeline that carries the result back into digits.

pub mod field;
pub mod memory_est;
pub mod ntt;
pub mod roots;
pub mod transform;

// Re-exports
pub use field::NttParams;
pub use memory_est::estimate_ntt_memory;
pub use ntt::{multiply_ntt, multiply_ntt_with, square_ntt, NttMultiplier};
pub use roots::{roots_of_unity_half, RootCache};
