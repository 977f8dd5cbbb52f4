//! # longarith
//!
//! Long-integer arithmetic on digit vectors in any base: add, subtract with
//! an explicit borrow flag, long division, and three multiplication
//! algorithms (schoolbook, Karatsuba and number-theoretic transform) behind
//! one [`Multiplier`] interface.
//!
//! ```
//! use longarith::{build_multiplier, ArithConfig, Base, Multiplier, MultiplierKind, Operands};
//!
//! let config = ArithConfig { base: 10, ..Default::default() };
//! let multiplier = build_multiplier(&config, MultiplierKind::Adaptive).unwrap();
//! let product = multiplier
//!     .multiply(Base::DECIMAL, Operands::Product(&[7, 9, 9], &[3, 2]))
//!     .unwrap();
//! assert_eq!(product, vec![1, 3, 9, 2, 2]); // 997 * 23 = 22931
//! ```

pub mod config;
pub mod strategy;

pub use config::{ArithConfig, ConfigError, NttField, CONFIG_VERSION};
pub use longarith_core::{carry, digits};
pub use longarith_core::{
    add, divide, divide_by_small, multiply_karatsuba, multiply_karatsuba_with,
    multiply_schoolbook, subtract, ArithError, Base, ErrorKind, KaratsubaConfig,
    KaratsubaMultiplier, Multiplier, Operands, SchoolbookMultiplier,
};
pub use longarith_ntt::{
    estimate_ntt_memory, multiply_ntt, multiply_ntt_with, square_ntt, NttMultiplier, NttParams,
};
pub use strategy::{build_multiplier, AdaptiveMultiplier, ConfiguredMultiplier, MultiplierKind};
