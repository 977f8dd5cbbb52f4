//! Multiplier selection by name and by operand size.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use longarith_core::digits::significant_len;
use longarith_core::{
    ArithError, Base, ErrorKind, KaratsubaMultiplier, Multiplier, Operands, SchoolbookMultiplier,
};
use longarith_ntt::NttMultiplier;

use crate::config::{ArithConfig, ConfigError};

/// The multiplication algorithms on offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MultiplierKind {
    Schoolbook,
    Karatsuba,
    Ntt,
    Adaptive,
}

impl MultiplierKind {
    pub const ALL: [MultiplierKind; 4] = [
        MultiplierKind::Schoolbook,
        MultiplierKind::Karatsuba,
        MultiplierKind::Ntt,
        MultiplierKind::Adaptive,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Schoolbook => "schoolbook",
            Self::Karatsuba => "karatsuba",
            Self::Ntt => "ntt",
            Self::Adaptive => "adaptive",
        }
    }
}

impl fmt::Display for MultiplierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MultiplierKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "schoolbook" | "simple" => Ok(Self::Schoolbook),
            "karatsuba" => Ok(Self::Karatsuba),
            "ntt" | "fft" => Ok(Self::Ntt),
            "adaptive" | "auto" => Ok(Self::Adaptive),
            other => Err(ConfigError::Invalid(format!("unknown multiplier '{other}'"))),
        }
    }
}

/// Build the multiplier `kind` configured by `config`.
///
/// The result only accepts calls in the configured base.
pub fn build_multiplier(
    config: &ArithConfig,
    kind: MultiplierKind,
) -> Result<Box<dyn Multiplier>, ConfigError> {
    let config = config.clone().normalize();
    config.validate()?;
    let base = config.base()?;
    Ok(match kind {
        MultiplierKind::Schoolbook => {
            Box::new(ConfiguredMultiplier::new(base, SchoolbookMultiplier::new()))
        }
        MultiplierKind::Karatsuba => Box::new(ConfiguredMultiplier::new(
            base,
            KaratsubaMultiplier::new(config.karatsuba()),
        )),
        MultiplierKind::Ntt => Box::new(ConfiguredMultiplier::new(
            base,
            NttMultiplier::new(config.ntt_params()?)
                .with_parallel_threshold(config.parallel_threshold),
        )),
        MultiplierKind::Adaptive => Box::new(AdaptiveMultiplier::from_config(&config)?),
    })
}

fn check_base(expected: Base, actual: Base) -> Result<(), ArithError> {
    if expected == actual {
        Ok(())
    } else {
        Err(ArithError::BaseMismatch {
            expected: expected.get(),
            actual: actual.get(),
        })
    }
}

/// A multiplier pinned to one base.
#[derive(Debug)]
pub struct ConfiguredMultiplier<M> {
    base: Base,
    inner: M,
}

impl<M: Multiplier> ConfiguredMultiplier<M> {
    #[must_use]
    pub fn new(base: Base, inner: M) -> Self {
        Self { base, inner }
    }

    #[must_use]
    pub fn base(&self) -> Base {
        self.base
    }
}

impl<M: Multiplier> Multiplier for ConfiguredMultiplier<M> {
    fn multiply(&self, base: Base, operands: Operands<'_>) -> Result<Vec<i32>, ArithError> {
        check_base(self.base, base)?;
        self.inner.multiply(base, operands)
    }

    fn square(&self, base: Base, a: &[i32]) -> Result<Vec<i32>, ArithError> {
        check_base(self.base, base)?;
        self.inner.square(base, a)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

/// Picks an algorithm from the operand lengths.
///
/// Schoolbook up to the Karatsuba cutoff, Karatsuba below the NTT threshold,
/// NTT from there on. An NTT capacity error falls back to Karatsuba.
#[derive(Debug)]
pub struct AdaptiveMultiplier {
    base: Base,
    karatsuba_cutoff: usize,
    ntt_threshold: usize,
    schoolbook: SchoolbookMultiplier,
    karatsuba: KaratsubaMultiplier,
    ntt: NttMultiplier,
}

impl AdaptiveMultiplier {
    /// Build from a normalized, validated config.
    pub fn from_config(config: &ArithConfig) -> Result<Self, ConfigError> {
        let karatsuba = config.karatsuba();
        Ok(Self {
            base: config.base()?,
            karatsuba_cutoff: karatsuba.cutoff,
            ntt_threshold: config.ntt_threshold,
            schoolbook: SchoolbookMultiplier::new(),
            karatsuba: KaratsubaMultiplier::new(karatsuba),
            ntt: NttMultiplier::new(config.ntt_params()?)
                .with_parallel_threshold(config.parallel_threshold),
        })
    }

    /// The algorithm used for operands with these significant lengths.
    #[must_use]
    pub fn select(&self, len_a: usize, len_b: usize) -> MultiplierKind {
        let longest = len_a.max(len_b);
        if longest <= self.karatsuba_cutoff {
            MultiplierKind::Schoolbook
        } else if longest < self.ntt_threshold {
            MultiplierKind::Karatsuba
        } else {
            MultiplierKind::Ntt
        }
    }
}

impl Multiplier for AdaptiveMultiplier {
    fn multiply(&self, base: Base, operands: Operands<'_>) -> Result<Vec<i32>, ArithError> {
        check_base(self.base, base)?;
        let (a, b) = operands.factors();
        let kind = self.select(significant_len(a), significant_len(b));
        debug!(%kind, "adaptive multiply");
        match kind {
            MultiplierKind::Schoolbook => self.schoolbook.multiply(base, operands),
            MultiplierKind::Ntt => match self.ntt.multiply(base, operands) {
                Err(err) if err.kind() == ErrorKind::Capacity => {
                    warn!(error = %err, "ntt capacity exceeded, falling back to karatsuba");
                    self.karatsuba.multiply(base, operands)
                }
                result => result,
            },
            MultiplierKind::Karatsuba | MultiplierKind::Adaptive => {
                self.karatsuba.multiply(base, operands)
            }
        }
    }

    fn name(&self) -> &str {
        "Adaptive"
    }
}
