//! Runtime arithmetic configuration (serializable).

use serde::{Deserialize, Serialize};

use longarith_core::{
    ArithError, Base, KaratsubaConfig, DEFAULT_BASE, DEFAULT_KARATSUBA_CUTOFF,
    DEFAULT_NTT_THRESHOLD, DEFAULT_PARALLEL_THRESHOLD,
};
use longarith_ntt::NttParams;

/// Current config format version.
pub const CONFIG_VERSION: u32 = 1;

/// Errors from loading or validating an [`ArithConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),

    #[error(transparent)]
    Arith(#[from] ArithError),
}

/// Which NTT-friendly prime the NTT multiplier works in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NttField {
    /// `29·2^57 + 1`, suitable for any base up to 10 000.
    #[default]
    Default,
    /// `998244353`, for small bases only.
    Small,
}

impl NttField {
    #[must_use]
    pub fn params(self) -> NttParams {
        match self {
            Self::Default => NttParams::DEFAULT,
            Self::Small => NttParams::SMALL,
        }
    }
}

/// Base, cutoffs and NTT field for one arithmetic setup.
///
/// Zero-valued thresholds mean "use the default"; see [`ArithConfig::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArithConfig {
    /// Config format version for compatibility checking.
    pub version: u32,
    /// Digit base shared by every operand.
    pub base: i32,
    /// Operand length at or below which Karatsuba uses schoolbook multiplication.
    pub karatsuba_cutoff: usize,
    /// Operand length at which recursive work is split across threads.
    pub parallel_threshold: usize,
    /// Operand length at or above which the adaptive multiplier uses the NTT.
    pub ntt_threshold: usize,
    /// NTT prime.
    pub ntt_field: NttField,
    /// Largest transform length exponent to allow (0 = whatever the field supports).
    pub ntt_max_log: u32,
}

impl Default for ArithConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            base: DEFAULT_BASE,
            karatsuba_cutoff: DEFAULT_KARATSUBA_CUTOFF,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            ntt_threshold: DEFAULT_NTT_THRESHOLD,
            ntt_field: NttField::Default,
            ntt_max_log: 0,
        }
    }
}

impl ArithConfig {
    /// Parse, normalize and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        let config = config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Normalize config, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.karatsuba_cutoff == 0 {
            self.karatsuba_cutoff = DEFAULT_KARATSUBA_CUTOFF;
        }
        if self.parallel_threshold == 0 {
            self.parallel_threshold = DEFAULT_PARALLEL_THRESHOLD;
        }
        if self.ntt_threshold == 0 {
            self.ntt_threshold = DEFAULT_NTT_THRESHOLD;
        }
        if self.ntt_max_log == 0 {
            self.ntt_max_log = self.ntt_field.params().max_log;
        }
        self
    }

    /// Check the config is usable as-is.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::Invalid(format!(
                "unsupported config version {} (expected {CONFIG_VERSION})",
                self.version
            )));
        }
        Base::new(self.base)?;
        if self.karatsuba_cutoff == 0 || self.parallel_threshold == 0 || self.ntt_threshold == 0 {
            return Err(ConfigError::Invalid(
                "thresholds must be positive; call normalize() first".into(),
            ));
        }
        if self.karatsuba_cutoff > self.ntt_threshold {
            return Err(ConfigError::Invalid(format!(
                "karatsuba cutoff {} exceeds ntt threshold {}",
                self.karatsuba_cutoff, self.ntt_threshold
            )));
        }
        let field_max = self.ntt_field.params().max_log;
        if self.ntt_max_log > field_max {
            return Err(ConfigError::Invalid(format!(
                "ntt_max_log {} exceeds the field maximum {field_max}",
                self.ntt_max_log
            )));
        }
        Ok(())
    }

    /// The digit base.
    pub fn base(&self) -> Result<Base, ArithError> {
        Base::new(self.base)
    }

    #[must_use]
    pub fn karatsuba(&self) -> KaratsubaConfig {
        KaratsubaConfig {
            cutoff: self.karatsuba_cutoff,
            parallel_threshold: self.parallel_threshold,
        }
        .normalize()
    }

    /// Field parameters, restricted to `ntt_max_log` when that is set.
    pub fn ntt_params(&self) -> Result<NttParams, ArithError> {
        let params = self.ntt_field.params();
        if self.ntt_max_log == 0 || self.ntt_max_log == params.max_log {
            return Ok(params);
        }
        params.restricted(self.ntt_max_log)
    }
}
