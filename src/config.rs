//! Pricing configuration.
//!
//! The configuration only tightens the input domain. With the default limits an
//! input is accepted exactly when the Black-76 formula is well defined
//! (`T > 0`, `sigma > 0`). Presets are re-exported through
//! [`crate::default_configs`].

#[cfg(feature = "serde")]
use anyhow::Context;
use anyhow::{anyhow, Result};
#[cfg(feature = "serde")]
use std::path::Path;

const SECONDS_PER_YEAR: f64 = 365.0 * 24.0 * 3600.0;

/// Lower bounds applied to time to expiry and volatility.
///
/// Both bounds are exclusive: an input must be strictly greater than the floor.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DomainLimits {
    /// Time-to-expiry floor in years
    #[cfg_attr(feature = "serde", serde(default = "default_min_time_to_expiry"))]
    pub min_time_to_expiry: f64,
    /// Volatility floor (annualized, as decimal)
    #[cfg_attr(feature = "serde", serde(default = "default_min_volatility"))]
    pub min_volatility: f64,
}

impl Default for DomainLimits {
    fn default() -> Self {
        Self {
            min_time_to_expiry: default_min_time_to_expiry(),
            min_volatility: default_min_volatility(),
        }
    }
}

/// Main configuration struct for the pricer
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub domain: DomainLimits,
}

impl PricingConfig {
    /// Accepts every input for which the formula is defined.
    pub fn standard() -> Self {
        Self::default()
    }

    /// Rejects expiries under one second and volatilities at or below 1e-8.
    ///
    /// Near those limits d1/d2 blow up and the price degenerates into the
    /// discounted intrinsic value, so callers that want a clear signal instead
    /// of a numerically fragile answer can opt into this preset.
    pub fn strict() -> Self {
        Self {
            domain: DomainLimits {
                min_time_to_expiry: 1.0 / SECONDS_PER_YEAR,
                min_volatility: 1e-8,
            },
        }
    }

    /// Parse a configuration from TOML text and validate it.
    ///
    /// ```rust
    /// use black76_lib::PricingConfig;
    ///
    /// let config = PricingConfig::from_toml_str(
    ///     "[domain]\nmin_volatility = 0.0001\n",
    /// )?;
    /// assert_eq!(config.domain.min_volatility, 1e-4);
    /// assert_eq!(config.domain.min_time_to_expiry, 0.0);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("failed to parse pricing config")?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    #[cfg(feature = "serde")]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read pricing config {}", path.display()))?;
        Self::from_toml_str(&text)
    }

    /// Floors must be finite and non-negative.
    ///
    /// Pricing never relies on this check: the pricer rejects `T <= 0` and
    /// `sigma <= 0` whatever the floors are.
    pub fn validate(&self) -> Result<()> {
        let limits = &self.domain;
        if !limits.min_time_to_expiry.is_finite() || limits.min_time_to_expiry < 0.0 {
            return Err(anyhow!(
                "PricingConfig validation: min_time_to_expiry ({}) must be >= 0 and finite",
                limits.min_time_to_expiry
            ));
        }
        if !limits.min_volatility.is_finite() || limits.min_volatility < 0.0 {
            return Err(anyhow!(
                "PricingConfig validation: min_volatility ({}) must be >= 0 and finite",
                limits.min_volatility
            ));
        }
        Ok(())
    }
}

fn default_min_time_to_expiry() -> f64 {
    0.0
}

fn default_min_volatility() -> f64 {
    0.0
}
