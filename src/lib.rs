//! # Black76-Lib: Pricing European Options on Futures
//!
//! `black76-lib` computes theoretical prices of European call and put options written on
//! futures contracts under the Black-76 closed-form model. Typical underlyings are
//! commodity, interest-rate and index futures.
//!
//! ## Core Features
//!
//! - **Normal CDF**: `Φ(x) = 0.5 [1 + erf(x / √2)]` backed by `libm::erf`
//! - **Black-76 Pricing**: call and put prices from futures price, strike, expiry, rate and volatility
//! - **Explicit Failures**: out-of-domain inputs and numeric overflow surface as [`Black76Error`],
//!   never as a NaN or infinite price
//! - **Configurable Domain**: optional floors on expiry and volatility, loadable from TOML
//!
//! ## Quick Start
//!
//! ```rust
//! use black76_lib::{black_76_call, black_76_put};
//!
//! // F=100, K=100, T=1y, r=5%, sigma=20%
//! let call = black_76_call(100.0, 100.0, 1.0, 0.05, 0.2)?;
//! let put = black_76_put(100.0, 100.0, 1.0, 0.05, 0.2)?;
//!
//! // At the money the two legs coincide (put-call parity with F == K)
//! assert!((call - put).abs() < 1e-12);
//!
//! // Zero time to expiry is outside the domain of the formula
//! assert!(black_76_call(100.0, 100.0, 0.0, 0.05, 0.2).is_err());
//! # Ok::<(), black76_lib::Black76Error>(())
//! ```
//!
//! ## Configuration Presets
//!
//! - `standard()`: accept every input for which the formula is defined
//! - `strict()`: additionally reject sub-second expiries and near-zero volatilities

// ================================================================================================
// MODULES
// ================================================================================================

pub mod config;
pub mod error;
pub mod models;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use config::{DomainLimits, PricingConfig};
pub use error::{Black76Error, Black76Result};

pub use models::black76::{Black76Pricer, Black76Terms, FuturesOption, OptionType};
pub use models::normal::normal_cdf;
pub use models::traits::FuturesOptionModel;
pub use models::utils::{discounted_intrinsic, intrinsic_value, parity_residual};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured pricing settings.
///
/// - [`standard()`]: the mathematical domain of Black-76, nothing more
/// - [`strict()`]: rejects inputs where the formula degenerates numerically
pub mod default_configs {
    use crate::config::PricingConfig;

    /// Accept any `F, K, T, sigma > 0` and any finite rate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use black76_lib::{default_configs, Black76Pricer};
    ///
    /// let pricer = Black76Pricer::new(default_configs::standard());
    /// assert!(pricer.call(100.0, 100.0, 1e-9, 0.0, 0.2).is_ok());
    /// ```
    pub fn standard() -> PricingConfig {
        PricingConfig::standard()
    }

    /// Reject expiries of one second or less and volatilities at or below 1e-8.
    ///
    /// # Example
    ///
    /// ```rust
    /// use black76_lib::{default_configs, Black76Pricer};
    ///
    /// let pricer = Black76Pricer::new(default_configs::strict());
    /// assert!(pricer.call(100.0, 100.0, 1e-9, 0.0, 0.2).is_err());
    /// ```
    pub fn strict() -> PricingConfig {
        PricingConfig::strict()
    }
}

// ================================================================================================
// PRICING ENTRY POINTS
// ================================================================================================

/// Price a European call on a futures contract under Black-76.
///
/// # Arguments
///
/// * `f` - Current futures price, must be > 0
/// * `k` - Strike price, must be > 0
/// * `t` - Time to expiry in years, must be > 0
/// * `r` - Continuously compounded risk-free rate (may be negative)
/// * `sigma` - Annualized volatility of the futures price, must be > 0
///
/// # Formula
///
/// ```text
/// d1 = (ln(F/K) + 0.5 σ² T) / (σ √T)
/// d2 = d1 - σ √T
/// C  = e^{-rT} (F Φ(d1) - K Φ(d2))
/// ```
///
/// # Errors
///
/// * [`Black76Error::Domain`] if any input is non-finite or outside its domain
/// * [`Black76Error::NumericOverflow`] if an intermediate quantity is not representable
pub fn black_76_call(f: f64, k: f64, t: f64, r: f64, sigma: f64) -> Black76Result<f64> {
    Black76Pricer::default().call(f, k, t, r, sigma)
}

/// Price a European put on a futures contract under Black-76.
///
/// Takes the same arguments as [`black_76_call`] and prices
/// `P = e^{-rT} (K Φ(-d2) - F Φ(-d1))`.
///
/// # Example
///
/// ```rust
/// use black76_lib::black_76_put;
///
/// let put = black_76_put(50.0, 60.0, 0.5, 0.03, 0.3)?;
/// // Bounded above by the discounted strike
/// assert!(put < 60.0 * (-0.03f64 * 0.5).exp());
/// # Ok::<(), black76_lib::Black76Error>(())
/// ```
pub fn black_76_put(f: f64, k: f64, t: f64, r: f64, sigma: f64) -> Black76Result<f64> {
    Black76Pricer::default().put(f, k, t, r, sigma)
}
