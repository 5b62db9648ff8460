// src/models/black76/pricer.rs

//! Closed-form Black-76 pricing of European options on futures.
//!
//! For a futures price F, strike K, expiry T (years), rate r and volatility σ:
//!
//! ```text
//! d1 = (ln(F/K) + σ²T/2) / (σ√T)
//! d2 = d1 - σ√T
//! C  = e^{-rT} [F Φ(d1) - K Φ(d2)]
//! P  = e^{-rT} [K Φ(-d2) - F Φ(-d1)]
//! ```
//!
//! Inputs are validated before any arithmetic and every intermediate is checked
//! for finiteness, so a caller receives either a finite price or an error.

use super::types::{validate_inputs, Black76Terms, FuturesOption, OptionType};
use crate::config::PricingConfig;
use crate::error::{Black76Error, Black76Result};
use crate::models::normal::normal_cdf;
use crate::models::traits::FuturesOptionModel;

/// Stateless Black-76 pricer parameterised by a [`PricingConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Black76Pricer {
    config: PricingConfig,
}

impl Black76Pricer {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Validate the inputs and compute d1, d2 and the discount factor.
    pub fn terms(
        &self,
        forward: f64,
        strike: f64,
        time_to_expiry: f64,
        rate: f64,
        sigma: f64,
    ) -> Black76Result<Black76Terms> {
        validate_inputs(forward, strike, time_to_expiry, rate, sigma, &self.config.domain)?;

        let sig_sqrt_t = finite("sigma_sqrt_t", sigma * time_to_expiry.sqrt())?;
        let d1 = finite(
            "d1",
            (forward.ln() - strike.ln() + 0.5 * sigma * sigma * time_to_expiry) / sig_sqrt_t,
        )?;
        let d2 = finite("d2", d1 - sig_sqrt_t)?;
        let discount = finite("discount", (-rate * time_to_expiry).exp())?;

        Ok(Black76Terms { d1, d2, discount })
    }

    /// Price of a European call on a futures contract.
    pub fn call(
        &self,
        forward: f64,
        strike: f64,
        time_to_expiry: f64,
        rate: f64,
        sigma: f64,
    ) -> Black76Result<f64> {
        let Black76Terms { d1, d2, discount } =
            self.terms(forward, strike, time_to_expiry, rate, sigma)?;
        let price = discount * (forward * normal_cdf(d1) - strike * normal_cdf(d2));
        non_negative_price(price)
    }

    /// Price of a European put on a futures contract.
    pub fn put(
        &self,
        forward: f64,
        strike: f64,
        time_to_expiry: f64,
        rate: f64,
        sigma: f64,
    ) -> Black76Result<f64> {
        let Black76Terms { d1, d2, discount } =
            self.terms(forward, strike, time_to_expiry, rate, sigma)?;
        let price = discount * (strike * normal_cdf(-d2) - forward * normal_cdf(-d1));
        non_negative_price(price)
    }

    /// Dispatch on `option_type` to [`Self::call`] or [`Self::put`].
    pub fn price(
        &self,
        option_type: OptionType,
        forward: f64,
        strike: f64,
        time_to_expiry: f64,
        rate: f64,
        sigma: f64,
    ) -> Black76Result<f64> {
        match option_type {
            OptionType::Call => self.call(forward, strike, time_to_expiry, rate, sigma),
            OptionType::Put => self.put(forward, strike, time_to_expiry, rate, sigma),
        }
    }

    pub fn price_option(&self, option: &FuturesOption) -> Black76Result<f64> {
        self.price(
            option.option_type,
            option.forward,
            option.strike,
            option.time_to_expiry,
            option.rate,
            option.volatility,
        )
    }
}

impl FuturesOptionModel for Black76Pricer {
    fn model_name(&self) -> &str {
        "black76"
    }

    fn price(&self, option: &FuturesOption) -> Black76Result<f64> {
        self.price_option(option)
    }
}

fn finite(quantity: &'static str, value: f64) -> Black76Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Black76Error::overflow(quantity, value))
    }
}

// Cancellation in the bracket can leave a result a few ulps below zero.
fn non_negative_price(price: f64) -> Black76Result<f64> {
    Ok(finite("price", price)?.max(0.0))
}
