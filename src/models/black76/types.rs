use std::fmt;
use std::str::FromStr;

use crate::config::DomainLimits;
use crate::error::{Black76Error, Black76Result};

/// European exercise right: call or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// +1 for a call, -1 for a put.
    pub fn sign(self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => f.write_str("call"),
            OptionType::Put => f.write_str("put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = Black76Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(Black76Error::InvalidOptionType(s.to_string())),
        }
    }
}

/// Intermediate quantities of the Black-76 formula for one input set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Black76Terms {
    /// `(ln(F/K) + 0.5 σ² T) / (σ √T)`
    pub d1: f64,
    /// `d1 - σ √T`
    pub d2: f64,
    /// `exp(-r T)`
    pub discount: f64,
}

/// A European option on a futures contract together with the market inputs
/// needed to price it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FuturesOption {
    pub option_type: OptionType,
    /// Current futures price (F)
    pub forward: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to expiry in years (T)
    pub time_to_expiry: f64,
    /// Continuously compounded risk-free rate (r), may be negative
    pub rate: f64,
    /// Annualized volatility of the futures price (σ)
    pub volatility: f64,
}

impl FuturesOption {
    pub fn new(
        option_type: OptionType,
        forward: f64,
        strike: f64,
        time_to_expiry: f64,
        rate: f64,
        volatility: f64,
    ) -> Self {
        Self {
            option_type,
            forward,
            strike,
            time_to_expiry,
            rate,
            volatility,
        }
    }

    pub fn call(
        forward: f64,
        strike: f64,
        time_to_expiry: f64,
        rate: f64,
        volatility: f64,
    ) -> Self {
        Self::new(OptionType::Call, forward, strike, time_to_expiry, rate, volatility)
    }

    pub fn put(
        forward: f64,
        strike: f64,
        time_to_expiry: f64,
        rate: f64,
        volatility: f64,
    ) -> Self {
        Self::new(OptionType::Put, forward, strike, time_to_expiry, rate, volatility)
    }

    /// Check the inputs against the Black-76 domain tightened by `limits`.
    pub fn validate(&self, limits: &DomainLimits) -> Black76Result<()> {
        validate_inputs(
            self.forward,
            self.strike,
            self.time_to_expiry,
            self.rate,
            self.volatility,
            limits,
        )
    }

    /// Price with the default [`crate::Black76Pricer`].
    pub fn price(&self) -> Black76Result<f64> {
        super::Black76Pricer::default().price_option(self)
    }

    /// Undiscounted payoff if exercised against the current futures price.
    pub fn intrinsic_value(&self) -> f64 {
        crate::models::utils::intrinsic_value(self.option_type, self.forward, self.strike)
    }

    /// The `T -> 0+` limit of the Black-76 price.
    pub fn discounted_intrinsic(&self) -> f64 {
        crate::models::utils::discounted_intrinsic(
            self.option_type,
            self.forward,
            self.strike,
            self.time_to_expiry,
            self.rate,
        )
    }
}

/// Validate raw inputs in the fixed order F, K, T, sigma, r.
///
/// `T > 0` and `sigma > 0` hold regardless of `limits`; the floors can only
/// narrow the domain.
pub(crate) fn validate_inputs(
    forward: f64,
    strike: f64,
    time_to_expiry: f64,
    rate: f64,
    volatility: f64,
    limits: &DomainLimits,
) -> Black76Result<()> {
    if !forward.is_finite() || forward <= 0.0 {
        return Err(Black76Error::domain("forward", forward, "must be > 0 and finite"));
    }
    if !strike.is_finite() || strike <= 0.0 {
        return Err(Black76Error::domain("strike", strike, "must be > 0 and finite"));
    }
    if !time_to_expiry.is_finite()
        || time_to_expiry <= 0.0
        || time_to_expiry <= limits.min_time_to_expiry
    {
        return Err(Black76Error::domain(
            "time_to_expiry",
            time_to_expiry,
            "must be finite and above the minimum time to expiry",
        ));
    }
    if !volatility.is_finite() || volatility <= 0.0 || volatility <= limits.min_volatility {
        return Err(Black76Error::domain(
            "volatility",
            volatility,
            "must be finite and above the minimum volatility",
        ));
    }
    if !rate.is_finite() {
        return Err(Black76Error::domain("rate", rate, "must be finite"));
    }
    Ok(())
}
