pub mod black76;
pub mod normal;

/// Common traits used by all futures option models
pub mod traits {
    use crate::error::Black76Result;
    use crate::models::black76::FuturesOption;

    /// Pricing model for European options on futures
    pub trait FuturesOptionModel: Send + Sync {
        fn model_name(&self) -> &str;
        fn price(&self, option: &FuturesOption) -> Black76Result<f64>;
    }
}

/// Payoff and no-arbitrage helpers built around the pricing models
pub mod utils {
    use crate::error::Black76Result;
    use crate::models::black76::{Black76Pricer, OptionType};

    /// Payoff `max(F - K, 0)` for a call or `max(K - F, 0)` for a put.
    pub fn intrinsic_value(option_type: OptionType, forward: f64, strike: f64) -> f64 {
        (option_type.sign() * (forward - strike)).max(0.0)
    }

    /// Intrinsic value discounted by `exp(-r T)`.
    ///
    /// This is the limit of the Black-76 price as `T -> 0+` or `sigma -> 0+`.
    /// The pricing functions reject those inputs instead of returning it.
    pub fn discounted_intrinsic(
        option_type: OptionType,
        forward: f64,
        strike: f64,
        time_to_expiry: f64,
        rate: f64,
    ) -> f64 {
        (-rate * time_to_expiry).exp() * intrinsic_value(option_type, forward, strike)
    }

    /// `call - put - exp(-r T) (F - K)`, zero up to rounding for a consistent pricer.
    pub fn parity_residual(
        forward: f64,
        strike: f64,
        time_to_expiry: f64,
        rate: f64,
        sigma: f64,
    ) -> Black76Result<f64> {
        let pricer = Black76Pricer::default();
        let terms = pricer.terms(forward, strike, time_to_expiry, rate, sigma)?;
        let call = pricer.call(forward, strike, time_to_expiry, rate, sigma)?;
        let put = pricer.put(forward, strike, time_to_expiry, rate, sigma)?;
        Ok(call - put - terms.discount * (forward - strike))
    }

}
