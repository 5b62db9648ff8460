//! Error types for Black-76 pricing

use thiserror::Error;

/// Failures surfaced at the boundary of the pricing functions.
///
/// A pricing call either returns a finite, non-negative price or one of these
/// variants. NaN and infinity are never handed back as a price.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Black76Error {
    /// An input lies outside the mathematical domain of the formula.
    #[error("Domain error: {parameter}={value} {reason}")]
    Domain {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Valid inputs produced a non-finite intermediate or result.
    #[error("Numeric overflow: {quantity} evaluated to {value}")]
    NumericOverflow { quantity: &'static str, value: f64 },

    #[error("Invalid option type: {0:?} (expected \"call\" or \"put\")")]
    InvalidOptionType(String),
}

pub type Black76Result<T> = Result<T, Black76Error>;

impl Black76Error {
    pub fn domain(parameter: &'static str, value: f64, reason: &'static str) -> Self {
        log::debug!("rejecting {}={}: {}", parameter, value, reason);
        Self::Domain {
            parameter,
            value,
            reason,
        }
    }

    pub fn overflow(quantity: &'static str, value: f64) -> Self {
        log::warn!("numeric overflow while computing {}: {}", quantity, value);
        Self::NumericOverflow { quantity, value }
    }

    /// True for [`Black76Error::Domain`].
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }

    /// True for [`Black76Error::NumericOverflow`].
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::NumericOverflow { .. })
    }
}
