//! Black-76 model for European options on futures and forwards.

pub mod pricer;
pub mod types;

pub use pricer::Black76Pricer;
pub use types::{Black76Terms, FuturesOption, OptionType};
