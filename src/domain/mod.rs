//! Odds and probability domain logic.

mod average;
mod ev;
mod format;
mod kelly;
mod margin;
mod odds;
mod probability;
mod width;

pub mod devig;

// Core value types
pub use format::OddsFormat;
pub use odds::Odds;
pub use probability::Probability;

// Market-level calculations
pub use average::AverageOdds;
pub use margin::{overround, prob_sum};
pub use width::market_width;
