//! Implied-probability sums and bookmaker margin.

use super::odds::Odds;

/// Sums the implied probabilities of every outcome in the market.
///
/// A fair market sums to exactly 1.0; a real bookmaker quote sums above it.
#[must_use]
pub fn prob_sum(market: &[Odds]) -> f64 {
    market.iter().map(|o| o.implied_prob().decimal()).sum()
}

/// The overround (vig) of the market in probability units.
///
/// Zero for a fair market, positive for a quote embedding bookmaker margin.
#[must_use]
pub fn overround(market: &[Odds]) -> f64 {
    prob_sum(market) - 1.0
}
