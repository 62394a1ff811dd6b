//! Kelly-criterion stake sizing.
//!
//! <https://en.wikipedia.org/wiki/Kelly_criterion>

use super::odds::Odds;
use super::probability::Probability;

impl Odds {
    /// Returns the fraction of bankroll to wager at these odds given the
    /// believed probability of success and a fractional-Kelly multiplier.
    ///
    /// Computes `mult * (b*p - q) / b` with `b = decimal - 1`, clamped at
    /// zero: a non-positive edge never recommends a short position. `mult`
    /// is typically in `(0, 1]` and is not validated. `b` cannot be zero
    /// because construction rejects decimal odds at or below 1.0.
    ///
    /// # Examples
    ///
    /// ```
    /// use oddsmith::domain::{Odds, Probability};
    ///
    /// let odds = Odds::try_from_decimal(2.0).unwrap();
    /// let prob = Probability::try_from_decimal(0.6).unwrap();
    /// let fraction = odds.kelly_fraction(prob, 1.0);
    /// assert!((fraction - 0.2).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn kelly_fraction(&self, prob: Probability, mult: f64) -> f64 {
        let profit_mult = self.decimal() - 1.0;
        let p = prob.decimal();
        let kelly = (profit_mult * p - (1.0 - p)) / profit_mult;
        (mult * kelly).max(0.0)
    }

    /// Returns the amount to wager given the probability of success, the
    /// fractional-Kelly multiplier, and the total bankroll.
    #[must_use]
    pub fn kelly_stake(&self, prob: Probability, mult: f64, bankroll: f64) -> f64 {
        self.kelly_fraction(prob, mult) * bankroll
    }
}
