//! Expected value of a wager.

use super::odds::Odds;
use super::probability::Probability;

impl Odds {
    /// Long-run expected value of wagering these odds at the given true
    /// probability, as a fractional return per unit staked.
    ///
    /// `p * (decimal - 1) - (1 - p)`. Zero exactly when `prob` equals the
    /// implied (break-even) probability.
    #[must_use]
    pub fn expected_value(&self, prob: Probability) -> f64 {
        let p = prob.decimal();
        p * (self.decimal() - 1.0) - (1.0 - p)
    }

    /// Expected value of wagering these odds when `true_odds` is believed
    /// to be the fair price.
    ///
    /// Converts `true_odds` to its implied probability and applies the same
    /// formula as [`expected_value`](Self::expected_value).
    #[must_use]
    pub fn expected_value_against(&self, true_odds: &Odds) -> f64 {
        self.expected_value(true_odds.implied_prob())
    }
}
