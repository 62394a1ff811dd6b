//! Dual-basis odds value type.
//!
//! An [`Odds`] stores both the decimal and american representation of one
//! quoted price. Whichever basis was supplied at construction is held
//! exactly; the other is derived closed-form and may carry minor rounding
//! skew, so a cross-basis round trip is only approximate.
//!
//! # Examples
//!
//! ```
//! use oddsmith::domain::Odds;
//!
//! let odds = Odds::try_from_american(-110.0).unwrap();
//! assert_eq!(odds.american(), -110.0);
//! assert!((odds.decimal() - 1.91).abs() < 0.01);
//! ```

use serde::Serialize;

use crate::error::OddsError;

use super::probability::Probability;

/// A quoted price in decimal and american bases.
///
/// Decimal odds are the multiplicative payout factor including the returned
/// stake (payout = stake × decimal), so any meaningful price is strictly
/// greater than 1.0. American odds are the signed convention: positive is
/// profit per 100 staked on an underdog, negative is the stake required per
/// 100 profit on a favorite.
///
/// Equality and ordering are defined purely on the decimal basis.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Odds {
    decimal_odds: f64,
    american_odds: f64,
}

impl Odds {
    /// Constructs odds from an american price, deriving the decimal basis.
    ///
    /// The american value is preserved exactly. Returns
    /// [`OddsError::InvalidAmericanOdds`] for zero or non-finite input.
    pub fn try_from_american(american_odds: f64) -> Result<Self, OddsError> {
        if !american_odds.is_finite() || american_odds == 0.0 {
            return Err(OddsError::InvalidAmericanOdds {
                value: american_odds,
            });
        }
        let decimal_odds = if american_odds > 0.0 {
            american_odds / 100.0 + 1.0
        } else {
            // Dividing by a negative american price yields the positive offset.
            1.0 - 100.0 / american_odds
        };
        Ok(Self {
            decimal_odds,
            american_odds,
        })
    }

    /// Constructs odds from a decimal price, deriving the american basis.
    ///
    /// The decimal value is preserved exactly. Returns
    /// [`OddsError::InvalidDecimalOdds`] for non-finite input or any value
    /// at or below 1.0, which has no payout meaning and divides by zero in
    /// the american conversion.
    pub fn try_from_decimal(decimal_odds: f64) -> Result<Self, OddsError> {
        if !decimal_odds.is_finite() || decimal_odds <= 1.0 {
            return Err(OddsError::InvalidDecimalOdds {
                value: decimal_odds,
            });
        }
        let american_odds = if decimal_odds >= 2.0 {
            (decimal_odds - 1.0) * 100.0
        } else {
            -100.0 / (decimal_odds - 1.0)
        };
        Ok(Self {
            decimal_odds,
            american_odds,
        })
    }

    /// Returns the american odds.
    #[must_use]
    pub fn american(&self) -> f64 {
        self.american_odds
    }

    /// Returns the decimal odds.
    #[must_use]
    pub fn decimal(&self) -> f64 {
        self.decimal_odds
    }

    /// Returns the implied (break-even) probability, `1 / decimal`.
    ///
    /// This is the true-probability value at which the expected value of a
    /// wager at these odds is exactly zero.
    #[must_use]
    pub fn implied_prob(&self) -> Probability {
        Probability::from_decimal_unchecked(1.0 / self.decimal_odds)
    }

    /// Whether these odds pay more than `other` (a less likely outcome).
    #[must_use]
    pub fn longer(&self, other: &Odds) -> bool {
        self.decimal_odds > other.decimal_odds
    }

    /// Whether these odds pay less than `other` (a more likely outcome).
    #[must_use]
    pub fn shorter(&self, other: &Odds) -> bool {
        self.decimal_odds < other.decimal_odds
    }
}

impl PartialEq for Odds {
    fn eq(&self, other: &Self) -> bool {
        self.decimal_odds == other.decimal_odds
    }
}

impl PartialOrd for Odds {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.decimal_odds.partial_cmp(&other.decimal_odds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn american_construction_preserves_primary_exactly() {
        let cases = [
            (9900.0, 100.0),
            (300.0, 4.0),
            (150.0, 2.5),
            (-110.0, 1.91),
            (-150.0, 1.67),
            (-300.0, 1.33),
            (-1000.0, 1.1),
        ];
        for (american, decimal) in cases {
            let odds = Odds::try_from_american(american).unwrap();
            assert_eq!(odds.american(), american, "american {american}");
            assert!(
                (odds.decimal() - decimal).abs() < 0.01,
                "american {american} gave decimal {}",
                odds.decimal()
            );
        }
    }

    #[test]
    fn decimal_construction_preserves_primary_exactly() {
        let cases = [
            (100.0, 9900.0),
            (4.0, 300.0),
            (2.5, 150.0),
            (1.91, -109.89),
            (1.67, -149.25),
            (1.33, -303.03),
            (1.1, -1000.0),
        ];
        for (decimal, american) in cases {
            let odds = Odds::try_from_decimal(decimal).unwrap();
            assert_eq!(odds.decimal(), decimal, "decimal {decimal}");
            assert!(
                (odds.american() - american).abs() < 0.01,
                "decimal {decimal} gave american {}",
                odds.american()
            );
        }
    }

    #[test]
    fn round_trip_through_opposite_basis_may_skew() {
        // 1.91 quoted in decimal is -109.89 american; rebuilding from that
        // american price does not restore 1.91 bit-exact.
        let original = Odds::try_from_decimal(1.91).unwrap();
        let round_tripped = Odds::try_from_american(original.american()).unwrap();
        assert!((round_tripped.decimal() - 1.91).abs() < 0.01);
    }

    #[test]
    fn equality_and_ordering_use_decimal_basis() {
        let from_decimal = Odds::try_from_decimal(4.0).unwrap();
        let from_american = Odds::try_from_american(300.0).unwrap();
        assert_eq!(from_decimal, from_american);

        let longshot = Odds::try_from_decimal(7.5).unwrap();
        let favorite = Odds::try_from_decimal(1.4).unwrap();
        assert!(longshot.longer(&favorite));
        assert!(favorite.shorter(&longshot));
        assert!(longshot > favorite);
    }

    #[test]
    fn implied_prob_is_break_even() {
        let odds = Odds::try_from_decimal(4.0).unwrap();
        assert_eq!(odds.implied_prob().percent(), 25.0);

        let odds = Odds::try_from_decimal(1.91).unwrap();
        assert!((odds.implied_prob().percent() - 52.35).abs() < 0.01);
    }

    #[test]
    fn rejects_degenerate_input() {
        assert_eq!(
            Odds::try_from_decimal(1.0),
            Err(OddsError::InvalidDecimalOdds { value: 1.0 })
        );
        assert!(Odds::try_from_decimal(0.5).is_err());
        assert!(Odds::try_from_decimal(f64::NAN).is_err());
        assert!(Odds::try_from_american(0.0).is_err());
        assert!(Odds::try_from_american(f64::INFINITY).is_err());
    }
}
