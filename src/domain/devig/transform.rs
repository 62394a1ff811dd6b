//! Probability transforms for the iterative de-vigging methods.
//!
//! Each transform maps a quoted price and a scalar parameter `c` to an
//! adjusted probability. The [solver](super::solver) searches for the `c`
//! at which the adjusted probabilities sum to 1; adding a new de-vigging
//! scheme means supplying a new transform, not a new iteration loop.

use crate::domain::margin::prob_sum;
use crate::domain::odds::Odds;

/// A parameterized map from a quoted price to an adjusted probability.
pub trait ProbTransform {
    /// Identifier used in logging.
    fn name(&self) -> &'static str;

    /// Starting value for the solver's parameter.
    fn initial(&self) -> f64;

    /// Adjusted probability of `odds` under parameter `c`.
    fn adjusted_prob(&self, odds: &Odds, c: f64) -> f64;
}

/// Shin's method: models the margin as protection against insider bettors,
/// with `c` the insider proportion.
///
/// The booksum is fixed from the original quoted probabilities before the
/// iteration starts; it does not change as `c` moves.
pub struct Shin {
    book_sum: f64,
}

impl Shin {
    /// Fixes the booksum from the quoted market.
    #[must_use]
    pub fn new(market: &[Odds]) -> Self {
        Self {
            book_sum: prob_sum(market),
        }
    }
}

impl ProbTransform for Shin {
    fn name(&self) -> &'static str {
        "shin"
    }

    fn initial(&self) -> f64 {
        0.0
    }

    fn adjusted_prob(&self, odds: &Odds, c: f64) -> f64 {
        let p = odds.implied_prob().decimal();
        ((c * c + 4.0 * (1.0 - c) * p * p / self.book_sum).sqrt() - c) / (2.0 * (1.0 - c))
    }
}

/// Odds-ratio method: relates true and quoted probabilities through a
/// constant odds ratio `c`.
pub struct OddsRatio;

impl ProbTransform for OddsRatio {
    fn name(&self) -> &'static str {
        "odds_ratio"
    }

    fn initial(&self) -> f64 {
        1.0
    }

    fn adjusted_prob(&self, odds: &Odds, c: f64) -> f64 {
        odds.implied_prob().decimal() / (c + (1.0 - c) / odds.decimal())
    }
}

/// Logarithmic method: raises each implied probability to the power `c`.
pub struct Logarithmic;

impl ProbTransform for Logarithmic {
    fn name(&self) -> &'static str {
        "logarithmic"
    }

    fn initial(&self) -> f64 {
        1.0
    }

    fn adjusted_prob(&self, odds: &Odds, c: f64) -> f64 {
        (1.0 / odds.decimal()).powf(c)
    }
}
