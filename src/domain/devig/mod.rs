//! Margin removal (de-vigging).
//!
//! A bookmaker's quoted prices embed a margin: the implied probabilities of
//! a market's outcomes sum above 1. The functions here recover "true",
//! zero-margin prices under six competing models. Three are closed-form;
//! the other three solve for a scalar parameter with the shared
//! [`solver`].
//!
//! Every method takes one market — a finite ordered slice of mutually
//! exclusive outcomes — and returns an equal-length, index-aligned vector
//! of true odds whose implied probabilities sum to 1 within tolerance.
//! Input order is preserved exactly.
//!
//! # Examples
//!
//! ```
//! use oddsmith::domain::devig::{self, SolverConfig};
//! use oddsmith::domain::Odds;
//!
//! let market: Vec<Odds> = [2.09, 3.59, 3.77]
//!     .iter()
//!     .map(|&d| Odds::try_from_decimal(d).unwrap())
//!     .collect();
//!
//! let fair = devig::shin(&market, &SolverConfig::default()).unwrap();
//! let sum: f64 = fair.iter().map(|o| o.implied_prob().decimal()).sum();
//! assert!((sum - 1.0).abs() < 1e-9);
//! ```

pub mod solver;
pub mod transform;

pub use solver::{solve, SolverConfig};
pub use transform::{Logarithmic, OddsRatio, ProbTransform, Shin};

use serde::Deserialize;

use crate::error::DevigError;

use super::margin::{overround, prob_sum};
use super::odds::Odds;

/// The closed set of de-vigging methods.
///
/// Deserializable by name for config-driven selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Scale every quote by the market's total implied probability.
    EqualMargin,
    /// Remove an equal probability share from every outcome.
    Additive,
    /// Remove margin in proportion to each outcome's own price.
    MarginProportional,
    /// Shin's insider-trading model (iterative).
    Shin,
    /// Constant odds-ratio model (iterative).
    OddsRatio,
    /// Power model on implied probabilities (iterative).
    Logarithmic,
}

impl Method {
    /// Identifier used in configuration and logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::EqualMargin => "equal_margin",
            Self::Additive => "additive",
            Self::MarginProportional => "margin_proportional",
            Self::Shin => "shin",
            Self::OddsRatio => "odds_ratio",
            Self::Logarithmic => "logarithmic",
        }
    }

    /// Runs this method over the market.
    ///
    /// `config` only affects the iterative methods; the closed-form ones
    /// ignore it.
    pub fn devig(&self, market: &[Odds], config: &SolverConfig) -> Result<Vec<Odds>, DevigError> {
        match self {
            Self::EqualMargin => equal_margin(market),
            Self::Additive => additive(market),
            Self::MarginProportional => margin_proportional(market),
            Self::Shin => shin(market, config),
            Self::OddsRatio => odds_ratio(market, config),
            Self::Logarithmic => logarithmic(market, config),
        }
    }
}

fn require_non_empty(market: &[Odds]) -> Result<(), DevigError> {
    if market.is_empty() {
        Err(DevigError::EmptyMarket)
    } else {
        Ok(())
    }
}

/// Simple normalization: scales every decimal quote by the market's summed
/// implied probability, preserving relative probability ratios exactly.
pub fn equal_margin(market: &[Odds]) -> Result<Vec<Odds>, DevigError> {
    require_non_empty(market)?;
    let sum = prob_sum(market);
    market
        .iter()
        .map(|o| Odds::try_from_decimal(o.decimal() * sum).map_err(DevigError::from))
        .collect()
}

/// Removes an equal probability share `overround / n` from every outcome.
///
/// Long shots can be driven to a non-positive probability when the margin
/// is large; that is reported per outcome rather than returned as a
/// negative price.
pub fn additive(market: &[Odds]) -> Result<Vec<Odds>, DevigError> {
    require_non_empty(market)?;
    let share = overround(market) / market.len() as f64;
    market
        .iter()
        .enumerate()
        .map(|(index, o)| {
            let prob = o.implied_prob().decimal() - share;
            if prob <= 0.0 {
                return Err(DevigError::NonPositiveProbability { index, value: prob });
            }
            Odds::try_from_decimal(1.0 / prob).map_err(DevigError::from)
        })
        .collect()
}

/// Margin proportional to odds: `n*d / (n - overround*d)` per outcome, so
/// shorter-priced favorites absorb relatively more of the adjustment than
/// long shots.
pub fn margin_proportional(market: &[Odds]) -> Result<Vec<Odds>, DevigError> {
    require_non_empty(market)?;
    let n = market.len() as f64;
    let m = overround(market);
    market
        .iter()
        .enumerate()
        .map(|(index, o)| {
            let d = o.decimal();
            let denominator = n - m * d;
            if denominator <= 0.0 {
                // Adjusted probability (n - m*d) / (n*d) collapses.
                return Err(DevigError::NonPositiveProbability {
                    index,
                    value: denominator / (n * d),
                });
            }
            Odds::try_from_decimal(n * d / denominator).map_err(DevigError::from)
        })
        .collect()
}

/// Shin's method, solved by successive substitution.
pub fn shin(market: &[Odds], config: &SolverConfig) -> Result<Vec<Odds>, DevigError> {
    require_non_empty(market)?;
    iterative(market, &Shin::new(market), config)
}

/// The odds-ratio method, solved by successive substitution.
pub fn odds_ratio(market: &[Odds], config: &SolverConfig) -> Result<Vec<Odds>, DevigError> {
    require_non_empty(market)?;
    iterative(market, &OddsRatio, config)
}

/// The logarithmic method, solved by successive substitution.
pub fn logarithmic(market: &[Odds], config: &SolverConfig) -> Result<Vec<Odds>, DevigError> {
    require_non_empty(market)?;
    iterative(market, &Logarithmic, config)
}

fn iterative(
    market: &[Odds],
    transform: &impl ProbTransform,
    config: &SolverConfig,
) -> Result<Vec<Odds>, DevigError> {
    let c = solve(market, transform, config)?;
    market
        .iter()
        .enumerate()
        .map(|(index, o)| {
            let prob = transform.adjusted_prob(o, c);
            if prob <= 0.0 {
                return Err(DevigError::NonPositiveProbability { index, value: prob });
            }
            Odds::try_from_decimal(1.0 / prob).map_err(DevigError::from)
        })
        .collect()
}
