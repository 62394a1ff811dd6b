//! Oddsmith - betting-market odds modeling and margin removal.
//!
//! This crate models quoted betting prices and computes the derived
//! quantities a bettor cares about: Kelly stake sizing, expected value,
//! market width, streaming averages, and the recovery of "true"
//! (de-vigged) probabilities from quotes that embed a bookmaker margin.
//!
//! # Architecture
//!
//! Data flows one way: raw quoted [`domain::Odds`] feed the margin
//! calculations ([`domain::prob_sum`] / [`domain::overround`]), which feed
//! the [`domain::devig`] family; Kelly, expected value, and market width
//! consume [`domain::Odds`] and [`domain::Probability`] directly.
//!
//! The de-vigging family has six methods behind one closed
//! [`domain::devig::Method`] enum. Three are closed-form; the other three
//! are instances of a single fixed-point solver parameterized by a
//! [`domain::devig::ProbTransform`] - a new de-vigging scheme only needs a
//! new transform, never a new loop.
//!
//! Everything except [`domain::AverageOdds`] is an immutable value, safe
//! to share across threads without synchronization.
//!
//! # Modules
//!
//! - [`config`] - TOML configuration for method selection and solver tuning
//! - [`domain`] - odds, probabilities, and the calculations over them
//! - [`error`] - structured error types
//!
//! # Example
//!
//! ```
//! use oddsmith::domain::{Odds, Probability};
//!
//! let odds = Odds::try_from_american(-110.0).unwrap();
//! let believed = Probability::try_from_percent(60.0).unwrap();
//!
//! let stake = odds.kelly_stake(believed, 0.3, 10_000.0);
//! assert!(stake > 0.0);
//! ```

pub mod config;
pub mod domain;
pub mod error;
