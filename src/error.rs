//! Error types for the crate.
//!
//! Failure here is purely numerical: degenerate inputs and solver
//! non-convergence are surfaced as structured variants rather than letting
//! NaN or infinity propagate through downstream arithmetic. Nothing in this
//! crate is fatal at process level.

use thiserror::Error;

/// Errors that occur when odds or probability invariants are violated.
///
/// These errors are returned by `try_*` constructors and by accumulator
/// queries whose preconditions do not hold.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OddsError {
    /// Decimal odds must be a finite payout factor strictly above even money.
    #[error("decimal odds must be finite and greater than 1.0, got {value}")]
    InvalidDecimalOdds {
        /// The invalid decimal odds that were provided.
        value: f64,
    },

    /// American odds must be finite and non-zero; zero has no price meaning
    /// and divides by zero in the decimal conversion.
    #[error("american odds must be finite and non-zero, got {value}")]
    InvalidAmericanOdds {
        /// The invalid american odds that were provided.
        value: f64,
    },

    /// Probabilities live in the closed unit interval.
    #[error("probability must be finite and within [0.0, 1.0], got {value}")]
    ProbabilityOutOfRange {
        /// The invalid probability that was provided.
        value: f64,
    },

    /// `average()` was queried before anything was accumulated.
    #[error("cannot average an empty accumulator")]
    EmptyAccumulator,

    /// `average_without()` would leave nothing behind.
    #[error("cannot remove {remove} observations from an accumulator holding {count}")]
    RemoveExceedsCount {
        /// Observations currently accumulated.
        count: usize,
        /// Observations the caller asked to exclude.
        remove: usize,
    },
}

/// Errors produced by the margin-removal (de-vigging) family.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DevigError {
    /// A market must quote at least one outcome.
    #[error("market has no outcomes")]
    EmptyMarket,

    /// The method drove an outcome's adjusted probability to zero or below,
    /// so no finite true price exists for it.
    #[error("adjusted probability for outcome {index} is non-positive ({value})")]
    NonPositiveProbability {
        /// Zero-based index of the offending outcome in the input market.
        index: usize,
        /// The non-positive probability that was computed.
        value: f64,
    },

    /// The fixed-point solver exhausted its iteration budget without the
    /// adjusted probabilities summing to 1 within tolerance.
    #[error("solver did not converge after {iterations} iterations (residual {residual})")]
    DidNotConverge {
        /// Iterations performed before giving up.
        iterations: u32,
        /// Final `|sum - 1|` residual.
        residual: f64,
    },

    /// A de-vigged price failed odds validation (for example a mean implied
    /// probability at or above 1.0).
    #[error(transparent)]
    Odds(#[from] OddsError),
}

/// Configuration loading and validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// A format tag that does not name a known display format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown odds format: {tag}")]
pub struct UnknownFormatError {
    /// The unrecognized tag as supplied.
    pub tag: String,
}

/// Top-level error wrapper for callers that mix concerns.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Odds(#[from] OddsError),

    #[error(transparent)]
    Devig(#[from] DevigError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Format(#[from] UnknownFormatError),
}

pub type Result<T> = std::result::Result<T, Error>;
