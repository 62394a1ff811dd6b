//! Generic successive-substitution solver.
//!
//! Searches for the transform parameter at which the adjusted
//! probabilities of a market sum to 1. One routine serves every iterative
//! de-vigging method; the transform is the only moving part.

use serde::Deserialize;
use tracing::{debug, trace, warn};

use crate::domain::odds::Odds;
use crate::error::DevigError;

use super::transform::ProbTransform;

/// Tuning for the fixed-point iteration.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SolverConfig {
    /// Stop once `|sum - 1|` falls below this.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Iteration budget; exceeding it is a distinct error, never a silent
    /// best-effort result.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
}

fn default_tolerance() -> f64 {
    1e-12
}

fn default_max_iterations() -> u32 {
    1000
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
        }
    }
}

/// Solves for the parameter `c` at which the transform's adjusted
/// probabilities over `market` sum to 1.
///
/// Successive substitution: starting from the transform's initial value,
/// each step moves `c` by the residual `sum - 1`. Termination is
/// guaranteed by the iteration budget; convergence is not proven and the
/// scheme is treated as a heuristic.
pub fn solve(
    market: &[Odds],
    transform: &impl ProbTransform,
    config: &SolverConfig,
) -> Result<f64, DevigError> {
    let mut c = transform.initial();
    let mut residual = f64::INFINITY;

    for iteration in 0..config.max_iterations {
        let sum: f64 = market
            .iter()
            .map(|o| transform.adjusted_prob(o, c))
            .sum();
        residual = sum - 1.0;

        if residual.abs() < config.tolerance {
            debug!(
                method = transform.name(),
                iterations = iteration,
                c,
                "devig solver converged"
            );
            return Ok(c);
        }

        trace!(
            method = transform.name(),
            iteration,
            c,
            residual,
            "devig solver step"
        );
        c += residual;
    }

    warn!(
        method = transform.name(),
        iterations = config.max_iterations,
        residual,
        "devig solver exhausted its iteration budget"
    );
    Err(DevigError::DidNotConverge {
        iterations: config.max_iterations,
        residual: residual.abs(),
    })
}
