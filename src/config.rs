//! Configuration loading from TOML files.

use std::path::Path;

use serde::Deserialize;

use crate::domain::devig::{Method, SolverConfig};
use crate::error::ConfigError;

/// Crate configuration: which de-vigging method to run and how the
/// iterative solver is tuned.
///
/// # Examples
///
/// ```
/// use oddsmith::config::Config;
///
/// let config: Config = toml::from_str(
///     r#"
/// method = "shin"
///
/// [solver]
/// max_iterations = 500
/// "#,
/// )
/// .unwrap();
/// assert_eq!(config.solver.max_iterations, 500);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// De-vigging method to apply.
    #[serde(default = "default_method")]
    pub method: Method,

    /// Fixed-point solver tuning for the iterative methods.
    #[serde(default)]
    pub solver: SolverConfig,
}

fn default_method() -> Method {
    Method::EqualMargin
}

impl Config {
    /// Loads and validates configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.solver.tolerance.is_finite() || self.solver.tolerance <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "tolerance",
                reason: format!("must be a positive number, got {}", self.solver.tolerance),
            });
        }
        if self.solver.max_iterations == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_iterations",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            method: default_method(),
            solver: SolverConfig::default(),
        }
    }
}
