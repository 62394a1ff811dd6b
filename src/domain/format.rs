//! Display formats for odds.
//!
//! The set of supported formats is closed: a tag string either resolves to
//! one of the two variants or parsing fails with
//! [`UnknownFormatError`](crate::error::UnknownFormatError).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownFormatError;

use super::odds::Odds;

/// How an odds value is rendered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OddsFormat {
    /// Signed american price, two decimals, sign always shown: `-110.00`.
    American,
    /// Decimal price, two decimals, no sign: `1.91`.
    Decimal,
}

impl OddsFormat {
    /// The tag this format parses from.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::American => "american",
            Self::Decimal => "decimal",
        }
    }

    /// Renders the given odds in this format.
    #[must_use]
    pub fn render(&self, odds: &Odds) -> String {
        match self {
            Self::American => format!("{:+.2}", odds.american()),
            Self::Decimal => format!("{:.2}", odds.decimal()),
        }
    }
}

impl FromStr for OddsFormat {
    type Err = UnknownFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "american" => Ok(Self::American),
            "decimal" => Ok(Self::Decimal),
            _ => Err(UnknownFormatError { tag: s.to_string() }),
        }
    }
}

impl fmt::Display for OddsFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
