//! Dual-basis probability type.
//!
//! Holding both representations removes the ambiguity between passing a
//! decimal (0.6) or a percent (60.0) where a bare float would be unclear.
//! Unlike [`Odds`](super::Odds), the percent view is purely derived and is
//! always exactly `decimal * 100` with no skew.

use serde::Serialize;

use crate::error::OddsError;

/// A probability in decimal `[0, 1]` and percent `[0, 100]` bases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Probability {
    decimal: f64,
    percent: f64,
}

impl Probability {
    /// Constructs a probability from its percent representation.
    ///
    /// Returns [`OddsError::ProbabilityOutOfRange`] outside `[0, 100]`.
    pub fn try_from_percent(percent: f64) -> Result<Self, OddsError> {
        let decimal = percent / 100.0;
        if !decimal.is_finite() || !(0.0..=1.0).contains(&decimal) {
            return Err(OddsError::ProbabilityOutOfRange { value: decimal });
        }
        Ok(Self { decimal, percent })
    }

    /// Constructs a probability from its decimal representation.
    ///
    /// Returns [`OddsError::ProbabilityOutOfRange`] outside `[0, 1]`.
    pub fn try_from_decimal(decimal: f64) -> Result<Self, OddsError> {
        if !decimal.is_finite() || !(0.0..=1.0).contains(&decimal) {
            return Err(OddsError::ProbabilityOutOfRange { value: decimal });
        }
        Ok(Self {
            decimal,
            percent: decimal * 100.0,
        })
    }

    /// Internal constructor for values already known to be in range, such
    /// as implied probabilities of validated odds.
    pub(crate) fn from_decimal_unchecked(decimal: f64) -> Self {
        debug_assert!((0.0..=1.0).contains(&decimal));
        Self {
            decimal,
            percent: decimal * 100.0,
        }
    }

    /// Returns the decimal representation in `[0, 1]`.
    #[must_use]
    pub fn decimal(&self) -> f64 {
        self.decimal
    }

    /// Returns the percent representation in `[0, 100]`.
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_and_decimal_stay_in_sync() {
        let p = Probability::try_from_percent(60.0).unwrap();
        assert_eq!(p.decimal(), 0.6);
        assert_eq!(p.percent(), 60.0);

        let p = Probability::try_from_decimal(0.25).unwrap();
        assert_eq!(p.percent(), 25.0);
    }

    #[test]
    fn boundary_values_are_accepted() {
        assert!(Probability::try_from_decimal(0.0).is_ok());
        assert!(Probability::try_from_decimal(1.0).is_ok());
        assert!(Probability::try_from_percent(100.0).is_ok());
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert!(Probability::try_from_decimal(-0.01).is_err());
        assert!(Probability::try_from_decimal(1.01).is_err());
        assert!(Probability::try_from_percent(150.0).is_err());
        assert!(Probability::try_from_decimal(f64::NAN).is_err());
    }
}
