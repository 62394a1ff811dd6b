//! Streaming average of odds with O(1) leave-some-out queries.

use crate::error::OddsError;

use super::odds::Odds;

/// Accumulates a running mean of decimal odds.
///
/// Owns no individual observations, only a running sum and count, so both
/// queries are O(1) regardless of how many odds were accumulated.
///
/// Not safe for concurrent writers; wrap in a lock if accumulating from
/// multiple threads. Read-only queries on a stable accumulator are safe to
/// share.
///
/// # Examples
///
/// ```
/// use oddsmith::domain::{AverageOdds, Odds};
///
/// let mut avg = AverageOdds::new();
/// for d in [3.0, 5.0, 7.0] {
///     avg.accumulate(Odds::try_from_decimal(d).unwrap());
/// }
/// assert_eq!(avg.average().unwrap().decimal(), 5.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AverageOdds {
    sum: f64,
    count: usize,
}

impl AverageOdds {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulates one observation.
    pub fn accumulate(&mut self, odds: Odds) {
        self.sum += odds.decimal();
        self.count += 1;
    }

    /// Number of observations accumulated so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// The mean of everything accumulated so far.
    ///
    /// Returns [`OddsError::EmptyAccumulator`] before the first
    /// observation.
    pub fn average(&self) -> Result<Odds, OddsError> {
        if self.count == 0 {
            return Err(OddsError::EmptyAccumulator);
        }
        Odds::try_from_decimal(self.sum / self.count as f64)
    }

    /// The mean excluding `remove` prior observations equal to `odds`,
    /// without mutating state or rescanning history.
    ///
    /// The caller must guarantee that `remove` copies of `odds` were
    /// genuinely accumulated; the accumulator only checks that something
    /// remains ([`OddsError::RemoveExceedsCount`] otherwise). If the
    /// excluded values were never present the remaining mean can fall to
    /// 1.0 or below, which surfaces as the odds constructor's validation
    /// error rather than a meaningless value.
    pub fn average_without(&self, odds: &Odds, remove: usize) -> Result<Odds, OddsError> {
        if remove >= self.count {
            return Err(OddsError::RemoveExceedsCount {
                count: self.count,
                remove,
            });
        }
        let sum = self.sum - odds.decimal() * remove as f64;
        Odds::try_from_decimal(sum / (self.count - remove) as f64)
    }
}

impl Extend<Odds> for AverageOdds {
    fn extend<T: IntoIterator<Item = Odds>>(&mut self, iter: T) {
        for odds in iter {
            self.accumulate(odds);
        }
    }
}
