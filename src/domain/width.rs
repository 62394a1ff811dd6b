//! Market-width heuristic for two-sided quotes.

use super::odds::Odds;

/// Estimates the spread between the two sides of a binary market, in
/// american-odds units. Larger positive values indicate a wider bookmaker
/// margin.
///
/// - Both sides negative: `|a| + |b| - 200`.
/// - Both sides positive: `-(a + b - 200)`. Two positive-priced sides yield
///   a negative width; this is an intentional convention of this crate, not
///   a universal standard.
/// - Mixed sign: `|a + b|`. A historical variant used `||a| - |b||`
///   instead; this crate implements only the `|a + b|` form.
#[must_use]
pub fn market_width(odds1: &Odds, odds2: &Odds) -> f64 {
    let (a, b) = (odds1.american(), odds2.american());
    if a < 0.0 && b < 0.0 {
        a.abs() + b.abs() - 200.0
    } else if a > 0.0 && b > 0.0 {
        -(a + b - 200.0)
    } else {
        (a + b).abs()
    }
}
