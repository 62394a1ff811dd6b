//! End-to-end tests for the margin-removal family on a reference market.

use oddsmith::domain::devig::{self, Method, SolverConfig};
use oddsmith::domain::Odds;

fn market() -> Vec<Odds> {
    [2.09, 3.59, 3.77]
        .iter()
        .map(|&d| Odds::try_from_decimal(d).unwrap())
        .collect()
}

const ALL_METHODS: [Method; 6] = [
    Method::EqualMargin,
    Method::Additive,
    Method::MarginProportional,
    Method::Shin,
    Method::OddsRatio,
    Method::Logarithmic,
];

fn assert_decimals(fair: &[Odds], expected: &[f64]) {
    assert_eq!(fair.len(), expected.len());
    for (odds, want) in fair.iter().zip(expected) {
        assert!(
            (odds.decimal() - want).abs() < 1e-4,
            "expected {want}, got {}",
            odds.decimal()
        );
    }
}

#[test]
fn equal_margin_reference_values() {
    let fair = devig::equal_margin(&market()).unwrap();
    assert_decimals(&fair, &[2.1365, 3.6700, 3.8540]);
}

#[test]
fn additive_reference_values() {
    let fair = devig::additive(&market()).unwrap();
    assert_decimals(&fair, &[2.1229, 3.6883, 3.8786]);
}

#[test]
fn margin_proportional_reference_values() {
    let fair = devig::margin_proportional(&market()).unwrap();
    assert_decimals(&fair, &[2.1229, 3.6883, 3.8786]);
}

#[test]
fn shin_reference_values() {
    let fair = devig::shin(&market(), &SolverConfig::default()).unwrap();
    assert_decimals(&fair, &[2.1264, 3.6836, 3.8723]);
}

#[test]
fn odds_ratio_reference_values() {
    let fair = devig::odds_ratio(&market(), &SolverConfig::default()).unwrap();
    assert_decimals(&fair, &[2.1285, 3.6814, 3.8678]);
}

#[test]
fn logarithmic_reference_values() {
    let fair = devig::logarithmic(&market(), &SolverConfig::default()).unwrap();
    assert_decimals(&fair, &[2.1230, 3.6888, 3.8778]);
}

#[test]
fn every_method_normalizes_within_tolerance() {
    let market = market();
    let config = SolverConfig::default();
    for method in ALL_METHODS {
        let fair = method.devig(&market, &config).unwrap();
        let sum: f64 = fair.iter().map(|o| o.implied_prob().decimal()).sum();
        assert!(
            (sum - 1.0).abs() < 1e-9,
            "{} summed to {sum}",
            method.name()
        );
    }
}

#[test]
fn every_method_handles_a_two_outcome_market() {
    // The generic successive-substitution formulation has no singularity at
    // exactly two outcomes.
    let binary = vec![
        Odds::try_from_decimal(1.91).unwrap(),
        Odds::try_from_decimal(1.91).unwrap(),
    ];
    let config = SolverConfig::default();
    for method in ALL_METHODS {
        let fair = method.devig(&binary, &config).unwrap();
        let sum: f64 = fair.iter().map(|o| o.implied_prob().decimal()).sum();
        assert!(
            (sum - 1.0).abs() < 1e-9,
            "{} summed to {sum}",
            method.name()
        );
        // Symmetric quotes de-vig to even money.
        assert!((fair[0].decimal() - 2.0).abs() < 1e-6, "{}", method.name());
        assert!((fair[1].decimal() - 2.0).abs() < 1e-6, "{}", method.name());
    }
}

#[test]
fn fair_market_is_left_alone() {
    let fair_input = vec![
        Odds::try_from_decimal(4.0).unwrap(),
        Odds::try_from_decimal(4.0).unwrap(),
        Odds::try_from_decimal(2.0).unwrap(),
    ];
    let config = SolverConfig::default();
    for method in ALL_METHODS {
        let fair = method.devig(&fair_input, &config).unwrap();
        for (input, output) in fair_input.iter().zip(&fair) {
            assert!(
                (input.decimal() - output.decimal()).abs() < 1e-9,
                "{} moved {} to {}",
                method.name(),
                input.decimal(),
                output.decimal()
            );
        }
    }
}
