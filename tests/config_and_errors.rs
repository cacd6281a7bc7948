//! Integration tests for solver parsing, config defaults, and error display.

use adaline::config::{AdalineConfig, Solver};
use adaline::error::AdalineError;

// ---------------------------------------------------------------------------
// Solver parsing
// ---------------------------------------------------------------------------

#[test]
fn solver_from_str_recognized_values() {
    assert_eq!("gd".parse::<Solver>().unwrap(), Solver::Gd);
    assert_eq!("sgd".parse::<Solver>().unwrap(), Solver::Sgd);
    assert_eq!(
        "normal equation".parse::<Solver>().unwrap(),
        Solver::NormalEquation
    );
    assert_eq!(
        "normal_equation".parse::<Solver>().unwrap(),
        Solver::NormalEquation
    );
}

#[test]
fn solver_from_str_is_case_insensitive() {
    assert_eq!("SGD".parse::<Solver>().unwrap(), Solver::Sgd);
    assert_eq!(
        "Normal Equation".parse::<Solver>().unwrap(),
        Solver::NormalEquation
    );
}

#[test]
fn solver_from_str_unknown_errors() {
    let result = "newton".parse::<Solver>();
    match result {
        Err(AdalineError::UnknownSolver(s)) => assert_eq!(s, "newton"),
        other => panic!("expected UnknownSolver, got {:?}", other),
    }
}

// ---------------------------------------------------------------------------
// Config defaults and serialization
// ---------------------------------------------------------------------------

#[test]
fn config_default_values() {
    let config = AdalineConfig::default();
    assert!((config.eta - 0.01).abs() < 1e-6);
    assert_eq!(config.epochs, 50);
    assert_eq!(config.solver, Solver::Sgd);
    assert!(!config.shuffle);
    assert!(config.random_seed.is_none());
    assert!(!config.zero_init_weight);
}

#[test]
fn config_new_keeps_remaining_defaults() {
    let config = AdalineConfig::new(0.1, 25, Solver::Gd);
    assert!((config.eta - 0.1).abs() < 1e-6);
    assert_eq!(config.epochs, 25);
    assert_eq!(config.solver, Solver::Gd);
    assert!(!config.shuffle, "shuffle should default to false");
}

#[test]
fn config_serializes_to_json() {
    let config = AdalineConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("eta"));
    assert!(json.contains("Sgd"));
}

#[test]
fn config_round_trips_json() {
    let mut config = AdalineConfig::new(0.05, 10, Solver::NormalEquation);
    config.random_seed = Some(11);
    let json = serde_json::to_string(&config).unwrap();
    let back: AdalineConfig = serde_json::from_str(&json).unwrap();
    assert!((config.eta - back.eta).abs() < 1e-6);
    assert_eq!(back.epochs, 10);
    assert_eq!(back.solver, Solver::NormalEquation);
    assert_eq!(back.random_seed, Some(11));
}

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

#[test]
fn error_messages_name_the_problem() {
    let msg = AdalineError::UnknownSolver("newton".to_string()).to_string();
    assert!(msg.contains("newton"), "message = {}", msg);

    let msg = AdalineError::LabelDomain(vec![1, 2]).to_string();
    assert!(msg.contains("[1, 2]"), "message = {}", msg);

    let msg = AdalineError::DimensionMismatch {
        weights: 3,
        features: 5,
    }
    .to_string();
    assert!(msg.contains('3') && msg.contains('5'), "message = {}", msg);

    assert!(!AdalineError::SingularMatrix.to_string().is_empty());
    assert!(!AdalineError::NotFitted.to_string().is_empty());
}
