use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AdalineError;

/// Hyperparameters for the Adaline estimator, fixed at construction.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AdalineConfig {
    /// Learning rate for the iterative solvers, conventionally in (0, 1].
    pub eta: f32,
    /// Passes over the training dataset (ignored by the closed-form solver).
    pub epochs: usize,
    /// Method for solving the cost function.
    pub solver: Solver,
    /// Shuffle training rows at the start of every epoch.
    pub shuffle: bool,
    /// Seed for shuffling and weight initialization; entropy-seeded when `None`.
    pub random_seed: Option<u64>,
    /// Start from all-zero weights instead of small random values.
    pub zero_init_weight: bool,
}

/// Supported methods for solving the Adaline cost function.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    /// Batch gradient descent.
    Gd,
    /// Stochastic gradient descent with per-sample updates.
    Sgd,
    /// Closed-form least-squares solve, no epoch loop.
    NormalEquation,
}

impl FromStr for Solver {
    type Err = AdalineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gd" => Ok(Solver::Gd),
            "sgd" => Ok(Solver::Sgd),
            "normal equation" | "normal_equation" => Ok(Solver::NormalEquation),
            _ => Err(AdalineError::UnknownSolver(s.to_string())),
        }
    }
}

impl AdalineConfig {
    pub fn new(eta: f32, epochs: usize, solver: Solver) -> Self {
        Self {
            eta,
            epochs,
            solver,
            ..Self::default()
        }
    }
}

impl Default for AdalineConfig {
    fn default() -> Self {
        Self {
            eta: 0.01,
            epochs: 50,
            solver: Solver::Sgd,
            shuffle: false,
            random_seed: None,
            zero_init_weight: false,
        }
    }
}
