//! adaline: the ADAptive LInear NEuron binary classifier.
//!
//! A linear model trained by batch gradient descent, stochastic gradient
//! descent, or a closed-form normal-equation solve. Hyperparameters go in
//! through [`AdalineConfig`]; learned state (weight vector, per-epoch cost
//! history, observed class pair, decision threshold) is readable on the
//! estimator after fitting. Class labels must be {0, 1} or {-1, 1}.
//!
//! ```
//! use adaline::{Adaline, AdalineConfig, Solver};
//! use ndarray::arr2;
//!
//! let x = arr2(&[[0.0f32], [1.0], [2.0], [3.0]]);
//! let y = [-1, -1, 1, 1];
//!
//! let mut model = Adaline::new(AdalineConfig::new(0.01, 50, Solver::NormalEquation));
//! let labels = model.fit(&x, &y, true).unwrap().predict(&x).unwrap();
//! assert_eq!(labels, y);
//! ```
pub mod config;
pub mod error;
pub mod linalg;
pub mod model;
pub mod preprocessing;

pub use config::{AdalineConfig, Solver};
pub use error::AdalineError;
pub use model::Adaline;
