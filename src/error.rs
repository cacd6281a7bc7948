use std::error::Error;
use std::fmt;

/// Errors surfaced by Adaline configuration, fitting, and prediction.
#[derive(Debug, Clone, PartialEq)]
pub enum AdalineError {
    /// Solver string is not one of the recognized values.
    UnknownSolver(String),
    /// Number of targets does not match the number of feature rows.
    ShapeMismatch { rows: usize, targets: usize },
    /// Distinct target labels are not {0, 1} or {-1, 1}.
    LabelDomain(Vec<i32>),
    /// Feature count disagrees with the existing weight vector.
    DimensionMismatch { weights: usize, features: usize },
    /// The normal-equation design matrix has no inverse.
    SingularMatrix,
    /// The model has no learned weights yet.
    NotFitted,
}

impl fmt::Display for AdalineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AdalineError::UnknownSolver(s) => write!(
                f,
                "unknown solver {:?}: must be \"gd\", \"sgd\", or \"normal equation\"",
                s
            ),
            AdalineError::ShapeMismatch { rows, targets } => write!(
                f,
                "got {} targets for {} feature rows",
                targets, rows
            ),
            AdalineError::LabelDomain(classes) => write!(
                f,
                "only binary class labels {{0, 1}} or {{-1, 1}} are supported, got {:?}",
                classes
            ),
            AdalineError::DimensionMismatch { weights, features } => write!(
                f,
                "model was fit on {} features but {} were provided",
                weights, features
            ),
            AdalineError::SingularMatrix => {
                write!(f, "design matrix X^T X is singular and cannot be inverted")
            }
            AdalineError::NotFitted => write!(f, "model has not been fitted yet"),
        }
    }
}

impl Error for AdalineError {}
