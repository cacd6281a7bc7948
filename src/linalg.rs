//! Least-squares backend for the closed-form solver.

use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, Array2};

use crate::error::AdalineError;

/// Solve `w = (X^T X)^-1 X^T y` over the bias-augmented design matrix.
///
/// The f32 inputs are widened to f64 for the solve and the resulting
/// weights narrowed back. Fails with [`AdalineError::SingularMatrix`]
/// when `X^T X` has no inverse.
pub fn least_squares(x: &Array2<f32>, y: &Array1<f32>) -> Result<Array1<f32>, AdalineError> {
    let (rows, cols) = x.dim();

    // Leading column of ones carries the bias term.
    let mut xb = DMatrix::<f64>::from_element(rows, cols + 1, 1.0);
    for i in 0..rows {
        for j in 0..cols {
            xb[(i, j + 1)] = f64::from(x[(i, j)]);
        }
    }
    let yv = DVector::from_iterator(rows, y.iter().map(|&v| f64::from(v)));

    let xt = xb.transpose();
    let inv = (&xt * &xb)
        .try_inverse()
        .ok_or(AdalineError::SingularMatrix)?;
    let w = inv * xt * yv;

    Ok(Array1::from_iter(w.iter().map(|&v| v as f32)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2};

    #[test]
    fn recovers_exact_line() {
        // y = 2x + 1 on noiseless data
        let x = arr2(&[[0.0f32], [1.0], [2.0], [3.0]]);
        let y = arr1(&[1.0f32, 3.0, 5.0, 7.0]);

        let w = least_squares(&x, &y).unwrap();
        assert_eq!(w.len(), 2);
        assert!((w[0] - 1.0).abs() < 1e-4, "bias = {}", w[0]);
        assert!((w[1] - 2.0).abs() < 1e-4, "slope = {}", w[1]);
    }

    #[test]
    fn two_feature_plane() {
        // y = 1 + 2a - 3b
        let x = arr2(&[
            [0.0f32, 0.0],
            [1.0, 0.0],
            [0.0, 1.0],
            [1.0, 1.0],
            [2.0, 1.0],
        ]);
        let y = arr1(&[1.0f32, 3.0, -2.0, 0.0, 2.0]);

        let w = least_squares(&x, &y).unwrap();
        assert!((w[0] - 1.0).abs() < 1e-4, "bias = {}", w[0]);
        assert!((w[1] - 2.0).abs() < 1e-4, "w1 = {}", w[1]);
        assert!((w[2] + 3.0).abs() < 1e-4, "w2 = {}", w[2]);
    }

    #[test]
    fn duplicate_column_is_singular() {
        let x = arr2(&[[1.0f32, 1.0], [2.0, 2.0], [3.0, 3.0]]);
        let y = arr1(&[1.0f32, 2.0, 3.0]);

        let result = least_squares(&x, &y);
        assert!(
            matches!(result, Err(AdalineError::SingularMatrix)),
            "expected singular-matrix error, got {:?}",
            result
        );
    }
}
