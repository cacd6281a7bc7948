//! Feature standardization for gradient-descent training.
//!
//! The iterative solvers are sensitive to feature scale, so features
//! are typically brought to zero mean and unit variance before fitting.

use ndarray::{Array1, Array2, Axis};

/// Per-column mean/std scaler.
#[derive(Clone, Debug)]
pub struct Scaler {
    pub mean: Array1<f32>,
    pub std: Array1<f32>,
}

impl Scaler {
    /// Minimum stddev to avoid division by zero on constant columns.
    const MIN_STD: f32 = 1e-6;
}

/// Fit a `Scaler` from a matrix where rows are samples and columns are
/// features.
pub fn fit_scaler(x: &Array2<f32>) -> Scaler {
    let (rows, cols) = x.dim();
    assert!(rows > 0 && cols > 0, "fit_scaler requires a non-empty matrix");

    let mean = x.mean_axis(Axis(0)).expect("matrix has rows");

    let mut var = Array1::<f32>::zeros(cols);
    for row in x.outer_iter() {
        let d = &row - &mean;
        var += &(&d * &d);
    }
    let std = var.mapv(|v| (v / rows as f32).sqrt().max(Scaler::MIN_STD));

    Scaler { mean, std }
}

/// Standardize all rows with the provided `Scaler`.
pub fn transform(x: &Array2<f32>, sc: &Scaler) -> Array2<f32> {
    let mut out = x.to_owned();
    for mut row in out.outer_iter_mut() {
        row -= &sc.mean;
        row /= &sc.std;
    }
    out
}

/// Fit a scaler and return the transformed matrix in one call.
pub fn fit_transform(x: &Array2<f32>) -> Array2<f32> {
    let sc = fit_scaler(x);
    transform(x, &sc)
}
