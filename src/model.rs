//! The Adaline estimator.
//!
//! ADAptive LInear NEuron: a linear binary classifier trained by batch
//! gradient descent, stochastic gradient descent, or a closed-form
//! normal-equation solve. Weights live in a single vector with the bias
//! at index 0; per-epoch sum-of-squared-errors costs are recorded for
//! the iterative solvers.

use ndarray::{s, Array1, Array2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::{AdalineConfig, Solver};
use crate::error::AdalineError;
use crate::linalg;

/// ADAptive LInear NEuron binary classifier.
///
/// Holds the hyperparameters and, after fitting, the learned state:
/// weight vector, cost history, observed class pair, and the matching
/// decision threshold.
pub struct Adaline {
    config: AdalineConfig,
    rng: StdRng,
    weights: Option<Array1<f32>>,
    cost: Vec<f32>,
    classes: Option<(i32, i32)>,
    threshold: f32,
}

impl Adaline {
    /// Create an unfitted estimator.
    ///
    /// The random generator is owned by the instance and seeded once,
    /// here. Shuffling and weight initialization across repeated `fit`
    /// calls keep drawing from this one stream.
    pub fn new(config: AdalineConfig) -> Self {
        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Adaline {
            config,
            rng,
            weights: None,
            cost: Vec::new(),
            classes: None,
            threshold: 0.0,
        }
    }

    /// Learn weight coefficients from training data.
    ///
    /// # Arguments
    ///
    /// * `x` - Feature matrix, shape (n_samples, n_features)
    /// * `y` - Class labels, one per row of `x`; must be {0, 1} or {-1, 1}
    /// * `init_weights` - Re-initialize weights before fitting. Set false
    ///   to continue training with weights from a previous fit.
    ///
    /// # Returns
    ///
    /// `&mut self`, so a fit can be chained into `predict`.
    pub fn fit(
        &mut self,
        x: &Array2<f32>,
        y: &[i32],
        init_weights: bool,
    ) -> Result<&mut Self, AdalineError> {
        if y.len() != x.nrows() {
            return Err(AdalineError::ShapeMismatch {
                rows: x.nrows(),
                targets: y.len(),
            });
        }

        let (lo, hi) = validate_labels(y)?;
        self.threshold = if lo == -1 { 0.0 } else { 0.5 };
        self.classes = Some((lo, hi));

        let n_features = x.ncols();
        if init_weights {
            self.weights = Some(self.initial_weights(1 + n_features));
        } else {
            match self.weights.as_ref() {
                Some(w) if w.len() == 1 + n_features => {}
                Some(w) => {
                    return Err(AdalineError::DimensionMismatch {
                        weights: w.len() - 1,
                        features: n_features,
                    })
                }
                None => return Err(AdalineError::NotFitted),
            }
        }
        self.cost.clear();

        log::info!(
            "fitting adaline ({:?}) on {} samples x {} features",
            self.config.solver,
            x.nrows(),
            n_features
        );

        let mut w = self.weights.take().ok_or(AdalineError::NotFitted)?;
        let y_f: Array1<f32> = y.iter().map(|&v| v as f32).collect();
        match self.config.solver {
            Solver::NormalEquation => {
                w = linalg::least_squares(x, &y_f)?;
            }
            Solver::Gd => self.run_gd(x, &y_f, &mut w),
            Solver::Sgd => self.run_sgd(x, &y_f, &mut w),
        }
        self.weights = Some(w);

        Ok(self)
    }

    /// Linear net input `x . w[1..] + w[0]`, one score per row.
    pub fn net_input(&self, x: &Array2<f32>) -> Result<Array1<f32>, AdalineError> {
        let w = self.weights.as_ref().ok_or(AdalineError::NotFitted)?;
        if x.ncols() + 1 != w.len() {
            return Err(AdalineError::DimensionMismatch {
                weights: w.len() - 1,
                features: x.ncols(),
            });
        }
        Ok(net_input_with(x, w))
    }

    /// Linear activation: identity over the net input.
    pub fn activation(&self, x: &Array2<f32>) -> Result<Array1<f32>, AdalineError> {
        self.net_input(x)
    }

    /// Predict class labels for the rows of `x`.
    ///
    /// Rows whose net input reaches the decision threshold get the larger
    /// of the two training labels, the rest get the smaller.
    pub fn predict(&self, x: &Array2<f32>) -> Result<Vec<i32>, AdalineError> {
        let (lo, hi) = self.classes.ok_or(AdalineError::NotFitted)?;
        let scores = self.net_input(x)?;
        Ok(scores
            .iter()
            .map(|&score| if score >= self.threshold { hi } else { lo })
            .collect())
    }

    /// Weights after fitting; bias at index 0.
    pub fn weights(&self) -> Option<&Array1<f32>> {
        self.weights.as_ref()
    }

    /// Sum-of-squared-errors cost per epoch (empty for the closed-form solver).
    pub fn cost(&self) -> &[f32] {
        &self.cost
    }

    /// The two class labels observed during the last fit, sorted.
    pub fn classes(&self) -> Option<(i32, i32)> {
        self.classes
    }

    /// Decision threshold matching the observed labels: 0.0 for {-1, 1},
    /// 0.5 for {0, 1}.
    pub fn threshold(&self) -> Option<f32> {
        self.classes.map(|_| self.threshold)
    }

    pub fn config(&self) -> &AdalineConfig {
        &self.config
    }

    fn run_gd(&mut self, x: &Array2<f32>, y: &Array1<f32>, w: &mut Array1<f32>) {
        let eta = self.config.eta;
        let mut xs = x.to_owned();
        let mut ys = y.to_owned();
        for epoch in 0..self.config.epochs {
            if self.config.shuffle {
                let order = self.permutation(xs.nrows());
                xs = xs.select(Axis(0), &order);
                ys = ys.select(Axis(0), &order);
            }
            let output = net_input_with(&xs, w);
            let errors = &ys - &output;
            let grad = xs.t().dot(&errors);
            w.slice_mut(s![1..]).scaled_add(eta, &grad);
            w[0] += eta * errors.sum();
            let cost = errors.mapv(|e| e * e).sum() / 2.0;
            log::trace!("epoch {}: cost {}", epoch, cost);
            self.cost.push(cost);
        }
    }

    fn run_sgd(&mut self, x: &Array2<f32>, y: &Array1<f32>, w: &mut Array1<f32>) {
        let eta = self.config.eta;
        let mut xs = x.to_owned();
        let mut ys = y.to_owned();
        for epoch in 0..self.config.epochs {
            if self.config.shuffle {
                let order = self.permutation(xs.nrows());
                xs = xs.select(Axis(0), &order);
                ys = ys.select(Axis(0), &order);
            }
            let mut cost = 0.0;
            for (xi, &yi) in xs.outer_iter().zip(ys.iter()) {
                let error = yi - (xi.dot(&w.slice(s![1..])) + w[0]);
                w.slice_mut(s![1..]).scaled_add(eta * error, &xi);
                w[0] += eta * error;
                cost += error * error / 2.0;
            }
            log::trace!("epoch {}: cost {}", epoch, cost);
            self.cost.push(cost);
        }
    }

    fn initial_weights(&mut self, len: usize) -> Array1<f32> {
        if self.config.zero_init_weight {
            Array1::zeros(len)
        } else {
            // w_i = 0.2 * u_i - 0.5, u_i ~ Uniform[0, 1)
            Array1::from_shape_fn(len, |_| 0.2 * self.rng.gen::<f32>() - 0.5)
        }
    }

    /// One random permutation of row indices; callers apply it to
    /// features and targets in unison.
    fn permutation(&mut self, n: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(&mut self.rng);
        order
    }
}

fn net_input_with(x: &Array2<f32>, w: &Array1<f32>) -> Array1<f32> {
    x.dot(&w.slice(s![1..])) + w[0]
}

/// Distinct labels must be {0, 1} or {-1, 1}; returned sorted.
fn validate_labels(y: &[i32]) -> Result<(i32, i32), AdalineError> {
    let mut classes = y.to_vec();
    classes.sort_unstable();
    classes.dedup();
    match classes.as_slice() {
        [lo, hi] if (*lo == -1 || *lo == 0) && *hi == 1 => Ok((*lo, *hi)),
        _ => Err(AdalineError::LabelDomain(classes)),
    }
}
