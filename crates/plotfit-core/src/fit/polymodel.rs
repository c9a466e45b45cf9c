use crate::fit::fiterror::{FitError, FitResult, Stage};
use crate::stats::mae;
use crate::trainevent::{TrainEvent, TrainEventSink};

use rand::seq::SliceRandom;
use rand::Rng;

use std::fmt;

/// Polynomial model y = w0 + w1*x + .. + w_degree*x^degree, fitted by
/// L2-regularized mini-batch gradient descent.
///
/// Training assumes the samples are already normalized to zero mean and
/// unit standard deviation per axis; see [`crate::fit::scaling::Scaling`].
#[derive(Clone, Debug)]
pub struct PolyModel {
    pub degree: usize,
    pub eta: f64,
    pub epochs: usize,
    pub batch_size: usize,
    pub lambda: f64,
    weights: Vec<f64>,
}

impl fmt::Display for PolyModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PolyModel(degree: {})", self.degree)
    }
}

impl PolyModel {
    /// Fresh model with `degree + 1` weights drawn uniformly from [0, 1).
    pub fn new<R: Rng + ?Sized>(
        degree: usize,
        eta: f64,
        epochs: usize,
        batch_size: usize,
        lambda: f64,
        rng: &mut R,
    ) -> Self {
        let weights = (0..=degree).map(|_| rng.random::<f64>()).collect();
        Self { degree, eta, epochs, batch_size, lambda, weights }
    }

    pub fn from_weights(weights: Vec<f64>, eta: f64, epochs: usize, batch_size: usize, lambda: f64) -> Self {
        assert!(!weights.is_empty(), "a polynomial needs at least an intercept");
        Self { degree: weights.len() - 1, eta, epochs, batch_size, lambda, weights }
    }

    pub fn predict(&self, x: f64) -> FitResult<f64> {
        let mut acc = 0.0;
        let mut pow = 1.0;
        for w in &self.weights {
            acc += w * pow;
            pow *= x;
        }
        if !acc.is_finite() {
            return Err(FitError::NumericInstability { stage: Stage::Predict });
        }
        Ok(acc)
    }

    /// Per-sample gradient of the regularized squared error. With
    /// err = 2 * (predict(x) - y), `d[i] = err * x^i + lambda * weights[i]`,
    /// which is the exact gradient of
    /// (predict(x) - y)^2 + lambda / 2 * sum(w_i^2) — the effective L2
    /// penalty carries a factor of lambda / 2. The regularization term uses
    /// the current weights, folded into every per-sample gradient rather
    /// than applied as decoupled decay.
    pub fn gradient(&self, x: f64, y: f64) -> FitResult<Vec<f64>> {
        let err = 2.0 * (self.predict(x)? - y);
        let mut d = Vec::with_capacity(self.weights.len());
        let mut pow = 1.0;
        for w in &self.weights {
            d.push(err * pow + self.lambda * w);
            pow *= x;
        }
        if d.iter().any(|v| !v.is_finite()) {
            return Err(FitError::NumericInstability { stage: Stage::Gradient });
        }
        Ok(d)
    }

    /// Runs `epochs` passes of mini-batch gradient descent over `samples`,
    /// reshuffling before each pass and emitting one progress event per
    /// epoch. The first non-finite prediction or gradient aborts the run;
    /// the weights are then left as last written and must be discarded.
    pub fn train<R: Rng + ?Sized>(
        &mut self,
        samples: &[(f64, f64)],
        rng: &mut R,
        sink: &mut dyn TrainEventSink,
    ) -> FitResult<()> {
        let res = self.run_epochs(samples, rng, sink);
        match &res {
            Ok(()) => sink.on_train_event(&TrainEvent::Done(Ok(()))),
            Err(e) => sink.on_train_event(&TrainEvent::Done(Err(e.to_string()))),
        }
        res
    }

    fn run_epochs<R: Rng + ?Sized>(
        &mut self,
        samples: &[(f64, f64)],
        rng: &mut R,
        sink: &mut dyn TrainEventSink,
    ) -> FitResult<()> {
        let mut data = samples.to_vec();
        for e in 0..self.epochs {
            data.shuffle(rng);

            for batch in data.chunks(self.batch_size) {
                let mut sum = vec![0.0; self.weights.len()];
                for &(x, y) in batch {
                    let d = self.gradient(x, y)?;
                    for (s, di) in sum.iter_mut().zip(d) {
                        *s += di;
                    }
                }
                // Always scaled by the configured batch size, also for a
                // short final batch.
                let step = self.eta / self.batch_size as f64;
                for (w, s) in self.weights.iter_mut().zip(&sum) {
                    *w -= step * s;
                }
            }

            let loss = self.evaluate(samples)?;
            let pct = e as f64 / self.epochs as f64 * 100.0;
            sink.on_train_event(&TrainEvent::Epoch { pct, loss });
        }
        Ok(())
    }

    /// Mean absolute error over `samples`. Progress metric only; the
    /// objective minimized by `train` is the regularized squared error.
    pub fn evaluate(&self, samples: &[(f64, f64)]) -> FitResult<f64> {
        let mut y = Vec::with_capacity(samples.len());
        let mut y_hat = Vec::with_capacity(samples.len());
        for &(xi, yi) in samples {
            y.push(yi);
            y_hat.push(self.predict(xi)?);
        }
        mae(&y, &y_hat).ok_or(FitError::EmptySampleSet)
    }

    /// Snapshot of the current weights, index = exponent. Always a copy;
    /// mutating it never touches the model.
    pub fn weights(&self) -> Vec<f64> {
        self.weights.clone()
    }
}
