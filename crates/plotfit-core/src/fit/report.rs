use serde::Serialize;

use std::fmt::Write;

/// Caller-facing summary of one finished fit: weights in original
/// coordinates, the printable equation, the final training loss and a
/// densely sampled curve for display.
#[derive(Clone, Debug, Serialize)]
pub struct FitReport {
    pub weights: Vec<f64>,
    pub equation: String,
    pub loss: f64,
    pub curve: Vec<(f64, f64)>,
}

impl FitReport {
    pub fn new(weights: Vec<f64>, loss: f64, x_min: f64, x_max: f64, points: usize) -> Self {
        let equation = format_polynomial(&weights);
        let curve = forecast_curve(&weights, x_min, x_max, points);
        Self { weights, equation, loss, curve }
    }
}

/// `"y = 1.2000 + 0.5000*x^1 + ..."`, coefficients fixed to 4 decimals,
/// one term per degree.
pub fn format_polynomial(weights: &[f64]) -> String {
    let mut out = String::from("y = ");
    for (i, w) in weights.iter().enumerate() {
        if i == 0 {
            let _ = write!(out, "{w:.4}");
        } else {
            let _ = write!(out, " + {w:.4}*x^{i}");
        }
    }
    out
}

pub fn eval_polynomial(weights: &[f64], x: f64) -> f64 {
    let mut acc = 0.0;
    let mut pow = 1.0;
    for w in weights {
        acc += w * pow;
        pow *= x;
    }
    acc
}

/// Samples the polynomial at `points` evenly spaced x values across
/// [x_min, x_max], endpoints included.
pub fn forecast_curve(weights: &[f64], x_min: f64, x_max: f64, points: usize) -> Vec<(f64, f64)> {
    if points == 0 {
        return Vec::new();
    }
    if points == 1 {
        return vec![(x_min, eval_polynomial(weights, x_min))];
    }
    let step = (x_max - x_min) / (points - 1) as f64;
    (0..points)
        .map(|i| {
            let x = x_min + step * i as f64;
            (x, eval_polynomial(weights, x))
        })
        .collect()
}
