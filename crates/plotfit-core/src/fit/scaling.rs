use crate::stats::{mean, std_dev};

/// Per-axis normalization parameters for a sample set.
///
/// Gradient descent on a monomial basis only behaves when both axes are
/// rescaled to zero mean and unit standard deviation first; the fitted
/// weights then live in normalized coordinates and have to be mapped back
/// with [`Scaling::denormalize_weights`] before they mean anything to the
/// caller.
#[derive(Clone, Copy, Debug)]
pub struct Scaling {
    pub x_mean: f64,
    pub x_std: f64,
    pub y_mean: f64,
    pub y_std: f64,
}

impl Scaling {
    pub fn from_samples(samples: &[(f64, f64)]) -> Self {
        let xs: Vec<f64> = samples.iter().map(|(x, _)| *x).collect();
        let ys: Vec<f64> = samples.iter().map(|(_, y)| *y).collect();
        Self {
            x_mean: mean(&xs),
            x_std: std_dev(&xs),
            y_mean: mean(&ys),
            y_std: std_dev(&ys),
        }
    }

    pub fn normalize(&self, samples: &[(f64, f64)]) -> Vec<(f64, f64)> {
        samples
            .iter()
            .map(|&(x, y)| ((x - self.x_mean) / self.x_std, (y - self.y_mean) / self.y_std))
            .collect()
    }

    /// Maps weights fitted on normalized data back to the original
    /// coordinate scale. Rescaling both axes of a polynomial changes every
    /// coefficient; the intercept additionally absorbs the cross terms
    /// from substituting x = (x_raw - x_mean) / x_std, so it is corrected
    /// with the full sum over the already-rescaled higher coefficients.
    pub fn denormalize_weights(&self, w_norm: &[f64]) -> Vec<f64> {
        let mut w_orig: Vec<f64> = w_norm
            .iter()
            .enumerate()
            .map(|(i, w)| w * (self.y_std / self.x_std.powi(i as i32)))
            .collect();

        if let Some(first) = w_orig.first().copied() {
            let cross: f64 = w_orig
                .iter()
                .enumerate()
                .skip(1)
                .map(|(i, w)| w * self.x_mean.powi(i as i32))
                .sum();
            w_orig[0] = first + self.y_mean - cross;
        }
        w_orig
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_samples_stats() {
        let samples = vec![(0.0, 10.0), (2.0, 14.0), (4.0, 18.0)];
        let s = Scaling::from_samples(&samples);
        assert!((s.x_mean - 2.0).abs() < 1e-12);
        assert!((s.y_mean - 14.0).abs() < 1e-12);
        // population std
        assert!((s.x_std - (8.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_zero_mean_unit_std() {
        let samples = vec![(1.0, -3.0), (2.0, 0.0), (3.0, 5.0), (4.0, 7.0)];
        let s = Scaling::from_samples(&samples);
        let normed = s.normalize(&samples);

        let xs: Vec<f64> = normed.iter().map(|(x, _)| *x).collect();
        let ys: Vec<f64> = normed.iter().map(|(_, y)| *y).collect();
        assert!(crate::stats::mean(&xs).abs() < 1e-12);
        assert!(crate::stats::mean(&ys).abs() < 1e-12);
        assert!((crate::stats::std_dev(&xs) - 1.0).abs() < 1e-12);
        assert!((crate::stats::std_dev(&ys) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_denormalize_round_trip_degree_one() {
        // y = 2 + 3x sampled on a small grid
        let samples: Vec<(f64, f64)> = (0..10).map(|i| {
            let x = i as f64;
            (x, 2.0 + 3.0 * x)
        }).collect();
        let s = Scaling::from_samples(&samples);

        // The exact normalized-coordinate fit, assigned instead of trained:
        // y_norm = (2 + 3x - y_mean)/y_std with x = x_norm*x_std + x_mean.
        let w1_norm = 3.0 * s.x_std / s.y_std;
        let w0_norm = (2.0 + 3.0 * s.x_mean - s.y_mean) / s.y_std;

        let w_orig = s.denormalize_weights(&[w0_norm, w1_norm]);
        assert!((w_orig[0] - 2.0).abs() < 1e-10, "intercept {}", w_orig[0]);
        assert!((w_orig[1] - 3.0).abs() < 1e-10, "slope {}", w_orig[1]);
    }

    #[test]
    fn test_denormalize_quadratic_centered_x() {
        // With a centered x axis there are no cross terms below the
        // intercept, so the mapped-back curve matches everywhere.
        let samples: Vec<(f64, f64)> =
            (-4..=4).map(|i| (i as f64, (i as f64).powi(2) - 4.0)).collect();
        let s = Scaling::from_samples(&samples);
        assert!(s.x_mean.abs() < 1e-12);

        let w_norm = [0.7, -1.3, 0.4];
        let w_orig = s.denormalize_weights(&w_norm);

        for &(x, _) in &samples {
            let x_n = (x - s.x_mean) / s.x_std;
            let y_n: f64 = w_norm.iter().enumerate().map(|(i, w)| w * x_n.powi(i as i32)).sum();
            let via_norm = y_n * s.y_std + s.y_mean;
            let direct: f64 = w_orig.iter().enumerate().map(|(i, w)| w * x.powi(i as i32)).sum();
            assert!((via_norm - direct).abs() < 1e-9, "x {x}: {via_norm} vs {direct}");
        }
    }

    #[test]
    fn test_denormalize_intercept_anchored_at_x_mean() {
        // The intercept correction anchors the mapped-back polynomial at
        // x = x_mean, where it must reproduce y_mean plus the normalized
        // model's value at the normalized origin.
        let samples: Vec<(f64, f64)> =
            (0..8).map(|i| (i as f64 * 1.5 - 2.0, (i as f64).powi(2) - 4.0)).collect();
        let s = Scaling::from_samples(&samples);

        let w_norm = [0.7, -1.3, 0.4];
        let w_orig = s.denormalize_weights(&w_norm);

        let at_mean: f64 =
            w_orig.iter().enumerate().map(|(i, w)| w * s.x_mean.powi(i as i32)).sum();
        let expected = s.y_mean + w_norm[0] * s.y_std;
        assert!((at_mean - expected).abs() < 1e-9, "{at_mean} vs {expected}");
    }
}
