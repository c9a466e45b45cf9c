pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

// Population standard deviation (divide by n, not n - 1)
pub fn std_dev(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    let m = mean(data);
    let var = data.iter().map(|v| (v - m).powi(2)).sum::<f64>() / data.len() as f64;
    var.sqrt()
}

pub fn mae(y: &[f64], y_hat: &[f64]) -> Option<f64> {
    if y.len() != y_hat.len() || y.is_empty() {
        return None;
    }

    let sum_abs: f64 = y.iter().zip(y_hat.iter()).map(|(&yi, &yhi)| (yi - yhi).abs()).sum();

    Some(sum_abs / y.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_std() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((mean(&data) - 5.0).abs() < 1e-12);
        assert!((std_dev(&data) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_mean_empty_is_nan() {
        assert!(mean(&[]).is_nan());
        assert!(std_dev(&[]).is_nan());
    }

    #[test]
    fn test_mae() {
        let y = [1.0, 2.0, 3.0];
        let y_hat = [1.5, 2.0, 2.0];
        let got = mae(&y, &y_hat).unwrap();
        assert!((got - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_mae_length_mismatch() {
        assert!(mae(&[1.0], &[1.0, 2.0]).is_none());
        assert!(mae(&[], &[]).is_none());
    }
}
