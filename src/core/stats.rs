use crate::domain::model::SummaryStats;
use crate::utils::error::{BylineError, Result};

/// Smallest sample for which a sample standard deviation is defined.
pub const MIN_SAMPLE_SIZE: usize = 2;

impl SummaryStats {
    pub fn from_sample(values: &[f64]) -> Result<Self> {
        if values.len() < MIN_SAMPLE_SIZE {
            return Err(BylineError::InsufficientData {
                required: MIN_SAMPLE_SIZE,
                actual: values.len(),
            });
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            min,
            max,
            mean: mean(values),
            std_dev: sample_std_dev(values),
        })
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn sample_std_dev(values: &[f64]) -> f64 {
    let mean = mean(values);
    let n = values.len() as f64;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALARIES: [f64; 4] = [250000.0, 120000.0, 90000.0, 110000.0];

    #[test]
    fn test_salary_summary() {
        let stats = SummaryStats::from_sample(&SALARIES).unwrap();

        assert_eq!(stats.min, 90000.0);
        assert_eq!(stats.max, 250000.0);
        assert_eq!(stats.mean, 142500.0);
        assert!((stats.std_dev - 72743.84280931731).abs() < 1e-6);
    }

    #[test]
    fn test_uses_bessel_correction() {
        // 母體標準差為 1.0，樣本標準差為 sqrt(2)
        let stats = SummaryStats::from_sample(&[1.0, 3.0]).unwrap();
        assert!((stats.std_dev - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_constant_sample_has_zero_spread() {
        let stats = SummaryStats::from_sample(&[7.5, 7.5, 7.5]).unwrap();
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.mean, 7.5);
    }

    #[test]
    fn test_single_value_is_rejected() {
        let err = SummaryStats::from_sample(&[250000.0]).unwrap_err();
        assert!(matches!(
            err,
            BylineError::InsufficientData {
                required: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_empty_sample_is_rejected() {
        assert!(SummaryStats::from_sample(&[]).is_err());
    }
}
