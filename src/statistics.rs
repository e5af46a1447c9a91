use serde::{Deserialize, Serialize};
use statrs::statistics::{Data, Distribution as StatrsDistribution, Max, Median, Min};
use std::fmt::{Display, Formatter};

/// Moments of the per-operation latency samples of one (task, kind) group.
#[derive(Debug, Serialize, Deserialize, Copy, Clone)]
pub struct LatencyDistribution {
    pub count: u64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub median: f64,
}

impl Display for LatencyDistribution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Count: {}\nMin: {}\nMax: {}\nMean: {}\nVariance: {}\nStd Dev: {}\nMedian: {}",
            self.count, self.min, self.max, self.mean, self.variance, self.std_dev, self.median
        )
    }
}

pub fn calculate_distribution(avg_ns: &[u64]) -> LatencyDistribution {
    let count = avg_ns.len() as u64;
    let samples: Vec<f64> = avg_ns.iter().map(|&sample| sample as f64).collect();
    let data = Data::new(samples);

    let min = data.min();
    let max = data.max();
    let mean = data.mean().expect("cannot calculate mean");
    let variance = data.variance().expect("cannot calculate variance");
    let std_dev = data.std_dev().expect("cannot calculate std dev");
    let median = data.median();

    LatencyDistribution {
        count,
        min,
        max,
        mean,
        variance,
        std_dev,
        median,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribution_of_known_samples() {
        let distribution = calculate_distribution(&[100, 200, 300, 400]);

        assert_eq!(distribution.count, 4);
        assert_eq!(distribution.min, 100.0);
        assert_eq!(distribution.max, 400.0);
        assert_eq!(distribution.mean, 250.0);
        assert_eq!(distribution.median, 250.0);
        // sample variance, n - 1 denominator
        assert!((distribution.variance - 50_000.0 / 3.0).abs() < 1e-9);
        assert!((distribution.std_dev - distribution.variance.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn single_sample_distribution() {
        let distribution = calculate_distribution(&[42]);

        assert_eq!(distribution.count, 1);
        assert_eq!(distribution.mean, 42.0);
        assert_eq!(distribution.median, 42.0);
        assert_eq!(distribution.min, 42.0);
        assert_eq!(distribution.max, 42.0);
    }
}
