use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::workflows::assessment::domain::HexacoFactor;

pub const IQ_MAX: f64 = 12.0;
pub const RELIABILITY_MAX: f64 = 100.0;
pub const SJT_MAX: f64 = 8.0;
const HEXACO_TARGET_MAX: f64 = 100.0;

/// HR-defined target profile for a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benchmark {
    pub iq: f64,
    pub reliability: f64,
    pub sjt: f64,
    /// Per-factor targets (0–100). Stored for gap review; the fit score ignores them.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub hexaco: BTreeMap<HexacoFactor, f64>,
}

impl Benchmark {
    pub fn validate(&self) -> Result<(), BenchmarkError> {
        check_range("iq", self.iq, IQ_MAX)?;
        check_range("reliability", self.reliability, RELIABILITY_MAX)?;
        check_range("sjt", self.sjt, SJT_MAX)?;
        for (factor, target) in &self.hexaco {
            check_range(factor.label(), *target, HEXACO_TARGET_MAX)?;
        }
        Ok(())
    }
}

fn check_range(metric: &str, value: f64, max: f64) -> Result<(), BenchmarkError> {
    if value.is_finite() && (0.0..=max).contains(&value) {
        Ok(())
    } else {
        Err(BenchmarkError::OutOfRange {
            metric: metric.to_string(),
            value,
            max,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BenchmarkError {
    #[error("benchmark {metric} target {value} must be between 0 and {max}")]
    OutOfRange {
        metric: String,
        value: f64,
        max: f64,
    },
}

/// Candidate metrics on the benchmark scales. Callers substitute 0 for missing values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FitMetrics {
    pub iq: f64,
    pub reliability: f64,
    pub sjt: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitMetric {
    Iq,
    Reliability,
    Sjt,
}

impl FitMetric {
    pub const fn scale_max(self) -> f64 {
        match self {
            FitMetric::Iq => IQ_MAX,
            FitMetric::Reliability => RELIABILITY_MAX,
            FitMetric::Sjt => SJT_MAX,
        }
    }
}

/// Signed distance from target plus the target position on the metric's bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricGap {
    pub metric: FitMetric,
    pub actual: f64,
    pub target: f64,
    pub gap: f64,
    pub target_marker_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitReport {
    pub fit_percentage: u8,
    pub gaps: Vec<MetricGap>,
}

fn closeness(actual: f64, target: f64, max: f64) -> f64 {
    (1.0 - (actual - target).abs() / max).clamp(0.0, 1.0)
}

/// Symmetric-deviation fit: being above or below target costs the same.
pub fn calculate_fit(metrics: &FitMetrics, benchmark: &Benchmark) -> FitReport {
    let pairs = [
        (FitMetric::Iq, metrics.iq, benchmark.iq),
        (FitMetric::Reliability, metrics.reliability, benchmark.reliability),
        (FitMetric::Sjt, metrics.sjt, benchmark.sjt),
    ];

    let coefficient: f64 = pairs
        .iter()
        .map(|(metric, actual, target)| closeness(*actual, *target, metric.scale_max()))
        .sum::<f64>()
        / pairs.len() as f64;
    let fit_percentage = (coefficient * 100.0).round().clamp(0.0, 100.0) as u8;

    let gaps = pairs
        .iter()
        .map(|(metric, actual, target)| MetricGap {
            metric: *metric,
            actual: *actual,
            target: *target,
            gap: actual - target,
            target_marker_pct: (target / metric.scale_max() * 100.0).clamp(0.0, 100.0),
        })
        .collect();

    FitReport {
        fit_percentage,
        gaps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn benchmark(iq: f64, reliability: f64, sjt: f64) -> Benchmark {
        Benchmark {
            iq,
            reliability,
            sjt,
            hexaco: BTreeMap::new(),
        }
    }

    #[test]
    fn identical_profile_is_full_fit() {
        let report = calculate_fit(
            &FitMetrics {
                iq: 8.0,
                reliability: 70.0,
                sjt: 6.0,
            },
            &benchmark(8.0, 70.0, 6.0),
        );
        assert_eq!(report.fit_percentage, 100);
        assert!(report.gaps.iter().all(|gap| gap.gap == 0.0));
    }

    #[test]
    fn maximal_deviation_contributes_nothing() {
        let report = calculate_fit(
            &FitMetrics {
                iq: 0.0,
                reliability: 50.0,
                sjt: 4.0,
            },
            &benchmark(12.0, 50.0, 4.0),
        );
        // (0 + 1 + 1) / 3
        assert_eq!(report.fit_percentage, 67);
    }

    #[test]
    fn deviation_beyond_scale_is_clamped_not_negative() {
        let report = calculate_fit(
            &FitMetrics {
                iq: 30.0,
                reliability: 0.0,
                sjt: 0.0,
            },
            &benchmark(0.0, 100.0, 8.0),
        );
        assert_eq!(report.fit_percentage, 0);
    }

    #[test]
    fn above_and_below_target_penalise_equally() {
        let target = benchmark(6.0, 60.0, 4.0);
        let above = calculate_fit(
            &FitMetrics {
                iq: 9.0,
                reliability: 60.0,
                sjt: 4.0,
            },
            &target,
        );
        let below = calculate_fit(
            &FitMetrics {
                iq: 3.0,
                reliability: 60.0,
                sjt: 4.0,
            },
            &target,
        );
        assert_eq!(above.fit_percentage, below.fit_percentage);
        assert_eq!(above.gaps[0].gap, 3.0);
        assert_eq!(below.gaps[0].gap, -3.0);
    }

    #[test]
    fn hexaco_targets_do_not_move_fit() {
        let metrics = FitMetrics {
            iq: 6.0,
            reliability: 60.0,
            sjt: 4.0,
        };
        let plain = benchmark(6.0, 60.0, 4.0);
        let mut with_hexaco = plain.clone();
        with_hexaco.hexaco.insert(HexacoFactor::C, 90.0);

        assert_eq!(
            calculate_fit(&metrics, &plain),
            calculate_fit(&metrics, &with_hexaco)
        );
    }

    #[test]
    fn gap_is_unclamped_and_marker_tracks_target() {
        let report = calculate_fit(
            &FitMetrics {
                iq: 12.0,
                reliability: 0.0,
                sjt: 8.0,
            },
            &benchmark(3.0, 75.0, 2.0),
        );
        assert_eq!(report.gaps[1].gap, -75.0);
        assert_eq!(report.gaps[1].target_marker_pct, 75.0);
        assert_eq!(report.gaps[0].target_marker_pct, 25.0);
    }

    #[test]
    fn validate_rejects_out_of_range_targets() {
        assert!(benchmark(6.0, 60.0, 4.0).validate().is_ok());
        assert!(benchmark(13.0, 60.0, 4.0).validate().is_err());
        assert!(benchmark(6.0, -1.0, 4.0).validate().is_err());
        assert!(benchmark(6.0, 60.0, f64::NAN).validate().is_err());

        let mut hexaco = benchmark(6.0, 60.0, 4.0);
        hexaco.hexaco.insert(HexacoFactor::O, 120.0);
        let err = hexaco.validate().expect_err("factor target too high");
        assert!(err.to_string().contains("Openness"));
    }
}
