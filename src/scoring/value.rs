use serde::{Deserialize, Serialize};

use crate::scoring::MetricScores;

pub const TRAFFIC_WEIGHT: f64 = 0.4;
pub const MOBILE_WEIGHT: f64 = 0.3;
pub const LONG_TAIL_WEIGHT: f64 = 0.2;
pub const COMMERCIAL_WEIGHT: f64 = 0.1;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueWeights {
    pub traffic: f64,
    pub mobile: f64,
    pub long_tail: f64,
    pub commercial: f64,
}

impl Default for ValueWeights {
    fn default() -> Self {
        Self {
            traffic: TRAFFIC_WEIGHT,
            mobile: MOBILE_WEIGHT,
            long_tail: LONG_TAIL_WEIGHT,
            commercial: COMMERCIAL_WEIGHT,
        }
    }
}

impl ValueWeights {
    pub fn total(&self) -> f64 {
        self.traffic + self.mobile + self.long_tail + self.commercial
    }
}

#[derive(Debug, Clone)]
pub struct ValueScorer {
    weights: ValueWeights,
}

impl ValueScorer {
    pub fn new(weights: ValueWeights) -> Self {
        Self { weights }
    }

    /// Weighted composite of the sub-scores, rounded half-up to 0..=100.
    pub fn score(&self, metrics: &MetricScores) -> u32 {
        let mut score = 0.0;

        score += metrics.traffic * self.weights.traffic;
        score += metrics.mobile * self.weights.mobile;
        score += metrics.long_tail * self.weights.long_tail;
        score += metrics.commercial * self.weights.commercial;

        round_score(score)
    }
}

impl Default for ValueScorer {
    fn default() -> Self {
        Self::new(ValueWeights::default())
    }
}

pub(crate) fn round_score(value: f64) -> u32 {
    if value.is_nan() {
        return 0;
    }
    value.round().max(0.0).min(100.0) as u32
}
