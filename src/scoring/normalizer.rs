use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::RawKeyword;

pub const TRAFFIC_REFERENCE: f64 = 2000.0;
pub const MOBILE_REFERENCE: f64 = 1500.0;
pub const LONG_TAIL_REFERENCE: f64 = 50_000.0;
pub const PRICE_REFERENCE: f64 = 10.0;

pub const MAX_SUB_SCORE: f64 = 100.0;

static RE_PRICE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+\.?[0-9]*").unwrap());

/// Reference points treated as the "maximum observed" value of each metric.
/// A metric at or above its reference saturates at a sub-score of 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    pub traffic_reference: f64,
    pub mobile_reference: f64,
    pub long_tail_reference: f64,
    pub price_reference: f64,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            traffic_reference: TRAFFIC_REFERENCE,
            mobile_reference: MOBILE_REFERENCE,
            long_tail_reference: LONG_TAIL_REFERENCE,
            price_reference: PRICE_REFERENCE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricScores {
    pub traffic: f64,
    pub mobile: f64,
    pub long_tail: f64,
    pub commercial: f64,
}

#[derive(Debug, Clone)]
pub struct MetricNormalizer {
    config: NormalizerConfig,
}

impl MetricNormalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    pub fn normalize(&self, keyword: &RawKeyword) -> MetricScores {
        MetricScores {
            traffic: sub_score(keyword.index as f64, self.config.traffic_reference),
            mobile: sub_score(keyword.mobile_index as f64, self.config.mobile_reference),
            long_tail: sub_score(
                keyword.long_keyword_count as f64,
                self.config.long_tail_reference,
            ),
            commercial: sub_score(
                average_price(&keyword.sem_price),
                self.config.price_reference,
            ),
        }
    }
}

impl Default for MetricNormalizer {
    fn default() -> Self {
        Self::new(NormalizerConfig::default())
    }
}

/// Mean of the first two numbers found in a `"<low>~<high>"` price range.
///
/// A single number is used for both ends; text without any number yields 0.
pub fn average_price(sem_price: &str) -> f64 {
    let mut numbers = RE_PRICE
        .find_iter(sem_price)
        .filter_map(|found| found.as_str().parse::<f64>().ok());

    match (numbers.next(), numbers.next()) {
        (Some(low), Some(high)) => (low + high) / 2.0,
        (Some(only), None) => only,
        _ => 0.0,
    }
}

fn sub_score(value: f64, reference: f64) -> f64 {
    if reference <= 0.0 || value.is_nan() {
        return 0.0;
    }
    (value / reference * MAX_SUB_SCORE).max(0.0).min(MAX_SUB_SCORE)
}
