use serde::{Deserialize, Serialize};

use crate::scoring::value::round_score;
use crate::CompetitionLevel;

pub const LOW_DISCOUNT: f64 = 1.0;
pub const MEDIUM_DISCOUNT: f64 = 0.7;
pub const HIGH_DISCOUNT: f64 = 0.4;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompetitionDiscounts {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl Default for CompetitionDiscounts {
    fn default() -> Self {
        Self {
            low: LOW_DISCOUNT,
            medium: MEDIUM_DISCOUNT,
            high: HIGH_DISCOUNT,
        }
    }
}

impl CompetitionDiscounts {
    pub fn factor(&self, level: CompetitionLevel) -> f64 {
        match level {
            CompetitionLevel::Low => self.low,
            CompetitionLevel::Medium => self.medium,
            CompetitionLevel::High => self.high,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GoldenScorer {
    discounts: CompetitionDiscounts,
}

impl GoldenScorer {
    pub fn new(discounts: CompetitionDiscounts) -> Self {
        Self { discounts }
    }

    pub fn discount(&self, level: CompetitionLevel) -> f64 {
        self.discounts.factor(level).clamp(0.0, 1.0)
    }

    /// Never exceeds `value_score`: the factor is clamped to [0, 1].
    pub fn score(&self, value_score: u32, level: CompetitionLevel) -> u32 {
        let golden = round_score(value_score as f64 * self.discount(level));
        golden.min(value_score)
    }
}

impl Default for GoldenScorer {
    fn default() -> Self {
        Self::new(CompetitionDiscounts::default())
    }
}
