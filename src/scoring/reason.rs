use serde::{Deserialize, Serialize};

use crate::{CompetitionLevel, RawKeyword};

pub const GOLDEN_HEADLINE_SCORE: u32 = 80;
pub const QUALITY_HEADLINE_SCORE: u32 = 60;
pub const HIGH_VALUE_DETAIL_SCORE: u32 = 70;
pub const HIGH_TRAFFIC_DETAIL_INDEX: u64 = 1000;
pub const LONG_TAIL_DETAIL_COUNT: u64 = 30_000;

pub const GOLDEN_HEADLINE: &str = "Golden keyword!";
pub const QUALITY_HEADLINE: &str = "Quality keyword";
pub const LOW_COMPETITION_HEADLINE: &str = "Low competition, easy to optimize";
pub const HIGH_TRAFFIC_HEADLINE: &str = "High traffic, requires more effort";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReasonThresholds {
    pub golden_headline: u32,
    pub quality_headline: u32,
    pub high_value: u32,
    pub high_traffic_index: u64,
    pub long_tail_count: u64,
}

impl Default for ReasonThresholds {
    fn default() -> Self {
        Self {
            golden_headline: GOLDEN_HEADLINE_SCORE,
            quality_headline: QUALITY_HEADLINE_SCORE,
            high_value: HIGH_VALUE_DETAIL_SCORE,
            high_traffic_index: HIGH_TRAFFIC_DETAIL_INDEX,
            long_tail_count: LONG_TAIL_DETAIL_COUNT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReasonGenerator {
    thresholds: ReasonThresholds,
}

impl ReasonGenerator {
    pub fn new(thresholds: ReasonThresholds) -> Self {
        Self { thresholds }
    }

    pub fn headline(&self, golden_score: u32, level: CompetitionLevel) -> &'static str {
        if golden_score >= self.thresholds.golden_headline {
            return GOLDEN_HEADLINE;
        }
        if golden_score >= self.thresholds.quality_headline {
            return QUALITY_HEADLINE;
        }
        if level == CompetitionLevel::Low {
            return LOW_COMPETITION_HEADLINE;
        }
        HIGH_TRAFFIC_HEADLINE
    }

    pub fn details(
        &self,
        keyword: &RawKeyword,
        value_score: u32,
        level: CompetitionLevel,
    ) -> Vec<&'static str> {
        let mut details = Vec::new();
        if level == CompetitionLevel::Low {
            details.push("low competition");
        }
        if value_score >= self.thresholds.high_value {
            details.push("high value");
        }
        if keyword.index >= self.thresholds.high_traffic_index {
            details.push("high search volume");
        }
        if keyword.long_keyword_count >= self.thresholds.long_tail_count {
            details.push("many long-tail opportunities");
        }
        details
    }

    pub fn reason(
        &self,
        keyword: &RawKeyword,
        value_score: u32,
        level: CompetitionLevel,
        golden_score: u32,
    ) -> String {
        let headline = self.headline(golden_score, level);
        let details = self.details(keyword, value_score, level);
        if details.is_empty() {
            return headline.to_string();
        }
        format!("{} ({})", headline, details.join(", "))
    }
}

impl Default for ReasonGenerator {
    fn default() -> Self {
        Self::new(ReasonThresholds::default())
    }
}
