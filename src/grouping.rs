use serde::{Deserialize, Serialize};

use crate::{CompetitionLevel, ScoredKeyword};

pub const GOLDEN_BUCKET_SCORE: u32 = 70;
pub const HIGH_VALUE_BUCKET_SCORE: u32 = 70;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingThresholds {
    pub golden: u32,
    pub high_value: u32,
}

impl Default for GroupingThresholds {
    fn default() -> Self {
        Self {
            golden: GOLDEN_BUCKET_SCORE,
            high_value: HIGH_VALUE_BUCKET_SCORE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Golden,
    HighValue,
    LowCompetition,
    Others,
}

impl Bucket {
    pub fn label(self) -> &'static str {
        match self {
            Bucket::Golden => "Golden",
            Bucket::HighValue => "High value",
            Bucket::LowCompetition => "Low competition",
            Bucket::Others => "Others",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordGroups {
    pub golden: Vec<ScoredKeyword>,
    pub high_value: Vec<ScoredKeyword>,
    pub low_competition: Vec<ScoredKeyword>,
    pub others: Vec<ScoredKeyword>,
}

impl KeywordGroups {
    pub fn len(&self) -> usize {
        self.golden.len() + self.high_value.len() + self.low_competition.len() + self.others.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn bucket(&self, bucket: Bucket) -> &[ScoredKeyword] {
        match bucket {
            Bucket::Golden => &self.golden,
            Bucket::HighValue => &self.high_value,
            Bucket::LowCompetition => &self.low_competition,
            Bucket::Others => &self.others,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Bucket, &[ScoredKeyword])> {
        [
            Bucket::Golden,
            Bucket::HighValue,
            Bucket::LowCompetition,
            Bucket::Others,
        ]
        .into_iter()
        .map(move |bucket| (bucket, self.bucket(bucket)))
    }
}

#[derive(Debug, Clone)]
pub struct Grouper {
    thresholds: GroupingThresholds,
}

impl Grouper {
    pub fn new(thresholds: GroupingThresholds) -> Self {
        Self { thresholds }
    }

    pub fn bucket_of(&self, keyword: &ScoredKeyword) -> Bucket {
        if keyword.golden_score >= self.thresholds.golden {
            return Bucket::Golden;
        }
        if keyword.value_score >= self.thresholds.high_value {
            return Bucket::HighValue;
        }
        if keyword.competition_level == CompetitionLevel::Low {
            return Bucket::LowCompetition;
        }
        Bucket::Others
    }

    /// Each record lands in exactly one bucket, in the order it was given.
    pub fn group(&self, ranked: &[ScoredKeyword]) -> KeywordGroups {
        let mut groups = KeywordGroups::default();
        for keyword in ranked {
            let target = match self.bucket_of(keyword) {
                Bucket::Golden => &mut groups.golden,
                Bucket::HighValue => &mut groups.high_value,
                Bucket::LowCompetition => &mut groups.low_competition,
                Bucket::Others => &mut groups.others,
            };
            target.push(keyword.clone());
        }
        groups
    }
}

impl Default for Grouper {
    fn default() -> Self {
        Self::new(GroupingThresholds::default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordStats {
    pub total: usize,
    pub golden_count: usize,
    pub high_value_count: usize,
    pub low_competition_count: usize,
    pub average_golden_score: u32,
    pub total_index: u64,
    pub average_mobile_index: u64,
    pub total_long_tail: u64,
    /// Percentage of records the provider itself rated low-competition.
    pub low_code_share: u32,
}

pub fn summarize(
    keywords: &[ScoredKeyword],
    groups: &KeywordGroups,
    thresholds: &GroupingThresholds,
) -> KeywordStats {
    if keywords.is_empty() {
        return KeywordStats::default();
    }

    let total = keywords.len();
    let high_value_count = keywords
        .iter()
        .filter(|keyword| keyword.value_score >= thresholds.high_value)
        .count();
    let low_competition_count = keywords
        .iter()
        .filter(|keyword| keyword.competition_level == CompetitionLevel::Low)
        .count();
    let golden_sum: u64 = keywords.iter().map(|keyword| keyword.golden_score as u64).sum();
    let mobile_sum = saturating_total(keywords.iter().map(|keyword| keyword.raw.mobile_index));
    let low_code = keywords
        .iter()
        .filter(|keyword| keyword.raw.bidword_kwc == crate::scoring::competition::KWC_LOW)
        .count();

    KeywordStats {
        total,
        golden_count: groups.golden.len(),
        high_value_count,
        low_competition_count,
        average_golden_score: rounded_mean(golden_sum as f64, total) as u32,
        total_index: saturating_total(keywords.iter().map(|keyword| keyword.raw.index)),
        average_mobile_index: rounded_mean(mobile_sum as f64, total) as u64,
        total_long_tail: saturating_total(
            keywords
                .iter()
                .map(|keyword| keyword.raw.long_keyword_count),
        ),
        low_code_share: rounded_mean(low_code as f64 * 100.0, total) as u32,
    }
}

fn saturating_total(values: impl Iterator<Item = u64>) -> u64 {
    values.fold(0u64, |acc, value| acc.saturating_add(value))
}

fn rounded_mean(sum: f64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    (sum / count as f64).round().max(0.0)
}
