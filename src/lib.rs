pub mod annotation;
pub mod config;
pub mod fallback;
pub mod grouping;
pub mod input;
pub mod scoring;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::annotation::{annotate_top, AnnotatedKeyword};
use crate::config::ScoringConfig;
use crate::grouping::{summarize, Grouper, KeywordGroups, KeywordStats};
use crate::scoring::{
    CompetitionClassifier, GoldenScorer, MetricNormalizer, ReasonGenerator, ScoringPipeline,
    ValueScorer,
};

/// A keyword as delivered by the data provider, before scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawKeyword {
    pub keyword: String,
    #[serde(default)]
    pub index: u64,
    #[serde(default)]
    pub mobile_index: u64,
    #[serde(default)]
    pub haosou_index: u64,
    #[serde(default)]
    pub long_keyword_count: u64,
    #[serde(default)]
    pub bidword_company_count: u64,
    /// Provider competitiveness code: 1 high, 2 medium, 3 low.
    #[serde(default)]
    pub bidword_kwc: u8,
    #[serde(default)]
    pub bidword_pcpv: u64,
    #[serde(default)]
    pub bidword_wisepv: u64,
    /// Paid-click price range, `"<low>~<high>"`.
    #[serde(default)]
    pub sem_price: String,
}

/// Ordered by severity: `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionLevel {
    Low,
    Medium,
    High,
}

impl CompetitionLevel {
    pub fn label(self) -> &'static str {
        match self {
            CompetitionLevel::Low => "low",
            CompetitionLevel::Medium => "medium",
            CompetitionLevel::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredKeyword {
    #[serde(flatten)]
    pub raw: RawKeyword,
    pub value_score: u32,
    pub competition_level: CompetitionLevel,
    pub golden_score: u32,
    pub recommendation_reason: String,
}

impl ScoredKeyword {
    pub fn keyword(&self) -> &str {
        &self.raw.keyword
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordReport {
    pub keywords: Vec<AnnotatedKeyword>,
    pub groups: KeywordGroups,
    pub stats: KeywordStats,
}

pub fn build_pipeline(config: &ScoringConfig) -> ScoringPipeline {
    ScoringPipeline::new(
        MetricNormalizer::new(config.normalizer.clone()),
        ValueScorer::new(config.weights.clone()),
        CompetitionClassifier::new(config.competition.clone()),
        GoldenScorer::new(config.discounts.clone()),
        ReasonGenerator::new(config.reason.clone()),
    )
}

/// Scores, ranks, groups and summarizes one batch, then annotates its top
/// entries.
pub fn analyze<F>(raw: &[RawKeyword], config: &ScoringConfig, annotator: F) -> KeywordReport
where
    F: FnMut(&ScoredKeyword) -> Option<String>,
{
    let pipeline = build_pipeline(config);
    let ranked = pipeline.score_and_rank(raw);

    let grouper = Grouper::new(config.grouping.clone());
    let groups = grouper.group(&ranked);
    let stats = summarize(&ranked, &groups, &config.grouping);
    debug!(
        total = stats.total,
        golden = stats.golden_count,
        high_value = groups.high_value.len(),
        low_competition = groups.low_competition.len(),
        others = groups.others.len(),
        "ranked keyword batch"
    );

    let keywords = annotate_top(&ranked, config.annotation.top_n, annotator);

    KeywordReport {
        keywords,
        groups,
        stats,
    }
}

pub fn format_number(value: u64) -> String {
    let mut chars: Vec<char> = value.to_string().chars().collect();
    let mut result = String::new();
    let mut count = 0usize;

    while let Some(ch) = chars.pop() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(ch);
        count += 1;
    }

    result.chars().rev().collect()
}
