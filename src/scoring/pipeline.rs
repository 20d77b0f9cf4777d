use std::cmp::Ordering;

use crate::scoring::{
    CompetitionClassifier, GoldenScorer, MetricNormalizer, ReasonGenerator, ValueScorer,
};
use crate::{RawKeyword, ScoredKeyword};

#[derive(Debug, Clone, Default)]
pub struct ScoringPipeline {
    normalizer: MetricNormalizer,
    value_scorer: ValueScorer,
    classifier: CompetitionClassifier,
    golden_scorer: GoldenScorer,
    reason_generator: ReasonGenerator,
}

impl ScoringPipeline {
    pub fn new(
        normalizer: MetricNormalizer,
        value_scorer: ValueScorer,
        classifier: CompetitionClassifier,
        golden_scorer: GoldenScorer,
        reason_generator: ReasonGenerator,
    ) -> Self {
        Self {
            normalizer,
            value_scorer,
            classifier,
            golden_scorer,
            reason_generator,
        }
    }

    /// Derives every computed field from the raw metrics alone.
    pub fn score(&self, keyword: &RawKeyword) -> ScoredKeyword {
        let metrics = self.normalizer.normalize(keyword);
        let value_score = self.value_scorer.score(&metrics);
        let competition_level = self
            .classifier
            .classify(keyword.bidword_kwc, keyword.bidword_company_count);
        let golden_score = self.golden_scorer.score(value_score, competition_level);
        let recommendation_reason = self.reason_generator.reason(
            keyword,
            value_score,
            competition_level,
            golden_score,
        );

        ScoredKeyword {
            raw: keyword.clone(),
            value_score,
            competition_level,
            golden_score,
            recommendation_reason,
        }
    }

    pub fn score_all(&self, keywords: &[RawKeyword]) -> Vec<ScoredKeyword> {
        keywords.iter().map(|keyword| self.score(keyword)).collect()
    }

    pub fn score_and_rank(&self, keywords: &[RawKeyword]) -> Vec<ScoredKeyword> {
        let mut scored = self.score_all(keywords);
        rank_keywords(&mut scored);
        scored
    }
}

/// Golden score descending, then competition severity ascending, then value
/// score descending.
pub fn compare_keywords(a: &ScoredKeyword, b: &ScoredKeyword) -> Ordering {
    b.golden_score
        .cmp(&a.golden_score)
        .then_with(|| a.competition_level.cmp(&b.competition_level))
        .then_with(|| b.value_score.cmp(&a.value_score))
}

/// Stable: records equal on all three keys keep their input order.
pub fn rank_keywords(keywords: &mut [ScoredKeyword]) {
    keywords.sort_by(compare_keywords);
}
