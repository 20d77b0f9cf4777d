pub mod competition;
pub mod golden;
pub mod normalizer;
pub mod pipeline;
pub mod reason;
pub mod value;

pub use competition::{CompetitionClassifier, CompetitionConfig};
pub use golden::{CompetitionDiscounts, GoldenScorer};
pub use normalizer::{average_price, MetricNormalizer, MetricScores, NormalizerConfig};
pub use pipeline::{compare_keywords, rank_keywords, ScoringPipeline};
pub use reason::{ReasonGenerator, ReasonThresholds};
pub use value::{ValueScorer, ValueWeights};
