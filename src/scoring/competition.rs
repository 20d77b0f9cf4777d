use serde::{Deserialize, Serialize};

use crate::CompetitionLevel;

/// Provider competitiveness codes carried in `bidword_kwc`.
pub const KWC_HIGH: u8 = 1;
pub const KWC_MEDIUM: u8 = 2;
pub const KWC_LOW: u8 = 3;

pub const LOW_MAX_COMPANIES: u64 = 5;
pub const MEDIUM_MAX_COMPANIES: u64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompetitionConfig {
    /// Most advertisers a low-code keyword may have and still count as low.
    pub low_max_companies: u64,
    /// Most advertisers a medium-code keyword may have and still count as medium.
    pub medium_max_companies: u64,
}

impl Default for CompetitionConfig {
    fn default() -> Self {
        Self {
            low_max_companies: LOW_MAX_COMPANIES,
            medium_max_companies: MEDIUM_MAX_COMPANIES,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CompetitionClassifier {
    config: CompetitionConfig,
}

impl CompetitionClassifier {
    pub fn new(config: CompetitionConfig) -> Self {
        Self { config }
    }

    // Advertiser density downgrades a low-code market to medium. Code 1 and any
    // unknown code fall through to high.
    pub fn classify(&self, bidword_kwc: u8, bidword_company_count: u64) -> CompetitionLevel {
        if bidword_kwc == KWC_LOW && bidword_company_count <= self.config.low_max_companies {
            return CompetitionLevel::Low;
        }
        if bidword_kwc == KWC_LOW {
            return CompetitionLevel::Medium;
        }
        if bidword_kwc == KWC_MEDIUM
            && bidword_company_count <= self.config.medium_max_companies
        {
            return CompetitionLevel::Medium;
        }
        CompetitionLevel::High
    }
}

impl Default for CompetitionClassifier {
    fn default() -> Self {
        Self::new(CompetitionConfig::default())
    }
}
