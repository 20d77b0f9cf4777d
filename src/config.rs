use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::annotation::AnnotationConfig;
use crate::fallback::FallbackConfig;
use crate::grouping::GroupingThresholds;
use crate::scoring::{
    CompetitionConfig, CompetitionDiscounts, NormalizerConfig, ReasonThresholds, ValueWeights,
};

const WEIGHT_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub normalizer: NormalizerConfig,
    pub weights: ValueWeights,
    pub competition: CompetitionConfig,
    pub discounts: CompetitionDiscounts,
    pub reason: ReasonThresholds,
    pub grouping: GroupingThresholds,
    pub annotation: AnnotationConfig,
    pub fallback: FallbackConfig,
}

impl ScoringConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                Self::from_toml(&contents)?
            } else {
                ScoringConfig::default()
            }
        } else {
            ScoringConfig::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok((config, config_path))
    }

    pub fn from_toml(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|err| format!("failed to parse config: {}", err))
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|err| format!("failed to create config dir: {}", err))?;
            }
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| format!("failed to serialize config: {}", err))?;
        std::fs::write(path, payload)
            .map_err(|err| format!("failed to write config: {}", err))?;
        Ok(())
    }

    /// Rejects calibrations that would break score bounds or ordering.
    pub fn validate(&self) -> Result<(), String> {
        let references = [
            ("traffic_reference", self.normalizer.traffic_reference),
            ("mobile_reference", self.normalizer.mobile_reference),
            ("long_tail_reference", self.normalizer.long_tail_reference),
            ("price_reference", self.normalizer.price_reference),
        ];
        for (name, value) in references {
            if value.is_nan() || value <= 0.0 {
                return Err(format!("normalizer.{} must be positive, got {}", name, value));
            }
        }

        let weights = [
            self.weights.traffic,
            self.weights.mobile,
            self.weights.long_tail,
            self.weights.commercial,
        ];
        if weights.iter().any(|weight| weight.is_nan() || *weight < 0.0) {
            return Err("weights must be non-negative".to_string());
        }
        let total = self.weights.total();
        if (total - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(format!("weights must sum to 1.0, got {}", total));
        }

        let discounts = &self.discounts;
        for (name, value) in [
            ("low", discounts.low),
            ("medium", discounts.medium),
            ("high", discounts.high),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("discounts.{} must be within [0, 1], got {}", name, value));
            }
        }
        if discounts.medium > discounts.low || discounts.high > discounts.medium {
            return Err("discounts must not increase as competition worsens".to_string());
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(top_n) = env::var("KEYWORD_TOP_N") {
            if let Ok(value) = top_n.trim().parse::<usize>() {
                self.annotation.top_n = value;
            }
        }
        if let Ok(seed) = env::var("KEYWORD_FALLBACK_SEED") {
            if let Ok(value) = seed.trim().parse::<u64>() {
                self.fallback.seed = Some(value);
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("KEYWORD_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/keywords.toml")))
}
