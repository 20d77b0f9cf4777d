use golden_keywords::config::ScoringConfig;
use golden_keywords::grouping::{GOLDEN_BUCKET_SCORE, HIGH_VALUE_BUCKET_SCORE};
use golden_keywords::scoring::golden::{HIGH_DISCOUNT, LOW_DISCOUNT, MEDIUM_DISCOUNT};
use golden_keywords::scoring::normalizer::{
    LONG_TAIL_REFERENCE, MOBILE_REFERENCE, PRICE_REFERENCE, TRAFFIC_REFERENCE,
};
use golden_keywords::scoring::value::{
    COMMERCIAL_WEIGHT, LONG_TAIL_WEIGHT, MOBILE_WEIGHT, TRAFFIC_WEIGHT,
};
use golden_keywords::scoring::CompetitionDiscounts;
use golden_keywords::CompetitionLevel;

#[test]
fn calibration_constants_match_documented_values() {
    assert!((TRAFFIC_REFERENCE - 2000.0).abs() < 1e-6);
    assert!((MOBILE_REFERENCE - 1500.0).abs() < 1e-6);
    assert!((LONG_TAIL_REFERENCE - 50_000.0).abs() < 1e-6);
    assert!((PRICE_REFERENCE - 10.0).abs() < 1e-6);

    assert!((TRAFFIC_WEIGHT - 0.4).abs() < 1e-6);
    assert!((MOBILE_WEIGHT - 0.3).abs() < 1e-6);
    assert!((LONG_TAIL_WEIGHT - 0.2).abs() < 1e-6);
    assert!((COMMERCIAL_WEIGHT - 0.1).abs() < 1e-6);

    assert!((LOW_DISCOUNT - 1.0).abs() < 1e-6);
    assert!((MEDIUM_DISCOUNT - 0.7).abs() < 1e-6);
    assert!((HIGH_DISCOUNT - 0.4).abs() < 1e-6);

    assert_eq!(GOLDEN_BUCKET_SCORE, 70);
    assert_eq!(HIGH_VALUE_BUCKET_SCORE, 70);
}

#[test]
fn weights_sum_to_one() {
    let total = TRAFFIC_WEIGHT + MOBILE_WEIGHT + LONG_TAIL_WEIGHT + COMMERCIAL_WEIGHT;
    assert!((total - 1.0).abs() < 1e-6);
    assert!((ScoringConfig::default().weights.total() - 1.0).abs() < 1e-6);
}

#[test]
fn discounts_do_not_increase_with_competition() {
    let discounts = CompetitionDiscounts::default();
    let factors: Vec<f64> = [CompetitionLevel::Low, CompetitionLevel::Medium, CompetitionLevel::High]
        .into_iter()
        .map(|level| discounts.factor(level))
        .collect();

    assert!(factors.iter().all(|factor| (0.0..=1.0).contains(factor)));
    assert!(factors.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn default_config_is_valid() {
    let config = ScoringConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.annotation.top_n, 10);
    assert!(config.fallback.seed.is_none());
}

#[test]
fn validation_rejects_broken_calibrations() {
    let mut config = ScoringConfig::default();
    config.weights.traffic = 0.5;
    assert!(config.validate().unwrap_err().contains("sum to 1.0"));

    let mut config = ScoringConfig::default();
    config.discounts.medium = 1.2;
    assert!(config.validate().is_err());

    let mut config = ScoringConfig::default();
    config.discounts.high = 0.9;
    assert!(config.validate().unwrap_err().contains("must not increase"));

    let mut config = ScoringConfig::default();
    config.normalizer.price_reference = 0.0;
    assert!(config.validate().unwrap_err().contains("price_reference"));
}

#[test]
fn partial_toml_keeps_remaining_defaults() {
    let config = ScoringConfig::from_toml(
        r#"
[annotation]
top_n = 3

[competition]
low_max_companies = 8
"#,
    )
    .unwrap();

    assert_eq!(config.annotation.top_n, 3);
    assert_eq!(config.competition.low_max_companies, 8);
    assert_eq!(config.competition.medium_max_companies, 10);
    assert!((config.discounts.medium - 0.7).abs() < 1e-6);
    assert!(config.validate().is_ok());
}

#[test]
fn written_config_reads_back() {
    let dir = std::env::temp_dir().join(format!("golden-keywords-config-{}", std::process::id()));
    let path = dir.join("keywords.toml");

    let mut config = ScoringConfig::default();
    config.grouping.golden = 75;
    config.fallback.seed = Some(42);
    config.write(&path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let loaded = ScoringConfig::from_toml(&contents).unwrap();
    let _ = std::fs::remove_dir_all(&dir);

    assert_eq!(loaded.grouping.golden, 75);
    assert_eq!(loaded.fallback.seed, Some(42));
    assert!((loaded.weights.mobile - 0.3).abs() < 1e-6);
}

#[test]
fn missing_config_file_falls_back_to_defaults() {
    let path = std::env::temp_dir().join("golden-keywords-does-not-exist.toml");
    let (config, resolved) = ScoringConfig::load(Some(path.clone())).unwrap();

    assert_eq!(resolved, Some(path));
    assert_eq!(config.grouping.golden, 70);
}
