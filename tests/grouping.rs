use golden_keywords::annotation::no_annotations;
use golden_keywords::config::ScoringConfig;
use golden_keywords::grouping::{summarize, Bucket, Grouper, GroupingThresholds, KeywordStats};
use golden_keywords::scoring::rank_keywords;
use golden_keywords::{analyze, CompetitionLevel, RawKeyword, ScoredKeyword};

fn raw(keyword: &str, index: u64, mobile_index: u64, bidword_kwc: u8) -> RawKeyword {
    RawKeyword {
        keyword: keyword.to_string(),
        index,
        mobile_index,
        haosou_index: 0,
        long_keyword_count: 1000,
        bidword_company_count: 1,
        bidword_kwc,
        bidword_pcpv: 0,
        bidword_wisepv: 0,
        sem_price: "1.00~2.00".to_string(),
    }
}

fn scored(keyword: &str, golden_score: u32, level: CompetitionLevel, value_score: u32) -> ScoredKeyword {
    ScoredKeyword {
        raw: raw(keyword, 0, 0, 1),
        value_score,
        competition_level: level,
        golden_score,
        recommendation_reason: format!("reason for {}", keyword),
    }
}

fn names(keywords: &[ScoredKeyword]) -> Vec<&str> {
    keywords.iter().map(|keyword| keyword.keyword()).collect()
}

fn sample_batch() -> Vec<ScoredKeyword> {
    let mut keywords = vec![
        scored("others-a", 30, CompetitionLevel::High, 60),
        scored("golden-a", 100, CompetitionLevel::Low, 100),
        scored("high-value-a", 40, CompetitionLevel::High, 100),
        scored("low-comp-a", 50, CompetitionLevel::Low, 50),
        scored("golden-b", 70, CompetitionLevel::Medium, 100),
        scored("high-value-b", 49, CompetitionLevel::Medium, 70),
        scored("others-b", 10, CompetitionLevel::Medium, 15),
        scored("low-comp-b", 20, CompetitionLevel::Low, 20),
    ];
    rank_keywords(&mut keywords);
    keywords
}

#[test]
fn bucket_of_follows_precedence() {
    let grouper = Grouper::default();

    assert_eq!(grouper.bucket_of(&scored("g", 70, CompetitionLevel::Medium, 100)), Bucket::Golden);
    assert_eq!(grouper.bucket_of(&scored("g", 69, CompetitionLevel::Low, 69)), Bucket::LowCompetition);
    assert_eq!(grouper.bucket_of(&scored("h", 40, CompetitionLevel::Low, 70)), Bucket::HighValue);
    assert_eq!(grouper.bucket_of(&scored("o", 40, CompetitionLevel::Medium, 69)), Bucket::Others);
}

#[test]
fn grouping_is_a_partition_in_rank_order() {
    let ranked = sample_batch();
    let groups = Grouper::default().group(&ranked);

    assert_eq!(groups.len(), ranked.len());
    assert_eq!(names(&groups.golden), vec!["golden-a", "golden-b"]);
    assert_eq!(names(&groups.high_value), vec!["high-value-b", "high-value-a"]);
    assert_eq!(names(&groups.low_competition), vec!["low-comp-a", "low-comp-b"]);
    assert_eq!(names(&groups.others), vec!["others-a", "others-b"]);

    for keyword in &ranked {
        let hits = groups
            .iter()
            .filter(|(_, bucket)| bucket.iter().any(|entry| entry.keyword() == keyword.keyword()))
            .count();
        assert_eq!(hits, 1, "{} must be in exactly one bucket", keyword.keyword());
    }
}

#[test]
fn grouping_empty_batch_yields_empty_buckets() {
    let groups = Grouper::default().group(&[]);

    assert!(groups.is_empty());
    assert!(groups.golden.is_empty());
    assert!(groups.high_value.is_empty());
    assert!(groups.low_competition.is_empty());
    assert!(groups.others.is_empty());
}

#[test]
fn stats_over_empty_batch_are_zero() {
    let groups = Grouper::default().group(&[]);
    let stats = summarize(&[], &groups, &GroupingThresholds::default());

    assert_eq!(stats, KeywordStats::default());
    assert_eq!(stats.average_golden_score, 0);
}

#[test]
fn stats_count_and_average() {
    let ranked = vec![
        scored("a", 100, CompetitionLevel::Low, 100),
        scored("b", 40, CompetitionLevel::High, 100),
        scored("c", 0, CompetitionLevel::Low, 0),
    ];
    let groups = Grouper::default().group(&ranked);
    let stats = summarize(&ranked, &groups, &GroupingThresholds::default());

    assert_eq!(stats.total, 3);
    assert_eq!(stats.golden_count, 1);
    assert_eq!(stats.high_value_count, 2);
    assert_eq!(stats.low_competition_count, 2);
    assert_eq!(stats.average_golden_score, 47);
}

#[test]
fn stats_include_provider_overview_figures() {
    let config = ScoringConfig::default();
    let report = analyze(
        &[raw("one", 1000, 100, 3), raw("two", 500, 201, 1)],
        &config,
        no_annotations,
    );

    assert_eq!(report.stats.total_index, 1500);
    assert_eq!(report.stats.average_mobile_index, 151);
    assert_eq!(report.stats.total_long_tail, 2000);
    assert_eq!(report.stats.low_code_share, 50);
}

#[test]
fn analyze_runs_full_batch() {
    let mut config = ScoringConfig::default();
    config.annotation.top_n = 1;
    let maxed = |keyword: &str, kwc: u8, companies: u64| RawKeyword {
        keyword: keyword.to_string(),
        index: 2000,
        mobile_index: 1500,
        haosou_index: 0,
        long_keyword_count: 50_000,
        bidword_company_count: companies,
        bidword_kwc: kwc,
        bidword_pcpv: 0,
        bidword_wisepv: 0,
        sem_price: "10.00~10.00".to_string(),
    };

    let report = analyze(
        &[maxed("contested", 1, 50), maxed("open", 3, 3)],
        &config,
        no_annotations,
    );

    assert_eq!(report.keywords.len(), 2);
    assert_eq!(report.keywords[0].keyword.keyword(), "open");
    assert_eq!(
        report.keywords[0].ai_analysis.as_deref(),
        Some(report.keywords[0].keyword.recommendation_reason.as_str())
    );
    assert!(report.keywords[1].ai_analysis.is_none());
    assert_eq!(names(&report.groups.golden), vec!["open"]);
    assert_eq!(names(&report.groups.high_value), vec!["contested"]);
    assert_eq!(report.stats.average_golden_score, 70);
}

#[test]
fn report_serializes_bucket_and_level_names() {
    let report = analyze(&[raw("one", 1000, 100, 3)], &ScoringConfig::default(), no_annotations);
    let json = serde_json::to_value(&report).unwrap();

    let groups = json["groups"].as_object().unwrap();
    for key in ["golden", "highValue", "lowCompetition", "others"] {
        assert!(groups.contains_key(key), "missing {}", key);
    }
    assert_eq!(json["keywords"][0]["competition_level"], "low");
    assert_eq!(json["keywords"][0]["keyword"], "one");
}

#[test]
fn stats_totals_saturate_on_huge_metrics() {
    let huge = |keyword: &str| RawKeyword {
        index: u64::MAX,
        mobile_index: u64::MAX,
        long_keyword_count: u64::MAX,
        ..raw(keyword, 0, 0, 1)
    };

    let report = analyze(&[huge("a"), huge("b")], &ScoringConfig::default(), no_annotations);

    assert_eq!(report.stats.total_index, u64::MAX);
    assert_eq!(report.stats.total_long_tail, u64::MAX);
    assert!(report.stats.average_mobile_index > 0);
}
