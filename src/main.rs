use clap::{Args, Parser, Subcommand};
use golden_keywords::config::ScoringConfig;
use golden_keywords::fallback::{fallback_seed, generate_fallback_keywords};
use golden_keywords::input::{parse_annotations, parse_keywords};
use golden_keywords::{analyze, format_number, KeywordReport, RawKeyword};
use rand::{rngs::StdRng, SeedableRng};
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "golden-keywords", about = "Keyword opportunity ranking")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Score, rank and group a batch of provider keywords
    Rank(RankArgs),
    /// Print the synthetic fallback batch for a seed phrase
    Fallback(FallbackArgs),
    /// Write the default configuration as TOML
    InitConfig(InitConfigArgs),
}

#[derive(Args, Debug, Clone, Default)]
struct RankArgs {
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(long)]
    phrase: Option<String>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    annotations: Option<PathBuf>,
    #[arg(long)]
    top: Option<usize>,
    #[arg(long)]
    json: bool,
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct FallbackArgs {
    #[arg(long)]
    phrase: String,
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug, Clone)]
struct InitConfigArgs {
    #[arg(long, default_value = "config/keywords.toml")]
    path: PathBuf,
}

fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Rank(RankArgs::default()));

    match command {
        Command::Rank(args) => run_rank(args),
        Command::Fallback(args) => run_fallback(args),
        Command::InitConfig(args) => run_init_config(args),
    }
}

fn run_rank(args: RankArgs) -> Result<(), String> {
    let (mut config, config_path) = ScoringConfig::load(args.config)?;
    if let Some(path) = config_path.as_ref().filter(|path| path.exists()) {
        info!(path = %path.display(), "loaded scoring config");
    }
    if let Some(top) = args.top {
        config.annotation.top_n = top;
    }
    if let Some(seed) = args.seed {
        config.fallback.seed = Some(seed);
    }

    let mut keywords = read_keywords(args.input.as_deref())?;
    if keywords.is_empty() {
        let phrase = args
            .phrase
            .as_deref()
            .map(str::trim)
            .filter(|phrase| !phrase.is_empty())
            .ok_or_else(|| "no keywords supplied: pass --input, pipe JSON or set --phrase".to_string())?;
        let seed = config.fallback.seed.unwrap_or_else(|| fallback_seed(phrase));
        warn!(phrase, seed, "no provider keywords, using synthetic fallback set");
        let mut rng = StdRng::seed_from_u64(seed);
        keywords = generate_fallback_keywords(phrase, &mut rng);
    }
    info!(count = keywords.len(), "scoring keywords");

    let annotations = match args.annotations.as_deref() {
        Some(path) => parse_annotations(&read_file(path)?)?,
        None => Default::default(),
    };

    let report = analyze(&keywords, &config, |keyword| {
        annotations.get(keyword.keyword()).cloned()
    });

    if args.json {
        let payload = serde_json::to_string_pretty(&report)
            .map_err(|err| format!("failed to serialize report: {}", err))?;
        println!("{}", payload);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn run_fallback(args: FallbackArgs) -> Result<(), String> {
    let phrase = args.phrase.trim();
    if phrase.is_empty() {
        return Err("missing seed phrase".to_string());
    }
    let seed = args.seed.unwrap_or_else(|| fallback_seed(phrase));
    let mut rng = StdRng::seed_from_u64(seed);
    let keywords = generate_fallback_keywords(phrase, &mut rng);
    let payload = serde_json::to_string_pretty(&keywords)
        .map_err(|err| format!("failed to serialize keywords: {}", err))?;
    println!("{}", payload);
    Ok(())
}

fn run_init_config(args: InitConfigArgs) -> Result<(), String> {
    ScoringConfig::default().write(&args.path)?;
    info!(path = %args.path.display(), "wrote default config");
    Ok(())
}

fn print_report(report: &KeywordReport) {
    let stats = &report.stats;
    println!(
        "Keywords: {} | golden {} | high value {} | low competition {} | avg golden score {}",
        stats.total,
        stats.golden_count,
        stats.high_value_count,
        stats.low_competition_count,
        stats.average_golden_score
    );
    println!(
        "Total index: {} | avg mobile index: {} | long-tail opportunities: {} | low-competition share: {}%",
        format_number(stats.total_index),
        format_number(stats.average_mobile_index),
        format_number(stats.total_long_tail),
        stats.low_code_share
    );

    for (bucket, keywords) in report.groups.iter() {
        if keywords.is_empty() {
            continue;
        }
        println!("\n{} ({}):", bucket.label(), keywords.len());
        for keyword in keywords {
            println!(
                "- {} | golden {} | value {} | competition {} | {}",
                keyword.keyword(),
                keyword.golden_score,
                keyword.value_score,
                keyword.competition_level.label(),
                keyword.recommendation_reason
            );
        }
    }

    let annotated: Vec<_> = report
        .keywords
        .iter()
        .filter_map(|entry| entry.ai_analysis.as_ref().map(|text| (entry, text)))
        .collect();
    if !annotated.is_empty() {
        println!("\nAnalysis:");
        for (entry, text) in annotated {
            println!("- {}: {}", entry.keyword.keyword(), text);
        }
    }
}

fn read_keywords(path: Option<&Path>) -> Result<Vec<RawKeyword>, String> {
    if let Some(path) = path {
        return parse_keywords(&read_file(path)?);
    }

    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(Vec::new());
    }
    let mut buffer = String::new();
    stdin
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed reading stdin: {}", err))?;
    parse_keywords(&buffer)
}

fn read_file(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path)
        .map_err(|err| format!("failed to read {}: {}", path.display(), err))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
