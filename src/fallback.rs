use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::RawKeyword;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    /// Pins the synthetic keyword set; derived from the seed phrase when unset.
    pub seed: Option<u64>,
}

/// Half-open range `[start, start + span)`.
#[derive(Debug, Clone, Copy)]
struct Span<T> {
    start: T,
    span: T,
}

const fn span<T>(start: T, span: T) -> Span<T> {
    Span { start, span }
}

struct Template {
    suffix: &'static str,
    index: Span<u64>,
    mobile_index: Span<u64>,
    haosou_index: Span<u64>,
    long_keyword_count: Span<u64>,
    bidword_company_count: Span<u64>,
    bidword_pcpv: Span<u64>,
    bidword_wisepv: Span<u64>,
    price_low: Span<f64>,
    price_high: Span<f64>,
}

const TEMPLATES: [Template; 3] = [
    Template {
        suffix: " recommendations",
        index: span(100, 2000),
        mobile_index: span(50, 1500),
        haosou_index: span(30, 1000),
        long_keyword_count: span(1000, 50_000),
        bidword_company_count: span(1, 20),
        bidword_pcpv: span(50, 500),
        bidword_wisepv: span(100, 1000),
        price_low: span(0.5, 5.0),
        price_high: span(5.0, 15.0),
    },
    Template {
        suffix: " methods",
        index: span(80, 1800),
        mobile_index: span(40, 1200),
        haosou_index: span(25, 900),
        long_keyword_count: span(800, 45_000),
        bidword_company_count: span(1, 15),
        bidword_pcpv: span(30, 400),
        bidword_wisepv: span(80, 800),
        price_low: span(0.3, 4.0),
        price_high: span(3.0, 12.0),
    },
    Template {
        suffix: " tips",
        index: span(60, 1500),
        mobile_index: span(30, 1000),
        haosou_index: span(20, 800),
        long_keyword_count: span(600, 40_000),
        bidword_company_count: span(1, 12),
        bidword_pcpv: span(25, 350),
        bidword_wisepv: span(60, 700),
        price_low: span(0.2, 3.0),
        price_high: span(2.0, 10.0),
    },
];

/// Synthetic stand-in records for a seed phrase the provider knows nothing about.
pub fn generate_fallback_keywords<R: Rng>(
    seed_phrase: &str,
    rng: &mut R,
) -> Vec<RawKeyword> {
    let phrase = seed_phrase.trim();
    TEMPLATES
        .iter()
        .map(|template| {
            let price_low = sample_f64(rng, template.price_low);
            let price_high = sample_f64(rng, template.price_high);
            RawKeyword {
                keyword: format!("{}{}", phrase, template.suffix),
                index: sample_u64(rng, template.index),
                mobile_index: sample_u64(rng, template.mobile_index),
                haosou_index: sample_u64(rng, template.haosou_index),
                long_keyword_count: sample_u64(rng, template.long_keyword_count),
                bidword_company_count: sample_u64(rng, template.bidword_company_count),
                bidword_kwc: rng.gen_range(1..=3),
                bidword_pcpv: sample_u64(rng, template.bidword_pcpv),
                bidword_wisepv: sample_u64(rng, template.bidword_wisepv),
                sem_price: format!("{:.2}~{:.2}", price_low, price_high),
            }
        })
        .collect()
}

/// Stable seed for a phrase so repeated fallbacks for it are identical.
pub fn fallback_seed(seed_phrase: &str) -> u64 {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    hasher.update(seed_phrase.trim().as_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

fn sample_u64<R: Rng>(rng: &mut R, range: Span<u64>) -> u64 {
    rng.gen_range(range.start..range.start + range.span)
}

fn sample_f64<R: Rng>(rng: &mut R, range: Span<f64>) -> f64 {
    rng.gen_range(range.start..range.start + range.span)
}
