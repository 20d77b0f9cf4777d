use serde::{Deserialize, Serialize};

use crate::ScoredKeyword;

pub const DEFAULT_ANNOTATION_TOP_N: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationConfig {
    pub top_n: usize,
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_ANNOTATION_TOP_N,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedKeyword {
    #[serde(flatten)]
    pub keyword: ScoredKeyword,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<String>,
}

/// Attaches narrative text to the first `top_n` ranked keywords.
///
/// The annotator is only consulted for that prefix. When it yields nothing
/// usable the keyword's own recommendation reason is used instead, so every
/// annotated entry carries non-empty text.
pub fn annotate_top<F>(
    ranked: &[ScoredKeyword],
    top_n: usize,
    mut annotator: F,
) -> Vec<AnnotatedKeyword>
where
    F: FnMut(&ScoredKeyword) -> Option<String>,
{
    ranked
        .iter()
        .enumerate()
        .map(|(position, keyword)| {
            let ai_analysis = if position < top_n {
                let text = annotator(keyword)
                    .map(|text| text.trim().to_string())
                    .filter(|text| !text.is_empty())
                    .unwrap_or_else(|| keyword.recommendation_reason.clone());
                Some(text)
            } else {
                None
            };
            AnnotatedKeyword {
                keyword: keyword.clone(),
                ai_analysis,
            }
        })
        .collect()
}

pub fn no_annotations(_: &ScoredKeyword) -> Option<String> {
    None
}
