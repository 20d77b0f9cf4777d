use serde::Deserialize;
use std::collections::HashMap;
use tracing::warn;

use crate::RawKeyword;

#[derive(Deserialize)]
struct ProviderResponse {
    #[serde(default)]
    errcode: Option<serde_json::Value>,
    #[serde(default)]
    errmsg: Option<String>,
    #[serde(default)]
    data: Option<ProviderData>,
}

#[derive(Deserialize)]
struct ProviderData {
    #[serde(default)]
    word: Option<Vec<RawKeyword>>,
}

/// Parses raw keyword records from a bare JSON array or a provider envelope.
///
/// Objects must carry `errcode` or `data`; any other shape is rejected rather
/// than read as an empty batch.
pub fn parse_keywords(payload: &str) -> Result<Vec<RawKeyword>, String> {
    if payload.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: serde_json::Value = serde_json::from_str(payload)
        .map_err(|err| format!("failed to parse keyword payload: {}", err))?;

    let records = match value {
        serde_json::Value::Array(_) => serde_json::from_value::<Vec<RawKeyword>>(value)
            .map_err(|err| format!("invalid keyword record: {}", err))?,
        serde_json::Value::Object(fields) => {
            if !fields.contains_key("errcode") && !fields.contains_key("data") {
                return Err(
                    "unrecognized keyword payload: expected an array or an object with errcode or data"
                        .to_string(),
                );
            }
            let response: ProviderResponse =
                serde_json::from_value(serde_json::Value::Object(fields))
                    .map_err(|err| format!("invalid provider response: {}", err))?;
            if let Some(code) = response.errcode.as_ref() {
                if !is_success_code(code) {
                    let message = response.errmsg.unwrap_or_default();
                    return Err(format!("keyword provider error {}: {}", code, message.trim()));
                }
            }
            response.data.and_then(|data| data.word).unwrap_or_default()
        }
        other => {
            return Err(format!(
                "unrecognized keyword payload: expected an array or an object, got {}",
                json_kind(&other)
            ))
        }
    };

    Ok(records
        .into_iter()
        .filter_map(|mut record| {
            let trimmed = record.keyword.trim();
            if trimmed.is_empty() {
                warn!("dropping keyword record with empty phrase");
                return None;
            }
            record.keyword = trimmed.to_string();
            Some(record)
        })
        .collect())
}

/// Parses a JSON object mapping keyword phrases to annotation text.
pub fn parse_annotations(payload: &str) -> Result<HashMap<String, String>, String> {
    if payload.trim().is_empty() {
        return Ok(HashMap::new());
    }
    serde_json::from_str(payload).map_err(|err| format!("failed to parse annotations: {}", err))
}

fn is_success_code(code: &serde_json::Value) -> bool {
    match code {
        serde_json::Value::String(value) => value.trim() == "0",
        serde_json::Value::Number(value) => value.as_i64() == Some(0),
        serde_json::Value::Null => true,
        _ => false,
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
