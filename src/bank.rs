//! Question bank model and source loader.
//!
//! The bank is a single JSON document fetched exactly once per run, either
//! a bare array of question records or an object wrapping that array under
//! a `questions` field. Records keep whatever extra fields the bank author
//! added; we only read the ones we know.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, info};

use crate::errors::LoadError;

/// Question category. `code` questions show a source snippet and ask for
/// its output; everything else is prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Aptitude,
    Code,
}

/// One question record, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuestionRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    /// Non-empty means multiple-choice; empty means free-text.
    #[serde(default, deserialize_with = "scalar_seq")]
    pub options: Vec<String>,
    #[serde(default, deserialize_with = "scalar_opt")]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "scalar_opt")]
    pub expected_output: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl QuestionRecord {
    /// The prompt body: the code snippet for code questions, the prose
    /// question otherwise, falling back to whichever is present.
    pub fn prompt(&self) -> &str {
        let (primary, fallback) = match self.kind {
            QuestionKind::Code => (&self.code, &self.question),
            QuestionKind::Aptitude => (&self.question, &self.code),
        };
        primary
            .as_deref()
            .or(fallback.as_deref())
            .unwrap_or_default()
    }

    /// The authoritative correct value: `answer` first, then
    /// `expected_output`. This is the only place the precedence lives —
    /// scoring, review, and the report all go through here.
    pub fn canonical_answer(&self) -> Option<&str> {
        self.answer.as_deref().or(self.expected_output.as_deref())
    }

    pub fn is_multiple_choice(&self) -> bool {
        !self.options.is_empty()
    }
}

/// Banks in the wild carry answers and options as strings, numbers, or
/// booleans; comparisons are string comparisons, so stringify scalars on
/// the way in and drop anything structured.
fn value_to_string(v: Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn scalar_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(deserializer)?;
    Ok(v.and_then(value_to_string))
}

fn scalar_seq<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(v.unwrap_or_default()
        .into_iter()
        .filter_map(value_to_string)
        .collect())
}

/// Where the bank document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankSource {
    File(PathBuf),
    Url(String),
}

impl BankSource {
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            BankSource::Url(location.to_string())
        } else {
            BankSource::File(PathBuf::from(location))
        }
    }

    /// Human-readable location for error messages.
    pub fn location(&self) -> String {
        match self {
            BankSource::File(p) => p.display().to_string(),
            BankSource::Url(u) => u.clone(),
        }
    }
}

/// Fetch and normalize the question bank. Called exactly once per run;
/// any failure is terminal — there is no retry.
pub async fn load_bank(source: &BankSource) -> Result<Vec<QuestionRecord>, LoadError> {
    let location = source.location();
    debug!(%location, "fetching question bank");

    let text = match source {
        BankSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| LoadError::Unreachable {
                    location: location.clone(),
                    message: e.to_string(),
                })?
        }
        BankSource::Url(url) => {
            let response = reqwest::get(url).await.map_err(|e| LoadError::Unreachable {
                location: location.clone(),
                message: e.to_string(),
            })?;
            let status = response.status();
            if !status.is_success() {
                return Err(LoadError::HttpStatus {
                    location,
                    status: status.as_u16(),
                });
            }
            response.text().await.map_err(|e| LoadError::Unreachable {
                location: location.clone(),
                message: e.to_string(),
            })?
        }
    };

    let bank = parse_bank(&text, &location)?;
    info!(count = bank.len(), %location, "question bank loaded");
    Ok(bank)
}

/// Normalize the two accepted document shapes into a flat ordered
/// sequence: an object with a `questions` array, or a bare array.
pub fn parse_bank(text: &str, location: &str) -> Result<Vec<QuestionRecord>, LoadError> {
    let doc: Value = serde_json::from_str(text).map_err(|e| LoadError::Parse {
        location: location.to_string(),
        message: e.to_string(),
    })?;

    let items = match doc {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("questions") {
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(LoadError::Shape {
                    location: location.to_string(),
                    message: "the questions field is not an array".to_string(),
                })
            }
            None => {
                return Err(LoadError::Shape {
                    location: location.to_string(),
                    message: "expected a bare array or an object with a questions field"
                        .to_string(),
                })
            }
        },
        _ => {
            return Err(LoadError::Shape {
                location: location.to_string(),
                message: "expected a JSON array or object".to_string(),
            })
        }
    };

    let mut seen = HashSet::with_capacity(items.len());
    let mut bank = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let record: QuestionRecord =
            serde_json::from_value(item).map_err(|e| LoadError::Shape {
                location: location.to_string(),
                message: format!("question #{}: {}", index, e),
            })?;
        if !seen.insert(record.id.clone()) {
            return Err(LoadError::DuplicateId {
                location: location.to_string(),
                id: record.id,
            });
        }
        bank.push(record);
    }

    Ok(bank)
}
