// Session files: the saved state of one writing session.
//
// A session is `{version, timestamp, formId, poemText, analysis}` as pretty
// JSON. `analysis` is whatever the feedback service returned last and is
// kept as opaque JSON; this crate never interprets it.
//
// Import is lenient about everything except the two fields a session is
// useless without: a non-empty `formId` and a string `poemText`.

use crate::error::{VerseError, VerseResult};
use crate::types::FormInfo;
use crate::FormCatalog;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Current session file version.
pub const SESSION_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoetrySession {
    pub version: u32,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub form_id: String,
    pub poem_text: String,
    pub analysis: Option<Value>,
}

/// Shape accepted on import, before the required fields are checked.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSession {
    #[serde(default)]
    version: Option<Value>,
    #[serde(default)]
    timestamp: Option<Value>,
    #[serde(default)]
    form_id: Option<Value>,
    #[serde(default)]
    poem_text: Option<Value>,
    #[serde(default)]
    analysis: Option<Value>,
}

impl PoetrySession {
    pub fn new(form_id: &str, poem_text: &str, timestamp_ms: i64) -> Self {
        PoetrySession {
            version: SESSION_VERSION,
            timestamp: timestamp_ms,
            form_id: form_id.to_string(),
            poem_text: poem_text.to_string(),
            analysis: None,
        }
    }

    /// Parse a session file.
    pub fn from_json(json: &str) -> VerseResult<Self> {
        let raw: RawSession = serde_json::from_str(json)?;

        let form_id = match raw.form_id {
            Some(Value::String(id)) if !id.is_empty() => id,
            _ => return Err(VerseError::InvalidSession("missing formId".to_string())),
        };
        let poem_text = match raw.poem_text {
            Some(Value::String(text)) => text,
            _ => {
                return Err(VerseError::InvalidSession(
                    "poemText must be a string".to_string(),
                ));
            }
        };

        // Anything that is not a usable number reads as 0.
        let version = raw
            .version
            .as_ref()
            .and_then(Value::as_u64)
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(0);
        let timestamp = raw
            .timestamp
            .as_ref()
            .and_then(|t| t.as_i64().or_else(|| t.as_f64().map(|ms| ms as i64)))
            .unwrap_or(0);

        let analysis = raw.analysis.filter(|a| !a.is_null());
        tracing::debug!(
            form_id = %form_id,
            version,
            has_analysis = analysis.is_some(),
            "imported session"
        );

        Ok(PoetrySession {
            version,
            timestamp,
            form_id,
            poem_text,
            analysis,
        })
    }

    /// Two-space pretty JSON, as written to disk.
    pub fn to_json_pretty(&self) -> VerseResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Download name, `versecraft-session-YYYY-MM-DD.json` (UTC date of the
    /// timestamp; out-of-range timestamps fall back to the epoch).
    pub fn export_file_name(&self) -> String {
        let date = DateTime::<Utc>::from_timestamp_millis(self.timestamp).unwrap_or_default();
        format!("versecraft-session-{}.json", date.format("%Y-%m-%d"))
    }

    /// The catalog entry for this session's form. `None` means the caller
    /// should keep whatever form is currently selected.
    pub fn form<'a>(&self, catalog: &'a FormCatalog) -> Option<&'a FormInfo> {
        catalog.form(&self.form_id)
    }
}
