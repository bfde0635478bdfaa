// List-shaped fields (technologies, features, tags, gallery) reach the
// client in whatever shape the backend happened to store: a native array,
// a JSON-encoded array string, a comma separated string, or a lone scalar.
// Shape resolution happens once here, at ingress, so call sites never
// re-sniff the wire format.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

static QUOTED_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]*)""#).expect("quoted segment pattern is valid"));

/// Wire representation of a list-shaped field of unknown encoding.
///
/// Deserialized untagged, so a field declared as `RawList` accepts every
/// shape the backend is known to emit. `normalize` resolves any variant to
/// the canonical ordered list of trimmed, non-empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawList {
    /// Native JSON array; elements may themselves be any JSON value.
    Items(Vec<Value>),
    /// String payload: JSON-encoded array, delimited list, or single value.
    Text(String),
    /// Anything else the backend sends (null, number, object).
    Scalar(Value),
}

impl Default for RawList {
    fn default() -> Self {
        RawList::Items(Vec::new())
    }
}

impl RawList {
    /// Resolve to the canonical list form.
    ///
    /// Total: never fails, always returns a (possibly empty) list. Source
    /// order is preserved and duplicates are kept.
    pub fn normalize(&self) -> Vec<String> {
        match self {
            RawList::Items(items) => normalize_items(items),
            RawList::Text(text) => normalize_text(text),
            RawList::Scalar(value) => match value {
                Value::Null | Value::Object(_) => Vec::new(),
                Value::String(s) => normalize_text(s),
                other => split_delimited(&other.to_string()),
            },
        }
    }
}

impl From<Vec<String>> for RawList {
    fn from(items: Vec<String>) -> Self {
        RawList::Items(items.into_iter().map(Value::String).collect())
    }
}

/// Deserialize a loosely-typed list field straight to its canonical form.
///
/// Use with `#[serde(default, deserialize_with = "normalized_list")]` on
/// `Vec<String>` fields so every payload resolves through the same rules.
pub fn normalized_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawList>::deserialize(deserializer)?;
    Ok(raw.map(|r| r.normalize()).unwrap_or_default())
}

fn normalize_items(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .map(element_text)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// String form of an array element. JSON strings are taken verbatim,
/// everything else renders compact (numbers as digits, objects as JSON).
fn element_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn normalize_text(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    // JSON-shaped input gets a strict parse first. A parsed array feeds the
    // element rules; any other JSON value is not a list and yields nothing.
    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        return match serde_json::from_str::<Value>(trimmed) {
            Ok(Value::Array(items)) => normalize_items(&items),
            Ok(_) => Vec::new(),
            Err(_) => {
                // Malformed array artifacts like ["React""Node.js"] still
                // carry their entries between double quotes.
                let quoted = extract_quoted(trimmed);
                if quoted.is_empty() {
                    split_delimited(trimmed)
                } else {
                    quoted
                }
            }
        };
    }

    split_delimited(trimmed)
}

fn extract_quoted(text: &str) -> Vec<String> {
    QUOTED_SEGMENT
        .captures_iter(text)
        .map(|caps| caps[1].trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split on commas when present, otherwise on whitespace runs.
fn split_delimited(text: &str) -> Vec<String> {
    let parts: Vec<&str> = if text.contains(',') {
        text.split(',').collect()
    } else {
        text.split_whitespace().collect()
    };

    parts
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
