//! JSON bodies returned by the search endpoints.

use serde::Deserialize;
use serde::Deserializer;
use serde_json::Value;

use crate::model::Event;

/// Body of `GET /search`.
#[derive(Debug, Deserialize)]
pub(crate) struct CreateSearchBody {
    pub(crate) rsid: Rsid,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Rsid {
    #[serde(deserialize_with = "string_or_number")]
    pub(crate) id: String,
}

/// Body of `GET /events`.
#[derive(Debug, Deserialize)]
pub(crate) struct EventsBody {
    #[serde(default)]
    pub(crate) total_events: u64,
    #[serde(default)]
    pub(crate) page: u64,
    #[serde(default)]
    pub(crate) events: Vec<Event>,
}

/// Body of `GET /events/iterate`.
#[derive(Debug, Deserialize)]
pub(crate) struct IterateBody {
    #[serde(default)]
    pub(crate) events: Vec<Event>,
    #[serde(default)]
    pub(crate) next: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}
