//! Event type

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// A single event returned by a search.
///
/// The shape of an event is defined by whoever logged it, so it is kept as
/// an opaque JSON value with a few accessors for the fields the API adds.
///
/// # Example
///
/// ```
/// use loggly_lib::model::Event;
/// use serde_json::json;
///
/// let event = Event::from(json!({
///     "logmsg": "{\"user\":\"tobi\",\"action\":\"login\"}",
///     "timestamp": 1700000000000u64,
/// }));
///
/// assert_eq!(event.get("timestamp"), Some(&json!(1700000000000u64)));
/// let parsed = event.parsed_logmsg().unwrap().unwrap();
/// assert_eq!(parsed["user"], "tobi");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Event(Value);

impl Event {
    /// Returns a field of the event, if the event is an object holding it.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Returns the raw log message.
    pub fn logmsg(&self) -> Option<&str> {
        self.get("logmsg").and_then(Value::as_str)
    }

    /// Parses the raw log message as JSON.
    ///
    /// Returns `None` when the event has no `logmsg` string.
    pub fn parsed_logmsg(&self) -> Option<Result<Value, serde_json::Error>> {
        self.logmsg().map(serde_json::from_str)
    }

    /// Returns the underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the event and returns the underlying JSON value.
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for Event {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<Event> for Value {
    fn from(event: Event) -> Self {
        event.0
    }
}
