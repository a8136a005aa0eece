use crate::Result as CoreErrorResult;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A comment as posted to and echoed back by `/create_comment/`.
///
/// The payload is opaque to the client; only JSON objects are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Comment(Map<String, Value>);

impl Comment {
    pub fn new(payload: Map<String, Value>) -> Self {
        Self(payload)
    }

    /// Parse from a JSON value; anything but an object is rejected.
    #[track_caller]
    pub fn from_value(value: Value) -> CoreErrorResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Server-assigned identifier, once the comment has been created.
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn payload(&self) -> &Map<String, Value> {
        &self.0
    }
}
