//! Search job message models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::PageRequest;

/// Field metadata returned alongside messages and records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "fieldType", default)]
    pub field_type: String,
    #[serde(rename = "keyField", default)]
    pub key_field: bool,
}

/// One raw log message.
///
/// Decoded from the API's `{"map": {...}}` envelope. The four standard
/// fields are lifted out; every other key in `map` lands in `fields`.
/// Serializes back to the flat `_messagetime`/`_sourcehost`/... shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "MessageEnvelope")]
pub struct Message {
    #[serde(rename = "_messagetime")]
    pub message_time: String,
    #[serde(rename = "_sourcehost")]
    pub source_host: String,
    #[serde(rename = "_sourcename")]
    pub source_name: String,
    #[serde(rename = "_raw")]
    pub raw: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

#[derive(Deserialize)]
struct MessageEnvelope {
    #[serde(default)]
    map: BTreeMap<String, Value>,
}

impl From<MessageEnvelope> for Message {
    fn from(envelope: MessageEnvelope) -> Self {
        let mut fields = envelope.map;
        let mut take = |key: &str| fields.remove(key).map(value_as_string).unwrap_or_default();

        let message_time = take("_messagetime");
        let source_host = take("_sourcehost");
        let source_name = take("_sourcename");
        let raw = take("_raw");

        Self {
            message_time,
            source_host,
            source_name,
            raw,
            fields,
        }
    }
}

// The API sends every map value as a string; tolerate numbers anyway.
fn value_as_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Raw body of `GET {jobs}/{id}/messages`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub messages: Vec<Message>,
}

/// One fetched page of messages and the request that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct MessagePage {
    pub request: PageRequest,
    pub fields: Vec<FieldDescriptor>,
    pub messages: Vec<Message>,
}

impl MessagePage {
    pub fn new(request: PageRequest, response: MessagesResponse) -> Self {
        Self {
            request,
            fields: response.fields,
            messages: response.messages,
        }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Cursor for the next page, or `None` once `total` messages have been seen.
    pub fn next_request(&self, total: u64) -> Option<PageRequest> {
        self.request.next(self.messages.len(), total)
    }
}
