//! Package manifest (package.json) access
//!
//! The manifest is kept as an untyped JSON object: the entry resolver looks up
//! arbitrary, user-configured field names such as `sass` or `main.scss`, so
//! there is no fixed schema to deserialize into.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parsed package manifest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageManifest {
    fields: Map<String, Value>,
}

impl PackageManifest {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Manifest from parsed JSON; non-object JSON yields an empty manifest
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(fields) => Self::new(fields.clone()),
            _ => Self::default(),
        }
    }

    /// Value of `field` when it is a non-empty string
    ///
    /// Field names are matched literally, so `main.scss` is a top-level key,
    /// not a nested path.
    pub fn string_field(&self, field: &str) -> Option<&str> {
        match self.fields.get(field) {
            Some(Value::String(value)) if !value.is_empty() => Some(value),
            _ => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.string_field("name")
    }
}
