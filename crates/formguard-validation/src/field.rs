// File: src/field.rs
// Purpose: Snapshot of a single form control as seen at submit time

use serde::{Deserialize, Serialize};

/// A named input control, read once per submission attempt.
///
/// Deserializes from the `{ name, value, type, required }` shape the
/// JavaScript side sends; absent properties take their empty defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub value: String,

    /// Declared control type ("text", "number", "select-one", ...)
    #[serde(rename = "type", default = "default_input_type")]
    pub input_type: String,

    #[serde(default)]
    pub required: bool,
}

fn default_input_type() -> String {
    "text".to_string()
}

impl Field {
    /// A required field of the given type.
    pub fn required(
        name: impl Into<String>,
        input_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            input_type: input_type.into(),
            required: true,
        }
    }

    /// An optional field of the given type.
    pub fn optional(
        name: impl Into<String>,
        input_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            required: false,
            ..Self::required(name, input_type, value)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}
