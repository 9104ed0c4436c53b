// File: src/options.rs
// Purpose: Options accepted from JavaScript when attaching a validator

use formguard_validation::ValidatorConfig;
use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::AttachError;

/// Attach options
///
/// # Example (JavaScript)
/// ```javascript
/// attachWithOptions(form, {
///     requiredSelector: '[required]',
///     numericTypes: ['number'],
/// });
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachOptions {
    /// Selector for the fields checked on submit (default: "[required]")
    #[serde(default = "default_required_selector")]
    pub required_selector: String,

    #[serde(default = "default_numeric_types")]
    pub numeric_types: Vec<String>,
}

fn default_required_selector() -> String {
    "[required]".to_string()
}

fn default_numeric_types() -> Vec<String> {
    ValidatorConfig::default().numeric_types
}

impl Default for AttachOptions {
    fn default() -> Self {
        Self {
            required_selector: default_required_selector(),
            numeric_types: default_numeric_types(),
        }
    }
}

impl AttachOptions {
    /// Read options from a JS object; `undefined` and `null` mean defaults
    pub fn from_js(value: JsValue) -> Result<Self, AttachError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }

        serde_wasm_bindgen::from_value(value)
            .map_err(|e| AttachError::InvalidOptions(e.to_string()))
    }

    pub fn validator_config(&self) -> ValidatorConfig {
        ValidatorConfig {
            numeric_types: self.numeric_types.clone(),
        }
    }
}
