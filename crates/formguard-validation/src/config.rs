// File: src/config.rs
// Purpose: Validator configuration

use serde::{Deserialize, Serialize};

/// Validator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorConfig {
    /// Control types whose value must parse as a number (case-insensitive)
    #[serde(default = "default_numeric_types")]
    pub numeric_types: Vec<String>,
}

fn default_numeric_types() -> Vec<String> {
    vec!["number".to_string()]
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            numeric_types: default_numeric_types(),
        }
    }
}

impl ValidatorConfig {
    pub fn is_numeric_type(&self, input_type: &str) -> bool {
        self.numeric_types
            .iter()
            .any(|t| t.eq_ignore_ascii_case(input_type))
    }
}
