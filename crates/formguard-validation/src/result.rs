// File: src/result.rs
// Purpose: Ordered outcome of one validation pass

use crate::failure::ValidationFailure;

/// First line of the alert shown when submission is blocked
pub const ALERT_HEADER: &str = "Please fill in the following fields correctly:";

/// Result of validating a form: one failure per failing field, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    failures: Vec<ValidationFailure>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self::default()
    }

    /// Create a result from already collected failures
    pub fn from_failures(failures: Vec<ValidationFailure>) -> Self {
        Self { failures }
    }

    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// One `"<name> is required."` line per failing field
    pub fn messages(&self) -> Vec<String> {
        self.failures.iter().map(ToString::to_string).collect()
    }

    /// Consolidated alert text, or `None` when the form is valid
    pub fn alert_message(&self) -> Option<String> {
        if self.is_valid() {
            return None;
        }

        let mut lines = Vec::with_capacity(self.failures.len() + 1);
        lines.push(ALERT_HEADER.to_string());
        lines.extend(self.messages());
        Some(lines.join("\n"))
    }
}

impl IntoIterator for ValidationResult {
    type Item = ValidationFailure;
    type IntoIter = std::vec::IntoIter<ValidationFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_success_has_no_alert() {
        let result = ValidationResult::success();
        assert!(result.is_valid());
        assert!(result.messages().is_empty());
        assert_eq!(result.alert_message(), None);
    }

    #[test]
    fn test_alert_lists_every_failure() {
        let result = ValidationResult::from_failures(vec![
            ValidationFailure::missing("email"),
            ValidationFailure::invalid_number("age"),
        ]);

        assert_eq!(result.len(), 2);
        assert_eq!(
            result.alert_message().as_deref(),
            Some("Please fill in the following fields correctly:\nemail is required.\nage is required.")
        );
    }
}
