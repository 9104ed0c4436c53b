// File: src/validator.rs
// Purpose: Required-field validation and the submit-time check built on it

use tracing::{debug, info, warn};

use crate::config::ValidatorConfig;
use crate::failure::ValidationFailure;
use crate::field::Field;
use crate::form::{FormHandle, Notifier, SubmitEvent};
use crate::numeric::is_numeric_literal;
use crate::result::ValidationResult;

/// What happened to a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No failures; the default submission goes ahead
    Proceed,
    /// Submission was cancelled and the user was notified
    Blocked(ValidationResult),
}

impl SubmitOutcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self, SubmitOutcome::Blocked(_))
    }
}

/// Checks required fields when a form is submitted
///
/// Stateless between calls: the same field states always produce the same
/// [`ValidationResult`].
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    config: ValidatorConfig,
}

impl FormValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Check a single field, ignoring whether it is marked required
    pub fn check_field(&self, field: &Field) -> Result<(), ValidationFailure> {
        if field.is_empty() {
            return Err(ValidationFailure::missing(&field.name));
        }

        if self.config.is_numeric_type(&field.input_type) && !is_numeric_literal(&field.value) {
            return Err(ValidationFailure::invalid_number(&field.name));
        }

        Ok(())
    }

    /// Validate every required field, collecting all failures in order
    pub fn validate_fields<'a, I>(&self, fields: I) -> ValidationResult
    where
        I: IntoIterator<Item = &'a Field>,
    {
        let failures = fields
            .into_iter()
            .filter(|field| field.required)
            .filter_map(|field| self.check_field(field).err())
            .inspect(|failure| {
                debug!(field = %failure.field, kind = ?failure.kind, "required field rejected");
            })
            .collect();

        ValidationResult::from_failures(failures)
    }

    /// Validate the current state of a form
    pub fn validate<F: FormHandle + ?Sized>(&self, form: &F) -> ValidationResult {
        self.validate_fields(&form.fields())
    }

    /// Run the submit-time check
    ///
    /// On failure the event is cancelled first, then the user is shown the
    /// consolidated message.
    pub fn handle_submit<E, N>(&self, event: &E, notifier: &N) -> SubmitOutcome
    where
        E: SubmitEvent + ?Sized,
        N: Notifier + ?Sized,
    {
        let Some(form) = event.form() else {
            warn!("submit event target is not a form, letting it through");
            return SubmitOutcome::Proceed;
        };

        let result = self.validate(&form);
        let Some(message) = result.alert_message() else {
            return SubmitOutcome::Proceed;
        };

        event.cancel();
        info!(failures = result.len(), "form submission blocked");
        notifier.notify(&message);

        SubmitOutcome::Blocked(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::FailureKind;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_empty_value_is_missing_for_any_type() {
        let validator = FormValidator::default();

        for input_type in ["text", "number", "email", "select-one"] {
            let failure = validator
                .check_field(&Field::required("f", input_type, ""))
                .unwrap_err();
            assert_eq!(failure.kind, FailureKind::Missing);
            assert_eq!(failure.to_string(), "f is required.");
        }
    }

    #[rstest]
    #[case("42")]
    #[case("3.14")]
    #[case("-1")]
    fn test_valid_numbers_pass(#[case] value: &str) {
        let validator = FormValidator::default();
        assert!(validator
            .check_field(&Field::required("age", "number", value))
            .is_ok());
    }

    #[test]
    fn test_non_numeric_number_field_fails() {
        let validator = FormValidator::default();
        let failure = validator
            .check_field(&Field::required("age", "number", "abc"))
            .unwrap_err();

        assert_eq!(failure.kind, FailureKind::InvalidNumber);
        assert_eq!(failure.to_string(), "age is required.");
    }

    #[test]
    fn test_text_field_accepts_any_non_empty_value() {
        let validator = FormValidator::default();
        assert!(validator
            .check_field(&Field::required("name", "text", "abc"))
            .is_ok());
    }

    #[test]
    fn test_custom_numeric_types() {
        let validator = FormValidator::new(ValidatorConfig {
            numeric_types: vec!["range".to_string()],
        });

        assert!(validator
            .check_field(&Field::required("level", "range", "high"))
            .is_err());
        assert!(validator
            .check_field(&Field::required("age", "number", "abc"))
            .is_ok());
    }

    #[test]
    fn test_optional_fields_are_skipped() {
        let validator = FormValidator::default();
        let fields = vec![
            Field::optional("nickname", "text", ""),
            Field::required("email", "email", ""),
        ];

        assert_eq!(validator.validate(&fields).messages(), vec!["email is required."]);
    }

    #[test]
    fn test_failures_keep_document_order() {
        let validator = FormValidator::default();
        let fields = vec![
            Field::required("zip", "text", ""),
            Field::required("age", "number", "x"),
            Field::required("city", "text", ""),
        ];

        assert_eq!(
            validator.validate(&fields).messages(),
            vec!["zip is required.", "age is required.", "city is required."]
        );
    }
}
