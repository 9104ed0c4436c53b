//! formguard validation core
//!
//! Pure Rust submit-time validation for HTML forms: every field marked
//! required must be non-empty, and numeric fields must hold a number.
//! Used by the WASM bindings, and testable without a browser through the
//! [`FormHandle`], [`SubmitEvent`] and [`Notifier`] traits.

pub mod config;
pub mod failure;
pub mod field;
pub mod form;
pub mod numeric;
pub mod result;
pub mod validator;

// Re-export the public surface
pub use config::ValidatorConfig;
pub use failure::{FailureKind, ValidationFailure};
pub use field::Field;
pub use form::{FormHandle, Notifier, SubmitEvent};
pub use numeric::is_numeric_literal;
pub use result::{ValidationResult, ALERT_HEADER};
pub use validator::{FormValidator, SubmitOutcome};
