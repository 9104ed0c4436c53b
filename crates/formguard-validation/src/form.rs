// File: src/form.rs
// Purpose: Capabilities the validator needs from a form, its submit event and the user

use crate::field::Field;

/// Anything that can enumerate the fields to check at submit time
///
/// Implementations return fields in document order. The browser adapter
/// returns the elements matched by its required-field selector; in-memory
/// forms return every field and let the validator skip non-required ones.
pub trait FormHandle {
    fn fields(&self) -> Vec<Field>;
}

impl FormHandle for [Field] {
    fn fields(&self) -> Vec<Field> {
        self.to_vec()
    }
}

impl FormHandle for Vec<Field> {
    fn fields(&self) -> Vec<Field> {
        self.clone()
    }
}

impl<F: FormHandle + ?Sized> FormHandle for &F {
    fn fields(&self) -> Vec<Field> {
        (**self).fields()
    }
}

/// A cancellable form submission
pub trait SubmitEvent {
    type Form: FormHandle;

    /// The form being submitted, if the event target is one
    fn form(&self) -> Option<Self::Form>;

    /// Suppress the default submission
    fn cancel(&self);
}

/// Surface used to tell the user why submission was blocked
pub trait Notifier {
    fn notify(&self, message: &str);
}
