//! formguard WASM
//!
//! WebAssembly bindings that attach submit-time validation to HTML forms.
//! Page setup code calls `attach(form)` once; from then on every submit
//! checks the form's required fields and cancels the submission with an
//! alert when any of them is empty or not a number.

mod dom;
mod error;
mod options;

use formguard_validation::{is_numeric_literal, Field, FormValidator};
use tracing::debug;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlFormElement};

pub use dom::{AlertNotifier, DomForm, DomSubmit};
pub use error::AttachError;
pub use options::AttachOptions;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Attach validation to a form with default options
///
/// # Example (JavaScript)
/// ```javascript
/// attach(document.getElementById('predictionForm'));
/// ```
#[wasm_bindgen]
pub fn attach(form: &HtmlFormElement) -> Result<(), JsValue> {
    install(form, AttachOptions::default())?;
    Ok(())
}

/// Attach validation to a form with custom options
#[wasm_bindgen(js_name = attachWithOptions)]
pub fn attach_with_options(form: &HtmlFormElement, options: JsValue) -> Result<(), JsValue> {
    let options = AttachOptions::from_js(options)?;
    install(form, options)?;
    Ok(())
}

/// Look up a form by element id and attach validation to it
#[wasm_bindgen(js_name = attachById)]
pub fn attach_by_id(id: &str) -> Result<(), JsValue> {
    let form = find_form(id)?;
    install(&form, AttachOptions::default())?;
    Ok(())
}

/// Validate a form without cancelling anything
///
/// # Returns
/// Array of messages (empty if valid)
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(form: &HtmlFormElement, options: JsValue) -> Result<JsValue, JsValue> {
    let options = AttachOptions::from_js(options)?;
    let validator = FormValidator::new(options.validator_config());
    let result = validator.validate(&DomForm::new(form.clone(), &options.required_selector));

    Ok(serde_wasm_bindgen::to_value(&result.messages())?)
}

/// Validate plain field objects
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = validateFields([
///     { name: 'age', value: 'abc', type: 'number', required: true },
/// ]);
/// // ["age is required."]
/// ```
#[wasm_bindgen(js_name = validateFields)]
pub fn validate_fields(fields: JsValue, options: JsValue) -> Result<JsValue, JsValue> {
    let fields: Vec<Field> = serde_wasm_bindgen::from_value(fields)
        .map_err(|e| AttachError::InvalidFields(e.to_string()))?;
    let options = AttachOptions::from_js(options)?;

    let result = FormValidator::new(options.validator_config()).validate(&fields);
    Ok(serde_wasm_bindgen::to_value(&result.messages())?)
}

/// Quick numeric check, same rule numeric fields are held to
#[wasm_bindgen(js_name = isNumeric)]
pub fn is_numeric_js(value: &str) -> bool {
    is_numeric_literal(value)
}

fn find_form(id: &str) -> Result<HtmlFormElement, AttachError> {
    let document = web_sys::window()
        .ok_or(AttachError::NoWindow)?
        .document()
        .ok_or(AttachError::NoDocument)?;

    document
        .get_element_by_id(id)
        .ok_or_else(|| AttachError::FormNotFound(id.to_string()))?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| AttachError::NotAForm(id.to_string()))
}

/// Register the submit listener; it stays installed for the page lifetime
fn install(form: &HtmlFormElement, options: AttachOptions) -> Result<(), AttachError> {
    form.query_selector_all(&options.required_selector)
        .map_err(|_| AttachError::InvalidSelector(options.required_selector.clone()))?;

    let window = web_sys::window().ok_or(AttachError::NoWindow)?;
    let notifier = AlertNotifier::new(window);
    let validator = FormValidator::new(options.validator_config());
    let selector = options.required_selector;

    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let submit = DomSubmit::new(&event, &selector);
        validator.handle_submit(&submit, &notifier);
    });

    form.add_event_listener_with_callback("submit", handler.as_ref().unchecked_ref())
        .map_err(|err| AttachError::Listener(error::describe(&err)))?;
    handler.forget();

    debug!(form = %form.id(), "submit validation attached");
    Ok(())
}
