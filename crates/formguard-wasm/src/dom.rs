// File: src/dom.rs
// Purpose: Browser DOM adapters for the validator's form, event and notifier traits

use formguard_validation::{Field, FormHandle, Notifier, SubmitEvent};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    console, Element, Event, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, Window,
};

/// A live `<form>` whose required fields are found with a CSS selector
pub struct DomForm<'a> {
    form: HtmlFormElement,
    selector: &'a str,
}

impl<'a> DomForm<'a> {
    pub fn new(form: HtmlFormElement, selector: &'a str) -> Self {
        Self { form, selector }
    }
}

impl FormHandle for DomForm<'_> {
    fn fields(&self) -> Vec<Field> {
        let nodes = match self.form.query_selector_all(self.selector) {
            Ok(nodes) => nodes,
            Err(err) => {
                console::warn_2(&JsValue::from_str("formguard: selector query failed"), &err);
                return Vec::new();
            }
        };

        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|element| read_field(&element))
            .collect()
    }
}

/// Snapshot a matched element; the selector match is what makes it required
fn read_field(element: &Element) -> Field {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Field::required(input.name(), input.type_(), input.value());
    }
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return Field::required(select.name(), select.type_(), select.value());
    }
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        return Field::required(area.name(), area.type_(), area.value());
    }

    // Not a form control: neither name nor value is defined on it
    Field::required(UNDEFINED_NAME, element.tag_name().to_ascii_lowercase(), "")
}

/// How the page itself renders the name of an element without a `name` property
const UNDEFINED_NAME: &str = "undefined";

/// A dispatched `submit` event
pub struct DomSubmit<'a> {
    event: &'a Event,
    selector: &'a str,
}

impl<'a> DomSubmit<'a> {
    pub fn new(event: &'a Event, selector: &'a str) -> Self {
        Self { event, selector }
    }
}

impl<'a> SubmitEvent for DomSubmit<'a> {
    type Form = DomForm<'a>;

    fn form(&self) -> Option<DomForm<'a>> {
        let form = self.event.target()?.dyn_into::<HtmlFormElement>().ok()?;
        Some(DomForm::new(form, self.selector))
    }

    fn cancel(&self) {
        self.event.prevent_default();
    }
}

/// Shows messages with `window.alert`
pub struct AlertNotifier {
    window: Window,
}

impl AlertNotifier {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            console::error_2(&JsValue::from_str("formguard: alert failed"), &err);
        }
    }
}
