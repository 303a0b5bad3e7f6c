//! Collects the "successful controls" of a form as name/value pairs,
//! the same set a browser would submit.

use wasm_bindgen::JsCast;
use web_sys::{
    HtmlFormElement, HtmlInputElement, HtmlOptionElement, HtmlSelectElement, HtmlTextAreaElement,
};

const SKIPPED_INPUT_TYPES: &[&str] = &["submit", "button", "reset", "file", "image"];

pub fn serialize(form: &HtmlFormElement) -> Vec<(String, String)> {
    let elements = form.elements();
    let mut fields = Vec::new();

    for i in 0..elements.length() {
        let Some(element) = elements.item(i) else { continue };

        // covers disabled fieldsets as well as the control itself
        if element.matches(":disabled").unwrap_or(false) {
            continue;
        }

        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            let kind = input.type_().to_lowercase();
            if input.name().is_empty() || SKIPPED_INPUT_TYPES.contains(&kind.as_str()) {
                continue;
            }
            if (kind == "checkbox" || kind == "radio") && !input.checked() {
                continue;
            }
            fields.push((input.name(), input.value()));
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            if select.name().is_empty() {
                continue;
            }
            let selected = select.selected_options();
            for j in 0..selected.length() {
                if let Some(option) = selected
                    .item(j)
                    .and_then(|el| el.dyn_into::<HtmlOptionElement>().ok())
                {
                    fields.push((select.name(), option.value()));
                }
            }
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            if !area.name().is_empty() {
                fields.push((area.name(), area.value()));
            }
        }
    }

    fields
}
