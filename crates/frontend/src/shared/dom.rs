//! Thin helpers over `web_sys` for server-rendered pages the frontend does
//! not own. Errors are returned as strings and logged by the caller.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

pub fn document() -> Result<Document, String> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "No document object".to_string())
}

/// All elements matching `selector`, in document order.
pub fn query_all(selector: &str) -> Result<Vec<Element>, String> {
    let nodes = document()?
        .query_selector_all(selector)
        .map_err(|e| format!("Invalid selector `{}`: {:?}", selector, e))?;

    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// First HTML element matching `selector`, if any.
pub fn query_html(selector: &str) -> Result<Option<HtmlElement>, String> {
    let element = document()?
        .query_selector(selector)
        .map_err(|e| format!("Invalid selector `{}`: {:?}", selector, e))?;

    Ok(element.and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

/// Set or clear the `disabled` attribute on every element matching `selector`.
///
/// Returns how many elements were touched.
pub fn set_disabled(selector: &str, disabled: bool) -> Result<usize, String> {
    let controls = query_all(selector)?;
    for control in &controls {
        if disabled {
            control
                .set_attribute("disabled", "disabled")
                .map_err(|e| format!("Failed to disable control: {:?}", e))?;
        } else {
            control
                .remove_attribute("disabled")
                .map_err(|e| format!("Failed to enable control: {:?}", e))?;
        }
    }
    Ok(controls.len())
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), String>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| format!("Failed to bind `{}`: {:?}", event, e))?;
    closure.forget();
    Ok(())
}
