//! CSS-driven show/hide transitions with a completion callback.
//!
//! Each animated helper returns the [`Timeout`] that fires when the
//! transition ends; dropping it cancels the callback.

use gloo_timers::callback::Timeout;
use web_sys::HtmlElement;

/// Hide immediately.
pub fn hide(el: &HtmlElement) {
    let _ = el.style().set_property("display", "none");
}

/// Show immediately, overriding a stylesheet `display: none` if needed.
pub fn show(el: &HtmlElement) {
    let style = el.style();
    let _ = style.remove_property("display");
    if hidden_by_stylesheet(el) {
        let _ = style.set_property("display", "block");
    }
}

/// Fade from transparent to opaque over `duration_ms`, then call `done`.
#[must_use = "dropping the timeout cancels the completion callback"]
pub fn fade_in<F>(el: &HtmlElement, duration_ms: u32, done: F) -> Timeout
where
    F: FnOnce() + 'static,
{
    let style = el.style();
    let _ = style.set_property("transition", "none");
    let _ = style.set_property("opacity", "0");
    show(el);

    // flush styles so the transition starts from 0
    let _ = el.offset_height();
    let _ = style.set_property("transition", &format!("opacity {}ms linear", duration_ms));
    let _ = style.set_property("opacity", "1");

    let el = el.clone();
    Timeout::new(duration_ms, move || {
        let style = el.style();
        let _ = style.remove_property("transition");
        let _ = style.remove_property("opacity");
        done();
    })
}

/// Collapse the height to zero over `duration_ms`, then hide.
#[must_use = "dropping the timeout leaves the element collapsed but displayed"]
pub fn slide_up(el: &HtmlElement, duration_ms: u32) -> Timeout {
    let style = el.style();
    let _ = style.set_property("overflow", "hidden");
    let _ = style.set_property("height", &format!("{}px", el.scroll_height()));

    let _ = el.offset_height();
    let _ = style.set_property("transition", &format!("height {}ms ease", duration_ms));
    let _ = style.set_property("height", "0px");

    let el = el.clone();
    Timeout::new(duration_ms, move || {
        hide(&el);
        reset_slide(&el);
    })
}

/// Undo the inline styles left by an interrupted [`slide_up`].
pub fn reset_slide(el: &HtmlElement) {
    let style = el.style();
    for property in ["overflow", "height", "transition"] {
        let _ = style.remove_property(property);
    }
}

fn hidden_by_stylesheet(el: &HtmlElement) -> bool {
    web_sys::window()
        .and_then(|window| window.get_computed_style(el).ok().flatten())
        .and_then(|computed| computed.get_property_value("display").ok())
        .map(|display| display == "none")
        .unwrap_or(false)
}
