use std::cell::RefCell;

use contracts::usecases::u508_preview_url_additions::PreviewMarkup;
use gloo_timers::callback::Timeout;
use web_sys::HtmlElement;

use crate::shared::{dom, transition};

/// The shared region previews and error messages are rendered into.
///
/// Contents are replaced synchronously; only the fade-in is deferred.
pub struct PreviewSurface {
    host: HtmlElement,
    fade: RefCell<Option<Timeout>>,
}

impl PreviewSurface {
    pub fn new(host: HtmlElement) -> Self {
        Self {
            host,
            fade: RefCell::new(None),
        }
    }

    /// Hide at once, cancelling any fade still in progress.
    pub fn hide(&self) {
        self.fade.borrow_mut().take();
        transition::hide(&self.host);
    }

    /// Replace the contents and fade in over `fade_ms`, then call `done`.
    pub fn render<F>(&self, markup: &PreviewMarkup, fade_ms: u32, done: F)
    where
        F: FnOnce() + 'static,
    {
        match markup {
            PreviewMarkup::Html(html) => self.host.set_inner_html(html),
            PreviewMarkup::Paragraph(text) => {
                if let Err(e) = self.write_paragraph(text) {
                    log::warn!("{}", e);
                }
            }
        }
        let fade = transition::fade_in(&self.host, fade_ms, done);
        self.fade.replace(Some(fade));
    }

    // text node, not markup: the message comes straight from the response body
    fn write_paragraph(&self, text: &str) -> Result<(), String> {
        self.host.set_inner_html("");
        let paragraph = dom::document()?
            .create_element("p")
            .map_err(|e| format!("Failed to create paragraph: {:?}", e))?;
        paragraph.set_text_content(Some(text));
        self.host
            .append_child(&paragraph)
            .map_err(|e| format!("Failed to insert paragraph: {:?}", e))?;
        Ok(())
    }
}
