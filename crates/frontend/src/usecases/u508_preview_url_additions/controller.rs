//! Binds the preview state machine to the admin page.
//!
//! The machine decides; this module only reads the DOM, issues the request
//! and applies the machine's answers to the page.

use std::cell::RefCell;
use std::rc::Rc;

use contracts::usecases::u508_preview_url_additions::{
    ChangeDecision, Generation, PreviewConfig, PreviewError, PreviewMachine, PreviewRequest,
    PreviewResponse, RenderPlan, SubmitState,
};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, HtmlSelectElement};

use super::api;
use super::surface::PreviewSurface;
use crate::shared::{dom, form_fields, transition};

pub struct PreviewController {
    machine: RefCell<PreviewMachine>,
    config: PreviewConfig,
    watched: HtmlSelectElement,
    surface: PreviewSurface,
    error_slide: RefCell<Option<Timeout>>,
}

impl PreviewController {
    /// Locate the page elements and bind `change` on the watched control and
    /// `submit` on every form.
    pub fn mount(config: PreviewConfig) -> Result<Rc<Self>, String> {
        let watched = dom::document()?
            .query_selector(&config.watched_selector)
            .map_err(|e| format!("Invalid selector `{}`: {:?}", config.watched_selector, e))?
            .ok_or_else(|| format!("No watched control `{}`", config.watched_selector))?
            .dyn_into::<HtmlSelectElement>()
            .map_err(|_| format!("`{}` is not a select", config.watched_selector))?;

        let host = dom::query_html(&config.preview_selector)?
            .ok_or_else(|| format!("No preview surface `{}`", config.preview_selector))?;

        let controller = Rc::new(Self {
            machine: RefCell::new(PreviewMachine::new(config.clone())),
            config,
            watched,
            surface: PreviewSurface::new(host),
            error_slide: RefCell::new(None),
        });

        let this = Rc::clone(&controller);
        dom::listen(&controller.watched, "change", move |_| this.handle_change())?;

        for form in dom::query_all(&controller.config.form_selector)? {
            let this = Rc::clone(&controller);
            dom::listen(&form, "submit", move |_| this.handle_submit())?;
        }

        Ok(controller)
    }

    pub fn disable_all_submits(&self) {
        self.apply_submit_state(SubmitState::Disabled);
    }

    pub fn enable_all_submits(&self) {
        self.apply_submit_state(SubmitState::Enabled);
    }

    pub fn handle_submit(&self) {
        self.machine.borrow_mut().submit();
        self.disable_all_submits();
    }

    pub fn handle_change(self: &Rc<Self>) {
        let error_list = dom::query_html(&self.config.error_list_selector).unwrap_or_else(|e| {
            log::warn!("{}", e);
            None
        });
        let has_entries = error_list
            .as_ref()
            .is_some_and(|list| list.child_element_count() > 0);

        let decision = self
            .machine
            .borrow_mut()
            .change(&self.watched.value(), has_entries);
        self.disable_all_submits();
        self.surface.hide();

        match decision {
            ChangeDecision::Send { generation } => {
                if let Some(list) = &error_list {
                    let slide = transition::slide_up(list, self.config.slide_up_ms);
                    self.error_slide.replace(Some(slide));
                }
                self.send(generation);
            }
            ChangeDecision::Reject {
                reveal_errors,
                plan,
            } => {
                if let (true, Some(list)) = (reveal_errors, &error_list) {
                    self.reveal_errors(list);
                }
                self.render(plan);
            }
        }
    }

    fn send(self: &Rc<Self>, generation: Generation) {
        let request = self.build_request();
        let this = Rc::clone(self);
        spawn_local(async move {
            let result = match request {
                Ok(request) => api::fetch_preview(&request).await,
                Err(e) => Err(e),
            };
            this.handle_completion(generation, result);
        });
    }

    fn handle_completion(
        self: &Rc<Self>,
        generation: Generation,
        result: Result<PreviewResponse, PreviewError>,
    ) {
        if let Err(e) = &result {
            log::warn!("{}", e);
        }

        let plan = self.machine.borrow_mut().complete(generation, result);
        match plan {
            Some(plan) => self.render(plan),
            None => log::debug!("Dropping stale preview response ({:?})", generation),
        }
    }

    fn render(self: &Rc<Self>, plan: RenderPlan) {
        let this = Rc::clone(self);
        let markup = plan.markup.clone();
        let fade_ms = plan.fade_ms;
        self.surface.render(&markup, fade_ms, move || {
            let settled = this.machine.borrow_mut().fade_finished(&plan);
            match settled {
                Some(SubmitState::Enabled) => this.enable_all_submits(),
                Some(SubmitState::Disabled) => this.disable_all_submits(),
                None => log::debug!("Preview {:?} superseded before its fade ended", plan.generation),
            }
        });
    }

    fn build_request(&self) -> Result<PreviewRequest, PreviewError> {
        let form = self.watched.form().ok_or(PreviewError::MissingForm)?;
        Ok(PreviewRequest::new(form.action(), form_fields::serialize(&form)))
    }

    // no animation, and cancel a slide-up still collapsing the list
    fn reveal_errors(&self, list: &HtmlElement) {
        self.error_slide.borrow_mut().take();
        transition::reset_slide(list);
        transition::show(list);
    }

    fn apply_submit_state(&self, state: SubmitState) {
        if let Err(e) = dom::set_disabled(&self.config.submit_selector, state.is_disabled()) {
            log::warn!("{}", e);
        }
    }
}
