//! DOM-free state machine behind the URL additions preview.
//!
//! The frontend feeds it page events (form submit, watched control change,
//! request completion, fade completion) and applies whatever it returns to
//! the DOM. Every change or submit advances the [`Generation`]; results
//! tagged with an older generation are dropped, so a slow response can
//! never overwrite a newer preview or unlock the submit controls while a
//! newer request is pending.

use super::config::PreviewConfig;
use super::error::PreviewError;
use super::outcome::{PreviewMarkup, PreviewOutcome};
use super::response::PreviewResponse;
use super::submit::SubmitState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    fn next(self) -> Self {
        Generation(self.0 + 1)
    }
}

/// Visibility of the preview surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceState {
    #[default]
    Hidden,
    FadingIn,
    Visible,
}

/// Render the markup, fade it in over `fade_ms`, then apply `settle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    pub generation: Generation,
    pub markup: PreviewMarkup,
    pub fade_ms: u32,
    pub settle: SubmitState,
}

/// What a change of the watched control asks the page to do.
///
/// In both cases the submit controls are already disabled and the preview
/// surface must be hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeDecision {
    /// Slide the error list up and POST the form.
    Send { generation: Generation },
    /// Blank selection: no request. Show the error list if `reveal_errors`,
    /// then render `plan`.
    Reject {
        reveal_errors: bool,
        plan: RenderPlan,
    },
}

#[derive(Debug, Clone)]
pub struct PreviewMachine {
    config: PreviewConfig,
    submit: SubmitState,
    surface: SurfaceState,
    generation: Generation,
}

impl PreviewMachine {
    pub fn new(config: PreviewConfig) -> Self {
        Self {
            config,
            submit: SubmitState::Enabled,
            surface: SurfaceState::Hidden,
            generation: Generation::default(),
        }
    }

    pub fn submit_state(&self) -> SubmitState {
        self.submit
    }

    pub fn surface_state(&self) -> SurfaceState {
        self.surface
    }

    /// A form is being submitted: lock the submit controls for good.
    pub fn submit(&mut self) -> SubmitState {
        self.generation = self.generation.next();
        self.submit = SubmitState::Disabled;
        self.submit
    }

    /// The watched control changed to `value`.
    pub fn change(&mut self, value: &str, error_list_has_entries: bool) -> ChangeDecision {
        self.generation = self.generation.next();
        self.submit = SubmitState::Disabled;
        self.surface = SurfaceState::Hidden;

        if !value.trim().is_empty() {
            return ChangeDecision::Send {
                generation: self.generation,
            };
        }

        let outcome = PreviewOutcome::ValidationError(self.config.no_selection_message.clone());
        ChangeDecision::Reject {
            reveal_errors: error_list_has_entries,
            plan: self.plan(outcome),
        }
    }

    /// The request issued for `generation` finished.
    ///
    /// Returns `None` when a newer change or submit has happened since.
    pub fn complete(
        &mut self,
        generation: Generation,
        result: Result<PreviewResponse, PreviewError>,
    ) -> Option<RenderPlan> {
        if generation != self.generation {
            return None;
        }
        Some(self.plan(PreviewOutcome::from_result(result)))
    }

    /// The fade-in for `plan` finished. Returns the submit state to apply.
    pub fn fade_finished(&mut self, plan: &RenderPlan) -> Option<SubmitState> {
        if plan.generation != self.generation {
            return None;
        }
        self.surface = SurfaceState::Visible;
        self.submit = plan.settle;
        Some(self.submit)
    }

    fn plan(&mut self, outcome: PreviewOutcome) -> RenderPlan {
        self.surface = SurfaceState::FadingIn;
        RenderPlan {
            generation: self.generation,
            markup: outcome.markup(&self.config),
            fade_ms: outcome.fade_ms(&self.config),
            settle: outcome.settles_to(),
        }
    }
}

impl Default for PreviewMachine {
    fn default() -> Self {
        Self::new(PreviewConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn send(machine: &mut PreviewMachine, value: &str) -> Generation {
        match machine.change(value, false) {
            ChangeDecision::Send { generation } => generation,
            other => panic!("expected a request, got {:?}", other),
        }
    }

    fn respond(machine: &mut PreviewMachine, status: u16, body: &str) -> (RenderPlan, SubmitState) {
        let generation = send(machine, "foo");
        assert_eq!(machine.submit_state(), SubmitState::Disabled);
        let plan = machine
            .complete(generation, Ok(PreviewResponse::new(status, body)))
            .unwrap();
        assert_eq!(machine.surface_state(), SurfaceState::FadingIn);
        let settled = machine.fade_finished(&plan).unwrap();
        assert_eq!(machine.surface_state(), SurfaceState::Visible);
        (plan, settled)
    }

    #[test]
    fn test_initial_state() {
        let machine = PreviewMachine::default();
        assert_eq!(machine.submit_state(), SubmitState::Enabled);
        assert_eq!(machine.surface_state(), SurfaceState::Hidden);
    }

    #[test]
    fn test_change_disables_before_response() {
        let mut machine = PreviewMachine::default();
        for value in ["foo", " menus.Main ", "x"] {
            send(&mut machine, value);
            assert_eq!(machine.submit_state(), SubmitState::Disabled);
            assert_eq!(machine.surface_state(), SurfaceState::Hidden);
        }
    }

    #[test]
    fn test_blank_selection_is_rejected_locally() {
        let mut machine = PreviewMachine::default();
        let ChangeDecision::Reject { reveal_errors, plan } = machine.change("  ", true) else {
            panic!("blank value must not issue a request");
        };
        assert!(reveal_errors);
        assert_eq!(machine.submit_state(), SubmitState::Disabled);
        assert_eq!(
            plan.markup,
            PreviewMarkup::Paragraph("Select a valid choice to preview URL additions.".to_string())
        );
        assert_eq!(plan.fade_ms, 250);

        assert_eq!(machine.fade_finished(&plan), Some(SubmitState::Enabled));
        assert_eq!(machine.submit_state(), SubmitState::Enabled);
    }

    #[test]
    fn test_blank_selection_without_error_entries() {
        let mut machine = PreviewMachine::default();
        let decision = machine.change("", false);
        assert!(matches!(
            decision,
            ChangeDecision::Reject {
                reveal_errors: false,
                ..
            }
        ));
    }

    #[test]
    fn test_nothing_to_add_keeps_submits_disabled() {
        let mut machine = PreviewMachine::default();
        let (plan, settled) = respond(&mut machine, 202, "<p>Nothing to import</p>");
        assert_eq!(plan.markup, PreviewMarkup::Html("<p>Nothing to import</p>".to_string()));
        assert_eq!(plan.fade_ms, 500);
        assert_eq!(settled, SubmitState::Disabled);
    }

    #[test]
    fn test_content_enables_submits() {
        let mut machine = PreviewMachine::default();
        let (plan, settled) = respond(&mut machine, 200, "<ul><li>a</li></ul>");
        assert_eq!(plan.markup, PreviewMarkup::Html("<ul><li>a</li></ul>".to_string()));
        assert_eq!(settled, SubmitState::Enabled);
    }

    #[test]
    fn test_rejected_shows_server_message() {
        let mut machine = PreviewMachine::default();
        let (plan, settled) = respond(&mut machine, 403, "Invalid klass");
        assert_eq!(plan.markup, PreviewMarkup::Paragraph("Invalid klass".to_string()));
        assert_eq!(plan.fade_ms, 250);
        assert_eq!(settled, SubmitState::Enabled);
    }

    #[test]
    fn test_failures_show_generic_message_and_enable() {
        for (status, body) in [(500, ""), (403, ""), (404, "Not Found"), (302, "")] {
            let mut machine = PreviewMachine::default();
            let (plan, settled) = respond(&mut machine, status, body);
            assert_eq!(plan.markup, PreviewMarkup::Paragraph("An error occurred".to_string()));
            assert_eq!(settled, SubmitState::Enabled);
        }
    }

    #[test]
    fn test_transport_failure_enables() {
        let mut machine = PreviewMachine::default();
        let generation = send(&mut machine, "foo");
        let plan = machine
            .complete(generation, Err(PreviewError::Transport("offline".to_string())))
            .unwrap();
        assert_eq!(plan.markup, PreviewMarkup::Paragraph("An error occurred".to_string()));
        assert_eq!(machine.fade_finished(&plan), Some(SubmitState::Enabled));
    }

    #[test]
    fn test_submit_disables_regardless_of_control() {
        let mut machine = PreviewMachine::default();
        assert_eq!(machine.submit(), SubmitState::Disabled);
        assert_eq!(machine.submit_state(), SubmitState::Disabled);
        assert_eq!(machine.submit(), SubmitState::Disabled);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut machine = PreviewMachine::default();
        let first = send(&mut machine, "a");
        let second = send(&mut machine, "b");
        assert!(second > first);

        assert_eq!(
            machine.complete(first, Ok(PreviewResponse::new(200, "<p>a</p>"))),
            None
        );
        assert_eq!(machine.submit_state(), SubmitState::Disabled);

        let plan = machine
            .complete(second, Ok(PreviewResponse::new(200, "<p>b</p>")))
            .unwrap();
        assert_eq!(plan.markup, PreviewMarkup::Html("<p>b</p>".to_string()));
    }

    #[test]
    fn test_stale_fade_does_not_unlock() {
        let mut machine = PreviewMachine::default();
        let generation = send(&mut machine, "a");
        let plan = machine
            .complete(generation, Ok(PreviewResponse::new(200, "<p>a</p>")))
            .unwrap();

        send(&mut machine, "b");
        assert_eq!(machine.fade_finished(&plan), None);
        assert_eq!(machine.submit_state(), SubmitState::Disabled);
    }

    #[test]
    fn test_submit_discards_pending_preview() {
        let mut machine = PreviewMachine::default();
        let generation = send(&mut machine, "a");
        machine.submit();
        assert_eq!(
            machine.complete(generation, Ok(PreviewResponse::new(200, "<p>a</p>"))),
            None
        );
        assert_eq!(machine.submit_state(), SubmitState::Disabled);
    }

    #[test]
    fn test_blank_then_valid_selection() {
        let mut machine = PreviewMachine::default();
        let ChangeDecision::Reject { plan: blank, .. } = machine.change(" ", false) else {
            panic!("blank value must not issue a request");
        };

        let generation = send(&mut machine, "menus.Main");
        assert_eq!(machine.fade_finished(&blank), None);
        assert_eq!(machine.submit_state(), SubmitState::Disabled);

        let plan = machine
            .complete(generation, Ok(PreviewResponse::new(202, "<p>Nothing new</p>")))
            .unwrap();
        assert_eq!(machine.fade_finished(&plan), Some(SubmitState::Disabled));
    }

    #[test]
    fn test_custom_messages_and_timings() {
        let config = PreviewConfig {
            no_selection_message: "Pick one".to_string(),
            error_fade_ms: 0,
            ..PreviewConfig::default()
        };
        let mut machine = PreviewMachine::new(config);
        let ChangeDecision::Reject { plan, .. } = machine.change("\t", false) else {
            panic!("blank value must not issue a request");
        };
        assert_eq!(plan.markup, PreviewMarkup::Paragraph("Pick one".to_string()));
        assert_eq!(plan.fade_ms, 0);
    }
}
