use super::config::PreviewConfig;
use super::error::PreviewError;
use super::response::{PreviewResponse, ResponseKind};
use super::submit::SubmitState;

/// What a preview attempt resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewOutcome {
    /// 202: nothing to add. The body is still shown, but saving would be a no-op.
    Empty(String),
    /// Any other 2xx: the body is the preview markup.
    Content(String),
    /// Selection rejected, either by the server (403 with text) or locally.
    ValidationError(String),
    /// Anything without a usable message.
    ServerError,
}

/// Markup destined for the preview surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewMarkup {
    /// Server-rendered fragment, inserted as HTML
    Html(String),
    /// Plain text, inserted literally inside a `<p>`
    Paragraph(String),
}

impl PreviewOutcome {
    pub fn from_response(response: PreviewResponse) -> Self {
        match response.kind() {
            ResponseKind::NothingToAdd => PreviewOutcome::Empty(response.body),
            ResponseKind::Content => PreviewOutcome::Content(response.body),
            ResponseKind::Rejected if !response.body.is_empty() => {
                PreviewOutcome::ValidationError(response.body)
            }
            ResponseKind::Rejected | ResponseKind::Failed => PreviewOutcome::ServerError,
        }
    }

    pub fn from_result(result: Result<PreviewResponse, PreviewError>) -> Self {
        match result {
            Ok(response) => Self::from_response(response),
            Err(_) => PreviewOutcome::ServerError,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PreviewOutcome::Empty(_) | PreviewOutcome::Content(_))
    }

    pub fn markup(&self, config: &PreviewConfig) -> PreviewMarkup {
        match self {
            PreviewOutcome::Empty(html) | PreviewOutcome::Content(html) => {
                PreviewMarkup::Html(html.clone())
            }
            PreviewOutcome::ValidationError(message) => PreviewMarkup::Paragraph(message.clone()),
            PreviewOutcome::ServerError => {
                PreviewMarkup::Paragraph(config.generic_error_message.clone())
            }
        }
    }

    pub fn fade_ms(&self, config: &PreviewConfig) -> u32 {
        if self.is_success() {
            config.content_fade_ms
        } else {
            config.error_fade_ms
        }
    }

    /// Submit state to apply once the preview has faded in.
    ///
    /// Only a 202 keeps the controls locked; errors always unlock them.
    pub fn settles_to(&self) -> SubmitState {
        match self {
            PreviewOutcome::Empty(_) => SubmitState::Disabled,
            PreviewOutcome::Content(_)
            | PreviewOutcome::ValidationError(_)
            | PreviewOutcome::ServerError => SubmitState::Enabled,
        }
    }
}
