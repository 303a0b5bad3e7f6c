use serde::Deserialize;

/// Page hooks and timings for the URL additions preview.
///
/// Every field has a default matching the stock admin template, so a page
/// only needs to override what differs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Single-select control whose change triggers a preview
    pub watched_selector: String,
    /// Error list rendered by the admin for the watched field
    pub error_list_selector: String,
    /// Shared region the preview or error text is rendered into
    pub preview_selector: String,
    /// Every control whose activation submits a form
    pub submit_selector: String,
    /// Forms whose submission locks the submit controls
    pub form_selector: String,
    pub content_fade_ms: u32,
    pub error_fade_ms: u32,
    pub slide_up_ms: u32,
    /// Shown when the watched control has a blank value
    pub no_selection_message: String,
    /// Shown for any failure without a usable server message
    pub generic_error_message: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            watched_selector: "#id_klass".to_string(),
            error_list_selector: ".field-klass .errorlist".to_string(),
            preview_selector: ".menuhin_preview".to_string(),
            submit_selector: r#"input[type="submit"]"#.to_string(),
            form_selector: "form".to_string(),
            content_fade_ms: 500,
            error_fade_ms: 250,
            slide_up_ms: 400,
            no_selection_message: "Select a valid choice to preview URL additions.".to_string(),
            generic_error_message: "An error occurred".to_string(),
        }
    }
}
