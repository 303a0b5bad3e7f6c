/// Availability of every submit control on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Enabled,
    Disabled,
}

impl SubmitState {
    pub fn is_disabled(self) -> bool {
        matches!(self, SubmitState::Disabled)
    }
}
