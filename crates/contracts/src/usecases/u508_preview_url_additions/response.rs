/// Status convention of the preview endpoint.
///
/// | status        | meaning                                    |
/// |---------------|--------------------------------------------|
/// | 202           | processed, no missing items to add          |
/// | other 2xx     | processed, the body is the preview markup   |
/// | 403           | selection rejected, the body is the reason  |
/// | anything else | generic failure                             |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    NothingToAdd,
    Content,
    Rejected,
    Failed,
}

pub const STATUS_NOTHING_TO_ADD: u16 = 202;
pub const STATUS_REJECTED: u16 = 403;

impl ResponseKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            STATUS_NOTHING_TO_ADD => ResponseKind::NothingToAdd,
            200..=299 => ResponseKind::Content,
            STATUS_REJECTED => ResponseKind::Rejected,
            _ => ResponseKind::Failed,
        }
    }
}

/// A completed HTTP exchange with the preview endpoint, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewResponse {
    pub status: u16,
    pub body: String,
}

impl PreviewResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn kind(&self) -> ResponseKind {
        ResponseKind::from_status(self.status)
    }
}
