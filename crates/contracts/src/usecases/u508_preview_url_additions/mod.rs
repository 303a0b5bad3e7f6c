pub mod config;
pub mod error;
pub mod machine;
pub mod outcome;
pub mod request;
pub mod response;
pub mod submit;

pub use config::PreviewConfig;
pub use error::PreviewError;
pub use machine::{ChangeDecision, Generation, PreviewMachine, RenderPlan, SurfaceState};
pub use outcome::{PreviewMarkup, PreviewOutcome};
pub use request::PreviewRequest;
pub use response::{PreviewResponse, ResponseKind};
pub use submit::SubmitState;

use crate::usecases::common::UseCaseMetadata;

pub struct PreviewUrlAdditions;

impl UseCaseMetadata for PreviewUrlAdditions {
    fn usecase_index() -> &'static str {
        "u508"
    }

    fn usecase_name() -> &'static str {
        "preview_url_additions"
    }
}
