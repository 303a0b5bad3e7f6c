pub mod api;
pub mod config;
pub mod controller;
pub mod surface;

pub use controller::PreviewController;

use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u508_preview_url_additions::PreviewUrlAdditions;

use crate::shared::dom;

/// Mount the controller once the admin page's DOM is parsed.
pub fn mount_when_ready() {
    let document = match dom::document() {
        Ok(document) => document,
        Err(e) => {
            log::warn!("{}: {}", PreviewUrlAdditions::full_name(), e);
            return;
        }
    };

    if document.ready_state() == "loading" {
        if let Err(e) = dom::listen(&document, "DOMContentLoaded", |_| mount()) {
            log::warn!("{}: {}", PreviewUrlAdditions::full_name(), e);
        }
    } else {
        mount();
    }
}

fn mount() {
    match PreviewController::mount(config::load_config()) {
        Ok(_) => log::info!("{} mounted", PreviewUrlAdditions::full_name()),
        Err(e) => log::info!("{} not mounted: {}", PreviewUrlAdditions::full_name(), e),
    }
}
