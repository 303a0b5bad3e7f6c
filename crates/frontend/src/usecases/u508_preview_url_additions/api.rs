use contracts::usecases::u508_preview_url_additions::request::FORM_CONTENT_TYPE;
use contracts::usecases::u508_preview_url_additions::{
    PreviewError, PreviewRequest, PreviewResponse,
};
use gloo_net::http::Request;
use web_sys::RequestCache;

/// POST the form to its action and return whatever the server answered.
///
/// Any HTTP status is an `Ok`; only failures to reach the server or read
/// the body are errors.
pub async fn fetch_preview(request: &PreviewRequest) -> Result<PreviewResponse, PreviewError> {
    log::debug!("{} {}", PreviewRequest::METHOD, request.url);

    let response = Request::post(&request.url)
        .header("Content-Type", FORM_CONTENT_TYPE)
        .header("X-Requested-With", "XMLHttpRequest")
        .cache(RequestCache::NoStore)
        .body(request.body())
        .map_err(|e| PreviewError::Transport(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| PreviewError::Transport(format!("Failed to send request: {}", e)))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| PreviewError::Transport(format!("Failed to read response: {}", e)))?;

    Ok(PreviewResponse::new(status, body))
}
