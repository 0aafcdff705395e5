use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::domain::LeadSubmission;
use super::notify::Notifier;
use super::service::{LeadIntakeError, LeadIntakeService};
use super::store::{AttachmentStore, RecordStore};

/// Router builder exposing the lead-capture endpoint.
pub fn intake_router<R, N, A>(service: Arc<LeadIntakeService<R, N, A>>) -> Router
where
    R: RecordStore + 'static,
    N: Notifier + 'static,
    A: AttachmentStore + 'static,
{
    Router::new()
        .route(
            "/api/submit-form",
            post(submit_handler::<R, N, A>).fallback(method_not_allowed),
        )
        .with_state(service)
}

pub(crate) async fn submit_handler<R, N, A>(
    State(service): State<Arc<LeadIntakeService<R, N, A>>>,
    axum::Json(submission): axum::Json<LeadSubmission>,
) -> Response
where
    R: RecordStore + 'static,
    N: Notifier + 'static,
    A: AttachmentStore + 'static,
{
    match service.submit(submission).await {
        Ok(()) => {
            let payload = json!({
                "success": true,
                "message": "Form submitted successfully",
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(LeadIntakeError::RecordStore(err)) => {
            let payload = json!({
                "error": "Failed to submit form",
                "details": err.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

/// Any method other than POST on the submit path gets the JSON 405 body the
/// form client expects, with no side effects.
pub(crate) async fn method_not_allowed() -> Response {
    let payload = json!({ "error": "Method not allowed" });
    (StatusCode::METHOD_NOT_ALLOWED, axum::Json(payload)).into_response()
}
