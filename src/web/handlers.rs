use axum::{
    extract::{rejection::JsonRejection, State},
    response::{Html, IntoResponse},
    Json,
};
use reqwest::StatusCode;
use serde_json::json;

use crate::error::InvoiceInsightError;
use crate::web::messages::{AskRequest, ImagePayload};
use crate::web::server::AppState;

/// Serves the single page. The markup is compiled into the binary so the
/// server has no files to find at runtime.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("index.html"))
}

pub async fn ask(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Bodies the extractor refuses (oversized, malformed) still get the
    // JSON envelope the page knows how to render.
    let Json(payload) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            log::debug!("Rejected request body: {}", rejection.body_text());
            return (
                rejection.status(),
                Json(json!({ "status": "error", "message": rejection.body_text() })),
            );
        }
    };

    let image = match payload.image.as_ref().map(ImagePayload::decode).transpose() {
        Ok(image) => image,
        Err(err) => {
            log::debug!("Rejected upload: {}", err);
            return error_response(&err);
        }
    };

    match state.analyst.ask(image.as_ref(), &payload.question).await {
        Ok(answer) => {
            log::info!("Answered invoice question");
            (StatusCode::OK, Json(json!({ "status": "success", "answer": answer })))
        }
        Err(err) => {
            log::warn!("Ask failed: {}", err);
            error_response(&err)
        }
    }
}

fn error_response(err: &InvoiceInsightError) -> (StatusCode, Json<serde_json::Value>) {
    (
        status_for(err),
        Json(json!({ "status": "error", "message": err.to_string() })),
    )
}

fn status_for(err: &InvoiceInsightError) -> StatusCode {
    match err {
        InvoiceInsightError::MissingInput => StatusCode::BAD_REQUEST,
        InvoiceInsightError::UnsupportedImage(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        InvoiceInsightError::Inference(_) => StatusCode::BAD_GATEWAY,
        InvoiceInsightError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
