//! Export download routes.

use axum::{
    Router,
    body::Body,
    http::{HeaderValue, header},
    response::Response,
    routing::get,
};

use crate::error::ApiError;
use crate::export::DOCX_CONTENT_TYPE;
use crate::state::AppState;

pub mod answer_key;
pub mod course_content;
pub mod exam_forms;
pub mod final_exam;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/course/{course_id}/exam-forms",
            get(exam_forms::exam_forms),
        )
        .route(
            "/course/{course_id}/content.docx",
            get(course_content::course_content),
        )
        .route(
            "/course/{course_id}/answer-key.docx",
            get(answer_key::answer_key),
        )
        .route(
            "/course/{course_id}/final-exam-a.docx",
            get(final_exam::final_exam_a),
        )
        .route(
            "/course/{course_id}/final-exam-b.docx",
            get(final_exam::final_exam_b),
        )
}

/// Binary download response with a `Content-Disposition` filename.
pub(crate) fn docx_response(file_name: &str, bytes: Vec<u8>) -> Result<Response, ApiError> {
    let disposition = format!("attachment; filename=\"{}\"", file_name);
    Response::builder()
        .header(
            header::CONTENT_TYPE,
            HeaderValue::from_static(DOCX_CONTENT_TYPE),
        )
        .header(
            header::CONTENT_DISPOSITION,
            HeaderValue::from_str(&disposition)
                .map_err(|e| ApiError::internal(format!("Invalid file name: {}", e)))?,
        )
        .body(Body::from(bytes))
        .map_err(|e| ApiError::internal(format!("Failed to build response: {}", e)))
}
