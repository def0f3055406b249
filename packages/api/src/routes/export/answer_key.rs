use crate::{
    error::ApiError,
    export::{
        data::load_course_export,
        docx::{answer_key_document, pack},
        export_file_name,
    },
    middleware::jwt::AppUser,
    permission::global_permission::GlobalPermission,
    state::AppState,
};
use axum::{
    Extension,
    extract::{Path, Query, State},
    response::Response,
};
use serde::Deserialize;
use utoipa::IntoParams;

use super::docx_response;

#[derive(Clone, Deserialize, Debug, IntoParams)]
pub struct AnswerKeyQuery {
    /// Restrict to one form (A/B); both when absent
    pub form: Option<String>,
}

/// Florida DBPR answer key: one of three fixed compliance document kinds.
#[utoipa::path(
    get,
    path = "/export/course/{course_id}/answer-key.docx",
    tag = "export",
    params(
        ("course_id" = String, Path, description = "Course ID"),
        AnswerKeyQuery
    ),
    responses(
        (status = 200, description = "Word document download"),
        (status = 404, description = "Course not found")
    )
)]
#[tracing::instrument(name = "GET /export/course/{course_id}/answer-key.docx", skip(state, user))]
pub async fn answer_key(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(course_id): Path<String>,
    Query(query): Query<AnswerKeyQuery>,
) -> Result<Response, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageContent)
        .await?;

    let export = load_course_export(&state.db, &course_id).await?;
    if export.exams.is_empty() {
        return Err(ApiError::not_found(format!(
            "Course {} has no final-exam banks",
            course_id
        )));
    }

    let form_filter = query
        .form
        .as_deref()
        .map(str::trim)
        .filter(|f| !f.is_empty());

    let document = answer_key_document(&export, form_filter);
    let bytes = pack(document)?;

    let file_name = export_file_name(&export.course.title, "answer-key");
    docx_response(&file_name, bytes)
}
