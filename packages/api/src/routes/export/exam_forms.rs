use crate::{
    error::ApiError,
    export::data::{ExamFormInfo, find_course, list_exam_forms},
    middleware::jwt::AppUser,
    permission::global_permission::GlobalPermission,
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
};

/// Drives the form selector shown before a content export; the client
/// defaults to all forms selected.
#[utoipa::path(
    get,
    path = "/export/course/{course_id}/exam-forms",
    tag = "export",
    params(
        ("course_id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Available final-exam forms", body = [ExamFormInfo]),
        (status = 404, description = "Course not found")
    )
)]
#[tracing::instrument(name = "GET /export/course/{course_id}/exam-forms", skip(state, user))]
pub async fn exam_forms(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(course_id): Path<String>,
) -> Result<Json<Vec<ExamFormInfo>>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageContent)
        .await?;

    find_course(&state.db, &course_id).await?;
    let forms = list_exam_forms(&state.db, &course_id).await?;

    Ok(Json(forms))
}
