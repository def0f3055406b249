use crate::{
    error::ApiError,
    export::{
        data::load_course_export,
        docx::{final_exam_document, pack},
        export_file_name,
    },
    middleware::jwt::AppUser,
    not_found,
    permission::global_permission::GlobalPermission,
    state::AppState,
};
use axum::{
    Extension,
    extract::{Path, State},
    response::Response,
};

/// Florida requires two independently exportable exam forms, so A and B are
/// separate endpoints rather than one parameterized route.
#[utoipa::path(
    get,
    path = "/export/course/{course_id}/final-exam-a.docx",
    tag = "export",
    params(
        ("course_id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Word document download"),
        (status = 404, description = "Course or exam form not found")
    )
)]
#[tracing::instrument(name = "GET /export/course/{course_id}/final-exam-a.docx", skip(state, user))]
pub async fn final_exam_a(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(course_id): Path<String>,
) -> Result<Response, ApiError> {
    final_exam(state, user, course_id, "A").await
}

#[utoipa::path(
    get,
    path = "/export/course/{course_id}/final-exam-b.docx",
    tag = "export",
    params(
        ("course_id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Word document download"),
        (status = 404, description = "Course or exam form not found")
    )
)]
#[tracing::instrument(name = "GET /export/course/{course_id}/final-exam-b.docx", skip(state, user))]
pub async fn final_exam_b(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(course_id): Path<String>,
) -> Result<Response, ApiError> {
    final_exam(state, user, course_id, "B").await
}

async fn final_exam(
    state: AppState,
    user: AppUser,
    course_id: String,
    form: &str,
) -> Result<Response, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageContent)
        .await?;

    let export = load_course_export(&state.db, &course_id).await?;
    let exam = export
        .exams
        .iter()
        .find(|e| {
            e.bank
                .exam_form
                .as_deref()
                .is_some_and(|f| f.eq_ignore_ascii_case(form))
        })
        .ok_or_else(|| not_found!("Final exam form {} not found for course {}", form, course_id))?;

    let document = final_exam_document(&export, exam);
    let bytes = pack(document)?;

    let file_name = export_file_name(
        &export.course.title,
        &format!("final-exam-{}", form.to_ascii_lowercase()),
    );
    super::docx_response(&file_name, bytes)
}
