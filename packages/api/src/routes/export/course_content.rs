use crate::{
    error::ApiError,
    export::{
        data::load_course_export,
        docx::{content_document, pack},
        export_file_name,
        options::ContentExportQuery,
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

use super::docx_response;

#[utoipa::path(
    get,
    path = "/export/course/{course_id}/content.docx",
    tag = "export",
    params(
        ("course_id" = String, Path, description = "Course ID"),
        ContentExportQuery
    ),
    responses(
        (status = 200, description = "Word document download"),
        (status = 404, description = "Course not found")
    )
)]
#[tracing::instrument(name = "GET /export/course/{course_id}/content.docx", skip(state, user))]
pub async fn course_content(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(course_id): Path<String>,
    Query(query): Query<ContentExportQuery>,
) -> Result<Response, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageContent)
        .await?;

    let options = query.resolve();
    let export = load_course_export(&state.db, &course_id).await?;

    let document = content_document(&export, &options);
    let bytes = pack(document)?;

    let file_name = export_file_name(&export.course.title, "content");
    docx_response(&file_name, bytes)
}
