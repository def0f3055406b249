use crate::{
    entity::{enrollment, lesson_progress, unit_progress},
    error::ApiError,
    middleware::jwt::AppUser,
    not_found,
    permission::global_permission::GlobalPermission,
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde::Serialize;

#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentProgressResponse {
    pub enrollment: enrollment::Model,
    pub unit_progress: Vec<unit_progress::Model>,
    pub lesson_progress: Vec<lesson_progress::Model>,
}

#[utoipa::path(
    get,
    path = "/admin/enrollments/{enrollment_id}/progress",
    tag = "admin",
    params(
        ("enrollment_id" = String, Path, description = "Enrollment ID")
    ),
    responses(
        (status = 200, description = "Unit and lesson progress rows for the enrollment"),
        (status = 404, description = "Enrollment not found")
    )
)]
#[tracing::instrument(name = "GET /admin/enrollments/{enrollment_id}/progress", skip(state, user))]
pub async fn get_progress(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(enrollment_id): Path<String>,
) -> Result<Json<EnrollmentProgressResponse>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageUsers)
        .await?;

    let enrollment = enrollment::Entity::find_by_id(&enrollment_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Enrollment {} not found", enrollment_id))?;

    let unit_progress = unit_progress::Entity::find()
        .filter(unit_progress::Column::EnrollmentId.eq(&enrollment_id))
        .all(&state.db)
        .await?;

    let lesson_progress = lesson_progress::Entity::find()
        .filter(lesson_progress::Column::EnrollmentId.eq(&enrollment_id))
        .all(&state.db)
        .await?;

    Ok(Json(EnrollmentProgressResponse {
        enrollment,
        unit_progress,
        lesson_progress,
    }))
}
