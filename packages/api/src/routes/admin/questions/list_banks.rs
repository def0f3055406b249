use crate::{
    entity::{course, question_bank},
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
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

#[utoipa::path(
    get,
    path = "/admin/courses/{course_id}/question-banks",
    tag = "admin",
    params(
        ("course_id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Question banks for the course"),
        (status = 404, description = "Course not found")
    )
)]
#[tracing::instrument(name = "GET /admin/courses/{course_id}/question-banks", skip(state, user))]
pub async fn list_banks(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(course_id): Path<String>,
) -> Result<Json<Vec<question_bank::Model>>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageContent)
        .await?;

    course::Entity::find_by_id(&course_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Course {} not found", course_id))?;

    let banks = question_bank::Entity::find()
        .filter(question_bank::Column::CourseId.eq(&course_id))
        .order_by_asc(question_bank::Column::CreatedAt)
        .all(&state.db)
        .await?;

    Ok(Json(banks))
}
