use crate::{
    entity::{course_unit, lesson},
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
    path = "/admin/units/{unit_id}/lessons",
    tag = "admin",
    params(
        ("unit_id" = String, Path, description = "Unit ID")
    ),
    responses(
        (status = 200, description = "Lessons ordered by lesson number"),
        (status = 404, description = "Unit not found")
    )
)]
#[tracing::instrument(name = "GET /admin/units/{unit_id}/lessons", skip(state, user))]
pub async fn list_lessons(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(unit_id): Path<String>,
) -> Result<Json<Vec<lesson::Model>>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageContent)
        .await?;

    course_unit::Entity::find_by_id(&unit_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Unit {} not found", unit_id))?;

    let lessons = lesson::Entity::find()
        .filter(lesson::Column::UnitId.eq(&unit_id))
        .order_by_asc(lesson::Column::LessonNumber)
        .all(&state.db)
        .await?;

    Ok(Json(lessons))
}
