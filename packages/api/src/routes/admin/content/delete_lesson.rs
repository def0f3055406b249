use crate::{
    entity::{course_unit, lesson},
    error::ApiError,
    middleware::jwt::AppUser,
    not_found,
    permission::global_permission::GlobalPermission,
    state::{AppState, course_content_cache_key},
};
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use sea_orm::EntityTrait;

#[utoipa::path(
    delete,
    path = "/admin/lessons/{lesson_id}",
    tag = "admin",
    params(
        ("lesson_id" = String, Path, description = "Lesson ID")
    ),
    responses(
        (status = 200, description = "Lesson deleted; sibling numbers unchanged"),
        (status = 404, description = "Lesson not found")
    )
)]
#[tracing::instrument(name = "DELETE /admin/lessons/{lesson_id}", skip(state, user))]
pub async fn delete_lesson(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(lesson_id): Path<String>,
) -> Result<Json<()>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageContent)
        .await?;

    let existing = lesson::Entity::find_by_id(&lesson_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Lesson {} not found", lesson_id))?;

    let unit_id = existing.unit_id.clone();

    lesson::Entity::delete_by_id(&lesson_id)
        .exec(&state.db)
        .await?;

    if let Some(unit) = course_unit::Entity::find_by_id(&unit_id).one(&state.db).await? {
        state.invalidate_cache(&course_content_cache_key(&unit.course_id));
    }

    Ok(Json(()))
}
