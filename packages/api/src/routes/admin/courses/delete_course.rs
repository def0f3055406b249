use crate::{
    entity::course,
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
    path = "/admin/courses/{course_id}",
    tag = "admin",
    params(
        ("course_id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course deleted"),
        (status = 404, description = "Course not found")
    )
)]
#[tracing::instrument(name = "DELETE /admin/courses/{course_id}", skip(state, user))]
pub async fn delete_course(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(course_id): Path<String>,
) -> Result<Json<()>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageCourses)
        .await?;

    let result = course::Entity::delete_by_id(&course_id)
        .exec(&state.db)
        .await?;
    if result.rows_affected == 0 {
        return Err(not_found!("Course {} not found", course_id));
    }

    state.invalidate_cache(&course_content_cache_key(&course_id));

    Ok(Json(()))
}
