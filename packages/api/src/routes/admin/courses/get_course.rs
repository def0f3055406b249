use crate::{
    entity::course, error::ApiError, middleware::jwt::AppUser, not_found,
    permission::global_permission::GlobalPermission, state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use sea_orm::EntityTrait;

#[utoipa::path(
    get,
    path = "/admin/courses/{course_id}",
    tag = "admin",
    params(
        ("course_id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course detail"),
        (status = 404, description = "Course not found")
    )
)]
#[tracing::instrument(name = "GET /admin/courses/{course_id}", skip(state, user))]
pub async fn get_course(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(course_id): Path<String>,
) -> Result<Json<course::Model>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageCourses)
        .await?;

    let course = course::Entity::find_by_id(&course_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Course {} not found", course_id))?;

    Ok(Json(course))
}
