use crate::{
    entity::{course, course_unit},
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
    path = "/admin/courses/{course_id}/units",
    tag = "admin",
    params(
        ("course_id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Units ordered by unit number"),
        (status = 404, description = "Course not found")
    )
)]
#[tracing::instrument(name = "GET /admin/courses/{course_id}/units", skip(state, user))]
pub async fn list_units(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(course_id): Path<String>,
) -> Result<Json<Vec<course_unit::Model>>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageContent)
        .await?;

    course::Entity::find_by_id(&course_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Course {} not found", course_id))?;

    let units = course_unit::Entity::find()
        .filter(course_unit::Column::CourseId.eq(&course_id))
        .order_by_asc(course_unit::Column::UnitNumber)
        .all(&state.db)
        .await?;

    Ok(Json(units))
}
