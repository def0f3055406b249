use crate::{
    entity::course_unit,
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
    path = "/admin/units/{unit_id}",
    tag = "admin",
    params(
        ("unit_id" = String, Path, description = "Unit ID")
    ),
    responses(
        (status = 200, description = "Unit and its lessons deleted; sibling numbers unchanged"),
        (status = 404, description = "Unit not found")
    )
)]
#[tracing::instrument(name = "DELETE /admin/units/{unit_id}", skip(state, user))]
pub async fn delete_unit(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(unit_id): Path<String>,
) -> Result<Json<()>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageContent)
        .await?;

    let unit = course_unit::Entity::find_by_id(&unit_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Unit {} not found", unit_id))?;

    let course_id = unit.course_id.clone();

    // Lessons go with the unit via FK cascade; remaining units keep their
    // numbers.
    course_unit::Entity::delete_by_id(&unit_id)
        .exec(&state.db)
        .await?;

    state.invalidate_cache(&course_content_cache_key(&course_id));

    Ok(Json(()))
}
