use crate::{
    entity::system_setting, error::ApiError, middleware::jwt::AppUser, not_found,
    permission::global_permission::GlobalPermission, state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use sea_orm::EntityTrait;

#[utoipa::path(
    delete,
    path = "/admin/settings/{key}",
    tag = "admin",
    params(
        ("key" = String, Path, description = "Setting key")
    ),
    responses(
        (status = 200, description = "Setting deleted"),
        (status = 404, description = "Setting not found")
    )
)]
#[tracing::instrument(name = "DELETE /admin/settings/{key}", skip(state, user))]
pub async fn delete_setting(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(key): Path<String>,
) -> Result<Json<()>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageSettings)
        .await?;

    let result = system_setting::Entity::delete_by_id(&key)
        .exec(&state.db)
        .await?;
    if result.rows_affected == 0 {
        return Err(not_found!("Setting {} not found", key));
    }

    Ok(Json(()))
}
