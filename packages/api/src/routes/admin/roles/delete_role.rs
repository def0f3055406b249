use crate::{
    entity::role, error::ApiError, middleware::jwt::AppUser, not_found,
    permission::global_permission::GlobalPermission, state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use sea_orm::EntityTrait;

#[utoipa::path(
    delete,
    path = "/admin/roles/{role_id}",
    tag = "admin",
    params(
        ("role_id" = String, Path, description = "Role ID")
    ),
    responses(
        (status = 200, description = "Role deleted"),
        (status = 404, description = "Role not found")
    )
)]
#[tracing::instrument(name = "DELETE /admin/roles/{role_id}", skip(state, user))]
pub async fn delete_role(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(role_id): Path<String>,
) -> Result<Json<()>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageUsers)
        .await?;

    let result = role::Entity::delete_by_id(&role_id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(not_found!("Role {} not found", role_id));
    }

    Ok(Json(()))
}
