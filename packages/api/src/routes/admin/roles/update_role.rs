use crate::{
    entity::role, error::ApiError, middleware::jwt::AppUser, not_found,
    permission::global_permission::GlobalPermission, state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait, IntoActiveModel};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Clone, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleBody {
    pub name: Option<String>,
    pub description: Option<String>,
    pub permissions: Option<i64>,
}

#[utoipa::path(
    patch,
    path = "/admin/roles/{role_id}",
    tag = "admin",
    params(
        ("role_id" = String, Path, description = "Role ID")
    ),
    responses(
        (status = 200, description = "Updated role"),
        (status = 404, description = "Role not found")
    )
)]
#[tracing::instrument(name = "PATCH /admin/roles/{role_id}", skip(state, user, body))]
pub async fn update_role(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(role_id): Path<String>,
    Json(body): Json<UpdateRoleBody>,
) -> Result<Json<role::Model>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageUsers)
        .await?;

    let existing = role::Entity::find_by_id(&role_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Role {} not found", role_id))?;

    let mut active = existing.into_active_model();

    if let Some(name) = body.name {
        if name.trim().is_empty() {
            return Err(ApiError::bad_request("Name must not be empty"));
        }
        active.name = Set(name.trim().to_string());
    }
    if let Some(description) = body.description {
        active.description = Set(Some(description));
    }
    if let Some(permissions) = body.permissions {
        if GlobalPermission::from_bits(permissions).is_none() {
            return Err(ApiError::bad_request("Invalid permission bits"));
        }
        active.permissions = Set(permissions);
    }

    active.updated_at = Set(chrono::Utc::now().naive_utc());

    let updated = active.update(&state.db).await?;
    Ok(Json(updated))
}
