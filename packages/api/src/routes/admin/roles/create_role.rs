use crate::{
    entity::role, error::ApiError, middleware::jwt::AppUser,
    permission::global_permission::GlobalPermission, state::AppState,
};
use axum::{Extension, Json, extract::State};
use licensure_types::create_id;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Clone, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoleBody {
    pub name: String,
    pub description: Option<String>,
    /// Permission bits; must decode as a valid GlobalPermission set
    pub permissions: Option<i64>,
}

#[utoipa::path(
    post,
    path = "/admin/roles",
    tag = "admin",
    responses(
        (status = 200, description = "Created role"),
        (status = 400, description = "Invalid permission bits"),
        (status = 409, description = "Name already in use")
    )
)]
#[tracing::instrument(name = "POST /admin/roles", skip(state, user, body))]
pub async fn create_role(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Json(body): Json<CreateRoleBody>,
) -> Result<Json<role::Model>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageUsers)
        .await?;

    let name = body.name.trim().to_string();
    if name.is_empty() {
        return Err(ApiError::bad_request("Name is required"));
    }

    let permissions = body.permissions.unwrap_or(0);
    if GlobalPermission::from_bits(permissions).is_none() {
        return Err(ApiError::bad_request("Invalid permission bits"));
    }

    let existing = role::Entity::find()
        .filter(role::Column::Name.eq(&name))
        .count(&state.db)
        .await?;
    if existing > 0 {
        return Err(ApiError::conflict(format!(
            "Role name {} already in use",
            name
        )));
    }

    let now = chrono::Utc::now().naive_utc();
    let new_role = role::ActiveModel {
        id: Set(create_id()),
        name: Set(name),
        description: Set(body.description),
        permissions: Set(permissions),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let created = new_role.insert(&state.db).await?;
    Ok(Json(created))
}
