use crate::{
    entity::role, error::ApiError, middleware::jwt::AppUser,
    permission::global_permission::GlobalPermission, state::AppState,
};
use axum::{Extension, Json, extract::State};
use sea_orm::{EntityTrait, QueryOrder};

#[utoipa::path(
    get,
    path = "/admin/roles",
    tag = "admin",
    responses(
        (status = 200, description = "All roles"),
        (status = 403, description = "Forbidden")
    )
)]
#[tracing::instrument(name = "GET /admin/roles", skip(state, user))]
pub async fn list_roles(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
) -> Result<Json<Vec<role::Model>>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageUsers)
        .await?;

    let roles = role::Entity::find()
        .order_by_asc(role::Column::Name)
        .all(&state.db)
        .await?;

    Ok(Json(roles))
}
