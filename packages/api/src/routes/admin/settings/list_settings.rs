use crate::{
    entity::system_setting, error::ApiError, middleware::jwt::AppUser,
    permission::global_permission::GlobalPermission, state::AppState,
};
use axum::{Extension, Json, extract::State};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Clone, Deserialize, Debug, IntoParams)]
pub struct ListSettingsQuery {
    pub category: Option<String>,
}

#[utoipa::path(
    get,
    path = "/admin/settings",
    tag = "admin",
    params(ListSettingsQuery),
    responses(
        (status = 200, description = "System settings, optionally filtered by category"),
        (status = 403, description = "Forbidden")
    )
)]
#[tracing::instrument(name = "GET /admin/settings", skip(state, user))]
pub async fn list_settings(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    axum::extract::Query(query): axum::extract::Query<ListSettingsQuery>,
) -> Result<Json<Vec<system_setting::Model>>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageSettings)
        .await?;

    let mut select = system_setting::Entity::find().order_by_asc(system_setting::Column::Key);
    if let Some(category) = &query.category {
        select = select.filter(system_setting::Column::Category.eq(category));
    }

    let settings = select.all(&state.db).await?;
    Ok(Json(settings))
}
