use crate::{
    entity::media_asset, error::ApiError, middleware::jwt::AppUser,
    permission::global_permission::GlobalPermission, state::AppState,
};
use axum::{Extension, Json, extract::State};
use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ListMediaResponse {
    pub assets: Vec<media_asset::Model>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub has_more: bool,
}

#[derive(Clone, Deserialize, Debug, IntoParams)]
pub struct ListMediaQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[utoipa::path(
    get,
    path = "/admin/media",
    tag = "admin",
    params(ListMediaQuery),
    responses(
        (status = 200, description = "Paged media assets, newest first"),
        (status = 403, description = "Forbidden")
    )
)]
#[tracing::instrument(name = "GET /admin/media", skip(state, user))]
pub async fn list_media(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    axum::extract::Query(query): axum::extract::Query<ListMediaQuery>,
) -> Result<Json<ListMediaResponse>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageContent)
        .await?;

    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(50).min(200);

    let select = media_asset::Entity::find().order_by_desc(media_asset::Column::CreatedAt);

    let total = select.clone().count(&state.db).await?;
    let assets = select
        .paginate(&state.db, limit)
        .fetch_page(page - 1)
        .await?;

    let has_more = (page * limit) < total;

    Ok(Json(ListMediaResponse {
        assets,
        total,
        page,
        limit,
        has_more,
    }))
}
