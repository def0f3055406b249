use crate::{
    entity::site_page, error::ApiError, middleware::jwt::AppUser,
    permission::global_permission::GlobalPermission, state::AppState,
};
use axum::{Extension, Json, extract::State};
use sea_orm::{EntityTrait, QueryOrder};

#[utoipa::path(
    get,
    path = "/admin/site-pages",
    tag = "admin",
    responses(
        (status = 200, description = "All site pages"),
        (status = 403, description = "Forbidden")
    )
)]
#[tracing::instrument(name = "GET /admin/site-pages", skip(state, user))]
pub async fn list_pages(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
) -> Result<Json<Vec<site_page::Model>>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManagePages)
        .await?;

    let pages = site_page::Entity::find()
        .order_by_asc(site_page::Column::Slug)
        .all(&state.db)
        .await?;

    Ok(Json(pages))
}
