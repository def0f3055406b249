use crate::{
    entity::{page_section, site_page},
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
    path = "/admin/site-pages/{page_id}/sections",
    tag = "admin",
    params(
        ("page_id" = String, Path, description = "Page ID")
    ),
    responses(
        (status = 200, description = "Sections ordered by sort order"),
        (status = 404, description = "Page not found")
    )
)]
#[tracing::instrument(name = "GET /admin/site-pages/{page_id}/sections", skip(state, user))]
pub async fn list_sections(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(page_id): Path<String>,
) -> Result<Json<Vec<page_section::Model>>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManagePages)
        .await?;

    site_page::Entity::find_by_id(&page_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Page {} not found", page_id))?;

    let sections = page_section::Entity::find()
        .filter(page_section::Column::PageId.eq(&page_id))
        .order_by_asc(page_section::Column::SortOrder)
        .all(&state.db)
        .await?;

    Ok(Json(sections))
}
