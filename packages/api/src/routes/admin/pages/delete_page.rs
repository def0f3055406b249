use crate::{
    entity::site_page,
    error::ApiError,
    middleware::jwt::AppUser,
    not_found,
    permission::global_permission::GlobalPermission,
    state::{AppState, page_tree_cache_key},
};
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use sea_orm::EntityTrait;

#[utoipa::path(
    delete,
    path = "/admin/site-pages/{page_id}",
    tag = "admin",
    params(
        ("page_id" = String, Path, description = "Page ID")
    ),
    responses(
        (status = 200, description = "Page deleted with its sections and blocks"),
        (status = 404, description = "Page not found")
    )
)]
#[tracing::instrument(name = "DELETE /admin/site-pages/{page_id}", skip(state, user))]
pub async fn delete_page(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(page_id): Path<String>,
) -> Result<Json<()>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManagePages)
        .await?;

    let result = site_page::Entity::delete_by_id(&page_id)
        .exec(&state.db)
        .await?;
    if result.rows_affected == 0 {
        return Err(not_found!("Page {} not found", page_id));
    }

    state.invalidate_cache(&page_tree_cache_key(&page_id));

    Ok(Json(()))
}
