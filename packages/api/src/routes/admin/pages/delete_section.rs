use crate::{
    entity::page_section,
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
    path = "/admin/sections/{section_id}",
    tag = "admin",
    params(
        ("section_id" = String, Path, description = "Section ID")
    ),
    responses(
        (status = 200, description = "Section deleted with its blocks"),
        (status = 404, description = "Section not found")
    )
)]
#[tracing::instrument(name = "DELETE /admin/sections/{section_id}", skip(state, user))]
pub async fn delete_section(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(section_id): Path<String>,
) -> Result<Json<()>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManagePages)
        .await?;

    let section = page_section::Entity::find_by_id(&section_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Section {} not found", section_id))?;

    let page_id = section.page_id.clone();

    page_section::Entity::delete_by_id(&section_id)
        .exec(&state.db)
        .await?;

    state.invalidate_cache(&page_tree_cache_key(&page_id));

    Ok(Json(()))
}
