use crate::{
    entity::{page_section, section_block},
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
    path = "/admin/blocks/{block_id}",
    tag = "admin",
    params(
        ("block_id" = String, Path, description = "Block ID")
    ),
    responses(
        (status = 200, description = "Block deleted"),
        (status = 404, description = "Block not found")
    )
)]
#[tracing::instrument(name = "DELETE /admin/blocks/{block_id}", skip(state, user))]
pub async fn delete_block(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(block_id): Path<String>,
) -> Result<Json<()>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManagePages)
        .await?;

    let block = section_block::Entity::find_by_id(&block_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Block {} not found", block_id))?;

    let section_id = block.section_id.clone();

    section_block::Entity::delete_by_id(&block_id)
        .exec(&state.db)
        .await?;

    if let Some(section) = page_section::Entity::find_by_id(&section_id)
        .one(&state.db)
        .await?
    {
        state.invalidate_cache(&page_tree_cache_key(&section.page_id));
    }

    Ok(Json(()))
}
