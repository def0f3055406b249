use crate::{
    entity::{page_section, section_block},
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
    path = "/admin/sections/{section_id}/blocks",
    tag = "admin",
    params(
        ("section_id" = String, Path, description = "Section ID")
    ),
    responses(
        (status = 200, description = "Blocks ordered by sort order"),
        (status = 404, description = "Section not found")
    )
)]
#[tracing::instrument(name = "GET /admin/sections/{section_id}/blocks", skip(state, user))]
pub async fn list_blocks(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(section_id): Path<String>,
) -> Result<Json<Vec<section_block::Model>>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManagePages)
        .await?;

    page_section::Entity::find_by_id(&section_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Section {} not found", section_id))?;

    let blocks = section_block::Entity::find()
        .filter(section_block::Column::SectionId.eq(&section_id))
        .order_by_asc(section_block::Column::SortOrder)
        .all(&state.db)
        .await?;

    Ok(Json(blocks))
}
