use crate::{
    entity::{page_section, sea_orm_active_enums::BlockType, section_block},
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
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait, IntoActiveModel};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Clone, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlockBody {
    pub block_type: Option<BlockType>,
    pub content: Option<String>,
    pub media_url: Option<String>,
    pub alt_text: Option<String>,
    pub link_url: Option<String>,
    pub is_visible: Option<bool>,
}

#[utoipa::path(
    patch,
    path = "/admin/blocks/{block_id}",
    tag = "admin",
    params(
        ("block_id" = String, Path, description = "Block ID")
    ),
    responses(
        (status = 200, description = "Updated block"),
        (status = 404, description = "Block not found")
    )
)]
#[tracing::instrument(name = "PATCH /admin/blocks/{block_id}", skip(state, user, body))]
pub async fn update_block(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(block_id): Path<String>,
    Json(body): Json<UpdateBlockBody>,
) -> Result<Json<section_block::Model>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManagePages)
        .await?;

    let block = section_block::Entity::find_by_id(&block_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Block {} not found", block_id))?;

    let section_id = block.section_id.clone();
    let mut active = block.into_active_model();

    if let Some(block_type) = body.block_type {
        active.block_type = Set(block_type);
    }
    if let Some(content) = body.content {
        active.content = Set(Some(content));
    }
    if let Some(media_url) = body.media_url {
        active.media_url = Set(Some(media_url));
    }
    if let Some(alt_text) = body.alt_text {
        active.alt_text = Set(Some(alt_text));
    }
    if let Some(link_url) = body.link_url {
        active.link_url = Set(Some(link_url));
    }
    if let Some(is_visible) = body.is_visible {
        active.is_visible = Set(is_visible);
    }

    active.updated_at = Set(chrono::Utc::now().naive_utc());

    let updated = active.update(&state.db).await?;

    if let Some(section) = page_section::Entity::find_by_id(&section_id)
        .one(&state.db)
        .await?
    {
        state.invalidate_cache(&page_tree_cache_key(&section.page_id));
    }

    Ok(Json(updated))
}
