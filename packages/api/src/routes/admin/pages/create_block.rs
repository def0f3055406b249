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
use licensure_types::create_id;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter, QueryOrder,
};
use serde::Deserialize;
use utoipa::ToSchema;

/// The row stores the superset of per-type fields; which ones the dialog
/// shows is decided by `block_type` on the client.
#[derive(Clone, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlockBody {
    pub block_type: BlockType,
    pub content: Option<String>,
    pub media_url: Option<String>,
    pub alt_text: Option<String>,
    pub link_url: Option<String>,
    pub is_visible: Option<bool>,
}

#[utoipa::path(
    post,
    path = "/admin/sections/{section_id}/blocks",
    tag = "admin",
    params(
        ("section_id" = String, Path, description = "Section ID")
    ),
    responses(
        (status = 200, description = "Created block appended at the end"),
        (status = 404, description = "Section not found")
    )
)]
#[tracing::instrument(name = "POST /admin/sections/{section_id}/blocks", skip(state, user, body))]
pub async fn create_block(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(section_id): Path<String>,
    Json(body): Json<CreateBlockBody>,
) -> Result<Json<section_block::Model>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManagePages)
        .await?;

    let section = page_section::Entity::find_by_id(&section_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Section {} not found", section_id))?;

    let last = section_block::Entity::find()
        .filter(section_block::Column::SectionId.eq(&section_id))
        .order_by_desc(section_block::Column::SortOrder)
        .one(&state.db)
        .await?;
    let sort_order = last.map(|b| b.sort_order + 1).unwrap_or(0);

    let now = chrono::Utc::now().naive_utc();
    let block = section_block::ActiveModel {
        id: Set(create_id()),
        section_id: Set(section_id.clone()),
        block_type: Set(body.block_type),
        content: Set(body.content),
        media_url: Set(body.media_url),
        alt_text: Set(body.alt_text),
        link_url: Set(body.link_url),
        sort_order: Set(sort_order),
        is_visible: Set(body.is_visible.unwrap_or(true)),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let created = block.insert(&state.db).await?;

    state.invalidate_cache(&page_tree_cache_key(&section.page_id));

    Ok(Json(created))
}
