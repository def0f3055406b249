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
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter, TransactionTrait,
};
use serde::Deserialize;

use super::validate_reorder;
use utoipa::ToSchema;

#[derive(Clone, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReorderBlocksBody {
    pub block_ids: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/admin/sections/{section_id}/blocks/reorder",
    tag = "admin",
    params(
        ("section_id" = String, Path, description = "Section ID")
    ),
    responses(
        (status = 200, description = "Blocks reordered"),
        (status = 400, description = "Id list does not match the section's blocks"),
        (status = 404, description = "Section not found")
    )
)]
#[tracing::instrument(
    name = "POST /admin/sections/{section_id}/blocks/reorder",
    skip(state, user, body)
)]
pub async fn reorder_blocks(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(section_id): Path<String>,
    Json(body): Json<ReorderBlocksBody>,
) -> Result<Json<()>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManagePages)
        .await?;

    let section = page_section::Entity::find_by_id(&section_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Section {} not found", section_id))?;

    let blocks = section_block::Entity::find()
        .filter(section_block::Column::SectionId.eq(&section_id))
        .all(&state.db)
        .await?;

    let existing: Vec<String> = blocks.iter().map(|b| b.id.clone()).collect();
    validate_reorder(&existing, &body.block_ids).map_err(ApiError::bad_request)?;

    let now = chrono::Utc::now().naive_utc();
    let ordered = body.block_ids.clone();
    state
        .db
        .transaction::<_, (), ApiError>(|txn| {
            Box::pin(async move {
                for (index, block_id) in ordered.iter().enumerate() {
                    let active = section_block::ActiveModel {
                        id: Set(block_id.clone()),
                        sort_order: Set(index as i32),
                        updated_at: Set(now),
                        ..Default::default()
                    };
                    active.update(txn).await?;
                }
                Ok(())
            })
        })
        .await?;

    state.invalidate_cache(&page_tree_cache_key(&section.page_id));

    Ok(Json(()))
}
