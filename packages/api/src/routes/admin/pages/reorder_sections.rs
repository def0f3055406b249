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
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter, TransactionTrait,
};
use serde::Deserialize;

use super::validate_reorder;
use utoipa::ToSchema;

#[derive(Clone, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReorderSectionsBody {
    pub section_ids: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/admin/site-pages/{page_id}/sections/reorder",
    tag = "admin",
    params(
        ("page_id" = String, Path, description = "Page ID")
    ),
    responses(
        (status = 200, description = "Sections reordered"),
        (status = 400, description = "Id list does not match the page's sections"),
        (status = 404, description = "Page not found")
    )
)]
#[tracing::instrument(
    name = "POST /admin/site-pages/{page_id}/sections/reorder",
    skip(state, user, body)
)]
pub async fn reorder_sections(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(page_id): Path<String>,
    Json(body): Json<ReorderSectionsBody>,
) -> Result<Json<()>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManagePages)
        .await?;

    let sections = page_section::Entity::find()
        .filter(page_section::Column::PageId.eq(&page_id))
        .all(&state.db)
        .await?;
    if sections.is_empty() {
        return Err(not_found!("Page {} has no sections", page_id));
    }

    let existing: Vec<String> = sections.iter().map(|s| s.id.clone()).collect();
    validate_reorder(&existing, &body.section_ids).map_err(ApiError::bad_request)?;

    let now = chrono::Utc::now().naive_utc();
    let ordered = body.section_ids.clone();
    state
        .db
        .transaction::<_, (), ApiError>(|txn| {
            Box::pin(async move {
                for (index, section_id) in ordered.iter().enumerate() {
                    let active = page_section::ActiveModel {
                        id: Set(section_id.clone()),
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

    state.invalidate_cache(&page_tree_cache_key(&page_id));

    Ok(Json(()))
}
