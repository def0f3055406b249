use crate::{
    entity::{page_section, section_block, site_page},
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
use serde::Serialize;

#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SectionWithBlocks {
    #[serde(flatten)]
    pub section: page_section::Model,
    pub blocks: Vec<section_block::Model>,
}

#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PageTreeResponse {
    #[serde(flatten)]
    pub page: site_page::Model,
    pub sections: Vec<SectionWithBlocks>,
}

#[utoipa::path(
    get,
    path = "/admin/site-pages/{page_id}",
    tag = "admin",
    params(
        ("page_id" = String, Path, description = "Page ID")
    ),
    responses(
        (status = 200, description = "Page with its ordered sections and blocks"),
        (status = 404, description = "Page not found")
    )
)]
#[tracing::instrument(name = "GET /admin/site-pages/{page_id}", skip(state, user))]
pub async fn get_page(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(page_id): Path<String>,
) -> Result<Json<PageTreeResponse>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManagePages)
        .await?;

    let page = site_page::Entity::find_by_id(&page_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Page {} not found", page_id))?;

    let sections = page_section::Entity::find()
        .filter(page_section::Column::PageId.eq(&page_id))
        .order_by_asc(page_section::Column::SortOrder)
        .all(&state.db)
        .await?;

    let section_ids: Vec<String> = sections.iter().map(|s| s.id.clone()).collect();
    let blocks = if section_ids.is_empty() {
        Vec::new()
    } else {
        section_block::Entity::find()
            .filter(section_block::Column::SectionId.is_in(section_ids))
            .order_by_asc(section_block::Column::SortOrder)
            .all(&state.db)
            .await?
    };

    let sections = sections
        .into_iter()
        .map(|section| {
            let section_blocks = blocks
                .iter()
                .filter(|b| b.section_id == section.id)
                .cloned()
                .collect();
            SectionWithBlocks {
                section,
                blocks: section_blocks,
            }
        })
        .collect();

    Ok(Json(PageTreeResponse { page, sections }))
}
