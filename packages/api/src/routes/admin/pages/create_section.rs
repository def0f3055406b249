use crate::{
    entity::{page_section, sea_orm_active_enums::SectionType, site_page},
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

#[derive(Clone, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSectionBody {
    pub section_type: SectionType,
    pub title: Option<String>,
    pub is_visible: Option<bool>,
    pub config: Option<serde_json::Value>,
}

#[utoipa::path(
    post,
    path = "/admin/site-pages/{page_id}/sections",
    tag = "admin",
    params(
        ("page_id" = String, Path, description = "Page ID")
    ),
    responses(
        (status = 200, description = "Created section appended at the end"),
        (status = 404, description = "Page not found")
    )
)]
#[tracing::instrument(name = "POST /admin/site-pages/{page_id}/sections", skip(state, user, body))]
pub async fn create_section(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(page_id): Path<String>,
    Json(body): Json<CreateSectionBody>,
) -> Result<Json<page_section::Model>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManagePages)
        .await?;

    site_page::Entity::find_by_id(&page_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Page {} not found", page_id))?;

    let last = page_section::Entity::find()
        .filter(page_section::Column::PageId.eq(&page_id))
        .order_by_desc(page_section::Column::SortOrder)
        .one(&state.db)
        .await?;
    let sort_order = last.map(|s| s.sort_order + 1).unwrap_or(0);

    let now = chrono::Utc::now().naive_utc();
    let section = page_section::ActiveModel {
        id: Set(create_id()),
        page_id: Set(page_id.clone()),
        section_type: Set(body.section_type),
        title: Set(body.title),
        sort_order: Set(sort_order),
        is_visible: Set(body.is_visible.unwrap_or(true)),
        config: Set(body.config),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let created = section.insert(&state.db).await?;

    state.invalidate_cache(&page_tree_cache_key(&page_id));

    Ok(Json(created))
}
