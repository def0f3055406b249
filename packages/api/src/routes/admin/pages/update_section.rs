use crate::{
    entity::{page_section, sea_orm_active_enums::SectionType},
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
pub struct UpdateSectionBody {
    pub section_type: Option<SectionType>,
    pub title: Option<String>,
    pub is_visible: Option<bool>,
    pub config: Option<serde_json::Value>,
}

#[utoipa::path(
    patch,
    path = "/admin/sections/{section_id}",
    tag = "admin",
    params(
        ("section_id" = String, Path, description = "Section ID")
    ),
    responses(
        (status = 200, description = "Updated section"),
        (status = 404, description = "Section not found")
    )
)]
#[tracing::instrument(name = "PATCH /admin/sections/{section_id}", skip(state, user, body))]
pub async fn update_section(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(section_id): Path<String>,
    Json(body): Json<UpdateSectionBody>,
) -> Result<Json<page_section::Model>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManagePages)
        .await?;

    let section = page_section::Entity::find_by_id(&section_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Section {} not found", section_id))?;

    let page_id = section.page_id.clone();
    let mut active = section.into_active_model();

    if let Some(section_type) = body.section_type {
        active.section_type = Set(section_type);
    }
    if let Some(title) = body.title {
        active.title = Set(Some(title));
    }
    if let Some(is_visible) = body.is_visible {
        active.is_visible = Set(is_visible);
    }
    if let Some(config) = body.config {
        active.config = Set(Some(config));
    }

    active.updated_at = Set(chrono::Utc::now().naive_utc());

    let updated = active.update(&state.db).await?;

    state.invalidate_cache(&page_tree_cache_key(&page_id));

    Ok(Json(updated))
}
