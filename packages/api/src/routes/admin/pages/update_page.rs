use crate::{
    entity::site_page,
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
pub struct UpdatePageBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_published: Option<bool>,
}

#[utoipa::path(
    patch,
    path = "/admin/site-pages/{page_id}",
    tag = "admin",
    params(
        ("page_id" = String, Path, description = "Page ID")
    ),
    responses(
        (status = 200, description = "Updated page"),
        (status = 404, description = "Page not found")
    )
)]
#[tracing::instrument(name = "PATCH /admin/site-pages/{page_id}", skip(state, user, body))]
pub async fn update_page(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(page_id): Path<String>,
    Json(body): Json<UpdatePageBody>,
) -> Result<Json<site_page::Model>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManagePages)
        .await?;

    let page = site_page::Entity::find_by_id(&page_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Page {} not found", page_id))?;

    let mut active = page.into_active_model();

    if let Some(title) = body.title {
        if title.trim().is_empty() {
            return Err(ApiError::bad_request("Title must not be empty"));
        }
        active.title = Set(title.trim().to_string());
    }
    if let Some(description) = body.description {
        active.description = Set(Some(description));
    }
    if let Some(is_published) = body.is_published {
        active.is_published = Set(is_published);
    }

    active.updated_at = Set(chrono::Utc::now().naive_utc());

    let updated = active.update(&state.db).await?;

    state.invalidate_cache(&page_tree_cache_key(&page_id));

    Ok(Json(updated))
}
