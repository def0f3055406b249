use crate::{
    entity::site_page, error::ApiError, middleware::jwt::AppUser,
    permission::global_permission::GlobalPermission, state::AppState,
};
use axum::{Extension, Json, extract::State};
use licensure_types::create_id;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Clone, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePageBody {
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub is_published: Option<bool>,
}

#[utoipa::path(
    post,
    path = "/admin/site-pages",
    tag = "admin",
    responses(
        (status = 200, description = "Created page"),
        (status = 409, description = "Slug already in use")
    )
)]
#[tracing::instrument(name = "POST /admin/site-pages", skip(state, user, body))]
pub async fn create_page(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Json(body): Json<CreatePageBody>,
) -> Result<Json<site_page::Model>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManagePages)
        .await?;

    let slug = body.slug.trim().to_lowercase();
    if slug.is_empty() {
        return Err(ApiError::bad_request("Slug is required"));
    }
    if body.title.trim().is_empty() {
        return Err(ApiError::bad_request("Title is required"));
    }

    let existing = site_page::Entity::find()
        .filter(site_page::Column::Slug.eq(&slug))
        .count(&state.db)
        .await?;
    if existing > 0 {
        return Err(ApiError::conflict(format!("Slug {} already in use", slug)));
    }

    let now = chrono::Utc::now().naive_utc();
    let page = site_page::ActiveModel {
        id: Set(create_id()),
        slug: Set(slug),
        title: Set(body.title.trim().to_string()),
        description: Set(body.description),
        is_published: Set(body.is_published.unwrap_or(false)),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let created = page.insert(&state.db).await?;
    Ok(Json(created))
}
