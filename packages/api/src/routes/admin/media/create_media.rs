use crate::{
    entity::{media_asset, sea_orm_active_enums::MediaType},
    error::ApiError,
    middleware::jwt::AppUser,
    permission::global_permission::GlobalPermission,
    state::AppState,
};
use axum::{Extension, Json, extract::State};
use licensure_types::create_id;
use sea_orm::{ActiveModelTrait, ActiveValue::Set};
use serde::Deserialize;

use super::{file_name_from_url, infer_media_type};
use utoipa::ToSchema;

/// Either explicit upload metadata or a bare pasted URL; `file_type` and
/// `file_name` are inferred when absent.
#[derive(Clone, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMediaBody {
    pub file_url: String,
    pub file_name: Option<String>,
    pub file_type: Option<MediaType>,
    pub mime_type: Option<String>,
    pub file_size: Option<i64>,
    pub thumbnail_url: Option<String>,
}

#[utoipa::path(
    post,
    path = "/admin/media",
    tag = "admin",
    responses(
        (status = 200, description = "Registered media asset"),
        (status = 400, description = "Missing URL")
    )
)]
#[tracing::instrument(name = "POST /admin/media", skip(state, user, body))]
pub async fn create_media(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Json(body): Json<CreateMediaBody>,
) -> Result<Json<media_asset::Model>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageContent)
        .await?;

    let file_url = body.file_url.trim().to_string();
    if file_url.is_empty() {
        return Err(ApiError::bad_request("File URL is required"));
    }

    let file_type = body
        .file_type
        .unwrap_or_else(|| infer_media_type(&file_url));
    let file_name = body
        .file_name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| file_name_from_url(&file_url));

    let asset = media_asset::ActiveModel {
        id: Set(create_id()),
        file_name: Set(file_name),
        file_url: Set(file_url),
        file_type: Set(file_type),
        mime_type: Set(body.mime_type),
        file_size: Set(body.file_size),
        thumbnail_url: Set(body.thumbnail_url),
        created_at: Set(chrono::Utc::now().naive_utc()),
    };

    let created = asset.insert(&state.db).await?;
    Ok(Json(created))
}
