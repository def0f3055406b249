use crate::{
    entity::system_setting, error::ApiError, middleware::jwt::AppUser,
    permission::global_permission::GlobalPermission, state::AppState,
};
use axum::{Extension, Json, extract::State};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait, IntoActiveModel};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Clone, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertSettingBody {
    pub key: String,
    pub value: String,
    pub category: Option<String>,
}

#[utoipa::path(
    put,
    path = "/admin/settings",
    tag = "admin",
    responses(
        (status = 200, description = "Setting created or updated"),
        (status = 400, description = "Missing key")
    )
)]
#[tracing::instrument(name = "PUT /admin/settings", skip(state, user, body))]
pub async fn upsert_setting(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Json(body): Json<UpsertSettingBody>,
) -> Result<Json<system_setting::Model>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageSettings)
        .await?;

    let key = body.key.trim().to_string();
    if key.is_empty() {
        return Err(ApiError::bad_request("Key is required"));
    }

    let now = chrono::Utc::now().naive_utc();
    let existing = system_setting::Entity::find_by_id(&key)
        .one(&state.db)
        .await?;

    let saved = match existing {
        Some(setting) => {
            let mut active = setting.into_active_model();
            active.value = Set(body.value);
            if let Some(category) = body.category {
                active.category = Set(Some(category));
            }
            active.updated_at = Set(now);
            active.update(&state.db).await?
        }
        None => {
            let active = system_setting::ActiveModel {
                key: Set(key),
                value: Set(body.value),
                category: Set(body.category),
                updated_at: Set(now),
            };
            active.insert(&state.db).await?
        }
    };

    Ok(Json(saved))
}
