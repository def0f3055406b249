use crate::{
    entity::{analytics_event, user},
    error::ApiError,
    middleware::jwt::AppUser,
    not_found,
    permission::global_permission::GlobalPermission,
    state::{ANALYTICS_SUMMARY_CACHE_KEY, AppState},
};
use axum::{Extension, Json, extract::State};
use licensure_types::create_id;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Clone, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordEventBody {
    pub user_id: String,
    pub event_type: String,
    pub course_id: Option<String>,
    pub lesson_id: Option<String>,
}

#[utoipa::path(
    post,
    path = "/admin/analytics/events",
    tag = "admin",
    responses(
        (status = 200, description = "Recorded event"),
        (status = 404, description = "User not found")
    )
)]
#[tracing::instrument(name = "POST /admin/analytics/events", skip(state, user, body))]
pub async fn record_event(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Json(body): Json<RecordEventBody>,
) -> Result<Json<analytics_event::Model>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ViewAnalytics)
        .await?;

    if body.event_type.trim().is_empty() {
        return Err(ApiError::bad_request("eventType is required"));
    }

    user::Entity::find_by_id(&body.user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("User {} not found", body.user_id))?;

    let event = analytics_event::ActiveModel {
        id: Set(create_id()),
        user_id: Set(body.user_id.clone()),
        event_type: Set(body.event_type.trim().to_string()),
        course_id: Set(body.course_id),
        lesson_id: Set(body.lesson_id),
        created_at: Set(chrono::Utc::now().naive_utc()),
    };

    let created = event.insert(&state.db).await?;

    state.invalidate_cache(ANALYTICS_SUMMARY_CACHE_KEY);

    Ok(Json(created))
}
