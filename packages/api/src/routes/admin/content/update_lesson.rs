use crate::{
    entity::{course_unit, lesson},
    error::ApiError,
    middleware::jwt::AppUser,
    not_found,
    permission::global_permission::GlobalPermission,
    state::{AppState, course_content_cache_key},
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
pub struct UpdateLessonBody {
    pub title: Option<String>,
    pub video_url: Option<String>,
    pub duration_minutes: Option<i32>,
    pub content: Option<String>,
}

#[utoipa::path(
    patch,
    path = "/admin/lessons/{lesson_id}",
    tag = "admin",
    params(
        ("lesson_id" = String, Path, description = "Lesson ID")
    ),
    responses(
        (status = 200, description = "Updated lesson"),
        (status = 404, description = "Lesson not found")
    )
)]
#[tracing::instrument(name = "PATCH /admin/lessons/{lesson_id}", skip(state, user, body))]
pub async fn update_lesson(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(lesson_id): Path<String>,
    Json(body): Json<UpdateLessonBody>,
) -> Result<Json<lesson::Model>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageContent)
        .await?;

    let existing = lesson::Entity::find_by_id(&lesson_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Lesson {} not found", lesson_id))?;

    let unit_id = existing.unit_id.clone();
    let mut active = existing.into_active_model();

    if let Some(title) = body.title {
        if title.trim().is_empty() {
            return Err(ApiError::bad_request("Title must not be empty"));
        }
        active.title = Set(title.trim().to_string());
    }
    if let Some(video_url) = body.video_url {
        active.video_url = Set(Some(video_url));
    }
    if let Some(duration) = body.duration_minutes {
        active.duration_minutes = Set(Some(duration));
    }
    if let Some(content) = body.content {
        let content = if content.trim().is_empty() {
            lesson::CONTENT_PLACEHOLDER.to_string()
        } else {
            content
        };
        active.content = Set(content);
    }

    active.updated_at = Set(chrono::Utc::now().naive_utc());

    let updated = active.update(&state.db).await?;

    if let Some(unit) = course_unit::Entity::find_by_id(&unit_id).one(&state.db).await? {
        state.invalidate_cache(&course_content_cache_key(&unit.course_id));
    }

    Ok(Json(updated))
}
