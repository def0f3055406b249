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
use licensure_types::create_id;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter,
};
use serde::Deserialize;

use super::next_ordinal;
use utoipa::ToSchema;

#[derive(Clone, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLessonBody {
    pub title: String,
    pub video_url: Option<String>,
    pub duration_minutes: Option<i32>,
    pub content: Option<String>,
}

#[utoipa::path(
    post,
    path = "/admin/units/{unit_id}/lessons",
    tag = "admin",
    params(
        ("unit_id" = String, Path, description = "Unit ID")
    ),
    responses(
        (status = 200, description = "Created lesson with appended lesson number"),
        (status = 404, description = "Unit not found")
    )
)]
#[tracing::instrument(name = "POST /admin/units/{unit_id}/lessons", skip(state, user, body))]
pub async fn create_lesson(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(unit_id): Path<String>,
    Json(body): Json<CreateLessonBody>,
) -> Result<Json<lesson::Model>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageContent)
        .await?;

    if body.title.trim().is_empty() {
        return Err(ApiError::bad_request("Title is required"));
    }

    let unit = course_unit::Entity::find_by_id(&unit_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Unit {} not found", unit_id))?;

    let existing = lesson::Entity::find()
        .filter(lesson::Column::UnitId.eq(&unit_id))
        .count(&state.db)
        .await?;

    let content = match body.content {
        Some(content) if !content.trim().is_empty() => content,
        _ => lesson::CONTENT_PLACEHOLDER.to_string(),
    };

    let now = chrono::Utc::now().naive_utc();
    let new_lesson = lesson::ActiveModel {
        id: Set(create_id()),
        unit_id: Set(unit_id.clone()),
        lesson_number: Set(next_ordinal(existing)),
        title: Set(body.title.trim().to_string()),
        video_url: Set(body.video_url),
        duration_minutes: Set(body.duration_minutes),
        content: Set(content),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let created = new_lesson.insert(&state.db).await?;

    state.invalidate_cache(&course_content_cache_key(&unit.course_id));

    Ok(Json(created))
}
