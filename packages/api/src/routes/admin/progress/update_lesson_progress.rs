use crate::{
    entity::{lesson_progress, sea_orm_active_enums::ProgressStatus},
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
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait, IntoActiveModel};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Clone, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLessonProgressBody {
    pub status: Option<ProgressStatus>,
    pub completed: Option<bool>,
    pub quiz_passed: Option<bool>,
    pub quiz_score: Option<i32>,
}

#[utoipa::path(
    patch,
    path = "/admin/lesson-progress/{progress_id}",
    tag = "admin",
    params(
        ("progress_id" = String, Path, description = "Lesson progress row ID")
    ),
    responses(
        (status = 200, description = "Updated lesson progress"),
        (status = 404, description = "Progress row not found")
    )
)]
#[tracing::instrument(name = "PATCH /admin/lesson-progress/{progress_id}", skip(state, user, body))]
pub async fn update_lesson_progress(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(progress_id): Path<String>,
    Json(body): Json<UpdateLessonProgressBody>,
) -> Result<Json<lesson_progress::Model>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageUsers)
        .await?;

    let progress = lesson_progress::Entity::find_by_id(&progress_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Lesson progress {} not found", progress_id))?;

    let now = chrono::Utc::now().naive_utc();
    let mut active = progress.into_active_model();

    if let Some(status) = body.status {
        if status == ProgressStatus::Completed {
            active.completed_at = Set(Some(now));
        }
        active.status = Set(status);
    }
    if let Some(completed) = body.completed {
        active.completed = Set(completed);
        if completed {
            active.completed_at = Set(Some(now));
        }
    }
    if let Some(quiz_passed) = body.quiz_passed {
        active.quiz_passed = Set(quiz_passed);
    }
    if let Some(quiz_score) = body.quiz_score {
        if !(0..=100).contains(&quiz_score) {
            return Err(ApiError::bad_request("quizScore must be 0-100"));
        }
        active.quiz_score = Set(Some(quiz_score));
    }

    active.updated_at = Set(now);

    let updated = active.update(&state.db).await?;
    Ok(Json(updated))
}
