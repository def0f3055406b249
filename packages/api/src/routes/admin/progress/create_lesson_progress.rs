use crate::{
    entity::{enrollment, lesson, lesson_progress, sea_orm_active_enums::ProgressStatus},
    error::ApiError,
    middleware::jwt::AppUser,
    not_found,
    permission::global_permission::GlobalPermission,
    state::AppState,
};
use axum::{Extension, Json, extract::State};
use licensure_types::create_id;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter};
use serde::Deserialize;
use utoipa::ToSchema;

/// Lazy row creation for lessons without a progress row yet. Invoked from
/// the mark-complete action, so `completed` defaults to true.
#[derive(Clone, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLessonProgressBody {
    pub enrollment_id: String,
    pub lesson_id: String,
    pub completed: Option<bool>,
    pub status: Option<ProgressStatus>,
}

#[utoipa::path(
    post,
    path = "/admin/lesson-progress",
    tag = "admin",
    responses(
        (status = 200, description = "Created lesson progress row"),
        (status = 404, description = "Enrollment or lesson not found"),
        (status = 409, description = "Row already exists")
    )
)]
#[tracing::instrument(name = "POST /admin/lesson-progress", skip(state, user, body))]
pub async fn create_lesson_progress(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Json(body): Json<CreateLessonProgressBody>,
) -> Result<Json<lesson_progress::Model>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageUsers)
        .await?;

    enrollment::Entity::find_by_id(&body.enrollment_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Enrollment {} not found", body.enrollment_id))?;

    lesson::Entity::find_by_id(&body.lesson_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Lesson {} not found", body.lesson_id))?;

    let existing = lesson_progress::Entity::find()
        .filter(lesson_progress::Column::EnrollmentId.eq(&body.enrollment_id))
        .filter(lesson_progress::Column::LessonId.eq(&body.lesson_id))
        .one(&state.db)
        .await?;
    if existing.is_some() {
        return Err(ApiError::conflict(
            "Progress row already exists for this lesson",
        ));
    }

    let completed = body.completed.unwrap_or(true);
    let status = body.status.unwrap_or(if completed {
        ProgressStatus::Completed
    } else {
        ProgressStatus::InProgress
    });

    let now = chrono::Utc::now().naive_utc();
    let progress = lesson_progress::ActiveModel {
        id: Set(create_id()),
        enrollment_id: Set(body.enrollment_id.clone()),
        lesson_id: Set(body.lesson_id.clone()),
        status: Set(status),
        completed: Set(completed),
        quiz_passed: Set(false),
        quiz_score: Set(None),
        completed_at: Set(completed.then_some(now)),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let created = progress.insert(&state.db).await?;
    Ok(Json(created))
}
