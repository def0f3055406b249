use crate::{
    entity::{course, question_bank, sea_orm_active_enums::BankType},
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
use licensure_types::create_id;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Clone, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBankBody {
    pub title: String,
    pub bank_type: BankType,
    /// Required for unit-quiz banks
    pub unit_id: Option<String>,
    /// Required for final-exam banks ("A"/"B")
    pub exam_form: Option<String>,
    pub questions_per_attempt: Option<i32>,
    pub passing_score: Option<i32>,
    pub time_limit_minutes: Option<i32>,
}

#[utoipa::path(
    post,
    path = "/admin/courses/{course_id}/question-banks",
    tag = "admin",
    params(
        ("course_id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Created question bank"),
        (status = 400, description = "Validation failure"),
        (status = 404, description = "Course not found")
    )
)]
#[tracing::instrument(
    name = "POST /admin/courses/{course_id}/question-banks",
    skip(state, user, body)
)]
pub async fn create_bank(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(course_id): Path<String>,
    Json(body): Json<CreateBankBody>,
) -> Result<Json<question_bank::Model>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageContent)
        .await?;

    if body.title.trim().is_empty() {
        return Err(ApiError::bad_request("Title is required"));
    }

    course::Entity::find_by_id(&course_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Course {} not found", course_id))?;

    let (unit_id, exam_form) = match body.bank_type {
        BankType::UnitQuiz => {
            let unit_id = body
                .unit_id
                .ok_or_else(|| ApiError::bad_request("Unit quiz banks require a unitId"))?;
            (Some(unit_id), None)
        }
        BankType::FinalExam => {
            let form = body
                .exam_form
                .map(|f| f.trim().to_ascii_uppercase())
                .filter(|f| !f.is_empty())
                .ok_or_else(|| ApiError::bad_request("Final exam banks require an examForm"))?;
            (None, Some(form))
        }
    };

    let questions_per_attempt = body.questions_per_attempt.unwrap_or(10);
    if questions_per_attempt <= 0 {
        return Err(ApiError::bad_request(
            "questionsPerAttempt must be positive",
        ));
    }
    let passing_score = body.passing_score.unwrap_or(70);
    if !(0..=100).contains(&passing_score) {
        return Err(ApiError::bad_request("passingScore must be 0-100"));
    }

    let now = chrono::Utc::now().naive_utc();
    let bank = question_bank::ActiveModel {
        id: Set(create_id()),
        course_id: Set(course_id.clone()),
        unit_id: Set(unit_id),
        bank_type: Set(body.bank_type),
        exam_form: Set(exam_form),
        title: Set(body.title.trim().to_string()),
        questions_per_attempt: Set(questions_per_attempt),
        passing_score: Set(passing_score),
        time_limit_minutes: Set(body.time_limit_minutes),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let created = bank.insert(&state.db).await?;
    Ok(Json(created))
}
