use crate::{
    entity::{bank_question, question_bank, sea_orm_active_enums::QuestionDifficulty},
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
pub struct CreateQuestionBody {
    pub question: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    /// 0-based index into the four options
    pub correct_option: i32,
    pub explanation: Option<String>,
    pub difficulty: Option<QuestionDifficulty>,
}

#[utoipa::path(
    post,
    path = "/admin/question-banks/{bank_id}/questions",
    tag = "admin",
    params(
        ("bank_id" = String, Path, description = "Question bank ID")
    ),
    responses(
        (status = 200, description = "Created question"),
        (status = 400, description = "Validation failure"),
        (status = 404, description = "Bank not found")
    )
)]
#[tracing::instrument(
    name = "POST /admin/question-banks/{bank_id}/questions",
    skip(state, user, body)
)]
pub async fn create_question(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(bank_id): Path<String>,
    Json(body): Json<CreateQuestionBody>,
) -> Result<Json<bank_question::Model>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageContent)
        .await?;

    if body.question.trim().is_empty() {
        return Err(ApiError::bad_request("Question text is required"));
    }
    if !(0..=3).contains(&body.correct_option) {
        return Err(ApiError::bad_request("correctOption must be 0-3"));
    }
    for (label, option) in [
        ("A", &body.option_a),
        ("B", &body.option_b),
        ("C", &body.option_c),
        ("D", &body.option_d),
    ] {
        if option.trim().is_empty() {
            return Err(ApiError::bad_request(format!(
                "Option {} must not be empty",
                label
            )));
        }
    }

    question_bank::Entity::find_by_id(&bank_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Question bank {} not found", bank_id))?;

    let now = chrono::Utc::now().naive_utc();
    let question = bank_question::ActiveModel {
        id: Set(create_id()),
        bank_id: Set(bank_id.clone()),
        question: Set(body.question.trim().to_string()),
        option_a: Set(body.option_a),
        option_b: Set(body.option_b),
        option_c: Set(body.option_c),
        option_d: Set(body.option_d),
        correct_option: Set(body.correct_option),
        explanation: Set(body.explanation),
        difficulty: Set(body.difficulty.unwrap_or(QuestionDifficulty::Medium)),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let created = question.insert(&state.db).await?;
    Ok(Json(created))
}
