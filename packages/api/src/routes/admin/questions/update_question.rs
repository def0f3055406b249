use crate::{
    entity::{bank_question, sea_orm_active_enums::QuestionDifficulty},
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
pub struct UpdateQuestionBody {
    pub question: Option<String>,
    pub option_a: Option<String>,
    pub option_b: Option<String>,
    pub option_c: Option<String>,
    pub option_d: Option<String>,
    pub correct_option: Option<i32>,
    pub explanation: Option<String>,
    pub difficulty: Option<QuestionDifficulty>,
}

#[utoipa::path(
    patch,
    path = "/admin/questions/{question_id}",
    tag = "admin",
    params(
        ("question_id" = String, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Updated question"),
        (status = 404, description = "Question not found")
    )
)]
#[tracing::instrument(name = "PATCH /admin/questions/{question_id}", skip(state, user, body))]
pub async fn update_question(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(question_id): Path<String>,
    Json(body): Json<UpdateQuestionBody>,
) -> Result<Json<bank_question::Model>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageContent)
        .await?;

    let question = bank_question::Entity::find_by_id(&question_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Question {} not found", question_id))?;

    let mut active = question.into_active_model();

    if let Some(text) = body.question {
        if text.trim().is_empty() {
            return Err(ApiError::bad_request("Question text must not be empty"));
        }
        active.question = Set(text.trim().to_string());
    }
    if let Some(option) = body.option_a {
        active.option_a = Set(option);
    }
    if let Some(option) = body.option_b {
        active.option_b = Set(option);
    }
    if let Some(option) = body.option_c {
        active.option_c = Set(option);
    }
    if let Some(option) = body.option_d {
        active.option_d = Set(option);
    }
    if let Some(correct) = body.correct_option {
        if !(0..=3).contains(&correct) {
            return Err(ApiError::bad_request("correctOption must be 0-3"));
        }
        active.correct_option = Set(correct);
    }
    if let Some(explanation) = body.explanation {
        active.explanation = Set(Some(explanation));
    }
    if let Some(difficulty) = body.difficulty {
        active.difficulty = Set(difficulty);
    }

    active.updated_at = Set(chrono::Utc::now().naive_utc());

    let updated = active.update(&state.db).await?;
    Ok(Json(updated))
}
