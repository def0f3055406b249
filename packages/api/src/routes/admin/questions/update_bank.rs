use crate::{
    entity::question_bank,
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
pub struct UpdateBankBody {
    pub title: Option<String>,
    pub questions_per_attempt: Option<i32>,
    pub passing_score: Option<i32>,
    pub time_limit_minutes: Option<i32>,
}

#[utoipa::path(
    patch,
    path = "/admin/question-banks/{bank_id}",
    tag = "admin",
    params(
        ("bank_id" = String, Path, description = "Question bank ID")
    ),
    responses(
        (status = 200, description = "Updated question bank"),
        (status = 404, description = "Bank not found")
    )
)]
#[tracing::instrument(name = "PATCH /admin/question-banks/{bank_id}", skip(state, user, body))]
pub async fn update_bank(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(bank_id): Path<String>,
    Json(body): Json<UpdateBankBody>,
) -> Result<Json<question_bank::Model>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageContent)
        .await?;

    let bank = question_bank::Entity::find_by_id(&bank_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Question bank {} not found", bank_id))?;

    let mut active = bank.into_active_model();

    if let Some(title) = body.title {
        if title.trim().is_empty() {
            return Err(ApiError::bad_request("Title must not be empty"));
        }
        active.title = Set(title.trim().to_string());
    }
    if let Some(per_attempt) = body.questions_per_attempt {
        if per_attempt <= 0 {
            return Err(ApiError::bad_request(
                "questionsPerAttempt must be positive",
            ));
        }
        active.questions_per_attempt = Set(per_attempt);
    }
    if let Some(score) = body.passing_score {
        if !(0..=100).contains(&score) {
            return Err(ApiError::bad_request("passingScore must be 0-100"));
        }
        active.passing_score = Set(score);
    }
    if let Some(limit) = body.time_limit_minutes {
        active.time_limit_minutes = Set(Some(limit));
    }

    active.updated_at = Set(chrono::Utc::now().naive_utc());

    let updated = active.update(&state.db).await?;
    Ok(Json(updated))
}
