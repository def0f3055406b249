use crate::{
    entity::{bank_question, question_bank},
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
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

#[utoipa::path(
    get,
    path = "/admin/question-banks/{bank_id}/questions",
    tag = "admin",
    params(
        ("bank_id" = String, Path, description = "Question bank ID")
    ),
    responses(
        (status = 200, description = "Questions in authoring order"),
        (status = 404, description = "Bank not found")
    )
)]
#[tracing::instrument(name = "GET /admin/question-banks/{bank_id}/questions", skip(state, user))]
pub async fn list_questions(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(bank_id): Path<String>,
) -> Result<Json<Vec<bank_question::Model>>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageContent)
        .await?;

    question_bank::Entity::find_by_id(&bank_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Question bank {} not found", bank_id))?;

    let questions = bank_question::Entity::find()
        .filter(bank_question::Column::BankId.eq(&bank_id))
        .order_by_asc(bank_question::Column::CreatedAt)
        .all(&state.db)
        .await?;

    Ok(Json(questions))
}
