use crate::{
    entity::question_bank, error::ApiError, middleware::jwt::AppUser, not_found,
    permission::global_permission::GlobalPermission, state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use sea_orm::EntityTrait;

#[utoipa::path(
    delete,
    path = "/admin/question-banks/{bank_id}",
    tag = "admin",
    params(
        ("bank_id" = String, Path, description = "Question bank ID")
    ),
    responses(
        (status = 200, description = "Bank and its questions deleted"),
        (status = 404, description = "Bank not found")
    )
)]
#[tracing::instrument(name = "DELETE /admin/question-banks/{bank_id}", skip(state, user))]
pub async fn delete_bank(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(bank_id): Path<String>,
) -> Result<Json<()>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageContent)
        .await?;

    let result = question_bank::Entity::delete_by_id(&bank_id)
        .exec(&state.db)
        .await?;
    if result.rows_affected == 0 {
        return Err(not_found!("Question bank {} not found", bank_id));
    }

    Ok(Json(()))
}
