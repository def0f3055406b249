use crate::{
    entity::bank_question, error::ApiError, middleware::jwt::AppUser, not_found,
    permission::global_permission::GlobalPermission, state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use sea_orm::EntityTrait;

#[utoipa::path(
    delete,
    path = "/admin/questions/{question_id}",
    tag = "admin",
    params(
        ("question_id" = String, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question deleted"),
        (status = 404, description = "Question not found")
    )
)]
#[tracing::instrument(name = "DELETE /admin/questions/{question_id}", skip(state, user))]
pub async fn delete_question(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(question_id): Path<String>,
) -> Result<Json<()>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageContent)
        .await?;

    let result = bank_question::Entity::delete_by_id(&question_id)
        .exec(&state.db)
        .await?;
    if result.rows_affected == 0 {
        return Err(not_found!("Question {} not found", question_id));
    }

    Ok(Json(()))
}
