use crate::{
    entity::email_template, error::ApiError, middleware::jwt::AppUser, not_found,
    permission::global_permission::GlobalPermission, state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use sea_orm::EntityTrait;

#[utoipa::path(
    delete,
    path = "/admin/email-templates/{template_id}",
    tag = "admin",
    params(
        ("template_id" = String, Path, description = "Template ID")
    ),
    responses(
        (status = 200, description = "Template deleted"),
        (status = 404, description = "Template not found")
    )
)]
#[tracing::instrument(name = "DELETE /admin/email-templates/{template_id}", skip(state, user))]
pub async fn delete_template(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(template_id): Path<String>,
) -> Result<Json<()>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageSettings)
        .await?;

    let result = email_template::Entity::delete_by_id(&template_id)
        .exec(&state.db)
        .await?;
    if result.rows_affected == 0 {
        return Err(not_found!("Template {} not found", template_id));
    }

    Ok(Json(()))
}
