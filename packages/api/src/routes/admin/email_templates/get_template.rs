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
    get,
    path = "/admin/email-templates/{template_id}",
    tag = "admin",
    params(
        ("template_id" = String, Path, description = "Template ID")
    ),
    responses(
        (status = 200, description = "Email template"),
        (status = 404, description = "Template not found")
    )
)]
#[tracing::instrument(name = "GET /admin/email-templates/{template_id}", skip(state, user))]
pub async fn get_template(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(template_id): Path<String>,
) -> Result<Json<email_template::Model>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageSettings)
        .await?;

    let template = email_template::Entity::find_by_id(&template_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Template {} not found", template_id))?;

    Ok(Json(template))
}
