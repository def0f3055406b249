use crate::{
    entity::email_template, error::ApiError, middleware::jwt::AppUser, not_found,
    permission::global_permission::GlobalPermission, state::AppState,
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
pub struct UpdateTemplateBody {
    pub subject: Option<String>,
    pub body: Option<String>,
    pub description: Option<String>,
    pub variables: Option<serde_json::Value>,
}

#[utoipa::path(
    patch,
    path = "/admin/email-templates/{template_id}",
    tag = "admin",
    params(
        ("template_id" = String, Path, description = "Template ID")
    ),
    responses(
        (status = 200, description = "Updated template"),
        (status = 404, description = "Template not found")
    )
)]
#[tracing::instrument(name = "PATCH /admin/email-templates/{template_id}", skip(state, user, body))]
pub async fn update_template(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(template_id): Path<String>,
    Json(body): Json<UpdateTemplateBody>,
) -> Result<Json<email_template::Model>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageSettings)
        .await?;

    let template = email_template::Entity::find_by_id(&template_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Template {} not found", template_id))?;

    let mut active = template.into_active_model();

    if let Some(subject) = body.subject {
        if subject.trim().is_empty() {
            return Err(ApiError::bad_request("Subject must not be empty"));
        }
        active.subject = Set(subject);
    }
    if let Some(template_body) = body.body {
        active.body = Set(template_body);
    }
    if let Some(description) = body.description {
        active.description = Set(Some(description));
    }
    if let Some(variables) = body.variables {
        active.variables = Set(Some(variables));
    }

    active.updated_at = Set(chrono::Utc::now().naive_utc());

    let updated = active.update(&state.db).await?;
    Ok(Json(updated))
}
