use crate::{
    entity::email_template, error::ApiError, middleware::jwt::AppUser, not_found,
    permission::global_permission::GlobalPermission, state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use sea_orm::EntityTrait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreviewTemplateBody {
    /// Placeholder values keyed by variable name
    pub variables: Option<serde_json::Value>,
}

#[derive(Clone, Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreviewTemplateResponse {
    pub subject: String,
    pub body: String,
}

/// Renders subject and body with minijinja against the supplied variables.
/// Authoring-time aid only; nothing is sent.
#[utoipa::path(
    post,
    path = "/admin/email-templates/{template_id}/preview",
    tag = "admin",
    params(
        ("template_id" = String, Path, description = "Template ID")
    ),
    responses(
        (status = 200, description = "Rendered subject and body", body = PreviewTemplateResponse),
        (status = 400, description = "Template failed to render"),
        (status = 404, description = "Template not found")
    )
)]
#[tracing::instrument(
    name = "POST /admin/email-templates/{template_id}/preview",
    skip(state, user, body)
)]
pub async fn preview_template(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(template_id): Path<String>,
    Json(body): Json<PreviewTemplateBody>,
) -> Result<Json<PreviewTemplateResponse>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageSettings)
        .await?;

    let template = email_template::Entity::find_by_id(&template_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Template {} not found", template_id))?;

    let variables = body
        .variables
        .unwrap_or_else(|| serde_json::Value::Object(Default::default()));

    let mut env = minijinja::Environment::new();
    env.add_template("subject", &template.subject)?;
    env.add_template("body", &template.body)?;

    let subject = env.get_template("subject")?.render(&variables)?;
    let rendered_body = env.get_template("body")?.render(&variables)?;

    Ok(Json(PreviewTemplateResponse {
        subject,
        body: rendered_body,
    }))
}
