use crate::{
    entity::email_template, error::ApiError, middleware::jwt::AppUser,
    permission::global_permission::GlobalPermission, state::AppState,
};
use axum::{Extension, Json, extract::State};
use licensure_types::create_id;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Clone, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTemplateBody {
    pub name: String,
    pub subject: String,
    pub body: String,
    pub description: Option<String>,
    pub variables: Option<serde_json::Value>,
}

#[utoipa::path(
    post,
    path = "/admin/email-templates",
    tag = "admin",
    responses(
        (status = 200, description = "Created template"),
        (status = 409, description = "Name already in use")
    )
)]
#[tracing::instrument(name = "POST /admin/email-templates", skip(state, user, body))]
pub async fn create_template(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Json(body): Json<CreateTemplateBody>,
) -> Result<Json<email_template::Model>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageSettings)
        .await?;

    let name = body.name.trim().to_string();
    if name.is_empty() {
        return Err(ApiError::bad_request("Name is required"));
    }
    if body.subject.trim().is_empty() {
        return Err(ApiError::bad_request("Subject is required"));
    }

    let existing = email_template::Entity::find()
        .filter(email_template::Column::Name.eq(&name))
        .count(&state.db)
        .await?;
    if existing > 0 {
        return Err(ApiError::conflict(format!(
            "Template name {} already in use",
            name
        )));
    }

    let now = chrono::Utc::now().naive_utc();
    let template = email_template::ActiveModel {
        id: Set(create_id()),
        name: Set(name),
        subject: Set(body.subject),
        body: Set(body.body),
        description: Set(body.description),
        variables: Set(body.variables),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let created = template.insert(&state.db).await?;
    Ok(Json(created))
}
