use crate::{
    entity::email_template, error::ApiError, middleware::jwt::AppUser,
    permission::global_permission::GlobalPermission, state::AppState,
};
use axum::{Extension, Json, extract::State};
use sea_orm::{EntityTrait, QueryOrder};

#[utoipa::path(
    get,
    path = "/admin/email-templates",
    tag = "admin",
    responses(
        (status = 200, description = "All email templates"),
        (status = 403, description = "Forbidden")
    )
)]
#[tracing::instrument(name = "GET /admin/email-templates", skip(state, user))]
pub async fn list_templates(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
) -> Result<Json<Vec<email_template::Model>>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageSettings)
        .await?;

    let templates = email_template::Entity::find()
        .order_by_asc(email_template::Column::Name)
        .all(&state.db)
        .await?;

    Ok(Json(templates))
}
