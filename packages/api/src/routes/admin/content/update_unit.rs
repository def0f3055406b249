use crate::{
    entity::course_unit,
    error::ApiError,
    middleware::jwt::AppUser,
    not_found,
    permission::global_permission::GlobalPermission,
    state::{AppState, course_content_cache_key},
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
pub struct UpdateUnitBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub hours_required: Option<i32>,
}

#[utoipa::path(
    patch,
    path = "/admin/units/{unit_id}",
    tag = "admin",
    params(
        ("unit_id" = String, Path, description = "Unit ID")
    ),
    responses(
        (status = 200, description = "Updated unit"),
        (status = 404, description = "Unit not found")
    )
)]
#[tracing::instrument(name = "PATCH /admin/units/{unit_id}", skip(state, user, body))]
pub async fn update_unit(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(unit_id): Path<String>,
    Json(body): Json<UpdateUnitBody>,
) -> Result<Json<course_unit::Model>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageContent)
        .await?;

    let unit = course_unit::Entity::find_by_id(&unit_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Unit {} not found", unit_id))?;

    let course_id = unit.course_id.clone();
    let mut active = unit.into_active_model();

    if let Some(title) = body.title {
        if title.trim().is_empty() {
            return Err(ApiError::bad_request("Title must not be empty"));
        }
        active.title = Set(title.trim().to_string());
    }
    if let Some(description) = body.description {
        active.description = Set(Some(description));
    }
    if let Some(hours) = body.hours_required {
        active.hours_required = Set(Some(hours));
    }

    active.updated_at = Set(chrono::Utc::now().naive_utc());

    let updated = active.update(&state.db).await?;

    state.invalidate_cache(&course_content_cache_key(&course_id));

    Ok(Json(updated))
}
