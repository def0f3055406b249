use crate::{
    entity::{course, course_unit},
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
use licensure_types::create_id;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter,
};
use serde::Deserialize;

use super::next_ordinal;
use utoipa::ToSchema;

#[derive(Clone, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUnitBody {
    pub title: String,
    pub description: Option<String>,
    pub hours_required: Option<i32>,
}

#[utoipa::path(
    post,
    path = "/admin/courses/{course_id}/units",
    tag = "admin",
    params(
        ("course_id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Created unit with appended unit number"),
        (status = 404, description = "Course not found")
    )
)]
#[tracing::instrument(name = "POST /admin/courses/{course_id}/units", skip(state, user, body))]
pub async fn create_unit(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(course_id): Path<String>,
    Json(body): Json<CreateUnitBody>,
) -> Result<Json<course_unit::Model>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageContent)
        .await?;

    if body.title.trim().is_empty() {
        return Err(ApiError::bad_request("Title is required"));
    }

    course::Entity::find_by_id(&course_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Course {} not found", course_id))?;

    let existing = course_unit::Entity::find()
        .filter(course_unit::Column::CourseId.eq(&course_id))
        .count(&state.db)
        .await?;

    let now = chrono::Utc::now().naive_utc();
    let unit = course_unit::ActiveModel {
        id: Set(create_id()),
        course_id: Set(course_id.clone()),
        unit_number: Set(next_ordinal(existing)),
        title: Set(body.title.trim().to_string()),
        description: Set(body.description),
        hours_required: Set(body.hours_required),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let created = unit.insert(&state.db).await?;

    state.invalidate_cache(&course_content_cache_key(&course_id));

    Ok(Json(created))
}
