use crate::{
    entity::enrollment, error::ApiError, middleware::jwt::AppUser,
    permission::global_permission::GlobalPermission, state::AppState,
};
use axum::{Extension, Json, extract::State};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Clone, Deserialize, Debug, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListEnrollmentsQuery {
    pub user_id: Option<String>,
    pub course_id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/admin/enrollments",
    tag = "admin",
    params(ListEnrollmentsQuery),
    responses(
        (status = 200, description = "Enrollments, newest first"),
        (status = 403, description = "Forbidden")
    )
)]
#[tracing::instrument(name = "GET /admin/enrollments", skip(state, user))]
pub async fn list_enrollments(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    axum::extract::Query(query): axum::extract::Query<ListEnrollmentsQuery>,
) -> Result<Json<Vec<enrollment::Model>>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageUsers)
        .await?;

    let mut select = enrollment::Entity::find().order_by_desc(enrollment::Column::EnrolledAt);

    if let Some(user_id) = &query.user_id {
        select = select.filter(enrollment::Column::UserId.eq(user_id));
    }
    if let Some(course_id) = &query.course_id {
        select = select.filter(enrollment::Column::CourseId.eq(course_id));
    }

    let enrollments = select.all(&state.db).await?;
    Ok(Json(enrollments))
}
