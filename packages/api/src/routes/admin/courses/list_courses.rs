use crate::{
    entity::course, error::ApiError, middleware::jwt::AppUser,
    permission::global_permission::GlobalPermission, state::AppState,
};
use axum::{Extension, Json, extract::State};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ListCoursesResponse {
    pub courses: Vec<course::Model>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub has_more: bool,
}

#[derive(Clone, Deserialize, Debug, IntoParams)]
pub struct ListCoursesQuery {
    pub search: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[utoipa::path(
    get,
    path = "/admin/courses",
    tag = "admin",
    params(ListCoursesQuery),
    responses(
        (status = 200, description = "Paged course list"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    )
)]
#[tracing::instrument(name = "GET /admin/courses", skip(state, user))]
pub async fn list_courses(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    axum::extract::Query(query): axum::extract::Query<ListCoursesQuery>,
) -> Result<Json<ListCoursesResponse>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageCourses)
        .await?;

    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(25).min(100);

    let mut select = course::Entity::find().order_by_desc(course::Column::CreatedAt);

    if let Some(search) = &query.search
        && !search.trim().is_empty()
    {
        let pattern = format!("%{}%", search.trim().to_lowercase());
        select = select.filter(
            course::Column::Title
                .like(&pattern)
                .or(course::Column::Sku.like(&pattern)),
        );
    }

    let total = select.clone().count(&state.db).await?;

    let courses = select
        .paginate(&state.db, limit)
        .fetch_page(page - 1)
        .await?;

    let has_more = (page * limit) < total;

    Ok(Json(ListCoursesResponse {
        courses,
        total,
        page,
        limit,
        has_more,
    }))
}
