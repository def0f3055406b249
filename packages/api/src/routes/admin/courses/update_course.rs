use crate::{
    entity::course,
    entity::sea_orm_active_enums::{CourseState, ProductType},
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
pub struct UpdateCourseBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub product_type: Option<ProductType>,
    pub state: Option<CourseState>,
    pub license_type: Option<String>,
    pub requirement_cycle_type: Option<String>,
    pub requirement_bucket: Option<String>,
    pub hours_required: Option<i32>,
    pub delivery_method: Option<String>,
    pub difficulty_level: Option<String>,
    pub price: Option<i64>,
    pub renewal_applicable: Option<bool>,
    pub renewal_period_years: Option<i32>,
    pub expiration_months: Option<i32>,
    pub provider_number: Option<String>,
    pub course_offering_number: Option<String>,
    pub instructor_name: Option<String>,
}

#[utoipa::path(
    patch,
    path = "/admin/courses/{course_id}",
    tag = "admin",
    params(
        ("course_id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Updated course"),
        (status = 404, description = "Course not found")
    )
)]
#[tracing::instrument(name = "PATCH /admin/courses/{course_id}", skip(state, user, body))]
pub async fn update_course(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(course_id): Path<String>,
    Json(body): Json<UpdateCourseBody>,
) -> Result<Json<course::Model>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageCourses)
        .await?;

    let course = course::Entity::find_by_id(&course_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Course {} not found", course_id))?;

    let mut active = course.into_active_model();

    if let Some(title) = body.title {
        if title.trim().is_empty() {
            return Err(ApiError::bad_request("Title must not be empty"));
        }
        active.title = Set(title.trim().to_string());
    }
    if let Some(description) = body.description {
        active.description = Set(Some(description));
    }
    if let Some(product_type) = body.product_type {
        active.product_type = Set(product_type);
    }
    if let Some(course_state) = body.state {
        active.state = Set(course_state);
    }
    if let Some(license_type) = body.license_type {
        active.license_type = Set(Some(license_type));
    }
    if let Some(cycle) = body.requirement_cycle_type {
        active.requirement_cycle_type = Set(Some(cycle));
    }
    if let Some(bucket) = body.requirement_bucket {
        active.requirement_bucket = Set(Some(bucket));
    }
    if let Some(hours) = body.hours_required {
        active.hours_required = Set(hours);
    }
    if let Some(delivery) = body.delivery_method {
        active.delivery_method = Set(Some(delivery));
    }
    if let Some(difficulty) = body.difficulty_level {
        active.difficulty_level = Set(Some(difficulty));
    }
    if let Some(price) = body.price {
        if price < 0 {
            return Err(ApiError::bad_request("Price must not be negative"));
        }
        active.price = Set(price);
    }
    if let Some(renewal) = body.renewal_applicable {
        active.renewal_applicable = Set(renewal);
    }
    if let Some(years) = body.renewal_period_years {
        active.renewal_period_years = Set(Some(years));
    }
    if let Some(months) = body.expiration_months {
        active.expiration_months = Set(Some(months));
    }
    if let Some(provider) = body.provider_number {
        active.provider_number = Set(Some(provider));
    }
    if let Some(offering) = body.course_offering_number {
        active.course_offering_number = Set(Some(offering));
    }
    if let Some(instructor) = body.instructor_name {
        active.instructor_name = Set(Some(instructor));
    }

    active.updated_at = Set(chrono::Utc::now().naive_utc());

    let updated = active.update(&state.db).await?;

    state.invalidate_cache(&course_content_cache_key(&course_id));

    Ok(Json(updated))
}
