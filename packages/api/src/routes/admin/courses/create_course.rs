use crate::{
    entity::course,
    entity::sea_orm_active_enums::{CourseState, ProductType},
    error::ApiError,
    middleware::jwt::AppUser,
    permission::global_permission::GlobalPermission,
    state::AppState,
};
use axum::{Extension, Json, extract::State};
use licensure_types::create_id;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Clone, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseBody {
    pub title: String,
    pub description: Option<String>,
    pub product_type: ProductType,
    pub state: CourseState,
    pub license_type: Option<String>,
    pub requirement_cycle_type: Option<String>,
    pub requirement_bucket: Option<String>,
    pub hours_required: Option<i32>,
    pub delivery_method: Option<String>,
    pub difficulty_level: Option<String>,
    /// Price in cents
    pub price: Option<i64>,
    pub sku: String,
    pub renewal_applicable: Option<bool>,
    pub renewal_period_years: Option<i32>,
    pub expiration_months: Option<i32>,
    pub provider_number: Option<String>,
    pub course_offering_number: Option<String>,
    pub instructor_name: Option<String>,
}

#[utoipa::path(
    post,
    path = "/admin/courses",
    tag = "admin",
    responses(
        (status = 200, description = "Created course"),
        (status = 400, description = "Validation failure"),
        (status = 409, description = "SKU already in use")
    )
)]
#[tracing::instrument(name = "POST /admin/courses", skip(state, user, body))]
pub async fn create_course(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Json(body): Json<CreateCourseBody>,
) -> Result<Json<course::Model>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageCourses)
        .await?;

    if body.title.trim().is_empty() {
        return Err(ApiError::bad_request("Title is required"));
    }
    if body.sku.trim().is_empty() {
        return Err(ApiError::bad_request("SKU is required"));
    }
    if body.price.unwrap_or(0) < 0 {
        return Err(ApiError::bad_request("Price must not be negative"));
    }

    let sku = body.sku.trim().to_string();
    let existing = course::Entity::find()
        .filter(course::Column::Sku.eq(&sku))
        .count(&state.db)
        .await?;
    if existing > 0 {
        return Err(ApiError::conflict(format!("SKU {} already in use", sku)));
    }

    let now = chrono::Utc::now().naive_utc();
    let course = course::ActiveModel {
        id: Set(create_id()),
        title: Set(body.title.trim().to_string()),
        description: Set(body.description),
        product_type: Set(body.product_type),
        state: Set(body.state),
        license_type: Set(body.license_type),
        requirement_cycle_type: Set(body.requirement_cycle_type),
        requirement_bucket: Set(body.requirement_bucket),
        hours_required: Set(body.hours_required.unwrap_or(0)),
        delivery_method: Set(body.delivery_method),
        difficulty_level: Set(body.difficulty_level),
        price: Set(body.price.unwrap_or(0)),
        sku: Set(sku),
        renewal_applicable: Set(body.renewal_applicable.unwrap_or(false)),
        renewal_period_years: Set(body.renewal_period_years),
        expiration_months: Set(body.expiration_months),
        provider_number: Set(body.provider_number),
        course_offering_number: Set(body.course_offering_number),
        instructor_name: Set(body.instructor_name),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let created = course.insert(&state.db).await?;
    Ok(Json(created))
}
