use crate::{
    entity::{account_credit, sea_orm_active_enums::CreditType, user},
    error::ApiError,
    middleware::jwt::AppUser,
    not_found,
    permission::global_permission::GlobalPermission,
    state::AppState,
};
use axum::{Extension, Json, extract::State};
use licensure_types::create_id;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};
use serde::Deserialize;
use utoipa::ToSchema;

/// The authoring surface only issues credits; debit entries stay
/// representable in the schema but have no write path here.
#[derive(Clone, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCreditBody {
    pub user_id: String,
    /// Amount in cents, must be positive
    pub amount: i64,
    pub credit_type: CreditType,
    pub description: Option<String>,
    pub purchase_id: Option<String>,
    pub enrollment_id: Option<String>,
}

#[utoipa::path(
    post,
    path = "/admin/credits",
    tag = "admin",
    responses(
        (status = 200, description = "Issued credit"),
        (status = 400, description = "Amount must be positive"),
        (status = 404, description = "User not found")
    )
)]
#[tracing::instrument(name = "POST /admin/credits", skip(state, user, body))]
pub async fn create_credit(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Json(body): Json<CreateCreditBody>,
) -> Result<Json<account_credit::Model>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageFinance)
        .await?;

    if body.amount <= 0 {
        return Err(ApiError::bad_request("Credit amount must be positive"));
    }

    user::Entity::find_by_id(&body.user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("User {} not found", body.user_id))?;

    let credit = account_credit::ActiveModel {
        id: Set(create_id()),
        user_id: Set(body.user_id.clone()),
        amount: Set(body.amount),
        credit_type: Set(body.credit_type),
        description: Set(body.description),
        purchase_id: Set(body.purchase_id),
        enrollment_id: Set(body.enrollment_id),
        created_by: Set(user.sub().ok()),
        created_at: Set(chrono::Utc::now().naive_utc()),
    };

    let created = credit.insert(&state.db).await?;
    Ok(Json(created))
}
