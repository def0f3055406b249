use crate::{
    entity::{purchase, refund, sea_orm_active_enums::PurchaseStatus,
        sea_orm_active_enums::RefundReason},
    error::ApiError,
    middleware::jwt::AppUser,
    not_found,
    permission::global_permission::GlobalPermission,
    state::AppState,
};
use axum::{Extension, Json, extract::State};
use licensure_types::create_id;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter,
};
use serde::Deserialize;
use std::str::FromStr;

use super::validate_refund_amount;
use utoipa::ToSchema;

#[derive(Clone, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRefundBody {
    pub purchase_id: String,
    /// Amount in cents; 0 < amount <= purchase.amount
    pub amount: i64,
    pub reason: RefundReason,
    pub notes: Option<String>,
}

#[utoipa::path(
    post,
    path = "/admin/refunds",
    tag = "admin",
    responses(
        (status = 200, description = "Recorded refund"),
        (status = 400, description = "Amount out of range"),
        (status = 404, description = "Purchase not found")
    )
)]
#[tracing::instrument(name = "POST /admin/refunds", skip(state, user, body))]
pub async fn create_refund(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Json(body): Json<CreateRefundBody>,
) -> Result<Json<refund::Model>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageFinance)
        .await?;

    let purchase_row = purchase::Entity::find_by_id(&body.purchase_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| not_found!("Purchase {} not found", body.purchase_id))?;

    validate_refund_amount(body.amount, purchase_row.amount).map_err(ApiError::bad_request)?;

    // Gateway first: if Stripe is configured and the purchase carries a
    // payment intent, issue the refund there before recording it.
    let mut stripe_refund_id = None;
    if let (Some(client), Some(intent_id)) = (
        state.stripe_client.as_ref(),
        purchase_row.stripe_payment_intent_id.as_deref(),
    ) {
        let mut params = stripe::CreateRefund::new();
        params.payment_intent = Some(
            stripe::PaymentIntentId::from_str(intent_id)
                .map_err(|e| ApiError::internal(format!("Invalid payment intent id: {}", e)))?,
        );
        params.amount = Some(body.amount);
        let stripe_refund = stripe::Refund::create(client, params).await?;
        stripe_refund_id = Some(stripe_refund.id.to_string());
    }

    let now = chrono::Utc::now().naive_utc();
    let refund_row = refund::ActiveModel {
        id: Set(create_id()),
        purchase_id: Set(body.purchase_id.clone()),
        amount: Set(body.amount),
        reason: Set(body.reason),
        notes: Set(body.notes),
        stripe_refund_id: Set(stripe_refund_id),
        created_by: Set(user.sub().ok()),
        created_at: Set(now),
    };
    let created = refund_row.insert(&state.db).await?;

    // Mark the purchase refunded once the ledger reaches the full amount.
    let refunded_total: i64 = refund::Entity::find()
        .filter(refund::Column::PurchaseId.eq(&body.purchase_id))
        .all(&state.db)
        .await?
        .iter()
        .map(|r| r.amount)
        .sum();
    if refunded_total >= purchase_row.amount && purchase_row.status != PurchaseStatus::Refunded {
        let mut active = purchase_row.into_active_model();
        active.status = Set(PurchaseStatus::Refunded);
        active.updated_at = Set(now);
        active.update(&state.db).await?;
    }

    Ok(Json(created))
}
