use crate::{
    entity::{account_credit, purchase, refund, user},
    error::ApiError,
    middleware::jwt::AppUser,
    not_found,
    permission::global_permission::GlobalPermission,
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, TransactionTrait};
use serde::Serialize;

use super::summarize_ledgers;

#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserFinancialsResponse {
    pub user: user::Model,
    pub total_spent: i64,
    pub total_refunded: i64,
    pub credit_balance: i64,
    pub purchases: Vec<purchase::Model>,
    pub refunds: Vec<refund::Model>,
    pub credits: Vec<account_credit::Model>,
}

/// Totals are derived by summing the three ledgers, read inside a single
/// transaction so they are consistent with the rows returned alongside.
#[utoipa::path(
    get,
    path = "/admin/users/{user_id}/financial",
    tag = "admin",
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Ledger rows plus derived totals"),
        (status = 404, description = "User not found")
    )
)]
#[tracing::instrument(name = "GET /admin/users/{user_id}/financial", skip(state, user))]
pub async fn user_financials(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(user_id): Path<String>,
) -> Result<Json<UserFinancialsResponse>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageFinance)
        .await?;

    let user_id_tx = user_id.clone();
    let (account, purchases, refunds, credits) = state
        .db
        .transaction::<_, (
            user::Model,
            Vec<purchase::Model>,
            Vec<refund::Model>,
            Vec<account_credit::Model>,
        ), ApiError>(move |txn| {
            Box::pin(async move {
                let account = user::Entity::find_by_id(&user_id_tx)
                    .one(txn)
                    .await?
                    .ok_or_else(|| not_found!("User {} not found", user_id_tx))?;

                let purchases = purchase::Entity::find()
                    .filter(purchase::Column::UserId.eq(&user_id_tx))
                    .order_by_desc(purchase::Column::CreatedAt)
                    .all(txn)
                    .await?;

                let purchase_ids: Vec<String> =
                    purchases.iter().map(|p| p.id.clone()).collect();
                let refunds = if purchase_ids.is_empty() {
                    Vec::new()
                } else {
                    refund::Entity::find()
                        .filter(refund::Column::PurchaseId.is_in(purchase_ids))
                        .order_by_desc(refund::Column::CreatedAt)
                        .all(txn)
                        .await?
                };

                let credits = account_credit::Entity::find()
                    .filter(account_credit::Column::UserId.eq(&user_id_tx))
                    .order_by_desc(account_credit::Column::CreatedAt)
                    .all(txn)
                    .await?;

                Ok((account, purchases, refunds, credits))
            })
        })
        .await?;

    let totals = summarize_ledgers(&purchases, &refunds, &credits);

    Ok(Json(UserFinancialsResponse {
        user: account,
        total_spent: totals.total_spent,
        total_refunded: totals.total_refunded,
        credit_balance: totals.credit_balance,
        purchases,
        refunds,
        credits,
    }))
}
