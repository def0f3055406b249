use crate::{
    entity::{purchase, sea_orm_active_enums::PurchaseStatus},
    error::ApiError,
    middleware::jwt::AppUser,
    permission::global_permission::GlobalPermission,
    state::AppState,
};
use axum::{Extension, Json, extract::State};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ListPurchasesResponse {
    pub purchases: Vec<purchase::Model>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub has_more: bool,
}

#[derive(Clone, Deserialize, Debug, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListPurchasesQuery {
    pub user_id: Option<String>,
    pub status: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[utoipa::path(
    get,
    path = "/admin/purchases",
    tag = "admin",
    params(ListPurchasesQuery),
    responses(
        (status = 200, description = "Paged purchases, newest first"),
        (status = 400, description = "Invalid status filter")
    )
)]
#[tracing::instrument(name = "GET /admin/purchases", skip(state, user))]
pub async fn list_purchases(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    axum::extract::Query(query): axum::extract::Query<ListPurchasesQuery>,
) -> Result<Json<ListPurchasesResponse>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageFinance)
        .await?;

    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(25).min(100);

    let mut select = purchase::Entity::find().order_by_desc(purchase::Column::CreatedAt);

    if let Some(user_id) = &query.user_id {
        select = select.filter(purchase::Column::UserId.eq(user_id));
    }
    if let Some(status_filter) = &query.status {
        let status = match status_filter.to_lowercase().as_str() {
            "pending" => PurchaseStatus::Pending,
            "completed" => PurchaseStatus::Completed,
            "refunded" => PurchaseStatus::Refunded,
            "failed" => PurchaseStatus::Failed,
            _ => return Err(ApiError::bad_request("Invalid status filter".to_string())),
        };
        select = select.filter(purchase::Column::Status.eq(status));
    }

    let total = select.clone().count(&state.db).await?;
    let purchases = select
        .paginate(&state.db, limit)
        .fetch_page(page - 1)
        .await?;

    let has_more = (page * limit) < total;

    Ok(Json(ListPurchasesResponse {
        purchases,
        total,
        page,
        limit,
        has_more,
    }))
}
