use crate::{
    entity::refund, error::ApiError, middleware::jwt::AppUser,
    permission::global_permission::GlobalPermission, state::AppState,
};
use axum::{Extension, Json, extract::State};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Clone, Deserialize, Debug, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListRefundsQuery {
    pub purchase_id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/admin/refunds",
    tag = "admin",
    params(ListRefundsQuery),
    responses(
        (status = 200, description = "Refunds, newest first"),
        (status = 403, description = "Forbidden")
    )
)]
#[tracing::instrument(name = "GET /admin/refunds", skip(state, user))]
pub async fn list_refunds(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    axum::extract::Query(query): axum::extract::Query<ListRefundsQuery>,
) -> Result<Json<Vec<refund::Model>>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageFinance)
        .await?;

    let mut select = refund::Entity::find().order_by_desc(refund::Column::CreatedAt);
    if let Some(purchase_id) = &query.purchase_id {
        select = select.filter(refund::Column::PurchaseId.eq(purchase_id));
    }

    let refunds = select.all(&state.db).await?;
    Ok(Json(refunds))
}
