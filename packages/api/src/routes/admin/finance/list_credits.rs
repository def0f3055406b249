use crate::{
    entity::account_credit, error::ApiError, middleware::jwt::AppUser,
    permission::global_permission::GlobalPermission, state::AppState,
};
use axum::{Extension, Json, extract::State};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Clone, Deserialize, Debug, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListCreditsQuery {
    pub user_id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/admin/credits",
    tag = "admin",
    params(ListCreditsQuery),
    responses(
        (status = 200, description = "Credit ledger entries, newest first"),
        (status = 403, description = "Forbidden")
    )
)]
#[tracing::instrument(name = "GET /admin/credits", skip(state, user))]
pub async fn list_credits(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    axum::extract::Query(query): axum::extract::Query<ListCreditsQuery>,
) -> Result<Json<Vec<account_credit::Model>>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ManageFinance)
        .await?;

    let mut select = account_credit::Entity::find().order_by_desc(account_credit::Column::CreatedAt);
    if let Some(user_id) = &query.user_id {
        select = select.filter(account_credit::Column::UserId.eq(user_id));
    }

    let credits = select.all(&state.db).await?;
    Ok(Json(credits))
}
