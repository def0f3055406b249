//! `SeaORM` Entity for signed account-credit ledger entries
//!
//! Positive amounts are credits, negative amounts are debits. The admin
//! surface only authors positive entries; debits stay representable for
//! the learner-side redemption flow.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(schema_name = "public", table_name = "AccountCredit")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,
    #[sea_orm(column_name = "userId", column_type = "Text")]
    pub user_id: String,
    /// Signed amount in cents
    pub amount: i64,
    #[sea_orm(column_name = "creditType")]
    pub credit_type: super::sea_orm_active_enums::CreditType,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_name = "purchaseId", column_type = "Text", nullable)]
    pub purchase_id: Option<String>,
    #[sea_orm(column_name = "enrollmentId", column_type = "Text", nullable)]
    pub enrollment_id: Option<String>,
    #[sea_orm(column_name = "createdBy", column_type = "Text", nullable)]
    pub created_by: Option<String>,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::purchase::Entity",
        from = "Column::PurchaseId",
        to = "super::purchase::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Purchase,
    #[sea_orm(
        belongs_to = "super::enrollment::Entity",
        from = "Column::EnrollmentId",
        to = "super::enrollment::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Enrollment,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
