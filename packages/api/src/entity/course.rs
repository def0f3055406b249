//! `SeaORM` Entity for continuing-education courses

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(schema_name = "public", table_name = "Course")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_name = "productType")]
    pub product_type: super::sea_orm_active_enums::ProductType,
    pub state: super::sea_orm_active_enums::CourseState,
    #[sea_orm(column_name = "licenseType", column_type = "Text", nullable)]
    pub license_type: Option<String>,
    #[sea_orm(column_name = "requirementCycleType", column_type = "Text", nullable)]
    pub requirement_cycle_type: Option<String>,
    #[sea_orm(column_name = "requirementBucket", column_type = "Text", nullable)]
    pub requirement_bucket: Option<String>,
    /// CE hours this course counts toward
    #[sea_orm(column_name = "hoursRequired", default_value = 0)]
    pub hours_required: i32,
    #[sea_orm(column_name = "deliveryMethod", column_type = "Text", nullable)]
    pub delivery_method: Option<String>,
    #[sea_orm(column_name = "difficultyLevel", column_type = "Text", nullable)]
    pub difficulty_level: Option<String>,
    /// Price in cents
    #[sea_orm(default_value = 0)]
    pub price: i64,
    /// Unique human-readable product code
    #[sea_orm(column_type = "Text", unique)]
    pub sku: String,
    #[sea_orm(column_name = "renewalApplicable")]
    pub renewal_applicable: bool,
    #[sea_orm(column_name = "renewalPeriodYears", nullable)]
    pub renewal_period_years: Option<i32>,
    #[sea_orm(column_name = "expirationMonths", nullable)]
    pub expiration_months: Option<i32>,
    /// State-assigned provider number (e.g. Florida DBPR)
    #[sea_orm(column_name = "providerNumber", column_type = "Text", nullable)]
    pub provider_number: Option<String>,
    #[sea_orm(column_name = "courseOfferingNumber", column_type = "Text", nullable)]
    pub course_offering_number: Option<String>,
    #[sea_orm(column_name = "instructorName", column_type = "Text", nullable)]
    pub instructor_name: Option<String>,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTime,
    #[sea_orm(column_name = "updatedAt")]
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_unit::Entity")]
    CourseUnit,
    #[sea_orm(has_many = "super::question_bank::Entity")]
    QuestionBank,
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollment,
    #[sea_orm(has_many = "super::purchase::Entity")]
    Purchase,
}

impl Related<super::course_unit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseUnit.def()
    }
}

impl Related<super::question_bank::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuestionBank.def()
    }
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl Related<super::purchase::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Purchase.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
