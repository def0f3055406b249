//! String-backed enums shared across entities.
//!
//! Note: these mirror the Prisma enum definitions; regenerate via
//! sea-orm-codegen if the schema changes.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "ProductType")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    #[sea_orm(string_value = "REAL_ESTATE")]
    RealEstate,
    #[sea_orm(string_value = "INSURANCE")]
    Insurance,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "CourseState")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseState {
    #[sea_orm(string_value = "FL")]
    Fl,
    #[sea_orm(string_value = "CA")]
    Ca,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "MediaType")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaType {
    #[sea_orm(string_value = "IMAGE")]
    Image,
    #[sea_orm(string_value = "VIDEO")]
    Video,
    #[sea_orm(string_value = "DOCUMENT")]
    Document,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "SectionType")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SectionType {
    #[sea_orm(string_value = "HERO")]
    Hero,
    #[sea_orm(string_value = "TEXT")]
    Text,
    #[sea_orm(string_value = "FEATURES")]
    Features,
    #[sea_orm(string_value = "CTA")]
    Cta,
    #[sea_orm(string_value = "COLUMNS")]
    Columns,
    #[sea_orm(string_value = "GALLERY")]
    Gallery,
    #[sea_orm(string_value = "CUSTOM")]
    Custom,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "BlockType")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockType {
    #[sea_orm(string_value = "HEADING")]
    Heading,
    #[sea_orm(string_value = "TEXT")]
    Text,
    #[sea_orm(string_value = "IMAGE")]
    Image,
    #[sea_orm(string_value = "VIDEO")]
    Video,
    #[sea_orm(string_value = "BUTTON")]
    Button,
    #[sea_orm(string_value = "SPACER")]
    Spacer,
    #[sea_orm(string_value = "DIVIDER")]
    Divider,
    #[sea_orm(string_value = "HTML")]
    Html,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "BankType")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BankType {
    #[sea_orm(string_value = "UNIT_QUIZ")]
    UnitQuiz,
    #[sea_orm(string_value = "FINAL_EXAM")]
    FinalExam,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "QuestionDifficulty")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionDifficulty {
    #[sea_orm(string_value = "EASY")]
    Easy,
    #[sea_orm(string_value = "MEDIUM")]
    Medium,
    #[sea_orm(string_value = "HARD")]
    Hard,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "EnrollmentStatus")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnrollmentStatus {
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
    #[sea_orm(string_value = "EXPIRED")]
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "ProgressStatus")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProgressStatus {
    #[sea_orm(string_value = "LOCKED")]
    Locked,
    #[sea_orm(string_value = "IN_PROGRESS")]
    InProgress,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "PurchaseStatus")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PurchaseStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
    #[sea_orm(string_value = "REFUNDED")]
    Refunded,
    #[sea_orm(string_value = "FAILED")]
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "RefundReason")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefundReason {
    #[sea_orm(string_value = "REQUESTED_BY_CUSTOMER")]
    RequestedByCustomer,
    #[sea_orm(string_value = "DUPLICATE")]
    Duplicate,
    #[sea_orm(string_value = "FRAUDULENT")]
    Fraudulent,
    #[sea_orm(string_value = "COURSE_ISSUE")]
    CourseIssue,
    #[sea_orm(string_value = "OTHER")]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "CreditType")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreditType {
    #[sea_orm(string_value = "PROMOTIONAL")]
    Promotional,
    #[sea_orm(string_value = "GOODWILL")]
    Goodwill,
    #[sea_orm(string_value = "REFUND_CREDIT")]
    RefundCredit,
    #[sea_orm(string_value = "ADJUSTMENT")]
    Adjustment,
}
