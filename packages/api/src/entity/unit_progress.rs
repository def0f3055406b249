//! `SeaORM` Entity for per-enrollment unit completion state

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(schema_name = "public", table_name = "UnitProgress")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,
    #[sea_orm(column_name = "enrollmentId", column_type = "Text")]
    pub enrollment_id: String,
    #[sea_orm(column_name = "unitId", column_type = "Text")]
    pub unit_id: String,
    pub status: super::sea_orm_active_enums::ProgressStatus,
    pub completed: bool,
    #[sea_orm(column_name = "quizPassed")]
    pub quiz_passed: bool,
    #[sea_orm(column_name = "quizScore", nullable)]
    pub quiz_score: Option<i32>,
    #[sea_orm(column_name = "completedAt", nullable)]
    pub completed_at: Option<DateTime>,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTime,
    #[sea_orm(column_name = "updatedAt")]
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::enrollment::Entity",
        from = "Column::EnrollmentId",
        to = "super::enrollment::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Enrollment,
    #[sea_orm(
        belongs_to = "super::course_unit::Entity",
        from = "Column::UnitId",
        to = "super::course_unit::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    CourseUnit,
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl Related<super::course_unit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseUnit.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
