//! `SeaORM` Entity for quiz/exam question banks
//!
//! A bank with `unit_id = NULL` is a final-exam bank. Banks hold a superset
//! of questions; `questions_per_attempt` controls how many are served per
//! learner attempt (the sampling itself happens in the learner flow).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(schema_name = "public", table_name = "QuestionBank")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,
    #[sea_orm(column_name = "courseId", column_type = "Text")]
    pub course_id: String,
    #[sea_orm(column_name = "unitId", column_type = "Text", nullable)]
    pub unit_id: Option<String>,
    #[sea_orm(column_name = "bankType")]
    pub bank_type: super::sea_orm_active_enums::BankType,
    /// Final-exam form identifier ("A"/"B"); unset on unit-quiz banks
    #[sea_orm(column_name = "examForm", column_type = "Text", nullable)]
    pub exam_form: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_name = "questionsPerAttempt", default_value = 10)]
    pub questions_per_attempt: i32,
    /// Passing score in percent
    #[sea_orm(column_name = "passingScore", default_value = 70)]
    pub passing_score: i32,
    #[sea_orm(column_name = "timeLimitMinutes", nullable)]
    pub time_limit_minutes: Option<i32>,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTime,
    #[sea_orm(column_name = "updatedAt")]
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::course_unit::Entity",
        from = "Column::UnitId",
        to = "super::course_unit::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    CourseUnit,
    #[sea_orm(has_many = "super::bank_question::Entity")]
    BankQuestion,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::course_unit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseUnit.def()
    }
}

impl Related<super::bank_question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BankQuestion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
