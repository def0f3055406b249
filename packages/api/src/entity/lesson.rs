//! `SeaORM` Entity for lessons

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Placeholder body for lessons whose content has not been authored yet.
pub const CONTENT_PLACEHOLDER: &str = "Content for this lesson is being developed";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(schema_name = "public", table_name = "Lesson")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,
    #[sea_orm(column_name = "unitId", column_type = "Text")]
    pub unit_id: String,
    /// 1-based display ordinal, append-only (same rule as unit_number)
    #[sea_orm(column_name = "lessonNumber")]
    pub lesson_number: i32,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_name = "videoUrl", column_type = "Text", nullable)]
    pub video_url: Option<String>,
    #[sea_orm(column_name = "durationMinutes", nullable)]
    pub duration_minutes: Option<i32>,
    /// Rich HTML body
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTime,
    #[sea_orm(column_name = "updatedAt")]
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course_unit::Entity",
        from = "Column::UnitId",
        to = "super::course_unit::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    CourseUnit,
    #[sea_orm(has_many = "super::lesson_progress::Entity")]
    LessonProgress,
}

impl Related<super::course_unit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseUnit.def()
    }
}

impl Related<super::lesson_progress::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LessonProgress.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
