//! `SeaORM` Entity for bank questions

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(schema_name = "public", table_name = "BankQuestion")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,
    #[sea_orm(column_name = "bankId", column_type = "Text")]
    pub bank_id: String,
    #[sea_orm(column_type = "Text")]
    pub question: String,
    #[sea_orm(column_name = "optionA", column_type = "Text")]
    pub option_a: String,
    #[sea_orm(column_name = "optionB", column_type = "Text")]
    pub option_b: String,
    #[sea_orm(column_name = "optionC", column_type = "Text")]
    pub option_c: String,
    #[sea_orm(column_name = "optionD", column_type = "Text")]
    pub option_d: String,
    /// 0-based index into the four options
    #[sea_orm(column_name = "correctOption")]
    pub correct_option: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub explanation: Option<String>,
    pub difficulty: super::sea_orm_active_enums::QuestionDifficulty,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTime,
    #[sea_orm(column_name = "updatedAt")]
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::question_bank::Entity",
        from = "Column::BankId",
        to = "super::question_bank::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    QuestionBank,
}

impl Related<super::question_bank::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuestionBank.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// The four options in display order.
    pub fn options(&self) -> [&str; 4] {
        [
            self.option_a.as_str(),
            self.option_b.as_str(),
            self.option_c.as_str(),
            self.option_d.as_str(),
        ]
    }

    /// Letter form of the correct option ("A".."D"), if the index is valid.
    pub fn correct_letter(&self) -> Option<char> {
        match self.correct_option {
            0 => Some('A'),
            1 => Some('B'),
            2 => Some('C'),
            3 => Some('D'),
            _ => None,
        }
    }
}
