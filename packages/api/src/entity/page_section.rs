//! `SeaORM` Entity for ordered page sections

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(schema_name = "public", table_name = "PageSection")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,
    #[sea_orm(column_name = "pageId", column_type = "Text")]
    pub page_id: String,
    #[sea_orm(column_name = "sectionType")]
    pub section_type: super::sea_orm_active_enums::SectionType,
    #[sea_orm(column_type = "Text", nullable)]
    pub title: Option<String>,
    #[sea_orm(column_name = "sortOrder", default_value = 0)]
    pub sort_order: i32,
    /// Hide toggle, not deletion
    #[sea_orm(column_name = "isVisible")]
    pub is_visible: bool,
    /// Section-type specific settings (free-form)
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub config: Option<Json>,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTime,
    #[sea_orm(column_name = "updatedAt")]
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::site_page::Entity",
        from = "Column::PageId",
        to = "super::site_page::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    SitePage,
    #[sea_orm(has_many = "super::section_block::Entity")]
    SectionBlock,
}

impl Related<super::site_page::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SitePage.def()
    }
}

impl Related<super::section_block::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SectionBlock.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
