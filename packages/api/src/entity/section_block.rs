//! `SeaORM` Entity for section content blocks
//!
//! The row stores the superset of per-type fields; `block_type` determines
//! which of them are meaningful (image → media_url/alt_text, button →
//! link_url, heading/text/html → content).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(schema_name = "public", table_name = "SectionBlock")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,
    #[sea_orm(column_name = "sectionId", column_type = "Text")]
    pub section_id: String,
    #[sea_orm(column_name = "blockType")]
    pub block_type: super::sea_orm_active_enums::BlockType,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    #[sea_orm(column_name = "mediaUrl", column_type = "Text", nullable)]
    pub media_url: Option<String>,
    #[sea_orm(column_name = "altText", column_type = "Text", nullable)]
    pub alt_text: Option<String>,
    #[sea_orm(column_name = "linkUrl", column_type = "Text", nullable)]
    pub link_url: Option<String>,
    #[sea_orm(column_name = "sortOrder", default_value = 0)]
    pub sort_order: i32,
    #[sea_orm(column_name = "isVisible")]
    pub is_visible: bool,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTime,
    #[sea_orm(column_name = "updatedAt")]
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::page_section::Entity",
        from = "Column::SectionId",
        to = "super::page_section::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    PageSection,
}

impl Related<super::page_section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PageSection.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
