//! `SeaORM` Entity for media library assets

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(schema_name = "public", table_name = "MediaAsset")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,
    #[sea_orm(column_name = "fileName", column_type = "Text")]
    pub file_name: String,
    #[sea_orm(column_name = "fileUrl", column_type = "Text")]
    pub file_url: String,
    /// Inferred from the URL when not supplied explicitly
    #[sea_orm(column_name = "fileType")]
    pub file_type: super::sea_orm_active_enums::MediaType,
    #[sea_orm(column_name = "mimeType", column_type = "Text", nullable)]
    pub mime_type: Option<String>,
    #[sea_orm(column_name = "fileSize", nullable)]
    pub file_size: Option<i64>,
    #[sea_orm(column_name = "thumbnailUrl", column_type = "Text", nullable)]
    pub thumbnail_url: Option<String>,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
