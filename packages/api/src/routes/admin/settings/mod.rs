//! Key/value system-setting routes. Storage only.

pub mod delete_setting;
pub mod list_settings;
pub mod upsert_setting;
