//! Role storage routes. Permissions are bitflags mirroring
//! `GlobalPermission`; nothing here enforces them.

pub mod create_role;
pub mod delete_role;
pub mod list_roles;
pub mod update_role;
