//! Page builder routes: site pages, their ordered sections, and the ordered
//! blocks inside each section.
//!
//! Reordering accepts the full ordered id list in one call. The id set must
//! match the existing children exactly; sort_order is then rewritten 0..n-1
//! in a single transaction.

use std::collections::HashSet;

pub mod create_block;
pub mod create_page;
pub mod create_section;
pub mod delete_block;
pub mod delete_page;
pub mod delete_section;
pub mod get_page;
pub mod list_blocks;
pub mod list_pages;
pub mod list_sections;
pub mod reorder_blocks;
pub mod reorder_sections;
pub mod update_block;
pub mod update_page;
pub mod update_section;

/// Check a requested ordering against the current children. The request
/// must be a permutation of the existing ids: nothing missing, nothing
/// extra, no duplicates.
pub(crate) fn validate_reorder(existing: &[String], requested: &[String]) -> Result<(), String> {
    if requested.len() != existing.len() {
        return Err(format!(
            "Expected {} ids, got {}",
            existing.len(),
            requested.len()
        ));
    }
    let unique: HashSet<&String> = requested.iter().collect();
    if unique.len() != requested.len() {
        return Err("Duplicate ids in reorder request".to_string());
    }
    let known: HashSet<&String> = existing.iter().collect();
    for id in requested {
        if !known.contains(id) {
            return Err(format!("Unknown id {} in reorder request", id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn accepts_a_permutation() {
        assert!(validate_reorder(&ids(&["a", "b", "c"]), &ids(&["c", "a", "b"])).is_ok());
    }

    #[test]
    fn rejects_missing_and_extra_ids() {
        assert!(validate_reorder(&ids(&["a", "b"]), &ids(&["a"])).is_err());
        assert!(validate_reorder(&ids(&["a", "b"]), &ids(&["a", "x"])).is_err());
    }

    #[test]
    fn rejects_duplicates() {
        assert!(validate_reorder(&ids(&["a", "b"]), &ids(&["a", "a"])).is_err());
    }
}
