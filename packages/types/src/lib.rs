//! Shared primitives for the licensure workspace.
//!
//! Re-exports the error and json stack so downstream crates depend on a
//! single source, plus the collision-resistant id generator used for every
//! primary key.

pub use anyhow::{Context, Error, Result, anyhow, bail};

pub use serde_json::Value;

pub mod json {
    pub use serde_json::{
        Map, Number, Value, from_slice, from_str, from_value, json, to_string, to_string_pretty,
        to_value, to_vec,
    };
}

/// Generate a new cuid2 identifier.
pub fn create_id() -> String {
    cuid2::create_id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_url_safe() {
        let a = create_id();
        let b = create_id();
        assert_ne!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
