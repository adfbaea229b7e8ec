//! Persistence queries for the booking directory
//!
//! Every write runs inside its own transaction. On failure the transaction
//! is rolled back before the error is returned; a transaction dropped
//! without commit is rolled back as well.

pub mod artists;
pub mod seed;
pub mod shows;
pub mod venues;

use fyyur_common::Result;
use sqlx::{Sqlite, Transaction};
use tracing::warn;

/// Roll back `tx` and return `err`
///
/// A failed rollback is logged; the original error is what the caller sees.
pub(crate) async fn rollback<T>(tx: Transaction<'_, Sqlite>, err: fyyur_common::Error) -> Result<T> {
    warn!("Rolling back transaction: {}", err);
    if let Err(rollback_err) = tx.rollback().await {
        warn!("Rollback failed: {}", rollback_err);
    }
    Err(err)
}

/// Case-insensitive substring test used by name search
pub(crate) fn name_matches(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

/// JSON array of ids, bound to `json_each(?)` for `IN` lists
pub(crate) fn id_list(ids: &[i64]) -> String {
    serde_json::Value::from(ids.to_vec()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_matches_ignores_case() {
        assert!(name_matches("The Musical Hop", "hop"));
        assert!(name_matches("The Musical Hop", "MUSIC"));
        assert!(name_matches("Café Müller", "MÜLLER"));
        assert!(!name_matches("Park Square Live Music & Coffee", "Hop"));
    }

    #[test]
    fn test_name_matches_treats_wildcards_literally() {
        assert!(!name_matches("The Wild Sax Band", "%"));
        assert!(name_matches("100% Jazz", "0%"));
        assert!(name_matches("Anything", ""));
    }

    #[test]
    fn test_id_list_is_json_array() {
        assert_eq!(id_list(&[3, 1, 2]), "[3,1,2]");
        assert_eq!(id_list(&[]), "[]");
    }
}
