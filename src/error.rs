use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A write referenced a missing row or would duplicate an answer.
    #[error("integrity violation: {0}")]
    Integrity(String),

    /// A read looked up a specifically named entity and found nothing.
    #[error("not found: {0}")]
    NotFound(String),

    /// The database file is missing at startup.
    #[error("database file not found: {}", .0.display())]
    StoreUnavailable(PathBuf),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integrity_message_includes_detail() {
        let err = Error::Integrity("category 42 does not exist".to_string());
        assert_eq!(
            err.to_string(),
            "integrity violation: category 42 does not exist"
        );
    }

    #[test]
    fn not_found_message_includes_name() {
        let err = Error::NotFound("term 'Usability'".to_string());
        assert_eq!(err.to_string(), "not found: term 'Usability'");
    }

    #[test]
    fn store_unavailable_message_includes_path() {
        let err = Error::StoreUnavailable(PathBuf::from("hci_exam_review.db"));
        assert!(err.to_string().contains("hci_exam_review.db"));
    }

    #[test]
    fn sqlite_errors_convert() {
        let err: Error = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, Error::Sqlite(_)));
    }
}
