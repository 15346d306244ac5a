//! Error types for rdchat.

use thiserror::Error;

/// Errors raised while loading the QnA data file.
///
/// Matching itself never fails: input with no matching entry gets the
/// configured fallback text, which is the widget's only user-visible
/// failure mode.
#[derive(Debug, Error)]
pub enum QnaError {
    #[error("failed to read QnA file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse QnA data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("QnA list is empty")]
    Empty,
}

/// Result type alias for rdchat operations.
pub type RdchatResult<T> = Result<T, QnaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = QnaError::Io {
            path: "faq.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("faq.json"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_parse_error_display() {
        let json_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err: QnaError = json_err.into();
        assert!(format!("{}", err).contains("failed to parse"));
    }

    #[test]
    fn test_empty_error_display() {
        assert!(format!("{}", QnaError::Empty).contains("empty"));
    }
}
