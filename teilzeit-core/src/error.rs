//! Error types for Teilzeit core.

use std::{error::Error, fmt, io};

/// Error type for Teilzeit core operations.
///
/// Domain outcomes such as a rejected plan are *not* errors; they are
/// reported on [`crate::DurationResult`]. This type covers adapter-level
/// faults only.
#[derive(Debug)]
pub enum TeilzeitError {
    /// An underlying I/O error.
    Io(io::Error),
    /// A JSON serialization or deserialization error.
    Json(serde_json::Error),
    /// A school degree identifier not present in the catalog.
    UnknownDegree(String),
    /// A catch-all error with a message.
    Other(String),
}

impl fmt::Display for TeilzeitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::Json(err) => write!(f, "json error: {err}"),
            Self::UnknownDegree(id) => write!(f, "unknown school degree: {id}"),
            Self::Other(message) => write!(f, "{message}"),
        }
    }
}

impl Error for TeilzeitError {}

impl From<io::Error> for TeilzeitError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for TeilzeitError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Convenience result type for Teilzeit core.
pub type Result<T> = std::result::Result<T, TeilzeitError>;

#[cfg(test)]
mod tests {
    use super::TeilzeitError;
    use std::io;

    #[test]
    fn io_error_formats_message() {
        let error = TeilzeitError::Io(io::Error::new(io::ErrorKind::Other, "boom"));
        assert_eq!(format!("{error}"), "io error: boom");
    }

    #[test]
    fn unknown_degree_formats_identifier() {
        let error = TeilzeitError::UnknownDegree("abitur2".to_string());
        assert_eq!(format!("{error}"), "unknown school degree: abitur2");
    }

    #[test]
    fn other_error_formats_message() {
        let error = TeilzeitError::Other("plan failed".to_string());
        assert_eq!(format!("{error}"), "plan failed");
    }

    #[test]
    fn from_io_error_maps_variant() {
        let error: TeilzeitError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        match error {
            TeilzeitError::Io(inner) => {
                assert_eq!(inner.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected Io variant, got {other:?}"),
        }
    }
}
