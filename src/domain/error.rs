use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// The remote source could not be reached, or answered with a failure.
    #[error("Source unavailable: {message}")]
    SourceUnavailable { message: String },

    /// A raw record could not be turned into an entity.
    #[error("Formatting error: {message}")]
    Formatting { message: String },

    /// The snapshot slot could not be read or written.
    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn source_unavailable(message: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            message: message.into(),
        }
    }

    pub fn formatting(message: impl Into<String>) -> Self {
        Self::Formatting {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_unavailable_error() {
        let error = DomainError::source_unavailable("connection refused");
        assert_eq!(error.to_string(), "Source unavailable: connection refused");
    }

    #[test]
    fn test_formatting_error() {
        let error = DomainError::formatting("bad date_of_birth");
        assert_eq!(error.to_string(), "Formatting error: bad date_of_birth");
    }

    #[test]
    fn test_storage_error() {
        let error = DomainError::storage("slot unreadable");
        assert_eq!(error.to_string(), "Storage error: slot unreadable");
    }
}
