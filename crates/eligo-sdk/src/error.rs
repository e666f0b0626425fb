//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Row source failed after its internal retries
    #[error("Repository error: {0}")]
    Repository(#[from] eligo_repository::RepositoryError),

    /// Rule rows violate a structural invariant; retrying never helps
    #[error("Assembly error: {0}")]
    Assembly(#[from] eligo_core::AssemblyError),

    /// Evaluation engine failed
    #[error("Runtime error: {0}")]
    Runtime(#[from] eligo_runtime::RuntimeError),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

#[cfg(test)]
mod tests {
    use super::*;
    use eligo_core::AssemblyError;
    use eligo_repository::RepositoryError;

    #[test]
    fn test_config_error() {
        let error = SdkError::Config("repository is required".to_string());
        assert!(error.to_string().contains("Configuration error"));
        assert!(error.to_string().contains("repository is required"));
    }

    #[test]
    fn test_repository_error_conversion() {
        let error: SdkError = RepositoryError::Unavailable("down".to_string()).into();
        assert!(error.to_string().contains("Repository error"));
        assert!(error.to_string().contains("down"));
    }

    #[test]
    fn test_assembly_error_conversion() {
        let error: SdkError = AssemblyError::DuplicateRuleName {
            name: "A".to_string(),
        }
        .into();
        assert!(error.to_string().contains("Assembly error"));
        assert!(error.to_string().contains("'A'"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SdkError>();
    }
}
