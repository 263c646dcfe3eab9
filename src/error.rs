use thiserror::Error;

/// Unified error type for version-manager operations
#[derive(Error, Debug)]
pub enum VersionManagerError {
    #[error("Format error: {0}")]
    Format(String),

    #[error("Command failed: {0}")]
    Command(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in version-manager
pub type Result<T> = std::result::Result<T, VersionManagerError>;

impl VersionManagerError {
    /// Create a format error with context
    pub fn format(msg: impl Into<String>) -> Self {
        VersionManagerError::Format(msg.into())
    }

    /// Create a command error with context
    pub fn command(msg: impl Into<String>) -> Self {
        VersionManagerError::Command(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionManagerError::Config(msg.into())
    }

    /// Create a template error with context
    pub fn template(msg: impl Into<String>) -> Self {
        VersionManagerError::Template(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VersionManagerError::format("bad stage revision");
        assert_eq!(err.to_string(), "Format error: bad stage revision");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: VersionManagerError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(VersionManagerError::command("test")
            .to_string()
            .contains("Command"));
        assert!(VersionManagerError::template("test")
            .to_string()
            .contains("Template"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (VersionManagerError::format("x"), "Format error"),
            (VersionManagerError::command("x"), "Command failed"),
            (VersionManagerError::config("x"), "Configuration error"),
            (VersionManagerError::template("x"), "Template error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_empty_messages() {
        let errors = vec![
            VersionManagerError::format(""),
            VersionManagerError::command(""),
            VersionManagerError::config(""),
        ];

        for err in errors {
            // Even with an empty message, the error type prefix should be present
            assert!(!err.to_string().is_empty());
        }
    }
}
